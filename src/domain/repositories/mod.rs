//! Repository and store trait definitions for the domain layer.
//!
//! These traits abstract data access so that services and the admission gate
//! can be tested against `mockall` doubles and wired to concrete
//! implementations from `crate::infrastructure` at startup.
//!
//! # Available Traits
//!
//! - [`GamesRepository`] - Board game catalogue CRUD
//! - [`ThrottleStore`] - Per-credential last-access timestamps

pub mod games_repository;
pub mod throttle_store;

pub use games_repository::GamesRepository;
pub use throttle_store::ThrottleStore;

#[cfg(test)]
pub use games_repository::MockGamesRepository;
#[cfg(test)]
pub use throttle_store::MockThrottleStore;
