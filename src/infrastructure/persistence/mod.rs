//! Repository implementations.
//!
//! # Repositories
//!
//! - [`InMemoryGamesRepository`] - Process-local games catalogue loaded from a JSON seed

pub mod memory_games_repository;

pub use memory_games_repository::{InMemoryGamesRepository, SeedError};
