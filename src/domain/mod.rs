//! Domain layer containing business entities and contracts.
//!
//! # Architecture
//!
//! - [`entities`] - Core business data structures
//! - [`repositories`] - Data access and throttle store trait definitions
//! - [`clock`] - Injectable monotonic time source
//! - [`throttle_sweeper`] - Background eviction of expired throttle entries
//!
//! # Design Principles
//!
//! - Domain layer has no dependencies on infrastructure or presentation layers
//! - Traits define contracts implemented by the infrastructure layer
//! - Business logic is encapsulated in services (see [`crate::application::services`])

pub mod clock;
pub mod entities;
pub mod repositories;
pub mod throttle_sweeper;
