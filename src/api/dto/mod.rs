//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde with camelCase field names. Every response body is a
//! result envelope from [`envelope`].

pub mod envelope;
pub mod game;
pub mod health;
pub mod pagination;
