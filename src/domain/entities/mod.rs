//! Core domain entities representing the business data model.
//!
//! Entities are plain data structures; serialization concerns live in the
//! API DTOs.
//!
//! # Entity Types
//!
//! - [`Game`] - A board game in the catalogue
//! - [`NewGame`] - Input for creating or replacing a game

pub mod game;

pub use game::{Game, NewGame};
