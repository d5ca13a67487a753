//! Utility functions used across the application.
//!
//! - [`code_generator`] - Random identifier generation
//! - [`credential`] - Bearer credential extraction from HTTP headers

pub mod code_generator;
pub mod credential;
