//! Infrastructure layer: concrete implementations of domain traits.
//!
//! # Modules
//!
//! - [`persistence`] - Games catalogue storage
//! - [`throttle`] - Throttle store implementations

pub mod persistence;
pub mod throttle;
