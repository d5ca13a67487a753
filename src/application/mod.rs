//! Application layer: business services and pure collection helpers.
//!
//! # Modules
//!
//! - [`services`] - Admission gate and games catalogue services
//! - [`pagination`] - Storage-independent paging engine

pub mod pagination;
pub mod services;
