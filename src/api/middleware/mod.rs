//! HTTP middleware for request processing and protection.
//!
//! Provides the request filter chain (admission gate), the outermost fault
//! boundary, and observability middleware.

pub mod admission;
pub mod fault;
pub mod filter_chain;
pub mod tracing;
