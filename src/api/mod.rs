//! REST API layer for HTTP request/response handling.
//!
//! This layer translates HTTP requests into service calls and wraps every
//! outcome in the uniform result envelope.
//!
//! # Modules
//!
//! - [`dto`] - Data Transfer Objects and the result envelope
//! - [`handlers`] - HTTP request handlers
//! - [`middleware`] - Filter chain, fault boundary and tracing middleware
//! - [`routes`] - Route configuration

pub mod dto;
pub mod handlers;
pub mod middleware;
pub mod routes;
