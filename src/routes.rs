//! Top-level router configuration.
//!
//! # Route Structure
//!
//! - `GET  /health`      - Health check (never throttled)
//! - `/api/games/*`      - Games resource (throttled per bearer credential)
//!
//! Unknown paths answer `404` and known paths with the wrong method answer
//! `405`, both as error envelopes.
//!
//! # Middleware (outermost first)
//!
//! 1. **Path normalization** - Trailing slash handling
//! 2. **Fault boundary** - Panics become a 500 error envelope
//! 3. **Tracing** - Structured request/response logging
//! 4. **Filter chain** - Admission gate; throttled requests stop here with 429

use crate::api;
use crate::api::handlers::health_handler;
use crate::api::middleware::filter_chain::{self, FilterChain};
use crate::api::middleware::{fault, tracing};
use crate::error::AppError;
use crate::state::AppState;
use axum::routing::get;
use axum::{Router, middleware};
use std::sync::Arc;
use tower::Layer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};

/// Constructs the routed application with all middleware except path
/// normalization.
///
/// The request filter chain is built from the state: currently the admission
/// gate is its only member.
pub fn api_router(state: AppState) -> Router {
    let chain = Arc::new(FilterChain::new().with(state.admission_gate.clone()));

    Router::new()
        .route("/health", get(health_handler))
        .merge(api::routes::game_routes())
        .fallback(not_found_fallback)
        .method_not_allowed_fallback(method_not_allowed_fallback)
        .with_state(state)
        .layer(middleware::from_fn_with_state(chain, filter_chain::layer))
        .layer(tracing::layer())
        .layer(fault::layer())
}

async fn not_found_fallback() -> AppError {
    AppError::not_found("Resource not found")
}

async fn method_not_allowed_fallback() -> AppError {
    AppError::method_not_allowed("Method not allowed")
}

/// Constructs the application router with all routes and middleware.
pub fn app_router(state: AppState) -> NormalizePath<Router> {
    NormalizePathLayer::trim_trailing_slash().layer(api_router(state))
}
