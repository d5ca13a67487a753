//! Ordered request filters evaluated before routing.
//!
//! A [`FilterChain`] runs its filters in registration order. Each filter
//! either lets the request continue or rejects it; the first rejection ends
//! the chain and becomes the response. The axum middleware in this module
//! only drives the chain and holds no policy of its own.

use std::sync::Arc;

use axum::{
    extract::{Request, State},
    http::request::Parts,
    middleware::Next,
    response::Response,
};

use crate::error::AppError;

/// Outcome of a single filter.
#[derive(Debug)]
pub enum FilterOutcome {
    Continue,
    Reject(AppError),
}

/// A single step of the request pipeline.
pub trait RequestFilter: Send + Sync {
    /// Short name used in logs.
    fn name(&self) -> &'static str;

    fn check(&self, parts: &Parts) -> FilterOutcome;
}

/// Ordered list of request filters.
#[derive(Clone, Default)]
pub struct FilterChain {
    filters: Vec<Arc<dyn RequestFilter>>,
}

impl FilterChain {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a filter; filters run in the order they are added.
    pub fn with(mut self, filter: Arc<dyn RequestFilter>) -> Self {
        self.filters.push(filter);
        self
    }

    pub fn len(&self) -> usize {
        self.filters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.filters.is_empty()
    }

    /// Runs every filter until one rejects.
    ///
    /// # Errors
    ///
    /// Returns the rejection of the first filter that refuses the request.
    pub fn evaluate(&self, parts: &Parts) -> Result<(), AppError> {
        for filter in &self.filters {
            if let FilterOutcome::Reject(err) = filter.check(parts) {
                tracing::debug!(filter = filter.name(), path = %parts.uri.path(), "Request rejected");
                return Err(err);
            }
        }
        Ok(())
    }
}

/// Middleware entry point running the [`FilterChain`].
///
/// # Example
///
/// ```rust,ignore
/// let chain = Arc::new(FilterChain::new().with(gate));
/// let app = Router::new()
///     .route("/api/games", get(list_games_handler))
///     .layer(middleware::from_fn_with_state(chain, filter_chain::layer));
/// ```
pub async fn layer(
    State(chain): State<Arc<FilterChain>>,
    req: Request,
    next: Next,
) -> Result<Response, AppError> {
    let (parts, body) = req.into_parts();

    chain.evaluate(&parts)?;

    let req = Request::from_parts(parts, body);

    Ok(next.run(req).await)
}
