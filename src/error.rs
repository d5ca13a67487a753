//! Application error type and its HTTP rendering.
//!
//! Every error leaves the service as a result envelope (see
//! [`crate::api::dto::envelope`]). Expected failures carry their own message;
//! internal faults are reported with the message of the innermost cause only.

use std::error::Error as StdError;

use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};

use crate::api::dto::envelope::ApiResult;

/// Boxed error used as the cause of an internal fault.
pub type BoxError = Box<dyn StdError + Send + Sync + 'static>;

#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    MethodNotAllowed(String),

    #[error("{0}")]
    Throttled(String),

    #[error("Internal server error")]
    Internal(#[source] BoxError),
}

impl AppError {
    pub fn bad_request(message: impl Into<String>) -> Self {
        Self::Validation(message.into())
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound(message.into())
    }

    pub fn method_not_allowed(message: impl Into<String>) -> Self {
        Self::MethodNotAllowed(message.into())
    }

    pub fn throttled(message: impl Into<String>) -> Self {
        Self::Throttled(message.into())
    }

    pub fn internal(cause: impl Into<BoxError>) -> Self {
        Self::Internal(cause.into())
    }

    /// HTTP status the error is rendered with.
    pub fn status(&self) -> StatusCode {
        match self {
            AppError::Validation(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::MethodNotAllowed(_) => StatusCode::METHOD_NOT_ALLOWED,
            AppError::Throttled(_) => StatusCode::TOO_MANY_REQUESTS,
            AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status();

        let body = match &self {
            AppError::Internal(_) => {
                let body = ApiResult::<()>::wrap_exception(&self);
                tracing::error!(error = ?self, "Unhandled fault: {}", body.errors().join("; "));
                metrics::counter!("http_faults_total").increment(1);
                body
            }
            _ => ApiResult::<()>::wrap_error(self.to_string()),
        };

        (status, Json(body)).into_response()
    }
}
