//! Outermost fault boundary.
//!
//! Handlers report failures through [`crate::error::AppError`], which already
//! renders the 500 envelope. This layer covers the remaining case: a panic
//! inside a handler or middleware. The panic is logged and answered with the
//! same error envelope.

use std::any::Any;

use axum::{
    Json,
    body::Body,
    http::{Response, StatusCode},
    response::IntoResponse,
};
use tower_http::catch_panic::CatchPanicLayer;

use crate::api::dto::envelope::ApiResult;

type PanicHandler = fn(Box<dyn Any + Send + 'static>) -> Response<Body>;

/// Creates the panic-catching layer.
///
/// # Integration
///
/// ```rust,ignore
/// let app = Router::new()
///     .nest("/api", api_routes())
///     .layer(fault::layer());
/// ```
pub fn layer() -> CatchPanicLayer<PanicHandler> {
    CatchPanicLayer::custom(handle_panic as PanicHandler)
}

fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else if let Some(s) = payload.downcast_ref::<&str>() {
        (*s).to_string()
    } else {
        "Unknown panic".to_string()
    }
}

fn handle_panic(payload: Box<dyn Any + Send + 'static>) -> Response<Body> {
    let message = panic_message(payload.as_ref());

    tracing::error!("Unhandled fault: {}", message);
    metrics::counter!("http_faults_total").increment(1);

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(ApiResult::<()>::wrap_error(message)),
    )
        .into_response()
}
