//! Handler for health check endpoint.

use axum::{Json, extract::State, http::StatusCode};

use crate::api::dto::envelope::ApiResult;
use crate::api::dto::health::{CheckStatus, HealthChecks, HealthResponse};
use crate::state::AppState;

/// Returns service health status with component checks.
///
/// # Endpoint
///
/// `GET /health`
///
/// Not under the throttled prefix, so probes are never denied.
///
/// # Response Codes
///
/// - **200 OK**: All components healthy
/// - **503 Service Unavailable**: The catalogue could not be read
///
/// # Response
///
/// ```json
/// {
///   "data": {
///     "status": "healthy",
///     "version": "0.1.0",
///     "checks": {
///       "catalogue": { "status": "ok", "message": "25 games" },
///       "throttle": { "status": "ok", "message": "3 tracked credentials, window 5s" }
///     }
///   },
///   "errors": [],
///   "isSuccess": true
/// }
/// ```
pub async fn health_handler(
    State(state): State<AppState>,
) -> (StatusCode, Json<ApiResult<HealthResponse>>) {
    let catalogue_check = check_catalogue(&state).await;
    let throttle_check = check_throttle(&state);

    let healthy = catalogue_check.status == "ok";

    let response = HealthResponse {
        status: if healthy { "healthy" } else { "degraded" }.to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
        checks: HealthChecks {
            catalogue: catalogue_check,
            throttle: throttle_check,
        },
    };

    let mut body = ApiResult::wrap_data(response);
    if healthy {
        (StatusCode::OK, Json(body))
    } else {
        body.add_error("Service degraded");
        (StatusCode::SERVICE_UNAVAILABLE, Json(body))
    }
}

/// Checks that the catalogue can be read.
async fn check_catalogue(state: &AppState) -> CheckStatus {
    match state.game_service.list_page(1, 1).await {
        Ok(page) => CheckStatus {
            status: "ok".to_string(),
            message: Some(format!("{} games", page.total_count)),
        },
        Err(e) => CheckStatus {
            status: "error".to_string(),
            message: Some(format!("Catalogue error: {}", e)),
        },
    }
}

/// Reports throttle store occupancy.
fn check_throttle(state: &AppState) -> CheckStatus {
    CheckStatus {
        status: "ok".to_string(),
        message: Some(format!(
            "{} tracked credentials, window {}s",
            state.admission_gate.tracked_credentials(),
            state.admission_gate.window().as_secs()
        )),
    }
}
