use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use axum_test::TestServer;
use board_games_api::AppError;
use board_games_api::api::middleware::fault;
use serde_json::{Value, json};

#[derive(Debug, thiserror::Error)]
#[error("connection reset by peer")]
struct SocketError;

#[derive(Debug, thiserror::Error)]
#[error("failed to load catalogue")]
struct CatalogueError(#[source] SocketError);

async fn failing_handler() -> Result<&'static str, AppError> {
    Err(AppError::internal(CatalogueError(SocketError)))
}

async fn panicking_handler() -> &'static str {
    panic!("catalogue index out of range")
}

fn server() -> TestServer {
    let app = Router::new()
        .route("/fails", get(failing_handler))
        .route("/panics", get(panicking_handler))
        .layer(fault::layer());

    TestServer::new(app).unwrap()
}

#[tokio::test]
async fn test_internal_error_reports_root_cause() {
    let response = server().get("/fails").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "data": null,
            "errors": ["connection reset by peer"],
            "isSuccess": false
        })
    );
}

#[tokio::test]
async fn test_panic_becomes_error_envelope() {
    let response = server().get("/panics").await;

    response.assert_status(StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(
        response.json::<Value>(),
        json!({
            "data": null,
            "errors": ["catalogue index out of range"],
            "isSuccess": false
        })
    );
}
