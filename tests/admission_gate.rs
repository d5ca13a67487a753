mod common;

use axum::http::StatusCode;
use board_games_api::domain::repositories::ThrottleStore;
use serde_json::{Value, json};
use std::time::Duration;

const TOKEN: &str = "alpha-token";

fn throttled_body() -> Value {
    json!({
        "data": null,
        "errors": ["Token limit reached, operation cancelled"],
        "isSuccess": false
    })
}

#[tokio::test]
async fn test_first_request_is_admitted() {
    let app = common::make_app(common::numbered_games(3));

    let response = app
        .server
        .get("/api/games")
        .authorization_bearer(TOKEN)
        .await;

    response.assert_status_ok();
    assert_eq!(response.json::<Value>()["isSuccess"], true);
}

#[tokio::test]
async fn test_repeat_within_window_is_throttled() {
    let app = common::make_app(common::numbered_games(3));

    app.server
        .get("/api/games")
        .authorization_bearer(TOKEN)
        .await
        .assert_status_ok();

    app.clock.advance(Duration::from_secs(1));

    let response = app
        .server
        .get("/api/games")
        .authorization_bearer(TOKEN)
        .await;

    response.assert_status(StatusCode::TOO_MANY_REQUESTS);
    assert_eq!(response.json::<Value>(), throttled_body());
}

#[tokio::test]
async fn test_request_after_window_is_admitted() {
    let app = common::make_app(common::numbered_games(3));

    app.server
        .get("/api/games")
        .authorization_bearer(TOKEN)
        .await
        .assert_status_ok();

    app.clock.advance(Duration::from_secs(5));

    app.server
        .get("/api/games")
        .authorization_bearer(TOKEN)
        .await
        .assert_status_ok();
}

#[tokio::test]
async fn test_denied_request_extends_lockout() {
    let app = common::make_app(common::numbered_games(3));

    // t=0 admitted, t=4 denied, t=8 denied (only 4s since t=4), t=13 admitted
    let steps = [(0, true), (4, false), (4, false), (5, true)];

    for (advance, admitted) in steps {
        app.clock.advance(Duration::from_secs(advance));

        let response = app
            .server
            .get("/api/games")
            .authorization_bearer(TOKEN)
            .await;

        if admitted {
            response.assert_status_ok();
        } else {
            response.assert_status(StatusCode::TOO_MANY_REQUESTS);
        }
    }
}

#[tokio::test]
async fn test_credentials_are_throttled_independently() {
    let app = common::make_app(common::numbered_games(3));

    app.server
        .get("/api/games")
        .authorization_bearer("first")
        .await
        .assert_status_ok();

    app.server
        .get("/api/games")
        .authorization_bearer("second")
        .await
        .assert_status_ok();

    assert_eq!(app.store.len(), 2);
}

#[tokio::test]
async fn test_requests_without_credential_are_never_throttled() {
    let app = common::make_app(common::numbered_games(3));

    for _ in 0..5 {
        app.server.get("/api/games").await.assert_status_ok();
    }

    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_unprotected_path_is_never_throttled() {
    let app = common::make_app(common::numbered_games(3));

    for _ in 0..3 {
        app.server
            .get("/health")
            .authorization_bearer(TOKEN)
            .await
            .assert_status_ok();
    }

    assert!(app.store.is_empty());
}

#[tokio::test]
async fn test_throttled_request_does_not_reach_handler() {
    let app = common::make_app(Vec::new());

    app.server
        .get("/api/games/none")
        .authorization_bearer(TOKEN)
        .await
        .assert_status_not_found();

    let response = app
        .server
        .post("/api/games")
        .authorization_bearer(TOKEN)
        .json(&json!({ "title": "Should not be stored" }))
        .await;

    response.assert_status(StatusCode::TOO_MANY_REQUESTS);

    let listing = app.server.get("/api/games").await;
    assert_eq!(listing.json::<Value>()["totalCount"], 0);
}
