//! API route configuration.
//!
//! Every route here sits under `/api/games`, the prefix protected by the
//! admission gate (see [`crate::api::middleware::admission`]).

use crate::api::handlers::{
    create_game_handler, delete_game_handler, get_game_handler, list_games_handler,
    update_game_handler,
};
use crate::state::AppState;
use axum::{Router, routing::get};

/// Games resource routes.
///
/// # Endpoints
///
/// - `GET    /api/games`        - One page of the catalogue
/// - `POST   /api/games`        - Create a game
/// - `GET    /api/games/{id}`   - Retrieve a game
/// - `PUT    /api/games/{id}`   - Replace a game
/// - `DELETE /api/games/{id}`   - Delete a game
pub fn game_routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/games",
            get(list_games_handler).post(create_game_handler),
        )
        .route(
            "/api/games/{id}",
            get(get_game_handler)
                .put(update_game_handler)
                .delete(delete_game_handler),
        )
}
