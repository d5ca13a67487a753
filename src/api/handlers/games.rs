//! Handlers for the games resource.
//!
//! Every route here lives under `/api/games` and therefore passes the
//! admission gate before reaching the handler.

use axum::{
    Json,
    extract::{
        Path, Query, State,
        rejection::{JsonRejection, QueryRejection},
    },
    http::{StatusCode, header},
};

use crate::api::dto::envelope::{ApiResult, PagedApiResult};
use crate::api::dto::game::{GameInput, GameItem};
use crate::api::dto::pagination::PaginationParams;
use crate::error::AppError;
use crate::state::AppState;

/// Lists one page of the catalogue.
///
/// # Endpoint
///
/// `GET /api/games`
///
/// # Query Parameters
///
/// - `page` (optional): Page number (default: 1)
/// - `size` or `pageSize` (optional): Items per page (default: 10)
///
/// # Errors
///
/// Returns 400 if pagination parameters are invalid.
pub async fn list_games_handler(
    State(state): State<AppState>,
    params: Result<Query<PaginationParams>, QueryRejection>,
) -> Result<Json<PagedApiResult<GameItem>>, AppError> {
    let Query(params) = params.map_err(|e| AppError::bad_request(e.body_text()))?;
    let (page, page_size) = params.validate().map_err(AppError::bad_request)?;

    tracing::debug!(page, page_size, "Getting one page of games");

    let games = state.game_service.list_page(page, page_size).await?;

    Ok(Json(PagedApiResult::wrap_paged(games.map(GameItem::from))))
}

/// Retrieves a single game.
///
/// # Endpoint
///
/// `GET /api/games/{id}`
///
/// # Errors
///
/// Returns 404 if the game does not exist.
pub async fn get_game_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResult<GameItem>>, AppError> {
    tracing::debug!("Getting a game with id {}", id);

    let game = state.game_service.get_game(&id).await?;

    Ok(Json(ApiResult::wrap_data(game.into())))
}

/// Creates a new game.
///
/// # Endpoint
///
/// `POST /api/games`
///
/// Responds with `201 Created` and a `Location` header pointing at the new game.
///
/// # Errors
///
/// Returns 400 if the body is not a valid game document.
pub async fn create_game_handler(
    State(state): State<AppState>,
    payload: Result<Json<GameInput>, JsonRejection>,
) -> Result<(StatusCode, [(header::HeaderName, String); 1], Json<ApiResult<GameItem>>), AppError>
{
    let Json(payload) = payload.map_err(|e| AppError::bad_request(e.body_text()))?;

    tracing::debug!("Creating a new game with title \"{}\"", payload.title);

    let game = state.game_service.create_game(payload.into()).await?;
    let location = format!("/api/games/{}", game.id);

    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(ApiResult::wrap_data(game.into())),
    ))
}

/// Replaces a game.
///
/// # Endpoint
///
/// `PUT /api/games/{id}`
///
/// # Errors
///
/// Returns 400 if the body is not a valid game document.
/// Returns 404 if the game does not exist.
pub async fn update_game_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
    payload: Result<Json<GameInput>, JsonRejection>,
) -> Result<Json<ApiResult<GameItem>>, AppError> {
    let Json(payload) = payload.map_err(|e| AppError::bad_request(e.body_text()))?;

    tracing::debug!("Updating a game with id {}", id);

    let game = state.game_service.update_game(&id, payload.into()).await?;

    Ok(Json(ApiResult::wrap_data(game.into())))
}

/// Deletes a game.
///
/// # Endpoint
///
/// `DELETE /api/games/{id}`
///
/// # Errors
///
/// Returns 404 if the game does not exist.
pub async fn delete_game_handler(
    Path(id): Path<String>,
    State(state): State<AppState>,
) -> Result<Json<ApiResult<()>>, AppError> {
    tracing::debug!("Deleting game with id {}", id);

    state.game_service.delete_game(&id).await?;

    Ok(Json(ApiResult::empty()))
}
