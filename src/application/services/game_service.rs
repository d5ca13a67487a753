//! Games catalogue service.

use std::sync::Arc;

use crate::application::pagination::{PagedList, paginate};
use crate::domain::entities::{Game, NewGame};
use crate::domain::repositories::GamesRepository;
use crate::error::AppError;

/// Service for browsing and editing the games catalogue.
pub struct GameService<R: GamesRepository> {
    repository: Arc<R>,
}

impl<R: GamesRepository> GameService<R> {
    /// Creates a new game service.
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// Returns one page of the catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if `page` or `page_size` is 0.
    pub async fn list_page(&self, page: u32, page_size: u32) -> Result<PagedList<Game>, AppError> {
        let games = self.repository.list().await?;

        paginate(games, page, page_size).map_err(|e| AppError::bad_request(e.to_string()))
    }

    /// Retrieves a game by identifier.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the id is blank or unknown.
    pub async fn get_game(&self, id: &str) -> Result<Game, AppError> {
        if id.trim().is_empty() {
            return Err(not_found(id));
        }

        self.repository
            .find_by_id(id)
            .await?
            .ok_or_else(|| not_found(id))
    }

    pub async fn create_game(&self, input: NewGame) -> Result<Game, AppError> {
        let game = self.repository.create(input).await?;
        tracing::debug!(id = %game.id, "Created game \"{}\"", game.title);
        Ok(game)
    }

    /// Replaces the editable fields of a game.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the game does not exist.
    pub async fn update_game(&self, id: &str, input: NewGame) -> Result<Game, AppError> {
        if self.repository.find_by_id(id).await?.is_none() {
            return Err(not_found(id));
        }

        self.repository.update(id, input).await
    }

    /// Deletes a game.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if the game does not exist.
    pub async fn delete_game(&self, id: &str) -> Result<(), AppError> {
        if id.trim().is_empty() || !self.repository.delete(id).await? {
            return Err(not_found(id));
        }

        tracing::debug!(id = %id, "Deleted game");
        Ok(())
    }
}

fn not_found(id: &str) -> AppError {
    AppError::not_found(format!("Game with id '{}' not found", id))
}
