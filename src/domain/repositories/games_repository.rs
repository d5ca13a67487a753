//! Repository trait for board game data access.

use crate::domain::entities::{Game, NewGame};
use crate::error::AppError;
use async_trait::async_trait;

/// Repository interface for the games catalogue.
///
/// The catalogue is an ordered collection: [`GamesRepository::list`] returns
/// games in a stable order so pages stay consistent between requests.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryGamesRepository`] - seeded in-memory store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait GamesRepository: Send + Sync {
    /// Returns every game in catalogue order.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the backing store is unavailable.
    async fn list(&self) -> Result<Vec<Game>, AppError>;

    /// Finds a game by its identifier.
    ///
    /// # Returns
    ///
    /// - `Ok(Some(Game))` if found
    /// - `Ok(None)` if not found
    async fn find_by_id(&self, id: &str) -> Result<Option<Game>, AppError>;

    /// Stores a new game and returns it with its generated identifier.
    async fn create(&self, new_game: NewGame) -> Result<Game, AppError>;

    /// Replaces the editable fields of an existing game.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no game has the given `id`.
    async fn update(&self, id: &str, input: NewGame) -> Result<Game, AppError>;

    /// Removes a game.
    ///
    /// Returns `Ok(true)` if the game existed, `Ok(false)` otherwise.
    async fn delete(&self, id: &str) -> Result<bool, AppError>;
}
