//! In-memory games repository seeded from a JSON catalogue.

use async_trait::async_trait;
use chrono::Utc;
use serde::Deserialize;
use std::path::Path;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::domain::entities::{Game, NewGame};
use crate::domain::repositories::GamesRepository;
use crate::error::AppError;
use crate::utils::code_generator::generate_code;

/// Catalogue shipped with the service, used when no seed file is configured.
const BUILTIN_SEED: &str = include_str!("../../../data/games.json");

/// Errors raised while loading a seed catalogue.
#[derive(Debug, thiserror::Error)]
pub enum SeedError {
    #[error("Failed to read seed file {path}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Invalid seed document")]
    Parse(#[from] serde_json::Error),
}

#[derive(Debug, Deserialize)]
struct SeedDocument {
    games: Vec<SeedGame>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct SeedGame {
    id: Option<String>,
    title: String,
    publisher: Option<String>,
    min_players: Option<u32>,
    max_players: Option<u32>,
    min_age: Option<u32>,
    playing_time_minutes: Option<u32>,
}

impl From<SeedGame> for Game {
    fn from(seed: SeedGame) -> Self {
        let id = seed.id.unwrap_or_else(generate_code);
        let new_game = NewGame {
            title: seed.title,
            publisher: seed.publisher,
            min_players: seed.min_players,
            max_players: seed.max_players,
            min_age: seed.min_age,
            playing_time_minutes: seed.playing_time_minutes,
        };
        Game::from_new(id, new_game, Utc::now())
    }
}

/// Process-local games catalogue.
///
/// Games keep their insertion order; updates happen in place so paging stays
/// stable across edits. Contents are lost on restart.
pub struct InMemoryGamesRepository {
    games: RwLock<Vec<Game>>,
}

impl InMemoryGamesRepository {
    /// Creates an empty repository.
    pub fn new() -> Self {
        Self::with_games(Vec::new())
    }

    pub fn with_games(games: Vec<Game>) -> Self {
        Self {
            games: RwLock::new(games),
        }
    }

    /// Creates a repository from a `{"games": [...]}` JSON document.
    ///
    /// Entries without an `id` get a generated one.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Parse`] if the document is malformed.
    pub fn from_json(document: &str) -> Result<Self, SeedError> {
        let seed: SeedDocument = serde_json::from_str(document)?;
        Ok(Self::with_games(
            seed.games.into_iter().map(Game::from).collect(),
        ))
    }

    /// Creates a repository from the built-in catalogue.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Parse`] if the embedded catalogue is malformed.
    pub fn builtin() -> Result<Self, SeedError> {
        Self::from_json(BUILTIN_SEED)
    }

    /// Creates a repository from a seed file on disk.
    ///
    /// # Errors
    ///
    /// Returns [`SeedError::Io`] if the file cannot be read and
    /// [`SeedError::Parse`] if it is malformed.
    pub fn from_file(path: &Path) -> Result<Self, SeedError> {
        let document = std::fs::read_to_string(path).map_err(|source| SeedError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&document)
    }

    fn read(&self) -> Result<RwLockReadGuard<'_, Vec<Game>>, AppError> {
        self.games
            .read()
            .map_err(|_| AppError::internal("Games catalogue lock poisoned"))
    }

    fn write(&self) -> Result<RwLockWriteGuard<'_, Vec<Game>>, AppError> {
        self.games
            .write()
            .map_err(|_| AppError::internal("Games catalogue lock poisoned"))
    }
}

impl Default for InMemoryGamesRepository {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl GamesRepository for InMemoryGamesRepository {
    async fn list(&self) -> Result<Vec<Game>, AppError> {
        Ok(self.read()?.clone())
    }

    async fn find_by_id(&self, id: &str) -> Result<Option<Game>, AppError> {
        Ok(self.read()?.iter().find(|g| g.id == id).cloned())
    }

    async fn create(&self, new_game: NewGame) -> Result<Game, AppError> {
        let mut games = self.write()?;

        let mut id = generate_code();
        while games.iter().any(|g| g.id == id) {
            id = generate_code();
        }

        let game = Game::from_new(id, new_game, Utc::now());
        games.push(game.clone());

        Ok(game)
    }

    async fn update(&self, id: &str, input: NewGame) -> Result<Game, AppError> {
        let mut games = self.write()?;

        let game = games
            .iter_mut()
            .find(|g| g.id == id)
            .ok_or_else(|| AppError::not_found(format!("Game with id '{}' not found", id)))?;

        game.apply(input, Utc::now());

        Ok(game.clone())
    }

    async fn delete(&self, id: &str) -> Result<bool, AppError> {
        let mut games = self.write()?;

        let before = games.len();
        games.retain(|g| g.id != id);

        Ok(games.len() < before)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builtin_catalogue_loads() {
        let repo = InMemoryGamesRepository::builtin().unwrap();
        let games = repo.games.read().unwrap();

        assert!(games.len() >= 20);
        assert!(games.iter().all(|g| !g.title.is_empty()));
    }

    #[test]
    fn test_from_json_generates_missing_ids() {
        let repo = InMemoryGamesRepository::from_json(
            r#"{"games": [{"id": "fixed", "title": "Azul"}, {"title": "Catan", "minPlayers": 3}]}"#,
        )
        .unwrap();
        let games = repo.games.read().unwrap();

        assert_eq!(games[0].id, "fixed");
        assert_eq!(games[1].id.len(), 12);
        assert_eq!(games[1].min_players, Some(3));
    }

    #[test]
    fn test_from_json_rejects_malformed() {
        let result = InMemoryGamesRepository::from_json(r#"{"items": []}"#);
        assert!(matches!(result, Err(SeedError::Parse(_))));
    }

    #[test]
    fn test_from_file_missing() {
        let result = InMemoryGamesRepository::from_file(Path::new("/nonexistent/games.json"));
        assert!(matches!(result, Err(SeedError::Io { .. })));
    }

    #[tokio::test]
    async fn test_create_then_find() {
        let repo = InMemoryGamesRepository::new();

        let created = repo.create(NewGame::titled("Azul")).await.unwrap();
        let found = repo.find_by_id(&created.id).await.unwrap();

        assert_eq!(found, Some(created));
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let repo = InMemoryGamesRepository::new();
        for title in ["A", "B", "C"] {
            repo.create(NewGame::titled(title)).await.unwrap();
        }

        let titles: Vec<_> = repo
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|g| g.title)
            .collect();

        assert_eq!(titles, vec!["A", "B", "C"]);
    }

    #[tokio::test]
    async fn test_update_in_place() {
        let repo = InMemoryGamesRepository::new();
        let first = repo.create(NewGame::titled("A")).await.unwrap();
        repo.create(NewGame::titled("B")).await.unwrap();

        let updated = repo
            .update(&first.id, NewGame::titled("A2"))
            .await
            .unwrap();

        assert_eq!(updated.id, first.id);
        assert_eq!(repo.list().await.unwrap()[0].title, "A2");
    }

    #[tokio::test]
    async fn test_update_missing_is_not_found() {
        let repo = InMemoryGamesRepository::new();

        let result = repo.update("missing", NewGame::titled("X")).await;

        assert!(matches!(result, Err(AppError::NotFound(_))));
    }

    #[tokio::test]
    async fn test_delete() {
        let repo = InMemoryGamesRepository::new();
        let game = repo.create(NewGame::titled("A")).await.unwrap();

        assert!(repo.delete(&game.id).await.unwrap());
        assert!(!repo.delete(&game.id).await.unwrap());
        assert!(repo.find_by_id(&game.id).await.unwrap().is_none());
    }
}
