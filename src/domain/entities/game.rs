//! Domain entity representing a board game in the catalogue.

use chrono::{DateTime, Utc};

/// A board game stored in the catalogue.
#[derive(Debug, Clone, PartialEq)]
pub struct Game {
    pub id: String,
    pub title: String,
    pub publisher: Option<String>,
    pub min_players: Option<u32>,
    pub max_players: Option<u32>,
    pub min_age: Option<u32>,
    pub playing_time_minutes: Option<u32>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Game {
    /// Builds a game from its identifier and input fields, stamping both
    /// timestamps with `now`.
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let game = Game::from_new("abc123".to_string(), NewGame::titled("Azul"), Utc::now());
    /// assert_eq!(game.title, "Azul");
    /// ```
    pub fn from_new(id: String, new_game: NewGame, now: DateTime<Utc>) -> Self {
        Self {
            id,
            title: new_game.title,
            publisher: new_game.publisher,
            min_players: new_game.min_players,
            max_players: new_game.max_players,
            min_age: new_game.min_age,
            playing_time_minutes: new_game.playing_time_minutes,
            created_at: now,
            updated_at: now,
        }
    }

    /// Replaces every editable field with the values from `input`.
    ///
    /// `id` and `created_at` are preserved; `updated_at` is set to `now`.
    pub fn apply(&mut self, input: NewGame, now: DateTime<Utc>) {
        self.title = input.title;
        self.publisher = input.publisher;
        self.min_players = input.min_players;
        self.max_players = input.max_players;
        self.min_age = input.min_age;
        self.playing_time_minutes = input.playing_time_minutes;
        self.updated_at = now;
    }
}

/// Input data for creating or fully replacing a game.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NewGame {
    pub title: String,
    pub publisher: Option<String>,
    pub min_players: Option<u32>,
    pub max_players: Option<u32>,
    pub min_age: Option<u32>,
    pub playing_time_minutes: Option<u32>,
}

impl NewGame {
    pub fn titled(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            ..Self::default()
        }
    }
}
