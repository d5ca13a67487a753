//! DTOs for the games resource.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::domain::entities::{Game, NewGame};

/// Request body for creating or replacing a game.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameInput {
    pub title: String,
    pub publisher: Option<String>,
    pub min_players: Option<u32>,
    pub max_players: Option<u32>,
    pub min_age: Option<u32>,
    pub playing_time_minutes: Option<u32>,
}

impl From<GameInput> for NewGame {
    fn from(input: GameInput) -> Self {
        NewGame {
            title: input.title,
            publisher: input.publisher,
            min_players: input.min_players,
            max_players: input.max_players,
            min_age: input.min_age,
            playing_time_minutes: input.playing_time_minutes,
        }
    }
}

/// Game representation returned by the API.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GameItem {
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

impl From<Game> for GameItem {
    fn from(game: Game) -> Self {
        GameItem {
            id: game.id,
            title: game.title,
            publisher: game.publisher,
            min_players: game.min_players,
            max_players: game.max_players,
            min_age: game.min_age,
            playing_time_minutes: game.playing_time_minutes,
            created_at: game.created_at,
            updated_at: game.updated_at,
        }
    }
}
