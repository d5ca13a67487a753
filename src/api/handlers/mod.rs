//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod games;
pub mod health;

pub use games::{
    create_game_handler, delete_game_handler, get_game_handler, list_games_handler,
    update_game_handler,
};
pub use health::health_handler;
