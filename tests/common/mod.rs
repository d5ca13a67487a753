#![allow(dead_code)]

use axum_test::TestServer;
use board_games_api::application::services::admission_gate::{
    DEFAULT_PATH_PREFIX, DEFAULT_WINDOW,
};
use board_games_api::application::services::{AdmissionGate, GameService};
use board_games_api::domain::clock::ManualClock;
use board_games_api::domain::entities::{Game, NewGame};
use board_games_api::infrastructure::persistence::InMemoryGamesRepository;
use board_games_api::infrastructure::throttle::InMemoryThrottleStore;
use board_games_api::routes::api_router;
use board_games_api::state::AppState;
use chrono::Utc;
use std::sync::Arc;

pub struct TestApp {
    pub server: TestServer,
    pub clock: Arc<ManualClock>,
    pub store: Arc<InMemoryThrottleStore>,
}

pub fn create_test_game(id: &str, title: &str) -> Game {
    Game::from_new(id.to_string(), NewGame::titled(title), Utc::now())
}

/// `count` games with ids `g1..gN` and titles `Game 1..Game N`.
pub fn numbered_games(count: usize) -> Vec<Game> {
    (1..=count)
        .map(|i| create_test_game(&format!("g{i}"), &format!("Game {i}")))
        .collect()
}

pub fn create_test_state(
    games: Vec<Game>,
    clock: Arc<ManualClock>,
    store: Arc<InMemoryThrottleStore>,
) -> AppState {
    let repository = Arc::new(InMemoryGamesRepository::with_games(games));
    let game_service = Arc::new(GameService::new(repository));
    let admission_gate = Arc::new(AdmissionGate::new(
        store,
        clock,
        DEFAULT_PATH_PREFIX,
        DEFAULT_WINDOW,
    ));

    AppState::new(game_service, admission_gate)
}

/// Full application router over `games`, driven by a manual clock.
pub fn make_app(games: Vec<Game>) -> TestApp {
    let clock = Arc::new(ManualClock::new());
    let store = Arc::new(InMemoryThrottleStore::new(DEFAULT_WINDOW, 1_000));

    let state = create_test_state(games, clock.clone(), store.clone());
    let server = TestServer::new(api_router(state)).unwrap();

    TestApp {
        server,
        clock,
        store,
    }
}
