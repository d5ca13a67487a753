//! Shared application state injected into handlers.

use std::sync::Arc;

use crate::application::services::{AdmissionGate, GameService};
use crate::infrastructure::persistence::InMemoryGamesRepository;

#[derive(Clone)]
pub struct AppState {
    pub game_service: Arc<GameService<InMemoryGamesRepository>>,
    pub admission_gate: Arc<AdmissionGate>,
}

impl AppState {
    pub fn new(
        game_service: Arc<GameService<InMemoryGamesRepository>>,
        admission_gate: Arc<AdmissionGate>,
    ) -> Self {
        Self {
            game_service,
            admission_gate,
        }
    }
}
