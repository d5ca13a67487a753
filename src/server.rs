//! HTTP server initialization and runtime setup.
//!
//! Wires the catalogue, throttle store and admission gate together, spawns the
//! throttle sweeper, and runs the Axum server until shutdown.

use crate::application::services::{AdmissionGate, GameService};
use crate::config::Config;
use crate::domain::clock::{Clock, SystemClock};
use crate::domain::repositories::ThrottleStore;
use crate::domain::throttle_sweeper::run_throttle_sweeper;
use crate::infrastructure::persistence::InMemoryGamesRepository;
use crate::infrastructure::throttle::InMemoryThrottleStore;
use crate::routes::app_router;
use crate::state::AppState;

use anyhow::{Context, Result};
use axum::ServiceExt;
use axum::extract::Request;
use std::net::SocketAddr;
use std::sync::Arc;

/// Builds application state from configuration.
///
/// # Errors
///
/// Returns an error if the configured seed catalogue cannot be loaded.
pub fn build_state(
    config: &Config,
    store: Arc<dyn ThrottleStore>,
    clock: Arc<dyn Clock>,
) -> Result<AppState> {
    let repository = match &config.games_seed_path {
        Some(path) => InMemoryGamesRepository::from_file(path)
            .with_context(|| format!("Failed to load games from {}", path.display()))?,
        None => InMemoryGamesRepository::builtin().context("Failed to load built-in games")?,
    };

    let game_service = Arc::new(GameService::new(Arc::new(repository)));
    let admission_gate = Arc::new(AdmissionGate::new(
        store,
        clock,
        config.throttle_path_prefix.clone(),
        config.throttle_window(),
    ));

    Ok(AppState::new(game_service, admission_gate))
}

/// Runs the HTTP server with the given configuration.
///
/// Initializes:
/// - Games catalogue
/// - Throttle store and admission gate
/// - Background throttle sweeper
/// - Axum HTTP server with graceful shutdown on Ctrl-C
///
/// # Errors
///
/// Returns an error if:
/// - The seed catalogue cannot be loaded
/// - Server bind fails
/// - Server runtime error occurs
pub async fn run(config: Config) -> Result<()> {
    let clock: Arc<dyn Clock> = Arc::new(SystemClock);
    let store: Arc<dyn ThrottleStore> = Arc::new(InMemoryThrottleStore::new(
        config.throttle_window(),
        config.throttle_max_entries,
    ));

    let state = build_state(&config, store.clone(), clock.clone())?;
    tracing::info!("Games catalogue loaded");

    let sweeper = tokio::spawn(run_throttle_sweeper(
        store,
        clock,
        config.throttle_sweep_interval(),
    ));
    tracing::info!("Throttle sweeper started");

    let app = app_router(state);

    let addr: SocketAddr = config.listen_addr.parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;
    tracing::info!("Listening on http://{addr}");

    axum::serve(listener, ServiceExt::<Request>::into_make_service(app))
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    sweeper.abort();
    tracing::info!("Server stopped");

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!("Failed to listen for shutdown signal: {}", e);
        std::future::pending::<()>().await;
    }
    tracing::info!("Shutdown signal received");
}
