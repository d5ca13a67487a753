//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server starts.
//!
//! ## Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)
//! - `THROTTLE_PATH_PREFIX` - Path prefix guarded by the admission gate (default: `/api/games`)
//! - `THROTTLE_WINDOW_SECS` - Minimum spacing between requests of one credential (default: 5, at most 86400)
//! - `THROTTLE_MAX_ENTRIES` - Maximum number of tracked credentials (default: 100000)
//! - `THROTTLE_SWEEP_INTERVAL_SECS` - Period of the expired-entry sweep (default: 60)
//! - `GAMES_SEED_PATH` - JSON catalogue to load at startup (default: built-in catalogue)
//!
//! Variables may also be provided through a `.env` file loaded by `main.rs`;
//! command-line flags override them there.

use anyhow::{Context, Result};
use std::env;
use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::application::services::admission_gate::{DEFAULT_PATH_PREFIX, DEFAULT_WINDOW};

/// Longest accepted throttle window: one day.
pub const MAX_THROTTLE_WINDOW_SECS: u64 = 86_400;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,

    // ── Admission gate ──────────────────────────────────────────────────────
    /// Requests whose path starts with this prefix are throttled per credential.
    pub throttle_path_prefix: String,
    /// Window in seconds during which a repeated credential is denied.
    pub throttle_window_secs: u64,
    /// Upper bound on tracked credentials before eviction kicks in.
    pub throttle_max_entries: usize,
    /// How often expired throttle entries are swept, in seconds.
    pub throttle_sweep_interval_secs: u64,

    /// Catalogue seed file. `None` uses the built-in catalogue.
    pub games_seed_path: Option<PathBuf>,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        let throttle_path_prefix =
            env::var("THROTTLE_PATH_PREFIX").unwrap_or_else(|_| DEFAULT_PATH_PREFIX.to_string());

        let throttle_window_secs = parse_var("THROTTLE_WINDOW_SECS", DEFAULT_WINDOW.as_secs())?;
        let throttle_max_entries = parse_var("THROTTLE_MAX_ENTRIES", 100_000)?;
        let throttle_sweep_interval_secs = parse_var("THROTTLE_SWEEP_INTERVAL_SECS", 60)?;

        let games_seed_path = env::var("GAMES_SEED_PATH")
            .ok()
            .filter(|v| !v.trim().is_empty())
            .map(PathBuf::from);

        Ok(Self {
            listen_addr,
            log_level,
            log_format,
            throttle_path_prefix,
            throttle_window_secs,
            throttle_max_entries,
            throttle_sweep_interval_secs,
            games_seed_path,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is invalid
    /// - `throttle_path_prefix` does not start with `/`
    /// - any throttle setting is zero
    /// - `throttle_window_secs` exceeds [`MAX_THROTTLE_WINDOW_SECS`]
    pub fn validate(&self) -> Result<()> {
        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        if !self.throttle_path_prefix.starts_with('/') {
            anyhow::bail!(
                "THROTTLE_PATH_PREFIX must start with '/', got '{}'",
                self.throttle_path_prefix
            );
        }

        if self.throttle_window_secs == 0 {
            anyhow::bail!("THROTTLE_WINDOW_SECS must be greater than 0");
        }

        if self.throttle_window_secs > MAX_THROTTLE_WINDOW_SECS {
            anyhow::bail!(
                "THROTTLE_WINDOW_SECS must be at most {}, got {}",
                MAX_THROTTLE_WINDOW_SECS,
                self.throttle_window_secs
            );
        }

        if self.throttle_max_entries == 0 {
            anyhow::bail!("THROTTLE_MAX_ENTRIES must be at least 1");
        }

        if self.throttle_sweep_interval_secs == 0 {
            anyhow::bail!("THROTTLE_SWEEP_INTERVAL_SECS must be greater than 0");
        }

        Ok(())
    }

    pub fn throttle_window(&self) -> Duration {
        Duration::from_secs(self.throttle_window_secs)
    }

    pub fn throttle_sweep_interval(&self) -> Duration {
        Duration::from_secs(self.throttle_sweep_interval_secs)
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
        tracing::info!(
            "  Throttle: {} every {}s per credential (max {} tracked, sweep every {}s)",
            self.throttle_path_prefix,
            self.throttle_window_secs,
            self.throttle_max_entries,
            self.throttle_sweep_interval_secs
        );
        match &self.games_seed_path {
            Some(path) => tracing::info!("  Games seed: {}", path.display()),
            None => tracing::info!("  Games seed: built-in"),
        }
    }
}

/// Reads an optional numeric variable, falling back to `default` when unset.
fn parse_var<T>(name: &str, default: T) -> Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match env::var(name) {
        Ok(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("{} must be a number, got '{}'", name, raw)),
        Err(_) => Ok(default),
    }
}
