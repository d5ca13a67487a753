use anyhow::Result;
use board_games_api::config;
use board_games_api::server;
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

/// Board games REST API with per-credential request throttling.
#[derive(Parser)]
#[command(name = "board-games-api")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Bind address, overrides `LISTEN`
    #[arg(long)]
    listen: Option<String>,

    /// JSON games catalogue, overrides `GAMES_SEED_PATH`
    #[arg(long)]
    seed: Option<PathBuf>,

    /// Validate configuration and exit
    #[arg(long)]
    check_config: bool,
}

fn init_tracing(log_level: &str, log_format: &str) {
    let filter = EnvFilter::try_new(log_level).unwrap_or_else(|_| EnvFilter::new("info"));

    if log_format == "json" {
        tracing_subscriber::fmt()
            .json()
            .with_env_filter(filter)
            .init();
    } else {
        tracing_subscriber::fmt().with_env_filter(filter).init();
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut config = config::Config::from_env()?;
    if let Some(listen) = cli.listen {
        config.listen_addr = listen;
    }
    if let Some(seed) = cli.seed {
        config.games_seed_path = Some(seed);
    }
    config.validate()?;

    init_tracing(&config.log_level, &config.log_format);
    config.print_summary();

    if cli.check_config {
        tracing::info!("Configuration is valid");
        return Ok(());
    }

    server::run(config).await
}
