//! Strictly Time Travel - play tic-tac-toe in the terminal.

use anyhow::Result;
use clap::Parser;
use strictly_timetravel_cli::{Cli, Settings, run};
use tracing::info;
use tracing_subscriber::EnvFilter;

fn main() -> Result<()> {
    // Load .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();
    let settings = Settings::resolve(&cli)?;

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(settings.log_level())),
        )
        .with_writer(std::io::stderr)
        .init();

    info!(?settings, "Starting Strictly Time Travel");

    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    run(&settings, stdin.lock(), stdout.lock())
}
