//! Command-line interface for strictly_timetravel.

use clap::Parser;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// How each frame is written to stdout.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "snake_case")]
pub enum OutputFormat {
    /// Board grid, status line and move list.
    #[default]
    Text,
    /// One JSON document per frame.
    Json,
}

/// Strictly Time Travel - tic-tac-toe with a navigable move history
#[derive(Parser, Debug, Default)]
#[command(name = "strictly_timetravel")]
#[command(about = "Play tic-tac-toe and jump back through the move history", long_about = None)]
#[command(version)]
pub struct Cli {
    /// Path to a TOML settings file
    #[arg(long)]
    pub config: Option<PathBuf>,

    /// Start with the move list newest first
    #[arg(long)]
    pub reverse: bool,

    /// Keep prompting for the next player on a full board instead of reporting a draw
    #[arg(long)]
    pub no_draw: bool,

    /// Output format
    #[arg(long, value_enum)]
    pub format: Option<OutputFormat>,

    /// Log filter used when RUST_LOG is unset (e.g. "debug")
    #[arg(long)]
    pub log_level: Option<String>,
}
