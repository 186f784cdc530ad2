//! Driver settings loaded from TOML and overridden by flags.

use crate::cli::{Cli, OutputFormat};
use derive_getters::Getters;
use derive_more::{Display, Error};
use serde::{Deserialize, Serialize};
use std::path::Path;
use strictly_timetravel::{DisplayOrder, DrawPolicy, GameSession};
use tracing::{debug, info, instrument};

/// Settings for one run of the driver.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Show the move list newest first at startup.
    reverse_display: bool,

    /// Report "Draw" on a full board without a winner.
    report_draw: bool,

    /// Output format for frames.
    format: OutputFormat,

    /// Log filter used when RUST_LOG is unset.
    log_level: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            reverse_display: false,
            report_draw: true,
            format: OutputFormat::Text,
            log_level: "warn".to_string(),
        }
    }
}

impl Settings {
    /// Loads settings from a TOML file.
    #[instrument(skip(path), fields(path = %path.as_ref().display()))]
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        debug!("Loading settings from file");
        let content = std::fs::read_to_string(path.as_ref())
            .map_err(|e| ConfigError::new(format!("Failed to read config file: {}", e)))?;

        let settings: Self = toml::from_str(&content)
            .map_err(|e| ConfigError::new(format!("Failed to parse config: {}", e)))?;

        info!(?settings, "Settings loaded");
        Ok(settings)
    }

    /// Builds settings from the optional config file, then applies flags.
    #[instrument(skip(cli))]
    pub fn resolve(cli: &Cli) -> Result<Self, ConfigError> {
        let mut settings = match &cli.config {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };

        if cli.reverse {
            settings.reverse_display = true;
        }
        if cli.no_draw {
            settings.report_draw = false;
        }
        if let Some(format) = cli.format {
            settings.format = format;
        }
        if let Some(level) = &cli.log_level {
            settings.log_level = level.clone();
        }
        Ok(settings)
    }

    /// Creates a fresh session configured by these settings.
    #[instrument(skip(self))]
    pub fn new_session(&self) -> GameSession {
        let order = if self.reverse_display {
            DisplayOrder::Reverse
        } else {
            DisplayOrder::Chronological
        };
        let draw_policy = if self.report_draw {
            DrawPolicy::Report
        } else {
            DrawPolicy::Ignore
        };
        GameSession::new()
            .with_display_order(order)
            .with_draw_policy(draw_policy)
    }
}

/// Configuration error.
#[derive(Debug, Clone, Display, Error)]
#[display("Config error: {} at {}:{}", message, file, line)]
pub struct ConfigError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl ConfigError {
    /// Creates a new configuration error.
    #[track_caller]
    #[instrument(skip(message))]
    pub fn new(message: String) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
