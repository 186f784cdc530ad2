//! Terminal driver for strictly_timetravel.
//!
//! Owns one [`GameSession`](strictly_timetravel::GameSession) and feeds it
//! commands read line by line.

#![warn(missing_docs)]
#![forbid(unsafe_code)]

mod cli;
mod command;
mod config;
mod render;
mod repl;

pub use cli::{Cli, OutputFormat};
pub use command::{Command, CommandError, HELP};
pub use config::{ConfigError, Settings};
pub use render::{render, render_text};
pub use repl::{execute, run};
