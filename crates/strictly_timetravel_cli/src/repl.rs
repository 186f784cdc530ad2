//! Read-eval-print loop driving one session.

use crate::command::{Command, CommandError, HELP};
use crate::config::Settings;
use crate::render::render;
use std::io::{BufRead, Write};
use strictly_timetravel::{GameSession, MoveOutcome};
use tracing::{debug, info, instrument, warn};

/// Applies one command. Returns false when the driver should exit.
///
/// Messages for the user (ignored moves, bad steps) are written to `out`;
/// they never end the session.
#[instrument(skip(session, out))]
pub fn execute(
    session: &mut GameSession,
    command: Command,
    out: &mut impl Write,
) -> anyhow::Result<bool> {
    match command {
        Command::Move(index) => match session.apply_move(index) {
            Ok(MoveOutcome::Applied { step }) => debug!(step, "Move applied"),
            Ok(MoveOutcome::Ignored(reason)) => writeln!(out, "Move ignored: {}", reason)?,
            Err(e) => writeln!(out, "{}", e.kind)?,
        },
        Command::Jump(step) => {
            if let Err(e) = session.jump_to(step) {
                writeln!(out, "{}", e.kind)?;
            }
        }
        Command::Undo => {
            if !session.undo() {
                writeln!(out, "Already at game start")?;
            }
        }
        Command::Redo => {
            if !session.redo() {
                writeln!(out, "Already at the latest move")?;
            }
        }
        Command::Latest => session.jump_to_latest(),
        Command::Reverse => session.toggle_reverse_display(),
        Command::Restart => session.restart(),
        Command::Show => {}
        Command::Help => writeln!(out, "{}", HELP)?,
        Command::Quit => return Ok(false),
    }
    Ok(true)
}

/// Runs the loop until `quit` or end of input.
#[instrument(skip_all)]
pub fn run(settings: &Settings, input: impl BufRead, mut out: impl Write) -> anyhow::Result<()> {
    let mut session = settings.new_session();
    info!("Session started");
    writeln!(out, "{}", render(&session, *settings.format())?)?;

    for line in input.lines() {
        let line = line?;
        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(e) => {
                warn!(error = %e, "Unparsed input");
                writeln!(out, "{}", e)?;
                continue;
            }
        };

        if !execute(&mut session, command, &mut out)? {
            break;
        }
        if command != Command::Help {
            writeln!(out, "{}", render(&session, *settings.format())?)?;
        }
        out.flush()?;
    }

    info!(moves = session.len() - 1, "Session ended");
    Ok(())
}
