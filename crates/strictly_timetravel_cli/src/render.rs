//! Frame rendering.

use crate::cli::OutputFormat;
use strictly_timetravel::{GameSession, Position, SessionView};
use tracing::instrument;

/// Renders the session in the requested format.
#[instrument(skip(session))]
pub fn render(session: &GameSession, format: OutputFormat) -> anyhow::Result<String> {
    let view = session.view();
    match format {
        OutputFormat::Text => Ok(render_text(&view)),
        OutputFormat::Json => Ok(serde_json::to_string(&view)?),
    }
}

/// Board grid, status line and move list.
///
/// Cells on the winning line are bracketed; the active step is marked `>`.
pub fn render_text(view: &SessionView) -> String {
    let board = view.board();
    let mut out = String::new();

    for row in 0..3 {
        for col in 0..3 {
            let Some(pos) = Position::from_index(row * 3 + col) else {
                continue;
            };
            let mark = match board.get(pos).player() {
                Some(player) => player.symbol().to_string(),
                None => pos.to_index().to_string(),
            };
            let highlighted = view.winning_line().is_some_and(|line| line.contains(pos));
            if highlighted {
                out.push_str(&format!("[{}]", mark));
            } else {
                out.push_str(&format!(" {} ", mark));
            }
        }
        out.push('\n');
    }

    out.push('\n');
    out.push_str(&view.status().to_string());
    out.push('\n');

    let header = if view.order().is_reverse() {
        "Moves (newest first):"
    } else {
        "Moves:"
    };
    out.push_str(header);
    out.push('\n');
    for descriptor in view.moves() {
        let marker = if *descriptor.active() { '>' } else { ' ' };
        out.push_str(&format!("{} {:>2}. {}\n", marker, descriptor.step(), descriptor.label()));
    }
    out
}
