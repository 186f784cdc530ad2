//! Presentation state and derived, read-only views of a session.
//!
//! Nothing here is authoritative. Every value is recomputed from the
//! history and active step on demand.

use super::rules::Line;
use super::snapshot::Snapshot;
use super::{Board, Player};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Order in which the move list is presented.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DisplayOrder {
    /// Oldest move first.
    #[default]
    Chronological,
    /// Newest move first.
    Reverse,
}

impl DisplayOrder {
    /// Flips between chronological and reverse.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Chronological => Self::Reverse,
            Self::Reverse => Self::Chronological,
        }
    }

    /// Returns true for newest-first ordering.
    pub fn is_reverse(self) -> bool {
        self == Self::Reverse
    }
}

/// How a full board without a winner is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DrawPolicy {
    /// Report [`Status::Draw`].
    #[default]
    Report,
    /// Keep prompting for the next player, as if play could continue.
    Ignore,
}

/// Status line for the active snapshot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum Status {
    /// A line is complete; the player holding it won.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Play continues with this player.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
    /// The board is full and nobody won.
    #[display("Draw")]
    Draw,
}

/// One entry of the move list.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct MoveDescriptor {
    /// History index this entry jumps to.
    step: usize,
    /// Button text.
    label: String,
    /// Whether this entry is the active step.
    active: bool,
}

impl MoveDescriptor {
    /// Describes the snapshot recorded at `step`.
    pub fn new(step: usize, snapshot: &Snapshot, active: bool) -> Self {
        Self {
            step,
            label: Self::label_for(step, snapshot),
            active,
        }
    }

    /// Odd steps were produced by X, even ones by O.
    fn label_for(step: usize, snapshot: &Snapshot) -> String {
        if step == 0 {
            return "Go to game start".to_string();
        }
        let mark = if step % 2 == 1 { Player::X } else { Player::O };
        match snapshot.coordinates() {
            Some((column, row)) => format!(
                "Go to move #{} - [Column: {}, Row: {}] ({})",
                step, column, row, mark
            ),
            None => format!("Go to move #{} ({})", step, mark),
        }
    }
}

/// Everything a front end needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize, Deserialize)]
pub struct SessionView {
    /// Active board.
    board: Board,
    /// Status line.
    status: Status,
    /// Completed line on the active board, for highlighting.
    winning_line: Option<Line>,
    /// Active step.
    step: usize,
    /// Move list in display order.
    order: DisplayOrder,
    /// Move list entries.
    moves: Vec<MoveDescriptor>,
}

impl SessionView {
    pub(crate) fn new(
        board: Board,
        status: Status,
        winning_line: Option<Line>,
        step: usize,
        order: DisplayOrder,
        moves: Vec<MoveDescriptor>,
    ) -> Self {
        Self {
            board,
            status,
            winning_line,
            step,
            order,
            moves,
        }
    }
}
