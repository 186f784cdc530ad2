//! Results of asking the session to place a mark.

use super::Position;
use serde::{Deserialize, Serialize};

/// Why a move was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_more::Display)]
pub enum IgnoreReason {
    /// The square at the position is already occupied.
    #[display("{} is already occupied", _0)]
    SquareOccupied(Position),

    /// The active snapshot already has a completed line.
    #[display("Game is already over")]
    GameOver,
}

/// Outcome of a well-formed move request.
///
/// Rejected moves leave the session untouched, like a click on a dead
/// square.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveOutcome {
    /// The mark was placed; `step` is the new active step.
    Applied {
        /// Index of the snapshot the move produced.
        step: usize,
    },
    /// The move was rejected by the rules.
    Ignored(IgnoreReason),
}

impl MoveOutcome {
    /// Returns true if the move changed the session.
    pub fn is_applied(&self) -> bool {
        matches!(self, MoveOutcome::Applied { .. })
    }
}
