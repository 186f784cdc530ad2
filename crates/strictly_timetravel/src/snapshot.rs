//! Recorded board states.

use super::{Board, Position};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};

/// An immutable board state plus the move that produced it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Getters, Serialize, Deserialize)]
pub struct Snapshot {
    /// Board after the move.
    pub(crate) board: Board,
    /// Cell marked by the producing move; `None` for the opening board.
    pub(crate) last_move: Option<Position>,
}

impl Snapshot {
    /// The empty opening board.
    pub fn initial() -> Self {
        Self {
            board: Board::new(),
            last_move: None,
        }
    }

    pub(crate) fn new(board: Board, last_move: Position) -> Self {
        Self {
            board,
            last_move: Some(last_move),
        }
    }

    /// `(column, row)` of the producing move, both counted from 1.
    pub fn coordinates(&self) -> Option<(usize, usize)> {
        self.last_move.map(|pos| (pos.column(), pos.row()))
    }
}
