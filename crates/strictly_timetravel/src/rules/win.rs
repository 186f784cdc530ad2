//! Win detection logic for tic-tac-toe.

use super::super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Three cells forming a row, column or diagonal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Line([Position; 3]);

impl Line {
    /// The cells of this line, in table order.
    pub fn positions(&self) -> [Position; 3] {
        self.0
    }

    /// The board indices of this line.
    pub fn indices(&self) -> [usize; 3] {
        self.0.map(Position::to_index)
    }

    /// Whether `pos` lies on this line.
    pub fn contains(&self, pos: Position) -> bool {
        self.0.contains(&pos)
    }

    /// The player holding the first cell of the line on `board`.
    pub fn owner(&self, board: &Board) -> Option<Player> {
        board.get(self.0[0]).player()
    }
}

/// Candidate winning lines in evaluation order.
pub const LINES: [Line; 8] = [
    // Rows
    Line([Position::TopLeft, Position::TopCenter, Position::TopRight]),
    Line([Position::MiddleLeft, Position::Center, Position::MiddleRight]),
    Line([Position::BottomLeft, Position::BottomCenter, Position::BottomRight]),
    // Columns
    Line([Position::TopLeft, Position::MiddleLeft, Position::BottomLeft]),
    Line([Position::TopCenter, Position::Center, Position::BottomCenter]),
    Line([Position::TopRight, Position::MiddleRight, Position::BottomRight]),
    // Diagonals
    Line([Position::TopLeft, Position::Center, Position::BottomRight]),
    Line([Position::TopRight, Position::Center, Position::BottomLeft]),
];

/// Returns the first completed line on the board, if any.
///
/// Lines are checked in [`LINES`] order, so when several are complete the
/// earliest in the table wins. A full board with no line yields `None`;
/// callers wanting to tell a draw apart must check [`super::is_full`].
#[instrument(skip(board))]
pub fn evaluate_winner(board: &Board) -> Option<Line> {
    LINES.into_iter().find(|line| {
        let [a, b, c] = line.positions();
        let sq = board.get(a);
        sq != Square::Empty && sq == board.get(b) && sq == board.get(c)
    })
}

/// Returns the player owning the first completed line, if any.
#[instrument(skip(board))]
pub fn winner(board: &Board) -> Option<Player> {
    evaluate_winner(board).and_then(|line| line.owner(board))
}
