//! Game session: history, active step and move-list presentation.

use super::action::MoveOutcome;
use super::error::{SessionError, SessionErrorKind};
use super::history::History;
use super::rules::{Line, evaluate_winner, is_full};
use super::snapshot::Snapshot;
use super::view::{DisplayOrder, DrawPolicy, MoveDescriptor, SessionView, Status};
use super::{Board, Player, Position};
use tracing::{debug, instrument, warn};

/// A single tic-tac-toe game with navigable history.
///
/// The session is the only mutable object in the engine and is owned by
/// whichever driver renders it. Turn, status and move labels are derived
/// from the history and active step each time they are asked for.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GameSession {
    history: History,
    order: DisplayOrder,
    draw_policy: DrawPolicy,
}

impl GameSession {
    /// Creates a session at the empty board, chronological move list.
    #[instrument]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets how a full board without a winner is reported.
    pub fn with_draw_policy(mut self, draw_policy: DrawPolicy) -> Self {
        self.draw_policy = draw_policy;
        self
    }

    /// Sets the initial move-list order.
    pub fn with_display_order(mut self, order: DisplayOrder) -> Self {
        self.order = order;
        self
    }

    // ─────────────────────────────────────────────────────────────
    //  Transitions
    // ─────────────────────────────────────────────────────────────

    /// Places the current player's mark at board index `index` (0-8).
    ///
    /// Moves on an occupied square or a finished board are ignored and
    /// reported as [`MoveOutcome::Ignored`].
    ///
    /// # Errors
    ///
    /// Returns `CellOutOfRange` if `index` is not on the board.
    #[instrument(skip(self), fields(step = self.history.step()))]
    pub fn apply_move(&mut self, index: usize) -> Result<MoveOutcome, SessionError> {
        let Some(pos) = Position::from_index(index) else {
            warn!(index, "Cell index out of range");
            return Err(SessionError::new(SessionErrorKind::CellOutOfRange { index }));
        };
        Ok(self.apply_position(pos))
    }

    /// Places the current player's mark at `pos`.
    #[instrument(skip(self), fields(step = self.history.step()))]
    pub fn apply_position(&mut self, pos: Position) -> MoveOutcome {
        let outcome = self.history.apply(pos);
        if let MoveOutcome::Ignored(reason) = outcome {
            warn!(%reason, "Move ignored");
        }
        outcome
    }

    /// Makes `step` the active snapshot. Later snapshots are kept.
    ///
    /// # Errors
    ///
    /// Returns `StepOutOfRange` if `step` is not a recorded index.
    #[instrument(skip(self))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), SessionError> {
        self.history.jump_to(step).inspect_err(|e| {
            warn!(error = %e, "Jump rejected");
        })
    }

    /// Steps back one move. Returns false at the opening board.
    #[instrument(skip(self))]
    pub fn undo(&mut self) -> bool {
        self.history.undo()
    }

    /// Steps forward one recorded move. Returns false at the latest one.
    #[instrument(skip(self))]
    pub fn redo(&mut self) -> bool {
        self.history.redo()
    }

    /// Makes the most recent snapshot active.
    #[instrument(skip(self))]
    pub fn jump_to_latest(&mut self) {
        self.history.jump_to_latest();
    }

    /// Discards all moves. Presentation settings are kept.
    #[instrument(skip(self))]
    pub fn restart(&mut self) {
        debug!(discarded = self.history.latest(), "Restarting session");
        self.history = History::new();
    }

    /// Flips the move-list order. History and active step are untouched.
    #[instrument(skip(self), fields(order = ?self.order))]
    pub fn toggle_reverse_display(&mut self) {
        self.order = self.order.toggle();
    }

    // ─────────────────────────────────────────────────────────────
    //  Accessors
    // ─────────────────────────────────────────────────────────────

    /// All recorded snapshots in chronological order.
    pub fn history(&self) -> &[Snapshot] {
        self.history.snapshots()
    }

    /// Number of recorded snapshots.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    /// Always false; the opening board is never removed.
    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }

    /// Index of the active snapshot.
    pub fn step(&self) -> usize {
        self.history.step()
    }

    /// Player to move from the active snapshot.
    pub fn to_move(&self) -> Player {
        self.history.to_move()
    }

    /// Current move-list order.
    pub fn display_order(&self) -> DisplayOrder {
        self.order
    }

    /// Whether the move list is shown newest first.
    pub fn is_reverse_display(&self) -> bool {
        self.order.is_reverse()
    }

    /// Board of the active snapshot.
    pub fn current_board(&self) -> &Board {
        self.history.current().board()
    }

    /// Completed line on the active board, if any.
    #[instrument(skip(self))]
    pub fn current_winner(&self) -> Option<Line> {
        evaluate_winner(self.current_board())
    }

    /// Status line for the active snapshot.
    #[instrument(skip(self))]
    pub fn current_status(&self) -> Status {
        let board = self.current_board();
        if let Some(player) = evaluate_winner(board).and_then(|line| line.owner(board)) {
            return Status::Winner(player);
        }
        if self.draw_policy == DrawPolicy::Report && is_full(board) {
            return Status::Draw;
        }
        Status::NextPlayer(self.to_move())
    }

    /// Move-list entries in the current display order.
    #[instrument(skip(self))]
    pub fn move_descriptions(&self) -> Vec<MoveDescriptor> {
        let step = self.history.step();
        let descriptors = self
            .history
            .snapshots()
            .iter()
            .enumerate()
            .map(|(i, snapshot)| MoveDescriptor::new(i, snapshot, i == step));

        match self.order {
            DisplayOrder::Chronological => descriptors.collect(),
            DisplayOrder::Reverse => descriptors.rev().collect(),
        }
    }

    /// Captures everything needed to render the session.
    #[instrument(skip(self))]
    pub fn view(&self) -> SessionView {
        SessionView::new(
            *self.current_board(),
            self.current_status(),
            self.current_winner(),
            self.step(),
            self.order,
            self.move_descriptions(),
        )
    }
}
