//! Append-only snapshot history with a movable step pointer.

use super::action::{IgnoreReason, MoveOutcome};
use super::error::{SessionError, SessionErrorKind};
use super::invariants::{HistoryInvariants, InvariantSet};
use super::rules::evaluate_winner;
use super::snapshot::Snapshot;
use super::{Player, Position};
use tracing::{debug, instrument};

/// Authoritative game state: every recorded board and which one is active.
///
/// `snapshots[0]` is always the empty board. Jumping only moves the
/// pointer; the recorded future is discarded only when a move is played
/// from an earlier step.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct History {
    pub(crate) snapshots: Vec<Snapshot>,
    pub(crate) step: usize,
}

impl History {
    /// Creates a history holding only the empty board.
    #[instrument]
    pub fn new() -> Self {
        Self {
            snapshots: vec![Snapshot::initial()],
            step: 0,
        }
    }

    /// All recorded snapshots in chronological order.
    pub fn snapshots(&self) -> &[Snapshot] {
        &self.snapshots
    }

    /// Number of recorded snapshots (never zero).
    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    /// Always false; the opening board is never removed.
    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    /// Index of the active snapshot.
    pub fn step(&self) -> usize {
        self.step
    }

    /// Index of the most recent snapshot.
    pub fn latest(&self) -> usize {
        self.snapshots.len() - 1
    }

    /// The active snapshot.
    pub fn current(&self) -> &Snapshot {
        &self.snapshots[self.step]
    }

    /// Player to move from the active snapshot, derived from step parity.
    pub fn to_move(&self) -> Player {
        Player::for_turn(self.step)
    }

    /// Places the current player's mark at `pos`.
    ///
    /// Snapshots after the active step are dropped before the new one is
    /// appended.
    #[instrument(skip(self), fields(step = self.step, len = self.snapshots.len()))]
    pub fn apply(&mut self, pos: Position) -> MoveOutcome {
        let current = *self.current();

        if evaluate_winner(current.board()).is_some() {
            debug!("Ignoring move on finished game");
            return MoveOutcome::Ignored(IgnoreReason::GameOver);
        }
        if !current.board().is_empty(pos) {
            debug!("Ignoring move on occupied square");
            return MoveOutcome::Ignored(IgnoreReason::SquareOccupied(pos));
        }

        let player = self.to_move();
        let board = current.board().with_mark(pos, player);

        let discarded = self.latest() - self.step;
        self.snapshots.truncate(self.step + 1);
        self.snapshots.push(Snapshot::new(board, pos));
        self.step = self.latest();

        debug!(?player, step = self.step, discarded, "Move applied");
        self.debug_check();
        MoveOutcome::Applied { step: self.step }
    }

    /// Makes `step` the active snapshot without touching any recorded one.
    ///
    /// # Errors
    ///
    /// Returns `StepOutOfRange` if `step` is not a recorded index.
    #[instrument(skip(self), fields(len = self.snapshots.len()))]
    pub fn jump_to(&mut self, step: usize) -> Result<(), SessionError> {
        if step >= self.snapshots.len() {
            return Err(SessionError::new(SessionErrorKind::StepOutOfRange {
                step,
                len: self.snapshots.len(),
            }));
        }
        self.step = step;
        debug!(step, "Jumped");
        self.debug_check();
        Ok(())
    }

    /// Makes the most recent snapshot active.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn jump_to_latest(&mut self) {
        self.step = self.latest();
        self.debug_check();
    }

    /// Steps back one snapshot. Returns false at the opening board.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn undo(&mut self) -> bool {
        if self.step == 0 {
            return false;
        }
        self.step -= 1;
        self.debug_check();
        true
    }

    /// Steps forward one recorded snapshot. Returns false at the latest one.
    #[instrument(skip(self), fields(step = self.step))]
    pub fn redo(&mut self) -> bool {
        if self.step >= self.latest() {
            return false;
        }
        self.step += 1;
        self.debug_check();
        true
    }

    fn debug_check(&self) {
        debug_assert!(
            HistoryInvariants::check_all(self).is_ok(),
            "History invariants violated"
        );
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}
