//! Session error types.
//!
//! Only caller contract violations are errors. Moves the rules reject are
//! reported through [`MoveOutcome`](crate::MoveOutcome) instead.

use derive_more::{Display, Error};
use tracing::instrument;

/// What the caller got wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display)]
pub enum SessionErrorKind {
    /// Cell index outside the 3x3 grid.
    #[display("cell index {index} is outside 0..=8")]
    CellOutOfRange {
        /// The rejected index.
        index: usize,
    },
    /// Step that does not exist in the recorded history.
    #[display("step {step} is outside history of length {len}")]
    StepOutOfRange {
        /// The rejected step.
        step: usize,
        /// History length at the time of the call.
        len: usize,
    },
}

/// Session error with location tracking.
#[derive(Debug, Clone, Display, Error)]
#[display("Session error: {} at {}:{}", kind, file, line)]
pub struct SessionError {
    /// Error kind.
    pub kind: SessionErrorKind,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl SessionError {
    /// Creates a new session error with caller location tracking.
    #[track_caller]
    #[instrument]
    pub fn new(kind: SessionErrorKind) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            kind,
            line: loc.line(),
            file: loc.file(),
        }
    }
}
