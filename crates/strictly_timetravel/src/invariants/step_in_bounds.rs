//! Step pointer invariant: the active step names a recorded snapshot.

use super::super::History;
use super::Invariant;

/// Invariant: `0 <= step < len` and the history is never empty.
pub struct StepInBoundsInvariant;

impl Invariant<History> for StepInBoundsInvariant {
    fn holds(history: &History) -> bool {
        history.step < history.snapshots.len()
    }

    fn description() -> &'static str {
        "Active step indexes a recorded snapshot"
    }
}
