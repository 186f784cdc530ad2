//! Mark count invariant: snapshot `i` holds exactly `i` marks.

use super::super::History;
use super::Invariant;

/// Invariant: every snapshot's occupied-square count equals its index.
///
/// Together with X moving first this fixes turn order to step parity.
pub struct MarkCountInvariant;

impl Invariant<History> for MarkCountInvariant {
    fn holds(history: &History) -> bool {
        history
            .snapshots
            .iter()
            .enumerate()
            .all(|(i, snapshot)| snapshot.board().occupied_count() == i)
    }

    fn description() -> &'static str {
        "Snapshot index equals number of occupied squares"
    }
}
