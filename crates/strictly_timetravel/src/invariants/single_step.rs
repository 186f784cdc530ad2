//! Single step invariant: consecutive snapshots differ by one mark.

use super::super::{History, Player, Square};
use super::Invariant;

/// Invariant: the opening snapshot is empty with no move, and every later
/// snapshot adds exactly one mark at its recorded move, placed by the
/// player whose turn it was.
pub struct SingleStepInvariant;

impl Invariant<History> for SingleStepInvariant {
    fn holds(history: &History) -> bool {
        let Some(first) = history.snapshots.first() else {
            return false;
        };
        if first.last_move().is_some() || first.board().occupied_count() != 0 {
            return false;
        }

        history.snapshots.windows(2).enumerate().all(|(i, pair)| {
            let [before, after] = pair else {
                return false;
            };
            let Some(pos) = *after.last_move() else {
                return false;
            };
            let changed = before
                .board()
                .squares()
                .iter()
                .zip(after.board().squares())
                .filter(|(a, b)| a != b)
                .count();

            changed == 1
                && before.board().is_empty(pos)
                && after.board().get(pos) == Square::Occupied(Player::for_turn(i))
        })
    }

    fn description() -> &'static str {
        "Each snapshot adds one mark for the player on turn"
    }
}
