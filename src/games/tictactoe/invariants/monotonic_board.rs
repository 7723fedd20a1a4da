//! Monotonic board invariant: each ply fills exactly one empty square.

use super::super::History;
use super::Invariant;

/// Invariant: every entry differs from its predecessor in exactly one square,
/// and that square went from empty to occupied.
pub struct MonotonicBoardInvariant;

impl Invariant<History> for MonotonicBoardInvariant {
    fn holds(history: &History) -> bool {
        history.entries().windows(2).all(|pair| {
            let (before, after) = (pair[0].board(), pair[1].board());
            match before.diff(after).as_slice() {
                [pos] => before.is_empty(*pos) && !after.is_empty(*pos),
                _ => false,
            }
        })
    }

    fn description() -> &'static str {
        "Each history entry fills exactly one previously empty square"
    }
}
