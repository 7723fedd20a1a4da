//! Alternating turn invariant: marks alternate X, O, X, O, ...

use super::super::{History, Player, Square};
use super::Invariant;

/// Invariant: the square filled at step `k` holds X for odd `k`, O for even.
///
/// Squares that did not change are ignored here; the monotonic invariant
/// covers those.
pub struct AlternatingTurnInvariant;

impl Invariant<History> for AlternatingTurnInvariant {
    fn holds(history: &History) -> bool {
        history
            .entries()
            .windows(2)
            .enumerate()
            .all(|(i, pair)| {
                let expected = Square::Occupied(Player::placing_step(i + 1));
                pair[0]
                    .board()
                    .diff(pair[1].board())
                    .into_iter()
                    .all(|pos| pair[1].board().get(pos) == expected)
            })
    }

    fn description() -> &'static str {
        "Players alternate turns starting with X"
    }
}
