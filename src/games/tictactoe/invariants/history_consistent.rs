//! History consistency invariant: step count matches occupied squares.

use super::super::History;
use super::Invariant;

/// Invariant: entry `k` has exactly `k` occupied squares.
///
/// In particular entry 0 is the empty starting board.
pub struct HistoryConsistentInvariant;

impl Invariant<History> for HistoryConsistentInvariant {
    fn holds(history: &History) -> bool {
        history
            .entries()
            .iter()
            .enumerate()
            .all(|(step, entry)| entry.board().occupied() == step)
    }

    fn description() -> &'static str {
        "History step matches number of occupied squares"
    }
}

#[cfg(test)]
mod tests {
    use super::super::super::{Board, GameState, HistoryEntry, Player, Position, Square};
    use super::*;

    #[test]
    fn test_empty_game_holds() {
        assert!(HistoryConsistentInvariant::holds(GameState::new().history()));
    }

    #[test]
    fn test_full_game_holds() {
        let state = [0, 1, 2, 4, 3, 5, 7, 6, 8]
            .into_iter()
            .fold(GameState::new(), |state, index| state.apply_move(index));
        assert_eq!(state.history().len(), 10);
        assert!(HistoryConsistentInvariant::holds(state.history()));
    }

    #[test]
    fn test_nonempty_start_violates() {
        let start = Board::new().with(Position::Center, Square::Occupied(Player::X));
        let history = History::from_entries(vec![HistoryEntry::new(start)]);
        assert!(!HistoryConsistentInvariant::holds(&history));
    }
}
