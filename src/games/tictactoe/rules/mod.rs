//! Game rules for tic-tac-toe.
//!
//! Pure functions over a [`Board`]. Nothing here assumes the board came from
//! legal play, so the same evaluation serves the live position and any
//! position reached by navigating the history.

pub mod draw;
pub mod win;

pub use draw::is_full;
pub use win::{LINES, WinningLine, check_winner};

use super::Board;
use super::phases::Outcome;
use tracing::instrument;

/// Evaluates a board: first completed line wins, then full board draws.
#[instrument(level = "trace")]
pub fn evaluate_outcome(board: &Board) -> Outcome {
    if let Some((player, line)) = check_winner(board) {
        Outcome::Win { player, line }
    } else if is_full(board) {
        Outcome::Draw
    } else {
        Outcome::InProgress
    }
}

#[cfg(test)]
mod tests {
    use super::super::{Player, Position, Square};
    use super::*;

    #[test]
    fn test_empty_board_in_progress() {
        assert_eq!(evaluate_outcome(&Board::new()), Outcome::InProgress);
    }

    #[test]
    fn test_win_reports_line() {
        let board = Board::new()
            .with(Position::TopRight, Square::Occupied(Player::O))
            .with(Position::Center, Square::Occupied(Player::O))
            .with(Position::BottomLeft, Square::Occupied(Player::O));
        assert_eq!(
            evaluate_outcome(&board),
            Outcome::Win {
                player: Player::O,
                line: LINES[7],
            }
        );
    }

    #[test]
    fn test_full_winning_board_is_a_win_not_a_draw() {
        let x = Square::Occupied(Player::X);
        let o = Square::Occupied(Player::O);
        let board = Board::from_squares([x, o, x, o, x, o, o, x, x]);
        assert!(matches!(evaluate_outcome(&board), Outcome::Win { player: Player::X, .. }));
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X / O X X / O X O
        let x = Square::Occupied(Player::X);
        let o = Square::Occupied(Player::O);
        let board = Board::from_squares([x, o, x, o, x, x, o, x, o]);
        assert_eq!(evaluate_outcome(&board), Outcome::Draw);
    }
}
