//! First-class action types for tic-tac-toe.
//!
//! A [`Move`] is the domain event recovered from two consecutive history
//! entries: who placed a mark, and where.

use super::{Player, Position};
use serde::{Deserialize, Serialize};

/// A move in tic-tac-toe: a player placing their mark at a position.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, derive_new::new)]
pub struct Move {
    /// The player making the move.
    pub player: Player,
    /// The position where the player places their mark.
    pub position: Position,
}

impl Move {
    /// Returns the player making this move.
    pub fn player(&self) -> Player {
        self.player
    }

    /// Returns the position of this move.
    pub fn position(&self) -> Position {
        self.position
    }
}

impl std::fmt::Display for Move {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} at ({},{})",
            self.player,
            self.position.row(),
            self.position.col()
        )
    }
}

/// Why a move was not applied.
///
/// [`GameState::apply_move`](super::GameState::apply_move) turns every one of
/// these into "state unchanged"; [`GameState::try_move`](super::GameState::try_move)
/// hands them back to callers that want to say why.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
pub enum MoveError {
    /// The square at the position is already occupied.
    #[display("Square {} is already occupied", _0)]
    SquareOccupied(#[error(not(source))] Position),

    /// The displayed position is already won or drawn.
    #[display("Game is already over")]
    GameOver,

    /// The index is not a board square.
    #[display("Position {} is out of range (must be 0-8)", _0)]
    OutOfRange(#[error(not(source))] usize),
}
