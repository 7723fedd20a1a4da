//! Tic-tac-toe game core: board, rules, history and time travel.

mod action;
mod game;
mod history;
pub mod invariants;
mod phases;
mod position;
pub mod rules;
mod types;

pub use action::{Move, MoveError};
pub use game::GameState;
pub use history::{History, HistoryEntry, HistoryError, MoveDescription};
pub use invariants::{Invariant, InvariantSet, InvariantViolation, TicTacToeInvariants};
pub use phases::{Outcome, Phase};
pub use position::Position;
pub use rules::{WinningLine, evaluate_outcome};
pub use types::{Board, Player, Square};

/// Alias for clarity where a player is meant as the mark on a square.
pub type Mark = Player;
