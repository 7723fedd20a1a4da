//! Tic-tac-toe with move history and time travel.
//!
//! # Architecture
//!
//! - **Games**: the game core. [`GameState`] holds board snapshots and the
//!   displayed step; moves, jumps and restarts return new states.
//! - **View**: [`GameView`] turns a state plus cosmetic [`ViewSettings`] into
//!   render data.
//! - **Settings**: startup preferences from a TOML file.
//! - **TUI**: a ratatui terminal front end.
//!
//! # Example
//!
//! ```
//! use tictactoe_replay::{GameState, Outcome, Player};
//!
//! let state = [0, 1, 4, 2, 8]
//!     .into_iter()
//!     .fold(GameState::new(), |state, index| state.apply_move(index));
//! assert_eq!(state.outcome().winner(), Some(Player::X));
//!
//! // Rewind two plies and take a different line; the old future is dropped.
//! let branched = state.jump_to(3).apply_move(6);
//! assert_eq!(branched.history().len(), 5);
//! assert!(matches!(branched.outcome(), Outcome::InProgress));
//! ```

#![warn(missing_docs)]
#![forbid(unsafe_code)]

pub mod games;
mod settings;
pub mod tui;
mod view;

// Crate-level exports - Settings
pub use settings::{ConfigError, Settings};

// Crate-level exports - View model
pub use view::{CellView, GameView, MoveEntry, SortOrder, Status, ViewSettings};

// Crate-level exports - Game types (tic-tac-toe)
pub use games::tictactoe::{
    Board, GameState, History, HistoryEntry, HistoryError, Mark, Move, MoveDescription, MoveError,
    Outcome, Phase, Player, Position, Square, WinningLine, evaluate_outcome,
};
