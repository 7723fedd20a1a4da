//! Derived game results and lifecycle phases.
//!
//! Neither type is ever stored on a game; both are recomputed from the board
//! and step they describe.

use super::Player;
use super::rules::WinningLine;
use serde::{Deserialize, Serialize};

/// Result of evaluating a board.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Outcome {
    /// No line is complete and at least one square is empty.
    InProgress,
    /// A player completed a line.
    Win {
        /// The winning player.
        player: Player,
        /// The first completed line in check order.
        line: WinningLine,
    },
    /// The board is full with no completed line.
    Draw,
}

impl Outcome {
    /// Returns the winner if there is one.
    pub fn winner(&self) -> Option<Player> {
        match self {
            Outcome::Win { player, .. } => Some(*player),
            _ => None,
        }
    }

    /// Returns the winning line if there is one.
    pub fn winning_line(&self) -> Option<WinningLine> {
        match self {
            Outcome::Win { line, .. } => Some(*line),
            _ => None,
        }
    }

}

impl std::fmt::Display for Outcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Outcome::InProgress => write!(f, "In progress"),
            Outcome::Win { player, .. } => write!(f, "Player {} wins", player),
            Outcome::Draw => write!(f, "Draw"),
        }
    }
}

/// Lifecycle phase of the displayed position.
///
/// `Won` and `Drawn` reject further moves but can still be left by jumping
/// back through the history or restarting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Phase {
    /// No mark has been placed.
    Empty,
    /// At least one mark placed and the game is undecided.
    InProgress,
    /// A player has completed a line.
    Won,
    /// The board filled with no line.
    Drawn,
}

impl Phase {
    /// Classifies a position from its step and outcome.
    pub fn from_outcome(step: usize, outcome: &Outcome) -> Self {
        match outcome {
            Outcome::Win { .. } => Phase::Won,
            Outcome::Draw => Phase::Drawn,
            Outcome::InProgress if step == 0 => Phase::Empty,
            Outcome::InProgress => Phase::InProgress,
        }
    }

    /// Returns true for the phases that reject moves.
    pub fn is_terminal(self) -> bool {
        matches!(self, Phase::Won | Phase::Drawn)
    }
}
