//! Game state with time-travel history.
//!
//! A [`GameState`] is a history of board snapshots plus the step being
//! displayed. Every transition takes `&self` and returns a new state, so the
//! previous snapshot stays valid for whoever still holds it.

use super::action::MoveError;
use super::history::{History, HistoryError, MoveDescription};
use super::phases::{Outcome, Phase};
use super::rules::evaluate_outcome;
use super::{Board, Player, Position, Square};
use serde::{Deserialize, Serialize};
use tracing::{debug, instrument, warn};

/// Complete game state.
///
/// Only the history and the current step are stored. The player to move, the
/// outcome and the phase are recomputed from them on every call.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawGameState")]
pub struct GameState {
    history: History,
    current_step: usize,
}

/// Unchecked wire form of [`GameState`].
#[derive(Deserialize)]
struct RawGameState {
    history: History,
    current_step: usize,
}

impl TryFrom<RawGameState> for GameState {
    type Error = HistoryError;

    fn try_from(raw: RawGameState) -> Result<Self, Self::Error> {
        if raw.current_step >= raw.history.len() {
            return Err(HistoryError::new(format!(
                "current step {} is beyond history of length {}",
                raw.current_step,
                raw.history.len()
            )));
        }
        Ok(Self {
            history: raw.history,
            current_step: raw.current_step,
        })
    }
}

impl GameState {
    /// Creates a new game: one empty board, step 0, X to move.
    #[instrument]
    pub fn new() -> Self {
        Self {
            history: History::new(),
            current_step: 0,
        }
    }

    /// Returns the full history, including entries after the current step.
    pub fn history(&self) -> &History {
        &self.history
    }

    /// Returns the step being displayed.
    pub fn current_step(&self) -> usize {
        self.current_step
    }

    /// Returns the board at the current step.
    pub fn board(&self) -> &Board {
        // current_step < history.len() holds for every constructed state
        self.history
            .get(self.current_step)
            .map(|entry| entry.board())
            .unwrap_or_else(|| self.history.last().board())
    }

    /// Returns the player to move at the current step.
    pub fn to_move(&self) -> Player {
        Player::to_move_at(self.current_step)
    }

    /// Evaluates the board at the current step.
    pub fn outcome(&self) -> Outcome {
        evaluate_outcome(self.board())
    }

    /// Returns the lifecycle phase at the current step.
    pub fn phase(&self) -> Phase {
        Phase::from_outcome(self.current_step, &self.outcome())
    }

    /// Describes the ply that produced `step`.
    pub fn describe(&self, step: usize) -> Result<MoveDescription, HistoryError> {
        self.history.describe(step)
    }

    /// Plays the current player's mark at `index`, or explains why not.
    ///
    /// History after the current step is discarded before the new board is
    /// appended, so playing from a past step abandons the old future.
    ///
    /// # Errors
    ///
    /// - [`MoveError::GameOver`] if the current board is won or drawn
    /// - [`MoveError::OutOfRange`] if `index` is not 0-8
    /// - [`MoveError::SquareOccupied`] if the square is taken
    #[instrument(skip(self), fields(step = self.current_step, player = %self.to_move()))]
    pub fn try_move(&self, index: usize) -> Result<Self, MoveError> {
        if self.phase().is_terminal() {
            return Err(MoveError::GameOver);
        }
        let position = Position::from_index(index).ok_or(MoveError::OutOfRange(index))?;
        if !self.board().is_empty(position) {
            return Err(MoveError::SquareOccupied(position));
        }

        let mut history = self.history.truncated(self.current_step);
        let board = history
            .last()
            .board()
            .with(position, Square::Occupied(self.to_move()));
        history.push(board);
        let current_step = history.len() - 1;

        debug_assert!(
            history.check_invariants().is_ok(),
            "move broke history invariants: {:?}",
            history.check_invariants()
        );

        let next = Self {
            history,
            current_step,
        };
        debug!(%position, current_step, outcome = %next.outcome(), "Move applied");
        Ok(next)
    }

    /// Plays the current player's mark at `index`.
    ///
    /// Returns an unchanged copy when the game is over, the index is out of
    /// range, or the square is occupied.
    #[instrument(skip(self), fields(step = self.current_step))]
    pub fn apply_move(&self, index: usize) -> Self {
        match self.try_move(index) {
            Ok(next) => next,
            Err(e) => {
                debug!(error = %e, "Move ignored");
                self.clone()
            }
        }
    }

    /// Displays `step` without touching the history.
    ///
    /// Out-of-range steps leave the state unchanged.
    #[instrument(skip(self), fields(len = self.history.len()))]
    pub fn jump_to(&self, step: usize) -> Self {
        if step >= self.history.len() {
            warn!(step, "Jump target outside history, ignoring");
            return self.clone();
        }
        debug!(step, "Jumped");
        Self {
            history: self.history.clone(),
            current_step: step,
        }
    }

    /// Discards everything and starts over.
    #[instrument(skip(self))]
    pub fn restart(&self) -> Self {
        debug!(discarded = self.history.len(), "Restarting game");
        Self::new()
    }
}

impl Default for GameState {
    fn default() -> Self {
        Self::new()
    }
}
