//! Board snapshots, one per ply, and the move descriptions derived from them.

use super::action::Move;
use super::invariants::{InvariantSet, InvariantViolation, TicTacToeInvariants};
use super::{Board, Player};
use serde::{Deserialize, Serialize};
use tracing::{error, instrument};

/// An immutable snapshot of the board at one point in game time.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct HistoryEntry {
    board: Board,
}

impl HistoryEntry {
    /// Wraps a board snapshot.
    pub fn new(board: Board) -> Self {
        Self { board }
    }

    /// Returns the board at this point.
    pub fn board(&self) -> &Board {
        &self.board
    }
}

/// Ordered board snapshots. Entry 0 is the empty starting board.
///
/// Each later entry differs from its predecessor in exactly one square.
/// Deserialized histories are checked against the invariants before use.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawHistory")]
pub struct History {
    entries: Vec<HistoryEntry>,
}

/// Unchecked wire form of [`History`].
#[derive(Deserialize)]
struct RawHistory {
    entries: Vec<HistoryEntry>,
}

impl TryFrom<RawHistory> for History {
    type Error = HistoryError;

    fn try_from(raw: RawHistory) -> Result<Self, Self::Error> {
        if raw.entries.is_empty() {
            return Err(HistoryError::new("history has no entries"));
        }
        let history = Self {
            entries: raw.entries,
        };
        history.check_invariants().map_err(|violations| {
            let reasons: Vec<_> = violations.iter().map(ToString::to_string).collect();
            HistoryError::new(format!("history violates invariants: {}", reasons.join("; ")))
        })?;
        Ok(history)
    }
}

impl History {
    /// Creates a history holding only the empty board.
    pub fn new() -> Self {
        Self {
            entries: vec![HistoryEntry::new(Board::new())],
        }
    }

    /// Builds a history from raw entries without checking them.
    ///
    /// Meant for tests and tooling that need to inspect arbitrary sequences;
    /// an empty vector still yields the empty starting board.
    pub fn from_entries(entries: Vec<HistoryEntry>) -> Self {
        if entries.is_empty() {
            return Self::new();
        }
        Self { entries }
    }

    /// Number of entries, including the starting board.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Always false: the starting board is never removed, and deserialization
    /// rejects empty histories.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Returns the entry at `step`.
    pub fn get(&self, step: usize) -> Option<&HistoryEntry> {
        self.entries.get(step)
    }

    /// Returns all entries in order.
    pub fn entries(&self) -> &[HistoryEntry] {
        &self.entries
    }

    /// Returns the most recent entry.
    pub fn last(&self) -> &HistoryEntry {
        // from_entries and new both guarantee at least one entry
        &self.entries[self.entries.len() - 1]
    }

    /// Returns the entries up to and including `step`, discarding the rest.
    pub(super) fn truncated(&self, step: usize) -> Self {
        let keep = (step + 1).min(self.entries.len());
        Self {
            entries: self.entries[..keep].to_vec(),
        }
    }

    /// Appends a snapshot.
    pub(super) fn push(&mut self, board: Board) {
        self.entries.push(HistoryEntry::new(board));
    }

    /// Describes the ply that produced entry `step`.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if `step` is past the end, or if the entry
    /// does not differ from its predecessor in exactly one square. The
    /// latter means the history was corrupted and trips a debug assertion.
    #[instrument(skip(self), fields(len = self.entries.len()))]
    pub fn describe(&self, step: usize) -> Result<MoveDescription, HistoryError> {
        if step == 0 {
            return Ok(MoveDescription::GameStart);
        }
        let (Some(before), Some(after)) = (self.get(step - 1), self.get(step)) else {
            return Err(HistoryError::new(format!(
                "step {} is beyond history of length {}",
                step,
                self.entries.len()
            )));
        };

        match before.board().diff(after.board()).as_slice() {
            [position] => Ok(MoveDescription::Move {
                step,
                action: Move::new(Player::placing_step(step), *position),
            }),
            changed => {
                error!(
                    step,
                    changed = changed.len(),
                    "History entry does not differ by one square"
                );
                debug_assert!(
                    changed.len() == 1,
                    "history corrupted at step {}: {} squares changed",
                    step,
                    changed.len()
                );
                Err(HistoryError::new(format!(
                    "history corrupted at step {}: {} squares changed",
                    step,
                    changed.len()
                )))
            }
        }
    }

    /// Describes every entry in order.
    pub fn describe_all(&self) -> Result<Vec<MoveDescription>, HistoryError> {
        (0..self.entries.len()).map(|step| self.describe(step)).collect()
    }

    /// Checks every history invariant.
    pub fn check_invariants(&self) -> Result<(), Vec<InvariantViolation>> {
        TicTacToeInvariants::check_all(self)
    }
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

/// What happened at one history step.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MoveDescription {
    /// Step 0, the empty board.
    GameStart,
    /// A mark was placed.
    Move {
        /// History step produced by this move (1-based ply).
        step: usize,
        /// Who played where.
        action: Move,
    },
}

impl MoveDescription {
    /// Returns the move, unless this is the game start.
    pub fn action(&self) -> Option<Move> {
        match self {
            MoveDescription::GameStart => None,
            MoveDescription::Move { action, .. } => Some(*action),
        }
    }
}

impl std::fmt::Display for MoveDescription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MoveDescription::GameStart => write!(f, "Game Start."),
            MoveDescription::Move { step, action } => write!(f, "Move #{}: {}", step, action),
        }
    }
}

/// History could not be described.
#[derive(Debug, Clone, PartialEq, Eq, derive_more::Display, derive_more::Error)]
#[display("History error: {} at {}:{}", message, file, line)]
pub struct HistoryError {
    /// Error message.
    pub message: String,
    /// Line number where error occurred.
    pub line: u32,
    /// Source file where error occurred.
    pub file: &'static str,
}

impl HistoryError {
    /// Creates a new history error with caller location tracking.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let loc = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: loc.line(),
            file: loc.file(),
        }
    }
}
