//! Render data for presentation layers.
//!
//! [`GameView::build`] projects a [`GameState`] and the cosmetic
//! [`ViewSettings`] into everything a screen needs: marks, highlight flags,
//! status text and the ordered move list. It holds no game logic of its own.

use crate::games::tictactoe::{
    GameState, HistoryError, MoveDescription, Outcome, Player, Position, Square,
};
use derive_getters::Getters;
use serde::{Deserialize, Serialize};
use tracing::instrument;

/// Order of the move list.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize, strum::Display,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum SortOrder {
    /// Game start first.
    Ascending,
    /// Latest move first.
    #[default]
    Descending,
}

impl SortOrder {
    /// Returns the other order.
    #[instrument]
    pub fn toggle(self) -> Self {
        match self {
            Self::Ascending => Self::Descending,
            Self::Descending => Self::Ascending,
        }
    }
}

/// Cosmetic display preferences. They never affect game state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, derive_new::new)]
pub struct ViewSettings {
    /// Order of the move list.
    pub sort_order: SortOrder,
    /// Whether the move list is shown at all.
    pub show_history: bool,
}

impl ViewSettings {
    /// Flips the move list order.
    pub fn toggle_sort(self) -> Self {
        Self {
            sort_order: self.sort_order.toggle(),
            ..self
        }
    }

    /// Shows or hides the move list.
    pub fn toggle_history(self) -> Self {
        Self {
            show_history: !self.show_history,
            ..self
        }
    }
}

impl Default for ViewSettings {
    fn default() -> Self {
        Self::new(SortOrder::Descending, true)
    }
}

/// One square as it should be drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct CellView {
    /// Which square this is.
    #[getter(copy)]
    position: Position,
    /// What is on it.
    #[getter(copy)]
    square: Square,
    /// True iff the square is part of the winning line.
    #[getter(copy)]
    highlighted: bool,
}

/// Status line text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, derive_more::Display)]
pub enum Status {
    /// Someone completed a line.
    #[display("Winner: {}", _0)]
    Winner(Player),
    /// Full board, no line.
    #[display("No Winner, Game Over.")]
    Draw,
    /// Game continues.
    #[display("Next player: {}", _0)]
    NextPlayer(Player),
}

/// One row of the move list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Getters, Serialize)]
pub struct MoveEntry {
    /// History step this row jumps to.
    #[getter(copy)]
    step: usize,
    /// What happened at that step.
    #[getter(copy)]
    description: MoveDescription,
    /// True for the step currently displayed.
    #[getter(copy)]
    is_current: bool,
}

/// Everything a screen needs to draw one game state.
#[derive(Debug, Clone, PartialEq, Eq, Getters, Serialize)]
pub struct GameView {
    /// Squares in index order.
    cells: [CellView; 9],
    /// Status line.
    #[getter(copy)]
    status: Status,
    /// Move list in display order, empty when history is hidden.
    moves: Vec<MoveEntry>,
    /// Settings the view was built with.
    #[getter(copy)]
    settings: ViewSettings,
}

impl GameView {
    /// Builds the view of `state` at its current step.
    ///
    /// # Errors
    ///
    /// Returns [`HistoryError`] if a history entry cannot be described,
    /// which only happens when the history was corrupted.
    #[instrument(skip_all, fields(step = state.current_step(), sort = %settings.sort_order))]
    pub fn build(state: &GameState, settings: &ViewSettings) -> Result<Self, HistoryError> {
        let outcome = state.outcome();
        let line = outcome.winning_line();
        let board = state.board();

        let cells = Position::ALL.map(|position| CellView {
            position,
            square: board.get(position),
            highlighted: line.is_some_and(|l| l.contains(position)),
        });

        let status = match outcome {
            Outcome::Win { player, .. } => Status::Winner(player),
            Outcome::Draw => Status::Draw,
            Outcome::InProgress => Status::NextPlayer(state.to_move()),
        };

        let moves = if settings.show_history {
            let mut moves = state
                .history()
                .describe_all()?
                .into_iter()
                .enumerate()
                .map(|(step, description)| MoveEntry {
                    step,
                    description,
                    is_current: step == state.current_step(),
                })
                .collect::<Vec<_>>();
            if settings.sort_order == SortOrder::Descending {
                moves.reverse();
            }
            moves
        } else {
            Vec::new()
        };

        Ok(Self {
            cells,
            status,
            moves,
            settings: *settings,
        })
    }

    /// Returns the cell at `position`.
    pub fn cell(&self, position: Position) -> &CellView {
        &self.cells[position.to_index()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn play(indices: &[usize]) -> GameState {
        indices
            .iter()
            .fold(GameState::new(), |state, &index| state.apply_move(index))
    }

    #[test]
    fn test_sort_toggle_round_trips() {
        let settings = ViewSettings::default();
        assert_eq!(settings.sort_order, SortOrder::Descending);
        assert_eq!(settings.toggle_sort().sort_order, SortOrder::Ascending);
        assert_eq!(settings.toggle_sort().toggle_sort(), settings);
    }

    #[test]
    fn test_new_game_view() {
        let view = GameView::build(&GameState::new(), &ViewSettings::default()).unwrap();
        assert_eq!(view.status().to_string(), "Next player: X");
        assert_eq!(view.moves().len(), 1);
        assert!(view.moves()[0].is_current());
        assert!(view.cells().iter().all(|c| !c.highlighted()));
    }

    #[test]
    fn test_winning_cells_highlighted() {
        let view = GameView::build(&play(&[0, 1, 4, 2, 8]), &ViewSettings::default()).unwrap();
        assert_eq!(view.status(), Status::Winner(Player::X));
        let highlighted: Vec<_> = view
            .cells()
            .iter()
            .filter(|c| c.highlighted())
            .map(|c| c.position().to_index())
            .collect();
        assert_eq!(highlighted, vec![0, 4, 8]);
    }

    #[test]
    fn test_hidden_history_has_no_moves() {
        let settings = ViewSettings::default().toggle_history();
        let view = GameView::build(&play(&[0, 1]), &settings).unwrap();
        assert!(view.moves().is_empty());
    }
}
