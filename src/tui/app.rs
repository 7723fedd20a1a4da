//! Application state and key handling.

use super::input::{Action, move_cursor};
use crate::games::tictactoe::{GameState, HistoryError, Position};
use crate::view::{GameView, SortOrder, ViewSettings};
use tracing::{debug, info, instrument};

/// Main application state.
///
/// Each [`Action`] is one transition of the game state or the cosmetic
/// settings; nothing is drawn in between.
#[derive(Debug, Clone)]
pub struct App {
    game: GameState,
    settings: ViewSettings,
    cursor: Position,
    selected_step: usize,
    message: Option<String>,
    should_quit: bool,
}

impl App {
    /// Creates a new application.
    pub fn new(settings: ViewSettings) -> Self {
        Self {
            game: GameState::new(),
            settings,
            cursor: Position::Center,
            selected_step: 0,
            message: None,
            should_quit: false,
        }
    }

    /// Gets the current game.
    pub fn game(&self) -> &GameState {
        &self.game
    }

    /// Gets the cosmetic settings.
    pub fn settings(&self) -> ViewSettings {
        self.settings
    }

    /// Gets the board cursor.
    pub fn cursor(&self) -> Position {
        self.cursor
    }

    /// Gets the history step highlighted in the move list.
    pub fn selected_step(&self) -> usize {
        self.selected_step
    }

    /// Gets the feedback from the last rejected action.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// True once the user asked to quit.
    pub fn should_quit(&self) -> bool {
        self.should_quit
    }

    /// Builds the render data for the current state.
    pub fn view(&self) -> Result<GameView, HistoryError> {
        GameView::build(&self.game, &self.settings)
    }

    /// Applies one action.
    #[instrument(skip(self), fields(step = self.game.current_step()))]
    pub fn handle(&mut self, action: Action) {
        self.message = None;
        match action {
            Action::MoveCursor(key) => self.cursor = move_cursor(self.cursor, key),
            Action::PlayCursor => self.play(self.cursor.to_index()),
            Action::PlayIndex(index) => {
                if let Some(pos) = Position::from_index(index) {
                    self.cursor = pos;
                }
                self.play(index);
            }
            Action::SelectPrevious => self.shift_selection(false),
            Action::SelectNext => self.shift_selection(true),
            Action::JumpToSelected => {
                self.game = self.game.jump_to(self.selected_step);
                debug!(step = self.selected_step, "Jumped to selected step");
            }
            Action::ToggleSort => self.settings = self.settings.toggle_sort(),
            Action::ToggleHistory => self.settings = self.settings.toggle_history(),
            Action::Restart => {
                info!("Restarting game");
                self.game = self.game.restart();
                self.selected_step = 0;
            }
            Action::Quit => self.should_quit = true,
        }
    }

    fn play(&mut self, index: usize) {
        match self.game.try_move(index) {
            Ok(next) => {
                self.game = next;
                self.selected_step = self.game.current_step();
            }
            Err(e) => {
                debug!(error = %e, "Move rejected");
                self.message = Some(e.to_string());
            }
        }
    }

    /// Moves the selection one row down (`forward`) or up the displayed list.
    fn shift_selection(&mut self, forward: bool) {
        let last = self.game.history().len() - 1;
        let later = forward == (self.settings.sort_order == SortOrder::Ascending);
        self.selected_step = if later {
            (self.selected_step + 1).min(last)
        } else {
            self.selected_step.saturating_sub(1)
        };
    }
}
