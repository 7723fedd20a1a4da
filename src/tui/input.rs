//! Key bindings and cursor movement.

use crate::games::tictactoe::Position;
use crossterm::event::KeyCode;

/// A user action, one per key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Move the board cursor with an arrow key.
    MoveCursor(KeyCode),
    /// Play at the cursor.
    PlayCursor,
    /// Play at a board index (keys 1-9 map to 0-8).
    PlayIndex(usize),
    /// Move the history selection up the displayed list.
    SelectPrevious,
    /// Move the history selection down the displayed list.
    SelectNext,
    /// Jump to the selected history step.
    JumpToSelected,
    /// Flip the move list order.
    ToggleSort,
    /// Show or hide the move list.
    ToggleHistory,
    /// Start a new game.
    Restart,
    /// Leave the program.
    Quit,
}

/// Maps a key to its action, if it has one.
pub fn action_for(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Up | KeyCode::Down | KeyCode::Left | KeyCode::Right => {
            Some(Action::MoveCursor(key))
        }
        KeyCode::Enter | KeyCode::Char(' ') => Some(Action::PlayCursor),
        KeyCode::Char(c @ '1'..='9') => c.to_digit(10).map(|d| Action::PlayIndex(d as usize - 1)),
        KeyCode::Char('k') => Some(Action::SelectPrevious),
        KeyCode::Char('j') => Some(Action::SelectNext),
        KeyCode::Char('g') => Some(Action::JumpToSelected),
        KeyCode::Char('s') => Some(Action::ToggleSort),
        KeyCode::Char('h') => Some(Action::ToggleHistory),
        KeyCode::Char('r') => Some(Action::Restart),
        KeyCode::Char('q') | KeyCode::Esc => Some(Action::Quit),
        _ => None,
    }
}

/// Moves cursor based on arrow keys, stopping at the board edge.
pub fn move_cursor(cursor: Position, key: KeyCode) -> Position {
    let (row, col) = (cursor.row(), cursor.col());
    let (row, col) = match key {
        KeyCode::Up => (row.saturating_sub(1).max(1), col),
        KeyCode::Down => ((row + 1).min(3), col),
        KeyCode::Left => (row, col.saturating_sub(1).max(1)),
        KeyCode::Right => (row, (col + 1).min(3)),
        _ => (row, col),
    };
    Position::from_row_col(row, col).unwrap_or(cursor)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cursor_moves_within_board() {
        assert_eq!(move_cursor(Position::Center, KeyCode::Up), Position::TopCenter);
        assert_eq!(move_cursor(Position::Center, KeyCode::Right), Position::MiddleRight);
        assert_eq!(move_cursor(Position::BottomLeft, KeyCode::Left), Position::BottomLeft);
        assert_eq!(move_cursor(Position::BottomLeft, KeyCode::Down), Position::BottomLeft);
        assert_eq!(move_cursor(Position::TopRight, KeyCode::Up), Position::TopRight);
    }

    #[test]
    fn test_digit_keys_are_one_based() {
        assert_eq!(action_for(KeyCode::Char('1')), Some(Action::PlayIndex(0)));
        assert_eq!(action_for(KeyCode::Char('9')), Some(Action::PlayIndex(8)));
        assert_eq!(action_for(KeyCode::Char('0')), None);
    }
}
