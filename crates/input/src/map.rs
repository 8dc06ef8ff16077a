//! Key mapping from terminal events to UI intents.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// What the player asked the UI to do.
///
/// Column indices are 0-based; digit keys are translated (`'1'` selects
/// column 0).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiIntent {
    /// Move the column cursor one step left.
    CursorLeft,
    /// Move the column cursor one step right.
    CursorRight,
    /// Drop a disc into the column under the cursor.
    Drop,
    /// Drop a disc into a specific column.
    SelectColumn(usize),
    /// Start a fresh game.
    Restart,
}

/// Map keyboard input to a UI intent.
pub fn handle_key_event(key: KeyEvent) -> Option<UiIntent> {
    match key.code {
        // Cursor movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') | KeyCode::Char('a')
        | KeyCode::Char('A') => Some(UiIntent::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') | KeyCode::Char('d')
        | KeyCode::Char('D') => Some(UiIntent::CursorRight),

        // Dropping
        KeyCode::Enter | KeyCode::Char(' ') | KeyCode::Down | KeyCode::Char('j')
        | KeyCode::Char('J') | KeyCode::Char('s') | KeyCode::Char('S') => Some(UiIntent::Drop),

        // Direct column selection ('1' is the leftmost column)
        KeyCode::Char(ch @ '1'..='9') => {
            Some(UiIntent::SelectColumn(ch as usize - '1' as usize))
        }

        // Restart
        KeyCode::Char('r') | KeyCode::Char('R') => Some(UiIntent::Restart),

        _ => None,
    }
}

/// Check if key should quit the game.
pub fn should_quit(key: KeyEvent) -> bool {
    matches!(key.code, KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc)
        || (key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL))
}
