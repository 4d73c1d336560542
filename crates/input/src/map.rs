//! Key mapping from terminal events to player commands.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Screen-independent player commands.
///
/// Cursor movement is an input-layer concern (the core only sees card
/// indices); the remaining commands map onto core game actions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    CursorLeft,
    CursorRight,
    CursorUp,
    CursorDown,
    /// Flip the card under the cursor (or confirm on menu screens).
    Flip,
    Pause,
    /// Start a fresh game of the current level.
    Replay,
    NextLevel,
    Home,
    Quit,
}

/// Map keyboard input to player commands.
pub fn handle_key_event(key: KeyEvent) -> Option<Command> {
    match key.code {
        // Cursor movement
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('H') => Some(Command::CursorLeft),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('L') => Some(Command::CursorRight),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('K') => Some(Command::CursorUp),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('J') => Some(Command::CursorDown),

        // Flip / confirm
        KeyCode::Enter | KeyCode::Char(' ') => Some(Command::Flip),

        // Game flow
        KeyCode::Char('p') | KeyCode::Char('P') => Some(Command::Pause),
        KeyCode::Char('r') | KeyCode::Char('R') => Some(Command::Replay),
        KeyCode::Char('n') | KeyCode::Char('N') => Some(Command::NextLevel),
        KeyCode::Esc => Some(Command::Home),
        KeyCode::Char('q') | KeyCode::Char('Q') => Some(Command::Quit),

        _ => None,
    }
}

/// Check if the key should quit unconditionally (even while typing a name).
pub fn should_quit(key: KeyEvent) -> bool {
    key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL)
}
