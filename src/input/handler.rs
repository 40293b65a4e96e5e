use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::game::Direction;

/// What a key press asks the game to do.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyAction {
    Steer(Direction),
    Restart,
    Quit,
    /// Not part of the recognized alphabet; treated as no input
    Ignored,
}

/// Map a raw terminal key event onto a game action.
///
/// Arrow keys and WASD steer, `q`/`Esc`/ctrl-c quit, `r` starts a new run.
pub fn resolve_key(key: KeyEvent) -> KeyAction {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return KeyAction::Quit;
    }

    match key.code {
        KeyCode::Up | KeyCode::Char('w' | 'W') => KeyAction::Steer(Direction::Up),
        KeyCode::Down | KeyCode::Char('s' | 'S') => KeyAction::Steer(Direction::Down),
        KeyCode::Left | KeyCode::Char('a' | 'A') => KeyAction::Steer(Direction::Left),
        KeyCode::Right | KeyCode::Char('d' | 'D') => KeyAction::Steer(Direction::Right),
        KeyCode::Char('q' | 'Q') | KeyCode::Esc => KeyAction::Quit,
        KeyCode::Char('r' | 'R') => KeyAction::Restart,
        _ => KeyAction::Ignored,
    }
}
