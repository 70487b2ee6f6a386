//! Terminal key bindings.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use brick_tetris_types::UserAction;

/// Maps a terminal key event to a player action. Keys outside the bindings
/// return `None` and are dropped at the edge.
pub fn map_key_event(event: KeyEvent) -> Option<UserAction> {
    if event.modifiers.contains(KeyModifiers::CONTROL) {
        return match event.code {
            KeyCode::Char('c') => Some(UserAction::Terminate),
            _ => None,
        };
    }

    match event.code {
        KeyCode::Enter => Some(UserAction::Start),
        KeyCode::Char('p') | KeyCode::Char('P') => Some(UserAction::Pause),
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Some(UserAction::Terminate),
        KeyCode::Left | KeyCode::Char('h') | KeyCode::Char('a') => Some(UserAction::Left),
        KeyCode::Right | KeyCode::Char('l') | KeyCode::Char('d') => Some(UserAction::Right),
        KeyCode::Down | KeyCode::Char('j') | KeyCode::Char('s') => Some(UserAction::Down),
        KeyCode::Up | KeyCode::Char('k') | KeyCode::Char('w') => Some(UserAction::Up),
        KeyCode::Char(' ') => Some(UserAction::Rotate),
        _ => None,
    }
}
