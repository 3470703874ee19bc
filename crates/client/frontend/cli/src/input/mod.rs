//! Input processing for the CLI client.
//!
//! This module owns the keyboard-to-input mapping so the rest of the
//! application can remain agnostic about concrete key bindings or the
//! specifics of `crossterm` events.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use game_core::Input;

/// Translates `KeyEvent`s into game inputs.
#[derive(Clone, Copy, Debug, Default)]
pub struct InputHandler;

impl InputHandler {
    pub fn new() -> Self {
        Self
    }

    /// Converts a raw key event into a game input.
    pub fn handle_key(&self, key: KeyEvent) -> Input {
        if key.modifiers.contains(KeyModifiers::CONTROL) {
            return match key.code {
                KeyCode::Char('c') | KeyCode::Char('C') => Input::Quit,
                _ => Input::None,
            };
        }

        match key.code {
            KeyCode::Char(ch) => self.handle_char(ch),
            KeyCode::Left => Input::MoveLeft,
            KeyCode::Right => Input::MoveRight,
            KeyCode::Up => Input::MoveUp,
            KeyCode::Down => Input::MoveDown,
            KeyCode::Esc => Input::Quit,
            _ => Input::None,
        }
    }

    fn handle_char(&self, raw: char) -> Input {
        match raw.to_ascii_lowercase() {
            'q' => Input::Quit,
            'h' | 'a' => Input::MoveLeft,
            'j' | 's' => Input::MoveDown,
            'k' | 'w' => Input::MoveUp,
            'l' | 'd' => Input::MoveRight,
            _ => Input::None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyEventState, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent {
            code,
            modifiers: KeyModifiers::empty(),
            kind: KeyEventKind::Press,
            state: KeyEventState::NONE,
        }
    }

    #[test]
    fn maps_movement_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('h'))), Input::MoveLeft);
        assert_eq!(handler.handle_key(key(KeyCode::Char('W'))), Input::MoveUp);
        assert_eq!(handler.handle_key(key(KeyCode::Char('j'))), Input::MoveDown);
        assert_eq!(handler.handle_key(key(KeyCode::Char('d'))), Input::MoveRight);
        assert_eq!(handler.handle_key(key(KeyCode::Left)), Input::MoveLeft);
        assert_eq!(handler.handle_key(key(KeyCode::Down)), Input::MoveDown);
    }

    #[test]
    fn maps_quit_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('q'))), Input::Quit);
        assert_eq!(handler.handle_key(key(KeyCode::Esc)), Input::Quit);

        let ctrl_c = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('c'))
        };
        assert_eq!(handler.handle_key(ctrl_c), Input::Quit);
    }

    #[test]
    fn ignores_unknown_keys() {
        let handler = InputHandler::new();
        assert_eq!(handler.handle_key(key(KeyCode::Char('x'))), Input::None);
        assert_eq!(handler.handle_key(key(KeyCode::Enter)), Input::None);

        let ctrl_w = KeyEvent {
            modifiers: KeyModifiers::CONTROL,
            ..key(KeyCode::Char('w'))
        };
        assert_eq!(handler.handle_key(ctrl_w), Input::None);
    }
}
