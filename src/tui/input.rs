//! crossterm key events to page keystrokes.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

use crate::model::{Key, KeyPress};

/// Translates a crossterm key event into a [`KeyPress`].
pub fn to_key_press(event: KeyEvent) -> KeyPress {
    let key = match event.code {
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Tab | KeyCode::BackTab => Key::Tab,
        KeyCode::Esc => Key::Escape,
        KeyCode::Enter => Key::Enter,
        _ => Key::Other,
    };
    KeyPress {
        key,
        ctrl: event.modifiers.contains(KeyModifiers::CONTROL),
        meta: event
            .modifiers
            .intersects(KeyModifiers::SUPER | KeyModifiers::META),
        shift: event.modifiers.contains(KeyModifiers::SHIFT),
    }
}
