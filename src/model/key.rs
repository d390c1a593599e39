//! Host-agnostic keystrokes.

/// The key part of a [`KeyPress`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    Char(char),
    Backspace,
    Delete,
    Left,
    Right,
    Up,
    Down,
    Home,
    End,
    Tab,
    Escape,
    Enter,
    /// Any other key (function keys, media keys, ...).
    Other,
}

/// A key with its modifier state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyPress {
    pub key: Key,
    pub ctrl: bool,
    pub meta: bool,
    pub shift: bool,
}

impl KeyPress {
    /// A key with no modifiers.
    pub fn new(key: Key) -> Self {
        Self {
            key,
            ctrl: false,
            meta: false,
            shift: false,
        }
    }

    /// A plain character keystroke.
    pub fn char(ch: char) -> Self {
        Self::new(Key::Char(ch))
    }

    /// A Ctrl-modified character keystroke.
    pub fn ctrl(ch: char) -> Self {
        Self {
            ctrl: true,
            ..Self::char(ch)
        }
    }

    /// A Meta/Cmd-modified character keystroke.
    pub fn meta(ch: char) -> Self {
        Self {
            meta: true,
            ..Self::char(ch)
        }
    }

    /// Adds the Shift modifier.
    pub fn with_shift(self) -> Self {
        Self {
            shift: true,
            ..self
        }
    }

    /// Movement, deletion, tab, escape and enter keys.
    pub fn is_navigation(&self) -> bool {
        !matches!(self.key, Key::Char(_) | Key::Other)
    }

    /// Copy, cut, paste, undo and select-all with Ctrl or Meta held.
    pub fn is_clipboard_shortcut(&self) -> bool {
        if !(self.ctrl || self.meta) {
            return false;
        }
        matches!(
            self.key,
            Key::Char(c) if matches!(c.to_ascii_lowercase(), 'a' | 'c' | 'v' | 'x' | 'z')
        )
    }

    /// Keys a character cap never blocks.
    pub fn always_permitted(&self) -> bool {
        self.is_navigation() || self.is_clipboard_shortcut()
    }

    /// Enter or Space, the keys that activate a button.
    pub fn activates_button(&self) -> bool {
        !(self.ctrl || self.meta) && matches!(self.key, Key::Enter | Key::Char(' '))
    }
}
