//! Platform-agnostic key events.
//!
//! Every host maps its native keyboard input to [`Key`]. The interpreter
//! never sees raw platform input.

use serde::{Deserialize, Serialize};

/// A single key press delivered to the terminal session.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Key {
    /// A character typed on the keyboard.
    Char(char),
    /// Submit the current line.
    Enter,
    /// Request completion of the current token.
    Tab,
    /// Delete the character left of the caret.
    Backspace,
    /// Delete the character under the caret.
    Delete,
    Up,
    Down,
    Left,
    Right,
    Home,
    End,
    Escape,
    /// A bare modifier press (Shift, Control, Alt, Meta).
    Modifier,
}

impl Key {
    /// Whether this key should produce a keystroke click.
    ///
    /// Only printable single characters qualify; navigation, editing and
    /// modifier keys are silent.
    pub fn is_printable(&self) -> bool {
        matches!(self, Key::Char(c) if !c.is_control())
    }
}

/// History navigation direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Direction {
    /// Toward older entries.
    Up,
    /// Toward newer entries and the live buffer.
    Down,
}

impl Key {
    /// The history direction this key requests, if any.
    pub fn direction(&self) -> Option<Direction> {
        match self {
            Key::Up => Some(Direction::Up),
            Key::Down => Some(Direction::Down),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn letters_and_symbols_are_printable() {
        for c in ['a', 'Z', '0', '-', ' ', '~', 'é'] {
            assert!(Key::Char(c).is_printable(), "{c:?} should click");
        }
    }

    #[test]
    fn control_characters_are_not_printable() {
        assert!(!Key::Char('\n').is_printable());
        assert!(!Key::Char('\t').is_printable());
        assert!(!Key::Char('\u{7f}').is_printable());
    }

    #[test]
    fn non_character_keys_are_silent() {
        let keys = [
            Key::Enter,
            Key::Tab,
            Key::Backspace,
            Key::Delete,
            Key::Up,
            Key::Down,
            Key::Left,
            Key::Right,
            Key::Home,
            Key::End,
            Key::Escape,
            Key::Modifier,
        ];
        for key in keys {
            assert!(!key.is_printable(), "{key:?} should not click");
        }
    }

    #[test]
    fn arrows_map_to_directions() {
        assert_eq!(Key::Up.direction(), Some(Direction::Up));
        assert_eq!(Key::Down.direction(), Some(Direction::Down));
        assert_eq!(Key::Left.direction(), None);
        assert_eq!(Key::Char('k').direction(), None);
    }

    #[test]
    fn key_serde_roundtrip() {
        let json = serde_json::to_string(&Key::Char('x')).unwrap();
        let back: Key = serde_json::from_str(&json).unwrap();
        assert_eq!(back, Key::Char('x'));
    }
}
