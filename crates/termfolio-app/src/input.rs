//! crossterm key events to session keys.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};
use termfolio_types::input::Key;

/// What the host loop should do with one key event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HostAction {
    Key(Key),
    Quit,
    Ignore,
}

/// Translate a crossterm key event.
///
/// Escape and Ctrl-C leave the program. Key releases (on terminals that
/// report them) and other Ctrl chords are dropped.
pub fn translate(event: KeyEvent) -> HostAction {
    if event.kind == KeyEventKind::Release {
        return HostAction::Ignore;
    }
    let ctrl = event.modifiers.contains(KeyModifiers::CONTROL);
    let key = match event.code {
        KeyCode::Char('c') if ctrl => return HostAction::Quit,
        KeyCode::Char(_) if ctrl => return HostAction::Ignore,
        KeyCode::Esc => return HostAction::Quit,
        KeyCode::Char(c) => Key::Char(c),
        KeyCode::Enter => Key::Enter,
        KeyCode::Tab => Key::Tab,
        KeyCode::Backspace => Key::Backspace,
        KeyCode::Delete => Key::Delete,
        KeyCode::Up => Key::Up,
        KeyCode::Down => Key::Down,
        KeyCode::Left => Key::Left,
        KeyCode::Right => Key::Right,
        KeyCode::Home => Key::Home,
        KeyCode::End => Key::End,
        KeyCode::Modifier(_) => Key::Modifier,
        _ => return HostAction::Ignore,
    };
    HostAction::Key(key)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(code: KeyCode, modifiers: KeyModifiers) -> KeyEvent {
        KeyEvent::new(code, modifiers)
    }

    #[test]
    fn printable_and_editing_keys() {
        assert_eq!(
            translate(press(KeyCode::Char('a'), KeyModifiers::NONE)),
            HostAction::Key(Key::Char('a'))
        );
        assert_eq!(
            translate(press(KeyCode::Char('A'), KeyModifiers::SHIFT)),
            HostAction::Key(Key::Char('A'))
        );
        assert_eq!(
            translate(press(KeyCode::Tab, KeyModifiers::NONE)),
            HostAction::Key(Key::Tab)
        );
        assert_eq!(
            translate(press(KeyCode::Up, KeyModifiers::NONE)),
            HostAction::Key(Key::Up)
        );
    }

    #[test]
    fn quit_chords() {
        assert_eq!(
            translate(press(KeyCode::Char('c'), KeyModifiers::CONTROL)),
            HostAction::Quit
        );
        assert_eq!(
            translate(press(KeyCode::Esc, KeyModifiers::NONE)),
            HostAction::Quit
        );
        assert_eq!(
            translate(press(KeyCode::Char('l'), KeyModifiers::CONTROL)),
            HostAction::Ignore
        );
    }

    #[test]
    fn releases_are_ignored() {
        let mut event = press(KeyCode::Char('x'), KeyModifiers::NONE);
        event.kind = KeyEventKind::Release;
        assert_eq!(translate(event), HostAction::Ignore);
    }
}
