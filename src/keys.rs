//! Host-neutral key events understood by the input widgets.

use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// A key press delivered to an input widget.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum KeyInput {
    Left,
    Right,
    Home,
    End,
    Up,
    Down,
    Backspace,
    Delete,
    Enter,
    /// A single printable character.
    Char(char),
}

impl KeyInput {
    /// Translate a crossterm key event.
    ///
    /// Releases, control/alt chords and non-printable characters map to `None`.
    /// `Ctrl+H` is treated as backspace since many terminals send it for that key.
    pub fn from_key_event(event: KeyEvent) -> Option<Self> {
        if event.kind == KeyEventKind::Release {
            return None;
        }
        let chord = event.modifiers.intersects(KeyModifiers::CONTROL | KeyModifiers::ALT);
        match event.code {
            KeyCode::Char('h') if event.modifiers.contains(KeyModifiers::CONTROL) => {
                Some(KeyInput::Backspace)
            }
            KeyCode::Char(_) if chord => None,
            KeyCode::Char(c) if !c.is_control() => Some(c.into()),
            KeyCode::Left => Some(KeyInput::Left),
            KeyCode::Right => Some(KeyInput::Right),
            KeyCode::Home => Some(KeyInput::Home),
            KeyCode::End => Some(KeyInput::End),
            KeyCode::Up => Some(KeyInput::Up),
            KeyCode::Down => Some(KeyInput::Down),
            KeyCode::Backspace => Some(KeyInput::Backspace),
            KeyCode::Delete => Some(KeyInput::Delete),
            KeyCode::Enter => Some(KeyInput::Enter),
            _ => None,
        }
    }
}

impl From<char> for KeyInput {
    fn from(c: char) -> Self {
        KeyInput::Char(c)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn maps_named_keys() {
        let key = KeyEvent::new(KeyCode::Home, KeyModifiers::NONE);
        assert_eq!(KeyInput::from_key_event(key), Some(KeyInput::Home));
        let key = KeyEvent::new(KeyCode::Delete, KeyModifiers::NONE);
        assert_eq!(KeyInput::from_key_event(key), Some(KeyInput::Delete));
    }

    #[test]
    fn maps_printable_characters_including_shifted() {
        let key = KeyEvent::new(KeyCode::Char('A'), KeyModifiers::SHIFT);
        assert_eq!(KeyInput::from_key_event(key), Some(KeyInput::Char('A')));
    }

    #[test]
    fn ctrl_h_is_backspace_and_other_chords_are_dropped() {
        let key = KeyEvent::new(KeyCode::Char('h'), KeyModifiers::CONTROL);
        assert_eq!(KeyInput::from_key_event(key), Some(KeyInput::Backspace));
        let key = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert_eq!(KeyInput::from_key_event(key), None);
    }

    #[test]
    fn characters_convert_into_char_keys() {
        assert_eq!(KeyInput::from('x'), KeyInput::Char('x'));
        let key: KeyInput = '-'.into();
        assert_eq!(key, KeyInput::Char('-'));
    }

    #[test]
    fn ignores_unmapped_keys() {
        let key = KeyEvent::new(KeyCode::Tab, KeyModifiers::NONE);
        assert_eq!(KeyInput::from_key_event(key), None);
    }
}
