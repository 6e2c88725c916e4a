//! Input field handling for the terminal user interface.
//!
//! [`InputField`] is the editable single-line buffer behind a text input: the
//! characters, an insertion cursor and the [`Viewport`] that scrolls them.
//! Every operation updates all three together so they never disagree.

use tracing::trace;

use crate::tui::viewport::Viewport;

/// A text buffer with cursor position and horizontal scroll management.
///
/// The cursor is an insertion point in `0..=len`, counted in characters.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct InputField {
    chars: Vec<char>,
    cursor: usize,
    viewport: Viewport,
}

impl InputField {
    /// Create a new empty input field.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an input field with initial text value, cursor at the end.
    pub fn with_value(value: &str) -> Self {
        let mut field = Self::new();
        field.set_value(value);
        field
    }

    pub fn value(&self) -> String {
        self.chars.iter().collect()
    }

    pub fn chars(&self) -> &[char] {
        &self.chars
    }

    pub fn len(&self) -> usize {
        self.chars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chars.is_empty()
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn viewport(&self) -> &Viewport {
        &self.viewport
    }

    /// Replace the whole value and put the cursor after the last character.
    pub fn set_value(&mut self, value: &str) {
        self.chars = value.chars().collect();
        self.cursor = self.chars.len();
        self.resync();
    }

    /// Set the number of text columns available; `None`-width fields never scroll.
    pub fn set_width(&mut self, width: usize) {
        self.viewport.set_width(width, &self.chars, self.cursor);
    }

    pub fn set_edge_margin(&mut self, edge_margin: usize) {
        self.viewport
            .set_edge_margin(edge_margin, &self.chars, self.cursor);
    }

    /// Insert a character at the current cursor position.
    ///
    /// Control characters are rejected. Returns whether the value changed.
    pub fn handle_char(&mut self, c: char) -> bool {
        if c.is_control() {
            return false;
        }
        self.chars.insert(self.cursor, c);
        self.cursor += 1;
        self.resync();
        trace!(cursor = self.cursor, len = self.chars.len(), "inserted character");
        true
    }

    /// Delete the character before the cursor.
    pub fn handle_backspace(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.chars.remove(self.cursor - 1);
        self.cursor -= 1;
        self.resync();
        true
    }

    /// Delete the character at the cursor position.
    pub fn handle_delete(&mut self) -> bool {
        if self.cursor >= self.chars.len() {
            return false;
        }
        self.chars.remove(self.cursor);
        self.resync();
        true
    }

    /// Move cursor one position to the left.
    pub fn move_cursor_left(&mut self) -> bool {
        if self.cursor == 0 {
            return false;
        }
        self.cursor -= 1;
        self.resync();
        true
    }

    /// Move cursor one position to the right.
    pub fn move_cursor_right(&mut self) -> bool {
        if self.cursor >= self.chars.len() {
            return false;
        }
        self.cursor += 1;
        self.resync();
        true
    }

    pub fn move_cursor_home(&mut self) -> bool {
        let moved = self.cursor != 0;
        self.cursor = 0;
        self.resync();
        moved
    }

    pub fn move_cursor_end(&mut self) -> bool {
        let moved = self.cursor != self.chars.len();
        self.cursor = self.chars.len();
        self.resync();
        moved
    }

    fn resync(&mut self) {
        self.viewport.sync(&self.chars, self.cursor);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn typing_appends_and_advances_cursor() {
        let mut field = InputField::new();
        for c in "abc".chars() {
            assert!(field.handle_char(c));
        }
        assert_eq!(field.value(), "abc");
        assert_eq!(field.cursor(), 3);
    }

    #[test]
    fn insert_in_the_middle() {
        let mut field = InputField::with_value("hllo");
        field.move_cursor_home();
        field.move_cursor_right();
        field.handle_char('e');
        assert_eq!(field.value(), "hello");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn left_twice_then_backspace() {
        let mut field = InputField::with_value("hello");
        assert_eq!(field.cursor(), 5);
        field.move_cursor_left();
        field.move_cursor_left();
        assert_eq!(field.cursor(), 3);
        assert!(field.handle_backspace());
        assert_eq!(field.value(), "helo");
        assert_eq!(field.cursor(), 2);
    }

    #[test]
    fn backspace_at_start_and_delete_at_end_are_noops() {
        let mut field = InputField::with_value("ab");
        assert!(!field.handle_delete());
        field.move_cursor_home();
        assert!(!field.handle_backspace());
        assert_eq!(field.value(), "ab");
    }

    #[test]
    fn delete_forward_keeps_cursor() {
        let mut field = InputField::with_value("abc");
        field.move_cursor_home();
        assert!(field.handle_delete());
        assert_eq!(field.value(), "bc");
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn cursor_movement_is_clamped() {
        let mut field = InputField::with_value("x");
        assert!(!field.move_cursor_right());
        field.move_cursor_home();
        assert!(!field.move_cursor_left());
        assert_eq!(field.cursor(), 0);
    }

    #[test]
    fn multibyte_characters_count_as_one() {
        let mut field = InputField::with_value("héé");
        assert_eq!(field.len(), 3);
        field.handle_backspace();
        assert_eq!(field.value(), "hé");
        field.move_cursor_left();
        field.handle_char('ü');
        assert_eq!(field.value(), "hüé");
    }

    #[test]
    fn control_characters_are_rejected() {
        let mut field = InputField::new();
        assert!(!field.handle_char('\n'));
        assert!(field.is_empty());
    }

    #[test]
    fn delete_forward_rescrolls_when_tail_shrinks() {
        let mut field = InputField::with_value(&"x".repeat(30));
        field.set_width(10);
        assert_eq!(field.viewport().offset(), 20);
        for _ in 0..5 {
            field.move_cursor_left();
        }
        let before = field.viewport().offset();
        for _ in 0..5 {
            field.handle_delete();
        }
        assert_eq!(field.len(), 25);
        assert!(field.viewport().offset() <= before);
        assert!(field.viewport().offset() <= field.len() - 10);
    }

    #[test]
    fn home_and_end_scroll_fully() {
        let mut field = InputField::with_value(&"y".repeat(50));
        field.set_width(10);
        field.move_cursor_home();
        assert_eq!(field.viewport().offset(), 0);
        field.move_cursor_end();
        assert_eq!(field.viewport().offset(), 40);
    }
}
