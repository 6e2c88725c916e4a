//! `IntegerInput`: a numeric field edited digit by digit or stepped with up/down.
//!
//! The value is `None` while the field holds no digits. Keystrokes that would
//! not leave a valid integer (letters, a misplaced sign, overflow) are ignored.

use std::fmt;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Paragraph, Widget},
};
use tracing::debug;

use crate::events::EventStatus;
use crate::fields::{Element, InputValue, MaskingMode};
use crate::keys::KeyInput;
use crate::tui::base::{InputBase, InputWidget};
use crate::tui::segments::{into_line, Segment, SegmentRequest};
use crate::tui::styling::FieldStyle;
use crate::tui::viewport::Viewport;

/// An integer input widget.
pub struct IntegerInput {
    base: InputBase,
    value: Option<i64>,
    cursor: usize,
    placeholder: String,
    step: i64,
}

impl Default for IntegerInput {
    fn default() -> Self {
        Self::new()
    }
}

/// Parse edited text back into a value.
///
/// Empty text and a lone sign mean "no value"; `Err` means the text is not a
/// representable integer.
fn parse_value(text: &str) -> Result<Option<i64>, std::num::ParseIntError> {
    if text.is_empty() || text == "-" {
        return Ok(None);
    }
    text.parse().map(Some)
}

impl IntegerInput {
    pub fn new() -> Self {
        Self::with_base(InputBase::new("integer_input"))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::with_base(InputBase::named(name))
    }

    fn with_base(base: InputBase) -> Self {
        Self {
            base,
            value: None,
            cursor: 0,
            placeholder: String::new(),
            step: 1,
        }
    }

    #[must_use]
    pub fn value(mut self, value: Option<i64>) -> Self {
        self.value = value;
        self.cursor = self.text().len();
        self
    }

    #[must_use]
    pub fn placeholder(mut self, text: impl Into<String>) -> Self {
        self.placeholder = text.into();
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.base.set_title(title);
        self
    }

    /// Amount added or subtracted by the up and down keys.
    #[must_use]
    pub fn step(mut self, step: i64) -> Self {
        self.step = step;
        self
    }

    #[must_use]
    pub fn style(mut self, style: FieldStyle) -> Self {
        self.base.set_style(style);
        self
    }

    pub fn current(&self) -> Option<i64> {
        self.value
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn step_size(&self) -> i64 {
        self.step
    }

    /// The value as edited text; empty when there is no value.
    pub fn text(&self) -> String {
        self.value.map(|n| n.to_string()).unwrap_or_default()
    }

    /// Replace the value, put the cursor at its end and emit a change message.
    pub fn set_value(&mut self, value: Option<i64>) {
        self.value = value;
        self.cursor = self.text().len();
        let value = self.input_value();
        self.base.emit_change(value, MaskingMode::Plain);
    }

    /// Add `delta` steps to the value, treating no value as zero.
    ///
    /// Saturates at the integer bounds; the cursor snaps to the end.
    pub fn step_by(&mut self, delta: i64) -> EventStatus {
        let amount = self.step.saturating_mul(delta);
        self.value = Some(self.value.unwrap_or(0).saturating_add(amount));
        self.cursor = self.text().len();
        let value = self.input_value();
        self.base.emit_change(value, MaskingMode::Plain)
    }

    pub fn border_title(&self) -> &str {
        let title = self.base.title();
        if !title.is_empty()
            && self.placeholder.is_empty()
            && self.value.is_none()
            && !self.base.has_focus()
        {
            ""
        } else {
            title
        }
    }

    pub fn segments(&self) -> Vec<Segment> {
        let chars: Vec<char> = self.text().chars().collect();
        SegmentRequest {
            chars: &chars,
            cursor: self.cursor,
            viewport: Viewport::default(),
            focused: self.base.has_focus(),
            masking: MaskingMode::Plain,
            placeholder: &self.placeholder,
            title: self.base.title(),
            highlighter: None,
        }
        .segments()
    }

    /// Replace the edited text, keeping the cursor within the new text.
    fn apply_edit(&mut self, text: &str, cursor: usize) -> EventStatus {
        match parse_value(text) {
            Ok(value) => {
                self.value = value;
                self.cursor = cursor.min(self.text().len());
                let value = self.input_value();
                self.base.emit_change(value, MaskingMode::Plain)
            }
            Err(err) => {
                debug!(widget = %self.base.name(), text, %err, "rejected integer edit");
                EventStatus::Ignored
            }
        }
    }

    fn insert_digit(&mut self, digit: char) -> EventStatus {
        let mut text = self.text();
        if self.cursor == 0 && text.starts_with('-') {
            // nothing may precede the sign
            return EventStatus::Ignored;
        }
        text.insert(self.cursor, digit);
        self.apply_edit(&text, self.cursor + 1)
    }

    fn insert_sign(&mut self) -> EventStatus {
        let text = self.text();
        if self.cursor != 0 || text.is_empty() || text.starts_with('-') || text == "0" {
            debug!(widget = %self.base.name(), cursor = self.cursor, "rejected sign");
            return EventStatus::Ignored;
        }
        self.apply_edit(&format!("-{text}"), 1)
    }

    fn backspace(&mut self) -> EventStatus {
        if self.cursor == 0 {
            return EventStatus::Ignored;
        }
        let mut text = self.text();
        text.remove(self.cursor - 1);
        self.apply_edit(&text, self.cursor - 1)
    }

    fn delete(&mut self) -> EventStatus {
        let mut text = self.text();
        if self.cursor >= text.len() {
            return EventStatus::Ignored;
        }
        text.remove(self.cursor);
        self.apply_edit(&text, self.cursor)
    }
}

impl InputWidget for IntegerInput {
    fn base(&self) -> &InputBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut InputBase {
        &mut self.base
    }

    fn input_value(&self) -> InputValue {
        InputValue::Integer(self.value)
    }

    fn handle_key(&mut self, key: KeyInput) -> EventStatus {
        let len = self.text().len();
        match key {
            KeyInput::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                EventStatus::Ignored
            }
            KeyInput::Right => {
                self.cursor = (self.cursor + 1).min(len);
                EventStatus::Ignored
            }
            KeyInput::Home => {
                self.cursor = 0;
                EventStatus::Ignored
            }
            KeyInput::End => {
                self.cursor = len;
                EventStatus::Ignored
            }
            KeyInput::Up => self.step_by(1),
            KeyInput::Down => self.step_by(-1),
            KeyInput::Backspace => self.backspace(),
            KeyInput::Delete => self.delete(),
            KeyInput::Char(c) if c.is_ascii_digit() => self.insert_digit(c),
            KeyInput::Char('-') => self.insert_sign(),
            KeyInput::Char(_) | KeyInput::Enter => EventStatus::Ignored,
        }
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let line = into_line(
            self.segments(),
            self.base.element_style(Element::Text),
            self.base.element_style(Element::Cursor),
        );
        Paragraph::new(line)
            .block(self.base.block(self.border_title()))
            .render(area, buf);
    }
}

impl Widget for &IntegerInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_input(area, buf);
    }
}

impl fmt::Debug for IntegerInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("IntegerInput")
            .field("name", &self.base.name())
            .field("title", &self.base.title())
            .field("value", &self.value)
            .field("step", &self.step_size())
            .field("on_change_handler_name", self.on_change_handler_name())
            .field("on_focus_handler_name", self.on_focus_handler_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn press(input: &mut IntegerInput, keys: &str) {
        for c in keys.chars() {
            input.handle_key(c.into());
        }
    }

    #[test]
    fn digits_build_the_value() {
        let mut input = IntegerInput::named("age");
        press(&mut input, "42");
        assert_eq!(input.current(), Some(42));
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn sign_only_at_start_of_positive_value() {
        let mut input = IntegerInput::named("n");
        press(&mut input, "5");
        // cursor sits after the digit
        assert_eq!(input.handle_key(KeyInput::Char('-')), EventStatus::Ignored);
        assert_eq!(input.current(), Some(5));

        input.handle_key(KeyInput::Home);
        assert_eq!(input.handle_key(KeyInput::Char('-')), EventStatus::Consumed);
        assert_eq!(input.current(), Some(-5));
        assert_eq!(input.cursor(), 1);

        input.handle_key(KeyInput::Home);
        assert_eq!(input.handle_key(KeyInput::Char('-')), EventStatus::Ignored);
    }

    #[test]
    fn sign_rejected_on_zero_and_empty() {
        let mut input = IntegerInput::named("n").value(Some(0));
        input.handle_key(KeyInput::Home);
        assert_eq!(input.handle_key(KeyInput::Char('-')), EventStatus::Ignored);

        let mut input = IntegerInput::named("n");
        assert_eq!(input.handle_key(KeyInput::Char('-')), EventStatus::Ignored);
        assert_eq!(input.current(), None);
    }

    #[test]
    fn non_digits_are_ignored() {
        let mut input = IntegerInput::named("n").value(Some(7));
        assert_eq!(input.handle_key(KeyInput::Char('x')), EventStatus::Ignored);
        assert_eq!(input.handle_key(KeyInput::Enter), EventStatus::Ignored);
        assert_eq!(input.current(), Some(7));
    }

    #[test]
    fn backspace_to_empty_gives_none() {
        let mut input = IntegerInput::named("n").value(Some(-3));
        input.handle_key(KeyInput::Backspace);
        assert_eq!(input.current(), None);
        assert_eq!(input.cursor(), 0);
        assert_eq!(input.text(), "");
    }

    #[test]
    fn leading_zero_collapses_and_cursor_is_clamped() {
        let mut input = IntegerInput::named("n").value(Some(105));
        input.handle_key(KeyInput::Home);
        input.handle_key(KeyInput::Delete);
        assert_eq!(input.current(), Some(5));
        assert!(input.cursor() <= input.text().len());
    }

    #[test]
    fn digit_before_sign_is_rejected() {
        let mut input = IntegerInput::named("n").value(Some(-4));
        input.handle_key(KeyInput::Home);
        assert_eq!(input.handle_key(KeyInput::Char('1')), EventStatus::Ignored);
        assert_eq!(input.current(), Some(-4));
    }

    #[test]
    fn overflow_is_rejected() {
        let mut input = IntegerInput::named("n").value(Some(i64::MAX));
        assert_eq!(input.handle_key(KeyInput::Char('1')), EventStatus::Ignored);
        assert_eq!(input.current(), Some(i64::MAX));
    }

    #[test]
    fn stepping_treats_none_as_zero_and_snaps_cursor() {
        let mut input = IntegerInput::named("n").step(5);
        assert_eq!(input.step_size(), 5);
        assert_eq!(input.handle_key(KeyInput::Up), EventStatus::Consumed);
        assert_eq!(input.current(), Some(5));
        input.handle_key(KeyInput::Down);
        input.handle_key(KeyInput::Down);
        assert_eq!(input.current(), Some(-5));
        assert_eq!(input.cursor(), 2);
    }

    #[test]
    fn stepping_saturates() {
        let mut input = IntegerInput::named("n").value(Some(i64::MAX - 1)).step(10);
        input.handle_key(KeyInput::Up);
        assert_eq!(input.current(), Some(i64::MAX));
    }

    #[test]
    fn segments_follow_cursor() {
        let mut input = IntegerInput::named("n").value(Some(123));
        input.focus();
        input.handle_key(KeyInput::Left);
        let texts: Vec<String> = input.segments().iter().map(Segment::text).collect();
        assert_eq!(texts, ["12", "|", "3"]);
    }

    #[test]
    fn unfocused_empty_shows_placeholder() {
        let input = IntegerInput::named("n").placeholder("enter your age...").title("Age");
        let texts: Vec<String> = input.segments().iter().map(Segment::text).collect();
        assert_eq!(texts, ["enter your age..."]);
        assert_eq!(input.border_title(), "Age");
    }
}
