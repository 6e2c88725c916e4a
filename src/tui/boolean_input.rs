//! `BooleanInput`: a field toggled with Enter.

use std::fmt;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    text::{Line, Span},
    widgets::{Paragraph, Widget},
};

use crate::events::EventStatus;
use crate::fields::{Element, InputValue, MaskingMode};
use crate::keys::KeyInput;
use crate::tui::base::{InputBase, InputWidget};
use crate::tui::styling::FieldStyle;

/// A boolean input widget, drawn as `True` or `False`.
pub struct BooleanInput {
    base: InputBase,
    value: bool,
}

impl Default for BooleanInput {
    fn default() -> Self {
        Self::new()
    }
}

impl BooleanInput {
    pub fn new() -> Self {
        Self::with_base(InputBase::new("boolean_input"))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::with_base(InputBase::named(name))
    }

    fn with_base(base: InputBase) -> Self {
        Self { base, value: false }
    }

    #[must_use]
    pub fn value(mut self, value: bool) -> Self {
        self.value = value;
        self
    }

    #[must_use]
    pub fn title(mut self, title: impl Into<String>) -> Self {
        self.base.set_title(title);
        self
    }

    #[must_use]
    pub fn style(mut self, style: FieldStyle) -> Self {
        self.base.set_style(style);
        self
    }

    pub fn current(&self) -> bool {
        self.value
    }

    /// Negate the value and emit a change message.
    pub fn toggle(&mut self) -> EventStatus {
        self.value = !self.value;
        let value = self.input_value();
        self.base.emit_change(value, MaskingMode::Plain)
    }
}

impl InputWidget for BooleanInput {
    fn base(&self) -> &InputBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut InputBase {
        &mut self.base
    }

    fn input_value(&self) -> InputValue {
        InputValue::Boolean(self.value)
    }

    fn handle_key(&mut self, key: KeyInput) -> EventStatus {
        match key {
            KeyInput::Enter => self.toggle(),
            _ => EventStatus::Ignored,
        }
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let text = Span::styled(
            self.input_value().to_string(),
            self.base.element_style(Element::Text),
        );
        Paragraph::new(Line::from(text))
            .block(self.base.block(self.base.title()))
            .render(area, buf);
    }
}

impl Widget for &BooleanInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_input(area, buf);
    }
}

impl fmt::Debug for BooleanInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BooleanInput")
            .field("name", &self.base.name())
            .field("title", &self.base.title())
            .field("value", &self.value)
            .field("on_change_handler_name", self.on_change_handler_name())
            .field("on_focus_handler_name", self.on_focus_handler_name())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::rc::Rc;

    use super::*;
    use crate::events::InputMessage;

    #[test]
    fn enter_toggles_and_notifies() {
        let mut input = BooleanInput::named("subscribe");
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        input.subscribe(Box::new(move |msg: &InputMessage| {
            sink.borrow_mut().push(msg.value.clone())
        }));

        assert_eq!(input.handle_key(KeyInput::Enter), EventStatus::Consumed);
        assert!(input.current());
        input.handle_key(KeyInput::Enter);
        assert!(!input.current());

        assert_eq!(
            *seen.borrow(),
            vec![InputValue::Boolean(true), InputValue::Boolean(false)]
        );
    }

    #[test]
    fn other_keys_are_ignored() {
        let mut input = BooleanInput::named("b").value(true);
        for key in [KeyInput::Char(' '), KeyInput::Left, KeyInput::Backspace] {
            assert_eq!(input.handle_key(key), EventStatus::Ignored);
        }
        assert!(input.current());
    }

    #[test]
    fn value_displays_as_title_case_literal() {
        assert_eq!(BooleanInput::named("b").input_value().to_string(), "False");
    }
}
