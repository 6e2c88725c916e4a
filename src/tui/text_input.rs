//! `TextInput`: a single-line text field with a scrolling viewport.

use std::fmt;

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    widgets::{Paragraph, Widget},
};

use crate::events::EventStatus;
use crate::fields::{conceal, Element, InputValue, MaskingMode};
use crate::keys::KeyInput;
use crate::tui::base::{InputBase, InputWidget, BORDER_COLUMNS};
use crate::tui::input::InputField;
use crate::tui::segments::{into_line, Highlighter, Segment, SegmentRequest};
use crate::tui::styling::FieldStyle;
use crate::tui::viewport::Viewport;

/// Columns a text input needs besides its text: both borders plus the cursor.
pub const TEXT_INPUT_CHROME: u16 = BORDER_COLUMNS + 1;

/// Text columns available when drawn `area_width` cells wide.
pub fn text_width(area_width: u16) -> usize {
    usize::from(area_width.saturating_sub(TEXT_INPUT_CHROME))
}

/// A text input widget.
///
/// ```
/// use tui_inputs::{InputWidget, KeyInput, TextInput};
///
/// let mut email = TextInput::named("email")
///     .placeholder("enter your email address...")
///     .title("Email");
/// email.focus();
/// email.handle_key(KeyInput::Char('a'));
/// assert_eq!(email.current(), "a");
/// ```
pub struct TextInput {
    base: InputBase,
    field: InputField,
    placeholder: String,
    masking: MaskingMode,
    highlighter: Option<Box<dyn Highlighter>>,
}

impl Default for TextInput {
    fn default() -> Self {
        Self::new()
    }
}

impl TextInput {
    /// Create an input with a generated name.
    pub fn new() -> Self {
        Self::with_base(InputBase::new("text_input"))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self::with_base(InputBase::named(name))
    }

    fn with_base(base: InputBase) -> Self {
        Self {
            base,
            field: InputField::new(),
            placeholder: String::new(),
            masking: MaskingMode::Plain,
            highlighter: None,
        }
    }

    /// Set the starting value; the cursor goes to its end.
    #[must_use]
    pub fn value(mut self, value: &str) -> Self {
        self.field.set_value(value);
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

    #[must_use]
    pub fn masking(mut self, masking: MaskingMode) -> Self {
        self.masking = masking;
        self
    }

    /// Shorthand for concealed masking.
    #[must_use]
    pub fn password(self) -> Self {
        self.masking(MaskingMode::Concealed)
    }

    /// Highlight text with `highlighter`; switches masking to highlighted.
    #[must_use]
    pub fn highlighter(mut self, highlighter: impl Highlighter + 'static) -> Self {
        self.highlighter = Some(Box::new(highlighter));
        self.masking = MaskingMode::Highlighted;
        self
    }

    #[must_use]
    pub fn edge_margin(mut self, edge_margin: usize) -> Self {
        self.field.set_edge_margin(edge_margin);
        self
    }

    #[must_use]
    pub fn style(mut self, style: FieldStyle) -> Self {
        self.base.set_style(style);
        self
    }

    pub fn current(&self) -> String {
        self.field.value()
    }

    pub fn field(&self) -> &InputField {
        &self.field
    }

    pub fn cursor(&self) -> usize {
        self.field.cursor()
    }

    pub fn placeholder_text(&self) -> &str {
        &self.placeholder
    }

    pub fn masking_mode(&self) -> MaskingMode {
        self.masking
    }

    /// Replace the value, resync the viewport and emit a change message.
    pub fn set_value(&mut self, value: &str) {
        self.field.set_value(value);
        let value = self.input_value();
        self.base.emit_change(value, self.masking);
    }

    /// Title drawn on the border.
    ///
    /// Empty while the title itself is shown as the body of an unfocused,
    /// empty field without placeholder.
    pub fn border_title(&self) -> &str {
        let title = self.base.title();
        if !title.is_empty()
            && self.placeholder.is_empty()
            && self.field.is_empty()
            && !self.base.has_focus()
        {
            ""
        } else {
            title
        }
    }

    /// Display segments using the viewport as last resized.
    pub fn segments(&self) -> Vec<Segment> {
        self.request(*self.field.viewport()).segments()
    }

    /// Display segments for an area `area_width` cells wide.
    pub fn segments_for_width(&self, area_width: u16) -> Vec<Segment> {
        let viewport = self.field.viewport().settled(
            text_width(area_width),
            self.field.chars(),
            self.field.cursor(),
        );
        self.request(viewport).segments()
    }

    fn request(&self, viewport: Viewport) -> SegmentRequest<'_> {
        SegmentRequest {
            chars: self.field.chars(),
            cursor: self.field.cursor(),
            viewport,
            focused: self.base.has_focus(),
            masking: self.masking,
            placeholder: &self.placeholder,
            title: self.base.title(),
            highlighter: self.highlighter.as_deref(),
        }
    }

    fn changed(&mut self, changed: bool) -> EventStatus {
        if changed {
            let value = self.input_value();
            self.base.emit_change(value, self.masking)
        } else {
            EventStatus::Ignored
        }
    }
}

impl InputWidget for TextInput {
    fn base(&self) -> &InputBase {
        &self.base
    }

    fn base_mut(&mut self) -> &mut InputBase {
        &mut self.base
    }

    fn input_value(&self) -> InputValue {
        InputValue::Text(self.field.value())
    }

    fn handle_key(&mut self, key: KeyInput) -> EventStatus {
        match key {
            KeyInput::Left => {
                self.field.move_cursor_left();
                EventStatus::Ignored
            }
            KeyInput::Right => {
                self.field.move_cursor_right();
                EventStatus::Ignored
            }
            KeyInput::Home => {
                self.field.move_cursor_home();
                EventStatus::Ignored
            }
            KeyInput::End => {
                self.field.move_cursor_end();
                EventStatus::Ignored
            }
            KeyInput::Backspace => {
                let changed = self.field.handle_backspace();
                self.changed(changed)
            }
            KeyInput::Delete => {
                let changed = self.field.handle_delete();
                self.changed(changed)
            }
            KeyInput::Char(c) => {
                let changed = self.field.handle_char(c);
                self.changed(changed)
            }
            KeyInput::Up | KeyInput::Down | KeyInput::Enter => EventStatus::Ignored,
        }
    }

    fn render_input(&self, area: Rect, buf: &mut Buffer) {
        let line = into_line(
            self.segments_for_width(area.width),
            self.base.element_style(Element::Text),
            self.base.element_style(Element::Cursor),
        );
        Paragraph::new(line)
            .block(self.base.block(self.border_title()))
            .render(area, buf);
    }

    fn resize(&mut self, width: u16) {
        self.field.set_width(text_width(width));
    }
}

impl Widget for &TextInput {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.render_input(area, buf);
    }
}

impl fmt::Debug for TextInput {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let value = match self.masking {
            MaskingMode::Concealed => conceal(&self.field.value()),
            _ => self.field.value(),
        };
        f.debug_struct("TextInput")
            .field("name", &self.base.name())
            .field("title", &self.base.title())
            .field("placeholder", &self.placeholder_text())
            .field("masking", &self.masking_mode())
            .field("value", &value)
            .field("on_change_handler_name", self.on_change_handler_name())
            .field("on_focus_handler_name", self.on_focus_handler_name())
            .finish()
    }
}
