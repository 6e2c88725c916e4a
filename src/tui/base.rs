//! State and behavior shared by every input widget.
//!
//! Each widget embeds an [`InputBase`] (name, title, focus, styling and
//! notifications) and implements [`InputWidget`] on top of it, so a host can
//! hold a form of mixed inputs as `Box<dyn InputWidget>`.

use std::sync::atomic::{AtomicUsize, Ordering};

use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::Style,
    widgets::{Block, BorderType, Widget},
};
use tracing::debug;

use crate::error::Result;
use crate::events::{EventStatus, HandlerName, InputMessage, Notifier};
use crate::fields::{Element, InputValue, MaskingMode, State};
use crate::keys::KeyInput;
use crate::tui::styling::{FieldStyle, InteractionState};

/// Columns taken by the left and right border.
pub const BORDER_COLUMNS: u16 = 2;

static NEXT_WIDGET_ID: AtomicUsize = AtomicUsize::new(1);

fn generated_name(kind: &str) -> String {
    let id = NEXT_WIDGET_ID.fetch_add(1, Ordering::Relaxed);
    format!("{kind}#{id}")
}

/// Common state for a named, focusable, styled input.
#[derive(Debug)]
pub struct InputBase {
    name: String,
    title: String,
    focused: bool,
    style: FieldStyle,
    interaction: InteractionState,
    notifier: Notifier,
}

impl InputBase {
    /// A base with a generated unique name such as `text_input#3`.
    pub fn new(kind: &str) -> Self {
        Self::named(generated_name(kind))
    }

    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            title: String::new(),
            focused: false,
            style: FieldStyle::default(),
            interaction: InteractionState::new(),
            notifier: Notifier::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.title = title.into();
    }

    pub fn style(&self) -> &FieldStyle {
        &self.style
    }

    pub fn set_style(&mut self, style: FieldStyle) {
        self.style = style;
    }

    pub fn has_focus(&self) -> bool {
        self.focused
    }

    pub fn state(&self) -> State {
        self.interaction.current()
    }

    pub fn notifier(&self) -> &Notifier {
        &self.notifier
    }

    pub fn notifier_mut(&mut self) -> &mut Notifier {
        &mut self.notifier
    }

    /// Style of `element` in the current interaction state.
    pub fn element_style(&self, element: Element) -> Style {
        self.style.style_for(element, self.state())
    }

    /// Mark focused. Returns false if the widget already had focus.
    pub fn gain_focus(&mut self) -> bool {
        if self.focused {
            return false;
        }
        self.focused = true;
        self.interaction.focus_gained();
        debug!(widget = %self.name, "focus gained");
        true
    }

    pub fn lose_focus(&mut self) {
        if self.focused {
            debug!(widget = %self.name, "focus lost");
        }
        self.focused = false;
        self.interaction.focus_lost();
    }

    pub fn pointer_enter(&mut self) {
        self.interaction.pointer_enter();
    }

    pub fn pointer_leave(&mut self) {
        self.interaction.pointer_leave();
    }

    /// Emit a change message and report the triggering event as consumed.
    ///
    /// The value is logged the way `masking` displays it, so concealed
    /// fields never reach the log in plain text.
    pub fn emit_change(&mut self, value: InputValue, masking: MaskingMode) -> EventStatus {
        let shown = masking.apply(&value.to_string());
        debug!(widget = %self.name, value = %shown, "value changed");
        self.notifier.emit_change(&self.name, value);
        EventStatus::Consumed
    }

    pub fn emit_focus(&mut self, value: InputValue) {
        self.notifier.emit_focus(&self.name, value);
    }

    /// Bordered block: double border while focused, border style by state.
    pub fn block(&self, title: &str) -> Block<'static> {
        let border_type = if self.focused {
            BorderType::Double
        } else {
            BorderType::Plain
        };
        Block::bordered()
            .border_type(border_type)
            .border_style(self.element_style(Element::Border))
            .title(title.to_string())
    }
}

/// Behavior every input widget offers its host.
pub trait InputWidget {
    fn base(&self) -> &InputBase;

    fn base_mut(&mut self) -> &mut InputBase;

    /// Current value, as carried by change notifications.
    fn input_value(&self) -> InputValue;

    /// Apply one key press.
    fn handle_key(&mut self, key: KeyInput) -> EventStatus;

    /// Paint the widget into `area`; never mutates widget state.
    fn render_input(&self, area: Rect, buf: &mut Buffer);

    /// Tell the widget how wide it will be drawn.
    fn resize(&mut self, _width: u16) {}

    fn name(&self) -> &str {
        self.base().name()
    }

    fn has_focus(&self) -> bool {
        self.base().has_focus()
    }

    fn state(&self) -> State {
        self.base().state()
    }

    /// Give the widget focus, emitting an on-focus message on the transition.
    fn focus(&mut self) {
        if self.base_mut().gain_focus() {
            let value = self.input_value();
            self.base_mut().emit_focus(value);
        }
    }

    fn blur(&mut self) {
        self.base_mut().lose_focus();
    }

    fn pointer_enter(&mut self) {
        self.base_mut().pointer_enter();
    }

    fn pointer_leave(&mut self) {
        self.base_mut().pointer_leave();
    }

    fn subscribe(&mut self, listener: Box<dyn FnMut(&InputMessage)>) {
        self.base_mut().notifier_mut().subscribe(listener);
    }

    fn on_change_handler_name(&self) -> &HandlerName {
        self.base().notifier().on_change_handler()
    }

    fn on_focus_handler_name(&self) -> &HandlerName {
        self.base().notifier().on_focus_handler()
    }

    fn set_on_change_handler_name(&mut self, name: &str) -> Result<()> {
        self.base_mut().notifier_mut().set_on_change_handler(name)
    }

    fn set_on_focus_handler_name(&mut self, name: &str) -> Result<()> {
        self.base_mut().notifier_mut().set_on_focus_handler(name)
    }
}

/// Adapter so a `dyn InputWidget` can be passed to `Frame::render_widget`.
pub struct InputView<'a>(pub &'a dyn InputWidget);

impl Widget for InputView<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        self.0.render_input(area, buf);
    }
}
