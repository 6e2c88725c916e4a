//! Notifications emitted by input widgets.
//!
//! A widget owns a [`Notifier`] holding the handler names its messages are
//! addressed to and the listeners the host registered. Messages are delivered
//! synchronously, in registration order, before the widget's key handler
//! returns.

use std::fmt;

use serde::Serialize;
use tracing::trace;

use crate::error::{InputError, Result, HANDLER_PREFIX};
use crate::fields::InputValue;

/// Handler name used for change messages unless configured otherwise.
pub const DEFAULT_ON_CHANGE: &str = "handle_input_on_change";
/// Handler name used for focus messages unless configured otherwise.
pub const DEFAULT_ON_FOCUS: &str = "handle_input_on_focus";

/// A validated handler identifier such as `handle_username_on_change`.
///
/// Must start with `handle_`, have at least one character after the prefix,
/// and contain only lowercase ASCII letters, digits and underscores.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct HandlerName(String);

impl HandlerName {
    pub fn new(name: impl Into<String>) -> Result<Self> {
        let name = name.into();
        if !name.starts_with(HANDLER_PREFIX) {
            return Err(InputError::MissingPrefix { name });
        }
        if name.len() == HANDLER_PREFIX.len() {
            return Err(InputError::TooShort { name });
        }
        if let Some(ch) = name
            .chars()
            .find(|c| !(c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_'))
        {
            return Err(InputError::InvalidCharacter { name, ch });
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The name with the `handle_` prefix stripped, e.g. `username_on_change`.
    pub fn message_name(&self) -> &str {
        &self.0[HANDLER_PREFIX.len()..]
    }

    fn default_on_change() -> Self {
        Self(DEFAULT_ON_CHANGE.to_string())
    }

    fn default_on_focus() -> Self {
        Self(DEFAULT_ON_FOCUS.to_string())
    }
}

impl fmt::Display for HandlerName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// What triggered a message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum MessageKind {
    Change,
    Focus,
}

/// A notification delivered to every listener of a widget.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct InputMessage {
    pub kind: MessageKind,
    pub handler: HandlerName,
    /// Name of the widget that sent the message.
    pub sender: String,
    pub value: InputValue,
}

/// Whether a widget consumed an input event.
///
/// `Consumed` means the host must stop dispatching the event; `Ignored` means
/// it may pass the event further up its dispatch chain.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EventStatus {
    Consumed,
    Ignored,
}

impl EventStatus {
    pub fn is_consumed(self) -> bool {
        self == EventStatus::Consumed
    }
}

/// Callback invoked for each message a widget emits.
pub type Listener = Box<dyn FnMut(&InputMessage)>;

/// Handler names plus registered listeners for one widget.
pub struct Notifier {
    on_change: HandlerName,
    on_focus: HandlerName,
    listeners: Vec<Listener>,
}

impl Default for Notifier {
    fn default() -> Self {
        Self::new()
    }
}

impl Notifier {
    pub fn new() -> Self {
        Self {
            on_change: HandlerName::default_on_change(),
            on_focus: HandlerName::default_on_focus(),
            listeners: Vec::new(),
        }
    }

    pub fn on_change_handler(&self) -> &HandlerName {
        &self.on_change
    }

    pub fn on_focus_handler(&self) -> &HandlerName {
        &self.on_focus
    }

    /// Validate and set the handler name used for change messages.
    pub fn set_on_change_handler(&mut self, name: &str) -> Result<()> {
        self.on_change = HandlerName::new(name)?;
        Ok(())
    }

    /// Validate and set the handler name used for focus messages.
    pub fn set_on_focus_handler(&mut self, name: &str) -> Result<()> {
        self.on_focus = HandlerName::new(name)?;
        Ok(())
    }

    pub fn subscribe(&mut self, listener: impl FnMut(&InputMessage) + 'static) {
        self.listeners.push(Box::new(listener));
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    pub fn emit_change(&mut self, sender: &str, value: InputValue) {
        let message = InputMessage {
            kind: MessageKind::Change,
            handler: self.on_change.clone(),
            sender: sender.to_string(),
            value,
        };
        self.dispatch(&message);
    }

    pub fn emit_focus(&mut self, sender: &str, value: InputValue) {
        let message = InputMessage {
            kind: MessageKind::Focus,
            handler: self.on_focus.clone(),
            sender: sender.to_string(),
            value,
        };
        self.dispatch(&message);
    }

    fn dispatch(&mut self, message: &InputMessage) {
        trace!(
            handler = %message.handler,
            sender = %message.sender,
            listeners = self.listeners.len(),
            "dispatching input message"
        );
        for listener in &mut self.listeners {
            listener(message);
        }
    }
}

impl fmt::Debug for Notifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Notifier")
            .field("on_change", &self.on_change)
            .field("on_focus", &self.on_focus)
            .field("listeners", &self.listener_count())
            .finish()
    }
}
