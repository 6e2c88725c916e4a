//! # tui_inputs - input widgets for terminal forms
//!
//! Text, integer and boolean inputs for ratatui applications, built around a
//! small editing core that keeps the buffer, cursor and horizontal scroll
//! position consistent after every keystroke.
//!
//! ## Key Features
//!
//! - **Scrolling text field**: the cursor stays visible with a configurable
//!   edge margin however long the value grows
//! - **Masking**: plain, concealed (password) or highlighted through an
//!   injected [`Highlighter`]
//! - **Typed notifications**: on-change and on-focus messages addressed to a
//!   validated handler name, delivered to registered listeners
//! - **State-driven styling**: cursor, text and border styles per default,
//!   focus and hover state, loadable from JSON
//!
//! ## Quick Start
//!
//! ```
//! use tui_inputs::{InputMessage, InputWidget, IntegerInput, KeyInput};
//!
//! let mut age = IntegerInput::named("age").placeholder("enter your age...");
//! age.set_on_change_handler_name("handle_age_on_change").unwrap();
//! age.subscribe(Box::new(|msg: &InputMessage| println!("{} -> {}", msg.sender, msg.value)));
//! age.focus();
//! age.handle_key(KeyInput::Char('4'));
//! age.handle_key(KeyInput::Up);
//! assert_eq!(age.current(), Some(5));
//! ```
//!
//! The host owns event dispatch and layout: it converts terminal events with
//! [`KeyInput::from_key_event`], tells a widget its width with
//! [`InputWidget::resize`], and paints it with ratatui's `Frame::render_widget`.

pub mod error;
pub mod events;
pub mod fields;
pub mod keys;
pub mod tui {
    pub mod base;
    pub mod boolean_input;
    pub mod colors;
    pub mod input;
    pub mod integer_input;
    pub mod segments;
    pub mod styling;
    pub mod text_input;
    pub mod viewport;
}

pub use error::{InputError, Result};
pub use events::{EventStatus, HandlerName, InputMessage, MessageKind, Notifier};
pub use fields::{Element, InputValue, MaskingMode, State};
pub use keys::KeyInput;
pub use tui::base::{InputBase, InputView, InputWidget};
pub use tui::boolean_input::BooleanInput;
pub use tui::input::InputField;
pub use tui::integer_input::IntegerInput;
pub use tui::segments::{Highlighter, Segment};
pub use tui::styling::{ElementStyle, FieldDimensions, FieldStyle, InteractionState};
pub use tui::text_input::TextInput;
pub use tui::viewport::Viewport;
