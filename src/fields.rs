//! Enumerations and value types shared by every input widget.
//!
//! This module defines how a field's text is transformed for display, which
//! visual element of a field is being styled, which interaction state a field
//! is in, and the value an input reports to its host.

use std::fmt;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Glyph used in place of each character of a concealed value.
pub const CONCEAL_CHAR: char = '•';

/// Rendering-time transform applied to the visible text of a field.
///
/// Every mode preserves the number of characters, so cursor and scroll
/// arithmetic never has to know which one is active.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, ValueEnum, PartialEq, Eq)]
#[serde(rename_all = "kebab-case")]
pub enum MaskingMode {
    #[default]
    Plain,
    /// Password style: every character is drawn as [`CONCEAL_CHAR`].
    Concealed,
    /// Delegated to a [`crate::tui::segments::Highlighter`].
    Highlighted,
}

impl MaskingMode {
    /// Apply the character-level part of the transform.
    ///
    /// Highlighting is styling only, so the text passes through unchanged.
    pub fn apply(self, text: &str) -> String {
        match self {
            MaskingMode::Concealed => conceal(text),
            MaskingMode::Plain | MaskingMode::Highlighted => text.to_string(),
        }
    }
}

/// Replace every character of `text` with [`CONCEAL_CHAR`].
pub fn conceal(text: &str) -> String {
    text.chars().map(|_| CONCEAL_CHAR).collect()
}

/// Visual elements of a field that carry their own style.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum Element {
    Cursor,
    Text,
    Border,
}

/// Interaction states a field can be drawn in.
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "kebab-case")]
pub enum State {
    #[default]
    Default,
    Focus,
    /// Transient: reverts to the last persistent state when the pointer leaves.
    Hover,
}

impl State {
    /// Whether this state survives a pointer leaving the field.
    pub fn is_persistent(self) -> bool {
        !matches!(self, State::Hover)
    }
}

/// The current value of an input, as reported in change notifications.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(tag = "kind", content = "value", rename_all = "kebab-case")]
pub enum InputValue {
    Text(String),
    /// `None` when the field holds no digits.
    Integer(Option<i64>),
    Boolean(bool),
}

impl fmt::Display for InputValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InputValue::Text(text) => write!(f, "{text}"),
            InputValue::Integer(Some(n)) => write!(f, "{n}"),
            InputValue::Integer(None) => write!(f, "None"),
            InputValue::Boolean(true) => write!(f, "True"),
            InputValue::Boolean(false) => write!(f, "False"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn concealing_preserves_char_count() {
        let masked = MaskingMode::Concealed.apply("héllo");
        assert_eq!(masked.chars().count(), 5);
        assert!(masked.chars().all(|c| c == CONCEAL_CHAR));
    }

    #[test]
    fn plain_and_highlighted_pass_text_through() {
        assert_eq!(MaskingMode::Plain.apply("abc"), "abc");
        assert_eq!(MaskingMode::Highlighted.apply("abc"), "abc");
    }

    #[test]
    fn only_hover_is_transient() {
        assert!(State::Default.is_persistent());
        assert!(State::Focus.is_persistent());
        assert!(!State::Hover.is_persistent());
    }

    #[test]
    fn input_value_serializes_with_kind_tag() {
        let json = serde_json::to_string(&InputValue::Integer(Some(-4))).unwrap();
        assert_eq!(json, r#"{"kind":"integer","value":-4}"#);
        assert_eq!(InputValue::Boolean(false).to_string(), "False");
        assert_eq!(InputValue::Integer(None).to_string(), "None");
    }
}
