//! Styling of input fields by element and interaction state.
//!
//! A [`FieldStyle`] answers "how is element E drawn in state S". An
//! [`InteractionState`] tracks which state a widget is in: focus and default
//! are persistent, hover is transient and falls back to whichever persistent
//! state was last set once the pointer leaves.

use std::fs;
use std::path::Path;

use ratatui::style::{Modifier, Style};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::Result;
use crate::fields::{Element, State};
use crate::tui::colors::{BORDER_BLUE, CURSOR_WHITE, TEXT_GREY};

/// A value per interaction state; unset states fall back to `default`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StateMap<T> {
    pub default: T,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub focus: Option<T>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hover: Option<T>,
}

impl<T: Copy> StateMap<T> {
    pub fn new(default: T) -> Self {
        Self {
            default,
            focus: None,
            hover: None,
        }
    }

    #[must_use]
    pub fn focus(mut self, value: T) -> Self {
        self.focus = Some(value);
        self
    }

    #[must_use]
    pub fn hover(mut self, value: T) -> Self {
        self.hover = Some(value);
        self
    }

    pub fn for_state(&self, state: State) -> T {
        match state {
            State::Default => self.default,
            State::Focus => self.focus.unwrap_or(self.default),
            State::Hover => self.hover.unwrap_or(self.default),
        }
    }
}

/// Style of one element across states.
pub type ElementStyle = StateMap<Style>;

/// Field size as (height, width) in cells.
pub type FieldDimension = (u16, u16);

/// Field size across states.
pub type FieldDimensions = StateMap<FieldDimension>;

/// Default (height, width) of a field.
pub const DEFAULT_DIMENSION: FieldDimension = (3, 100);

/// Complete styling for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FieldStyle {
    pub cursor: ElementStyle,
    pub text: ElementStyle,
    pub border: ElementStyle,
    pub dimensions: FieldDimensions,
}

impl Default for FieldStyle {
    fn default() -> Self {
        Self {
            cursor: ElementStyle::new(
                Style::new()
                    .fg(CURSOR_WHITE)
                    .add_modifier(Modifier::BOLD | Modifier::SLOW_BLINK),
            ),
            text: ElementStyle::new(Style::new().fg(TEXT_GREY)),
            border: ElementStyle::new(Style::new().fg(BORDER_BLUE)),
            dimensions: FieldDimensions::new(DEFAULT_DIMENSION),
        }
    }
}

impl FieldStyle {
    /// Style for `element` when the field is in `state`.
    pub fn style_for(&self, element: Element, state: State) -> Style {
        let element_style = match element {
            Element::Cursor => &self.cursor,
            Element::Text => &self.text,
            Element::Border => &self.border,
        };
        element_style.for_state(state)
    }

    pub fn dimensions_for(&self, state: State) -> FieldDimension {
        self.dimensions.for_state(state)
    }

    /// Parse a style from JSON; omitted elements keep their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Load a style from a JSON file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)?;
        let style = Self::from_json_str(&contents)?;
        debug!(path = %path.display(), "loaded field style");
        Ok(style)
    }
}

/// Tracks the current and last persistent interaction state of a widget.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct InteractionState {
    current: State,
    persistent: State,
}

impl InteractionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// The state the widget should be drawn in.
    pub fn current(&self) -> State {
        self.current
    }

    /// The state hover reverts to.
    pub fn persistent(&self) -> State {
        self.persistent
    }

    pub fn is_hovered(&self) -> bool {
        self.current == State::Hover
    }

    pub fn pointer_enter(&mut self) {
        self.current = State::Hover;
    }

    pub fn pointer_leave(&mut self) {
        if self.is_hovered() {
            self.current = self.persistent;
        }
    }

    pub fn focus_gained(&mut self) {
        self.persistent = State::Focus;
        self.current = State::Focus;
    }

    pub fn focus_lost(&mut self) {
        self.persistent = State::Default;
        self.current = State::Default;
    }
}

#[cfg(test)]
mod tests {
    use ratatui::style::Color;

    use super::*;

    #[test]
    fn unset_states_fall_back_to_default() {
        let style =
            ElementStyle::new(Style::new().fg(Color::Blue)).focus(Style::new().fg(Color::Red));
        assert_eq!(style.for_state(State::Focus).fg, Some(Color::Red));
        assert_eq!(style.for_state(State::Hover).fg, Some(Color::Blue));
        assert_eq!(style.for_state(State::Default).fg, Some(Color::Blue));
    }

    #[test]
    fn default_palette() {
        let style = FieldStyle::default();
        assert_eq!(style.style_for(Element::Border, State::Focus).fg, Some(BORDER_BLUE));
        assert_eq!(style.style_for(Element::Text, State::Hover).fg, Some(TEXT_GREY));
        let cursor = style.style_for(Element::Cursor, State::Default);
        assert!(cursor.add_modifier.contains(Modifier::BOLD));
        assert_eq!(style.dimensions_for(State::Hover), (3, 100));
    }

    #[test]
    fn partial_json_keeps_other_defaults() {
        let focus = serde_json::to_value(Style::new().fg(Color::Magenta)).unwrap();
        let default = serde_json::to_value(Style::new().fg(Color::DarkGray)).unwrap();
        let json = serde_json::json!({
            "border": { "default": default, "focus": focus },
            "dimensions": { "default": [3, 40] },
        });

        let style = FieldStyle::from_json_str(&json.to_string()).unwrap();
        assert_eq!(style.style_for(Element::Border, State::Focus).fg, Some(Color::Magenta));
        assert_eq!(style.style_for(Element::Border, State::Hover).fg, Some(Color::DarkGray));
        assert_eq!(style.cursor, FieldStyle::default().cursor);
        assert_eq!(style.dimensions_for(State::Focus), (3, 40));
    }

    #[test]
    fn malformed_json_is_a_config_error() {
        let err = FieldStyle::from_json_str("{\"border\": 7}").unwrap_err();
        assert!(matches!(err, crate::error::InputError::StyleConfig(_)));
    }

    #[test]
    fn hover_is_transient() {
        let mut state = InteractionState::new();
        state.pointer_enter();
        assert_eq!(state.current(), State::Hover);
        state.pointer_leave();
        assert_eq!(state.current(), State::Default);

        state.focus_gained();
        state.pointer_enter();
        assert_eq!(state.persistent(), State::Focus);
        state.pointer_leave();
        assert_eq!(state.current(), State::Focus);
    }

    #[test]
    fn focus_changes_while_hovered_are_remembered() {
        let mut state = InteractionState::new();
        state.focus_gained();
        state.pointer_enter();
        state.focus_lost();
        assert_eq!(state.current(), State::Default);
        state.pointer_enter();
        state.pointer_leave();
        assert_eq!(state.current(), State::Default);
    }

    #[test]
    fn leaving_without_hover_keeps_state() {
        let mut state = InteractionState::new();
        state.focus_gained();
        state.pointer_leave();
        assert_eq!(state.current(), State::Focus);
    }
}
