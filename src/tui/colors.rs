//! Color constants for the input widgets.

use ratatui::style::Color;

// Defaults used by FieldStyle::default(); a loaded style file
// overrides any of them per element and state.

/// Used for the cursor glyph
pub const CURSOR_WHITE: Color = Color::White;
/// Used for field text (xterm grey82)
pub const TEXT_GREY: Color = Color::Indexed(252);
/// Used for field borders
pub const BORDER_BLUE: Color = Color::Blue;
