//! Turns a field's state into an ordered list of display segments.
//!
//! This is a read-only view of an [`InputField`](crate::tui::input::InputField):
//! it slices the visible part of the buffer, splits it at the cursor and
//! applies masking to each side. Painting is left to the caller.

use ratatui::{
    style::Style,
    text::{Line, Span},
};

use crate::fields::MaskingMode;
use crate::tui::viewport::Viewport;

/// Glyph drawn at the cursor position.
pub const CURSOR_GLYPH: &str = "|";

/// Produces styled spans for a piece of text.
///
/// Implementations must not add or drop characters: the concatenated span
/// contents have to equal the input.
pub trait Highlighter {
    fn highlight(&self, text: &str) -> Vec<Span<'static>>;
}

/// One piece of a rendered field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Text(String),
    /// Text already styled by a [`Highlighter`].
    Styled(Vec<Span<'static>>),
    Cursor,
}

impl Segment {
    /// The characters this segment occupies on screen.
    pub fn text(&self) -> String {
        match self {
            Segment::Text(text) => text.clone(),
            Segment::Styled(spans) => spans.iter().map(|s| s.content.as_ref()).collect(),
            Segment::Cursor => CURSOR_GLYPH.to_string(),
        }
    }

    pub fn is_cursor(&self) -> bool {
        matches!(self, Segment::Cursor)
    }
}

/// Everything the segmenter needs to lay out one field.
#[derive(Clone, Copy)]
pub struct SegmentRequest<'a> {
    pub chars: &'a [char],
    pub cursor: usize,
    /// Viewport already settled for the width being drawn.
    pub viewport: Viewport,
    pub focused: bool,
    pub masking: MaskingMode,
    pub placeholder: &'a str,
    pub title: &'a str,
    pub highlighter: Option<&'a dyn Highlighter>,
}

impl<'a> SegmentRequest<'a> {
    pub fn segments(&self) -> Vec<Segment> {
        if !self.focused {
            return self.unfocused_segments();
        }

        let range = self.viewport.visible_range(self.chars);
        let split = self.cursor.clamp(range.start, range.end);
        let before: String = self.chars[range.start..split].iter().collect();
        let after: String = self.chars[split..range.end].iter().collect();

        let mut segments = Vec::with_capacity(3);
        if !before.is_empty() {
            segments.push(self.transform(&before));
        }
        segments.push(Segment::Cursor);
        if !after.is_empty() {
            segments.push(self.transform(&after));
        }
        segments
    }

    fn unfocused_segments(&self) -> Vec<Segment> {
        if !self.chars.is_empty() {
            let value: String = self.chars.iter().collect();
            return vec![self.transform(&value)];
        }
        if !self.title.is_empty() && self.placeholder.is_empty() {
            vec![Segment::Text(self.title.to_string())]
        } else if !self.placeholder.is_empty() {
            vec![Segment::Text(self.placeholder.to_string())]
        } else {
            Vec::new()
        }
    }

    fn transform(&self, text: &str) -> Segment {
        match (self.masking, self.highlighter) {
            (MaskingMode::Highlighted, Some(highlighter)) => {
                Segment::Styled(highlighter.highlight(text))
            }
            (masking, _) => Segment::Text(masking.apply(text)),
        }
    }
}

/// Convert segments into a ratatui line using the given element styles.
pub fn into_line(segments: Vec<Segment>, text_style: Style, cursor_style: Style) -> Line<'static> {
    let mut spans = Vec::new();
    for segment in segments {
        match segment {
            Segment::Text(text) => spans.push(Span::styled(text, text_style)),
            Segment::Styled(styled) => spans.extend(
                styled
                    .into_iter()
                    .map(|span| Span::styled(span.content, text_style.patch(span.style))),
            ),
            Segment::Cursor => spans.push(Span::styled(CURSOR_GLYPH, cursor_style)),
        }
    }
    Line::from(spans)
}
