//! Horizontal scrolling window over a single-line text buffer.
//!
//! The viewport tracks the index of the first visible character and keeps the
//! cursor inside the window with `edge_margin` characters of context on the
//! side it approaches. The width is counted in display columns, so wide
//! characters take two; the cursor column is already taken out by the caller.

use std::ops::Range;

use unicode_width::UnicodeWidthChar;

/// Characters of context kept between the cursor and a window edge.
pub const DEFAULT_EDGE_MARGIN: usize = 3;

/// Display columns taken by `c`. Zero-width and control characters take none.
pub fn char_width(c: char) -> usize {
    c.width().unwrap_or(0)
}

/// Display columns taken by `chars`.
pub fn columns(chars: &[char]) -> usize {
    chars.iter().map(|&c| char_width(c)).sum()
}

/// Scroll state for one field.
///
/// With no width set the whole buffer is considered visible and the offset
/// stays at zero.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    offset: usize,
    width: Option<usize>,
    edge_margin: usize,
}

impl Default for Viewport {
    fn default() -> Self {
        Self::new(DEFAULT_EDGE_MARGIN)
    }
}

impl Viewport {
    pub fn new(edge_margin: usize) -> Self {
        Self {
            offset: 0,
            width: None,
            edge_margin,
        }
    }

    /// Index of the first visible character.
    pub fn offset(&self) -> usize {
        self.offset
    }

    /// Text columns available, if known.
    pub fn width(&self) -> Option<usize> {
        self.width
    }

    pub fn edge_margin(&self) -> usize {
        self.edge_margin
    }

    pub fn set_edge_margin(&mut self, edge_margin: usize, chars: &[char], cursor: usize) {
        self.edge_margin = edge_margin;
        self.sync(chars, cursor);
    }

    /// Change the window width and rescroll so the cursor stays visible.
    pub fn set_width(&mut self, width: usize, chars: &[char], cursor: usize) {
        self.width = Some(width);
        self.sync(chars, cursor);
    }

    /// A copy of this viewport resized to `width` and settled around `cursor`.
    ///
    /// Used at draw time so rendering into an area of a different size never
    /// mutates the field.
    pub fn settled(&self, width: usize, chars: &[char], cursor: usize) -> Viewport {
        let mut copy = *self;
        copy.set_width(width, chars, cursor);
        copy
    }

    /// Margin actually applied for the current width.
    ///
    /// Capped at half the width so the left and right rules can never both
    /// fire for the same cursor position.
    pub fn effective_margin(&self) -> usize {
        match self.width {
            Some(width) => self.edge_margin.min(width / 2),
            None => 0,
        }
    }

    /// Re-establish `offset <= cursor` and `columns(offset..cursor) <= width`
    /// after any edit or move.
    pub fn sync(&mut self, chars: &[char], cursor: usize) {
        let cursor = cursor.min(chars.len());
        let Some(width) = self.width else {
            self.offset = 0;
            return;
        };
        self.scroll_left_to(cursor);
        self.scroll_right_to(chars, cursor, width);
        // never scroll further than needed to show the end of the buffer
        self.offset = self.offset.min(tail_start(chars, width));
    }

    /// Left rule: keep `margin` characters visible before the cursor.
    fn scroll_left_to(&mut self, cursor: usize) {
        let margin = self.effective_margin();
        if cursor < self.offset + margin {
            self.offset = cursor.saturating_sub(margin);
        }
    }

    /// Right rule: keep `margin` characters between the cursor and the right
    /// edge. Positions past the end of the buffer count one column each.
    fn scroll_right_to(&mut self, chars: &[char], cursor: usize, width: usize) {
        let margin = self.effective_margin();
        let ahead_end = (cursor + margin).min(chars.len());
        let ahead = columns(&chars[cursor..ahead_end]) + (cursor + margin - ahead_end);
        let mut used = columns(&chars[self.offset.min(cursor)..cursor]);
        while used + ahead > width && self.offset < cursor {
            used -= char_width(chars[self.offset]);
            self.offset += 1;
        }
    }

    /// Character range of `chars` that is on screen.
    pub fn visible_range(&self, chars: &[char]) -> Range<usize> {
        let start = self.offset.min(chars.len());
        let Some(width) = self.width else {
            return start..chars.len();
        };
        let mut end = start;
        let mut used = 0;
        while end < chars.len() && used + char_width(chars[end]) <= width {
            used += char_width(chars[end]);
            end += 1;
        }
        start..end
    }

    /// Display column of the cursor relative to the start of the window.
    pub fn cursor_column(&self, chars: &[char], cursor: usize) -> usize {
        let cursor = cursor.min(chars.len());
        columns(&chars[self.offset.min(cursor)..cursor])
    }
}

/// Smallest offset whose remaining characters fit in `width` columns.
fn tail_start(chars: &[char], width: usize) -> usize {
    let mut start = chars.len();
    let mut used = 0;
    while start > 0 && used + char_width(chars[start - 1]) <= width {
        start -= 1;
        used += char_width(chars[start]);
    }
    start
}
