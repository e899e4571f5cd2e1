#![forbid(unsafe_code)]

//! Widgets for alertkit: the alert dialog, its action row, and the rule
//! separator, plus the `Widget`/`StatefulWidget` traits they render through.

pub mod alert;
pub mod rule;

pub use rule::{Axis, Rule};

use alertkit_core::geometry::Rect;
use alertkit_render::buffer::Buffer;
use alertkit_render::cell::Cell;
use alertkit_render::frame::Frame;
use alertkit_style::Style;

/// A `Widget` is a renderable component.
///
/// Widgets render themselves into a `Frame` within a given `Rect`.
pub trait Widget {
    /// Render the widget into the frame at the given area.
    fn render(&self, area: Rect, frame: &mut Frame);
}

/// A `StatefulWidget` is a widget that renders based on mutable state.
pub trait StatefulWidget {
    type State;

    /// Render the widget into the frame with mutable state.
    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State);
}

/// Helper to apply a partial style to a cell.
pub(crate) fn apply_style(cell: &mut Cell, style: Style) {
    if let Some(fg) = style.fg {
        cell.fg = fg;
    }
    if let Some(bg) = style.bg {
        cell.bg = bg;
    }
    if let Some(attrs) = style.attrs {
        cell.attrs = cell.attrs.with_flags(attrs.into());
    }
}

/// Apply a style to all cells in a rectangular area.
///
/// This modifies existing cells, preserving their content.
pub(crate) fn set_style_area(buf: &mut Buffer, area: Rect, style: Style) {
    if style.is_empty() {
        return;
    }
    for y in area.y..area.bottom() {
        for x in area.x..area.right() {
            if let Some(cell) = buf.get_mut(x, y) {
                apply_style(cell, style);
            }
        }
    }
}

/// Draw a text span into a frame at the given position.
///
/// Returns the x position after the last drawn character.
/// Stops at `max_x` (exclusive).
pub(crate) fn draw_text_span(
    frame: &mut Frame,
    mut x: u16,
    y: u16,
    content: &str,
    style: Style,
    max_x: u16,
) -> u16 {
    use unicode_segmentation::UnicodeSegmentation;
    use unicode_width::UnicodeWidthStr;

    for grapheme in content.graphemes(true) {
        if x >= max_x {
            break;
        }
        let w = UnicodeWidthStr::width(grapheme);
        if w == 0 {
            continue;
        }
        if x + w as u16 > max_x {
            break;
        }

        let Some(c) = grapheme.chars().next() else {
            continue;
        };
        let mut cell = Cell::from_char(c);
        apply_style(&mut cell, style);
        frame.buffer.set(x, y, cell);

        // Wide glyphs occupy trailing cells; blank them so stale content
        // cannot show through.
        for pad in 1..w as u16 {
            let mut filler = Cell::default();
            apply_style(&mut filler, style);
            frame.buffer.set(x + pad, y, filler);
        }

        x = x.saturating_add(w as u16);
    }
    x
}
