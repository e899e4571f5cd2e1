#![forbid(unsafe_code)]

//! Rule widget: a one-cell-thick separator line.

use alertkit_core::geometry::Rect;
use alertkit_render::cell::Cell;
use alertkit_render::frame::Frame;
use alertkit_style::Style;

use crate::{Widget, apply_style};

/// Separator orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
    Horizontal,
    Vertical,
}

/// A thin separator line filling its area with a line glyph.
///
/// The area is expected to be one cell thick along the cross axis; a
/// thicker area is simply filled, which keeps the widget total.
#[derive(Debug, Clone, Copy)]
pub struct Rule {
    axis: Axis,
    style: Style,
}

impl Rule {
    #[must_use]
    pub const fn new(axis: Axis) -> Self {
        Self {
            axis,
            style: Style::new(),
        }
    }

    #[must_use]
    pub const fn horizontal() -> Self {
        Self::new(Axis::Horizontal)
    }

    #[must_use]
    pub const fn vertical() -> Self {
        Self::new(Axis::Vertical)
    }

    #[must_use]
    pub const fn style(mut self, style: Style) -> Self {
        self.style = style;
        self
    }

    #[must_use]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    fn glyph(&self, unicode: bool) -> char {
        match (self.axis, unicode) {
            (Axis::Horizontal, true) => '─',
            (Axis::Horizontal, false) => '-',
            (Axis::Vertical, true) => '│',
            (Axis::Vertical, false) => '|',
        }
    }
}

impl Widget for Rule {
    fn render(&self, area: Rect, frame: &mut Frame) {
        if area.is_empty() {
            return;
        }
        let mut cell = Cell::from_char(self.glyph(frame.buffer.unicode_lines));
        apply_style(&mut cell, self.style);
        for y in area.y..area.bottom() {
            for x in area.x..area.right() {
                frame.buffer.set(x, y, cell);
            }
        }
    }
}
