#![forbid(unsafe_code)]

//! Unified text styling with partial-override merge semantics.

use alertkit_render::cell::{CellAttrs, Rgba};
use bitflags::bitflags;

bitflags! {
    /// Text attribute flags at the style layer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct StyleFlags: u16 {
        const BOLD      = 0b0000_0001;
        const DIM       = 0b0000_0010;
        const ITALIC    = 0b0000_0100;
        const UNDERLINE = 0b0000_1000;
        const REVERSE   = 0b0001_0000;
    }
}

impl From<StyleFlags> for CellAttrs {
    fn from(flags: StyleFlags) -> Self {
        CellAttrs::from_bits_truncate(flags.bits() as u8)
    }
}

/// A partial style: `None` fields leave the target cell untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Style {
    pub fg: Option<Rgba>,
    pub bg: Option<Rgba>,
    pub attrs: Option<StyleFlags>,
}

impl Style {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            fg: None,
            bg: None,
            attrs: None,
        }
    }

    #[must_use]
    pub const fn fg(mut self, color: Rgba) -> Self {
        self.fg = Some(color);
        self
    }

    #[must_use]
    pub const fn bg(mut self, color: Rgba) -> Self {
        self.bg = Some(color);
        self
    }

    #[must_use]
    pub fn flags(mut self, flags: StyleFlags) -> Self {
        self.attrs = Some(self.attrs.unwrap_or(StyleFlags::empty()) | flags);
        self
    }

    #[must_use]
    pub fn bold(self) -> Self {
        self.flags(StyleFlags::BOLD)
    }

    #[must_use]
    pub fn dim(self) -> Self {
        self.flags(StyleFlags::DIM)
    }

    #[must_use]
    pub fn italic(self) -> Self {
        self.flags(StyleFlags::ITALIC)
    }

    #[must_use]
    pub fn underline(self) -> Self {
        self.flags(StyleFlags::UNDERLINE)
    }

    #[must_use]
    pub fn reverse(self) -> Self {
        self.flags(StyleFlags::REVERSE)
    }

    /// Whether applying this style would change nothing.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.fg.is_none() && self.bg.is_none() && self.attrs.is_none_or(|a| a.is_empty())
    }

    /// This style with `fallback` filling any unset fields.
    #[must_use]
    pub fn merge(&self, fallback: &Self) -> Self {
        Self {
            fg: self.fg.or(fallback.fg),
            bg: self.bg.or(fallback.bg),
            attrs: match (self.attrs, fallback.attrs) {
                (Some(a), Some(b)) => Some(a | b),
                (a, b) => a.or(b),
            },
        }
    }
}
