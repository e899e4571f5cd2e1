#![forbid(unsafe_code)]

//! Style types for alertkit.
//!
//! A [`Style`] is a partial specification: unset fields inherit whatever
//! the cell already carries, which is what lets a backdrop tint preserve
//! underlying glyphs.

pub mod style;

pub use style::{Style, StyleFlags};
