#![forbid(unsafe_code)]

//! Core primitives for alertkit: cell-grid geometry and input events.

pub mod event;
pub mod geometry;

pub use event::{Event, KeyCode, KeyEvent, KeyEventKind, Modifiers, MouseButton, MouseEvent, MouseEventKind};
pub use geometry::{Point, Rect, Sides, Size};
