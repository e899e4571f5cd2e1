#![forbid(unsafe_code)]

//! Render kernel: cells, buffers, and frames with an optional hit grid.
//!
//! alertkit renders into caller-provided [`Frame`]s; presenting the buffer
//! to an actual terminal is the host application's job.

pub mod buffer;
pub mod cell;
pub mod frame;

pub use buffer::Buffer;
pub use cell::{Cell, CellAttrs, Rgba};
pub use frame::{Frame, HitData, HitId, HitRegion};
