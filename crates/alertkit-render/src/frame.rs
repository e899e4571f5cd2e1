#![forbid(unsafe_code)]

//! A frame pairs a [`Buffer`] with cursor state and an optional hit grid.
//!
//! Widgets that want mouse interaction register rectangular hit regions
//! while rendering; the host application resolves pointer events against
//! the last rendered frame with [`Frame::hit_test`]. Regions registered
//! later win, so content naturally sits on top of a backdrop registered
//! first.

use alertkit_core::geometry::Rect;
use smallvec::SmallVec;

use crate::buffer::Buffer;

/// Identifies which widget instance registered a hit region.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct HitId(u64);

impl HitId {
    #[must_use]
    pub const fn new(id: u64) -> Self {
        Self(id)
    }

    #[must_use]
    pub const fn id(self) -> u64 {
        self.0
    }
}

/// Distinguishes regions within one widget (backdrop vs content vs button).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum HitRegion {
    Content,
    Custom(u16),
}

/// Per-region payload, typically an index.
pub type HitData = u64;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct HitEntry {
    area: Rect,
    id: HitId,
    region: HitRegion,
    data: HitData,
}

/// A render target for one paint pass.
#[derive(Debug)]
pub struct Frame {
    pub buffer: Buffer,
    pub cursor_position: Option<(u16, u16)>,
    pub cursor_visible: bool,
    hits: Option<SmallVec<[HitEntry; 8]>>,
}

impl Frame {
    /// A frame without a hit grid; `register_hit` becomes a no-op.
    #[must_use]
    pub fn new(width: u16, height: u16) -> Self {
        Self {
            buffer: Buffer::new(width, height),
            cursor_position: None,
            cursor_visible: false,
            hits: None,
        }
    }

    /// A frame that records hit regions for mouse resolution.
    #[must_use]
    pub fn with_hit_grid(width: u16, height: u16) -> Self {
        Self {
            hits: Some(SmallVec::new()),
            ..Self::new(width, height)
        }
    }

    #[must_use]
    pub const fn area(&self) -> Rect {
        self.buffer.area()
    }

    /// Record a hit region. Empty areas are skipped.
    pub fn register_hit(&mut self, area: Rect, id: HitId, region: HitRegion, data: HitData) {
        if area.is_empty() {
            return;
        }
        if let Some(hits) = &mut self.hits {
            hits.push(HitEntry {
                area,
                id,
                region,
                data,
            });
        }
    }

    /// Resolve the topmost hit region containing `(x, y)`.
    #[must_use]
    pub fn hit_test(&self, x: u16, y: u16) -> Option<(HitId, HitRegion, HitData)> {
        let hits = self.hits.as_ref()?;
        hits.iter()
            .rev()
            .find(|entry| entry.area.contains(x, y))
            .map(|entry| (entry.id, entry.region, entry.data))
    }

    /// Drop all recorded regions, keeping the grid enabled.
    pub fn clear_hits(&mut self) {
        if let Some(hits) = &mut self.hits {
            hits.clear();
        }
    }
}
