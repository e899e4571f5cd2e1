#![forbid(unsafe_code)]

//! Overlay chrome: dimmed backdrop, centered content slot, and the hit
//! regions that distinguish backdrop taps from dialog taps.

use alertkit_core::geometry::Rect;
use alertkit_render::cell::Rgba;
use alertkit_render::frame::{Frame, HitId, HitRegion};
use alertkit_style::Style;

use crate::set_style_area;

/// Hit region tag for the dimmed area outside the dialog.
pub const OVERLAY_HIT_BACKDROP: HitRegion = HitRegion::Custom(1);

/// Hit region tag for the dialog surface itself.
pub const OVERLAY_HIT_CONTENT: HitRegion = HitRegion::Custom(2);

/// Overlay geometry and backdrop appearance.
#[derive(Debug, Clone, Copy)]
pub struct OverlayConfig {
    backdrop_color: Rgba,
    backdrop_opacity: f32,
    content_width: u16,
    vertical_inset: u16,
    hit_id: Option<HitId>,
}

impl Default for OverlayConfig {
    fn default() -> Self {
        Self {
            backdrop_color: Rgba::BLACK,
            backdrop_opacity: 0.2,
            content_width: 40,
            vertical_inset: 2,
            hit_id: None,
        }
    }
}

impl OverlayConfig {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn backdrop_color(mut self, color: Rgba) -> Self {
        self.backdrop_color = color;
        self
    }

    /// Backdrop dim strength, clamped to `[0, 1]`.
    #[must_use]
    pub fn backdrop_opacity(mut self, opacity: f32) -> Self {
        self.backdrop_opacity = opacity.clamp(0.0, 1.0);
        self
    }

    /// Fixed dialog width in cells.
    #[must_use]
    pub fn content_width(mut self, width: u16) -> Self {
        self.content_width = width;
        self
    }

    /// Minimum rows kept clear above and below the dialog.
    #[must_use]
    pub fn vertical_inset(mut self, inset: u16) -> Self {
        self.vertical_inset = inset;
        self
    }

    #[must_use]
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = Some(id);
        self
    }
}

/// Positions a dialog over a dimmed backdrop.
#[derive(Debug, Clone, Copy, Default)]
pub struct Overlay {
    config: OverlayConfig,
}

impl Overlay {
    #[must_use]
    pub fn new(config: OverlayConfig) -> Self {
        Self { config }
    }

    #[must_use]
    pub const fn config(&self) -> &OverlayConfig {
        &self.config
    }

    /// The dialog's slot: fixed width, natural height, centered both ways,
    /// clamped to the area minus the vertical inset.
    #[must_use]
    pub fn content_rect(&self, area: Rect, content_height: u16) -> Rect {
        let width = self.config.content_width.min(area.width);
        let max_height = area
            .height
            .saturating_sub(self.config.vertical_inset.saturating_mul(2));
        let height = content_height.min(max_height);
        let x = area.x + (area.width - width) / 2;
        let y = area.y + (area.height.saturating_sub(height)) / 2;
        Rect::new(x, y, width, height)
    }

    /// Tint the whole area with the backdrop color at the configured
    /// opacity scaled by `opacity` (the presentation fade).
    pub fn render_backdrop(&self, frame: &mut Frame, area: Rect, opacity: f32) {
        let effective = (self.config.backdrop_opacity * opacity).clamp(0.0, 1.0);
        if effective <= 0.0 {
            return;
        }
        let bg = self.config.backdrop_color.with_opacity(effective);
        set_style_area(&mut frame.buffer, area, Style::new().bg(bg));
    }

    /// Register the backdrop and content hit regions. The content region
    /// is registered last so it wins inside the dialog.
    pub fn register_hits(&self, frame: &mut Frame, area: Rect, content: Rect) {
        let Some(hit_id) = self.config.hit_id else {
            return;
        };
        frame.register_hit(area, hit_id, OVERLAY_HIT_BACKDROP, 0);
        frame.register_hit(content, hit_id, OVERLAY_HIT_CONTENT, 0);
    }
}
