#![forbid(unsafe_code)]

//! Presentation transition: scale-down + fade-in on present, fade-out on
//! dismiss. Time is passed in, never sampled, so the animation is
//! deterministic under test.

use web_time::{Duration, Instant};

use alertkit_core::geometry::Rect;

/// Length of both the present and dismiss animations.
pub const TRANSITION_DURATION: Duration = Duration::from_millis(200);

/// Initial scale of the dialog while presenting; it settles to 1.0.
pub const PRESENT_SCALE: f32 = 1.15;

/// Where the dialog is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionPhase {
    /// Not on screen.
    Closed,
    /// Animating in.
    Presenting,
    /// Fully on screen.
    Open,
    /// Animating out.
    Dismissing,
}

/// Animation clock for one presented dialog.
#[derive(Debug, Clone, Copy)]
pub struct TransitionState {
    phase: TransitionPhase,
    started: Option<Instant>,
}

impl Default for TransitionState {
    fn default() -> Self {
        Self {
            phase: TransitionPhase::Closed,
            started: None,
        }
    }
}

impl TransitionState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub const fn phase(&self) -> TransitionPhase {
        self.phase
    }

    /// True while an animation frame is still pending.
    #[must_use]
    pub const fn is_animating(&self) -> bool {
        matches!(
            self.phase,
            TransitionPhase::Presenting | TransitionPhase::Dismissing
        )
    }

    /// Start the present animation. Restarting while already presenting
    /// or open is a no-op.
    pub fn begin_present(&mut self, now: Instant) {
        match self.phase {
            TransitionPhase::Closed | TransitionPhase::Dismissing => {
                self.phase = TransitionPhase::Presenting;
                self.started = Some(now);
            }
            TransitionPhase::Presenting | TransitionPhase::Open => {}
        }
    }

    /// Start the dismiss animation. A closed or already-dismissing dialog
    /// is left alone.
    pub fn begin_dismiss(&mut self, now: Instant) {
        match self.phase {
            TransitionPhase::Presenting | TransitionPhase::Open => {
                self.phase = TransitionPhase::Dismissing;
                self.started = Some(now);
            }
            TransitionPhase::Closed | TransitionPhase::Dismissing => {}
        }
    }

    /// Advance the clock: a finished present lands in `Open`, a finished
    /// dismiss lands in `Closed`.
    pub fn tick(&mut self, now: Instant) {
        if self.progress(now) < 1.0 {
            return;
        }
        match self.phase {
            TransitionPhase::Presenting => {
                self.phase = TransitionPhase::Open;
                self.started = None;
            }
            TransitionPhase::Dismissing => {
                self.phase = TransitionPhase::Closed;
                self.started = None;
            }
            TransitionPhase::Closed | TransitionPhase::Open => {}
        }
    }

    /// Eased animation progress in `[0, 1]`.
    fn progress(&self, now: Instant) -> f32 {
        let Some(started) = self.started else {
            return 1.0;
        };
        let elapsed = now.saturating_duration_since(started).as_secs_f32();
        let t = (elapsed / TRANSITION_DURATION.as_secs_f32()).clamp(0.0, 1.0);
        // ease-out: fast start, gentle settle
        1.0 - (1.0 - t) * (1.0 - t)
    }

    /// Dialog opacity at `now`: fades in while presenting, out while
    /// dismissing.
    #[must_use]
    pub fn opacity(&self, now: Instant) -> f32 {
        match self.phase {
            TransitionPhase::Closed => 0.0,
            TransitionPhase::Open => 1.0,
            TransitionPhase::Presenting => self.progress(now),
            TransitionPhase::Dismissing => 1.0 - self.progress(now),
        }
    }

    /// Dialog scale at `now`: settles from [`PRESENT_SCALE`] to 1.0 while
    /// presenting; dismiss fades without rescaling.
    #[must_use]
    pub fn scale(&self, now: Instant) -> f32 {
        match self.phase {
            TransitionPhase::Presenting => {
                PRESENT_SCALE + (1.0 - PRESENT_SCALE) * self.progress(now)
            }
            _ => 1.0,
        }
    }
}

/// Grow or shrink `rect` about its center by `scale`.
#[must_use]
pub fn scaled_rect(rect: Rect, scale: f32) -> Rect {
    if (scale - 1.0).abs() < f32::EPSILON {
        return rect;
    }
    let width = (f32::from(rect.width) * scale).round() as u16;
    let height = (f32::from(rect.height) * scale).round() as u16;
    let cx = i32::from(rect.x) + i32::from(rect.width) / 2;
    let cy = i32::from(rect.y) + i32::from(rect.height) / 2;
    let x = (cx - i32::from(width) / 2).max(0) as u16;
    let y = (cy - i32::from(height) / 2).max(0) as u16;
    Rect::new(x, y, width, height)
}
