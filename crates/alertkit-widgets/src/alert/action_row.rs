#![forbid(unsafe_code)]

//! Action sequence row: equal-width segments, thin separators, and
//! pointer tracking.
//!
//! Invariants:
//! - N actions yield exactly N-1 separators, strictly between adjacent
//!   segments (none at the ends).
//! - Every segment's width equals the first segment's width.
//! - Disabled segments keep their layout slot but never highlight and
//!   never emit a tap.
//! - The tap index is the segment's rank among *enabled* segments at
//!   release time (enabled-only numbering).
//!
//! Tracking state machine: Idle -> (press inside) -> Tracking; each drag
//! sample re-hit-tests and highlights the enabled segment under the
//! pointer; release emits the hit segment's enabled rank; focus loss
//! cancels with no emission. Selection feedback fires only on a
//! transition into a newly highlighted segment during a drag, not on the
//! initial press.

use std::rc::Rc;

use alertkit_core::event::{Event, MouseButton, MouseEvent, MouseEventKind};
use alertkit_core::geometry::Rect;
use alertkit_render::cell::Rgba;
use alertkit_render::frame::{Frame, HitId, HitRegion};
use alertkit_style::Style;
use unicode_width::UnicodeWidthStr;

use crate::alert::model::Action;
use crate::rule::Rule;
use crate::{StatefulWidget, draw_text_span, set_style_area};

/// Hit region tag for action segments; hit data is the absolute index.
pub const ACTION_ROW_HIT_SEGMENT: HitRegion = HitRegion::Custom(10);

/// Background tint for the segment under the pointer.
const HIGHLIGHT_BG: Rgba = Rgba::rgba(200, 200, 200, 51);

/// Default separator line color.
const SEPARATOR_COLOR: Rgba = Rgba::rgba(128, 128, 128, 140);

/// Receiver for selection-change feedback during tracking (the haptic
/// generator's seam). The default row has none.
pub trait SelectionFeedback {
    fn selection_changed(&self);
}

/// Per-gesture tracking state.
///
/// `feedback_segment` remembers the last segment that highlighted during
/// this gesture; unlike the visual highlight it survives the pointer
/// leaving the row, so drifting out and back into the same segment does
/// not re-fire feedback.
#[derive(Debug, Clone, Copy, Default)]
pub struct ActionRowState {
    tracking: bool,
    highlighted: Option<usize>,
    feedback_segment: Option<usize>,
}

impl ActionRowState {
    /// The absolute index of the currently highlighted segment.
    #[must_use]
    pub const fn highlighted(&self) -> Option<usize> {
        self.highlighted
    }

    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.tracking
    }
}

/// The rendered action sequence.
pub struct ActionRow {
    actions: Vec<Action>,
    tint: Rgba,
    disabled_tint: Rgba,
    separator_style: Style,
    hit_id: Option<HitId>,
    feedback: Option<Rc<dyn SelectionFeedback>>,
}

impl std::fmt::Debug for ActionRow {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionRow")
            .field("actions", &self.actions)
            .field("hit_id", &self.hit_id)
            .finish()
    }
}

impl ActionRow {
    #[must_use]
    pub fn new(actions: &[Action], tint: Rgba, disabled_tint: Rgba) -> Self {
        Self {
            actions: actions.to_vec(),
            tint,
            disabled_tint,
            separator_style: Style::new().fg(SEPARATOR_COLOR),
            hit_id: None,
            feedback: None,
        }
    }

    #[must_use]
    pub fn separator_style(mut self, style: Style) -> Self {
        self.separator_style = style;
        self
    }

    #[must_use]
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = Some(id);
        self
    }

    #[must_use]
    pub fn feedback(mut self, feedback: Rc<dyn SelectionFeedback>) -> Self {
        self.feedback = Some(feedback);
        self
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.actions.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.actions.is_empty()
    }

    /// Uniform segment width for the given area, zero when it cannot fit.
    fn segment_width(&self, area: Rect) -> u16 {
        let n = self.actions.len() as u16;
        if n == 0 {
            return 0;
        }
        area.width.saturating_sub(n - 1) / n
    }

    /// The layout slot of every segment, in action order.
    ///
    /// Each segment is exactly as wide as the first; any remainder after
    /// uniform division trails the row unused.
    #[must_use]
    pub fn segment_rects(&self, area: Rect) -> Vec<Rect> {
        let width = self.segment_width(area);
        if width == 0 || area.height == 0 {
            return Vec::new();
        }
        (0..self.actions.len() as u16)
            .map(|i| Rect::new(area.x + i * (width + 1), area.y, width, area.height))
            .collect()
    }

    /// The N-1 separator slots between adjacent segments.
    #[must_use]
    pub fn separator_rects(&self, area: Rect) -> Vec<Rect> {
        let width = self.segment_width(area);
        if width == 0 || area.height == 0 || self.actions.len() < 2 {
            return Vec::new();
        }
        (1..self.actions.len() as u16)
            .map(|i| Rect::new(area.x + i * (width + 1) - 1, area.y, 1, area.height))
            .collect()
    }

    /// The absolute index of the segment whose rect contains `(x, y)`.
    #[must_use]
    pub fn hit_segment(&self, area: Rect, x: u16, y: u16) -> Option<usize> {
        self.segment_rects(area)
            .iter()
            .position(|rect| rect.contains(x, y))
    }

    /// Rank of the action at `index` among enabled actions, `None` when
    /// the action itself is disabled.
    #[must_use]
    pub fn enabled_rank(&self, index: usize) -> Option<usize> {
        if !self.actions.get(index)?.is_enabled() {
            return None;
        }
        Some(
            self.actions[..index]
                .iter()
                .filter(|action| action.is_enabled())
                .count(),
        )
    }

    /// Pointer-down inside the control: enter Tracking and highlight the
    /// hit segment (no feedback on the initial press).
    pub fn begin_tracking(&self, state: &mut ActionRowState, area: Rect, x: u16, y: u16) {
        state.tracking = true;
        state.highlighted = None;
        state.feedback_segment = None;
        self.update_highlight(state, area, x, y, false);
    }

    /// Pointer moved while tracking: re-resolve the highlight, firing
    /// feedback only on a transition into a newly highlighted segment.
    pub fn continue_tracking(&self, state: &mut ActionRowState, area: Rect, x: u16, y: u16) {
        if !state.tracking {
            return;
        }
        self.update_highlight(state, area, x, y, true);
    }

    /// Pointer-up: leave Tracking, clear highlights, and emit the released
    /// segment's enabled rank if it is enabled.
    pub fn end_tracking(
        &self,
        state: &mut ActionRowState,
        area: Rect,
        x: u16,
        y: u16,
    ) -> Option<usize> {
        if !state.tracking {
            return None;
        }
        state.tracking = false;
        state.highlighted = None;
        state.feedback_segment = None;

        let index = self.hit_segment(area, x, y)?;
        self.enabled_rank(index)
    }

    /// Gesture cancelled: clear all tracking state, emit nothing.
    pub fn cancel_tracking(&self, state: &mut ActionRowState) {
        state.tracking = false;
        state.highlighted = None;
        state.feedback_segment = None;
    }

    fn update_highlight(
        &self,
        state: &mut ActionRowState,
        area: Rect,
        x: u16,
        y: u16,
        with_feedback: bool,
    ) {
        let hit = self
            .hit_segment(area, x, y)
            .filter(|&index| self.actions[index].is_enabled());

        if let Some(index) = hit {
            if state.feedback_segment != Some(index) {
                if with_feedback {
                    if let Some(feedback) = &self.feedback {
                        feedback.selection_changed();
                    }
                }
                state.feedback_segment = Some(index);
            }
        }
        state.highlighted = hit;
    }

    /// Route a raw event through the tracking state machine.
    ///
    /// Returns the enabled-only index of a completed tap, if any.
    pub fn handle_event(
        &self,
        event: &Event,
        state: &mut ActionRowState,
        area: Rect,
    ) -> Option<usize> {
        match event {
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Down(MouseButton::Left),
                x,
                y,
            }) if area.contains(*x, *y) => {
                self.begin_tracking(state, area, *x, *y);
                None
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Drag(MouseButton::Left),
                x,
                y,
            }) => {
                self.continue_tracking(state, area, *x, *y);
                None
            }
            Event::Mouse(MouseEvent {
                kind: MouseEventKind::Up(MouseButton::Left),
                x,
                y,
            }) => self.end_tracking(state, area, *x, *y),
            Event::FocusLost => {
                self.cancel_tracking(state);
                None
            }
            _ => None,
        }
    }
}

impl StatefulWidget for ActionRow {
    type State = ActionRowState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        if area.is_empty() || self.actions.is_empty() {
            return;
        }

        let segments = self.segment_rects(area);
        for (index, (action, rect)) in self.actions.iter().zip(&segments).enumerate() {
            if state.highlighted == Some(index) {
                set_style_area(&mut frame.buffer, *rect, Style::new().bg(HIGHLIGHT_BG));
            }

            let style = action
                .style()
                .text_style(action.is_enabled(), self.tint, self.disabled_tint);
            let title = action.title();
            let width = UnicodeWidthStr::width(title).min(rect.width as usize) as u16;
            let x = rect.x + (rect.width - width) / 2;
            let y = rect.y + rect.height / 2;
            draw_text_span(frame, x, y, title, style, rect.right());

            if let Some(hit_id) = self.hit_id {
                frame.register_hit(*rect, hit_id, ACTION_ROW_HIT_SEGMENT, index as u64);
            }
        }

        let separator = Rule::vertical().style(self.separator_style);
        for rect in self.separator_rects(area) {
            crate::Widget::render(&separator, rect, frame);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::model::{ActionStyle, DEFAULT_DISABLED_TINT, DEFAULT_TINT};
    use std::cell::Cell;

    fn actions(n: usize) -> Vec<Action> {
        (0..n)
            .map(|i| Action::new(format!("A{i}"), ActionStyle::Default))
            .collect()
    }

    fn row(actions: &[Action]) -> ActionRow {
        ActionRow::new(actions, DEFAULT_TINT, DEFAULT_DISABLED_TINT)
    }

    struct CountingFeedback(Cell<u32>);

    impl SelectionFeedback for CountingFeedback {
        fn selection_changed(&self) {
            self.0.set(self.0.get() + 1);
        }
    }

    #[test]
    fn separator_count_is_n_minus_one() {
        let area = Rect::new(0, 0, 30, 1);
        for n in 1..=5 {
            let acts = actions(n);
            let row = row(&acts);
            assert_eq!(row.separator_rects(area).len(), n - 1, "n = {n}");
        }
    }

    #[test]
    fn zero_actions_render_nothing() {
        let acts = actions(0);
        let row = row(&acts);
        let area = Rect::new(0, 0, 30, 1);
        assert!(row.segment_rects(area).is_empty());
        assert!(row.separator_rects(area).is_empty());
    }

    #[test]
    fn all_segments_match_first_width() {
        let acts = actions(3);
        let row = row(&acts);
        let rects = row.segment_rects(Rect::new(2, 0, 31, 1));
        let first = rects[0].width;
        assert!(rects.iter().all(|r| r.width == first));
    }

    #[test]
    fn separators_sit_strictly_between_segments() {
        let acts = actions(3);
        let row = row(&acts);
        let area = Rect::new(0, 0, 32, 1);
        let segments = row.segment_rects(area);
        let separators = row.separator_rects(area);
        for (i, sep) in separators.iter().enumerate() {
            assert_eq!(sep.x, segments[i].right());
            assert_eq!(sep.right(), segments[i + 1].x);
        }
    }

    #[test]
    fn tap_inside_segment_fires_its_index() {
        let acts = actions(3);
        let row = row(&acts);
        let area = Rect::new(0, 0, 32, 1);
        let rects = row.segment_rects(area);
        let mut state = ActionRowState::default();

        for (i, rect) in rects.iter().enumerate() {
            row.begin_tracking(&mut state, area, rect.x, rect.y);
            let tapped = row.end_tracking(&mut state, area, rect.x, rect.y);
            assert_eq!(tapped, Some(i));
        }
    }

    #[test]
    fn disabled_segment_never_highlights_or_fires() {
        let acts = actions(2);
        acts[1].set_enabled(false);
        let row = row(&acts);
        let area = Rect::new(0, 0, 21, 1);
        let target = row.segment_rects(area)[1];
        let mut state = ActionRowState::default();

        row.begin_tracking(&mut state, area, target.x, target.y);
        assert_eq!(state.highlighted(), None);
        assert_eq!(row.end_tracking(&mut state, area, target.x, target.y), None);
    }

    #[test]
    fn disabling_renumbers_following_actions() {
        let acts = actions(3);
        acts[1].set_enabled(false);
        let row = row(&acts);
        let area = Rect::new(0, 0, 32, 1);
        let third = row.segment_rects(area)[2];
        let mut state = ActionRowState::default();

        row.begin_tracking(&mut state, area, third.x, third.y);
        let tapped = row.end_tracking(&mut state, area, third.x, third.y);
        assert_eq!(tapped, Some(1), "enabled-only numbering skips action 1");
    }

    #[test]
    fn drag_resolves_to_release_segment() {
        let acts = actions(3);
        let row = row(&acts);
        let area = Rect::new(0, 0, 32, 1);
        let rects = row.segment_rects(area);
        let mut state = ActionRowState::default();

        row.begin_tracking(&mut state, area, rects[0].x, rects[0].y);
        row.continue_tracking(&mut state, area, rects[1].x, rects[1].y);
        row.continue_tracking(&mut state, area, rects[2].x, rects[2].y);
        let tapped = row.end_tracking(&mut state, area, rects[2].x, rects[2].y);
        assert_eq!(tapped, Some(2));
    }

    #[test]
    fn release_outside_row_fires_nothing() {
        let acts = actions(2);
        let row = row(&acts);
        let area = Rect::new(0, 0, 21, 1);
        let mut state = ActionRowState::default();

        row.begin_tracking(&mut state, area, 0, 0);
        assert_eq!(row.end_tracking(&mut state, area, 0, 5), None);
        assert!(!state.is_tracking());
    }

    #[test]
    fn cancel_clears_highlight_and_fires_nothing() {
        let acts = actions(2);
        let row = row(&acts);
        let area = Rect::new(0, 0, 21, 1);
        let mut state = ActionRowState::default();

        row.begin_tracking(&mut state, area, 0, 0);
        assert_eq!(state.highlighted(), Some(0));
        row.cancel_tracking(&mut state);
        assert_eq!(state.highlighted(), None);
        assert!(!state.is_tracking());
    }

    #[test]
    fn feedback_fires_on_transition_not_on_press_or_repeat() {
        let acts = actions(3);
        let feedback = Rc::new(CountingFeedback(Cell::new(0)));
        let row = row(&acts).feedback(Rc::clone(&feedback) as Rc<dyn SelectionFeedback>);
        let area = Rect::new(0, 0, 32, 1);
        let rects = row.segment_rects(area);
        let mut state = ActionRowState::default();

        row.begin_tracking(&mut state, area, rects[0].x, rects[0].y);
        assert_eq!(feedback.0.get(), 0, "no feedback on initial press");

        row.continue_tracking(&mut state, area, rects[0].x + 1, rects[0].y);
        assert_eq!(feedback.0.get(), 0, "no feedback within the same segment");

        row.continue_tracking(&mut state, area, rects[1].x, rects[1].y);
        assert_eq!(feedback.0.get(), 1, "feedback on segment transition");

        row.continue_tracking(&mut state, area, rects[1].x + 1, rects[1].y);
        assert_eq!(feedback.0.get(), 1);
    }

    #[test]
    fn out_and_back_into_same_segment_is_silent() {
        let acts = actions(2);
        let feedback = Rc::new(CountingFeedback(Cell::new(0)));
        let row = row(&acts).feedback(Rc::clone(&feedback) as Rc<dyn SelectionFeedback>);
        let area = Rect::new(0, 0, 21, 1);
        let rects = row.segment_rects(area);
        let mut state = ActionRowState::default();

        row.begin_tracking(&mut state, area, rects[0].x, rects[0].y);
        row.continue_tracking(&mut state, area, rects[0].x, 5);
        assert_eq!(state.highlighted(), None);
        row.continue_tracking(&mut state, area, rects[0].x, rects[0].y);
        assert_eq!(state.highlighted(), Some(0));
        assert_eq!(feedback.0.get(), 0, "same segment after a gap is not a transition");

        // A genuinely new segment after the gap still fires.
        row.continue_tracking(&mut state, area, rects[1].x, 5);
        row.continue_tracking(&mut state, area, rects[1].x, rects[1].y);
        assert_eq!(feedback.0.get(), 1);
    }

    #[test]
    fn pointer_outside_clears_highlight_without_feedback() {
        let acts = actions(2);
        let feedback = Rc::new(CountingFeedback(Cell::new(0)));
        let row = row(&acts).feedback(Rc::clone(&feedback) as Rc<dyn SelectionFeedback>);
        let area = Rect::new(0, 0, 21, 1);
        let mut state = ActionRowState::default();

        row.begin_tracking(&mut state, area, 0, 0);
        row.continue_tracking(&mut state, area, 0, 5);
        assert_eq!(state.highlighted(), None);
        assert_eq!(feedback.0.get(), 0);
    }

    #[test]
    fn handle_event_maps_press_drag_release() {
        let acts = actions(2);
        let row = row(&acts);
        let area = Rect::new(0, 0, 21, 1);
        let rects = row.segment_rects(area);
        let mut state = ActionRowState::default();

        let down = Event::Mouse(MouseEvent::new(
            MouseEventKind::Down(MouseButton::Left),
            rects[0].x,
            rects[0].y,
        ));
        let drag = Event::Mouse(MouseEvent::new(
            MouseEventKind::Drag(MouseButton::Left),
            rects[1].x,
            rects[1].y,
        ));
        let up = Event::Mouse(MouseEvent::new(
            MouseEventKind::Up(MouseButton::Left),
            rects[1].x,
            rects[1].y,
        ));

        assert_eq!(row.handle_event(&down, &mut state, area), None);
        assert_eq!(row.handle_event(&drag, &mut state, area), None);
        assert_eq!(row.handle_event(&up, &mut state, area), Some(1));
    }

    #[test]
    fn handle_event_press_outside_does_not_start_tracking() {
        let acts = actions(1);
        let row = row(&acts);
        let area = Rect::new(0, 0, 10, 1);
        let mut state = ActionRowState::default();

        let down = Event::Mouse(MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 0, 5));
        row.handle_event(&down, &mut state, area);
        assert!(!state.is_tracking());

        let up = Event::Mouse(MouseEvent::new(MouseEventKind::Up(MouseButton::Left), 0, 0));
        assert_eq!(row.handle_event(&up, &mut state, area), None);
    }

    #[test]
    fn focus_lost_cancels_tracking() {
        let acts = actions(1);
        let row = row(&acts);
        let area = Rect::new(0, 0, 10, 1);
        let mut state = ActionRowState::default();

        row.begin_tracking(&mut state, area, 0, 0);
        row.handle_event(&Event::FocusLost, &mut state, area);
        assert!(!state.is_tracking());
        assert_eq!(state.highlighted(), None);
    }

    #[test]
    fn render_registers_segment_hits() {
        let acts = actions(2);
        let row = row(&acts).hit_id(HitId::new(5));
        let area = Rect::new(0, 0, 21, 1);
        let mut frame = Frame::with_hit_grid(21, 1);
        let mut state = ActionRowState::default();
        row.render(area, &mut frame, &mut state);

        let rects = row.segment_rects(area);
        assert_eq!(
            frame.hit_test(rects[1].x, rects[1].y),
            Some((HitId::new(5), ACTION_ROW_HIT_SEGMENT, 1))
        );
        // Separator cells belong to no segment.
        assert_eq!(frame.hit_test(rects[0].right(), 0), None);
    }

    #[test]
    fn render_draws_separator_glyph() {
        let acts = actions(2);
        let row = row(&acts);
        let area = Rect::new(0, 0, 21, 1);
        let mut frame = Frame::new(21, 1);
        let mut state = ActionRowState::default();
        row.render(area, &mut frame, &mut state);

        let sep = row.separator_rects(area)[0];
        assert_eq!(frame.buffer.get(sep.x, 0).unwrap().ch, '│');
    }

    mod properties {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn layout_invariants_hold(n in 1usize..8, width in 0u16..200, x in 0u16..50) {
                let acts = actions(n);
                let row = row(&acts);
                let area = Rect::new(x, 0, width, 1);
                let segments = row.segment_rects(area);
                let separators = row.separator_rects(area);

                if segments.is_empty() {
                    prop_assert!(separators.is_empty());
                } else {
                    prop_assert_eq!(segments.len(), n);
                    prop_assert_eq!(separators.len(), n - 1);
                    let first = segments[0].width;
                    for seg in &segments {
                        prop_assert_eq!(seg.width, first);
                        prop_assert!(seg.right() <= area.right());
                    }
                    for sep in &separators {
                        prop_assert_eq!(sep.width, 1);
                        prop_assert!(sep.x >= area.x && sep.right() <= area.right());
                    }
                }
            }

            #[test]
            fn hit_segment_agrees_with_rects(n in 1usize..6, px in 0u16..60) {
                let acts = actions(n);
                let row = row(&acts);
                let area = Rect::new(0, 0, 59, 1);
                let hit = row.hit_segment(area, px, 0);
                let expected = row
                    .segment_rects(area)
                    .iter()
                    .position(|r| r.contains(px, 0));
                prop_assert_eq!(hit, expected);
            }
        }
    }
}
