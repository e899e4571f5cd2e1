#![forbid(unsafe_code)]

//! The alert dialog view: binds an [`Alert`] model, lays out title,
//! message, optional custom content, and the action row, and observes
//! each action's enabled flag so state changes mark the view dirty.

use std::cell::Cell as StdCell;
use std::rc::Rc;

use alertkit_core::event::Event;
use alertkit_core::geometry::Rect;
use alertkit_reactive::BindingScope;
use alertkit_render::cell::{Cell, Rgba};
use alertkit_render::frame::{Frame, HitId};
use alertkit_style::Style;

use crate::alert::action_row::{ActionRow, ActionRowState, SelectionFeedback};
use crate::alert::model::{Alert, Text};
use crate::rule::Rule;
use crate::{StatefulWidget, Widget, draw_text_span};

/// Dialog surface color.
const PANEL_BG: Rgba = Rgba::rgb(28, 28, 30);

/// Separator color above the action row.
const RULE_COLOR: Rgba = Rgba::rgba(128, 128, 128, 140);

/// Per-binding view state: gesture tracking, observable subscriptions,
/// the dirty flag they raise, and the action row's last laid-out area.
pub struct AlertViewState {
    row: ActionRowState,
    scope: BindingScope,
    dirty: Rc<StdCell<bool>>,
    actions_area: Option<Rect>,
}

impl Default for AlertViewState {
    fn default() -> Self {
        Self {
            row: ActionRowState::default(),
            scope: BindingScope::new(),
            dirty: Rc::new(StdCell::new(false)),
            actions_area: None,
        }
    }
}

impl AlertViewState {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// True when an observed model change has not been rendered yet.
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.dirty.get()
    }

    /// Number of live model subscriptions held by this binding.
    #[must_use]
    pub fn binding_count(&self) -> usize {
        self.scope.binding_count()
    }

    /// The action row's area from the last render, if actions exist.
    #[must_use]
    pub fn actions_area(&self) -> Option<Rect> {
        self.actions_area
    }

    #[must_use]
    pub fn row_state(&self) -> &ActionRowState {
        &self.row
    }
}

impl std::fmt::Debug for AlertViewState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertViewState")
            .field("row", &self.row)
            .field("bindings", &self.scope.binding_count())
            .field("dirty", &self.dirty.get())
            .finish()
    }
}

/// Renders a bound [`Alert`].
///
/// `bind` must be called before rendering; rebinding replaces the
/// previous model and drops every subscription the old binding held.
#[derive(Default)]
pub struct AlertView {
    alert: Option<Alert>,
    row: Option<ActionRow>,
    hit_id: Option<HitId>,
    feedback: Option<Rc<dyn SelectionFeedback>>,
}

impl AlertView {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Hit id used for the action segments' hit regions.
    #[must_use]
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = Some(id);
        self
    }

    /// Selection feedback passed through to the action row.
    #[must_use]
    pub fn feedback(mut self, feedback: Rc<dyn SelectionFeedback>) -> Self {
        self.feedback = Some(feedback);
        self
    }

    /// Bind a model: reset tracking, drop the old binding's
    /// subscriptions, rebuild the action row, and observe every action's
    /// enabled flag.
    pub fn bind(&mut self, alert: Alert, state: &mut AlertViewState) {
        state.scope.clear();
        state.row = ActionRowState::default();
        state.actions_area = None;
        state.dirty.set(true);

        let mut row = ActionRow::new(
            alert.actions(),
            alert.tint_color(),
            alert.disabled_tint_color(),
        );
        if let Some(id) = self.hit_id {
            row = row.hit_id(id);
        }
        if let Some(feedback) = &self.feedback {
            row = row.feedback(Rc::clone(feedback));
        }

        for action in alert.actions() {
            let dirty = Rc::clone(&state.dirty);
            state
                .scope
                .subscribe(action.enabled_observable(), move |_| dirty.set(true));
        }

        self.row = Some(row);
        self.alert = Some(alert);
    }

    #[must_use]
    pub fn alert(&self) -> Option<&Alert> {
        self.alert.as_ref()
    }

    fn body_rows(&self) -> u16 {
        let Some(alert) = &self.alert else {
            return 0;
        };
        let mut rows = 1; // top padding
        if alert.title_text().is_some() {
            rows += 1;
        }
        if alert.message_text().is_some() {
            rows += 1;
        }
        if let Some(content) = alert.custom_content() {
            rows += 1 + content.height();
        }
        rows + 1 // bottom padding
    }

    /// Rows the dialog needs at its natural size.
    #[must_use]
    pub fn content_height(&self) -> u16 {
        let mut rows = self.body_rows();
        if self
            .alert
            .as_ref()
            .is_some_and(|alert| !alert.actions().is_empty())
        {
            rows += 2; // rule + action row
        }
        rows
    }

    /// Forward an event to the action row at its last rendered area.
    ///
    /// Returns the enabled-only index of a completed tap.
    pub fn handle_event(&self, event: &Event, state: &mut AlertViewState) -> Option<usize> {
        let row = self.row.as_ref()?;
        let area = state.actions_area?;
        row.handle_event(event, &mut state.row, area)
    }

    fn draw_centered_text(&self, frame: &mut Frame, area: Rect, y: u16, text: &Text) {
        let width = text.width().min(area.width);
        let mut x = area.x + (area.width - width) / 2;
        for (content, style) in text.segments() {
            x = draw_text_span(frame, x, y, content, style, area.right());
        }
    }
}

impl std::fmt::Debug for AlertView {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertView")
            .field("alert", &self.alert)
            .field("hit_id", &self.hit_id)
            .finish()
    }
}

impl StatefulWidget for AlertView {
    type State = AlertViewState;

    fn render(&self, area: Rect, frame: &mut Frame, state: &mut Self::State) {
        let Some(alert) = &self.alert else {
            return;
        };
        if area.is_empty() {
            return;
        }

        let mut panel = Cell::default();
        panel.bg = PANEL_BG;
        frame.buffer.fill(area, panel);

        let mut y = area.y + 1;
        if let Some(title) = alert.title_text() {
            self.draw_centered_text(frame, area, y, title);
            y += 1;
        }
        if let Some(message) = alert.message_text() {
            self.draw_centered_text(frame, area, y, message);
            y += 1;
        }
        if let Some(content) = alert.custom_content() {
            y += 1;
            let inner = Rect::new(
                area.x + 1,
                y,
                area.width.saturating_sub(2),
                content.height().min(area.bottom().saturating_sub(y)),
            );
            content.widget().render(inner, frame);
        }

        if alert.actions().is_empty() || area.height < 3 {
            state.actions_area = None;
        } else {
            let rule_y = area.bottom() - 2;
            Rule::horizontal()
                .style(Style::new().fg(RULE_COLOR))
                .render(Rect::new(area.x, rule_y, area.width, 1), frame);

            let actions_area = Rect::new(area.x, rule_y + 1, area.width, 1);
            state.actions_area = Some(actions_area);
            if let Some(row) = &self.row {
                row.render(actions_area, frame, &mut state.row);
            }
        }

        state.dirty.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::alert::model::{Action, ActionStyle};
    use alertkit_core::event::{MouseButton, MouseEvent, MouseEventKind};

    fn sample_alert() -> Alert {
        Alert::new(Some("Title"), Some("Message"))
            .action(Action::new("Cancel", ActionStyle::Default))
            .action(Action::new("OK", ActionStyle::Primary))
    }

    #[test]
    fn bind_observes_each_action() {
        let mut view = AlertView::new();
        let mut state = AlertViewState::new();
        view.bind(sample_alert(), &mut state);
        assert_eq!(state.binding_count(), 2);
        assert!(state.needs_redraw());
    }

    #[test]
    fn rebind_drops_previous_subscriptions() {
        let first = sample_alert();
        let stale = first.actions()[0].clone();

        let mut view = AlertView::new();
        let mut state = AlertViewState::new();
        view.bind(first, &mut state);
        view.bind(Alert::new(Some("Other"), None), &mut state);

        assert_eq!(state.binding_count(), 0);
        assert_eq!(stale.enabled_observable().subscriber_count(), 0);
    }

    #[test]
    fn rebind_leaves_no_visual_trace() {
        let first = Alert::new(Some("Alpha"), Some("Old words"))
            .action(Action::new("Yes", ActionStyle::Default))
            .action(Action::new("No", ActionStyle::Default));
        let second = Alert::new(Some("Beta"), None).action(Action::new("OK", ActionStyle::Primary));

        let mut view = AlertView::new();
        let mut state = AlertViewState::new();
        let area = Rect::new(0, 0, 29, 8);
        let mut frame = Frame::new(29, 8);

        view.bind(first, &mut state);
        view.render(area, &mut frame, &mut state);
        assert!(frame.buffer.row_text(1).contains("Alpha"));

        view.bind(second, &mut state);
        view.render(area, &mut frame, &mut state);

        let screen: String = (0..8).map(|y| frame.buffer.row_text(y)).collect();
        assert!(screen.contains("Beta"));
        assert!(screen.contains("OK"));
        for stale in ["Alpha", "Old words", "Yes", "No"] {
            assert!(!screen.contains(stale), "stale text {stale:?} survived rebind");
        }
    }

    #[test]
    fn enabled_toggle_marks_view_dirty() {
        let alert = sample_alert();
        let action = alert.actions()[0].clone();

        let mut view = AlertView::new();
        let mut state = AlertViewState::new();
        view.bind(alert, &mut state);

        let mut frame = Frame::new(30, 8);
        view.render(Rect::new(0, 0, 30, 8), &mut frame, &mut state);
        assert!(!state.needs_redraw());

        action.set_enabled(false);
        assert!(state.needs_redraw());
    }

    #[test]
    fn content_height_tracks_optional_regions() {
        let mut view = AlertView::new();
        let mut state = AlertViewState::new();

        view.bind(Alert::new(Some("T"), None), &mut state);
        let title_only = view.content_height();

        view.bind(sample_alert(), &mut state);
        let with_all = view.content_height();
        assert!(with_all > title_only);

        view.bind(Alert::new(None, None), &mut state);
        assert!(view.content_height() < title_only);
    }

    #[test]
    fn render_centers_title_and_draws_actions() {
        let mut view = AlertView::new();
        let mut state = AlertViewState::new();
        view.bind(sample_alert(), &mut state);

        let area = Rect::new(0, 0, 29, 7);
        let mut frame = Frame::new(29, 7);
        view.render(area, &mut frame, &mut state);

        let title_row = frame.buffer.row_text(1);
        assert!(title_row.contains("Title"));
        let lead = title_row.len() - title_row.trim_start().len();
        let trail = title_row.len() - title_row.trim_end().len();
        assert!(lead.abs_diff(trail) <= 1);

        let actions_area = state.actions_area().unwrap();
        assert_eq!(actions_area.bottom(), area.bottom());
        assert!(frame.buffer.row_text(actions_area.y).contains("OK"));
    }

    #[test]
    fn no_actions_leaves_actions_area_unset() {
        let mut view = AlertView::new();
        let mut state = AlertViewState::new();
        view.bind(Alert::new(Some("T"), Some("M")), &mut state);

        let mut frame = Frame::new(20, 6);
        view.render(Rect::new(0, 0, 20, 6), &mut frame, &mut state);
        assert_eq!(state.actions_area(), None);
    }

    #[test]
    fn handle_event_taps_through_recorded_area() {
        let mut view = AlertView::new();
        let mut state = AlertViewState::new();
        view.bind(sample_alert(), &mut state);

        let area = Rect::new(0, 0, 29, 7);
        let mut frame = Frame::new(29, 7);
        view.render(area, &mut frame, &mut state);

        let actions = state.actions_area().unwrap();
        // Second segment starts past the first segment plus separator.
        let x = actions.x + actions.width / 2 + 2;
        let down = Event::Mouse(MouseEvent::new(
            MouseEventKind::Down(MouseButton::Left),
            x,
            actions.y,
        ));
        let up = Event::Mouse(MouseEvent::new(
            MouseEventKind::Up(MouseButton::Left),
            x,
            actions.y,
        ));
        assert_eq!(view.handle_event(&down, &mut state), None);
        assert_eq!(view.handle_event(&up, &mut state), Some(1));
    }

    #[test]
    fn events_before_first_render_are_ignored() {
        let mut view = AlertView::new();
        let mut state = AlertViewState::new();
        view.bind(sample_alert(), &mut state);

        let down = Event::Mouse(MouseEvent::new(MouseEventKind::Down(MouseButton::Left), 0, 0));
        assert_eq!(view.handle_event(&down, &mut state), None);
    }
}
