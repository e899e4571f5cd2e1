#![forbid(unsafe_code)]

//! The presenter owns one alert's lifecycle: binding, the overlay, the
//! presentation transition, and event routing.
//!
//! The host drives it with wall-clock instants: `render` every frame,
//! `handle_event` for every input event together with the hit-test result
//! from the last rendered frame.

use std::rc::Rc;

use alertkit_core::event::{Event, KeyCode, KeyEventKind, MouseButton, MouseEventKind};
use alertkit_core::geometry::Rect;
use alertkit_render::frame::{Frame, HitData, HitId, HitRegion};
use web_time::Instant;

use crate::StatefulWidget;
use crate::alert::action_row::SelectionFeedback;
use crate::alert::model::{Action, Alert};
use crate::alert::overlay::{OVERLAY_HIT_BACKDROP, Overlay, OverlayConfig};
use crate::alert::transition::{TransitionPhase, TransitionState, scaled_rect};
use crate::alert::view::{AlertView, AlertViewState};

/// What the presenter resolved an input event to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlertEvent {
    /// An enabled action was tapped; the index counts enabled actions
    /// only, in declaration order.
    ActionTapped(usize),
    /// The dialog began dismissing without an action (backdrop tap or
    /// escape).
    Dismissed,
}

const DEFAULT_HIT_ID: HitId = HitId::new(0xA1E7);

/// Presents one [`Alert`] modally.
pub struct AlertPresenter {
    alert: Alert,
    view: AlertView,
    state: AlertViewState,
    overlay: Overlay,
    overlay_config: OverlayConfig,
    transition: TransitionState,
    auto_dismiss: bool,
    dismiss_on_background_tap: Option<bool>,
    dismiss_on_escape: bool,
    background_dismiss: bool,
    on_action: Option<Rc<dyn Fn(usize)>>,
    feedback: Option<Rc<dyn SelectionFeedback>>,
    hit_id: HitId,
    presented: bool,
}

impl std::fmt::Debug for AlertPresenter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertPresenter")
            .field("alert", &self.alert)
            .field("phase", &self.transition.phase())
            .field("auto_dismiss", &self.auto_dismiss)
            .finish()
    }
}

impl AlertPresenter {
    #[must_use]
    pub fn new(alert: Alert) -> Self {
        Self {
            alert,
            view: AlertView::new(),
            state: AlertViewState::new(),
            overlay: Overlay::default(),
            overlay_config: OverlayConfig::default(),
            transition: TransitionState::new(),
            auto_dismiss: true,
            dismiss_on_background_tap: None,
            dismiss_on_escape: true,
            background_dismiss: false,
            on_action: None,
            feedback: None,
            hit_id: DEFAULT_HIT_ID,
            presented: false,
        }
    }

    /// Whether a tapped action also dismisses the dialog. Defaults to true.
    #[must_use]
    pub fn auto_dismiss(mut self, auto_dismiss: bool) -> Self {
        self.auto_dismiss = auto_dismiss;
        self
    }

    /// Whether tapping the dimmed backdrop dismisses the dialog.
    ///
    /// Unset, it resolves at present time: true for an alert with no
    /// actions (nothing else could close it), false otherwise.
    #[must_use]
    pub fn dismiss_on_background_tap(mut self, dismiss: bool) -> Self {
        self.dismiss_on_background_tap = Some(dismiss);
        self
    }

    /// Whether the escape key dismisses the dialog. Defaults to true.
    #[must_use]
    pub fn dismiss_on_escape(mut self, dismiss: bool) -> Self {
        self.dismiss_on_escape = dismiss;
        self
    }

    /// Observer invoked with the enabled-only index of every tapped action.
    #[must_use]
    pub fn on_action(mut self, observer: impl Fn(usize) + 'static) -> Self {
        self.on_action = Some(Rc::new(observer));
        self
    }

    /// Selection feedback forwarded to the action row.
    #[must_use]
    pub fn feedback(mut self, feedback: Rc<dyn SelectionFeedback>) -> Self {
        self.feedback = Some(feedback);
        self
    }

    /// Overlay geometry and backdrop appearance.
    #[must_use]
    pub fn overlay_config(mut self, config: OverlayConfig) -> Self {
        self.overlay_config = config;
        self
    }

    /// Hit id this presenter registers its regions under.
    #[must_use]
    pub fn hit_id(mut self, id: HitId) -> Self {
        self.hit_id = id;
        self
    }

    /// Append an action. Ignored once the alert has been presented.
    pub fn add_action(&mut self, action: Action) {
        if self.presented {
            #[cfg(feature = "tracing")]
            tracing::warn!(title = action.title(), "action added after present; ignored");
            let _ = action;
            return;
        }
        self.alert.add_action(action);
    }

    #[must_use]
    pub fn alert(&self) -> &Alert {
        &self.alert
    }

    #[must_use]
    pub fn phase(&self) -> TransitionPhase {
        self.transition.phase()
    }

    /// True from present until the dismiss animation finishes.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.transition.phase() != TransitionPhase::Closed
    }

    /// True when the next frame would differ from the last one.
    #[must_use]
    pub fn needs_redraw(&self) -> bool {
        self.transition.is_animating() || self.state.needs_redraw()
    }

    /// Bind the model and start the present animation.
    pub fn present(&mut self, now: Instant) {
        if self.is_active() {
            return;
        }
        self.background_dismiss = self
            .dismiss_on_background_tap
            .unwrap_or_else(|| self.alert.actions().is_empty());

        let mut view = AlertView::new().hit_id(self.hit_id);
        if let Some(feedback) = &self.feedback {
            view = view.feedback(Rc::clone(feedback));
        }
        view.bind(self.alert.clone(), &mut self.state);
        self.view = view;
        self.overlay = Overlay::new(self.overlay_config.hit_id(self.hit_id));
        self.transition.begin_present(now);
        self.presented = true;

        #[cfg(feature = "tracing")]
        tracing::debug!(
            actions = self.alert.actions().len(),
            background_dismiss = self.background_dismiss,
            "presenting alert"
        );
    }

    /// Start the dismiss animation.
    pub fn dismiss(&mut self, now: Instant) {
        self.transition.begin_dismiss(now);

        #[cfg(feature = "tracing")]
        tracing::debug!("dismissing alert");
    }

    fn enabled_action(&self, rank: usize) -> Option<&Action> {
        self.alert
            .actions()
            .iter()
            .filter(|action| action.is_enabled())
            .nth(rank)
    }

    /// Route one input event.
    ///
    /// `hit` is the hit-test result for the event's position against the
    /// last rendered frame, used to tell backdrop taps from dialog taps.
    /// A dismissing dialog no longer responds to input.
    pub fn handle_event(
        &mut self,
        event: &Event,
        hit: Option<(HitId, HitRegion, HitData)>,
        now: Instant,
    ) -> Option<AlertEvent> {
        if !matches!(
            self.transition.phase(),
            TransitionPhase::Presenting | TransitionPhase::Open
        ) {
            return None;
        }

        match event {
            Event::Key(key)
                if key.code == KeyCode::Escape && key.kind == KeyEventKind::Press =>
            {
                if !self.dismiss_on_escape {
                    return None;
                }
                self.dismiss(now);
                return Some(AlertEvent::Dismissed);
            }
            Event::Mouse(mouse)
                if mouse.kind == MouseEventKind::Down(MouseButton::Left)
                    && matches!(hit, Some((id, region, _)) if id == self.hit_id && region == OVERLAY_HIT_BACKDROP) =>
            {
                if !self.background_dismiss {
                    return None;
                }
                self.dismiss(now);
                return Some(AlertEvent::Dismissed);
            }
            _ => {}
        }

        let rank = self.view.handle_event(event, &mut self.state)?;
        let action = self.enabled_action(rank)?;
        action.invoke();
        if let Some(observer) = &self.on_action {
            observer(rank);
        }
        if self.auto_dismiss {
            self.dismiss(now);
        }
        Some(AlertEvent::ActionTapped(rank))
    }

    /// Draw the backdrop and dialog for this frame and refresh the hit
    /// regions. A closed presenter draws nothing.
    pub fn render(&mut self, area: Rect, frame: &mut Frame, now: Instant) {
        self.transition.tick(now);
        if self.transition.phase() == TransitionPhase::Closed {
            return;
        }

        #[cfg(feature = "tracing")]
        let _span = tracing::debug_span!("alert_render", phase = ?self.transition.phase()).entered();

        let opacity = self.transition.opacity(now);
        self.overlay.render_backdrop(frame, area, opacity);

        let content = self
            .overlay
            .content_rect(area, self.view.content_height());
        let content = scaled_rect(content, self.transition.scale(now)).intersection(area);

        // Segment hits are registered by the view after these, so they win
        // inside the dialog.
        self.overlay.register_hits(frame, area, content);
        self.view.render(content, frame, &mut self.state);
    }
}
