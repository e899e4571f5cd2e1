#![forbid(unsafe_code)]

//! The modal alert dialog: view model, view binding, action row, overlay
//! chrome, presentation transition, and the presenter that ties them
//! together.
//!
//! Typical use:
//!
//! ```ignore
//! let alert = Alert::new(Some("Delete file?"), Some("This cannot be undone."))
//!     .action(Action::new("Cancel", ActionStyle::Default))
//!     .action(Action::new("Delete", ActionStyle::Primary).handler(|| delete()));
//!
//! let mut presenter = AlertPresenter::new(alert)
//!     .on_action(|index| log_tap(index));
//! presenter.present(Instant::now());
//! // each frame: presenter.render(frame.area(), &mut frame, now);
//! // each event: presenter.handle_event(&event, frame.hit_test(x, y), now);
//! ```

mod action_row;
mod model;
mod overlay;
mod presenter;
mod transition;
mod view;

pub use action_row::{
    ACTION_ROW_HIT_SEGMENT, ActionRow, ActionRowState, SelectionFeedback,
};
pub use model::{
    Action, ActionHandler, ActionStyle, Alert, AlertContent, DEFAULT_DISABLED_TINT, DEFAULT_TINT,
    Span, Text,
};
pub use overlay::{OVERLAY_HIT_BACKDROP, OVERLAY_HIT_CONTENT, Overlay, OverlayConfig};
pub use presenter::{AlertEvent, AlertPresenter};
pub use transition::{
    PRESENT_SCALE, TRANSITION_DURATION, TransitionPhase, TransitionState, scaled_rect,
};
pub use view::{AlertView, AlertViewState};
