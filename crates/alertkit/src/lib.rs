#![forbid(unsafe_code)]

//! alertkit: modal alert dialogs for terminal UIs.
//!
//! The facade re-exports the subcrates and offers a prelude with the
//! types most applications need:
//!
//! ```ignore
//! use alertkit::prelude::*;
//!
//! let alert = Alert::new(Some("Delete file?"), Some("This cannot be undone."))
//!     .action(Action::new("Cancel", ActionStyle::Default))
//!     .action(Action::new("Delete", ActionStyle::Primary));
//! let mut presenter = AlertPresenter::new(alert);
//! presenter.present(Instant::now());
//! ```

pub use alertkit_core as core;
pub use alertkit_reactive as reactive;
pub use alertkit_render as render;
pub use alertkit_style as style;
pub use alertkit_widgets as widgets;

/// The types most applications need, in one import.
pub mod prelude {
    pub use alertkit_core::event::{
        Event, KeyCode, KeyEvent, Modifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    pub use alertkit_core::geometry::{Point, Rect, Sides, Size};
    pub use alertkit_reactive::{BindingScope, Observable, Subscription};
    pub use alertkit_render::cell::{Cell, Rgba};
    pub use alertkit_render::frame::{Frame, HitData, HitId, HitRegion};
    pub use alertkit_style::{Style, StyleFlags};
    pub use alertkit_widgets::alert::{
        Action, ActionStyle, Alert, AlertEvent, AlertPresenter, AlertView, AlertViewState,
        OverlayConfig, SelectionFeedback, Span, Text, TransitionPhase,
    };
    pub use alertkit_widgets::{Axis, Rule, StatefulWidget, Widget};
    pub use web_time::Instant;
}
