#![forbid(unsafe_code)]

//! Alert view model: the alert itself, its text fields, and its actions.

use std::rc::Rc;

use alertkit_reactive::Observable;
use alertkit_render::cell::Rgba;
use alertkit_style::Style;
use unicode_width::UnicodeWidthStr;

use crate::Widget;

/// Default accent color for enabled action titles.
pub const DEFAULT_TINT: Rgba = Rgba::rgb(10, 132, 255);

/// Default color for disabled action titles.
pub const DEFAULT_DISABLED_TINT: Rgba = Rgba::rgba(122, 122, 122, 204);

/// One styled run of text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Span {
    pub content: String,
    pub style: Style,
}

impl Span {
    #[must_use]
    pub fn new(content: impl Into<String>, style: Style) -> Self {
        Self {
            content: content.into(),
            style,
        }
    }
}

/// Title or message text: one uniformly styled string, or a styled span
/// sequence (the attributed-string analogue).
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Text {
    Plain { content: String, style: Style },
    Styled(Vec<Span>),
}

impl Text {
    /// Plain text with an explicit style.
    #[must_use]
    pub fn plain(content: impl Into<String>, style: Style) -> Self {
        Self::Plain {
            content: content.into(),
            style,
        }
    }

    /// Title text in the default title style (bold).
    #[must_use]
    pub fn title(content: impl Into<String>) -> Self {
        Self::plain(content, Style::new().bold())
    }

    /// Message text in the default message style (dim).
    #[must_use]
    pub fn message(content: impl Into<String>) -> Self {
        Self::plain(content, Style::new().dim())
    }

    #[must_use]
    pub fn styled(spans: Vec<Span>) -> Self {
        Self::Styled(spans)
    }

    /// The styled runs making up this text.
    #[must_use]
    pub fn segments(&self) -> Vec<(&str, Style)> {
        match self {
            Self::Plain { content, style } => vec![(content.as_str(), *style)],
            Self::Styled(spans) => spans
                .iter()
                .map(|span| (span.content.as_str(), span.style))
                .collect(),
        }
    }

    /// Display width in cells.
    #[must_use]
    pub fn width(&self) -> u16 {
        self.segments()
            .iter()
            .map(|(content, _)| UnicodeWidthStr::width(*content) as u16)
            .sum()
    }
}

/// How an action's title is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActionStyle {
    /// Regular weight, tint color.
    Default,
    /// Bold weight, tint color.
    Primary,
    /// Caller-provided emphasis and text color.
    Custom(Style, Rgba),
}

impl ActionStyle {
    /// Resolve the title style for the current enabled state.
    ///
    /// Disabled actions always draw in the disabled tint, whatever the
    /// style variant says.
    #[must_use]
    pub(crate) fn text_style(self, enabled: bool, tint: Rgba, disabled_tint: Rgba) -> Style {
        let color = |preferred: Rgba| if enabled { preferred } else { disabled_tint };
        match self {
            Self::Default => Style::new().fg(color(tint)),
            Self::Primary => Style::new().bold().fg(color(tint)),
            Self::Custom(style, text_color) => style.fg(color(text_color)),
        }
    }
}

/// Handler invoked when an action's segment is tapped.
pub type ActionHandler = Rc<dyn Fn()>;

/// A button descriptor within an alert.
///
/// Clones share the enabled flag (reference semantics), so the host can
/// keep a clone and toggle `set_enabled` while the alert is on screen; a
/// bound view observes the flag and updates the segment's appearance.
#[derive(Clone)]
pub struct Action {
    title: String,
    style: ActionStyle,
    enabled: Observable<bool>,
    handler: Option<ActionHandler>,
}

impl Action {
    #[must_use]
    pub fn new(title: impl Into<String>, style: ActionStyle) -> Self {
        Self {
            title: title.into(),
            style,
            enabled: Observable::new(true),
            handler: None,
        }
    }

    /// Set the tap handler.
    #[must_use]
    pub fn handler(mut self, handler: impl Fn() + 'static) -> Self {
        self.handler = Some(Rc::new(handler));
        self
    }

    /// Set the initial enabled state.
    #[must_use]
    pub fn enabled(self, enabled: bool) -> Self {
        self.enabled.set(enabled);
        self
    }

    #[must_use]
    pub fn title(&self) -> &str {
        &self.title
    }

    #[must_use]
    pub fn style(&self) -> ActionStyle {
        self.style
    }

    #[must_use]
    pub fn is_enabled(&self) -> bool {
        self.enabled.get()
    }

    /// Toggle the enabled flag; observers (a bound segment) see the change.
    pub fn set_enabled(&self, enabled: bool) {
        self.enabled.set(enabled);
    }

    /// The shared enabled flag, for observation.
    #[must_use]
    pub fn enabled_observable(&self) -> &Observable<bool> {
        &self.enabled
    }

    /// Invoke the tap handler, if any.
    pub fn invoke(&self) {
        if let Some(handler) = &self.handler {
            handler();
        }
    }
}

impl std::fmt::Debug for Action {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Action")
            .field("title", &self.title)
            .field("style", &self.style)
            .field("enabled", &self.is_enabled())
            .field("has_handler", &self.handler.is_some())
            .finish()
    }
}

/// Embedded custom content: a widget plus the rows it needs.
#[derive(Clone)]
pub struct AlertContent {
    widget: Rc<dyn Widget>,
    height: u16,
}

impl AlertContent {
    #[must_use]
    pub fn new(widget: Rc<dyn Widget>, height: u16) -> Self {
        Self { widget, height }
    }

    #[must_use]
    pub fn widget(&self) -> &Rc<dyn Widget> {
        &self.widget
    }

    #[must_use]
    pub const fn height(&self) -> u16 {
        self.height
    }
}

impl std::fmt::Debug for AlertContent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AlertContent")
            .field("height", &self.height)
            .finish()
    }
}

/// The alert view model.
///
/// Absent optional fields hide their regions when bound. Actions may be
/// appended until the alert is first bound to a view; the action order is
/// the index order reported to tap callbacks (counted over enabled
/// actions only).
#[derive(Debug, Clone, Default)]
pub struct Alert {
    title: Option<Text>,
    message: Option<Text>,
    content: Option<AlertContent>,
    tint: Option<Rgba>,
    disabled_tint: Option<Rgba>,
    actions: Vec<Action>,
}

impl Alert {
    /// An alert from plain title/message strings in the default styles.
    #[must_use]
    pub fn new(title: Option<&str>, message: Option<&str>) -> Self {
        Self::styled(title.map(Text::title), message.map(Text::message))
    }

    /// An alert from pre-styled text values.
    #[must_use]
    pub fn styled(title: Option<Text>, message: Option<Text>) -> Self {
        Self {
            title,
            message,
            ..Self::default()
        }
    }

    /// Embed custom content below the message.
    #[must_use]
    pub fn content(mut self, widget: Rc<dyn Widget>, height: u16) -> Self {
        self.content = Some(AlertContent::new(widget, height));
        self
    }

    /// Accent color for enabled action titles.
    #[must_use]
    pub fn tint(mut self, tint: Rgba) -> Self {
        self.tint = Some(tint);
        self
    }

    /// Color for disabled action titles.
    #[must_use]
    pub fn disabled_tint(mut self, tint: Rgba) -> Self {
        self.disabled_tint = Some(tint);
        self
    }

    /// Append an action (builder form).
    #[must_use]
    pub fn action(mut self, action: Action) -> Self {
        self.actions.push(action);
        self
    }

    /// Append an action.
    pub fn add_action(&mut self, action: Action) {
        self.actions.push(action);
    }

    #[must_use]
    pub fn title_text(&self) -> Option<&Text> {
        self.title.as_ref()
    }

    #[must_use]
    pub fn message_text(&self) -> Option<&Text> {
        self.message.as_ref()
    }

    #[must_use]
    pub fn custom_content(&self) -> Option<&AlertContent> {
        self.content.as_ref()
    }

    #[must_use]
    pub fn tint_color(&self) -> Rgba {
        self.tint.unwrap_or(DEFAULT_TINT)
    }

    #[must_use]
    pub fn disabled_tint_color(&self) -> Rgba {
        self.disabled_tint.unwrap_or(DEFAULT_DISABLED_TINT)
    }

    #[must_use]
    pub fn actions(&self) -> &[Action] {
        &self.actions
    }
}
