//!
//! Tip bubble anchored to another widget.
//!
//! Build a session, show it once, dismiss it:
//! ```rust ignore
//! let mut tip = TipBuilder::new()
//!     .with(&screen)
//!     .content("tap here to continue")
//!     .kind(TipKind::Guide)
//!     .build::<MyShell>()?;
//!
//! tip.show(&anchor_area, &mut shell, Placement::AutoVertical);
//! ```
//!
//! Event handling:
//! ```rust ignore
//! match tip.handle(&touch, Popup) {
//!     TipOutcome::Hide => {
//!         tip.dismiss(&mut shell);
//!         Outcome::Changed
//!     }
//!     r => r.into(),
//! }
//! ```
//!
//! The session computes geometry only. Measuring the bubble and
//! putting it on/off screen is the job of a [TipShell] supplied by
//! the backend.
//!

mod placement;
mod registry;

pub use placement::*;
pub use registry::*;

use crate::event::{HandleEvent, Popup, TouchEvent};
use crate::geom::{AnchorBounds, ContentBounds, Density, Padding, Rect, Size};
use crate::tip::event::TipOutcome;
use std::error::Error;
use std::fmt::{Debug, Display, Formatter};

/// Errors building a tip session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TipError {
    /// The builder got no screen-size source.
    NoWindow,
    /// A window source reported a non-positive size.
    InvalidWindow(Size),
}

impl Display for TipError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{:?}", self)
    }
}

impl Error for TipError {}

/// Category of tip bubble.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TipKind {
    /// Guided-tour bubble. Carries a close button and ignores
    /// touches outside the bubble.
    Guide,
    /// Informational bubble. No close button, a touch outside
    /// dismisses it.
    #[default]
    Info,
}

/// Window-size source.
///
/// Implemented for [Size] directly for callers that already know
/// their window extent.
pub trait WindowMetrics {
    fn size(&self) -> Size;
}

impl WindowMetrics for Size {
    fn size(&self) -> Size {
        *self
    }
}

/// Locates the anchor the bubble points at.
pub trait AnchorLocate {
    /// Anchor center and extent in window coordinates.
    fn locate(&self) -> AnchorBounds;
}

impl AnchorLocate for AnchorBounds {
    fn locate(&self) -> AnchorBounds {
        *self
    }
}

impl AnchorLocate for Rect {
    fn locate(&self) -> AnchorBounds {
        AnchorBounds::from_rect(*self)
    }
}

/// Everything the shell needs to build the bubble view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BubbleSpec {
    /// Bubble text, bullet-joined for multi-line content.
    pub text: String,
    /// Text size in the shell's text unit.
    pub text_size: i32,
    /// Padding around the text in px.
    pub padding: Padding,
    /// Show the close button?
    pub close_visible: bool,
    /// Resolved side. Decides which arrow glyph is visible, which
    /// feeds back into the measured size.
    pub placement: Placement,
}

/// Measured bubble, reported by the shell.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TipMetrics {
    /// Bubble box including padding.
    pub content: ContentBounds,
    /// Size of the visible arrow glyph.
    pub arrow: Size,
}

/// Overlay host for tip bubbles.
///
/// The session calls measure before every presentation, then hands
/// the final layout to present and keeps the returned handle until
/// dismissal.
pub trait TipShell {
    /// Opaque handle of one displayed bubble.
    type Handle;

    /// Measure the bubble this spec would produce.
    fn measure(&mut self, spec: &BubbleSpec) -> TipMetrics;

    /// Put the bubble on screen.
    fn present(&mut self, spec: &BubbleSpec, layout: &TipLayout) -> Self::Handle;

    /// Take the bubble off screen again.
    fn dismiss(&mut self, handle: Self::Handle);
}

/// Builder for a [TipView] session.
#[derive(Debug, Default, Clone)]
pub struct TipBuilder {
    content: String,
    kind: TipKind,
    screen: Option<Size>,
    host: Option<Size>,
    density: Density,
    registry: Option<TipRegistry>,
}

impl TipBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Screen size source. Required.
    pub fn with(mut self, screen: &impl WindowMetrics) -> Self {
        self.screen = Some(screen.size());
        self
    }

    /// Hosting window, when the bubble shows inside a dialog window
    /// instead of the full screen. Placement and clamping then work
    /// against this window.
    pub fn on(mut self, host: &impl WindowMetrics) -> Self {
        self.host = Some(host.size());
        self
    }

    /// Bubble text.
    pub fn content(mut self, text: impl Into<String>) -> Self {
        self.content = text.into();
        self
    }

    /// Multi-line bubble text.
    ///
    /// A single line stays plain; more than one line renders as a
    /// bullet list.
    pub fn content_lines<I>(mut self, lines: I) -> Self
    where
        I: IntoIterator,
        I::Item: AsRef<str>,
    {
        let lines: Vec<_> = lines.into_iter().collect();
        self.content = match lines.len() {
            0 => String::new(),
            1 => lines[0].as_ref().to_string(),
            _ => {
                let mut buf = String::new();
                for (i, line) in lines.iter().enumerate() {
                    buf.push_str("● ");
                    buf.push_str(line.as_ref());
                    if i < lines.len() - 1 {
                        buf.push('\n');
                    }
                }
                buf
            }
        };
        self
    }

    /// Bubble category. Decides close button and outside-touch
    /// behaviour. Default is [TipKind::Info].
    pub fn kind(mut self, kind: TipKind) -> Self {
        self.kind = kind;
        self
    }

    /// Display density for the fixed paddings. Default 1.0.
    pub fn density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    /// De-duplication registry. Default is [TipRegistry::shared].
    pub fn registry(mut self, registry: TipRegistry) -> Self {
        self.registry = Some(registry);
        self
    }

    /// Build the session.
    ///
    /// Fails fast when no screen source was set, or when a window
    /// source reported a non-positive size.
    pub fn build<S: TipShell>(self) -> Result<TipView<S>, TipError> {
        let Some(screen) = self.screen else {
            return Err(TipError::NoWindow);
        };
        if !screen.is_positive() {
            return Err(TipError::InvalidWindow(screen));
        }

        let window = self.host.unwrap_or(screen);
        if !window.is_positive() {
            return Err(TipError::InvalidWindow(window));
        }

        // any size difference from the screen means a dialog hosts the tip
        let in_dialog = window != screen;

        let padding_horizontal = if in_dialog {
            self.density.px(15)
        } else {
            self.density.px(10)
        };
        let padding_vertical = self.density.px(5);

        let text_size = if self.kind == TipKind::Guide && in_dialog {
            7
        } else {
            9
        };

        let (close_visible, outside_touch_dismiss) = match self.kind {
            TipKind::Guide => (true, false),
            TipKind::Info => (false, true),
        };

        Ok(TipView {
            content: self.content,
            window,
            padding: Padding::symmetric(padding_horizontal, padding_vertical),
            text_size,
            close_visible,
            outside_touch_dismiss,
            registry: self.registry.unwrap_or_else(TipRegistry::shared),
            lifecycle: TipLifecycle::new(),
            handle: None,
            area: Rect::default(),
        })
    }
}

/// One tip bubble session.
///
/// Shows once and dismisses once: Built -> Shown -> Dismissed. A
/// dismissed session stays dismissed, showing the same content again
/// takes a new builder round.
pub struct TipView<S: TipShell> {
    content: String,
    window: Size,
    padding: Padding,
    text_size: i32,
    close_visible: bool,
    outside_touch_dismiss: bool,
    registry: TipRegistry,
    lifecycle: TipLifecycle,
    handle: Option<S::Handle>,
    area: Rect,
}

impl<S: TipShell> Debug for TipView<S> {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TipView")
            .field("content", &self.content)
            .field("window", &self.window)
            .field("phase", &self.lifecycle.phase())
            .field("area", &self.area)
            .finish()
    }
}

impl<S: TipShell> TipView<S> {
    /// Show the bubble anchored at `anchor`.
    ///
    /// Registers with the de-duplication registry, resolves the
    /// placement, measures via the shell, positions, clamps to the
    /// window and presents.
    ///
    /// Returns false without side effects when an equal-content
    /// bubble is still showing, or when this session already left
    /// its built phase.
    pub fn show(&mut self, anchor: &impl AnchorLocate, shell: &mut S, placement: Placement) -> bool {
        if self.lifecycle.phase() != TipPhase::Built {
            return false;
        }
        if !self.registry.try_register(&self.content, &self.lifecycle) {
            return false;
        }

        let anchor = anchor.locate();
        let placement = placement.resolve(self.window, anchor);

        let spec = BubbleSpec {
            text: self.content.clone(),
            text_size: self.text_size,
            padding: self.padding,
            close_visible: self.close_visible,
            placement,
        };

        let metrics = shell.measure(&spec);
        let raw = layout_tip(placement, metrics.content, metrics.arrow, self.window, anchor);
        let location = clamp_to_window(raw.location, metrics.content.size(), self.window);
        let layout = TipLayout {
            location,
            arrow: raw.arrow,
        };

        self.handle = Some(shell.present(&spec, &layout));
        self.area = Rect::new(
            location.x,
            location.y,
            metrics.content.width,
            metrics.content.height,
        );
        self.lifecycle.set_phase(TipPhase::Shown);
        true
    }

    /// Take the bubble off screen.
    ///
    /// Idempotent. Returns false when the bubble is not showing.
    pub fn dismiss(&mut self, shell: &mut S) -> bool {
        if self.lifecycle.phase() != TipPhase::Shown {
            return false;
        }
        // flip the phase before calling out, dismiss may re-enter
        self.lifecycle.set_phase(TipPhase::Dismissed);
        if let Some(handle) = self.handle.take() {
            shell.dismiss(handle);
        }
        self.registry.unregister(&self.lifecycle);
        self.area = Rect::default();
        true
    }

    /// Currently on screen?
    pub fn is_showing(&self) -> bool {
        self.lifecycle.is_showing()
    }

    /// On-screen bubble area. Empty unless showing.
    pub fn area(&self) -> Rect {
        self.area
    }

    /// The window placement works against.
    pub fn window(&self) -> Size {
        self.window
    }

    /// Bubble text after bullet-joining.
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Shared lifecycle flag of this session.
    pub fn lifecycle(&self) -> TipLifecycle {
        self.lifecycle.clone()
    }
}

pub(crate) mod event {
    use crate::event::{ConsumedEvent, Outcome};

    /// Result of tip event-handling.
    ///
    /// Adds `Hide` to the general Outcome.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
    pub enum TipOutcome {
        /// The given event has not been used at all.
        Continue,
        /// The event has been recognized, but nothing noticeable
        /// has changed.
        Unchanged,
        /// The event has been recognized and there is some change
        /// due to it.
        Changed,
        /// Bubble should be dismissed.
        Hide,
    }

    impl ConsumedEvent for TipOutcome {
        fn is_consumed(&self) -> bool {
            *self != TipOutcome::Continue
        }
    }

    impl From<TipOutcome> for Outcome {
        fn from(value: TipOutcome) -> Self {
            match value {
                TipOutcome::Continue => Outcome::Continue,
                TipOutcome::Unchanged => Outcome::Unchanged,
                TipOutcome::Changed => Outcome::Changed,
                TipOutcome::Hide => Outcome::Changed,
            }
        }
    }
}

/// The session never hides itself. A touch down outside the bubble
/// reports [TipOutcome::Hide] when the tip allows outside-touch
/// dismissal; acting on it is up to the caller.
impl<S: TipShell> HandleEvent<TouchEvent, Popup, TipOutcome> for TipView<S> {
    fn handle(&mut self, event: &TouchEvent, _qualifier: Popup) -> TipOutcome {
        if !self.is_showing() || !self.outside_touch_dismiss {
            return TipOutcome::Continue;
        }
        match event {
            TouchEvent::Down(p) if !self.area.contains(*p) => TipOutcome::Hide,
            _ => TipOutcome::Continue,
        }
    }
}

/// Handle overlay events.
pub fn handle_popup_events<S: TipShell>(tip: &mut TipView<S>, event: &TouchEvent) -> TipOutcome {
    HandleEvent::handle(tip, event, Popup)
}
