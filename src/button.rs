//!
//! Stroke/fill button with selectable rounded ends.
//!
//! Render:
//! ```rust ignore
//! RadiusButton::new("Confirm")
//!     .paint_style(PaintStyle::FILL)
//!     .rounded(RoundedEdges::LEFT | RoundedEdges::RIGHT)
//!     .render(area, &mut canvas, &fonts, &mut state.confirm);
//! ```
//!
//! Event handling:
//! ```rust ignore
//! match state.confirm.handle(&touch, Regular) {
//!     ButtonOutcome::Pressed => {
//!         data.confirmed = true;
//!         Outcome::Changed
//!     }
//!     r => r.into(),
//! }
//! ```
//!

use crate::_private::NonExhaustive;
use crate::button::event::ButtonOutcome;
use crate::canvas::{Canvas, Color, TextAlign, TextMeasure, TextStyle};
use crate::event::{HandleEvent, Regular, TouchEvent};
use crate::geom::{Density, PointF, Rect, RectF};
use bitflags::bitflags;

bitflags! {
    /// How the button body is painted. Fill and stroke combine.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct PaintStyle: u8 {
        /// Outline.
        const STROKE = 0x01;
        /// Filled body.
        const FILL = 0x01 << 1;
    }
}

bitflags! {
    /// Which ends of the button are rounded.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct RoundedEdges: u8 {
        const LEFT = 0x01;
        const RIGHT = 0x01 << 1;
    }
}

/// Button widget.
#[derive(Debug, Clone)]
pub struct RadiusButton {
    text: String,
    paint_style: PaintStyle,
    rounded: RoundedEdges,
    density: Density,
    style: RadiusButtonStyle,
}

/// Composite style. Lengths in dp, converted with the widget's
/// density at render time.
#[derive(Debug, Clone)]
pub struct RadiusButtonStyle {
    /// Color while enabled.
    pub theme: Color,
    /// Color while disabled.
    pub disabled: Color,
    /// Text size in dp.
    pub text_size: i32,
    /// Stroke width, also the outline inset from the area edge.
    pub stroke_width: i32,
    /// Preferred height in dp.
    pub height: i32,
    /// Alpha factor while the button is held down.
    pub armed_alpha: f32,

    pub non_exhaustive: NonExhaustive,
}

/// State & event-handling.
#[derive(Debug, Clone)]
pub struct RadiusButtonState {
    /// Complete area
    /// __readonly__. renewed for each render.
    pub area: Rect,
    /// Button accepts input?
    /// __read+write__
    pub enabled: bool,
    /// Button has been touched but not released yet.
    /// __used for touch interaction__
    pub armed: bool,

    pub non_exhaustive: NonExhaustive,
}

impl Default for RadiusButtonStyle {
    fn default() -> Self {
        Self {
            theme: Color(0xFF_FF_40_81),
            disabled: Color(0xFF_BD_BD_BD),
            text_size: 16,
            stroke_width: 1,
            height: 50,
            armed_alpha: 0.6,
            non_exhaustive: NonExhaustive,
        }
    }
}

impl Default for RadiusButton {
    fn default() -> Self {
        Self {
            text: Default::default(),
            paint_style: PaintStyle::FILL,
            rounded: RoundedEdges::LEFT | RoundedEdges::RIGHT,
            density: Default::default(),
            style: Default::default(),
        }
    }
}

impl Default for RadiusButtonState {
    fn default() -> Self {
        Self {
            area: Default::default(),
            enabled: true,
            armed: false,
            non_exhaustive: NonExhaustive,
        }
    }
}

impl RadiusButton {
    pub fn new(text: impl Into<String>) -> Self {
        Self::default().text(text)
    }

    /// Button text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Fill, stroke or both.
    pub fn paint_style(mut self, paint_style: PaintStyle) -> Self {
        self.paint_style = paint_style;
        self
    }

    /// Rounded ends. Default is both.
    pub fn rounded(mut self, rounded: RoundedEdges) -> Self {
        self.rounded = rounded;
        self
    }

    /// Set all styles.
    pub fn styles(mut self, styles: RadiusButtonStyle) -> Self {
        self.style = styles;
        self
    }

    /// Display density for the dp lengths in the style.
    pub fn density(mut self, density: Density) -> Self {
        self.density = density;
        self
    }

    /// Preferred height in px.
    pub fn height(&self) -> i32 {
        self.density.px(self.style.height)
    }

    /// Draw the button into `area`.
    pub fn render(
        &self,
        area: Rect,
        canvas: &mut impl Canvas,
        measure: &impl TextMeasure,
        state: &mut RadiusButtonState,
    ) {
        state.area = area;

        let alpha = if state.armed {
            self.style.armed_alpha
        } else {
            1.0
        };
        let color = if state.enabled {
            self.style.theme
        } else {
            self.style.disabled
        }
        .with_alpha(alpha);

        let left = area.x as f32;
        let top = area.y as f32;
        let right = area.right() as f32;
        let bottom = area.bottom() as f32;
        let radius = (area.height / 2) as f32;
        let pad = self.density.px(self.style.stroke_width) as f32;

        if self.rounded.contains(RoundedEdges::LEFT) {
            let oval = RectF::new(left, top, left + 2.0 * radius, bottom);
            if self.paint_style.contains(PaintStyle::FILL) {
                canvas.fill_arc(oval, 90.0, 180.0, false, color);
            }
            if self.paint_style.contains(PaintStyle::STROKE) {
                let oval = RectF::new(oval.left + pad, oval.top + pad, oval.right, oval.bottom - pad);
                canvas.stroke_arc(oval, 90.0, 180.0, pad, color);
            }
        }

        if self.rounded.contains(RoundedEdges::RIGHT) {
            let oval = RectF::new(right - 2.0 * radius, top, right, bottom);
            if self.paint_style.contains(PaintStyle::FILL) {
                canvas.fill_arc(oval, -90.0, 180.0, false, color);
            }
            if self.paint_style.contains(PaintStyle::STROKE) {
                let oval = RectF::new(oval.left, oval.top + pad, oval.right - pad, oval.bottom - pad);
                canvas.stroke_arc(oval, -90.0, 180.0, pad, color);
            }
        }

        if self.paint_style.contains(PaintStyle::STROKE) {
            let start_x = if self.rounded.contains(RoundedEdges::LEFT) {
                left + radius
            } else {
                left + pad
            };
            let stop_x = if self.rounded.contains(RoundedEdges::RIGHT) {
                right - radius
            } else {
                right - pad
            };

            canvas.line(
                PointF::new(start_x, top + pad),
                PointF::new(stop_x, top + pad),
                pad,
                color,
            );
            canvas.line(
                PointF::new(start_x, bottom - pad),
                PointF::new(stop_x, bottom - pad),
                pad,
                color,
            );

            if !self.rounded.contains(RoundedEdges::LEFT) {
                canvas.line(
                    PointF::new(left + pad, top + pad),
                    PointF::new(left + pad, bottom - pad),
                    pad,
                    color,
                );
            }
            if !self.rounded.contains(RoundedEdges::RIGHT) {
                canvas.line(
                    PointF::new(right - pad, top + pad),
                    PointF::new(right - pad, bottom - pad),
                    pad,
                    color,
                );
            }
        }

        if self.paint_style.contains(PaintStyle::FILL) {
            let body = RectF::new(
                if self.rounded.contains(RoundedEdges::LEFT) {
                    left + radius
                } else {
                    left
                },
                top,
                if self.rounded.contains(RoundedEdges::RIGHT) {
                    right - radius
                } else {
                    right
                },
                bottom,
            );
            canvas.fill_rect(body, color);
        }

        // stroke-only buttons show the theme color, filled ones white
        let text_color = if self.paint_style.contains(PaintStyle::STROKE) {
            self.style.theme
        } else {
            Color::WHITE
        }
        .with_alpha(alpha);

        let text_size = self.density.px(self.style.text_size) as f32;
        let text_style = TextStyle {
            size: text_size,
            color: text_color,
            align: TextAlign::Center,
            bold: false,
        };
        let origin = PointF::new(
            (left + right) / 2.0,
            (top + bottom) / 2.0 + measure.center_to_baseline(text_size),
        );
        canvas.text(&self.text, origin, &text_style);
    }
}

impl RadiusButtonState {
    pub fn new() -> Self {
        Self::default()
    }
}

pub(crate) mod event {
    use crate::event::{ConsumedEvent, Outcome};

    /// Result value for event-handling.
    ///
    /// Adds `Pressed` to the general Outcome.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub enum ButtonOutcome {
        /// The given event was not handled at all.
        Continue,
        /// The event was handled, no repaint necessary.
        Unchanged,
        /// The event was handled, repaint necessary.
        Changed,
        /// Button has been pressed.
        Pressed,
    }

    impl ConsumedEvent for ButtonOutcome {
        fn is_consumed(&self) -> bool {
            *self != ButtonOutcome::Continue
        }
    }

    impl From<ButtonOutcome> for Outcome {
        fn from(value: ButtonOutcome) -> Self {
            match value {
                ButtonOutcome::Continue => Outcome::Continue,
                ButtonOutcome::Unchanged => Outcome::Unchanged,
                ButtonOutcome::Changed => Outcome::Changed,
                ButtonOutcome::Pressed => Outcome::Changed,
            }
        }
    }
}

impl HandleEvent<TouchEvent, Regular, ButtonOutcome> for RadiusButtonState {
    fn handle(&mut self, event: &TouchEvent, _qualifier: Regular) -> ButtonOutcome {
        if !self.enabled {
            return ButtonOutcome::Continue;
        }
        match event {
            TouchEvent::Down(p) => {
                if self.area.contains(*p) {
                    self.armed = true;
                    ButtonOutcome::Changed
                } else {
                    ButtonOutcome::Continue
                }
            }
            TouchEvent::Move(_) => {
                if self.armed {
                    ButtonOutcome::Unchanged
                } else {
                    ButtonOutcome::Continue
                }
            }
            TouchEvent::Up(p) => {
                if self.area.contains(*p) {
                    if self.armed {
                        self.armed = false;
                        ButtonOutcome::Pressed
                    } else {
                        ButtonOutcome::Continue
                    }
                } else {
                    if self.armed {
                        self.armed = false;
                        ButtonOutcome::Changed
                    } else {
                        ButtonOutcome::Continue
                    }
                }
            }
            TouchEvent::Cancel => {
                if self.armed {
                    self.armed = false;
                    ButtonOutcome::Changed
                } else {
                    ButtonOutcome::Continue
                }
            }
        }
    }
}

/// Handle all events.
/// Touch events are processed if they are in range.
pub fn handle_events(state: &mut RadiusButtonState, event: &TouchEvent) -> ButtonOutcome {
    HandleEvent::handle(state, event, Regular)
}
