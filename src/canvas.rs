//!
//! Drawing-side collaborators.
//!
//! The widgets compute geometry and emit it through [Canvas]. Font
//! metrics come in through [TextMeasure]. Both live on the backend
//! side; this crate never rasterizes anything itself.
//!

use crate::geom::{PointF, RectF, Size};

/// ARGB color, 8 bits per channel.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color(pub u32);

impl Color {
    pub const WHITE: Color = Color(0xFF_FF_FF_FF);
    pub const BLACK: Color = Color(0xFF_00_00_00);

    /// Opaque color from rgb channels.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self(0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32)
    }

    pub const fn alpha(self) -> u8 {
        (self.0 >> 24) as u8
    }

    /// Scale the alpha channel. `factor` is clamped to 0..=1.
    pub fn with_alpha(self, factor: f32) -> Self {
        let factor = factor.clamp(0.0, 1.0);
        let a = (self.alpha() as f32 * factor + 0.5) as u32;
        Self((self.0 & 0x00FF_FFFF) | a << 24)
    }
}

/// Horizontal alignment for text output.
///
/// Defines what the x of the text origin means: start, center or
/// end of the rendered run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum TextAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Text drawing parameters.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextStyle {
    /// Size in px.
    pub size: f32,
    pub color: Color,
    pub align: TextAlign,
    pub bold: bool,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            size: 16.0,
            color: Color::BLACK,
            align: TextAlign::Left,
            bold: false,
        }
    }
}

impl TextStyle {
    pub fn new(size: f32, color: Color) -> Self {
        Self {
            size,
            color,
            ..Default::default()
        }
    }
}

/// Drawing surface.
///
/// The operation set is exactly what the widgets need: filled
/// primitives, one stroked arc/line pair for outlines, text at a
/// baseline origin, and a save/rotate/restore group for the rotated
/// badge text. Coordinates are window px as f32.
pub trait Canvas {
    fn fill_rect(&mut self, rect: RectF, color: Color);

    /// Rounded rectangle with one radius for all corners.
    fn fill_round_rect(&mut self, rect: RectF, radius: f32, color: Color);

    fn fill_circle(&mut self, center: PointF, radius: f32, color: Color);

    /// Arc inside the `oval` bounds. Angles in degrees, 0 at 3
    /// o'clock, sweeping clockwise. `use_center` closes the wedge
    /// through the oval center instead of the chord.
    fn fill_arc(&mut self, oval: RectF, start: f32, sweep: f32, use_center: bool, color: Color);

    /// Outlined arc inside the `oval` bounds.
    fn stroke_arc(&mut self, oval: RectF, start: f32, sweep: f32, width: f32, color: Color);

    /// Filled polygon. The outline closes back to the first point.
    fn fill_polygon(&mut self, points: &[PointF], color: Color);

    fn line(&mut self, from: PointF, to: PointF, width: f32, color: Color);

    /// Draw text with its baseline at `origin.y` and `origin.x`
    /// interpreted per the style's alignment.
    fn text(&mut self, text: &str, origin: PointF, style: &TextStyle);

    /// Push the current transform.
    fn save(&mut self);

    /// Rotate the canvas around `pivot`. Degrees, clockwise.
    fn rotate(&mut self, degrees: f32, pivot: PointF);

    /// Pop back to the last saved transform.
    fn restore(&mut self);
}

/// Font metrics.
///
/// `text_size` reports the tight bounds of a run at the given px
/// size. `center_to_baseline` is the distance from the visual center
/// of a line down to its baseline, `-(ascent + descent) / 2` in
/// classic font-metrics terms. Adding it to a center y gives the
/// baseline y for vertically centered text.
pub trait TextMeasure {
    fn text_size(&self, text: &str, size: f32) -> Size;

    fn center_to_baseline(&self, size: f32) -> f32;
}
