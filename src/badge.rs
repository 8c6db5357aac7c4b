//!
//! Diagonal corner ribbon with rotated text.
//!
//! The ribbon cuts across the top-right corner of a square, text
//! runs along the band at 45 degrees. Classic "new"/"beta" corner
//! marker.
//!

use crate::_private::NonExhaustive;
use crate::canvas::{Canvas, Color, TextAlign, TextMeasure, TextStyle};
use crate::geom::{PointF, Rect, Size};
use log::debug;

/// Corner ribbon widget.
#[derive(Debug, Default, Clone)]
pub struct RibbonBadge {
    text: String,
    style: RibbonBadgeStyle,
}

/// Composite style.
#[derive(Debug, Clone)]
pub struct RibbonBadgeStyle {
    /// Edge length of the square the ribbon lives in, px.
    pub width: i32,
    /// Corner cut-off along the edges, px. The ribbon band runs
    /// between the corner and this distance.
    pub offset: i32,
    /// Text size in px.
    pub text_size: f32,
    /// Band color.
    pub ribbon: Color,
    /// Text color.
    pub text: Color,

    pub non_exhaustive: NonExhaustive,
}

impl Default for RibbonBadgeStyle {
    fn default() -> Self {
        Self {
            width: 300,
            offset: 150,
            text_size: 60.0,
            ribbon: Color(0xFF_FF_BD_00),
            text: Color::BLACK,
            non_exhaustive: NonExhaustive,
        }
    }
}

/// Geometry of one render pass.
///
/// The outline is in window coordinates. The text origin is valid
/// after rotating the canvas by `rotation` around `pivot`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RibbonLayout {
    /// Ribbon outline, closed back to the first point.
    pub outline: [PointF; 4],
    /// Band height across the ribbon.
    pub band: f32,
    /// Rotation pivot, the square center.
    pub pivot: PointF,
    /// Rotation in degrees.
    pub rotation: f32,
    /// Baseline origin of the text in the rotated frame.
    pub text_origin: PointF,
}

impl RibbonBadge {
    pub fn new(text: impl Into<String>) -> Self {
        Self::default().text(text)
    }

    /// Ribbon text.
    pub fn text(mut self, text: impl Into<String>) -> Self {
        self.text = text.into();
        self
    }

    /// Set all styles.
    pub fn styles(mut self, styles: RibbonBadgeStyle) -> Self {
        self.style = styles;
        self
    }

    /// The square the ribbon occupies.
    pub fn measure(&self) -> Size {
        Size::new(self.style.width, self.style.width)
    }

    /// Ribbon geometry with the square's top-left at `area`'s
    /// top-left.
    pub fn layout(&self, area: Rect, measure: &impl TextMeasure) -> RibbonLayout {
        let x = area.x as f32;
        let y = area.y as f32;
        let w = self.style.width as f32;
        let o = self.style.offset as f32;

        let outline = [
            PointF::new(x, y),
            PointF::new(x + w - o, y),
            PointF::new(x + w, y + o),
            PointF::new(x + w, y + w),
        ];

        // band height across the diagonal
        let band = equal_side(w) - equal_side(o);

        let bounds = measure.text_size(&self.text, self.style.text_size);
        let text_padding = (band - bounds.height as f32) / 2.0;
        debug!("ribbon band {} text padding {}", band, text_padding);

        let text_y = y + w / 2.0 - band / 2.0;
        let baseline_y = text_y + measure.center_to_baseline(self.style.text_size);

        RibbonLayout {
            outline,
            band,
            pivot: PointF::new(x + w / 2.0, y + w / 2.0),
            rotation: 45.0,
            text_origin: PointF::new(x + (w - bounds.width as f32) / 2.0, baseline_y),
        }
    }

    /// Draw the ribbon, then the rotated text.
    pub fn render(&self, area: Rect, canvas: &mut impl Canvas, measure: &impl TextMeasure) {
        let layout = self.layout(area, measure);

        canvas.fill_polygon(&layout.outline, self.style.ribbon);

        let text_style = TextStyle {
            size: self.style.text_size,
            color: self.style.text,
            align: TextAlign::Left,
            bold: true,
        };

        canvas.save();
        canvas.rotate(layout.rotation, layout.pivot);
        canvas.text(&self.text, layout.text_origin, &text_style);
        canvas.restore();
    }
}

/// Length of the equal sides of a right isosceles triangle with the
/// given hypotenuse.
fn equal_side(long_side: f32) -> f32 {
    std::f32::consts::SQRT_2 * long_side / 2.0
}
