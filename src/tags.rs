//!
//! A row of rounded tag chips.
//!
//! ```rust ignore
//! TagRow::new()
//!     .tags(["rust", "widgets"])
//!     .render(area, &mut canvas, &fonts);
//! ```
//!

use crate::_private::NonExhaustive;
use crate::canvas::{Canvas, Color, TextAlign, TextMeasure, TextStyle};
use crate::geom::{PointF, Rect, RectF, Size};

/// Tag chip row.
///
/// Chips line up left to right, each sized to its text plus padding.
/// Chips keep their own text height, the row is top aligned.
#[derive(Debug, Default, Clone)]
pub struct TagRow {
    tags: Vec<String>,
    style: TagStyle,
}

/// Composite style.
#[derive(Debug, Clone)]
pub struct TagStyle {
    /// Text size in px.
    pub text_size: f32,
    /// Horizontal padding inside a chip.
    pub padding_horizontal: i32,
    /// Vertical padding inside a chip.
    pub padding_vertical: i32,
    /// Space between chips.
    pub spacing: i32,
    /// Corner radius.
    pub radius: f32,
    /// Chip background.
    pub background: Color,
    /// Text color.
    pub text: Color,

    pub non_exhaustive: NonExhaustive,
}

impl Default for TagStyle {
    fn default() -> Self {
        Self {
            text_size: 60.0,
            padding_horizontal: 25,
            padding_vertical: 15,
            spacing: 40,
            radius: 12.0,
            background: Color(0xFF_FF_40_81),
            text: Color::WHITE,
            non_exhaustive: NonExhaustive,
        }
    }
}

/// One laid-out chip.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TagChip {
    pub text: String,
    pub background: RectF,
    /// Baseline origin for center-aligned text.
    pub text_origin: PointF,
}

/// Chip geometry for one render pass.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct TagRowLayout {
    pub chips: Vec<TagChip>,
}

impl TagRow {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the tag texts.
    pub fn tags<I>(mut self, tags: I) -> Self
    where
        I: IntoIterator,
        I::Item: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Append one tag.
    pub fn tag(mut self, tag: impl Into<String>) -> Self {
        self.tags.push(tag.into());
        self
    }

    /// Set all styles.
    pub fn styles(mut self, styles: TagStyle) -> Self {
        self.style = styles;
        self
    }

    /// Content size of the full row.
    ///
    /// Width sums the chips plus the spacing between them, height is
    /// the first chip's. An empty row is 0x0.
    pub fn measure(&self, measure: &impl TextMeasure) -> Size {
        if self.tags.is_empty() {
            return Size::default();
        }

        let mut width = 0;
        for (i, text) in self.tags.iter().enumerate() {
            let bounds = measure.text_size(text, self.style.text_size);
            width += bounds.width + 2 * self.style.padding_horizontal;
            if i > 0 {
                width += self.style.spacing;
            }
        }

        let first = measure.text_size(&self.tags[0], self.style.text_size);
        let height = first.height + 2 * self.style.padding_vertical;

        Size::new(width, height)
    }

    /// Chip geometry when rendering at `area`'s top-left.
    pub fn layout(&self, area: Rect, measure: &impl TextMeasure) -> TagRowLayout {
        let mut chips = Vec::with_capacity(self.tags.len());

        let mut start = area.x as f32;
        let top = area.y as f32;

        for text in &self.tags {
            let bounds = measure.text_size(text, self.style.text_size);
            let to_baseline = measure.center_to_baseline(self.style.text_size);

            let background = RectF::new(
                start,
                top,
                start + (bounds.width + 2 * self.style.padding_horizontal) as f32,
                top + (bounds.height + 2 * self.style.padding_vertical) as f32,
            );
            let text_origin = PointF::new(
                start + bounds.width as f32 / 2.0 + self.style.padding_horizontal as f32,
                top + bounds.height as f32 / 2.0 + self.style.padding_vertical as f32 + to_baseline,
            );

            start = background.right + self.style.spacing as f32;

            chips.push(TagChip {
                text: text.clone(),
                background,
                text_origin,
            });
        }

        TagRowLayout { chips }
    }

    /// Draw the row.
    pub fn render(&self, area: Rect, canvas: &mut impl Canvas, measure: &impl TextMeasure) {
        let text_style = TextStyle {
            size: self.style.text_size,
            color: self.style.text,
            align: TextAlign::Center,
            bold: false,
        };

        for chip in self.layout(area, measure).chips {
            canvas.fill_round_rect(chip.background, self.style.radius, self.style.background);
            canvas.text(&chip.text, chip.text_origin, &text_style);
        }
    }
}
