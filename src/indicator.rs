//!
//! Paging indicator: a row of dots with a sliding pill that
//! stretches from the current page to the next while scrolling.
//!
//! The state follows the pager through [PagerDotsState::scrolled]
//! with the page index and scroll fraction the pager reports.
//!

use crate::_private::NonExhaustive;
use crate::canvas::{Canvas, Color};
use crate::geom::{PointF, Rect, RectF, Size};

/// Paging dots widget.
#[derive(Debug, Default, Clone)]
pub struct PagerDots {
    style: PagerDotsStyle,
}

/// Composite style.
#[derive(Debug, Clone)]
pub struct PagerDotsStyle {
    /// Dot radius in px.
    pub radius: i32,
    /// Space between dots in px.
    pub spacing: i32,
    /// Inactive dot color.
    pub dot: Color,
    /// Pill color.
    pub pill: Color,

    pub non_exhaustive: NonExhaustive,
}

impl Default for PagerDotsStyle {
    fn default() -> Self {
        Self {
            radius: 12,
            spacing: 10,
            dot: Color(0xFF_D6_D6_D6),
            pill: Color::WHITE,
            non_exhaustive: NonExhaustive,
        }
    }
}

/// State of the paging indicator.
#[derive(Debug, Clone)]
pub struct PagerDotsState {
    /// Number of pages.
    /// __read+write__
    pub count: usize,
    /// Current page.
    /// __read+write__
    pub index: usize,
    /// Scroll fraction towards the next page, 0..=1.
    /// __read+write__
    pub percent: f32,

    pub non_exhaustive: NonExhaustive,
}

impl Default for PagerDotsState {
    fn default() -> Self {
        Self {
            count: 0,
            index: 0,
            percent: 0.0,
            non_exhaustive: NonExhaustive,
        }
    }
}

impl PagerDotsState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach to a pager: page count and current page.
    pub fn bind(&mut self, count: usize, index: usize) {
        self.count = count;
        self.index = index;
        self.percent = 0.0;
    }

    /// Page-scroll callback. `index` is the left page of the pair
    /// on screen, `percent` the fraction scrolled towards the next.
    pub fn scrolled(&mut self, index: usize, percent: f32) {
        self.index = index;
        self.percent = percent;
    }

    /// Jump to a page without animation.
    pub fn select(&mut self, index: usize) {
        self.index = index;
        self.percent = 0.0;
    }
}

/// The sliding pill: body plus two half-disc caps.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Pill {
    pub body: RectF,
    /// Oval bounds of the left cap, sweep 90..=270.
    pub left_cap: RectF,
    /// Oval bounds of the right cap, sweep -90..=90.
    pub right_cap: RectF,
}

/// Dot and pill geometry for one render pass.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct DotsLayout {
    pub dots: Vec<PointF>,
    pub radius: f32,
    pub pill: Option<Pill>,
}

impl PagerDots {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set all styles.
    pub fn styles(mut self, styles: PagerDotsStyle) -> Self {
        self.style = styles;
        self
    }

    /// Content size of the dot run.
    pub fn measure(&self, state: &PagerDotsState) -> Size {
        if state.count == 0 {
            return Size::default();
        }
        let count = state.count as i32;
        Size::new(
            count * 2 * self.style.radius + (count - 1) * self.style.spacing,
            2 * self.style.radius,
        )
    }

    /// Dot centers and pill geometry at `area`.
    ///
    /// The dot run is centered horizontally in the area and sits at
    /// its top edge.
    pub fn layout(&self, area: Rect, state: &PagerDotsState) -> DotsLayout {
        let radius = self.style.radius;

        if state.count == 0 {
            return DotsLayout {
                radius: radius as f32,
                ..Default::default()
            };
        }

        let run = self.measure(state);
        let start_x = area.x + area.width / 2 - run.width / 2;
        let center_y = (area.y + radius) as f32;

        let center_x = |position: usize| -> f32 {
            (start_x + radius + position as i32 * (2 * radius + self.style.spacing)) as f32
        };
        let safe_position = |position: usize| -> usize { position.min(state.count - 1) };

        let dots = (0..state.count)
            .map(|i| PointF::new(center_x(i), center_y))
            .collect();

        let here = center_x(safe_position(state.index));
        let next = center_x(safe_position(state.index + 1));

        let left = here + left_function(state.percent) * (next - here);
        let right = here + right_function(state.percent) * (next - here);

        let r = radius as f32;
        let top = center_y - r;
        let bottom = center_y + r;

        let pill = Pill {
            body: RectF::new(left, top, right, bottom),
            left_cap: RectF::new(left - r, top, left + r, bottom),
            right_cap: RectF::new(right - r, top, right + r, bottom),
        };

        DotsLayout {
            dots,
            radius: r,
            pill: Some(pill),
        }
    }

    /// Draw dots, then the pill on top.
    pub fn render(&self, area: Rect, canvas: &mut impl Canvas, state: &PagerDotsState) {
        let layout = self.layout(area, state);

        for dot in &layout.dots {
            canvas.fill_circle(*dot, layout.radius, self.style.dot);
        }

        if let Some(pill) = layout.pill {
            canvas.fill_rect(pill.body, self.style.pill);
            canvas.fill_arc(pill.left_cap, 90.0, 180.0, true, self.style.pill);
            canvas.fill_arc(pill.right_cap, -90.0, 180.0, true, self.style.pill);
        }
    }
}

/// Leading pill edge: races ahead in the first 30% of the scroll.
fn right_function(percent: f32) -> f32 {
    (percent / 0.3).min(1.0)
}

/// Trailing pill edge: holds until 70%, then catches up.
fn left_function(percent: f32) -> f32 {
    const FACTOR: f32 = 0.3;
    if percent < 1.0 - FACTOR {
        0.0
    } else {
        (percent - (1.0 - FACTOR)) / FACTOR
    }
}
