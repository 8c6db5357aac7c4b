//!
//! Pixel geometry shared by all widgets.
//!
//! Placement math runs on signed integer pixels, intermediate
//! positions go negative before clamping. Drawing geometry uses
//! the float types.
//!

/// Position in window coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Width/height pair.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Both dimensions strictly positive?
    pub fn is_positive(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

/// Rectangle in window coordinates.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    pub const fn left(&self) -> i32 {
        self.x
    }

    pub const fn right(&self) -> i32 {
        self.x + self.width
    }

    pub const fn top(&self) -> i32 {
        self.y
    }

    pub const fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Center point. Rounds toward the origin for odd sizes.
    pub const fn center(&self) -> Point {
        Point::new(self.x + self.width / 2, self.y + self.height / 2)
    }

    /// Contains the point? Right/bottom edges are exclusive.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left() && p.x < self.right() && p.y >= self.top() && p.y < self.bottom()
    }
}

/// Position for drawing.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct PointF {
    pub x: f32,
    pub y: f32,
}

impl PointF {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Edge-based rectangle for drawing. Same shape the fill/arc
/// operations of a canvas take.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct RectF {
    pub left: f32,
    pub top: f32,
    pub right: f32,
    pub bottom: f32,
}

impl RectF {
    pub const fn new(left: f32, top: f32, right: f32, bottom: f32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    pub fn width(&self) -> f32 {
        self.right - self.left
    }

    pub fn height(&self) -> f32 {
        self.bottom - self.top
    }

    pub fn center_x(&self) -> f32 {
        (self.left + self.right) / 2.0
    }

    pub fn center_y(&self) -> f32 {
        (self.top + self.bottom) / 2.0
    }
}

/// Padding in pixels.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Padding {
    pub left: i32,
    pub right: i32,
    pub top: i32,
    pub bottom: i32,
}

impl Padding {
    pub const fn new(left: i32, right: i32, top: i32, bottom: i32) -> Self {
        Self {
            left,
            right,
            top,
            bottom,
        }
    }

    /// Same padding left/right and top/bottom.
    pub const fn symmetric(horizontal: i32, vertical: i32) -> Self {
        Self {
            left: horizontal,
            right: horizontal,
            top: vertical,
            bottom: vertical,
        }
    }
}

/// Display density. Converts between density-independent units and
/// pixels with round-half-up, matching the usual platform conversion.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Density(pub f32);

impl Default for Density {
    fn default() -> Self {
        Self(1.0)
    }
}

impl Density {
    /// dp to px.
    pub fn px(&self, dp: i32) -> i32 {
        (dp as f32 * self.0 + 0.5) as i32
    }

    /// px to dp.
    pub fn dp(&self, px: i32) -> i32 {
        (px as f32 / self.0 + 0.5) as i32
    }
}

/// Anchor for tip placement.
///
/// x/y are the anchor's _center_ in window coordinates, width/height
/// its full extent.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct AnchorBounds {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl AnchorBounds {
    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Derive the center-based anchor from a window-relative rect.
    pub const fn from_rect(area: Rect) -> Self {
        Self {
            x: area.x + area.width / 2,
            y: area.y + area.height / 2,
            width: area.width,
            height: area.height,
        }
    }
}

/// Measured tip bubble.
///
/// width/height include the padding; the arrow offset is relative
/// to the padded box.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct ContentBounds {
    pub width: i32,
    pub height: i32,
    pub padding: Padding,
}

impl ContentBounds {
    pub const fn new(width: i32, height: i32, padding: Padding) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Width inside the horizontal padding.
    pub const fn inner_width(&self) -> i32 {
        self.width - self.padding.left - self.padding.right
    }

    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_contains() {
        let r = Rect::new(10, 10, 5, 5);
        assert!(r.contains(Point::new(10, 10)));
        assert!(r.contains(Point::new(14, 14)));
        assert!(!r.contains(Point::new(15, 10)));
        assert!(!r.contains(Point::new(10, 15)));
        assert!(!r.contains(Point::new(9, 10)));
    }

    #[test]
    fn test_density() {
        let d = Density(2.75);
        assert_eq!(d.px(10), 28);
        assert_eq!(d.px(0), 0);
        assert_eq!(Density::default().px(15), 15);
        assert_eq!(d.dp(28), 10);
    }

    #[test]
    fn test_anchor_from_rect() {
        let a = AnchorBounds::from_rect(Rect::new(490, 175, 100, 50));
        assert_eq!(a, AnchorBounds::new(540, 200, 100, 50));
    }

    #[test]
    fn test_inner_width() {
        let c = ContentBounds::new(300, 150, Padding::new(10, 10, 10, 10));
        assert_eq!(c.inner_width(), 280);
    }
}
