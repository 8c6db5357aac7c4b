//!
//! Placement math for the tip bubble.
//!
//! Everything here is pure: measured sizes in, window-relative
//! positions out. The [TipView](crate::tip::TipView) session drives
//! these functions, but they work standalone for callers that host
//! the bubble themselves.
//!

use crate::geom::{AnchorBounds, ContentBounds, Point, Size};
use log::debug;
use std::cmp::min;

/// Placement of the bubble relative to the anchor.
///
/// The auto values pick the side with more room; [Placement::resolve]
/// turns them into one of the four concrete sides.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// Above the anchor, arrow pointing down.
    Top,
    /// Below the anchor, arrow pointing up.
    Bottom,
    /// Left of the anchor, arrow pointing right.
    Left,
    /// Right of the anchor, arrow pointing left.
    Right,
    /// Top or Bottom, whichever has more room.
    #[default]
    AutoVertical,
    /// Left or Right, whichever has more room.
    AutoHorizontal,
}

impl Placement {
    /// Resolve an auto value to a concrete side. Concrete sides
    /// pass through unchanged.
    pub fn resolve(self, window: Size, anchor: AnchorBounds) -> Placement {
        match self {
            Placement::AutoVertical => {
                // less room above than below => bubble goes below
                if anchor.y < window.height - anchor.y {
                    Placement::Bottom
                } else {
                    Placement::Top
                }
            }
            Placement::AutoHorizontal => {
                if anchor.x < window.width - anchor.x {
                    Placement::Right
                } else {
                    Placement::Left
                }
            }
            v => v,
        }
    }

    pub fn is_auto(self) -> bool {
        matches!(self, Placement::AutoVertical | Placement::AutoHorizontal)
    }
}

/// Computed bubble position.
///
/// `location` is the bubble's top-left in window coordinates, before
/// clamping. `arrow` is relative to the bubble's top-left.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct TipLayout {
    pub location: Point,
    pub arrow: Point,
}

/// Position the bubble for the given side.
///
/// `placement` should be resolved; an auto value that ends up here
/// is treated as Bottom.
pub fn layout_tip(
    placement: Placement,
    content: ContentBounds,
    arrow: Size,
    window: Size,
    anchor: AnchorBounds,
) -> TipLayout {
    match placement {
        Placement::Top => layout_top(content, arrow, window, anchor),
        Placement::Left => layout_left(content, anchor),
        Placement::Right => layout_right(content, window, anchor),
        _ => layout_bottom(content, arrow, window, anchor),
    }
}

fn layout_top(
    content: ContentBounds,
    arrow: Size,
    window: Size,
    anchor: AnchorBounds,
) -> TipLayout {
    TipLayout {
        location: Point::new(
            anchor.x - content.width / 2,
            anchor.y - anchor.height / 2 - content.height,
        ),
        arrow: Point::new(vertical_arrow_x(content, arrow, window, anchor), 0),
    }
}

fn layout_bottom(
    content: ContentBounds,
    arrow: Size,
    window: Size,
    anchor: AnchorBounds,
) -> TipLayout {
    TipLayout {
        location: Point::new(anchor.x - content.width / 2, anchor.y + anchor.height / 2),
        arrow: Point::new(vertical_arrow_x(content, arrow, window, anchor), 0),
    }
}

fn layout_left(content: ContentBounds, anchor: AnchorBounds) -> TipLayout {
    let left_space = anchor.x - anchor.width / 2;
    if left_space < content.width {
        debug!("tip bubble overflows the left window edge");
    }
    TipLayout {
        location: Point::new(
            anchor.x - anchor.width / 2 - content.width,
            anchor.y - content.height / 2,
        ),
        arrow: Point::default(),
    }
}

fn layout_right(content: ContentBounds, window: Size, anchor: AnchorBounds) -> TipLayout {
    let right_space = window.width - (anchor.x + anchor.width / 2);
    if right_space < content.width {
        debug!("tip bubble overflows the right window edge");
    }
    TipLayout {
        location: Point::new(anchor.x + anchor.width / 2, anchor.y - content.height / 2),
        arrow: Point::default(),
    }
}

/// Horizontal arrow offset for Top/Bottom placement, relative to the
/// padded content box.
///
/// Keeps the arrow tip over the anchor center when the bubble gets
/// pushed sideways near a window edge, and inside the padded box in
/// any case.
fn vertical_arrow_x(content: ContentBounds, arrow: Size, window: Size, anchor: AnchorBounds) -> i32 {
    let left_space = anchor.x;
    let right_space = window.width - anchor.x;

    let min_space = min(left_space, right_space);
    let half_width = content.width / 2;

    if min_space >= half_width {
        // room on both sides, bubble stays centered on the anchor
        half_width - content.padding.left - arrow.width / 2
    } else if left_space < right_space {
        // bubble pushed right, arrow follows the anchor
        (left_space - content.padding.left - arrow.width / 2).max(0)
    } else {
        // bubble pushed left
        let right_part = right_space - content.padding.right;
        let real_width = content.inner_width();
        (real_width - right_part - arrow.width / 2).min(real_width - arrow.width)
    }
}

/// Clamp the bubble location into the window.
///
/// Per axis: pull back from the far edge first, then floor at the
/// origin. Content larger than the window pins to the origin edge
/// and overflows the far one.
pub fn clamp_to_window(location: Point, content: Size, window: Size) -> Point {
    let mut x = location.x;
    let mut y = location.y;

    if x + content.width > window.width {
        x = window.width - content.width;
    }
    if x < 0 {
        x = 0;
    }

    if y + content.height > window.height {
        y = window.height - content.height;
    }
    if y < 0 {
        y = 0;
    }

    Point::new(x, y)
}
