//! Integer geometry for scroll positions and layout rectangles
//!
//! All scroll math runs in whole pixels. Hosts that lay out in fractional
//! units round before handing rectangles to the engine.

use serde::{Deserialize, Serialize};

// ============================================================================
// Scalar helpers
// ============================================================================

/// Clamp a single axis value into `[min, max]`
///
/// Evaluated as `max(min, min(value, max))`, so when a host reports a custom
/// minimum that exceeds the computed limit the minimum wins. `i32::clamp`
/// would panic in that case.
#[inline]
pub fn clamp_axis(value: i32, min: i32, max: i32) -> i32 {
    value.min(max).max(min)
}

/// Multiply and round half up
#[inline]
pub fn scale(base: i32, multiplier: f32) -> i32 {
    (base as f32 * multiplier + 0.5) as i32
}

/// Divide and round half up
#[inline]
pub fn unscale(base: i32, multiplier: f32) -> i32 {
    (base as f32 / multiplier + 0.5) as i32
}

// ============================================================================
// Axis / Direction
// ============================================================================

/// One of the two scroll axes
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Axis {
    Horizontal,
    Vertical,
}

impl Axis {
    pub fn other(self) -> Axis {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }
}

/// Navigation direction for focus and keyboard scrolling
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Direction {
    Up,
    Down,
    Left,
    Right,
}

impl Direction {
    /// Axis this direction moves along
    pub fn axis(self) -> Axis {
        match self {
            Direction::Up | Direction::Down => Axis::Vertical,
            Direction::Left | Direction::Right => Axis::Horizontal,
        }
    }

    /// True for Up and Left (toward the content origin)
    pub fn is_toward_start(self) -> bool {
        matches!(self, Direction::Up | Direction::Left)
    }

    /// -1 toward the content origin, +1 toward the content end
    pub fn sign(self) -> i32 {
        if self.is_toward_start() {
            -1
        } else {
            1
        }
    }

    pub fn opposite(self) -> Direction {
        match self {
            Direction::Up => Direction::Down,
            Direction::Down => Direction::Up,
            Direction::Left => Direction::Right,
            Direction::Right => Direction::Left,
        }
    }

    /// The direction toward the start or end of `axis`
    pub fn along(axis: Axis, toward_start: bool) -> Direction {
        match (axis, toward_start) {
            (Axis::Vertical, true) => Direction::Up,
            (Axis::Vertical, false) => Direction::Down,
            (Axis::Horizontal, true) => Direction::Left,
            (Axis::Horizontal, false) => Direction::Right,
        }
    }
}

// ============================================================================
// Point / Size / Insets
// ============================================================================

/// 2D integer point
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

/// The committed scroll position of a viewport
pub type ScrollOffset = Point;

impl Point {
    pub const ZERO: Point = Point { x: 0, y: 0 };

    pub const fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component along `axis`
    pub fn get(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.x,
            Axis::Vertical => self.y,
        }
    }

    /// Copy with the component along `axis` replaced
    pub fn with(self, axis: Axis, value: i32) -> Self {
        match axis {
            Axis::Horizontal => Point::new(value, self.y),
            Axis::Vertical => Point::new(self.x, value),
        }
    }

    /// Translate by a delta, saturating at the `i32` range
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Point::new(self.x.saturating_add(dx), self.y.saturating_add(dy))
    }
}

/// 2D integer size
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub const ZERO: Size = Size {
        width: 0,
        height: 0,
    };

    pub const fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }

    /// Length along `axis`
    pub fn extent(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.width,
            Axis::Vertical => self.height,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }
}

/// Padding on each edge of a viewport
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Insets {
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub left: i32,
}

impl Insets {
    pub const ZERO: Insets = Insets {
        top: 0,
        right: 0,
        bottom: 0,
        left: 0,
    };

    pub const fn new(top: i32, right: i32, bottom: i32, left: i32) -> Self {
        Self {
            top,
            right,
            bottom,
            left,
        }
    }

    pub const fn uniform(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Sum of both insets along `axis`
    pub fn along(&self, axis: Axis) -> i32 {
        match axis {
            Axis::Horizontal => self.left + self.right,
            Axis::Vertical => self.top + self.bottom,
        }
    }
}

// ============================================================================
// Rect
// ============================================================================

/// Axis-aligned integer rectangle in content coordinates
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub origin: Point,
    pub size: Size,
}

impl Rect {
    pub const ZERO: Rect = Rect {
        origin: Point::ZERO,
        size: Size::ZERO,
    };

    pub const fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            origin: Point::new(x, y),
            size: Size::new(width, height),
        }
    }

    /// Build from edges
    pub const fn from_ltrb(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self::new(left, top, right - left, bottom - top)
    }

    pub fn left(&self) -> i32 {
        self.origin.x
    }

    pub fn top(&self) -> i32 {
        self.origin.y
    }

    pub fn right(&self) -> i32 {
        self.origin.x + self.size.width
    }

    pub fn bottom(&self) -> i32 {
        self.origin.y + self.size.height
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    /// Leading edge along `axis` (left or top)
    pub fn start(&self, axis: Axis) -> i32 {
        self.origin.get(axis)
    }

    /// Trailing edge along `axis` (right or bottom)
    pub fn end(&self, axis: Axis) -> i32 {
        self.origin.get(axis) + self.size.extent(axis)
    }

    pub fn extent(&self, axis: Axis) -> i32 {
        self.size.extent(axis)
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }

    /// Strict overlap test: rectangles that merely share an edge do not intersect
    pub fn intersects(&self, other: &Rect) -> bool {
        self.left() < other.right()
            && other.left() < self.right()
            && self.top() < other.bottom()
            && other.top() < self.bottom()
    }

    /// True when `other` lies inside `self` (edges may touch)
    pub fn contains_rect(&self, other: &Rect) -> bool {
        self.left() <= other.left()
            && self.top() <= other.top()
            && other.right() <= self.right()
            && other.bottom() <= self.bottom()
    }

    pub fn contains(&self, point: Point) -> bool {
        point.x >= self.left()
            && point.x < self.right()
            && point.y >= self.top()
            && point.y < self.bottom()
    }

    pub fn offset(&self, dx: i32, dy: i32) -> Rect {
        Rect {
            origin: self.origin.offset(dx, dy),
            size: self.size,
        }
    }

    /// Copy spanning `[start, end)` along `axis`, other axis unchanged
    pub fn with_span(&self, axis: Axis, start: i32, end: i32) -> Rect {
        match axis {
            Axis::Horizontal => Rect::from_ltrb(start, self.top(), end, self.bottom()),
            Axis::Vertical => Rect::from_ltrb(self.left(), start, self.right(), end),
        }
    }
}

// ============================================================================
// Viewport / ContentBounds
// ============================================================================

/// The visible window supplied by the host on each layout pass
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub size: Size,
    #[serde(default)]
    pub padding: Insets,
}

impl Viewport {
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            size: Size::new(width, height),
            padding: Insets::ZERO,
        }
    }

    pub fn with_padding(mut self, padding: Insets) -> Self {
        self.padding = padding;
        self
    }

    pub fn width(&self) -> i32 {
        self.size.width
    }

    pub fn height(&self) -> i32 {
        self.size.height
    }

    /// Full extent along `axis`, padding included
    pub fn extent(&self, axis: Axis) -> i32 {
        self.size.extent(axis)
    }

    /// Extent available to content along `axis`
    pub fn inner_extent(&self, axis: Axis) -> i32 {
        (self.size.extent(axis) - self.padding.along(axis)).max(0)
    }

    pub fn is_empty(&self) -> bool {
        self.size.is_empty()
    }
}

/// Legal range of the scroll offset on both axes
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContentBounds {
    pub min: Point,
    pub max: Point,
}

impl ContentBounds {
    pub const ZERO: ContentBounds = ContentBounds {
        min: Point::ZERO,
        max: Point::ZERO,
    };

    pub const fn new(min: Point, max: Point) -> Self {
        Self { min, max }
    }

    /// Clamp an offset into the bounds, axis by axis
    pub fn clamp(&self, offset: Point) -> Point {
        Point::new(
            clamp_axis(offset.x, self.min.x, self.max.x),
            clamp_axis(offset.y, self.min.y, self.max.y),
        )
    }

    pub fn contains(&self, offset: Point) -> bool {
        self.clamp(offset) == offset
    }

    /// `(min, max)` along `axis`
    pub fn range(&self, axis: Axis) -> (i32, i32) {
        (self.min.get(axis), self.max.get(axis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_axis() {
        assert_eq!(clamp_axis(50, 0, 100), 50);
        assert_eq!(clamp_axis(-10, 0, 100), 0);
        assert_eq!(clamp_axis(150, 0, 100), 100);
    }

    #[test]
    fn test_clamp_axis_custom_minimum_wins() {
        // A host-reported minimum above the limit must not be overridden
        assert_eq!(clamp_axis(0, 40, 0), 40);
        assert_eq!(clamp_axis(500, 40, 0), 40);
    }

    #[test]
    fn test_scale_rounds_half_up() {
        assert_eq!(scale(801, 0.5), 401);
        assert_eq!(scale(600, 0.5), 300);
        assert_eq!(unscale(300, 0.5), 600);
    }

    #[test]
    fn test_point_offset_saturates() {
        assert_eq!(Point::new(5, -5).offset(10, 10), Point::new(15, 5));
        assert_eq!(
            Point::new(100, -100).offset(i32::MAX, i32::MIN),
            Point::new(i32::MAX, i32::MIN)
        );
    }

    #[test]
    fn test_rect_edges() {
        let r = Rect::from_ltrb(10, 20, 110, 70);
        assert_eq!(r.width(), 100);
        assert_eq!(r.height(), 50);
        assert_eq!(r.start(Axis::Vertical), 20);
        assert_eq!(r.end(Axis::Horizontal), 110);
    }

    #[test]
    fn test_rect_intersection_is_strict() {
        let a = Rect::new(0, 0, 100, 100);
        let touching = Rect::new(0, 100, 100, 50);
        let overlapping = Rect::new(50, 99, 10, 10);
        assert!(!a.intersects(&touching));
        assert!(a.intersects(&overlapping));
        assert!(a.contains_rect(&Rect::new(0, 0, 100, 100)));
        assert!(!a.contains_rect(&overlapping));
    }

    #[test]
    fn test_viewport_inner_extent() {
        let v = Viewport::new(800, 600).with_padding(Insets::new(10, 5, 20, 5));
        assert_eq!(v.inner_extent(Axis::Horizontal), 790);
        assert_eq!(v.inner_extent(Axis::Vertical), 570);
        assert_eq!(Viewport::new(0, 0).inner_extent(Axis::Vertical), 0);
    }

    #[test]
    fn test_content_bounds_clamp() {
        let bounds = ContentBounds::new(Point::ZERO, Point::new(0, 2400));
        assert_eq!(bounds.clamp(Point::new(-3, 2500)), Point::new(0, 2400));
        assert!(bounds.contains(Point::new(0, 1200)));
        assert!(!bounds.contains(Point::new(1, 0)));
    }

    #[test]
    fn test_direction_helpers() {
        assert_eq!(Direction::Up.axis(), Axis::Vertical);
        assert_eq!(Direction::Right.sign(), 1);
        assert_eq!(Direction::Left.opposite(), Direction::Right);
        assert_eq!(Direction::along(Axis::Horizontal, true), Direction::Left);
    }
}
