//! Geometry primitives shared by the document model and the gesture controller
//!
//! All conversions between document space and view space go through
//! [`scale_round`] and [`scale_divide_round`]. Every conversion starts from the
//! authoritative document value, so repeated zoom changes never compound
//! rounding error.

use serde::{Deserialize, Serialize};

use crate::error::MosaicError;

/// Multiply an integer quantity by a scale factor and round to the nearest integer.
#[inline]
pub fn scale_round(value: impl Into<f64>, factor: f64) -> i32 {
    (value.into() * factor).round() as i32
}

/// Divide an integer quantity by a scale factor and round to the nearest integer.
///
/// Fails with [`MosaicError::DivisionByZero`] when `factor` is zero.
#[inline]
pub fn scale_divide_round(value: impl Into<f64>, factor: f64) -> Result<i32, MosaicError> {
    if factor == 0.0 {
        return Err(MosaicError::DivisionByZero);
    }
    Ok((value.into() / factor).round() as i32)
}

/// Largest document coordinate magnitude a tile edge may take.
///
/// Keeps `x + width` sums well inside `i32` for any pair of in-range values.
pub const COORD_LIMIT: i32 = 1 << 28;

/// Clamp a wide intermediate into `[-COORD_LIMIT, COORD_LIMIT]`
#[inline]
pub fn clamp_coord(value: i64) -> i32 {
    value.clamp(-(COORD_LIMIT as i64), COORD_LIMIT as i64) as i32
}

// ============================================================================
// Points and rectangles
// ============================================================================

/// Integer point, in either document or view space depending on context
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0, y: 0 };

    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned integer rectangle (`x`, `y` is the top-left corner)
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Normalised rectangle spanning two arbitrary corner points
    pub fn from_points(a: Point, b: Point) -> Self {
        Self {
            x: a.x.min(b.x),
            y: a.y.min(b.y),
            width: (a.x - b.x).abs(),
            height: (a.y - b.y).abs(),
        }
    }

    #[inline]
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    #[inline]
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn origin(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Half-open containment: the right and bottom edges are outside
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.x && p.x < self.right() && p.y >= self.y && p.y < self.bottom()
    }

    pub fn intersects(&self, other: &Rect) -> bool {
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }

    /// Smallest rectangle containing both
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        let right = self.right().max(other.right());
        let bottom = self.bottom().max(other.bottom());
        Rect::new(x, y, right - x, bottom - y)
    }

    pub fn translated(&self, dx: i32, dy: i32) -> Rect {
        Rect::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Project into another space by multiplying every component by `factor`.
    ///
    /// Position and size are rounded independently, which keeps the result a
    /// pure function of `(self, factor)`.
    pub fn scaled(&self, factor: f64) -> Rect {
        Rect::new(
            scale_round(self.x, factor),
            scale_round(self.y, factor),
            scale_round(self.width, factor),
            scale_round(self.height, factor),
        )
    }

    /// Position of the given corner
    pub fn corner(&self, corner: Corner) -> Point {
        match corner {
            Corner::TopLeft => Point::new(self.x, self.y),
            Corner::TopRight => Point::new(self.right(), self.y),
            Corner::BottomLeft => Point::new(self.x, self.bottom()),
            Corner::BottomRight => Point::new(self.right(), self.bottom()),
        }
    }
}

/// Union of an iterator of rectangles, or `None` if it is empty
pub fn bounding_box<I: IntoIterator<Item = Rect>>(rects: I) -> Option<Rect> {
    rects.into_iter().reduce(|acc, r| acc.union(&r))
}

// ============================================================================
// Handles and axes
// ============================================================================

/// A resize handle at one of the four corners of a tile
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Corner {
    TopLeft,
    TopRight,
    BottomLeft,
    BottomRight,
}

impl Corner {
    /// Hit-test order used when handles overlap on tiny tiles
    pub const ALL: [Corner; 4] = [
        Corner::TopLeft,
        Corner::TopRight,
        Corner::BottomLeft,
        Corner::BottomRight,
    ];

    /// The diagonally opposite corner, which stays fixed while resizing
    pub fn opposite(self) -> Corner {
        match self {
            Corner::TopLeft => Corner::BottomRight,
            Corner::TopRight => Corner::BottomLeft,
            Corner::BottomLeft => Corner::TopRight,
            Corner::BottomRight => Corner::TopLeft,
        }
    }

    /// Whether dragging this corner to the right grows the tile
    pub fn grows_right(self) -> bool {
        matches!(self, Corner::TopRight | Corner::BottomRight)
    }

    /// Whether dragging this corner downward grows the tile
    pub fn grows_down(self) -> bool {
        matches!(self, Corner::BottomLeft | Corner::BottomRight)
    }
}

/// Orientation of a single split line
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SplitAxis {
    /// A horizontal line: produces a top and a bottom child
    Horizontal,
    /// A vertical line: produces a left and a right child
    Vertical,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scale_round_rounds_half_away_from_zero() {
        assert_eq!(scale_round(5, 0.5), 3);
        assert_eq!(scale_round(-5, 0.5), -3);
        assert_eq!(scale_round(100, 1.0), 100);
        assert_eq!(scale_round(3, 1.5), 5);
    }

    #[test]
    fn test_scale_divide_round() {
        assert_eq!(scale_divide_round(50, 0.5).unwrap(), 100);
        assert_eq!(scale_divide_round(7, 2.0).unwrap(), 4);
        assert!(matches!(
            scale_divide_round(7, 0.0),
            Err(MosaicError::DivisionByZero)
        ));
    }

    #[test]
    fn test_clamp_coord() {
        assert_eq!(clamp_coord(42), 42);
        assert_eq!(clamp_coord(-42), -42);
        assert_eq!(clamp_coord(i64::from(i32::MAX)), COORD_LIMIT);
        assert_eq!(clamp_coord(i64::MIN), -COORD_LIMIT);
    }

    #[test]
    fn test_rect_union_and_bounding_box() {
        let a = Rect::new(0, 0, 100, 100);
        let b = Rect::new(110, -10, 100, 50);
        assert_eq!(a.union(&b), Rect::new(0, -10, 210, 110));
        assert_eq!(bounding_box([a, b]), Some(Rect::new(0, -10, 210, 110)));
        assert_eq!(bounding_box(std::iter::empty()), None);
    }

    #[test]
    fn test_rect_contains_is_half_open() {
        let r = Rect::new(10, 10, 10, 10);
        assert!(r.contains(Point::new(10, 10)));
        assert!(r.contains(Point::new(19, 19)));
        assert!(!r.contains(Point::new(20, 15)));
        assert!(!r.contains(Point::new(15, 20)));
    }

    #[test]
    fn test_from_points_normalises() {
        let r = Rect::from_points(Point::new(50, 40), Point::new(10, 60));
        assert_eq!(r, Rect::new(10, 40, 40, 20));
    }

    #[test]
    fn test_scaled_is_idempotent() {
        let r = Rect::new(13, 27, 101, 55);
        for scale in [0.1, 0.33, 0.5, 1.0, 1.1, 2.75] {
            assert_eq!(r.scaled(scale), r.scaled(scale));
        }
    }

    #[test]
    fn test_corner_opposites() {
        for corner in Corner::ALL {
            assert_eq!(corner.opposite().opposite(), corner);
            assert_ne!(corner.opposite(), corner);
        }
        let r = Rect::new(0, 0, 10, 20);
        assert_eq!(r.corner(Corner::BottomRight), Point::new(10, 20));
        assert_eq!(r.corner(Corner::TopRight), Point::new(10, 0));
    }
}
