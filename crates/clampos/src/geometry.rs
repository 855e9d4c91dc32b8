#![forbid(unsafe_code)]

//! Geometric primitives.
//!
//! All values are viewport-relative and share one unit (pixels in the
//! browser-style use case, cells for a terminal host). Coordinates are `f64`
//! so that results left of or above the viewport origin stay representable.

use serde::{Deserialize, Serialize};

/// A point in viewport coordinates, usually the pointer.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    /// The viewport origin.
    pub const ORIGIN: Self = Self::new(0.0, 0.0);

    /// Create a new point.
    #[inline]
    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<(f64, f64)> for Point {
    fn from((x, y): (f64, f64)) -> Self {
        Self::new(x, y)
    }
}

/// Width and height of a box. Position is irrelevant.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    /// A zero-area size.
    pub const ZERO: Self = Self::new(0.0, 0.0);

    /// Create a new size.
    #[inline]
    pub const fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Whether a box of this size fits inside `outer` on both axes.
    #[inline]
    pub fn fits_within(&self, outer: &Size) -> bool {
        self.width <= outer.width && self.height <= outer.height
    }
}

impl From<(f64, f64)> for Size {
    fn from((width, height): (f64, f64)) -> Self {
        Self::new(width, height)
    }
}

/// A rectangle given by its top-left offset and its size.
///
/// This is the shape a bounding-rectangle query returns for the scope
/// element.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Rect {
    /// Left edge (inclusive).
    pub left: f64,
    /// Top edge (inclusive).
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    /// Create a new rectangle.
    #[inline]
    pub const fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    /// Create a rectangle at the origin with the given size.
    #[inline]
    pub const fn from_size(width: f64, height: f64) -> Self {
        Self::new(0.0, 0.0, width, height)
    }

    /// Right edge (exclusive).
    #[inline]
    pub fn right(&self) -> f64 {
        self.left + self.width
    }

    /// Bottom edge (exclusive).
    #[inline]
    pub fn bottom(&self) -> f64 {
        self.top + self.height
    }

    /// Top-left corner.
    #[inline]
    pub const fn origin(&self) -> Point {
        Point::new(self.left, self.top)
    }

    #[inline]
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }

    /// Check whether a box at `origin` with `size` lies fully inside.
    ///
    /// Edges are inclusive: a box flush with the right edge is contained.
    pub fn contains_box(&self, origin: Point, size: Size) -> bool {
        origin.x >= self.left
            && origin.y >= self.top
            && origin.x + size.width <= self.right()
            && origin.y + size.height <= self.bottom()
    }
}

impl From<Size> for Rect {
    fn from(size: Size) -> Self {
        Self::from_size(size.width, size.height)
    }
}

#[cfg(test)]
mod tests {
    use super::{Point, Rect, Size};

    #[test]
    fn rect_edges() {
        let rect = Rect::new(10.0, 20.0, 30.0, 40.0);
        assert_eq!(rect.right(), 40.0);
        assert_eq!(rect.bottom(), 60.0);
        assert_eq!(rect.origin(), Point::new(10.0, 20.0));
        assert_eq!(rect.size(), Size::new(30.0, 40.0));
    }

    #[test]
    fn contains_box_is_edge_inclusive() {
        let rect = Rect::from_size(100.0, 50.0);
        let size = Size::new(20.0, 10.0);
        assert!(rect.contains_box(Point::new(80.0, 40.0), size));
        assert!(!rect.contains_box(Point::new(80.5, 40.0), size));
        assert!(!rect.contains_box(Point::new(-1.0, 0.0), size));
    }

    #[test]
    fn size_fits_within() {
        let outer = Size::new(1024.0, 768.0);
        assert!(Size::new(1024.0, 768.0).fits_within(&outer));
        assert!(!Size::new(1025.0, 10.0).fits_within(&outer));
        assert!(Size::ZERO.fits_within(&outer));
    }

    #[test]
    fn tuple_conversions() {
        assert_eq!(Point::from((1.5, 2.5)), Point::new(1.5, 2.5));
        assert_eq!(Size::from((3.0, 4.0)), Size::new(3.0, 4.0));
        assert_eq!(Rect::from(Size::new(3.0, 4.0)), Rect::new(0.0, 0.0, 3.0, 4.0));
    }

    #[test]
    fn geometry_deserializes_from_json() {
        let rect: Rect =
            serde_json::from_str(r#"{"left":5,"top":6,"width":7,"height":8}"#).unwrap();
        assert_eq!(rect, Rect::new(5.0, 6.0, 7.0, 8.0));
    }
}
