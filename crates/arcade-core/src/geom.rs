//! Integer geometry in world pixels

use serde::{Deserialize, Serialize};
use std::fmt;

/// A point on the pixel world or on a game grid
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Offset by a delta
    pub fn offset(self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Axis-aligned rectangle, origin at the top-left corner
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Create a new rectangle
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Self {
        Self {
            x,
            y,
            width,
            height,
        }
    }

    /// Exclusive right edge
    pub fn right(&self) -> i32 {
        self.x + self.width
    }

    /// Exclusive bottom edge
    pub fn bottom(&self) -> i32 {
        self.y + self.height
    }

    pub fn center_x(&self) -> i32 {
        self.x + self.width / 2
    }

    /// A rectangle with no area
    pub fn is_empty(&self) -> bool {
        self.width <= 0 || self.height <= 0
    }

    /// Copy moved by a delta
    pub fn translate(&self, dx: i32, dy: i32) -> Self {
        Self::new(self.x + dx, self.y + dy, self.width, self.height)
    }

    /// Check whether a pixel lies inside
    pub fn contains_point(&self, x: i32, y: i32) -> bool {
        x >= self.x && x < self.right() && y >= self.y && y < self.bottom()
    }

    /// AABB overlap test. Rectangles sharing only an edge do not intersect,
    /// and empty rectangles intersect nothing.
    pub fn intersects(&self, other: &Rect) -> bool {
        if self.is_empty() || other.is_empty() {
            return false;
        }
        self.x < other.right()
            && other.x < self.right()
            && self.y < other.bottom()
            && other.y < self.bottom()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_edges() {
        let r = Rect::new(10, 20, 30, 40);
        assert_eq!(r.right(), 40);
        assert_eq!(r.bottom(), 60);
        assert_eq!(r.center_x(), 25);
        assert_eq!(r.translate(-10, 5), Rect::new(0, 25, 30, 40));
    }

    #[test]
    fn test_intersects_overlap() {
        let a = Rect::new(0, 0, 50, 50);
        let b = Rect::new(40, 40, 20, 20);
        assert!(a.intersects(&b));
        assert!(b.intersects(&a));
    }

    #[test]
    fn test_intersects_contained() {
        let outer = Rect::new(0, 0, 100, 100);
        let inner = Rect::new(10, 10, 5, 5);
        assert!(outer.intersects(&inner));
        assert!(inner.intersects(&outer));
    }

    #[test]
    fn test_touching_edges_do_not_intersect() {
        let a = Rect::new(0, 0, 50, 50);
        assert!(!a.intersects(&Rect::new(50, 0, 10, 10)));
        assert!(!a.intersects(&Rect::new(0, 50, 10, 10)));
        assert!(!a.intersects(&Rect::new(-10, -10, 10, 10)));
    }

    #[test]
    fn test_empty_never_intersects() {
        let a = Rect::new(0, 0, 50, 50);
        assert!(!a.intersects(&Rect::new(10, 10, 0, 10)));
        assert!(!Rect::new(10, 10, 10, -1).intersects(&a));
    }

    #[test]
    fn test_contains_point() {
        let r = Rect::new(0, 0, 25, 25);
        assert!(r.contains_point(0, 0));
        assert!(r.contains_point(24, 24));
        assert!(!r.contains_point(25, 0));
    }

    #[test]
    fn test_point_offset() {
        assert_eq!(Point::new(1, 2).offset(-1, 1), Point::new(0, 3));
        assert_eq!(Point::new(3, 4).to_string(), "(3, 4)");
    }
}
