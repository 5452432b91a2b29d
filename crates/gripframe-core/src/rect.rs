use std::fmt;

use serde::{Deserialize, Serialize};

/// A point in pixels, either frame-local or global depending on context.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }

    /// Component-wise difference `self - origin`, saturating at the
    /// `i32` range.
    pub fn delta_from(self, origin: Point) -> Point {
        Point::new(self.x.saturating_sub(origin.x), self.y.saturating_sub(origin.y))
    }

    /// Component-wise sum, saturating at the `i32` range.
    pub fn offset(self, delta: Point) -> Point {
        Point::new(self.x.saturating_add(delta.x), self.y.saturating_add(delta.y))
    }
}

/// A frame size in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Size {
    pub width: i32,
    pub height: i32,
}

impl Size {
    pub fn new(width: i32, height: i32) -> Self {
        Self { width, height }
    }
}

/// A rectangle representing a frame's position and size.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
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

    /// Builds a rectangle from a top-left corner and a size.
    pub fn from_parts(position: Point, size: Size) -> Self {
        Self::new(position.x, position.y, size.width, size.height)
    }

    pub fn position(&self) -> Point {
        Point::new(self.x, self.y)
    }

    pub fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}

impl fmt::Display for Point {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

impl fmt::Display for Size {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {}", self.position(), self.size())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn delta_and_offset_are_inverse() {
        let origin = Point::new(100, 40);
        let now = Point::new(120, 30);

        let delta = now.delta_from(origin);

        assert_eq!(delta, Point::new(20, -10));
        assert_eq!(origin.offset(delta), now);
    }

    #[test]
    fn far_apart_points_saturate_instead_of_overflowing() {
        let press = Point::new(-2_000_000_000, 0);
        let now = Point::new(2_000_000_000, 0);

        let delta = now.delta_from(press);

        assert_eq!(delta, Point::new(i32::MAX, 0));
        assert_eq!(now.offset(delta), Point::new(i32::MAX, 0));
        assert_eq!(press.delta_from(now), Point::new(i32::MIN, 0));
    }

    #[test]
    fn rect_splits_into_position_and_size() {
        let rect = Rect::from_parts(Point::new(5, 6), Size::new(70, 80));

        assert_eq!(rect.position(), Point::new(5, 6));
        assert_eq!(rect.size(), Size::new(70, 80));
        assert_eq!(rect.to_string(), "(5, 6) 70x80");
    }
}
