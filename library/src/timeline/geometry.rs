//! Minimal pixel-space geometry in logical (scaled) pixels.

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Point {
    pub x: f32,
    pub y: f32,
}

impl Point {
    pub const fn new(x: f32, y: f32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle given by its top-left corner and size.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Rect {
    pub left: f32,
    pub top: f32,
    pub width: f32,
    pub height: f32,
}

impl Rect {
    pub const ZERO: Rect = Rect::new(0.0, 0.0, 0.0, 0.0);

    pub const fn new(left: f32, top: f32, width: f32, height: f32) -> Self {
        Self {
            left,
            top,
            width,
            height,
        }
    }

    pub fn from_min_max(min: Point, max: Point) -> Self {
        Self::new(min.x, min.y, max.x - min.x, max.y - min.y)
    }

    pub fn right(&self) -> f32 {
        self.left + self.width
    }

    pub fn bottom(&self) -> f32 {
        self.top + self.height
    }

    pub fn min(&self) -> Point {
        Point::new(self.left, self.top)
    }

    pub fn max(&self) -> Point {
        Point::new(self.right(), self.bottom())
    }

    /// Left and top edges are inside, right and bottom edges are outside.
    pub fn contains(&self, p: Point) -> bool {
        p.x >= self.left && p.x < self.right() && p.y >= self.top && p.y < self.bottom()
    }

    pub fn is_empty(&self) -> bool {
        self.width <= 0.0 || self.height <= 0.0
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Line {
    pub start: Point,
    pub end: Point,
}

impl Line {
    pub const fn new(start: Point, end: Point) -> Self {
        Self { start, end }
    }

    /// Vertical segment at `x` from `top` to `bottom`.
    pub const fn vertical(x: f32, top: f32, bottom: f32) -> Self {
        Self::new(Point::new(x, top), Point::new(x, bottom))
    }

    pub fn x(&self) -> f32 {
        self.start.x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contains_is_half_open() {
        let r = Rect::new(10.0, 20.0, 100.0, 10.0);
        assert!(r.contains(Point::new(10.0, 20.0)));
        assert!(r.contains(Point::new(109.9, 29.9)));
        assert!(!r.contains(Point::new(110.0, 25.0)));
        assert!(!r.contains(Point::new(50.0, 30.0)));
        assert!(!r.contains(Point::new(9.9, 25.0)));
    }

    #[test]
    fn from_min_max_matches_edges() {
        let r = Rect::from_min_max(Point::new(1.0, 2.0), Point::new(11.0, 7.0));
        assert_eq!(r, Rect::new(1.0, 2.0, 10.0, 5.0));
        assert_eq!(r.max(), Point::new(11.0, 7.0));
    }
}
