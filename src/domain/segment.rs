//! Points and straight curve edges.

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    pub const ORIGIN: Point = Point { x: 0.0, y: 0.0 };

    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn is_finite(&self) -> bool {
        self.x.is_finite() && self.y.is_finite()
    }
}

/// The edge between two consecutive samples of a curve.
///
/// Endpoints carry no ordering; `(x1, y1)` may lie on either side of
/// `(x2, y2)` on both axes.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Segment {
    pub x1: f64,
    pub y1: f64,
    pub x2: f64,
    pub y2: f64,
}

impl Segment {
    pub fn new(x1: f64, y1: f64, x2: f64, y2: f64) -> Self {
        Self { x1, y1, x2, y2 }
    }

    pub fn between(a: Point, b: Point) -> Self {
        Self::new(a.x, a.y, b.x, b.y)
    }

    pub fn start(&self) -> Point {
        Point::new(self.x1, self.y1)
    }

    pub fn end(&self) -> Point {
        Point::new(self.x2, self.y2)
    }

    pub fn midpoint(&self) -> Point {
        Point::new((self.x1 + self.x2) / 2.0, (self.y1 + self.y2) / 2.0)
    }

    /// Axis-aligned bounding box test, closed on every side.
    ///
    /// Only meaningful for a point already known to lie on this segment's line.
    pub fn contains_point(&self, p: Point) -> bool {
        p.x >= self.x1.min(self.x2)
            && p.x <= self.x1.max(self.x2)
            && p.y >= self.y1.min(self.y2)
            && p.y <= self.y1.max(self.y2)
    }

    pub fn is_vertical(&self) -> bool {
        self.x1 == self.x2
    }

    /// (y2 - y1) / (x2 - x1). Non-finite for a vertical segment; check
    /// [`Segment::is_vertical`] first.
    pub fn slope(&self) -> f64 {
        (self.y2 - self.y1) / (self.x2 - self.x1)
    }
}
