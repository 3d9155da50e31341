//! Intersection of two curve segments.
//!
//! Lines through each segment's endpoints are intersected in closed form
//! (Cramer's rule on the two-point line equations). The point only counts as
//! a crossing when it falls inside both segments' bounding boxes.

use crate::domain::error::PsmError;
use crate::domain::segment::{Point, Segment};

pub const DEFAULT_PARALLEL_TOLERANCE: f64 = 1e-4;

/// Outcome of intersecting two segments.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Intersection {
    /// The lines cross inside both bounding boxes.
    Inside(Point),
    /// The lines cross, but outside at least one bounding box.
    Outside(Point),
    /// Slopes agree within tolerance, or both segments are vertical.
    Parallel,
    /// The determinant vanished or the solved point was not finite.
    IllConditioned,
}

impl Intersection {
    pub fn found(&self) -> bool {
        matches!(self, Intersection::Inside(_))
    }

    /// The solved point, or [`Point::ORIGIN`] for degenerate outcomes. The
    /// origin is a sentinel and is not geometry.
    pub fn point(&self) -> Point {
        match self {
            Intersection::Inside(p) | Intersection::Outside(p) => *p,
            Intersection::Parallel | Intersection::IllConditioned => Point::ORIGIN,
        }
    }

    /// The crossing point when one was found.
    pub fn crossing(&self) -> Option<Point> {
        match self {
            Intersection::Inside(p) => Some(*p),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersector {
    /// Absolute slope difference below which two segments are parallel.
    /// Not scale invariant.
    pub parallel_tolerance: f64,
    /// |D| at or below this is ill-conditioned. Zero rejects only an exact
    /// zero.
    pub denominator_floor: f64,
}

impl Default for Intersector {
    fn default() -> Self {
        Self {
            parallel_tolerance: DEFAULT_PARALLEL_TOLERANCE,
            denominator_floor: 0.0,
        }
    }
}

impl Intersector {
    pub fn new(parallel_tolerance: f64, denominator_floor: f64) -> Self {
        Self {
            parallel_tolerance,
            denominator_floor,
        }
    }

    /// [`Intersector::new`] for values read from config or the command line.
    /// Both must be finite and non-negative.
    pub fn try_new(parallel_tolerance: f64, denominator_floor: f64) -> Result<Self, PsmError> {
        check_non_negative("parallel_tolerance", parallel_tolerance)?;
        check_non_negative("denominator_floor", denominator_floor)?;
        Ok(Self::new(parallel_tolerance, denominator_floor))
    }

    pub fn is_parallel(&self, a: &Segment, b: &Segment) -> bool {
        match (a.is_vertical(), b.is_vertical()) {
            (true, true) => true,
            (true, false) | (false, true) => false,
            (false, false) => (a.slope() - b.slope()).abs() < self.parallel_tolerance,
        }
    }

    pub fn find_intersection(&self, a: &Segment, b: &Segment) -> Intersection {
        if self.is_parallel(a, b) {
            return Intersection::Parallel;
        }

        let denominator = (a.x1 - a.x2) * (b.y1 - b.y2) - (a.y1 - a.y2) * (b.x1 - b.x2);
        if denominator == 0.0 || denominator.abs() <= self.denominator_floor {
            return Intersection::IllConditioned;
        }

        let det_a = a.x1 * a.y2 - a.y1 * a.x2;
        let det_b = b.x1 * b.y2 - b.y1 * b.x2;
        let x = (det_a * (b.x1 - b.x2) - (a.x1 - a.x2) * det_b) / denominator;
        let y = (det_a * (b.y1 - b.y2) - (a.y1 - a.y2) * det_b) / denominator;

        let point = Point::new(x, y);
        if !point.is_finite() {
            return Intersection::IllConditioned;
        }

        if a.contains_point(point) && b.contains_point(point) {
            Intersection::Inside(point)
        } else {
            Intersection::Outside(point)
        }
    }
}

fn check_non_negative(key: &str, value: f64) -> Result<(), PsmError> {
    if !value.is_finite() || value < 0.0 {
        return Err(PsmError::ConfigInvalid {
            section: "analysis".to_string(),
            key: key.to_string(),
            reason: format!("{key} must be non-negative"),
        });
    }
    Ok(())
}
