//! Cumulative response curves over the price grid.

use crate::domain::segment::{Point, Segment};
use std::fmt;

/// The four PSM survey questions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CurveKind {
    Expensive,
    Cheap,
    TooExpensive,
    TooCheap,
}

impl CurveKind {
    pub const ALL: [CurveKind; 4] = [
        CurveKind::Expensive,
        CurveKind::Cheap,
        CurveKind::TooExpensive,
        CurveKind::TooCheap,
    ];

    /// Expensive-type curves rise with price, cheap-type curves fall.
    pub fn is_rising(&self) -> bool {
        matches!(self, CurveKind::Expensive | CurveKind::TooExpensive)
    }

    pub fn column_name(&self) -> &'static str {
        match self {
            CurveKind::Expensive => "expensive",
            CurveKind::Cheap => "cheap",
            CurveKind::TooExpensive => "too_expensive",
            CurveKind::TooCheap => "too_cheap",
        }
    }
}

impl fmt::Display for CurveKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.column_name())
    }
}

/// Samples ordered by strictly increasing price.
#[derive(Debug, Clone, PartialEq)]
pub struct Curve {
    pub kind: CurveKind,
    pub samples: Vec<Point>,
}

impl Curve {
    pub fn new(kind: CurveKind, samples: Vec<Point>) -> Self {
        Self { kind, samples }
    }

    pub fn from_pairs(kind: CurveKind, pairs: &[(f64, f64)]) -> Self {
        Self::new(
            kind,
            pairs.iter().map(|&(price, fraction)| Point::new(price, fraction)).collect(),
        )
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn prices(&self) -> impl Iterator<Item = f64> + '_ {
        self.samples.iter().map(|p| p.x)
    }

    /// Segments between each pair of adjacent samples, lowest price first.
    pub fn segments(&self) -> impl Iterator<Item = Segment> + '_ {
        self.samples.windows(2).map(|w| Segment::between(w[0], w[1]))
    }
}
