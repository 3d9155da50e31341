//! Scan two curves for their first crossing.

use crate::domain::curve::Curve;
use crate::domain::error::PsmError;
use crate::domain::intersection::{Intersection, Intersector};
use tracing::trace;

#[derive(Debug, Clone, Copy, Default)]
pub struct CrossingScanner {
    pub intersector: Intersector,
}

impl CrossingScanner {
    pub fn new(intersector: Intersector) -> Self {
        Self { intersector }
    }

    /// Price of the first crossing, scanning from the cheapest bucket up.
    ///
    /// Both curves must be sampled on the same prices. A shared sample where
    /// both curves hold the same fraction is a crossing at that price; the
    /// solved point of a bucket ending there can land a few ULPs outside
    /// the box. `Ok(None)` when nothing crosses.
    pub fn find_crossing(&self, a: &Curve, b: &Curve) -> Result<Option<f64>, PsmError> {
        check_shared_grid(a, b)?;
        if a.len() < 2 {
            return Ok(None);
        }

        let meets_at = |i: usize| a.samples[i].y == b.samples[i].y;

        for (i, (seg_a, seg_b)) in a.segments().zip(b.segments()).enumerate() {
            if meets_at(i) {
                trace!(sample = i, a = %a.kind, b = %b.kind, "curves meet at sample");
                return Ok(Some(a.samples[i].x));
            }
            let result = self.intersector.find_intersection(&seg_a, &seg_b);
            trace!(bucket = i, a = %a.kind, b = %b.kind, ?result, "segment pair");
            if let Intersection::Inside(p) = result {
                return Ok(Some(p.x));
            }
        }

        let last = a.len() - 1;
        Ok(meets_at(last).then_some(a.samples[last].x))
    }

    /// [`CrossingScanner::find_crossing`] with 0 standing in for "not found".
    pub fn find_crossing_or_zero(&self, a: &Curve, b: &Curve) -> Result<f64, PsmError> {
        Ok(self.find_crossing(a, b)?.unwrap_or(0.0))
    }
}

fn check_shared_grid(a: &Curve, b: &Curve) -> Result<(), PsmError> {
    if a.len() != b.len() {
        return Err(PsmError::GridMismatch {
            reason: format!(
                "{} has {} samples, {} has {}",
                a.kind,
                a.len(),
                b.kind,
                b.len()
            ),
        });
    }
    if let Some((i, (pa, pb))) = a
        .prices()
        .zip(b.prices())
        .enumerate()
        .find(|(_, (pa, pb))| pa != pb)
    {
        return Err(PsmError::GridMismatch {
            reason: format!("sample {i}: {} at {pa}, {} at {pb}", a.kind, b.kind),
        });
    }
    Ok(())
}
