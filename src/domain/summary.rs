//! Cumulative response counts per price bucket.
//!
//! A respondent who finds price p expensive also finds every higher price
//! expensive, so "expensive" answers count at every bucket at or above the
//! answer. Cheap answers count at every bucket at or below it.

use crate::domain::curve::{Curve, CurveKind};
use crate::domain::error::PsmError;
use crate::domain::price_grid::PriceGrid;
use crate::domain::response::SurveyResponse;
use crate::domain::segment::Point;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SummaryRow {
    pub price: i64,
    pub expensive: usize,
    pub cheap: usize,
    pub too_expensive: usize,
    pub too_cheap: usize,
}

impl SummaryRow {
    fn empty(price: i64) -> Self {
        Self {
            price,
            expensive: 0,
            cheap: 0,
            too_expensive: 0,
            too_cheap: 0,
        }
    }

    fn record(mut self, response: &SurveyResponse) -> Self {
        if self.price >= response.expensive {
            self.expensive += 1;
        }
        if self.price <= response.cheap {
            self.cheap += 1;
        }
        if self.price >= response.too_expensive {
            self.too_expensive += 1;
        }
        if self.price <= response.too_cheap {
            self.too_cheap += 1;
        }
        self
    }

    pub fn count(&self, kind: CurveKind) -> usize {
        match kind {
            CurveKind::Expensive => self.expensive,
            CurveKind::Cheap => self.cheap,
            CurveKind::TooExpensive => self.too_expensive,
            CurveKind::TooCheap => self.too_cheap,
        }
    }
}

/// Rows ordered from lowest to highest price.
#[derive(Debug, Clone, PartialEq)]
pub struct SummaryTable {
    pub rows: Vec<SummaryRow>,
    pub sample_count: usize,
}

impl SummaryTable {
    pub fn empty(grid: &PriceGrid) -> Self {
        Self {
            rows: grid.prices().into_iter().map(SummaryRow::empty).collect(),
            sample_count: 0,
        }
    }

    pub fn record(self, response: &SurveyResponse) -> Self {
        Self {
            rows: self.rows.into_iter().map(|row| row.record(response)).collect(),
            sample_count: self.sample_count + 1,
        }
    }

    pub fn from_responses<'a, I>(grid: &PriceGrid, responses: I) -> Self
    where
        I: IntoIterator<Item = &'a SurveyResponse>,
    {
        responses
            .into_iter()
            .fold(Self::empty(grid), |table, response| table.record(response))
    }

    /// Fraction of respondents answering yes at each bucket.
    pub fn curve(&self, kind: CurveKind) -> Result<Curve, PsmError> {
        if self.sample_count == 0 {
            return Err(PsmError::NoResponses);
        }
        let n = self.sample_count as f64;
        let samples = self
            .rows
            .iter()
            .map(|row| Point::new(row.price as f64, row.count(kind) as f64 / n))
            .collect();
        Ok(Curve::new(kind, samples))
    }
}
