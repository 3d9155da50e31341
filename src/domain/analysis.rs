//! PSM price metrics from the four cumulative curves.

use crate::domain::crossing::CrossingScanner;
use crate::domain::curve::CurveKind;
use crate::domain::error::PsmError;
use crate::domain::summary::SummaryTable;
use std::fmt;
use tracing::{debug, warn};

/// A metric and the pair of curves whose crossing defines it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PriceMetric {
    /// Point of marginal expensiveness: cheap against too expensive.
    AcceptableHigh,
    /// Optimal price point: too cheap against too expensive.
    Optimal,
    /// Indifference price point: cheap against expensive.
    Indifference,
    /// Point of marginal cheapness: expensive against too cheap.
    AcceptableLow,
}

impl PriceMetric {
    /// Report order, highest price first.
    pub const ALL: [PriceMetric; 4] = [
        PriceMetric::AcceptableHigh,
        PriceMetric::Optimal,
        PriceMetric::Indifference,
        PriceMetric::AcceptableLow,
    ];

    pub fn curves(&self) -> (CurveKind, CurveKind) {
        match self {
            PriceMetric::AcceptableHigh => (CurveKind::Cheap, CurveKind::TooExpensive),
            PriceMetric::Optimal => (CurveKind::TooExpensive, CurveKind::TooCheap),
            PriceMetric::Indifference => (CurveKind::Expensive, CurveKind::Cheap),
            PriceMetric::AcceptableLow => (CurveKind::Expensive, CurveKind::TooCheap),
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            PriceMetric::AcceptableHigh => "acceptable high",
            PriceMetric::Optimal => "optimal price",
            PriceMetric::Indifference => "indifference price",
            PriceMetric::AcceptableLow => "acceptable low",
        }
    }
}

impl fmt::Display for PriceMetric {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PsmReport {
    pub sample_count: usize,
    pub acceptable_high: Option<f64>,
    pub optimal_price: Option<f64>,
    pub indifference_price: Option<f64>,
    pub acceptable_low: Option<f64>,
}

impl PsmReport {
    pub fn get(&self, metric: PriceMetric) -> Option<f64> {
        match metric {
            PriceMetric::AcceptableHigh => self.acceptable_high,
            PriceMetric::Optimal => self.optimal_price,
            PriceMetric::Indifference => self.indifference_price,
            PriceMetric::AcceptableLow => self.acceptable_low,
        }
    }

    /// `(low, high)` when both ends of the acceptable range were found.
    pub fn acceptable_range(&self) -> Option<(f64, f64)> {
        Some((self.acceptable_low?, self.acceptable_high?))
    }
}

pub fn analyze(table: &SummaryTable, scanner: &CrossingScanner) -> Result<PsmReport, PsmError> {
    let mut prices = [None; 4];
    for (slot, metric) in prices.iter_mut().zip(PriceMetric::ALL) {
        let (a, b) = metric.curves();
        let crossing = scanner.find_crossing(&table.curve(a)?, &table.curve(b)?)?;
        match crossing {
            Some(x) => debug!(%metric, price = x, "crossing found"),
            None => warn!(%metric, "{a} and {b} do not cross within the price grid"),
        }
        *slot = crossing;
    }

    let [acceptable_high, optimal_price, indifference_price, acceptable_low] = prices;
    Ok(PsmReport {
        sample_count: table.sample_count,
        acceptable_high,
        optimal_price,
        indifference_price,
        acceptable_low,
    })
}
