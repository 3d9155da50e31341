//! Evenly spaced price buckets.

use crate::domain::error::PsmError;

pub const DEFAULT_LOWEST_PRICE: i64 = 50;
pub const DEFAULT_HIGHEST_PRICE: i64 = 600;
pub const DEFAULT_INCREMENT: i64 = 50;
/// Largest number of prices a grid may hold.
pub const MAX_BUCKETS: u64 = 100_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PriceGrid {
    pub lowest: i64,
    pub highest: i64,
    pub increment: i64,
}

impl Default for PriceGrid {
    fn default() -> Self {
        Self {
            lowest: DEFAULT_LOWEST_PRICE,
            highest: DEFAULT_HIGHEST_PRICE,
            increment: DEFAULT_INCREMENT,
        }
    }
}

impl PriceGrid {
    pub fn new(lowest: i64, highest: i64, increment: i64) -> Result<Self, PsmError> {
        if increment <= 0 {
            return Err(PsmError::ConfigInvalid {
                section: "grid".to_string(),
                key: "increment".to_string(),
                reason: "increment must be positive".to_string(),
            });
        }
        if lowest > highest {
            return Err(PsmError::ConfigInvalid {
                section: "grid".to_string(),
                key: "lowest_price".to_string(),
                reason: "lowest_price must not exceed highest_price".to_string(),
            });
        }
        let count = bucket_count(lowest, highest, increment);
        if count > MAX_BUCKETS as i128 {
            return Err(PsmError::ConfigInvalid {
                section: "grid".to_string(),
                key: "increment".to_string(),
                reason: format!("grid would hold {count} prices, at most {MAX_BUCKETS} allowed"),
            });
        }
        Ok(Self {
            lowest,
            highest,
            increment,
        })
    }

    /// lowest, lowest + increment, ... up to and including highest.
    pub fn prices(&self) -> Vec<i64> {
        (self.lowest..=self.highest)
            .step_by(self.increment.max(1) as usize)
            .collect()
    }

    pub fn len(&self) -> usize {
        if self.increment <= 0 || self.lowest > self.highest {
            return 0;
        }
        let count = bucket_count(self.lowest, self.highest, self.increment);
        usize::try_from(count).unwrap_or(usize::MAX)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// Widened so that i64::MIN..=i64::MAX does not overflow.
fn bucket_count(lowest: i64, highest: i64, increment: i64) -> i128 {
    (highest as i128 - lowest as i128) / increment as i128 + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_grid_spans_50_to_600() {
        let grid = PriceGrid::default();
        let prices = grid.prices();
        assert_eq!(prices.len(), 12);
        assert_eq!(prices.first(), Some(&50));
        assert_eq!(prices.last(), Some(&600));
        assert_eq!(grid.len(), 12);
    }

    #[test]
    fn highest_not_on_step_is_excluded() {
        let grid = PriceGrid::new(100, 340, 100).unwrap();
        assert_eq!(grid.prices(), vec![100, 200, 300]);
        assert_eq!(grid.len(), 3);
    }

    #[test]
    fn single_bucket_grid() {
        let grid = PriceGrid::new(100, 100, 10).unwrap();
        assert_eq!(grid.prices(), vec![100]);
    }

    #[test]
    fn rejects_non_positive_increment() {
        assert!(matches!(
            PriceGrid::new(50, 600, 0),
            Err(PsmError::ConfigInvalid { ref key, .. }) if key == "increment"
        ));
        assert!(PriceGrid::new(50, 600, -5).is_err());
    }

    #[test]
    fn rejects_inverted_range() {
        assert!(matches!(
            PriceGrid::new(600, 50, 50),
            Err(PsmError::ConfigInvalid { ref key, .. }) if key == "lowest_price"
        ));
    }

    #[test]
    fn extreme_bounds_do_not_overflow() {
        let grid = PriceGrid::new(i64::MIN, i64::MAX, i64::MAX).unwrap();
        assert_eq!(grid.len(), 3);
        assert_eq!(grid.prices().len(), 3);
        assert_eq!(grid.prices().first(), Some(&i64::MIN));

        let err = PriceGrid::new(i64::MIN, i64::MAX, 1).unwrap_err();
        assert!(matches!(err, PsmError::ConfigInvalid { ref key, .. } if key == "increment"));
    }

    #[test]
    fn too_many_buckets_is_rejected() {
        let err = PriceGrid::new(0, 1_000_000_000_000, 1).unwrap_err();
        assert!(err.to_string().contains("at most 100000"));

        let widest = PriceGrid::new(0, MAX_BUCKETS as i64 - 1, 1).unwrap();
        assert_eq!(widest.len(), MAX_BUCKETS as usize);
        assert!(PriceGrid::new(0, MAX_BUCKETS as i64, 1).is_err());
    }
}
