//! Configuration validation.
//!
//! Validates every config field before an analysis runs. Missing keys fall
//! back to defaults; present keys must parse, and the resulting values must
//! be accepted by [`PriceGrid::new`] and [`Intersector::try_new`].

use crate::domain::error::PsmError;
use crate::domain::intersection::{Intersector, DEFAULT_PARALLEL_TOLERANCE};
use crate::domain::price_grid::{
    PriceGrid, DEFAULT_HIGHEST_PRICE, DEFAULT_INCREMENT, DEFAULT_LOWEST_PRICE,
};
use crate::ports::config_port::ConfigPort;

pub fn validate_grid_config(config: &dyn ConfigPort) -> Result<(), PsmError> {
    let lowest = parse_int(config, "grid", "lowest_price")?;
    let highest = parse_int(config, "grid", "highest_price")?;
    let increment = parse_int(config, "grid", "increment")?;

    PriceGrid::new(
        lowest.unwrap_or(DEFAULT_LOWEST_PRICE),
        highest.unwrap_or(DEFAULT_HIGHEST_PRICE),
        increment.unwrap_or(DEFAULT_INCREMENT),
    )?;
    Ok(())
}

pub fn validate_analysis_config(config: &dyn ConfigPort) -> Result<(), PsmError> {
    let tolerance = parse_double(config, "analysis", "parallel_tolerance")?;
    let floor = parse_double(config, "analysis", "denominator_floor")?;
    Intersector::try_new(
        tolerance.unwrap_or(DEFAULT_PARALLEL_TOLERANCE),
        floor.unwrap_or(0.0),
    )?;
    validate_detect_header(config)?;
    Ok(())
}

fn validate_detect_header(config: &dyn ConfigPort) -> Result<(), PsmError> {
    match config.get_string("input", "detect_header") {
        Some(raw) if !matches!(
            raw.trim().to_lowercase().as_str(),
            "true" | "yes" | "1" | "false" | "no" | "0"
        ) =>
        {
            Err(PsmError::ConfigInvalid {
                section: "input".to_string(),
                key: "detect_header".to_string(),
                reason: "detect_header must be true or false".to_string(),
            })
        }
        _ => Ok(()),
    }
}

fn parse_int(config: &dyn ConfigPort, section: &str, key: &str) -> Result<Option<i64>, PsmError> {
    match config.get_string(section, key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| PsmError::ConfigInvalid {
                section: section.to_string(),
                key: key.to_string(),
                reason: format!("{} must be an integer", key),
            }),
    }
}

fn parse_double(
    config: &dyn ConfigPort,
    section: &str,
    key: &str,
) -> Result<Option<f64>, PsmError> {
    match config.get_string(section, key) {
        None => Ok(None),
        Some(raw) => raw
            .trim()
            .parse()
            .map(Some)
            .map_err(|_| PsmError::ConfigInvalid {
                section: section.to_string(),
                key: key.to_string(),
                reason: format!("{} must be a number", key),
            }),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::file_config_adapter::FileConfigAdapter;

    fn make_config(content: &str) -> FileConfigAdapter {
        FileConfigAdapter::from_string(content).unwrap()
    }

    #[test]
    fn valid_config_passes() {
        let config = make_config(
            r#"
[grid]
lowest_price = 50
highest_price = 600
increment = 50

[analysis]
parallel_tolerance = 0.0001
denominator_floor = 0

[input]
detect_header = true
"#,
        );
        assert!(validate_grid_config(&config).is_ok());
        assert!(validate_analysis_config(&config).is_ok());
    }

    #[test]
    fn empty_config_passes() {
        let config = make_config("");
        assert!(validate_grid_config(&config).is_ok());
        assert!(validate_analysis_config(&config).is_ok());
    }

    #[test]
    fn increment_zero_fails() {
        let config = make_config("[grid]\nincrement = 0\n");
        let err = validate_grid_config(&config).unwrap_err();
        assert!(matches!(err, PsmError::ConfigInvalid { key, .. } if key == "increment"));
    }

    #[test]
    fn non_numeric_price_fails() {
        let config = make_config("[grid]\nlowest_price = cheap\n");
        let err = validate_grid_config(&config).unwrap_err();
        assert!(matches!(err, PsmError::ConfigInvalid { key, .. } if key == "lowest_price"));
    }

    #[test]
    fn inverted_range_fails() {
        let config = make_config("[grid]\nlowest_price = 700\nhighest_price = 600\n");
        let err = validate_grid_config(&config).unwrap_err();
        assert!(matches!(err, PsmError::ConfigInvalid { key, .. } if key == "lowest_price"));
    }

    #[test]
    fn range_checked_against_default_bounds() {
        // Only one bound is set; the other comes from the defaults.
        let config = make_config("[grid]\nlowest_price = 650\n");
        let err = validate_grid_config(&config).unwrap_err();
        assert!(matches!(err, PsmError::ConfigInvalid { key, .. } if key == "lowest_price"));
    }

    #[test]
    fn oversized_grid_fails() {
        let config = make_config("[grid]\nhighest_price = 1000000000000\nincrement = 1\n");
        let err = validate_grid_config(&config).unwrap_err();
        assert!(matches!(err, PsmError::ConfigInvalid { key, .. } if key == "increment"));
    }

    #[test]
    fn negative_floor_fails() {
        let config = make_config("[analysis]\ndenominator_floor = -1\n");
        let err = validate_analysis_config(&config).unwrap_err();
        assert!(
            matches!(err, PsmError::ConfigInvalid { key, .. } if key == "denominator_floor")
        );
    }

    #[test]
    fn negative_tolerance_fails() {
        let config = make_config("[analysis]\nparallel_tolerance = -0.1\n");
        let err = validate_analysis_config(&config).unwrap_err();
        assert!(
            matches!(err, PsmError::ConfigInvalid { key, .. } if key == "parallel_tolerance")
        );
    }

    #[test]
    fn non_numeric_floor_fails() {
        let config = make_config("[analysis]\ndenominator_floor = tiny\n");
        let err = validate_analysis_config(&config).unwrap_err();
        assert!(
            matches!(err, PsmError::ConfigInvalid { key, .. } if key == "denominator_floor")
        );
    }

    #[test]
    fn bad_detect_header_fails() {
        let config = make_config("[input]\ndetect_header = maybe\n");
        let err = validate_analysis_config(&config).unwrap_err();
        assert!(matches!(err, PsmError::ConfigInvalid { key, .. } if key == "detect_header"));
    }
}
