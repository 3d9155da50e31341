//! CSV survey response adapter.
//!
//! Five columns per row: sample id, expensive, cheap, too expensive, too
//! cheap. A first row whose price columns are all non-numeric is a header.

use crate::domain::error::PsmError;
use crate::domain::response::SurveyResponse;
use crate::ports::response_port::ResponsePort;
use std::fs;
use std::io::Read;
use std::path::PathBuf;
use tracing::debug;

const COLUMNS: usize = 5;
const PRICE_COLUMNS: [&str; 4] = ["expensive", "cheap", "too_expensive", "too_cheap"];

pub struct CsvAdapter {
    path: PathBuf,
    detect_header: bool,
}

impl CsvAdapter {
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            detect_header: true,
        }
    }

    pub fn with_header_detection(mut self, detect_header: bool) -> Self {
        self.detect_header = detect_header;
        self
    }
}

impl ResponsePort for CsvAdapter {
    fn load_responses(&self) -> Result<Vec<SurveyResponse>, PsmError> {
        let file = fs::File::open(&self.path).map_err(|e| PsmError::Input {
            reason: format!("failed to read {}: {}", self.path.display(), e),
        })?;
        parse_responses(file, self.detect_header)
    }
}

pub fn parse_responses<R: Read>(
    reader: R,
    detect_header: bool,
) -> Result<Vec<SurveyResponse>, PsmError> {
    let mut rdr = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .trim(csv::Trim::All)
        .from_reader(reader);

    let mut responses = Vec::new();

    for (i, result) in rdr.records().enumerate() {
        let record = result.map_err(|e| PsmError::Input {
            reason: format!("CSV parse error: {}", e),
        })?;
        let row = record
            .position()
            .map(|p| p.line() as usize)
            .unwrap_or(i + 1);

        if i == 0 && detect_header && is_header(&record) {
            debug!(row, "skipping header row");
            continue;
        }

        if record.len() < COLUMNS {
            return Err(PsmError::InputRow {
                row,
                reason: format!("expected {} columns, found {}", COLUMNS, record.len()),
            });
        }

        let mut prices = [0i64; 4];
        for (column, (slot, name)) in prices.iter_mut().zip(PRICE_COLUMNS).enumerate() {
            let raw = record.get(column + 1).unwrap_or_default();
            if raw.is_empty() {
                return Err(PsmError::InputRow {
                    row,
                    reason: format!("missing {} value", name),
                });
            }
            *slot = raw.parse().map_err(|e| PsmError::InputRow {
                row,
                reason: format!("invalid {} value {:?}: {}", name, raw, e),
            })?;
        }

        let [expensive, cheap, too_expensive, too_cheap] = prices;
        responses.push(SurveyResponse {
            sample_id: record.get(0).unwrap_or_default().to_string(),
            expensive,
            cheap,
            too_expensive,
            too_cheap,
        });
    }

    debug!(count = responses.len(), "parsed survey responses");
    Ok(responses)
}

fn is_header(record: &csv::StringRecord) -> bool {
    record
        .iter()
        .skip(1)
        .take(PRICE_COLUMNS.len())
        .all(|field| field.parse::<i64>().is_err())
}
