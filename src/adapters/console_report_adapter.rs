//! Plain-text report adapter.
//!
//! Metrics are rounded to whole prices, one per line. The summary table is
//! written as CSV.

use crate::domain::analysis::{PriceMetric, PsmReport};
use crate::domain::curve::CurveKind;
use crate::domain::error::PsmError;
use crate::domain::summary::SummaryTable;
use crate::ports::report_port::ReportPort;
use std::io::Write;

pub struct ConsoleReportAdapter<W: Write> {
    out: W,
}

impl<W: Write> ConsoleReportAdapter<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

pub fn format_price(price: Option<f64>) -> String {
    match price {
        Some(p) => format!("{}", p.round() as i64),
        None => "not found".to_string(),
    }
}

impl<W: Write> ReportPort for ConsoleReportAdapter<W> {
    fn write_report(&mut self, report: &PsmReport) -> Result<(), PsmError> {
        for metric in PriceMetric::ALL {
            writeln!(self.out, "{}: {}", metric, format_price(report.get(metric)))?;
        }
        self.out.flush()?;
        Ok(())
    }

    fn write_table(&mut self, table: &SummaryTable) -> Result<(), PsmError> {
        let mut wtr = csv::Writer::from_writer(&mut self.out);
        let to_io = |e: csv::Error| PsmError::Io(std::io::Error::other(e));

        let mut header = vec!["price".to_string()];
        header.extend(CurveKind::ALL.iter().map(|k| k.column_name().to_string()));
        wtr.write_record(&header).map_err(to_io)?;

        let n = table.sample_count.max(1) as f64;
        for row in &table.rows {
            let mut record = vec![row.price.to_string()];
            record.extend(
                CurveKind::ALL
                    .iter()
                    .map(|&k| format!("{:.3}", row.count(k) as f64 / n)),
            );
            wtr.write_record(&record).map_err(to_io)?;
        }
        wtr.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::price_grid::PriceGrid;
    use crate::domain::response::SurveyResponse;

    #[test]
    fn rounds_half_away_from_zero() {
        assert_eq!(format_price(Some(246.846)), "247");
        assert_eq!(format_price(Some(212.5)), "213");
        assert_eq!(format_price(Some(212.49)), "212");
        assert_eq!(format_price(None), "not found");
    }

    #[test]
    fn report_lists_metrics_highest_first() {
        let report = PsmReport {
            sample_count: 10,
            acceptable_high: Some(349.6),
            optimal_price: Some(250.0),
            indifference_price: None,
            acceptable_low: Some(150.2),
        };
        let mut adapter = ConsoleReportAdapter::new(Vec::new());
        adapter.write_report(&report).unwrap();
        let text = String::from_utf8(adapter.into_inner()).unwrap();

        assert_eq!(
            text,
            "acceptable high: 350\n\
             optimal price: 250\n\
             indifference price: not found\n\
             acceptable low: 150\n"
        );
    }

    #[test]
    fn table_written_as_csv_fractions() {
        let grid = PriceGrid::new(100, 300, 100).unwrap();
        let responses = vec![
            SurveyResponse::new("1", 200, 100, 300, 100),
            SurveyResponse::new("2", 300, 200, 300, 100),
        ];
        let table = SummaryTable::from_responses(&grid, &responses);

        let mut adapter = ConsoleReportAdapter::new(Vec::new());
        adapter.write_table(&table).unwrap();
        let text = String::from_utf8(adapter.into_inner()).unwrap();
        let lines: Vec<_> = text.lines().collect();

        assert_eq!(lines[0], "price,expensive,cheap,too_expensive,too_cheap");
        assert_eq!(lines[1], "100,0.000,1.000,0.000,1.000");
        assert_eq!(lines[2], "200,0.500,0.500,0.000,0.000");
        assert_eq!(lines[3], "300,1.000,0.000,1.000,0.000");
        assert_eq!(lines.len(), 4);
    }
}
