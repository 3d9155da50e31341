#![allow(dead_code)]

use psmeter::domain::analysis::PsmReport;
use psmeter::domain::error::PsmError;
pub use psmeter::domain::response::SurveyResponse;
use psmeter::domain::summary::SummaryTable;
use psmeter::ports::report_port::ReportPort;
use psmeter::ports::response_port::ResponsePort;
use std::io::Write;

pub struct MockResponsePort {
    pub responses: Vec<SurveyResponse>,
    pub error: Option<String>,
}

impl MockResponsePort {
    pub fn new() -> Self {
        Self {
            responses: Vec::new(),
            error: None,
        }
    }

    pub fn with_responses(mut self, responses: Vec<SurveyResponse>) -> Self {
        self.responses = responses;
        self
    }

    pub fn with_error(mut self, reason: &str) -> Self {
        self.error = Some(reason.to_string());
        self
    }
}

impl ResponsePort for MockResponsePort {
    fn load_responses(&self) -> Result<Vec<SurveyResponse>, PsmError> {
        if let Some(reason) = &self.error {
            return Err(PsmError::Input {
                reason: reason.clone(),
            });
        }
        Ok(self.responses.clone())
    }
}

#[derive(Default)]
pub struct RecordingReport {
    pub reports: Vec<PsmReport>,
    pub tables: Vec<SummaryTable>,
}

impl ReportPort for RecordingReport {
    fn write_report(&mut self, report: &PsmReport) -> Result<(), PsmError> {
        self.reports.push(report.clone());
        Ok(())
    }

    fn write_table(&mut self, table: &SummaryTable) -> Result<(), PsmError> {
        self.tables.push(table.clone());
        Ok(())
    }
}

/// Twelve respondents on the default 50..600 grid.
///
/// Expected crossings: acceptable high 325, optimal 250, indifference
/// 256.25, acceptable low 212.5.
pub const SURVEY_CSV: &str = "sample number,expensive,cheap,too expensive,too cheap
1,300,200,450,100
2,250,150,400,100
3,350,250,500,150
4,300,200,500,100
5,400,300,550,200
6,250,200,400,150
7,300,250,450,150
8,350,200,500,100
9,200,150,350,50
10,300,200,450,150
11,400,250,600,200
12,300,200,500,150
";

pub fn survey_responses() -> Vec<SurveyResponse> {
    SURVEY_CSV
        .lines()
        .skip(1)
        .map(|line| {
            let f: Vec<&str> = line.split(',').collect();
            SurveyResponse::new(
                f[0],
                f[1].parse().unwrap(),
                f[2].parse().unwrap(),
                f[3].parse().unwrap(),
                f[4].parse().unwrap(),
            )
        })
        .collect()
}

pub fn write_temp(content: &str, suffix: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new().suffix(suffix).tempfile().unwrap();
    file.write_all(content.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}
