//! Report output port trait.

use crate::domain::analysis::PsmReport;
use crate::domain::error::PsmError;
use crate::domain::summary::SummaryTable;

/// Port for writing analysis results.
pub trait ReportPort {
    fn write_report(&mut self, report: &PsmReport) -> Result<(), PsmError>;

    fn write_table(&mut self, table: &SummaryTable) -> Result<(), PsmError>;
}
