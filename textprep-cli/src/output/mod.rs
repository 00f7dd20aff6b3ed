//! End-of-run summary output

use anyhow::Result;
use textprep_core::BatchReport;

/// Writes a batch summary
pub trait SummaryFormatter {
    /// Write the summary for `report`
    fn write_summary(&mut self, report: &BatchReport) -> Result<()>;
}

pub mod json;
pub mod text;

pub use json::JsonSummary;
pub use text::TextSummary;

/// Supported summary formats
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum SummaryFormat {
    /// One line per input plus totals
    Text,
    /// The batch report as a JSON object
    Json,
}
