//! JSON summary

use super::SummaryFormatter;
use anyhow::Result;
use serde::Serialize;
use std::io::Write;
use textprep_core::{BatchReport, DocumentReport, Task};

/// JSON summary: the batch report plus totals
pub struct JsonSummary<W: Write> {
    writer: W,
}

#[derive(Serialize)]
struct SummaryData<'a> {
    task: Task,
    written: usize,
    skipped: usize,
    lines: usize,
    documents: &'a [DocumentReport],
}

impl<W: Write> JsonSummary<W> {
    /// Create a new JSON summary writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl<W: Write> SummaryFormatter for JsonSummary<W> {
    fn write_summary(&mut self, report: &BatchReport) -> Result<()> {
        let data = SummaryData {
            task: report.task,
            written: report.written(),
            skipped: report.skipped(),
            lines: report.total_units(),
            documents: &report.documents,
        };
        serde_json::to_writer_pretty(&mut self.writer, &data)?;
        writeln!(self.writer)?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_json_summary_shape() {
        let mut report = BatchReport::new(Task::Tag);
        report.documents.push(DocumentReport::written(
            PathBuf::from("a.txt"),
            PathBuf::from("a.txt.pos"),
            2,
        ));
        report.documents.push(DocumentReport::skipped(
            PathBuf::from("gone.txt"),
            "missing".to_string(),
        ));

        let mut out = Vec::new();
        JsonSummary::new(&mut out).write_summary(&report).unwrap();
        let value: serde_json::Value = serde_json::from_slice(&out).unwrap();

        assert_eq!(value["task"], "tag");
        assert_eq!(value["written"], 1);
        assert_eq!(value["skipped"], 1);
        assert_eq!(value["lines"], 2);
        assert_eq!(value["documents"][0]["status"], "written");
        assert_eq!(value["documents"][0]["output"], "a.txt.pos");
        assert_eq!(value["documents"][1]["status"], "skipped");
        assert_eq!(value["documents"][1]["reason"], "missing");
        assert!(value["documents"][1].get("output").is_none());
    }
}
