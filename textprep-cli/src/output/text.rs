//! Plain text summary

use super::SummaryFormatter;
use anyhow::Result;
use std::io::{self, Write};
use textprep_core::{BatchReport, DocumentStatus};

/// Human-readable summary, one line per input
pub struct TextSummary<W: Write> {
    writer: W,
}

impl<W: Write> TextSummary<W> {
    /// Create a new text summary writer
    pub fn new(writer: W) -> Self {
        Self { writer }
    }
}

impl TextSummary<io::Stdout> {
    /// Create a summary writer for stdout
    pub fn stdout() -> Self {
        Self::new(io::stdout())
    }
}

impl<W: Write> SummaryFormatter for TextSummary<W> {
    fn write_summary(&mut self, report: &BatchReport) -> Result<()> {
        for document in &report.documents {
            match (&document.status, &document.output) {
                (DocumentStatus::Written, Some(output)) => writeln!(
                    self.writer,
                    "{} -> {} ({} lines)",
                    document.input.display(),
                    output.display(),
                    document.units
                )?,
                (DocumentStatus::Skipped { reason }, _) => writeln!(
                    self.writer,
                    "{} skipped: {}",
                    document.input.display(),
                    reason
                )?,
                (DocumentStatus::Written, None) => {}
            }
        }
        writeln!(
            self.writer,
            "{}: {} written, {} skipped, {} lines",
            report.task.verb(),
            report.written(),
            report.skipped(),
            report.total_units()
        )?;
        self.writer.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use textprep_core::{DocumentReport, Task};

    #[test]
    fn test_text_summary() {
        let mut report = BatchReport::new(Task::Segment);
        report.documents.push(DocumentReport::written(
            PathBuf::from("a.txt"),
            PathBuf::from("a.txt.sen"),
            3,
        ));
        report.documents.push(DocumentReport::skipped(
            PathBuf::from("b.txt"),
            "not found".to_string(),
        ));

        let mut out = Vec::new();
        TextSummary::new(&mut out).write_summary(&report).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert_eq!(
            text,
            "a.txt -> a.txt.sen (3 lines)\nb.txt skipped: not found\nSegmenting: 1 written, 1 skipped, 3 lines\n"
        );
    }
}
