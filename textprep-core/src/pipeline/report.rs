use crate::types::Task;
use serde::Serialize;
use std::path::PathBuf;

/// Outcome for one input
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "lowercase")]
pub enum DocumentStatus {
    /// The artifact was written completely
    Written,
    /// The input could not be read; no artifact was created
    Skipped {
        /// Why the input was skipped
        reason: String,
    },
}

/// What happened to one input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocumentReport {
    /// Input path as processed
    pub input: PathBuf,
    /// Artifact path, absent for skipped inputs
    #[serde(skip_serializing_if = "Option::is_none")]
    pub output: Option<PathBuf>,
    /// Number of lines (sentence units) written
    pub units: usize,
    /// Outcome
    #[serde(flatten)]
    pub status: DocumentStatus,
}

impl DocumentReport {
    /// Report for a fully written artifact
    pub fn written(input: PathBuf, output: PathBuf, units: usize) -> Self {
        Self {
            input,
            output: Some(output),
            units,
            status: DocumentStatus::Written,
        }
    }

    /// Report for an input that could not be read
    pub fn skipped(input: PathBuf, reason: String) -> Self {
        Self {
            input,
            output: None,
            units: 0,
            status: DocumentStatus::Skipped { reason },
        }
    }

    /// Whether an artifact was written
    pub fn is_written(&self) -> bool {
        matches!(self.status, DocumentStatus::Written)
    }
}

/// Outcome of a whole batch, in input order
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BatchReport {
    /// Task that was run
    pub task: Task,
    /// One entry per input
    pub documents: Vec<DocumentReport>,
}

impl BatchReport {
    /// Empty report for `task`
    pub fn new(task: Task) -> Self {
        Self {
            task,
            documents: Vec::new(),
        }
    }

    /// Number of artifacts written
    pub fn written(&self) -> usize {
        self.documents.iter().filter(|d| d.is_written()).count()
    }

    /// Number of inputs skipped
    pub fn skipped(&self) -> usize {
        self.documents.len() - self.written()
    }

    /// Total lines written across all artifacts
    pub fn total_units(&self) -> usize {
        self.documents.iter().map(|d| d.units).sum()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_counts() {
        let mut report = BatchReport::new(Task::Tag);
        report.documents.push(DocumentReport::written(
            PathBuf::from("a.txt"),
            PathBuf::from("a.txt.pos"),
            3,
        ));
        report.documents.push(DocumentReport::skipped(
            PathBuf::from("b.txt"),
            "not found".to_string(),
        ));
        report.documents.push(DocumentReport::written(
            PathBuf::from("c.txt"),
            PathBuf::from("c.txt.pos"),
            2,
        ));

        assert_eq!(report.written(), 2);
        assert_eq!(report.skipped(), 1);
        assert_eq!(report.total_units(), 5);
    }

    #[test]
    fn test_skipped_has_no_output() {
        let doc = DocumentReport::skipped(PathBuf::from("b.txt"), "gone".to_string());
        assert!(!doc.is_written());
        assert_eq!(doc.output, None);
        assert_eq!(doc.units, 0);
    }
}
