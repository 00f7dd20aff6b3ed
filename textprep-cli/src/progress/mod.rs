//! Progress reporting module

use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;
use textprep_core::{BatchReport, CoreError, DocumentReport, ProgressObserver, Task};

/// Console progress for a batch run
///
/// Shows one bar over the input files. The bar message carries the
/// per-sentence progress of the current file as `[i/n]: xx.xx% <preview>`.
/// Quiet runs use `SilentObserver` instead.
#[derive(Default)]
pub struct ConsoleProgress {
    progress_bar: Option<ProgressBar>,
}

impl ConsoleProgress {
    /// Create a new progress reporter
    pub fn new() -> Self {
        Self::default()
    }

    fn style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("[{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} files {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_bar())
            .progress_chars("##-")
    }
}

/// `[i/n]: xx.xx% preview`, with a one-based file index
pub fn unit_message(index: usize, total: usize, fraction: f64, preview: &str) -> String {
    format!("[{}/{}]: {:.2}% {}", index + 1, total, fraction * 100.0, preview)
}

impl ProgressObserver for ConsoleProgress {
    fn on_batch_start(&mut self, _task: Task, total: usize) {
        let pb = ProgressBar::new(total as u64);
        pb.set_style(Self::style());
        pb.enable_steady_tick(Duration::from_millis(100));
        self.progress_bar = Some(pb);
    }

    fn on_file_start(&mut self, index: usize, total: usize, input: &Path) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(format!("[{}/{}] {}", index + 1, total, input.display()));
        }
    }

    fn on_unit_progress(&mut self, index: usize, total: usize, fraction: f64, preview: &str) {
        if let Some(pb) = &self.progress_bar {
            pb.set_message(unit_message(index, total, fraction, preview));
        }
    }

    fn on_file_done(&mut self, _index: usize, _total: usize, _document: &DocumentReport) {
        if let Some(pb) = &self.progress_bar {
            pb.inc(1);
        }
    }

    fn on_input_error(&mut self, _index: usize, _total: usize, error: &CoreError) {
        if let Some(pb) = &self.progress_bar {
            pb.println(format!("Error reading: {error}"));
            pb.inc(1);
        }
    }

    fn on_batch_done(&mut self, report: &BatchReport) {
        if let Some(pb) = self.progress_bar.take() {
            pb.finish_with_message(format!("{} written", report.written()));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_unit_message_format() {
        assert_eq!(
            unit_message(0, 3, 0.5, "<s> DT NN </s>"),
            "[1/3]: 50.00% <s> DT NN </s>"
        );
        assert_eq!(unit_message(2, 3, 1.0, ""), "[3/3]: 100.00% ");
    }

    #[test]
    fn test_bar_lives_for_one_batch() {
        let mut progress = ConsoleProgress::new();
        assert!(progress.progress_bar.is_none());

        progress.on_batch_start(Task::Tag, 2);
        assert!(progress.progress_bar.is_some());

        progress.on_batch_done(&BatchReport::new(Task::Tag));
        assert!(progress.progress_bar.is_none());
    }

    #[test]
    fn test_bar_advances_per_file() {
        let mut progress = ConsoleProgress::new();
        progress.on_batch_start(Task::Segment, 2);

        let done = DocumentReport::written(PathBuf::from("a"), PathBuf::from("a.sen"), 1);
        progress.on_file_done(0, 2, &done);
        let err = CoreError::InputRead {
            path: PathBuf::from("b"),
            reason: "missing".to_string(),
        };
        progress.on_input_error(1, 2, &err);

        let pos = progress.progress_bar.as_ref().map(ProgressBar::position);
        assert_eq!(pos, Some(2));
    }
}
