use super::report::{BatchReport, DocumentReport};
use crate::error::CoreError;
use crate::types::Task;
use std::path::Path;

/// Receives progress notifications from the batch processor
///
/// File indices are zero-based positions in the input list. Every method
/// defaults to doing nothing.
pub trait ProgressObserver {
    /// A batch of `total` inputs is starting
    fn on_batch_start(&mut self, _task: Task, _total: usize) {}

    /// Input `index` is about to be read
    fn on_file_start(&mut self, _index: usize, _total: usize, _input: &Path) {}

    /// One unit of the current input was written
    ///
    /// `fraction` is the share of the input's units written so far, in
    /// `(0.0, 1.0]`, and `preview` the start of the written line.
    fn on_unit_progress(&mut self, _index: usize, _total: usize, _fraction: f64, _preview: &str) {
    }

    /// Input `index` was fully written
    fn on_file_done(&mut self, _index: usize, _total: usize, _document: &DocumentReport) {}

    /// Input `index` could not be read and was skipped
    fn on_input_error(&mut self, _index: usize, _total: usize, _error: &CoreError) {}

    /// The batch completed
    fn on_batch_done(&mut self, _report: &BatchReport) {}
}

/// Observer that ignores every notification
#[derive(Debug, Default, Clone, Copy)]
pub struct SilentObserver;

impl ProgressObserver for SilentObserver {}
