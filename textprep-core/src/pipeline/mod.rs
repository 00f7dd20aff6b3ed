//! Batch processing pipeline
//!
//! For every input, in order: read the text, analyze it into units, format
//! each unit as one line, and write the lines to the artifact named by the
//! [`OutputLayout`]. Progress goes to a [`ProgressObserver`].

mod layout;
mod observer;
mod processor;
mod report;

pub use layout::OutputLayout;
pub use observer::{ProgressObserver, SilentObserver};
pub use processor::BatchTextProcessor;
pub use report::{BatchReport, DocumentReport, DocumentStatus};
