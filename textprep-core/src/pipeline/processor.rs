use super::layout::OutputLayout;
use super::observer::ProgressObserver;
use super::report::{BatchReport, DocumentReport};
use crate::capability::Analyzer;
use crate::error::{CoreError, Result};
use crate::format::{preview, UnitFormatter};
use crate::PREVIEW_CHARS;
use std::borrow::Cow;
use std::fs::{self, File};
use std::io::{BufWriter, Write};
use std::path::{Path, PathBuf};

/// Runs an analyzer/formatter pair over a list of input files
///
/// Inputs are processed strictly one after another. Each artifact is
/// created, fully written and closed before the next input is read.
#[derive(Debug, Clone)]
pub struct BatchTextProcessor {
    layout: OutputLayout,
}

impl BatchTextProcessor {
    /// Create a processor writing artifacts according to `layout`
    pub fn new(layout: OutputLayout) -> Self {
        Self { layout }
    }

    /// The artifact layout
    pub fn layout(&self) -> &OutputLayout {
        &self.layout
    }

    /// Process every input in order
    ///
    /// Unreadable inputs are reported to the observer and skipped. Analyzer
    /// and write failures abort the batch; artifacts already written stay on
    /// disk, including a partially written one for the failing input.
    pub fn process<A, F, O>(
        &self,
        inputs: &[PathBuf],
        analyzer: &A,
        formatter: &F,
        observer: &mut O,
    ) -> Result<BatchReport>
    where
        A: Analyzer,
        F: UnitFormatter<Unit = A::Unit>,
        O: ProgressObserver + ?Sized,
    {
        let task = analyzer.task();
        let total = inputs.len();
        let mut report = BatchReport::new(task);

        log::info!("{} {} file(s)", task.verb(), total);
        observer.on_batch_start(task, total);

        for (index, input) in inputs.iter().enumerate() {
            observer.on_file_start(index, total, input);

            let text = match read_text(input) {
                Ok(text) => text,
                Err(e) => {
                    let err = CoreError::input_read(input, e);
                    log::warn!("Skipping input: {err}");
                    observer.on_input_error(index, total, &err);
                    report
                        .documents
                        .push(DocumentReport::skipped(input.clone(), err.to_string()));
                    continue;
                }
            };

            log::debug!("{} {} ({} bytes)", task.verb(), input.display(), text.len());
            let units = analyzer.analyze(&text)?;

            let output = self.layout.output_path(input);
            self.write_units(&output, &units, formatter, |fraction, line| {
                observer.on_unit_progress(index, total, fraction, line)
            })?;

            log::info!(
                "[{}/{}] {} -> {} ({} units)",
                index + 1,
                total,
                input.display(),
                output.display(),
                units.len()
            );

            let document = DocumentReport::written(input.clone(), output, units.len());
            observer.on_file_done(index, total, &document);
            report.documents.push(document);
        }

        observer.on_batch_done(&report);
        Ok(report)
    }

    fn write_units<U, F, P>(
        &self,
        output: &Path,
        units: &[U],
        formatter: &F,
        mut progress: P,
    ) -> Result<()>
    where
        F: UnitFormatter<Unit = U>,
        P: FnMut(f64, &str),
    {
        if self.layout.output_root().is_some() {
            if let Some(parent) = output.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent).map_err(|e| CoreError::output_write(output, e))?;
            }
        }

        let file = File::create(output).map_err(|e| CoreError::output_write(output, e))?;
        let mut writer = BufWriter::new(file);
        let total = units.len();

        for (done, unit) in units.iter().enumerate() {
            let line = formatter.format(unit);
            writeln!(writer, "{line}").map_err(|e| CoreError::output_write(output, e))?;
            progress((done + 1) as f64 / total as f64, preview(&line, PREVIEW_CHARS));
        }

        writer
            .flush()
            .map_err(|e| CoreError::output_write(output, e))?;
        Ok(())
    }
}

/// Read an input as text, replacing invalid UTF-8 sequences
fn read_text(input: &Path) -> std::io::Result<String> {
    let bytes = fs::read(input)?;
    Ok(match String::from_utf8_lossy(&bytes) {
        Cow::Borrowed(text) => text.to_string(),
        Cow::Owned(text) => {
            log::warn!(
                "{} is not valid UTF-8, invalid bytes were replaced",
                input.display()
            );
            text
        }
    })
}
