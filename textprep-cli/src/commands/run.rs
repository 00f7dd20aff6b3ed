//! Task command implementation (tag, segment, parse)

use crate::config::{CliConfig, Overrides, Settings};
use crate::input::collect_inputs;
use crate::output::{JsonSummary, SummaryFormat, SummaryFormatter, TextSummary};
use crate::progress::ConsoleProgress;
use crate::CliResult;
use anyhow::Context;
use clap::Args;
use std::io;
use std::path::PathBuf;
use textprep_core::{
    BatchReport, BatchTextProcessor, OutputLayout, ParseAnalyzer, ProgressObserver, RuleBasedNlp,
    SegmentAnalyzer, SentenceFormatter, SilentObserver, TagAnalyzer, TagFormatter, Task,
    TreeFormatter,
};

/// Arguments shared by every task command and binary
#[derive(Debug, Args)]
pub struct TaskArgs {
    /// Input files or patterns (supports glob)
    #[arg(value_name = "FILE/PATTERN")]
    pub inputs: Vec<String>,

    /// File listing one input path per line
    #[arg(short, long, value_name = "FILE")]
    pub list: Option<PathBuf>,

    /// Configuration file
    #[arg(short, long, value_name = "FILE", env = "TEXTPREP_CONFIG")]
    pub config: Option<PathBuf>,

    /// Model file (default: embedded English model)
    #[arg(short, long, value_name = "FILE", env = "TEXTPREP_MODEL")]
    pub model: Option<PathBuf>,

    /// Base directory for relative input paths
    #[arg(long, value_name = "DIR", env = "TEXTPREP_INPUT_DIR")]
    pub input_dir: Option<PathBuf>,

    /// Directory for output files (default: next to each input)
    #[arg(short, long, value_name = "DIR", env = "TEXTPREP_OUTPUT_DIR")]
    pub output_dir: Option<PathBuf>,

    /// Maximum sentence length in tokens for parsing
    #[arg(
        long,
        value_name = "TOKENS",
        env = "TEXTPREP_MAX_LENGTH",
        value_parser = clap::value_parser!(u64).range(1..)
    )]
    pub max_length: Option<u64>,

    /// Summary format printed after the run
    #[arg(short, long, value_enum, default_value = "text")]
    pub summary: SummaryFormat,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,

    /// Increase verbosity
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}

impl TaskArgs {
    /// Execute `task` over the inputs
    pub fn execute(&self, task: Task) -> CliResult<()> {
        self.init_logging();

        log::info!("Starting {} run", task.name());
        log::debug!("Arguments: {:?}", self);

        let settings = self.settings()?;
        let inputs = collect_inputs(
            &self.inputs,
            self.list.as_deref(),
            settings.input_dir.as_deref(),
        )?;

        let nlp = match &settings.model {
            Some(path) => RuleBasedNlp::from_model_file(path)?,
            None => RuleBasedNlp::english()?,
        };
        log::info!("Loaded model '{}'", nlp.model().name());

        let layout = OutputLayout::for_task(task)
            .with_input_root(settings.input_dir.clone())
            .with_output_root(settings.output_dir.clone());
        let processor = BatchTextProcessor::new(layout);

        let mut observer: Box<dyn ProgressObserver> = if self.quiet {
            Box::new(SilentObserver)
        } else {
            Box::new(ConsoleProgress::new())
        };

        let report = match task {
            Task::Tag => processor.process(
                &inputs,
                &TagAnalyzer::new(&nlp),
                &TagFormatter,
                observer.as_mut(),
            ),
            Task::Segment => processor.process(
                &inputs,
                &SegmentAnalyzer::new(&nlp),
                &SentenceFormatter,
                observer.as_mut(),
            ),
            Task::Parse => {
                let max_length = settings
                    .max_sentence_length
                    .unwrap_or_else(|| nlp.model().max_length());
                log::debug!("Parsing with max sentence length {max_length}");
                processor.process(
                    &inputs,
                    &ParseAnalyzer::new(&nlp, max_length),
                    &TreeFormatter,
                    observer.as_mut(),
                )
            }
        }
        .with_context(|| format!("{} aborted", task.verb()))?;

        self.print_summary(&report)
    }

    /// Merge flags and environment over the config file
    pub fn settings(&self) -> CliResult<Settings> {
        let config = CliConfig::load(self.config.as_deref())?;
        let max_sentence_length = self
            .max_length
            .map(usize::try_from)
            .transpose()
            .context("--max-length is out of range")?;

        Ok(config.resolve(Overrides {
            model: self.model.clone(),
            input_dir: self.input_dir.clone(),
            output_dir: self.output_dir.clone(),
            max_sentence_length,
        }))
    }

    fn print_summary(&self, report: &BatchReport) -> CliResult<()> {
        match self.summary {
            SummaryFormat::Text => TextSummary::stdout().write_summary(report),
            SummaryFormat::Json => JsonSummary::new(io::stdout()).write_summary(report),
        }
    }

    /// Initialize logging based on verbosity level
    fn init_logging(&self) {
        let log_level = match self.verbose {
            0 => "warn",
            1 => "info",
            2 => "debug",
            _ => "trace",
        };

        if !self.quiet {
            // A second run in the same process keeps the first logger
            let _ = env_logger::Builder::from_env(
                env_logger::Env::default().default_filter_or(log_level),
            )
            .try_init();
        }
    }
}
