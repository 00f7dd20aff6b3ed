//! Input handling module
//!
//! Inputs are collected from positional patterns and list files, in the
//! order given, with duplicates removed.

pub mod glob_resolver;
pub mod list_file;

pub use glob_resolver::resolve_patterns;
pub use list_file::read_list_file;

use crate::error::{CliError, CliResult};
use std::collections::HashSet;
use std::path::{Path, PathBuf};

/// Join a relative path onto `base` when one is configured
pub fn rebase(path: &Path, base: Option<&Path>) -> PathBuf {
    match base {
        Some(base) if path.is_relative() => base.join(path),
        _ => path.to_path_buf(),
    }
}

/// Build the final input list for a run
///
/// Patterns come first, then list-file entries. An empty result is an error.
pub fn collect_inputs(
    patterns: &[String],
    list: Option<&Path>,
    input_dir: Option<&Path>,
) -> CliResult<Vec<PathBuf>> {
    let mut inputs = resolve_patterns(patterns, input_dir)?;
    if let Some(list) = list {
        let entries = read_list_file(list)?;
        inputs.extend(entries.iter().map(|p| rebase(p, input_dir)));
    }

    let inputs = dedup_keep_first(inputs);
    if inputs.is_empty() {
        return Err(CliError::NoInputs.into());
    }

    log::debug!("Resolved {} input file(s)", inputs.len());
    Ok(inputs)
}

fn dedup_keep_first(paths: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen = HashSet::new();
    paths
        .into_iter()
        .filter(|p| seen.insert(p.clone()))
        .collect()
}
