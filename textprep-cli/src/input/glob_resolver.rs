//! File pattern resolution using glob

use super::rebase;
use crate::error::{CliError, CliResult};
use anyhow::Context;
use glob::{glob, Pattern};
use std::path::{Path, PathBuf};

fn is_pattern(arg: &str) -> bool {
    arg.contains(['*', '?', '['])
}

/// Resolve file arguments to paths, keeping argument order
///
/// Arguments without glob metacharacters are kept as given even if the file
/// does not exist, so the pipeline can report them as unreadable. An existing
/// path is taken literally even when its name contains metacharacters.
/// Matches of one pattern are in glob's (alphabetical) order.
pub fn resolve_patterns(args: &[String], base: Option<&Path>) -> CliResult<Vec<PathBuf>> {
    let mut files = Vec::new();

    for arg in args {
        let full = rebase(Path::new(arg), base);
        if !is_pattern(arg) || full.exists() {
            files.push(full);
            continue;
        }

        // Only the argument is a pattern, never the base directory
        let escaped_base = base.map(|b| PathBuf::from(Pattern::escape(&b.to_string_lossy())));
        let pattern = rebase(Path::new(arg), escaped_base.as_deref());
        let paths = glob(&pattern.to_string_lossy())
            .map_err(|_| CliError::InvalidPattern(arg.clone()))?;

        let before = files.len();
        for path_result in paths {
            let path = path_result.with_context(|| format!("Error resolving pattern: {arg}"))?;
            if path.is_file() {
                files.push(path);
            }
        }

        if files.len() == before {
            log::warn!("Pattern matched no files: {arg}");
        }
    }

    Ok(files)
}
