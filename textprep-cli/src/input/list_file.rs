//! Newline-separated input lists

use crate::CliResult;
use anyhow::Context;
use std::fs;
use std::path::{Path, PathBuf};

/// Read paths from a list file
///
/// One path per line. Surrounding whitespace is trimmed; blank lines and
/// lines starting with `#` are ignored.
pub fn read_list_file(path: &Path) -> CliResult<Vec<PathBuf>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read list file: {}", path.display()))?;

    Ok(content
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(PathBuf::from)
        .collect())
}
