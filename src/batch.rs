//! Describing many font files at once

use std::fs;
use std::path::{Path, PathBuf};

use log::debug;
use rayon::prelude::*;

use crate::error::{Error, Result};
use crate::font::create_from_path;
use crate::models::Extracted;

/// Outcome of describing one input path
#[derive(Debug)]
pub struct BatchEntry {
    /// The path as it was given
    pub input: PathBuf,
    pub result: Result<Extracted>,
}

/// Describe every path in parallel, keeping input order
pub fn describe_all<P>(paths: &[P]) -> Vec<BatchEntry>
where
    P: AsRef<Path> + Sync,
{
    debug!("Describing {} font files", paths.len());
    paths
        .par_iter()
        .map(|path| BatchEntry {
            input: path.as_ref().to_path_buf(),
            result: create_from_path(path),
        })
        .collect()
}

/// Read font paths from a batch file.
///
/// One path per line; blank lines and lines starting with `#` are skipped.
/// Relative entries are taken relative to the current directory, like
/// paths given on the command line.
pub fn read_batch_file(batch_file: &Path) -> Result<Vec<PathBuf>> {
    if !batch_file.is_file() {
        return Err(Error::Batch(format!(
            "Batch file '{}' not found",
            batch_file.display()
        )));
    }
    let content = fs::read_to_string(batch_file)?;
    Ok(parse_batch_list(&content))
}

fn parse_batch_list(content: &str) -> Vec<PathBuf> {
    content
        .lines()
        .map(|line| line.trim())
        .filter(|line| !line.is_empty() && !line.starts_with('#'))
        .map(PathBuf::from)
        .collect()
}
