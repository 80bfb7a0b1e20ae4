//! Plain line counting over glob patterns, the equivalent of `wc -l`.
//!
//! Counting is purely newline based: a file's count is the number of `\n`
//! bytes, plus one if the last line has no trailing newline. Comments and
//! blank lines are counted like everything else; [`crate::data::cloc`] is the
//! place for language-aware totals.

use std::fs;
use std::path::Path;

use crate::error::LocError;
use crate::source::pattern::expand_pattern;
use crate::Result;

/// Count lines in a single in-memory buffer.
pub fn count_lines(content: &[u8]) -> u64 {
    let newlines = content.iter().filter(|&&b| b == b'\n').count() as u64;
    match content.last() {
        Some(&b'\n') | None => newlines,
        Some(_) => newlines + 1,
    }
}

/// Count lines in the file at `path`.
pub fn count_file_lines(path: impl AsRef<Path>) -> Result<u64> {
    let path = path.as_ref();
    let content = fs::read(path).map_err(|source| LocError::FileRead {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(count_lines(&content))
}

/// Count lines across every file matching `pattern` below `root`.
///
/// Fails with [`LocError::NoMatches`] if the pattern matches no files.
pub fn count_pattern(root: &Path, pattern: &str) -> Result<u64> {
    let files = expand_pattern(root, pattern)?;
    if files.is_empty() {
        return Err(LocError::NoMatches {
            pattern: pattern.to_string(),
        });
    }

    let mut total = 0;
    for file in &files {
        total += count_file_lines(file)?;
    }
    log::debug!("{pattern}: {} files, {total} lines", files.len());
    Ok(total)
}

/// Sum of [`count_pattern`] over several patterns, in order.
///
/// Files matched by more than one pattern are counted once per pattern.
pub fn wc_l<S: AsRef<str>>(root: &Path, patterns: &[S]) -> Result<u64> {
    let mut total = 0;
    for pattern in patterns {
        total += count_pattern(root, pattern.as_ref())?;
    }
    Ok(total)
}
