//! File discovery with glob patterns and directory walks.
//!
//! Patterns are always interpreted relative to a project root. `**` matches
//! any number of directories, `*` never crosses a `/`, and hidden files only
//! match when the pattern names the leading dot explicitly.

use std::path::{Path, PathBuf};

use glob::{MatchOptions, Pattern};
use walkdir::WalkDir;

use crate::error::LocError;
use crate::Result;

const MATCH_OPTIONS: MatchOptions = MatchOptions {
    case_sensitive: true,
    require_literal_separator: true,
    require_literal_leading_dot: true,
};

/// Prefix every name with `prefix`, e.g. `("nfsd/", ["fh.go"])` → `["nfsd/fh.go"]`.
pub fn prefix_patterns(prefix: &str, names: &[&str]) -> Vec<String> {
    names.iter().map(|name| format!("{prefix}{name}")).collect()
}

/// Expand a pattern relative to `root` into the matching files.
///
/// Directories matched by the pattern are skipped. The result is sorted
/// (glob order). An empty result is not an error here; see
/// [`crate::data::lines::count_pattern`] for the strict variant.
pub fn expand_pattern(root: &Path, pattern: &str) -> Result<Vec<PathBuf>> {
    // The root may contain glob metacharacters of its own.
    let escaped_root = Pattern::escape(&root.to_string_lossy());
    let full = format!("{}/{}", escaped_root.trim_end_matches('/'), pattern);

    let paths = glob::glob_with(&full, MATCH_OPTIONS).map_err(|e| LocError::InvalidGlob {
        pattern: pattern.to_string(),
        message: e.to_string(),
    })?;

    let mut files = Vec::new();
    for entry in paths {
        let path = entry.map_err(|e| {
            let path = e.path().to_path_buf();
            LocError::FileRead {
                path,
                source: e.into_error(),
            }
        })?;
        if path.is_file() {
            files.push(path);
        }
    }
    Ok(files)
}

/// Check if a directory should be skipped during traversal.
fn should_skip_dir(name: &str) -> bool {
    name.starts_with('.')
}

/// Find every file with the given extension below `root`.
///
/// Walks the directory tree (following symlinks, skipping hidden
/// directories) and returns matches in sorted order.
pub fn discover_files(root: impl AsRef<Path>, extension: &str) -> Result<Vec<PathBuf>> {
    let root = root.as_ref();

    if !root.exists() {
        return Err(LocError::PathNotFound(root.to_path_buf()));
    }

    let walker = WalkDir::new(root).follow_links(true).into_iter();

    let mut files = Vec::new();
    for entry in walker.filter_entry(|e| {
        if e.depth() == 0 {
            return true;
        }
        if e.file_type().is_dir() {
            let name = e.file_name().to_str().unwrap_or("");
            return !should_skip_dir(name);
        }
        true
    }) {
        let entry = match entry {
            Ok(e) => e,
            Err(err) => {
                log::warn!("skipping unreadable entry: {err}");
                continue;
            }
        };

        let path = entry.path();
        if path.is_file() && path.extension().is_some_and(|ext| ext == extension) {
            files.push(path.to_path_buf());
        }
    }

    files.sort();

    Ok(files)
}
