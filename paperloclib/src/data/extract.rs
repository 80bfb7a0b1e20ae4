//! Range extraction with `sed -n '/start/,/end/p'` semantics.
//!
//! A range opens on a line matching `start` and closes on the next *later*
//! line matching `end` (the opening line is never checked against `end`).
//! After a range closes, scanning for `start` resumes on the following line.
//! An unterminated range runs to end of input.

use std::fs;
use std::path::Path;

use regex::Regex;

use crate::error::LocError;
use crate::Result;

/// Line-range extractor built from two regular expressions.
#[derive(Debug, Clone)]
pub struct RangeExtractor {
    start: Regex,
    end: Regex,
}

impl RangeExtractor {
    /// Build an extractor; fails on invalid regex syntax.
    pub fn new(start: &str, end: &str) -> Result<Self> {
        let compile = |pattern: &str| {
            Regex::new(pattern).map_err(|e| LocError::InvalidRegex {
                pattern: pattern.to_string(),
                message: e.to_string(),
            })
        };
        Ok(Self {
            start: compile(start)?,
            end: compile(end)?,
        })
    }

    /// Lines of `text` that fall inside a range.
    pub fn extract<'a>(&self, text: &'a str) -> Vec<&'a str> {
        let mut selected = Vec::new();
        let mut in_range = false;

        for line in text.lines() {
            if in_range {
                selected.push(line);
                if self.end.is_match(line) {
                    in_range = false;
                }
            } else if self.start.is_match(line) {
                selected.push(line);
                in_range = true;
            }
        }

        selected
    }

    /// Number of extracted lines in the file at `path`.
    pub fn count_file(&self, path: impl AsRef<Path>) -> Result<u64> {
        let path = path.as_ref();
        let text = fs::read_to_string(path).map_err(|source| LocError::FileRead {
            path: path.to_path_buf(),
            source,
        })?;
        let count = self.extract(&text).len() as u64;
        log::debug!("{}: {count} lines in ranges", path.display());
        Ok(count)
    }
}
