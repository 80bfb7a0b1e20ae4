//! Non-blank line totals for Dafny sources via `cloc`.
//!
//! `cloc` has no built-in Dafny support, so every run is given a language
//! definition (written to a temporary file) that recognizes `.dfy` and
//! strips comment markers that appear inside string literals. Only Dafny is
//! reported. The total is `code + comment`: comments count, only blank
//! lines are dropped.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::Command;

use serde::Deserialize;
use tempfile::NamedTempFile;

use crate::config::{Tool, ToolConfig};
use crate::error::LocError;
use crate::Result;

/// Language definition passed with `--read-lang-def`.
pub const DAFNY_LANG_DEF: &str = r#"
Dafny
    filter rm_comments_in_strings " /* */
    filter rm_comments_in_strings " //
    filter call_regexp_common C++
    extension dfy
    3rd_gen_scale 5.00
"#;

/// Per-language totals from a `cloc --json` report.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
pub struct LanguageTotals {
    #[serde(rename = "nFiles")]
    pub n_files: u64,
    pub blank: u64,
    pub comment: u64,
    pub code: u64,
}

impl LanguageTotals {
    /// Non-blank lines.
    pub fn non_blank(&self) -> u64 {
        self.code + self.comment
    }
}

/// A parsed `cloc --json` report.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClocReport {
    pub languages: BTreeMap<String, LanguageTotals>,
}

impl ClocReport {
    /// Parse the JSON written by `cloc --json`.
    ///
    /// The `header` and `SUM` entries are skipped. Empty output, which
    /// `cloc` produces when nothing was recognized, is an empty report.
    pub fn parse(json: &str) -> Result<Self> {
        if json.trim().is_empty() {
            return Ok(Self::default());
        }

        let invalid = |e: serde_json::Error| LocError::ToolOutput {
            tool: Tool::Cloc.to_string(),
            message: e.to_string(),
        };

        let entries: BTreeMap<String, serde_json::Value> =
            serde_json::from_str(json).map_err(invalid)?;

        let mut languages = BTreeMap::new();
        for (name, value) in entries {
            if name == "header" || name == "SUM" {
                continue;
            }
            let totals: LanguageTotals = serde_json::from_value(value).map_err(invalid)?;
            languages.insert(name, totals);
        }

        Ok(Self { languages })
    }

    /// Sum of code and comment lines over all languages.
    pub fn non_blank(&self) -> u64 {
        self.languages.values().map(LanguageTotals::non_blank).sum()
    }
}

/// Runs `cloc` with the Dafny language definition.
#[derive(Debug, Clone)]
pub struct ClocCounter {
    program: PathBuf,
}

impl ClocCounter {
    /// Locate `cloc` using `config`.
    pub fn new(config: &ToolConfig) -> Result<Self> {
        Ok(Self::with_program(config.resolve(Tool::Cloc)?))
    }

    /// Use an already resolved program.
    pub fn with_program(program: impl Into<PathBuf>) -> Self {
        Self {
            program: program.into(),
        }
    }

    /// Run `cloc` on a file or directory and parse its report.
    pub fn report(&self, path: &Path) -> Result<ClocReport> {
        let mut lang_def = NamedTempFile::new()?;
        lang_def.write_all(DAFNY_LANG_DEF.as_bytes())?;
        lang_def.flush()?;

        log::debug!("cloc {}", path.display());
        let output = Command::new(&self.program)
            .args(["--quiet", "--json", "--include-lang=Dafny", "--read-lang-def"])
            .arg(lang_def.path())
            .arg(path)
            .output()?;

        if !output.status.success() {
            return Err(LocError::ToolFailed {
                tool: Tool::Cloc.to_string(),
                status: output.status,
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        ClocReport::parse(&String::from_utf8_lossy(&output.stdout))
    }

    /// Non-blank Dafny lines under `path`.
    pub fn count(&self, path: &Path) -> Result<u64> {
        let total = self.report(path)?.non_blank();
        log::debug!("{}: {total} non-blank lines", path.display());
        Ok(total)
    }
}
