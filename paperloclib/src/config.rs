//! Locations of the external tools the counters shell out to.

use std::env;
use std::fmt;
use std::path::PathBuf;

use crate::error::LocError;
use crate::Result;

/// External programs used by the counters.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tool {
    /// `cloc`, the language-aware line counter
    Cloc,
    /// `dafny`, used to print ghost-free programs
    Dafny,
}

impl Tool {
    /// Environment variable that overrides the program for this tool.
    pub fn env_var(self) -> &'static str {
        match self {
            Tool::Cloc => "PAPERLOC_CLOC",
            Tool::Dafny => "PAPERLOC_DAFNY",
        }
    }

    fn default_program(self) -> &'static str {
        match self {
            Tool::Cloc => "cloc",
            Tool::Dafny => "dafny",
        }
    }
}

impl fmt::Display for Tool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.default_program())
    }
}

/// Programs to run for each [`Tool`].
///
/// Each entry is either a bare name looked up on `PATH` or a path to an
/// executable.
#[derive(Debug, Clone)]
pub struct ToolConfig {
    pub cloc: PathBuf,
    pub dafny: PathBuf,
}

impl Default for ToolConfig {
    fn default() -> Self {
        Self {
            cloc: PathBuf::from(Tool::Cloc.default_program()),
            dafny: PathBuf::from(Tool::Dafny.default_program()),
        }
    }
}

impl ToolConfig {
    /// Create new default config (`cloc` and `dafny` from `PATH`).
    pub fn new() -> Self {
        Self::default()
    }

    /// Default config with `PAPERLOC_CLOC` / `PAPERLOC_DAFNY` overrides applied.
    pub fn from_env() -> Self {
        let mut config = Self::default();
        if let Some(cloc) = env::var_os(Tool::Cloc.env_var()) {
            config.cloc = PathBuf::from(cloc);
        }
        if let Some(dafny) = env::var_os(Tool::Dafny.env_var()) {
            config.dafny = PathBuf::from(dafny);
        }
        config
    }

    /// Set the `cloc` program.
    pub fn cloc(mut self, program: impl Into<PathBuf>) -> Self {
        self.cloc = program.into();
        self
    }

    /// Set the `dafny` program.
    pub fn dafny(mut self, program: impl Into<PathBuf>) -> Self {
        self.dafny = program.into();
        self
    }

    /// Configured program for `tool`, unresolved.
    pub fn program(&self, tool: Tool) -> &PathBuf {
        match tool {
            Tool::Cloc => &self.cloc,
            Tool::Dafny => &self.dafny,
        }
    }

    /// Locate the executable for `tool`.
    pub fn resolve(&self, tool: Tool) -> Result<PathBuf> {
        let program = self.program(tool);
        let resolved = which::which(program).map_err(|e| LocError::ToolNotFound {
            tool: program.display().to_string(),
            message: e.to_string(),
        })?;
        log::debug!("{tool} -> {}", resolved.display());
        Ok(resolved)
    }
}
