//! Error types for paperloclib

use std::path::PathBuf;
use std::process::ExitStatus;
use thiserror::Error;

/// Errors that can occur while collecting line counts
#[derive(Error, Debug)]
pub enum LocError {
    /// Failed to read a file
    #[error("failed to read file '{path}': {source}")]
    FileRead {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Failed to write an output file
    #[error("failed to write file '{path}': {source}")]
    FileWrite {
        path: PathBuf,
        source: std::io::Error,
    },

    /// Invalid glob pattern
    #[error("invalid glob pattern '{pattern}': {message}")]
    InvalidGlob { pattern: String, message: String },

    /// Invalid regular expression
    #[error("invalid regular expression '{pattern}': {message}")]
    InvalidRegex { pattern: String, message: String },

    /// A glob pattern matched no files
    #[error("pattern {pattern} did not match any files")]
    NoMatches { pattern: String },

    /// Path does not exist (or is not a directory where one is required)
    #[error("path does not exist: {0}")]
    PathNotFound(PathBuf),

    /// Project root environment variable is not set
    #[error("environment variable {var} is not set")]
    MissingEnv { var: String },

    /// External tool is not installed
    #[error("could not find `{tool}` on PATH: {message}")]
    ToolNotFound { tool: String, message: String },

    /// External tool exited with a non-zero status
    #[error("`{tool}` failed ({status}): {stderr}")]
    ToolFailed {
        tool: String,
        status: ExitStatus,
        stderr: String,
    },

    /// External tool produced output we could not understand
    #[error("unexpected output from `{tool}`: {message}")]
    ToolOutput { tool: String, message: String },

    /// One or more ghost-stripping compiler runs failed
    #[error("dafny /printMode:NoGhost failed for {failed} of {total} files")]
    StripFailed { failed: usize, total: usize },

    /// Benchmark data is missing a row or column
    #[error("{file}: no value for bench '{bench}', column '{column}'")]
    MissingBenchmark {
        file: PathBuf,
        bench: String,
        column: String,
    },

    /// Benchmark data could not be parsed
    #[error("failed to parse benchmark data '{file}': {source}")]
    BenchmarkFormat { file: PathBuf, source: csv::Error },

    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}
