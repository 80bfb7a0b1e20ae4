//! # paperloclib
//!
//! Lines-of-code measurements for the DaisyNFS and GoTxn papers.
//!
//! ## Overview
//!
//! Each report walks one or more checked-out projects, counts lines of files
//! matching fixed glob patterns, derives spec/code/proof metrics and renders
//! them as a plain table or as LaTeX for the paper. The work is split in
//! stages:
//!
//! - **source**: project roots (`<IDENTIFIER>_PATH`) and glob expansion
//! - **data**: `wc -l` style counting, `cloc`, ghost stripping with `dafny`
//! - **output**: aligned text tables and LaTeX macros/fragments
//! - **pipelines**: the DaisyNFS, GoTxn and largefile reports
//!
//! Counting never changes the working directory; every pattern is resolved
//! against an explicit root.
//!
//! ## Example
//!
//! ```rust
//! use paperloclib::{wc_l, ratio};
//! use std::fs;
//! use tempfile::tempdir;
//!
//! let dir = tempdir().unwrap();
//! fs::write(dir.path().join("a.txt"), "1\n2\n3\n").unwrap();
//! fs::write(dir.path().join("b.txt"), "1\n2\n3\n4\n5\n").unwrap();
//!
//! assert_eq!(wc_l(dir.path(), &["*.txt"]).unwrap(), 8);
//! assert_eq!(ratio(8, 3), Some(3));
//! assert_eq!(ratio(0, 0), None);
//! ```

pub mod config;
pub mod data;
pub mod error;
pub mod output;
pub mod pipelines;
pub mod source;

#[cfg(all(test, unix))]
mod test_support;

pub use config::{Tool, ToolConfig};
pub use data::{
    count_pattern, ratio, wc_l, ClocCounter, ComponentRow, ComponentTable, LayerRow, LayerTable,
    MetricSet, RangeExtractor, StrippedCompile,
};
pub use error::LocError;
pub use output::{latex, TextTable};
pub use pipelines::{DaisyCounts, GoTxnReport, GoTxnRoots, LargefileTable};
pub use source::{ProjectId, ProjectRoot};

/// Result type for paperloclib operations
pub type Result<T> = std::result::Result<T, LocError>;
