//! Data collection: count lines and derive metrics.
//!
//! This module handles the counting stage of every pipeline. It provides:
//!
//! - **Lines**: newline counts over glob patterns (`wc_l`)
//! - **Extraction**: sed-style line ranges (`RangeExtractor`)
//! - **cloc**: non-blank Dafny totals from `cloc --json` (`ClocCounter`)
//! - **Stripping**: ghost-free Dafny size via parallel `dafny` runs (`StrippedCompile`)
//! - **Metrics**: named counts, ratios and table rows
//!
//! ## Example
//!
//! ```rust,ignore
//! use paperloclib::data::{ratio, wc_l};
//!
//! let code = wc_l(root.path(), &["wal/*.go"])? as i64;
//! let proof = wc_l(root.path(), &["wal/*.v"])? as i64;
//! println!("{:?}", ratio(proof, code));
//! ```

pub mod cloc;
pub mod extract;
pub mod lines;
pub mod metrics;
pub mod strip;

pub use cloc::{ClocCounter, ClocReport, LanguageTotals, DAFNY_LANG_DEF};
pub use extract::RangeExtractor;
pub use lines::{count_file_lines, count_lines, count_pattern, wc_l};
pub use metrics::{
    ratio, ComponentRow, ComponentTable, LayerRow, LayerTable, Metric, MetricSet,
};
pub use strip::{StrippedCompile, MIRROR_DIR};
