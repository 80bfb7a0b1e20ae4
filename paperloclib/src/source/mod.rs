//! Source discovery: find the files to count.
//!
//! This module handles the first stage of every pipeline - locating project
//! checkouts and the files inside them. It provides:
//!
//! - **Project roots**: checkout paths from `<IDENTIFIER>_PATH` variables
//! - **Patterns**: glob expansion relative to a root, and extension walks
//!
//! ## Example
//!
//! ```rust,ignore
//! use paperloclib::source::{expand_pattern, ProjectId, ProjectRoot};
//!
//! let root = ProjectRoot::from_env(ProjectId::GoJournal)?;
//! let files = expand_pattern(root.path(), "wal/*.go")?;
//! ```

pub mod pattern;
pub mod project;

pub use pattern::{discover_files, expand_pattern, prefix_patterns};
pub use project::{ProjectId, ProjectRoot};
