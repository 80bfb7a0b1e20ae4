//! The three reports: one module per paper table.
//!
//! - **daisy**: DaisyNFS spec, code and proof sizes as LaTeX macros
//! - **gotxn**: Perennial, GooseLang and GoTxn implementation tables
//! - **largefile**: Linux vs GoNFS largefile throughput

pub mod daisy;
pub mod gotxn;
pub mod largefile;

pub use daisy::DaisyCounts;
pub use gotxn::{GoTxnReport, GoTxnRoots};
pub use largefile::{largefile_table, BenchData, LargefileTable};
