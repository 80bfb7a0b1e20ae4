//! Output formatting: present metrics as text or LaTeX.
//!
//! This module handles the final stage of every pipeline. It provides:
//!
//! - **TextTable**: aligned plain-text tables with `---` for missing values
//! - **LaTeX**: `\def` macro files and `tabular` body fragments
//!
//! Both are pure string builders; only [`latex::write_file`] touches the
//! filesystem.
//!
//! ## Example
//!
//! ```rust,ignore
//! use paperloclib::output::{latex, TextTable};
//!
//! print!("{}", TextTable::from_layers(&report.implementation).render());
//! latex::write_file(dir, "impl-loc.tex", &latex::layer_table(&report.implementation))?;
//! ```

pub mod latex;
pub mod table;

pub use latex::LatexRow;
pub use table::{render_metrics, render_tab_separated, TableRow, TextTable, MISSING};
