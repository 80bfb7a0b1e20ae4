//! LaTeX output: macro definitions and `tabular` body fragments.
//!
//! Fragments are meant to be `\input` between a hand-written table header
//! and `\end{tabular}`, so they carry their own `\midrule` before the total
//! row and end with `\bottomrule` (emitting it here keeps LaTeX from adding
//! an extra space to the bottom-right cell). Counts are wrapped in the
//! paper's `\loc{}` macro.

use std::fs;
use std::path::{Path, PathBuf};

use crate::data::metrics::{ComponentTable, LayerRow, LayerTable, MetricSet};
use crate::error::LocError;
use crate::output::table::MISSING;
use crate::Result;

/// A line of a `tabular` body.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LatexRow {
    Cells(Vec<String>),
    Midrule,
}

/// `\loc{n}`
pub fn loc(n: i64) -> String {
    format!("\\loc{{{n}}}")
}

/// `$n\times$`
pub fn times(n: i64) -> String {
    format!("${n}\\times$")
}

/// Wrap all-lowercase labels in `\textsc{}`.
///
/// A label is all-lowercase when it has at least one lowercase letter and
/// no uppercase ones (`wal-sts` yes, `Misc.` no, `---` no).
pub fn small_caps(label: &str) -> String {
    let has_lower = label.chars().any(char::is_lowercase);
    let has_upper = label.chars().any(char::is_uppercase);
    if has_lower && !has_upper {
        format!("\\textsc{{{label}}}")
    } else {
        label.to_string()
    }
}

/// Macro name from a metric name: `("\\daisy", "method specs")` → `\daisyMethodSpecs`.
pub fn macro_name(prefix: &str, name: &str) -> String {
    let mut out = prefix.to_string();
    for word in name.split_whitespace() {
        let mut chars = word.chars();
        if let Some(first) = chars.next() {
            out.extend(first.to_uppercase());
            out.push_str(&chars.as_str().to_lowercase());
        }
    }
    out
}

/// One `\def\<prefix><Name>{n}` line per metric.
pub fn metric_macros(prefix: &str, metrics: &MetricSet) -> String {
    metrics
        .iter()
        .map(|m| format!("\\def{}{{{}}}\n", macro_name(prefix, &m.name), m.lines))
        .collect()
}

/// Join rows into a `tabular` body ending in `\bottomrule`.
pub fn tabular(rows: &[LatexRow]) -> String {
    let mut latex = String::new();
    for row in rows {
        match row {
            LatexRow::Cells(cells) => {
                latex.push_str(&cells.join(" & "));
                latex.push_str(" \\\\\n");
            }
            LatexRow::Midrule => latex.push_str("\\midrule\n"),
        }
    }
    latex.push_str("\\bottomrule\n");
    latex
}

/// Component table body: `label & \loc{n} \\` rows, total after `\midrule`.
pub fn component_table(table: &ComponentTable) -> String {
    let mut rows: Vec<LatexRow> = table
        .rows
        .iter()
        .map(|r| LatexRow::Cells(vec![r.component.clone(), loc(r.lines)]))
        .collect();
    rows.push(LatexRow::Midrule);
    rows.push(LatexRow::Cells(vec![
        table.total.component.clone(),
        loc(table.total.lines),
    ]));
    tabular(&rows)
}

/// A code or ratio cell, spanning two rows when the next row continues this one.
fn shared_cell(
    row: &LayerRow,
    next_continues: bool,
    value: Option<i64>,
    f: fn(i64) -> String,
) -> String {
    if row.continues {
        return String::new();
    }
    let formatted = value.map_or_else(|| MISSING.to_string(), f);
    if next_continues {
        format!("\\multirow{{2}}{{*}}{{{formatted}}}")
    } else {
        formatted
    }
}

fn layer_cells(row: &LayerRow, next_continues: bool) -> Vec<String> {
    vec![
        small_caps(&row.layer),
        shared_cell(row, next_continues, row.code, loc),
        loc(row.proof),
        shared_cell(row, next_continues, row.ratio, times),
    ]
}

/// Implementation table body with `\multirow` cells for continued layers.
pub fn layer_table(table: &LayerTable) -> String {
    let mut rows = Vec::with_capacity(table.rows.len() + 2);
    for (i, row) in table.rows.iter().enumerate() {
        let next_continues = table.rows.get(i + 1).is_some_and(|next| next.continues);
        rows.push(LatexRow::Cells(layer_cells(row, next_continues)));
    }
    rows.push(LatexRow::Midrule);
    rows.push(LatexRow::Cells(layer_cells(&table.total, false)));
    tabular(&rows)
}

/// Write `contents` to `dir/name`, creating `dir` if needed.
pub fn write_file(dir: &Path, name: &str, contents: &str) -> Result<PathBuf> {
    fs::create_dir_all(dir)?;
    let path = dir.join(name);
    fs::write(&path, contents).map_err(|source| LocError::FileWrite {
        path: path.clone(),
        source,
    })?;
    log::info!("wrote {}", path.display());
    Ok(path)
}
