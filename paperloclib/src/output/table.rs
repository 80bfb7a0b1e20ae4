//! Plain-text tables for terminal output.
//!
//! [`TextTable`] is a pure presentation layer: headers, rows and a footer,
//! all as display strings. The label column is left-aligned and value
//! columns are right-aligned, each padded to its widest cell.

use serde::Serialize;

use crate::data::metrics::{ComponentRow, ComponentTable, LayerRow, LayerTable, MetricSet};

/// Placeholder shown for a missing value.
pub const MISSING: &str = "---";

/// Width of the name column in a metric listing.
const METRIC_NAME_WIDTH: usize = 15;

/// A single row in the table (data row or footer).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TableRow {
    /// Row label (component, layer, ...)
    pub label: String,
    /// Values for each column (as strings, ready for display)
    pub values: Vec<String>,
}

/// Table-ready data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TextTable {
    /// Column headers: [label_header, value1, value2, ...]
    pub headers: Vec<String>,
    /// Data rows
    pub rows: Vec<TableRow>,
    /// Summary/footer row
    pub footer: TableRow,
}

fn format_optional(value: Option<i64>) -> String {
    value.map_or_else(|| MISSING.to_string(), |v| v.to_string())
}

impl TextTable {
    /// Component / Lines of Coq table.
    pub fn from_components(table: &ComponentTable) -> Self {
        let row = |r: &ComponentRow| TableRow {
            label: r.component.clone(),
            values: vec![r.lines.to_string()],
        };
        Self {
            headers: ComponentTable::HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: table.rows.iter().map(row).collect(),
            footer: row(&table.total),
        }
    }

    /// Layer / code / proof / ratio table.
    pub fn from_layers(table: &LayerTable) -> Self {
        let row = |r: &LayerRow| TableRow {
            label: r.layer.clone(),
            values: vec![
                format_optional(r.code),
                r.proof.to_string(),
                format_optional(r.ratio),
            ],
        };
        Self {
            headers: LayerTable::HEADERS.iter().map(|h| h.to_string()).collect(),
            rows: table.rows.iter().map(row).collect(),
            footer: row(&table.total),
        }
    }

    /// Column widths, label column first.
    fn widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.headers.iter().map(|h| h.chars().count()).collect();
        for row in self.rows.iter().chain(std::iter::once(&self.footer)) {
            let cells = std::iter::once(&row.label).chain(row.values.iter());
            for (i, cell) in cells.enumerate() {
                let len = cell.chars().count();
                if i < widths.len() {
                    widths[i] = widths[i].max(len);
                } else {
                    widths.push(len);
                }
            }
        }
        widths
    }

    fn render_line(cells: &[&str], widths: &[usize]) -> String {
        let mut line = String::new();
        for (i, cell) in cells.iter().enumerate() {
            let width = widths.get(i).copied().unwrap_or(0);
            if i == 0 {
                line.push_str(&format!("{:<width$}", cell, width = width));
            } else {
                line.push(' ');
                line.push_str(&format!("{:>width$}", cell, width = width));
            }
        }
        line.trim_end().to_string()
    }

    /// Render with aligned columns, one line per row, footer last.
    pub fn render(&self) -> String {
        let widths = self.widths();
        let mut out = String::new();

        let headers: Vec<&str> = self.headers.iter().map(String::as_str).collect();
        out.push_str(&Self::render_line(&headers, &widths));
        out.push('\n');

        for row in self.rows.iter().chain(std::iter::once(&self.footer)) {
            let mut cells = vec![row.label.as_str()];
            cells.extend(row.values.iter().map(String::as_str));
            out.push_str(&Self::render_line(&cells, &widths));
            out.push('\n');
        }
        out
    }
}

/// One `name  count` line per metric.
pub fn render_metrics(metrics: &MetricSet) -> String {
    metrics
        .iter()
        .map(|m| {
            format!(
                "{:<width$} {}\n",
                m.name,
                m.lines,
                width = METRIC_NAME_WIDTH
            )
        })
        .collect()
}

/// Tab-separated rows, one line each.
pub fn render_tab_separated<S: AsRef<str>>(rows: &[Vec<S>]) -> String {
    rows.iter()
        .map(|row| {
            let cells: Vec<&str> = row.iter().map(AsRef::as_ref).collect();
            format!("{}\n", cells.join("\t"))
        })
        .collect()
}
