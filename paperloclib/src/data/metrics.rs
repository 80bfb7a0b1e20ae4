//! Named line counts, derived metrics and table rows.
//!
//! Missing values are `None` rather than a reserved number, so a real count
//! of zero can never be mistaken for "not applicable".

use serde::Serialize;

/// `n / m` rounded to the nearest integer, or `None` when `m == 0`.
///
/// Ties round to even (`1/2 → 0`, `3/2 → 2`, `5/2 → 2`), which is what the
/// tables have always been generated with. The computation is exact integer
/// arithmetic.
pub fn ratio(n: i64, m: i64) -> Option<i64> {
    if m == 0 {
        return None;
    }
    let (n, m) = if m < 0 { (-n, -m) } else { (n, m) };
    let q = n.div_euclid(m);
    let r = n.rem_euclid(m);
    let rounded = match (2 * r).cmp(&m) {
        std::cmp::Ordering::Less => q,
        std::cmp::Ordering::Greater => q + 1,
        std::cmp::Ordering::Equal if q % 2 == 0 => q,
        std::cmp::Ordering::Equal => q + 1,
    };
    Some(rounded)
}

/// A named line count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Metric {
    pub name: String,
    pub lines: i64,
}

/// Metrics in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct MetricSet {
    metrics: Vec<Metric>,
}

impl MetricSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a metric. Names are expected to be unique.
    pub fn push(&mut self, name: impl Into<String>, lines: i64) -> &mut Self {
        self.metrics.push(Metric {
            name: name.into(),
            lines,
        });
        self
    }

    /// Look up a metric by name.
    pub fn get(&self, name: &str) -> Option<i64> {
        self.metrics
            .iter()
            .find(|m| m.name == name)
            .map(|m| m.lines)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Metric> {
        self.metrics.iter()
    }

    pub fn len(&self) -> usize {
        self.metrics.len()
    }

    pub fn is_empty(&self) -> bool {
        self.metrics.is_empty()
    }
}

/// A row of a component table (`Component`, `Lines of Coq`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentRow {
    pub component: String,
    pub lines: i64,
}

impl ComponentRow {
    pub fn new(component: impl Into<String>, lines: i64) -> Self {
        Self {
            component: component.into(),
            lines,
        }
    }
}

/// Components of one project plus a total row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComponentTable {
    pub rows: Vec<ComponentRow>,
    pub total: ComponentRow,
}

impl ComponentTable {
    pub const HEADERS: [&'static str; 2] = ["Component", "Lines of Coq"];

    /// Build a table whose total row sums `rows`.
    pub fn new(rows: Vec<ComponentRow>, total_label: impl Into<String>) -> Self {
        let total = rows.iter().map(|r| r.lines).sum();
        Self {
            rows,
            total: ComponentRow::new(total_label, total),
        }
    }
}

/// One implementation layer: its code, its proof, and the proof:code ratio.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerRow {
    pub layer: String,
    /// Lines of Go, `None` for proof-only rows
    pub code: Option<i64>,
    /// Lines of Coq
    pub proof: i64,
    pub ratio: Option<i64>,
    /// Code and ratio are shared with the row above
    pub continues: bool,
}

impl LayerRow {
    /// A layer with code and proof; the ratio is `proof / code`.
    pub fn new(layer: impl Into<String>, code: i64, proof: i64) -> Self {
        Self::with_ratio(layer, code, proof, ratio(proof, code))
    }

    /// A layer whose ratio covers more proof than this row shows.
    pub fn with_ratio(layer: impl Into<String>, code: i64, proof: i64, ratio: Option<i64>) -> Self {
        Self {
            layer: layer.into(),
            code: Some(code),
            proof,
            ratio,
            continues: false,
        }
    }

    /// Proof with no code of its own.
    pub fn proof_only(layer: impl Into<String>, proof: i64) -> Self {
        Self {
            layer: layer.into(),
            code: None,
            proof,
            ratio: None,
            continues: false,
        }
    }

    /// Mark this row as the second half of the row above.
    pub fn continues(mut self) -> Self {
        self.continues = true;
        self
    }
}

/// Implementation layers plus a total row.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LayerTable {
    pub rows: Vec<LayerRow>,
    pub total: LayerRow,
}

impl LayerTable {
    pub const HEADERS: [&'static str; 4] = ["layer", "Lines of code", "Lines of proof", "Ratio"];

    /// Build a table whose total sums the present code and proof cells.
    pub fn new(rows: Vec<LayerRow>, total_label: impl Into<String>) -> Self {
        let code: i64 = rows.iter().filter_map(|r| r.code).sum();
        let proof: i64 = rows.iter().map(|r| r.proof).sum();
        Self {
            rows,
            total: LayerRow::new(total_label, code, proof),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio_zero_denominator() {
        assert_eq!(ratio(0, 0), None);
        assert_eq!(ratio(17, 0), None);
        assert_eq!(ratio(-3, 0), None);
    }

    #[test]
    fn test_ratio_rounding() {
        assert_eq!(ratio(5, 3), Some(2));
        assert_eq!(ratio(3, 5), Some(1));
        assert_eq!(ratio(6, 3), Some(2));
        assert_eq!(ratio(0, 7), Some(0));
        assert_eq!(ratio(2, 5), Some(0));
        assert_eq!(ratio(4600, 1000), Some(5));
    }

    #[test]
    fn test_ratio_ties_to_even() {
        assert_eq!(ratio(1, 2), Some(0));
        assert_eq!(ratio(3, 2), Some(2));
        assert_eq!(ratio(5, 2), Some(2));
        assert_eq!(ratio(7, 2), Some(4));
        assert_eq!(ratio(-1, 2), Some(0));
        assert_eq!(ratio(-3, 2), Some(-2));
        assert_eq!(ratio(3, -2), Some(-2));
    }

    #[test]
    fn test_metric_set_keeps_order() {
        let mut set = MetricSet::new();
        set.push("code", 100).push("total", 140);
        set.push("proof", set.get("total").unwrap() - set.get("code").unwrap());

        let names: Vec<&str> = set.iter().map(|m| m.name.as_str()).collect();
        assert_eq!(names, vec!["code", "total", "proof"]);
        assert_eq!(set.get("proof"), Some(40));
        assert_eq!(set.get("spec"), None);
        assert_eq!(set.len(), 3);
    }

    #[test]
    fn test_component_table_total() {
        let table = ComponentTable::new(
            vec![ComponentRow::new("a", 10), ComponentRow::new("b", 32)],
            "Total",
        );
        assert_eq!(table.total, ComponentRow::new("Total", 42));
    }

    #[test]
    fn test_layer_rows() {
        let row = LayerRow::new("obj", 100, 460);
        assert_eq!(row.ratio, Some(5));
        assert!(!row.continues);

        let empty = LayerRow::new("empty", 0, 0);
        assert_eq!(empty.code, Some(0));
        assert_eq!(empty.ratio, None);

        let cont = LayerRow::proof_only("wal", 50).continues();
        assert_eq!(cont.code, None);
        assert_eq!(cont.ratio, None);
        assert!(cont.continues);
    }

    #[test]
    fn test_layer_total_ignores_missing_code() {
        let table = LayerTable::new(
            vec![
                LayerRow::new("circular", 100, 300),
                LayerRow::proof_only("refinement", 200),
                LayerRow::new("txn", 100, 500),
            ],
            "GoTxn total",
        );
        assert_eq!(table.total.code, Some(200));
        assert_eq!(table.total.proof, 1000);
        assert_eq!(table.total.ratio, Some(5));
    }
}
