// File: crates/slope-core/src/dataset.rs
// Summary: Tabular dataset model and column extraction into parallel sequences.

/// One table cell, carrying both the host's display string and the parsed
/// numeric form. Category cells typically have no parsed value; numeric
/// cells need one to be usable.
#[derive(Clone, Debug, PartialEq)]
pub struct Cell {
    pub formatted: String,
    pub parsed: Option<f64>,
}

impl Cell {
    pub fn text(s: impl Into<String>) -> Self {
        Self { formatted: s.into(), parsed: None }
    }

    pub fn number(v: f64) -> Self {
        Self { formatted: format_value(v), parsed: Some(v) }
    }
}

/// One row: category / value A / value B, in fixed positions.
#[derive(Clone, Debug, PartialEq)]
pub struct Row {
    pub category: Cell,
    pub value1: Cell,
    pub value2: Cell,
}

impl Row {
    pub fn new(category: impl Into<String>, value1: f64, value2: f64) -> Self {
        Self {
            category: Cell::text(category),
            value1: Cell::number(value1),
            value2: Cell::number(value2),
        }
    }
}

/// Ordered sequence of rows; row order is extraction order.
pub type Dataset = Vec<Row>;

/// Parallel, index-aligned column sequences produced from a dataset.
/// `skipped` holds the original indices of rows dropped as malformed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Columns {
    pub categories: Vec<String>,
    pub value1: Vec<f64>,
    pub value2: Vec<f64>,
    pub skipped: Vec<usize>,
}

impl Columns {
    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }

    /// Pooled min/max over both value columns, or None when no valid rows.
    pub fn domain(&self) -> Option<(f64, f64)> {
        let mut min = f64::INFINITY;
        let mut max = f64::NEG_INFINITY;
        for &v in self.value1.iter().chain(self.value2.iter()) {
            min = min.min(v);
            max = max.max(v);
        }
        if min.is_finite() && max.is_finite() {
            Some((min, max))
        } else {
            None
        }
    }
}

/// Extract three parallel columns from the dataset. Rows whose numeric cells
/// fail to parse (or parse to a non-finite value) are skipped and reported
/// via `Columns::skipped`, so NaN never reaches a drawn coordinate.
pub fn extract_columns(dataset: &Dataset) -> Columns {
    let mut out = Columns::default();
    for (i, row) in dataset.iter().enumerate() {
        match (numeric(&row.value1), numeric(&row.value2)) {
            (Some(v1), Some(v2)) => {
                out.categories.push(row.category.formatted.clone());
                out.value1.push(v1);
                out.value2.push(v2);
            }
            _ => out.skipped.push(i),
        }
    }
    out
}

fn numeric(cell: &Cell) -> Option<f64> {
    cell.parsed.filter(|v| v.is_finite())
}

/// Display form for a numeric label: integers without a decimal point,
/// everything else in shortest round-trip form.
pub fn format_value(v: f64) -> String {
    if v.fract() == 0.0 && v.abs() < 1e15 {
        format!("{}", v as i64)
    } else {
        format!("{}", v)
    }
}
