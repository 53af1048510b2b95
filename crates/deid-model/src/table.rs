#![deny(unsafe_code)]

/// One cell of a dataset.
///
/// Cells are either present text or missing. Numeric interpretation is left
/// to the policy that consumes the cell, so untouched columns round-trip
/// exactly as they were read.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(tag = "kind", content = "value")]
pub enum CellValue {
    Text(String),
    Missing,
}

impl CellValue {
    /// Builds a cell from raw CSV field text. Empty after trimming means missing.
    pub fn from_raw(raw: &str) -> Self {
        let trimmed = raw.trim().trim_matches('\u{feff}');
        if trimmed.is_empty() {
            CellValue::Missing
        } else {
            CellValue::Text(trimmed.to_string())
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            CellValue::Text(text) => Some(text),
            CellValue::Missing => None,
        }
    }

    pub fn is_missing(&self) -> bool {
        matches!(self, CellValue::Missing)
    }
}

/// An in-memory tabular dataset: a header row plus data rows.
///
/// Every row has exactly one cell per header; `push_row` pads or truncates
/// to keep that invariant.
#[derive(Debug, Clone)]
pub struct Dataset {
    pub headers: Vec<String>,
    pub rows: Vec<Vec<CellValue>>,
}

impl Dataset {
    pub fn new(headers: Vec<String>) -> Self {
        Self {
            headers,
            rows: Vec::new(),
        }
    }

    pub fn push_row(&mut self, mut row: Vec<CellValue>) {
        row.resize(self.headers.len(), CellValue::Missing);
        self.rows.push(row);
    }

    /// Index of a column by exact, case-sensitive header match.
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.headers.iter().position(|header| header == name)
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn column_count(&self) -> usize {
        self.headers.len()
    }
}
