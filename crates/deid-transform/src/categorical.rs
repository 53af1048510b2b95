//! Categorical generalization: value-to-label substitution.

use std::collections::BTreeMap;

use deid_model::CellValue;

/// Per-column, per-run mapping from original values to `CATEGORYnn` labels.
///
/// Labels are assigned in first-appearance order while scanning the column
/// top to bottom. A missing cell counts as one distinct value and receives
/// a label of its own. Labels are not stable across columns or runs.
#[derive(Debug, Default)]
pub struct CategoryMap {
    labels: BTreeMap<Option<String>, String>,
}

impl CategoryMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the label for a cell, assigning the next `CATEGORYnn` on
    /// first sight.
    pub fn label_for(&mut self, cell: &CellValue) -> String {
        let key = cell.as_text().map(str::to_string);
        if let Some(label) = self.labels.get(&key) {
            return label.clone();
        }
        let label = format!("CATEGORY{:02}", self.labels.len() + 1);
        self.labels.insert(key, label.clone());
        label
    }

    pub fn len(&self) -> usize {
        self.labels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.labels.is_empty()
    }
}
