//! Preview row-sets.

use serde_json::{Map, Value};

/// One preview row: column name -> value.
pub type PreviewRow = Map<String, Value>;

/// A bounded, read-only sample of rows rendered against `columns`.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PreviewResult {
    pub columns: Vec<String>,
    pub rows: Vec<PreviewRow>,
    pub total_rows: usize,
}

impl PreviewResult {
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Display text for one cell. Missing and null values render empty.
    pub fn cell(&self, row: usize, column: &str) -> String {
        match self.rows.get(row).and_then(|r| r.get(column)) {
            None | Some(Value::Null) => String::new(),
            Some(Value::String(s)) => s.clone(),
            Some(other) => other.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn cell_formats_values() {
        let row = json!({ "id": 1, "name": "Alice", "note": null, "ok": true });
        let preview = PreviewResult {
            columns: vec!["id".into(), "name".into(), "note".into(), "ok".into(), "gone".into()],
            rows: vec![row.as_object().cloned().unwrap()],
            total_rows: 1,
        };
        assert_eq!(preview.cell(0, "id"), "1");
        assert_eq!(preview.cell(0, "name"), "Alice");
        assert_eq!(preview.cell(0, "note"), "");
        assert_eq!(preview.cell(0, "ok"), "true");
        assert_eq!(preview.cell(0, "gone"), "");
        assert_eq!(preview.cell(3, "id"), "");
    }
}
