//! Ordered column selection.

/// A set of column names that keeps the order in which columns were selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ColumnSelection {
    columns: Vec<String>,
}

impl ColumnSelection {
    pub fn from_columns(columns: &[String]) -> Self {
        let mut selection = Self::default();
        selection.select_all(columns);
        selection
    }

    /// Add `column` if absent, remove it if present.
    pub fn toggle(&mut self, column: &str) {
        if let Some(pos) = self.columns.iter().position(|c| c == column) {
            self.columns.remove(pos);
        } else {
            self.columns.push(column.to_string());
        }
    }

    /// Replace the selection with `columns` (duplicates collapse).
    pub fn select_all(&mut self, columns: &[String]) {
        self.columns.clear();
        for column in columns {
            if !self.contains(column) {
                self.columns.push(column.clone());
            }
        }
    }

    pub fn clear(&mut self) {
        self.columns.clear();
    }

    pub fn contains(&self, column: &str) -> bool {
        self.columns.iter().any(|c| c == column)
    }

    pub fn len(&self) -> usize {
        self.columns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.columns.is_empty()
    }

    pub fn as_slice(&self) -> &[String] {
        &self.columns
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.columns.clone()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cols(names: &[&str]) -> Vec<String> {
        names.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn toggle_twice_restores_selection() {
        let mut selection = ColumnSelection::from_columns(&cols(&["id", "val"]));
        let before = selection.clone();

        selection.toggle("val");
        assert_eq!(selection.as_slice(), cols(&["id"]).as_slice());
        selection.toggle("val");
        assert_eq!(selection, before);

        selection.toggle("extra");
        selection.toggle("extra");
        assert_eq!(selection, before);
    }

    #[test]
    fn toggle_on_appends() {
        let mut selection = ColumnSelection::default();
        selection.toggle("b");
        selection.toggle("a");
        assert_eq!(selection.as_slice(), cols(&["b", "a"]).as_slice());
    }

    #[test]
    fn select_all_replaces_and_dedups() {
        let mut selection = ColumnSelection::from_columns(&cols(&["x"]));
        selection.select_all(&cols(&["a", "b", "a"]));
        assert_eq!(selection.as_slice(), cols(&["a", "b"]).as_slice());
        selection.clear();
        assert!(selection.is_empty());
    }
}
