//! Multi-table join builder.

use std::collections::BTreeMap;

use super::selection::ColumnSelection;

pub const JOIN_VALIDATION_MESSAGE: &str =
    "Please select at least two tables and specify all join conditions";

/// Tables and predicates of a join export.
///
/// `conditions[i]` joins `tables[i + 1]` onto the tables before it, so there is always one
/// condition fewer than tables while the builder is open.
#[derive(Debug, Clone, Default)]
pub struct JoinBuilder {
    open: bool,
    tables: Vec<String>,
    conditions: Vec<String>,
    table_columns: BTreeMap<String, Vec<String>>,
    selected_columns: BTreeMap<String, ColumnSelection>,
}

impl JoinBuilder {
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Open the panel, reseeding it with `anchor` as the only table.
    pub fn open_with(&mut self, anchor: &str) {
        self.open = true;
        self.tables = vec![anchor.to_string()];
        self.conditions.clear();
    }

    /// Hide the panel. The lists are kept until the next open.
    pub fn close(&mut self) {
        self.open = false;
    }

    pub fn tables(&self) -> &[String] {
        &self.tables
    }

    pub fn conditions(&self) -> &[String] {
        &self.conditions
    }

    pub fn add_table(&mut self) {
        self.tables.push(String::new());
        self.conditions.push(String::new());
    }

    /// Remove table `index` and the condition that joined it. The anchor cannot be removed.
    pub fn remove_table(&mut self, index: usize) -> bool {
        if index == 0 || index >= self.tables.len() {
            return false;
        }
        self.tables.remove(index);
        if index - 1 < self.conditions.len() {
            self.conditions.remove(index - 1);
        }
        true
    }

    pub fn set_table(&mut self, index: usize, table: &str) -> bool {
        match self.tables.get_mut(index) {
            Some(slot) => {
                *slot = table.to_string();
                true
            }
            None => false,
        }
    }

    pub fn set_condition(&mut self, index: usize, condition: &str) -> bool {
        match self.conditions.get_mut(index) {
            Some(slot) => {
                *slot = condition.to_string();
                true
            }
            None => false,
        }
    }

    /// At least two tables and no empty condition. Conditions are sent verbatim.
    pub fn is_ready(&self) -> bool {
        self.tables.len() >= 2 && self.conditions.iter().all(|c| !c.is_empty())
    }

    pub fn validate(&self) -> Result<(), &'static str> {
        if self.is_ready() { Ok(()) } else { Err(JOIN_VALIDATION_MESSAGE) }
    }

    /// Cache the columns of `table` and select all of them.
    pub fn store_columns(&mut self, table: &str, columns: Vec<String>) {
        self.selected_columns.insert(table.to_string(), ColumnSelection::from_columns(&columns));
        self.table_columns.insert(table.to_string(), columns);
    }

    /// Cache `columns` for `table` but keep an explicit selection.
    pub fn store_columns_with_selection(
        &mut self,
        table: &str,
        columns: Vec<String>,
        selection: ColumnSelection,
    ) {
        self.selected_columns.insert(table.to_string(), selection);
        self.table_columns.insert(table.to_string(), columns);
    }

    pub fn columns_of(&self, table: &str) -> &[String] {
        self.table_columns.get(table).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn selected_columns_of(&self, table: &str) -> Option<&ColumnSelection> {
        self.selected_columns.get(table)
    }

    pub fn toggle_column(&mut self, table: &str, column: &str) {
        self.selected_columns.entry(table.to_string()).or_default().toggle(column);
    }

    /// Selected columns of the tables currently in the join, for the join request.
    pub fn request_columns(&self) -> BTreeMap<String, Vec<String>> {
        self.tables
            .iter()
            .filter_map(|table| {
                let selection = self.selected_columns.get(table)?;
                Some((table.clone(), selection.to_vec()))
            })
            .collect()
    }
}
