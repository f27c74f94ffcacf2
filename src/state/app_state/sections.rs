//! Which parts of the wizard are shown for the current state.

use crate::models::{DataSource, TransferDirection};
use crate::state::TransferStatus;

use super::AppState;

/// Visibility of every conditional wizard section.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct VisibleSections {
    pub connection: bool,
    pub flat_file: bool,
    pub file_picker: bool,
    pub file_preview_button: bool,
    pub export_file_name: bool,
    pub clickhouse_table: bool,
    pub table_picker: bool,
    pub load_columns_button: bool,
    pub target_table_name: bool,
    pub column_list: bool,
    pub table_actions: bool,
    pub join_panel: bool,
    pub csv_columns: bool,
    pub preview: bool,
    pub status_panel: bool,
    pub status_line: bool,
    pub progress: bool,
    pub upload_button: bool,
    pub export_button: bool,
}

impl AppState {
    pub fn sections(&self) -> VisibleSections {
        let source = self.data_source;
        let to_clickhouse = self.direction == TransferDirection::ToClickHouse;
        let from_clickhouse = !to_clickhouse;

        let flat_file = source == DataSource::FlatFile || from_clickhouse;
        let clickhouse_table = (source == DataSource::ClickHouse && from_clickhouse)
            || (source == DataSource::FlatFile && to_clickhouse && !self.available_tables.is_empty());
        let has_table_columns = !self.table_columns.is_empty();

        VisibleSections {
            connection: source == DataSource::ClickHouse || to_clickhouse,
            flat_file,
            file_picker: flat_file && to_clickhouse,
            file_preview_button: flat_file && to_clickhouse && self.file.is_some(),
            export_file_name: flat_file && from_clickhouse,
            clickhouse_table,
            table_picker: clickhouse_table && from_clickhouse,
            load_columns_button: clickhouse_table
                && from_clickhouse
                && !self.selected_table.is_empty(),
            target_table_name: clickhouse_table && to_clickhouse,
            column_list: clickhouse_table
                && from_clickhouse
                && !self.join.is_open()
                && has_table_columns,
            table_actions: clickhouse_table && from_clickhouse && has_table_columns,
            join_panel: from_clickhouse && self.join.is_open(),
            csv_columns: source == DataSource::FlatFile
                && to_clickhouse
                && !self.csv_columns.is_empty(),
            preview: self.preview.as_ref().is_some_and(|p| !p.rows.is_empty()),
            status_panel: self.status != TransferStatus::Idle
                || self.message.is_some()
                || self.error_message.is_some(),
            status_line: self.status != TransferStatus::Idle,
            progress: self.progress.visible,
            upload_button: to_clickhouse,
            export_button: from_clickhouse,
        }
    }
}
