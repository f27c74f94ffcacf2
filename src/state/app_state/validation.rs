//! Action gating and request snapshots.
//!
//! `can_*` mirror button enablement. The `*_request` builders run the same checks an
//! action performs before it goes out and return the message to show when it cannot.

use crate::connection::{ExportRequest, JoinRequest, UploadRequest};
use crate::models::{Delimiter, FileSelection, TransferDirection};

use super::AppState;

pub const FILE_REQUIRED_MESSAGE: &str = "Please select a file first";
pub const COLUMN_REQUIRED_MESSAGE: &str = "Please select at least one column";
pub const TABLE_AND_COLUMNS_REQUIRED_MESSAGE: &str = "Please select a table and at least one column";

/// A table preview: table plus the columns to fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TablePreview {
    pub table: String,
    pub columns: Vec<String>,
}

impl AppState {
    pub fn table_preview_request(&self) -> Result<TablePreview, &'static str> {
        if self.selected_table.is_empty() || self.selected_columns.is_empty() {
            return Err(TABLE_AND_COLUMNS_REQUIRED_MESSAGE);
        }
        Ok(TablePreview {
            table: self.selected_table.clone(),
            columns: self.selected_columns.to_vec(),
        })
    }

    pub fn file_preview_request(&self) -> Result<(FileSelection, Delimiter), &'static str> {
        let file = self.file.clone().ok_or(FILE_REQUIRED_MESSAGE)?;
        Ok((file, self.delimiter))
    }

    pub fn upload_request(&self) -> Result<UploadRequest, &'static str> {
        let file = self.file.clone().ok_or(FILE_REQUIRED_MESSAGE)?;
        if self.selected_csv_columns.is_empty() {
            return Err(COLUMN_REQUIRED_MESSAGE);
        }
        Ok(UploadRequest {
            file,
            delimiter: self.delimiter,
            table: self.upload_table_name(),
            columns: self.selected_csv_columns.to_vec(),
        })
    }

    pub fn export_request(&self) -> Result<ExportRequest, &'static str> {
        let preview = self.table_preview_request()?;
        Ok(ExportRequest {
            table: preview.table,
            columns: preview.columns,
            filename: self.export_file_name.clone(),
            delimiter: self.delimiter,
        })
    }

    pub fn join_request(&self, preview_only: bool) -> Result<JoinRequest, &'static str> {
        self.join.validate()?;
        Ok(JoinRequest {
            tables: self.join.tables().to_vec(),
            join_conditions: self.join.conditions().to_vec(),
            columns: self.join.request_columns(),
            preview_only,
        })
    }

    pub fn can_connect(&self) -> bool {
        !self.is_loading()
    }

    pub fn can_load_schema(&self) -> bool {
        !self.is_loading() && !self.selected_table.is_empty()
    }

    pub fn can_preview_table(&self) -> bool {
        !self.is_loading() && !self.selected_columns.is_empty()
    }

    pub fn can_preview_file(&self) -> bool {
        !self.is_loading() && self.file.is_some()
    }

    pub fn can_preview_join(&self) -> bool {
        !self.is_loading() && self.join.is_ready()
    }

    pub fn can_upload(&self) -> bool {
        !self.is_loading()
            && self.file.is_some()
            && !self.selected_csv_columns.is_empty()
            && !self.target_table_name.is_empty()
    }

    pub fn can_export(&self) -> bool {
        if self.is_loading() {
            return false;
        }
        if self.join.is_open() {
            self.join.is_ready()
        } else {
            !self.selected_columns.is_empty() && !self.selected_table.is_empty()
        }
    }

    /// Enablement of the single execute button for the current direction.
    pub fn can_execute(&self) -> bool {
        match self.direction {
            TransferDirection::ToClickHouse => self.can_upload(),
            TransferDirection::FromClickHouse => self.can_export(),
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::connection::BackendClient;
    use crate::models::{DataSource, PreviewResult};
    use crate::state::app_state::{PreviewSource, RequestKind};
    use crate::state::events::AppEvent;
    use crate::state::settings::AppSettings;

    use super::*;

    fn state() -> AppState {
        let client = BackendClient::new("http://localhost:5000").unwrap();
        AppState::with_client(AppSettings::default(), client)
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn upload_needs_file_then_columns() {
        let mut state = state();
        assert_eq!(state.upload_request().unwrap_err(), FILE_REQUIRED_MESSAGE);

        state.apply(AppEvent::FileSelected(FileSelection::new("sales.csv")));
        assert_eq!(state.upload_request().unwrap_err(), COLUMN_REQUIRED_MESSAGE);
        assert!(!state.can_upload());
    }

    #[test]
    fn scenario_flat_file_to_clickhouse() {
        let mut state = state();
        state.apply(AppEvent::DataSourceChanged(DataSource::FlatFile));
        state.apply(AppEvent::FileSelected(FileSelection::new("/tmp/sales.csv")));
        assert_eq!(state.target_table_name, "sales");

        let ticket = state.begin_request(RequestKind::Preview);
        state.apply(AppEvent::PreviewLoaded {
            ticket,
            source: PreviewSource::File,
            preview: PreviewResult {
                columns: strings(&["id", "name", "amount"]),
                rows: Vec::new(),
                total_rows: 0,
            },
        });
        assert_eq!(state.selected_csv_columns().len(), 3);
        assert!(state.can_upload());

        state.apply(AppEvent::CsvColumnToggled("amount".into()));
        assert_eq!(state.selected_csv_columns().len(), 2);
        assert!(state.can_execute());

        state.apply(AppEvent::AllColumnsDeselected);
        assert!(!state.can_upload());

        state.apply(AppEvent::AllColumnsSelected);
        let request = state.upload_request().unwrap();
        assert_eq!(request.table, "sales");
        assert_eq!(request.columns, strings(&["id", "name", "amount"]));
    }

    #[test]
    fn upload_falls_back_to_default_table() {
        let mut state = state();
        state.apply(AppEvent::FileSelected(FileSelection::new("sales.csv")));
        state.apply(AppEvent::CsvColumnToggled("id".into()));
        state.target_table_name = "  ".into();
        assert_eq!(state.upload_request().unwrap().table, "imported_data");
    }

    #[test]
    fn export_requires_table_and_columns() {
        let mut state = state();
        state.apply(AppEvent::DirectionChanged(TransferDirection::FromClickHouse));
        assert_eq!(state.export_request().unwrap_err(), TABLE_AND_COLUMNS_REQUIRED_MESSAGE);
        assert!(!state.can_execute());

        state.apply(AppEvent::TableSelected("a".into()));
        let ticket = state.begin_request(RequestKind::Schema);
        state.apply(AppEvent::SchemaLoaded {
            ticket,
            table: "a".into(),
            columns: strings(&["id", "val"]),
        });
        state.apply(AppEvent::TableColumnToggled("val".into()));
        assert!(state.can_export());

        let request = state.export_request().unwrap();
        assert_eq!(request.columns, strings(&["id"]));
        assert_eq!(request.filename, "export.csv");
    }

    #[test]
    fn join_export_gated_on_conditions() {
        let mut state = state();
        state.apply(AppEvent::DirectionChanged(TransferDirection::FromClickHouse));
        state.apply(AppEvent::TableSelected("a".into()));
        state.apply(AppEvent::JoinPanelToggled);
        state.apply(AppEvent::JoinTableAdded);
        state.apply(AppEvent::JoinTableChanged { index: 1, table: "b".into() });
        assert!(!state.can_export());
        assert!(state.join_request(true).is_err());

        state.apply(AppEvent::JoinConditionChanged { index: 0, condition: "a.id=b.a_id".into() });
        assert!(state.can_preview_join());
        let request = state.join_request(false).unwrap();
        assert_eq!(request.tables, strings(&["a", "b"]));
        assert_eq!(request.join_conditions, strings(&["a.id=b.a_id"]));
        assert!(!request.preview_only);
    }

    #[test]
    fn loading_disables_actions() {
        let mut state = state();
        state.apply(AppEvent::FileSelected(FileSelection::new("sales.csv")));
        assert!(state.can_preview_file());
        let _ticket = state.begin_request(RequestKind::Connect);
        assert!(!state.can_connect());
        assert!(!state.can_preview_file());
    }
}
