//! Wire types for the transfer backend.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::models::{ConnectionConfig, Delimiter, FileSelection, PreviewResult, PreviewRow};

/// Backend endpoint paths, relative to the configured base URL.
pub mod endpoints {
    pub const CONNECT: &str = "connect_clickhouse";
    pub const TABLE_SCHEMA: &str = "get_table_schema";
    pub const PREVIEW_TABLE: &str = "preview_table_data";
    pub const PREVIEW_FILE: &str = "preview_csv_data";
    pub const UPLOAD: &str = "upload_csv_to_clickhouse";
    pub const EXPORT: &str = "export_clickhouse_to_csv";
    pub const JOIN: &str = "join_tables";
    pub const TOKEN: &str = "generate_token";
}

/// Request body that carries the connection fields next to its own.
#[derive(Serialize)]
pub(crate) struct WithConnection<'a, T: Serialize> {
    #[serde(flatten)]
    pub connection: &'a ConnectionConfig,
    #[serde(flatten)]
    pub body: &'a T,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct TableRequest<'a> {
    pub table: &'a str,
}

#[derive(Debug, Clone, Serialize)]
pub(crate) struct TablePreviewRequest<'a> {
    pub table: &'a str,
    pub columns: &'a [String],
}

/// CSV -> ClickHouse upload parameters.
#[derive(Debug, Clone)]
pub struct UploadRequest {
    pub file: FileSelection,
    pub delimiter: Delimiter,
    pub table: String,
    pub columns: Vec<String>,
}

/// ClickHouse -> CSV export parameters.
#[derive(Debug, Clone, Serialize)]
pub struct ExportRequest {
    pub table: String,
    pub columns: Vec<String>,
    pub filename: String,
    pub delimiter: Delimiter,
}

/// Multi-table join; `preview_only` limits the backend to a sample and skips the export.
#[derive(Debug, Clone, Serialize)]
pub struct JoinRequest {
    pub tables: Vec<String>,
    pub join_conditions: Vec<String>,
    /// Selected columns per table.
    pub columns: BTreeMap<String, Vec<String>>,
    pub preview_only: bool,
}

#[derive(Debug, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct TablesResponse {
    #[serde(default)]
    pub tables: Vec<String>,
}

/// Column description returned by the schema endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ColumnInfo {
    pub name: String,
    #[serde(rename = "type", default)]
    pub data_type: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct SchemaResponse {
    #[serde(default)]
    pub schema: Option<Vec<ColumnInfo>>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct PreviewResponse {
    #[serde(default)]
    pub data: Option<Vec<PreviewRow>>,
    #[serde(default)]
    pub columns: Vec<String>,
    #[serde(default)]
    pub total_rows: Option<usize>,
}

impl PreviewResponse {
    pub(crate) fn into_preview(self) -> Result<PreviewResult> {
        let Some(rows) = self.data else {
            return Err(Error::UnexpectedResponse("preview response has no data".into()));
        };
        let total_rows = self.total_rows.unwrap_or(rows.len());
        Ok(PreviewResult { columns: self.columns, rows, total_rows })
    }
}

/// Outcome of an upload, export or join export.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct TransferSummary {
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub records_processed: u64,
}

/// Response of the join endpoint, shared by preview and export calls.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct JoinResponse {
    #[serde(default)]
    pub data: Option<Vec<PreviewRow>>,
    #[serde(default)]
    pub columns: Option<Vec<String>>,
    #[serde(default)]
    pub total_rows: Option<u64>,
    #[serde(default)]
    pub records_processed: Option<u64>,
    #[serde(default)]
    pub message: Option<String>,
}

impl JoinResponse {
    pub fn into_preview(self) -> Result<PreviewResult> {
        let Some(rows) = self.data else {
            return Err(Error::UnexpectedResponse("join response has no data".into()));
        };
        let total_rows = self.total_rows.map(|n| n as usize).unwrap_or(rows.len());
        Ok(PreviewResult { columns: self.columns.unwrap_or_default(), rows, total_rows })
    }

    /// Summary of a join export. The join endpoint reports its row count as
    /// `total_rows`; an explicit `records_processed` takes precedence when present.
    pub fn into_summary(self) -> TransferSummary {
        TransferSummary {
            records_processed: self.records_processed.or(self.total_rows).unwrap_or(0),
            message: self.message,
        }
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct TokenResponse {
    pub token: Option<String>,
}

#[cfg(test)]
mod tests {
    use serde_json::json;

    use super::*;

    #[test]
    fn connection_fields_flatten_into_request_body() {
        let connection = ConnectionConfig::default();
        let body = TablePreviewRequest { table: "events", columns: &["id".to_string()] };
        let value =
            serde_json::to_value(WithConnection { connection: &connection, body: &body }).unwrap();

        assert_eq!(value["host"], "localhost");
        assert_eq!(value["token"], "");
        assert_eq!(value["table"], "events");
        assert_eq!(value["columns"], json!(["id"]));
    }

    #[test]
    fn join_summary_uses_total_rows_when_records_missing() {
        let response: JoinResponse = serde_json::from_value(json!({
            "columns": ["a_id"],
            "data": [],
            "total_rows": 12,
            "message": "Join exported successfully with 12 records."
        }))
        .unwrap();
        let summary = response.into_summary();
        assert_eq!(summary.records_processed, 12);
        assert_eq!(summary.message.as_deref(), Some("Join exported successfully with 12 records."));
    }

    #[test]
    fn join_summary_prefers_records_processed() {
        let response: JoinResponse =
            serde_json::from_value(json!({ "total_rows": 100, "records_processed": 7 })).unwrap();
        assert_eq!(response.into_summary().records_processed, 7);
    }

    #[test]
    fn preview_without_data_is_unexpected() {
        let response: PreviewResponse = serde_json::from_value(json!({ "columns": ["a"] })).unwrap();
        assert!(matches!(response.into_preview(), Err(Error::UnexpectedResponse(_))));
    }

    #[test]
    fn preview_total_defaults_to_row_count() {
        let response: PreviewResponse = serde_json::from_value(json!({
            "columns": ["a"],
            "data": [{ "a": 1 }, { "a": 2 }]
        }))
        .unwrap();
        let preview = response.into_preview().unwrap();
        assert_eq!(preview.total_rows, 2);
        assert_eq!(preview.columns, vec!["a".to_string()]);
    }
}
