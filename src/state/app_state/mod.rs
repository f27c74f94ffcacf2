//! Global wizard state.

mod join;
mod reducer;
mod requests;
mod sections;
mod selection;
mod transfer;
mod validation;

pub use join::{JOIN_VALIDATION_MESSAGE, JoinBuilder};
pub(crate) use requests::RequestTracker;
pub use requests::{RequestKind, RequestTicket};
pub use sections::VisibleSections;
pub use selection::ColumnSelection;
pub use transfer::{
    PROGRESS_AWAITING, PROGRESS_DONE, PROGRESS_STARTED, PreviewSource, ProgressState,
    TransferKind,
};
pub use validation::{
    COLUMN_REQUIRED_MESSAGE, FILE_REQUIRED_MESSAGE, TABLE_AND_COLUMNS_REQUIRED_MESSAGE,
    TablePreview,
};

use crate::connection::BackendClient;
use crate::error::Result;
use crate::models::{
    ConnectionConfig, DataSource, Delimiter, FileSelection, PreviewResult, TokenPayload,
    TransferDirection,
};
use crate::state::settings::AppSettings;
use crate::state::{ConfigManager, StatusMessage, TransferStatus};

/// Global wizard state
pub struct AppState {
    // Persisted state
    pub settings: AppSettings,
    config: Option<ConfigManager>,

    // Backend client (injected for testability)
    client: BackendClient,

    // Form fields, edited in place by the views
    pub connection: ConnectionConfig,
    pub delimiter: Delimiter,
    pub export_file_name: String,
    pub target_table_name: String,
    pub token_payload: TokenPayload,

    // Source selection
    data_source: DataSource,
    direction: TransferDirection,
    file: Option<FileSelection>,

    // Tables and columns
    available_tables: Vec<String>,
    selected_table: String,
    table_columns: Vec<String>,
    selected_columns: ColumnSelection,
    csv_columns: Vec<String>,
    selected_csv_columns: ColumnSelection,
    join: JoinBuilder,

    preview: Option<PreviewResult>,

    // Feedback
    status: TransferStatus,
    message: Option<String>,
    error_message: Option<String>,
    records_processed: u64,
    progress: ProgressState,
    token_dialog_open: bool,

    requests: RequestTracker,
}

impl AppState {
    /// Create new AppState from the settings on disk.
    pub fn load() -> Result<Self> {
        let config = ConfigManager::new()
            .map_err(|e| log::warn!("Failed to open config directory: {:#}", e))
            .ok();
        let settings = config
            .as_ref()
            .map(|config| {
                config.load_settings().unwrap_or_else(|e| {
                    log::warn!("Failed to load settings: {:#}", e);
                    AppSettings::default()
                })
            })
            .unwrap_or_default();

        let mut state = Self::with_settings(settings)?;
        state.config = config;
        Ok(state)
    }

    /// Create new AppState with a client built from `settings`.
    pub fn with_settings(settings: AppSettings) -> Result<Self> {
        let client = BackendClient::with_timeout(
            settings.backend.resolved_base_url(),
            settings.backend.request_timeout(),
        )?;
        Ok(Self::with_client(settings, client))
    }

    /// Create new AppState with a custom BackendClient (for testing)
    pub fn with_client(settings: AppSettings, client: BackendClient) -> Self {
        Self {
            connection: settings.connection.to_config(),
            delimiter: settings.transfer.default_delimiter,
            export_file_name: settings.transfer.default_export_file_name.clone(),
            target_table_name: String::new(),
            token_payload: TokenPayload::default(),
            settings,
            config: None,
            client,
            data_source: DataSource::default(),
            direction: TransferDirection::default(),
            file: None,
            available_tables: Vec::new(),
            selected_table: String::new(),
            table_columns: Vec::new(),
            selected_columns: ColumnSelection::default(),
            csv_columns: Vec::new(),
            selected_csv_columns: ColumnSelection::default(),
            join: JoinBuilder::default(),
            preview: None,
            status: TransferStatus::Idle,
            message: None,
            error_message: None,
            records_processed: 0,
            progress: ProgressState::default(),
            token_dialog_open: false,
            requests: RequestTracker::default(),
        }
    }

    /// Get the backend client
    pub fn client(&self) -> BackendClient {
        self.client.clone()
    }

    /// Issue a ticket for a request that is about to go out.
    pub fn begin_request(&mut self, kind: RequestKind) -> RequestTicket {
        self.requests.issue(kind)
    }

    pub fn is_current(&self, ticket: &RequestTicket) -> bool {
        self.requests.is_current(ticket)
    }

    /// Any connect, schema, preview or transfer request still outstanding.
    pub fn is_loading(&self) -> bool {
        self.requests.in_flight() > 0
    }

    pub fn data_source(&self) -> DataSource {
        self.data_source
    }

    pub fn direction(&self) -> TransferDirection {
        self.direction
    }

    pub fn file(&self) -> Option<&FileSelection> {
        self.file.as_ref()
    }

    pub fn available_tables(&self) -> &[String] {
        &self.available_tables
    }

    /// Empty when no table is selected.
    pub fn selected_table(&self) -> &str {
        &self.selected_table
    }

    pub fn table_columns(&self) -> &[String] {
        &self.table_columns
    }

    pub fn selected_columns(&self) -> &ColumnSelection {
        &self.selected_columns
    }

    pub fn csv_columns(&self) -> &[String] {
        &self.csv_columns
    }

    pub fn selected_csv_columns(&self) -> &ColumnSelection {
        &self.selected_csv_columns
    }

    pub fn join(&self) -> &JoinBuilder {
        &self.join
    }

    pub fn preview(&self) -> Option<&PreviewResult> {
        self.preview.as_ref()
    }

    pub fn status(&self) -> TransferStatus {
        self.status
    }

    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    pub fn error_message(&self) -> Option<&str> {
        self.error_message.as_deref()
    }

    /// The message to show in the status panel; errors win over info.
    pub fn status_message(&self) -> Option<StatusMessage> {
        self.error_message
            .as_ref()
            .map(StatusMessage::error)
            .or_else(|| self.message.as_ref().map(StatusMessage::info))
    }

    pub fn records_processed(&self) -> u64 {
        self.records_processed
    }

    pub fn progress(&self) -> ProgressState {
        self.progress
    }

    pub fn token_dialog_open(&self) -> bool {
        self.token_dialog_open
    }

    /// Effective target table of an upload.
    pub fn upload_table_name(&self) -> String {
        let name = self.target_table_name.trim();
        if name.is_empty() {
            crate::models::DEFAULT_TARGET_TABLE.to_string()
        } else {
            name.to_string()
        }
    }

    /// Save settings to disk
    pub fn save_settings(&self) {
        let Some(config) = &self.config else {
            return;
        };
        if let Err(e) = config.save_settings(&self.settings) {
            log::error!("Failed to save settings: {:#}", e);
        }
    }
}
