use tokio::task::JoinHandle;

use crate::state::{AppEvent, RequestKind};

use super::{AppCommands, SharedState};

pub const CONNECT_FAILED_MESSAGE: &str = "Failed to connect to ClickHouse";
pub const SCHEMA_FAILED_MESSAGE: &str = "Failed to load table schema";

impl AppCommands {
    /// Connect with the current form values and list the tables.
    pub async fn connect(state: SharedState) {
        let (ticket, client, connection) = Self::begin(&state, RequestKind::Connect);
        Self::apply(&state, AppEvent::Connecting(ticket.clone()));
        log::debug!("Connecting to {}", connection.display_label());

        let event = match client.connect(&connection).await {
            Ok(tables) => AppEvent::Connected { ticket, tables },
            Err(e) => {
                log::error!("Failed to connect: {}", e);
                AppEvent::ConnectionFailed { ticket, error: e.user_message(CONNECT_FAILED_MESSAGE) }
            }
        };
        Self::apply(&state, event);
    }

    /// Load the columns of the selected table and select all of them.
    pub async fn load_schema(state: SharedState) {
        let table = state.lock().selected_table().to_string();
        if table.is_empty() {
            return;
        }

        let (ticket, client, connection) = Self::begin(&state, RequestKind::Schema);
        Self::apply(&state, AppEvent::SchemaLoading(ticket.clone()));

        let event = match client.table_columns(&connection, &table).await {
            Ok(columns) => AppEvent::SchemaLoaded { ticket, table, columns },
            Err(e) => {
                log::error!("Failed to load schema for {}: {}", table, e);
                AppEvent::SchemaFailed { ticket, error: e.user_message(SCHEMA_FAILED_MESSAGE) }
            }
        };
        Self::apply(&state, event);
    }

    /// Fetch the columns of one join table. Failures are logged, never shown.
    pub async fn load_join_table_columns(state: SharedState, table: String) {
        if table.is_empty() {
            return;
        }

        let (ticket, client, connection) =
            Self::begin(&state, RequestKind::JoinColumns(table.clone()));

        let event = match client.table_columns(&connection, &table).await {
            Ok(columns) => AppEvent::JoinColumnsLoaded { ticket, table, columns },
            Err(e) => AppEvent::JoinColumnsFailed { ticket, table, error: e.to_string() },
        };
        Self::apply(&state, event);
    }

    /// Replace join table `index` and start loading its columns in the background.
    ///
    /// Returns the handle of the column load, if one was started.
    pub fn change_join_table(
        state: SharedState,
        index: usize,
        table: String,
    ) -> Option<JoinHandle<()>> {
        let changed =
            Self::apply(&state, AppEvent::JoinTableChanged { index, table: table.clone() });
        if !changed || table.is_empty() {
            return None;
        }
        Some(tokio::spawn(Self::load_join_table_columns(state, table)))
    }
}
