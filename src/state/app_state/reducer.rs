//! State transitions driven by `AppEvent`.

use crate::models::{DataSource, FileSelection, TransferDirection};
use crate::state::TransferStatus;
use crate::state::events::AppEvent;

use super::{
    AppState, ColumnSelection, PROGRESS_AWAITING, PROGRESS_DONE, PROGRESS_STARTED, PreviewSource,
    RequestKind, RequestTicket,
};

impl AppState {
    /// Apply `event` to the wizard state.
    ///
    /// Returns `false` when nothing changed: a stale response, or an edit that did not
    /// address anything (for example removing the first join table).
    pub fn apply(&mut self, event: AppEvent) -> bool {
        match event {
            AppEvent::DataSourceChanged(source) => {
                self.data_source = source;
                self.reset_for_source_change();
                true
            }
            AppEvent::DirectionChanged(direction) => {
                self.direction = direction;
                self.reset_for_source_change();
                true
            }
            AppEvent::FileSelected(file) => {
                self.select_file(file);
                true
            }
            AppEvent::TableSelected(table) => {
                self.selected_table = table;
                self.table_columns.clear();
                self.selected_columns.clear();
                self.requests.invalidate(RequestKind::Schema);
                true
            }

            AppEvent::TableColumnToggled(column) => {
                self.selected_columns.toggle(&column);
                true
            }
            AppEvent::CsvColumnToggled(column) => {
                self.selected_csv_columns.toggle(&column);
                true
            }
            AppEvent::AllColumnsSelected => {
                match self.data_source {
                    DataSource::ClickHouse => self.selected_columns.select_all(&self.table_columns),
                    DataSource::FlatFile => {
                        self.selected_csv_columns.select_all(&self.csv_columns)
                    }
                }
                true
            }
            AppEvent::AllColumnsDeselected => {
                match self.data_source {
                    DataSource::ClickHouse => self.selected_columns.clear(),
                    DataSource::FlatFile => self.selected_csv_columns.clear(),
                }
                true
            }
            AppEvent::JoinColumnToggled { table, column } => {
                self.join.toggle_column(&table, &column);
                true
            }

            AppEvent::JoinPanelToggled => {
                if self.join.is_open() {
                    self.join.close();
                } else {
                    self.open_join_panel();
                }
                true
            }
            AppEvent::JoinTableAdded => {
                self.join.add_table();
                true
            }
            AppEvent::JoinTableRemoved(index) => self.join.remove_table(index),
            AppEvent::JoinTableChanged { index, table } => self.join.set_table(index, &table),
            AppEvent::JoinConditionChanged { index, condition } => {
                self.join.set_condition(index, &condition)
            }

            AppEvent::TokenDialogOpened => {
                self.token_dialog_open = true;
                true
            }
            AppEvent::TokenDialogClosed => {
                self.token_dialog_open = false;
                true
            }

            AppEvent::ValidationFailed(message) => {
                self.error_message = Some(message);
                true
            }

            AppEvent::Connecting(ticket) => self.begin_action(&ticket, TransferStatus::Connecting),
            AppEvent::Connected { ticket, tables } => {
                if !self.settle(&ticket) {
                    return false;
                }
                self.status = TransferStatus::Connected;
                self.message = Some(if tables.is_empty() {
                    "Connected successfully, but no tables found.".to_string()
                } else {
                    format!("Connected successfully. Found {} tables.", tables.len())
                });
                self.available_tables = tables;
                true
            }
            AppEvent::ConnectionFailed { ticket, error } => self.fail(&ticket, error),

            AppEvent::SchemaLoading(ticket) => self.begin_action(&ticket, TransferStatus::Fetching),
            AppEvent::SchemaLoaded { ticket, table, columns } => {
                if !self.settle(&ticket) {
                    return false;
                }
                self.selected_columns = ColumnSelection::from_columns(&columns);
                self.table_columns = columns;
                self.status = TransferStatus::Fetched;
                self.message = Some(format!("Loaded schema for table {table}"));
                true
            }
            AppEvent::SchemaFailed { ticket, error } => self.fail(&ticket, error),
            AppEvent::JoinColumnsLoaded { ticket, table, columns } => {
                if !self.settle(&ticket) {
                    return false;
                }
                self.join.store_columns(&table, columns);
                true
            }
            AppEvent::JoinColumnsFailed { ticket, table, error } => {
                self.settle(&ticket);
                log::error!("Failed to load columns for table {}: {}", table, error);
                false
            }

            AppEvent::PreviewLoading(ticket) => {
                self.begin_action(&ticket, TransferStatus::Fetching)
            }
            AppEvent::PreviewLoaded { ticket, source, preview } => {
                if !self.settle(&ticket) {
                    return false;
                }
                if source == PreviewSource::File {
                    self.selected_csv_columns = ColumnSelection::from_columns(&preview.columns);
                    self.csv_columns = preview.columns.clone();
                }
                self.status = TransferStatus::Fetched;
                self.message = Some(source.success_message(preview.total_rows));
                self.preview = Some(preview);
                true
            }
            AppEvent::PreviewFailed { ticket, error } => self.fail(&ticket, error),

            AppEvent::TransferStarted { ticket, kind } => {
                if !self.begin_action(&ticket, TransferStatus::Ingesting) {
                    return false;
                }
                log::info!("Starting {}", kind.label());
                self.progress.show(PROGRESS_STARTED);
                true
            }
            AppEvent::TransferAwaiting(ticket) => {
                if !self.is_current(&ticket) {
                    return false;
                }
                self.progress.show(PROGRESS_AWAITING);
                true
            }
            AppEvent::TransferCompleted { ticket, kind, summary } => {
                if !self.settle(&ticket) {
                    return false;
                }
                log::info!(
                    "Finished {}: {} records processed",
                    kind.label(),
                    summary.records_processed
                );
                self.progress.show(PROGRESS_DONE);
                self.status = TransferStatus::Completed;
                self.message = Some(summary.message.filter(|m| !m.is_empty()).unwrap_or_else(
                    || format!("Completed {} ({} records)", kind.label(), summary.records_processed),
                ));
                self.records_processed = summary.records_processed;
                true
            }
            AppEvent::TransferFailed { ticket, error } => {
                if !self.fail(&ticket, error) {
                    return false;
                }
                self.progress.reset();
                true
            }
            AppEvent::ProgressHidden(ticket) => {
                if !self.is_current(&ticket) || !self.progress.visible {
                    return false;
                }
                self.progress.visible = false;
                true
            }

            AppEvent::TokenGenerated { ticket, token } => {
                if !self.settle(&ticket) {
                    return false;
                }
                self.message = Some(token.status_message().to_string());
                self.error_message = None;
                self.connection.token = token.into_token();
                self.token_dialog_open = false;
                true
            }
        }
    }

    /// Common entry of every request-backed action.
    fn begin_action(&mut self, ticket: &RequestTicket, status: TransferStatus) -> bool {
        if !self.is_current(ticket) {
            return false;
        }
        self.status = status;
        self.message = None;
        self.error_message = None;
        true
    }

    /// Record a finished request. Returns whether its result should be applied.
    fn settle(&mut self, ticket: &RequestTicket) -> bool {
        self.requests.settle(ticket);
        let current = self.requests.is_current(ticket);
        if !current {
            log::debug!(
                "Discarding stale {:?} response (generation {})",
                ticket.kind(),
                ticket.generation()
            );
        }
        current
    }

    fn fail(&mut self, ticket: &RequestTicket, error: String) -> bool {
        if !self.settle(ticket) {
            return false;
        }
        self.status = TransferStatus::Error;
        self.error_message = Some(error);
        true
    }

    fn reset_for_source_change(&mut self) {
        self.selected_table.clear();
        self.selected_columns.clear();
        self.table_columns.clear();
        self.preview = None;
        self.message = None;
        self.status = TransferStatus::Idle;
        self.records_processed = 0;
        self.progress.reset();

        self.target_table_name = match (&self.file, self.direction) {
            (Some(file), TransferDirection::ToClickHouse) => file.default_table_name(),
            _ => String::new(),
        };

        self.requests.invalidate(RequestKind::Schema);
        self.requests.invalidate(RequestKind::Preview);
        self.requests.invalidate(RequestKind::Transfer);
    }

    fn select_file(&mut self, file: FileSelection) {
        self.export_file_name = file.processed_export_name();
        self.csv_columns.clear();
        self.selected_csv_columns.clear();
        self.preview = None;
        if self.direction == TransferDirection::ToClickHouse {
            self.target_table_name = file.default_table_name();
        }
        self.file = Some(file);
        self.requests.invalidate(RequestKind::Preview);
    }

    /// Seed the join with the selected table; its already loaded columns carry over.
    fn open_join_panel(&mut self) {
        let anchor = self.selected_table.clone();
        self.join.open_with(&anchor);
        if !anchor.is_empty() && !self.table_columns.is_empty() {
            self.join.store_columns_with_selection(
                &anchor,
                self.table_columns.clone(),
                self.selected_columns.clone(),
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use crate::connection::{BackendClient, IssuedToken, TransferSummary};
    use crate::models::PreviewResult;
    use crate::state::app_state::{ProgressState, TransferKind};
    use crate::state::settings::AppSettings;

    use super::*;

    fn state() -> AppState {
        let client = BackendClient::new("http://localhost:5000").unwrap();
        AppState::with_client(AppSettings::default(), client)
    }

    fn strings(values: &[&str]) -> Vec<String> {
        values.iter().map(|s| s.to_string()).collect()
    }

    fn preview(columns: &[&str], rows: usize) -> PreviewResult {
        let row: crate::models::PreviewRow =
            columns.iter().map(|c| (c.to_string(), serde_json::json!(1))).collect();
        PreviewResult { columns: strings(columns), rows: vec![row; rows], total_rows: rows }
    }

    fn load_schema(state: &mut AppState, table: &str, columns: &[&str]) {
        state.apply(AppEvent::TableSelected(table.into()));
        let ticket = state.begin_request(RequestKind::Schema);
        state.apply(AppEvent::SchemaLoading(ticket.clone()));
        assert!(state.apply(AppEvent::SchemaLoaded {
            ticket,
            table: table.into(),
            columns: strings(columns),
        }));
    }

    #[test]
    fn source_change_resets_downstream_state() {
        let mut state = state();
        state.apply(AppEvent::DirectionChanged(TransferDirection::FromClickHouse));
        load_schema(&mut state, "a", &["id", "val"]);
        let ticket = state.begin_request(RequestKind::Preview);
        state.apply(AppEvent::PreviewLoaded {
            ticket,
            source: PreviewSource::Table,
            preview: preview(&["id"], 2),
        });
        assert!(state.preview().is_some());

        state.apply(AppEvent::DataSourceChanged(DataSource::FlatFile));

        assert_eq!(state.selected_table(), "");
        assert!(state.table_columns().is_empty());
        assert!(state.selected_columns().is_empty());
        assert!(state.preview().is_none());
        assert_eq!(state.message(), None);
        assert_eq!(state.status(), TransferStatus::Idle);
        assert_eq!(state.records_processed(), 0);
        assert_eq!(state.target_table_name, "");
    }

    #[test]
    fn setting_the_same_direction_still_resets() {
        let mut state = state();
        load_schema(&mut state, "a", &["id"]);
        state.apply(AppEvent::DirectionChanged(state.direction()));
        assert_eq!(state.selected_table(), "");
        assert_eq!(state.status(), TransferStatus::Idle);
    }

    #[test]
    fn source_change_rederives_target_table_for_uploads() {
        let mut state = state();
        state.apply(AppEvent::FileSelected(FileSelection::new("/tmp/sales.csv")));
        state.target_table_name = "custom".into();

        state.apply(AppEvent::DataSourceChanged(DataSource::FlatFile));
        assert_eq!(state.target_table_name, "sales");

        state.apply(AppEvent::DirectionChanged(TransferDirection::FromClickHouse));
        assert_eq!(state.target_table_name, "");
    }

    #[test]
    fn source_change_discards_in_flight_responses() {
        let mut state = state();
        let ticket = state.begin_request(RequestKind::Schema);
        state.apply(AppEvent::TableSelected("a".into()));
        let ticket_after = state.begin_request(RequestKind::Preview);
        state.apply(AppEvent::DataSourceChanged(DataSource::FlatFile));

        assert!(!state.apply(AppEvent::SchemaLoaded {
            ticket,
            table: "a".into(),
            columns: strings(&["id"]),
        }));
        assert!(!state.apply(AppEvent::PreviewLoaded {
            ticket: ticket_after,
            source: PreviewSource::Table,
            preview: preview(&["id"], 1),
        }));
        assert!(state.table_columns().is_empty());
        assert!(!state.is_loading());
    }

    #[test]
    fn file_selection_seeds_names_and_clears_csv_state() {
        let mut state = state();
        state.apply(AppEvent::FileSelected(FileSelection::new("/data/sales.csv")));
        let ticket = state.begin_request(RequestKind::Preview);
        state.apply(AppEvent::PreviewLoaded {
            ticket,
            source: PreviewSource::File,
            preview: preview(&["x", "y"], 1),
        });
        assert_eq!(state.csv_columns(), strings(&["x", "y"]).as_slice());

        state.apply(AppEvent::FileSelected(FileSelection::new("/data/orders.tsv")));
        assert_eq!(state.export_file_name, "processed_orders.tsv");
        assert_eq!(state.target_table_name, "orders");
        assert!(state.csv_columns().is_empty());
        assert!(state.selected_csv_columns().is_empty());
        assert!(state.preview().is_none());
    }

    #[test]
    fn file_selection_keeps_target_when_exporting() {
        let mut state = state();
        state.apply(AppEvent::DirectionChanged(TransferDirection::FromClickHouse));
        state.apply(AppEvent::FileSelected(FileSelection::new("out.csv")));
        assert_eq!(state.target_table_name, "");
        assert_eq!(state.export_file_name, "processed_out.csv");
    }

    #[test]
    fn schema_selects_every_column() {
        let mut state = state();
        load_schema(&mut state, "a", &["id", "val"]);
        assert_eq!(state.selected_columns().as_slice(), strings(&["id", "val"]).as_slice());
        assert_eq!(state.status(), TransferStatus::Fetched);
        assert_eq!(state.message(), Some("Loaded schema for table a"));
    }

    #[test]
    fn schema_for_a_previous_table_is_dropped() {
        let mut state = state();
        state.apply(AppEvent::TableSelected("a".into()));
        let ticket = state.begin_request(RequestKind::Schema);
        state.apply(AppEvent::TableSelected("b".into()));

        assert!(!state.apply(AppEvent::SchemaLoaded {
            ticket,
            table: "a".into(),
            columns: strings(&["id"]),
        }));
        assert!(state.table_columns().is_empty());
    }

    #[test]
    fn select_all_follows_the_active_source() {
        let mut state = state();
        load_schema(&mut state, "a", &["id", "val"]);
        state.apply(AppEvent::AllColumnsDeselected);
        assert!(state.selected_columns().is_empty());
        state.apply(AppEvent::AllColumnsSelected);
        assert_eq!(state.selected_columns().len(), 2);

        state.apply(AppEvent::DataSourceChanged(DataSource::FlatFile));
        let ticket = state.begin_request(RequestKind::Preview);
        state.apply(AppEvent::PreviewLoaded {
            ticket,
            source: PreviewSource::File,
            preview: preview(&["x", "y", "z"], 1),
        });
        state.apply(AppEvent::AllColumnsDeselected);
        assert!(state.selected_csv_columns().is_empty());
        state.apply(AppEvent::AllColumnsSelected);
        assert_eq!(state.selected_csv_columns().len(), 3);
    }

    #[test]
    fn connect_messages() {
        let mut state = state();
        let ticket = state.begin_request(RequestKind::Connect);
        assert!(state.apply(AppEvent::Connecting(ticket.clone())));
        assert_eq!(state.status(), TransferStatus::Connecting);
        assert!(state.is_loading());

        state.apply(AppEvent::Connected { ticket, tables: strings(&["a", "b"]) });
        assert_eq!(state.message(), Some("Connected successfully. Found 2 tables."));
        assert!(!state.is_loading());

        let ticket = state.begin_request(RequestKind::Connect);
        state.apply(AppEvent::Connected { ticket, tables: Vec::new() });
        assert_eq!(state.message(), Some("Connected successfully, but no tables found."));
        assert!(state.available_tables().is_empty());
        assert_eq!(state.status(), TransferStatus::Connected);
    }

    #[test]
    fn every_action_clears_both_messages_on_entry() {
        let mut state = state();
        state.apply(AppEvent::ValidationFailed("nope".into()));
        let ticket = state.begin_request(RequestKind::Connect);
        state.apply(AppEvent::Connecting(ticket.clone()));
        assert_eq!(state.error_message(), None);

        state.apply(AppEvent::ConnectionFailed { ticket, error: "refused".into() });
        assert_eq!(state.status(), TransferStatus::Error);
        assert_eq!(state.error_message(), Some("refused"));
        assert_eq!(state.message(), None);
        assert!(state.status_message().is_some_and(|m| m.is_error()));
    }

    #[test]
    fn transfer_success_keeps_progress_until_hidden() {
        let mut state = state();
        let ticket = state.begin_request(RequestKind::Transfer);
        state.apply(AppEvent::TransferStarted { ticket: ticket.clone(), kind: TransferKind::Upload });
        assert_eq!(state.progress().percent, PROGRESS_STARTED);
        state.apply(AppEvent::TransferAwaiting(ticket.clone()));
        assert_eq!(state.progress().percent, PROGRESS_AWAITING);

        state.apply(AppEvent::TransferCompleted {
            ticket: ticket.clone(),
            kind: TransferKind::Upload,
            summary: TransferSummary {
                message: Some("Uploaded 3 rows".into()),
                records_processed: 3,
            },
        });
        assert_eq!(state.status(), TransferStatus::Completed);
        assert_eq!(state.records_processed(), 3);
        assert!(state.progress().visible);
        assert_eq!(state.progress().percent, PROGRESS_DONE);

        assert!(state.apply(AppEvent::ProgressHidden(ticket)));
        assert!(!state.progress().visible);
    }

    #[test]
    fn transfer_failure_hides_progress_at_once() {
        let mut state = state();
        let ticket = state.begin_request(RequestKind::Transfer);
        state.apply(AppEvent::TransferStarted { ticket: ticket.clone(), kind: TransferKind::Export });
        state.apply(AppEvent::TransferFailed { ticket, error: "Error exporting data".into() });

        assert_eq!(state.progress(), ProgressState::default());
        assert_eq!(state.error_message(), Some("Error exporting data"));
    }

    #[test]
    fn hide_from_an_older_transfer_is_ignored() {
        let mut state = state();
        let first = state.begin_request(RequestKind::Transfer);
        state.apply(AppEvent::TransferStarted { ticket: first.clone(), kind: TransferKind::Export });
        state.apply(AppEvent::TransferCompleted {
            ticket: first.clone(),
            kind: TransferKind::Export,
            summary: TransferSummary::default(),
        });
        assert_eq!(state.message(), Some("Completed export (0 records)"));

        let second = state.begin_request(RequestKind::Transfer);
        state.apply(AppEvent::TransferStarted { ticket: second, kind: TransferKind::Export });
        assert!(!state.apply(AppEvent::ProgressHidden(first)));
        assert!(state.progress().visible);
    }

    #[test]
    fn stale_preview_never_overwrites_newer_one() {
        let mut state = state();
        let slow = state.begin_request(RequestKind::Preview);
        let fast = state.begin_request(RequestKind::Preview);
        assert!(state.apply(AppEvent::PreviewLoaded {
            ticket: fast,
            source: PreviewSource::File,
            preview: preview(&["x"], 1),
        }));
        assert!(!state.apply(AppEvent::PreviewLoaded {
            ticket: slow,
            source: PreviewSource::Table,
            preview: preview(&["id", "val"], 5),
        }));

        assert_eq!(state.preview().map(|p| p.columns.len()), Some(1));
        assert!(!state.is_loading());
    }

    #[test]
    fn join_panel_reseeds_with_selected_table() {
        let mut state = state();
        state.apply(AppEvent::DirectionChanged(TransferDirection::FromClickHouse));
        load_schema(&mut state, "a", &["id", "name"]);
        state.apply(AppEvent::TableColumnToggled("name".into()));

        state.apply(AppEvent::JoinPanelToggled);
        assert!(state.join().is_open());
        assert_eq!(state.join().tables(), strings(&["a"]).as_slice());
        assert!(state.join().conditions().is_empty());
        assert_eq!(state.join().request_columns()["a"], strings(&["id"]));

        state.apply(AppEvent::JoinTableAdded);
        state.apply(AppEvent::JoinPanelToggled);
        assert!(!state.join().is_open());
        assert_eq!(state.join().tables().len(), 2);

        state.apply(AppEvent::JoinPanelToggled);
        assert_eq!(state.join().tables().len(), 1);
        assert!(!state.apply(AppEvent::JoinTableRemoved(0)));
    }

    #[test]
    fn join_column_failures_are_swallowed() {
        let mut state = state();
        let ticket = state.begin_request(RequestKind::JoinColumns("b".into()));
        assert!(!state.apply(AppEvent::JoinColumnsFailed {
            ticket,
            table: "b".into(),
            error: "boom".into(),
        }));
        assert_eq!(state.status(), TransferStatus::Idle);
        assert_eq!(state.error_message(), None);
    }

    #[test]
    fn token_results_close_the_dialog() {
        let mut state = state();
        state.apply(AppEvent::TokenDialogOpened);
        let ticket = state.begin_request(RequestKind::Token);
        state.apply(AppEvent::TokenGenerated {
            ticket,
            token: IssuedToken::Fabricated("h.p.DUMMY_SIGNATURE".into()),
        });

        assert!(!state.token_dialog_open());
        assert_eq!(state.connection.token, "h.p.DUMMY_SIGNATURE");
        assert_eq!(
            state.message(),
            Some("Demo JWT token created successfully (not cryptographically valid)")
        );
    }
}
