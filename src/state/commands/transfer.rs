use tokio::task::JoinHandle;

use crate::connection::{BackendClient, TransferSummary};
use crate::error::Result;
use crate::models::{ConnectionConfig, TransferDirection};
use crate::state::{AppEvent, RequestKind, RequestTicket, TransferKind};

use super::{AppCommands, SharedState};

impl AppCommands {
    /// Run the transfer the wizard is set up for: upload, export or join export.
    ///
    /// Returns the handle of the delayed progress hide when the transfer succeeded.
    pub async fn execute(state: SharedState) -> Option<JoinHandle<()>> {
        let (direction, join_open) = {
            let state = state.lock();
            (state.direction(), state.join().is_open())
        };
        match direction {
            TransferDirection::ToClickHouse => Self::upload(state).await,
            TransferDirection::FromClickHouse if join_open => Self::join_export(state).await,
            TransferDirection::FromClickHouse => Self::export(state).await,
        }
    }

    /// Upload the chosen flat file into the target table.
    pub async fn upload(state: SharedState) -> Option<JoinHandle<()>> {
        let request = state.lock().upload_request();
        let request = match request {
            Ok(request) => request,
            Err(message) => {
                Self::reject(&state, message);
                return None;
            }
        };

        let (ticket, client, connection) = Self::start_transfer(&state, TransferKind::Upload);
        Self::apply(&state, AppEvent::TransferAwaiting(ticket.clone()));
        let result = client.upload_file(&connection, &request).await;
        Self::finish_transfer(&state, ticket, TransferKind::Upload, result)
    }

    /// Export the selected columns of the selected table to a flat file.
    pub async fn export(state: SharedState) -> Option<JoinHandle<()>> {
        let request = state.lock().export_request();
        let request = match request {
            Ok(request) => request,
            Err(message) => {
                Self::reject(&state, message);
                return None;
            }
        };

        let (ticket, client, connection) = Self::start_transfer(&state, TransferKind::Export);
        Self::apply(&state, AppEvent::TransferAwaiting(ticket.clone()));
        let result = client.export_table(&connection, &request).await;
        Self::finish_transfer(&state, ticket, TransferKind::Export, result)
    }

    /// Run the configured join and export its result.
    pub async fn join_export(state: SharedState) -> Option<JoinHandle<()>> {
        let request = state.lock().join_request(false);
        let request = match request {
            Ok(request) => request,
            Err(message) => {
                Self::reject(&state, message);
                return None;
            }
        };

        let (ticket, client, connection) = Self::start_transfer(&state, TransferKind::JoinExport);
        Self::apply(&state, AppEvent::TransferAwaiting(ticket.clone()));
        let result = client
            .join_tables(&connection, &request)
            .await
            .map(|response| response.into_summary());
        Self::finish_transfer(&state, ticket, TransferKind::JoinExport, result)
    }

    fn start_transfer(
        state: &SharedState,
        kind: TransferKind,
    ) -> (RequestTicket, BackendClient, ConnectionConfig) {
        let (ticket, client, connection) = Self::begin(state, RequestKind::Transfer);
        Self::apply(state, AppEvent::TransferStarted { ticket: ticket.clone(), kind });
        (ticket, client, connection)
    }

    fn finish_transfer(
        state: &SharedState,
        ticket: RequestTicket,
        kind: TransferKind,
        result: Result<TransferSummary>,
    ) -> Option<JoinHandle<()>> {
        match result {
            Ok(summary) => {
                let applied = Self::apply(
                    state,
                    AppEvent::TransferCompleted { ticket: ticket.clone(), kind, summary },
                );
                applied.then(|| Self::schedule_progress_hide(state, ticket))
            }
            Err(e) => {
                log::error!("{} failed: {}", kind.label(), e);
                Self::apply(
                    state,
                    AppEvent::TransferFailed { ticket, error: e.user_message(kind.fallback_error()) },
                );
                None
            }
        }
    }

    /// Hide the progress bar once the configured delay has passed.
    fn schedule_progress_hide(state: &SharedState, ticket: RequestTicket) -> JoinHandle<()> {
        let delay = state.lock().settings.transfer.progress_hide_delay();
        let state = state.clone();
        tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            Self::apply(&state, AppEvent::ProgressHidden(ticket));
        })
    }
}
