use crate::error::Result;
use crate::models::PreviewResult;
use crate::state::{AppEvent, PreviewSource, RequestKind, RequestTicket};

use super::{AppCommands, SharedState};

impl AppCommands {
    /// Preview the selected columns of the selected table.
    pub async fn preview_table(state: SharedState) {
        let request = state.lock().table_preview_request();
        let request = match request {
            Ok(request) => request,
            Err(message) => return Self::reject(&state, message),
        };

        let (ticket, client, connection) = Self::begin(&state, RequestKind::Preview);
        Self::apply(&state, AppEvent::PreviewLoading(ticket.clone()));
        let result = client.preview_table(&connection, &request.table, &request.columns).await;
        Self::finish_preview(&state, ticket, PreviewSource::Table, result);
    }

    /// Preview the chosen flat file; seeds the file's column list.
    pub async fn preview_file(state: SharedState) {
        let request = state.lock().file_preview_request();
        let (file, delimiter) = match request {
            Ok(request) => request,
            Err(message) => return Self::reject(&state, message),
        };

        let (ticket, client, _) = Self::begin(&state, RequestKind::Preview);
        Self::apply(&state, AppEvent::PreviewLoading(ticket.clone()));
        let result = client.preview_file(&file, delimiter).await;
        Self::finish_preview(&state, ticket, PreviewSource::File, result);
    }

    /// Preview a sample of the configured join.
    pub async fn preview_join(state: SharedState) {
        let request = state.lock().join_request(true);
        let request = match request {
            Ok(request) => request,
            Err(message) => return Self::reject(&state, message),
        };

        let (ticket, client, connection) = Self::begin(&state, RequestKind::Preview);
        Self::apply(&state, AppEvent::PreviewLoading(ticket.clone()));
        let result = client
            .join_tables(&connection, &request)
            .await
            .and_then(|response| response.into_preview());
        Self::finish_preview(&state, ticket, PreviewSource::Join, result);
    }

    fn finish_preview(
        state: &SharedState,
        ticket: RequestTicket,
        source: PreviewSource,
        result: Result<PreviewResult>,
    ) {
        let event = match result {
            Ok(preview) => AppEvent::PreviewLoaded { ticket, source, preview },
            Err(e) => {
                log::error!("Preview failed: {}", e);
                AppEvent::PreviewFailed { ticket, error: e.user_message(source.fallback_error()) }
            }
        };
        Self::apply(state, event);
    }
}
