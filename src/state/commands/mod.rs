//! Async wizard actions.
//!
//! Each command snapshots what it needs from the shared state, issues a request ticket,
//! awaits the backend with the lock released, and applies the outcome as an `AppEvent`.

use std::sync::Arc;

use parking_lot::Mutex;

use crate::connection::BackendClient;
use crate::models::ConnectionConfig;
use crate::state::{AppEvent, AppState, RequestKind, RequestTicket};

mod connection;
mod preview;
mod token;
mod transfer;

pub use connection::{CONNECT_FAILED_MESSAGE, SCHEMA_FAILED_MESSAGE};

/// Wizard state shared between the UI and in-flight commands.
pub type SharedState = Arc<Mutex<AppState>>;

pub struct AppCommands;

impl AppCommands {
    pub fn shared(state: AppState) -> SharedState {
        Arc::new(Mutex::new(state))
    }

    pub(super) fn apply(state: &SharedState, event: AppEvent) -> bool {
        state.lock().apply(event)
    }

    /// Reject an action locally with `message`; no request is made.
    pub(super) fn reject(state: &SharedState, message: &str) {
        log::debug!("Rejected action: {}", message);
        Self::apply(state, AppEvent::ValidationFailed(message.to_string()));
    }

    /// Take a ticket and capture the client and connection for one request.
    pub(super) fn begin(
        state: &SharedState,
        kind: RequestKind,
    ) -> (RequestTicket, BackendClient, ConnectionConfig) {
        let mut state = state.lock();
        let ticket = state.begin_request(kind);
        (ticket, state.client(), state.connection.clone())
    }
}
