//! Shared fixtures for integration tests.
//!
//! Every test gets its own `wiremock` server standing in for the transfer backend and a
//! fresh wizard state pointed at it.

#![allow(dead_code)]

use std::fs;
use std::path::PathBuf;

use clickbridge::connection::BackendClient;
use clickbridge::models::FileSelection;
use clickbridge::state::{AppCommands, AppEvent, AppSettings, AppState, RequestKind, SharedState};
use serde_json::Value;
use tempfile::TempDir;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Progress hide delay used by tests, short enough to await.
pub const HIDE_DELAY_MS: u64 = 50;

pub fn test_settings(server: &MockServer) -> AppSettings {
    let mut settings = AppSettings::default();
    settings.backend.base_url = server.uri();
    settings.transfer.progress_hide_delay_ms = HIDE_DELAY_MS;
    settings
}

/// Wizard state talking to `server`.
pub fn shared_state(server: &MockServer) -> SharedState {
    let client = BackendClient::new(server.uri()).expect("mock server uri is valid");
    AppCommands::shared(AppState::with_client(test_settings(server), client))
}

/// Mount a JSON response for a POST to `endpoint`.
pub async fn mount_json(server: &MockServer, endpoint: &str, status: u16, body: Value) {
    Mock::given(method("POST"))
        .and(path(format!("/{endpoint}")))
        .respond_with(ResponseTemplate::new(status).set_body_json(body))
        .mount(server)
        .await;
}

/// Pretend a connect call returned `tables`.
pub fn seed_tables(state: &SharedState, tables: &[&str]) {
    let mut state = state.lock();
    let ticket = state.begin_request(RequestKind::Connect);
    state.apply(AppEvent::Connected { ticket, tables: strings(tables) });
}

/// Select `table` and pretend its schema returned `columns`.
pub fn seed_table(state: &SharedState, table: &str, columns: &[&str]) {
    let mut state = state.lock();
    state.apply(AppEvent::TableSelected(table.to_string()));
    let ticket = state.begin_request(RequestKind::Schema);
    state.apply(AppEvent::SchemaLoaded {
        ticket,
        table: table.to_string(),
        columns: strings(columns),
    });
}

/// A flat file named `name` inside a temp dir that lives as long as the returned guard.
pub struct TempFlatFile {
    _dir: TempDir,
    pub path: PathBuf,
}

impl TempFlatFile {
    pub fn new(name: &str, contents: &str) -> Self {
        let dir = tempfile::tempdir().expect("create temp dir");
        let path = dir.path().join(name);
        fs::write(&path, contents).expect("write temp file");
        Self { _dir: dir, path }
    }

    pub fn selection(&self) -> FileSelection {
        FileSelection::new(&self.path)
    }
}

pub fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}
