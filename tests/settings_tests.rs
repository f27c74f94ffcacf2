//! Integration tests for settings persistence and the state they seed.
//!
//! No backend needed: pure configuration and construction tests.

use clickbridge::models::{Delimiter, TransferDirection};
use clickbridge::state::{AppSettings, AppState, ConfigManager, TransferStatus};
use tempfile::TempDir;

// =============================================================================
// Default settings verification
// =============================================================================

#[test]
fn test_default_settings() {
    let settings = AppSettings::default();

    assert_eq!(settings.backend.base_url, "http://localhost:5000");
    assert_eq!(settings.backend.request_timeout_secs, None);

    assert_eq!(settings.transfer.progress_hide_delay_ms, 2000);
    assert_eq!(settings.transfer.default_delimiter, Delimiter::Comma);
    assert_eq!(settings.transfer.default_export_file_name, "export.csv");

    assert_eq!(settings.connection.host, "localhost");
    assert_eq!(settings.connection.port, "9000");
    assert_eq!(settings.connection.database, "default");
    assert_eq!(settings.connection.user, "default");
}

// =============================================================================
// ConfigManager
// =============================================================================

#[test]
fn test_settings_survive_a_restart() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");

    {
        let manager = ConfigManager::with_config_dir(temp_dir.path().to_path_buf()).unwrap();
        let mut settings = AppSettings::default();
        settings.transfer.default_delimiter = Delimiter::Semicolon;
        settings.connection.host = "ch.internal".into();
        manager.save_settings(&settings).unwrap();
    }

    let manager = ConfigManager::with_config_dir(temp_dir.path().to_path_buf()).unwrap();
    let settings = manager.load_settings().unwrap();
    assert_eq!(settings.transfer.default_delimiter, Delimiter::Semicolon);
    assert_eq!(settings.connection.host, "ch.internal");
    assert_eq!(settings.backend.base_url, "http://localhost:5000");
}

#[test]
fn test_password_is_never_written() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    let manager = ConfigManager::with_config_dir(temp_dir.path().to_path_buf()).unwrap();
    manager.save_settings(&AppSettings::default()).unwrap();

    let raw = std::fs::read_to_string(temp_dir.path().join("settings.json")).unwrap();
    assert!(!raw.contains("password"));
}

#[test]
fn test_corrupt_settings_are_an_error() {
    let temp_dir = TempDir::new().expect("failed to create temp dir");
    std::fs::write(temp_dir.path().join("settings.json"), "{ not json").unwrap();

    let manager = ConfigManager::with_config_dir(temp_dir.path().to_path_buf()).unwrap();
    let err = manager.load_settings().unwrap_err();
    assert!(format!("{err:#}").contains("settings.json"));
}

// =============================================================================
// Initial wizard state
// =============================================================================

#[test]
fn test_state_is_seeded_from_settings() {
    let mut settings = AppSettings::default();
    settings.backend.base_url = "http://backend:8080/".into();
    settings.transfer.default_delimiter = Delimiter::Tab;
    settings.transfer.default_export_file_name = "dump.tsv".into();
    settings.connection.database = "analytics".into();

    let state = AppState::with_settings(settings).unwrap();
    assert_eq!(state.client().base_url(), "http://backend:8080");
    assert_eq!(state.delimiter, Delimiter::Tab);
    assert_eq!(state.export_file_name, "dump.tsv");
    assert_eq!(state.connection.database, "analytics");
    assert!(state.connection.password.is_empty());
    assert!(state.target_table_name.is_empty());

    assert_eq!(state.direction(), TransferDirection::ToClickHouse);
    assert_eq!(state.status(), TransferStatus::Idle);
    assert!(state.status_message().is_none());
    assert!(!state.is_loading());
}

#[test]
fn test_invalid_backend_url_is_rejected() {
    let mut settings = AppSettings::default();
    settings.backend.base_url = "::not a url::".into();
    assert!(AppState::with_settings(settings).is_err());
}
