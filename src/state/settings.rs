//! Application settings with persistence.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::models::{ConnectionConfig, Delimiter};

/// Environment variable that overrides the configured backend URL.
pub const BACKEND_URL_ENV: &str = "CLICKBRIDGE_BACKEND_URL";

/// Application settings
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppSettings {
    #[serde(default)]
    pub backend: BackendSettings,
    #[serde(default)]
    pub transfer: TransferSettings,
    #[serde(default)]
    pub connection: ConnectionDefaults,
}

/// Where the transfer backend lives.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendSettings {
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Per-request timeout; `None` keeps the HTTP client's default.
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl BackendSettings {
    /// Base URL after applying the environment override.
    pub fn resolved_base_url(&self) -> String {
        std::env::var(BACKEND_URL_ENV)
            .ok()
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| self.base_url.clone())
    }

    pub fn request_timeout(&self) -> Option<Duration> {
        self.request_timeout_secs.map(Duration::from_secs)
    }
}

impl Default for BackendSettings {
    fn default() -> Self {
        Self { base_url: default_base_url(), request_timeout_secs: None }
    }
}

/// Transfer defaults
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TransferSettings {
    /// How long the progress bar lingers after a successful transfer.
    #[serde(default = "default_progress_hide_delay_ms")]
    pub progress_hide_delay_ms: u64,
    #[serde(default)]
    pub default_delimiter: Delimiter,
    #[serde(default = "default_export_file_name")]
    pub default_export_file_name: String,
}

impl TransferSettings {
    pub fn progress_hide_delay(&self) -> Duration {
        Duration::from_millis(self.progress_hide_delay_ms)
    }
}

impl Default for TransferSettings {
    fn default() -> Self {
        Self {
            progress_hide_delay_ms: default_progress_hide_delay_ms(),
            default_delimiter: Delimiter::default(),
            default_export_file_name: default_export_file_name(),
        }
    }
}

/// Initial values of the connection form. The password is never persisted.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ConnectionDefaults {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: String,
    #[serde(default = "default_database")]
    pub database: String,
    #[serde(default = "default_user")]
    pub user: String,
}

impl ConnectionDefaults {
    pub fn to_config(&self) -> ConnectionConfig {
        ConnectionConfig::new(&self.host, &self.port, &self.database, &self.user)
    }
}

impl Default for ConnectionDefaults {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            database: default_database(),
            user: default_user(),
        }
    }
}

fn default_base_url() -> String {
    "http://localhost:5000".to_string()
}

fn default_progress_hide_delay_ms() -> u64 {
    2000
}

fn default_export_file_name() -> String {
    "export.csv".to_string()
}

fn default_host() -> String {
    "localhost".to_string()
}

fn default_port() -> String {
    "9000".to_string()
}

fn default_database() -> String {
    "default".to_string()
}

fn default_user() -> String {
    "default".to_string()
}
