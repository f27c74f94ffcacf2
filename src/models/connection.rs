// Connection configuration models

use serde::{Deserialize, Serialize};

/// ClickHouse connection parameters as entered in the wizard.
///
/// Serialized field names match what the backend expects, so the struct can be
/// flattened directly into every request body.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConnectionConfig {
    pub host: String,
    /// Kept as typed; the backend parses it.
    pub port: String,
    pub database: String,
    pub user: String,
    pub password: String,
    /// Optional bearer token (JWT). Empty when unused.
    #[serde(default)]
    pub token: String,
}

impl ConnectionConfig {
    pub fn new(
        host: impl Into<String>,
        port: impl Into<String>,
        database: impl Into<String>,
        user: impl Into<String>,
    ) -> Self {
        Self {
            host: host.into(),
            port: port.into(),
            database: database.into(),
            user: user.into(),
            password: String::new(),
            token: String::new(),
        }
    }

    pub fn has_token(&self) -> bool {
        !self.token.trim().is_empty()
    }

    /// Short `user@host:port/database` label for status lines.
    pub fn display_label(&self) -> String {
        format!("{}@{}:{}/{}", self.user, self.host, self.port, self.database)
    }
}

impl Default for ConnectionConfig {
    fn default() -> Self {
        Self::new("localhost", "9000", "default", "default")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_backend_field_names() {
        let mut config = ConnectionConfig::default();
        config.password = "secret".into();
        let value = serde_json::to_value(&config).unwrap();
        assert_eq!(value["host"], "localhost");
        assert_eq!(value["port"], "9000");
        assert_eq!(value["database"], "default");
        assert_eq!(value["user"], "default");
        assert_eq!(value["password"], "secret");
        assert_eq!(value["token"], "");
    }

    #[test]
    fn blank_token_is_not_a_token() {
        let mut config = ConnectionConfig::default();
        assert!(!config.has_token());
        config.token = "   ".into();
        assert!(!config.has_token());
        config.token = "abc".into();
        assert!(config.has_token());
    }
}
