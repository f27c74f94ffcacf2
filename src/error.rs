use thiserror::Error;

/// Application-wide error type
#[derive(Debug, Error)]
pub enum Error {
    #[error("HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Backend error ({status}): {}", message.as_deref().unwrap_or("no details"))]
    Backend { status: u16, message: Option<String> },

    #[error("Invalid backend URL: {0}")]
    InvalidUrl(String),

    #[error("Unexpected response: {0}")]
    UnexpectedResponse(String),
}

impl Error {
    /// The `error` text reported by the backend, if it sent one.
    pub fn backend_message(&self) -> Option<&str> {
        match self {
            Error::Backend { message, .. } => message.as_deref().filter(|m| !m.is_empty()),
            _ => None,
        }
    }

    /// Message to show the user: the backend's own text, or `fallback`.
    pub fn user_message(&self, fallback: &str) -> String {
        self.backend_message().unwrap_or(fallback).to_string()
    }
}

/// Convenience Result type using our Error
pub type Result<T> = std::result::Result<T, Error>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_message_prefers_backend_text() {
        let err = Error::Backend { status: 500, message: Some("table missing".into()) };
        assert_eq!(err.user_message("fallback"), "table missing");
    }

    #[test]
    fn user_message_falls_back_without_backend_text() {
        let err = Error::Backend { status: 502, message: None };
        assert_eq!(err.user_message("Failed to connect"), "Failed to connect");

        let err = Error::Backend { status: 500, message: Some(String::new()) };
        assert_eq!(err.user_message("Failed to connect"), "Failed to connect");

        let err = Error::UnexpectedResponse("missing tables".into());
        assert_eq!(err.user_message("Failed to connect"), "Failed to connect");
    }
}
