//! Status values for UI feedback.

/// Coarse state of the last user-initiated action. Overwritten by every action.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TransferStatus {
    #[default]
    Idle,
    Connecting,
    Connected,
    Fetching,
    Fetched,
    Ingesting,
    Completed,
    Error,
}

impl TransferStatus {
    pub fn label(self) -> &'static str {
        match self {
            TransferStatus::Idle => "Idle",
            TransferStatus::Connecting => "Connecting",
            TransferStatus::Connected => "Connected",
            TransferStatus::Fetching => "Fetching",
            TransferStatus::Fetched => "Fetched",
            TransferStatus::Ingesting => "Ingesting",
            TransferStatus::Completed => "Completed",
            TransferStatus::Error => "Error",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusLevel {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    pub level: StatusLevel,
    pub text: String,
}

impl StatusMessage {
    pub fn info(text: impl Into<String>) -> Self {
        Self { level: StatusLevel::Info, text: text.into() }
    }

    pub fn error(text: impl Into<String>) -> Self {
        Self { level: StatusLevel::Error, text: text.into() }
    }

    pub fn is_error(&self) -> bool {
        self.level == StatusLevel::Error
    }
}
