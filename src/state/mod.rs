// Application state management

pub mod app_state;
pub mod commands;
pub mod config;
pub mod events;
pub mod settings;
pub mod status;

pub use app_state::{
    AppState, ColumnSelection, JoinBuilder, PreviewSource, ProgressState, RequestKind,
    RequestTicket, TransferKind, VisibleSections,
};
pub use commands::{AppCommands, SharedState};
pub use config::ConfigManager;
pub use events::AppEvent;
pub use settings::AppSettings;
pub use status::{StatusLevel, StatusMessage, TransferStatus};
