// Data structures and types

pub mod connection;
pub mod file;
pub mod preview;
pub mod source;
pub mod token;

pub use connection::ConnectionConfig;
pub use file::{DEFAULT_TARGET_TABLE, FileSelection, default_table_name};
pub use preview::{PreviewResult, PreviewRow};
pub use source::{DataSource, Delimiter, TransferDirection};
pub use token::{DEFAULT_TOKEN_HOURS, MAX_TOKEN_HOURS, MIN_TOKEN_HOURS, TokenPayload, TokenRole};
