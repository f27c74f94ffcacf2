//! Backend access.
//!
//! This module provides:
//! - `BackendClient`: async HTTP client for the transfer backend
//! - `types`: request/response shapes of the backend endpoints
//! - `token`: signed vs. locally fabricated bearer tokens

pub mod manager;
pub mod token;
pub mod types;

pub use manager::BackendClient;
pub use token::{IssuedToken, fabricate_placeholder_token};
pub use types::{
    ColumnInfo, ExportRequest, JoinRequest, JoinResponse, TransferSummary, UploadRequest,
    endpoints,
};
