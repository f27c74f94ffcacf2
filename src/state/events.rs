//! Wizard events, applied to `AppState` by its reducer.

use crate::connection::{IssuedToken, TransferSummary};
use crate::models::{DataSource, FileSelection, PreviewResult, TransferDirection};
use crate::state::app_state::{PreviewSource, RequestTicket, TransferKind};

/// Inputs of `AppState::apply`.
///
/// User edits carry no ticket. Request lifecycle events carry the ticket taken when the
/// request was issued; their results are dropped when the ticket is no longer current.
#[derive(Debug, Clone)]
pub enum AppEvent {
    // Source selection
    DataSourceChanged(DataSource),
    DirectionChanged(TransferDirection),
    FileSelected(FileSelection),
    TableSelected(String),

    // Column selection
    TableColumnToggled(String),
    CsvColumnToggled(String),
    AllColumnsSelected,
    AllColumnsDeselected,
    JoinColumnToggled {
        table: String,
        column: String,
    },

    // Join builder
    JoinPanelToggled,
    JoinTableAdded,
    JoinTableRemoved(usize),
    JoinTableChanged {
        index: usize,
        table: String,
    },
    JoinConditionChanged {
        index: usize,
        condition: String,
    },

    // Token dialog
    TokenDialogOpened,
    TokenDialogClosed,

    /// An action was rejected before any request was made.
    ValidationFailed(String),

    // Connection
    Connecting(RequestTicket),
    Connected {
        ticket: RequestTicket,
        tables: Vec<String>,
    },
    ConnectionFailed {
        ticket: RequestTicket,
        error: String,
    },

    // Schema
    SchemaLoading(RequestTicket),
    SchemaLoaded {
        ticket: RequestTicket,
        table: String,
        columns: Vec<String>,
    },
    SchemaFailed {
        ticket: RequestTicket,
        error: String,
    },
    JoinColumnsLoaded {
        ticket: RequestTicket,
        table: String,
        columns: Vec<String>,
    },
    JoinColumnsFailed {
        ticket: RequestTicket,
        table: String,
        error: String,
    },

    // Preview
    PreviewLoading(RequestTicket),
    PreviewLoaded {
        ticket: RequestTicket,
        source: PreviewSource,
        preview: PreviewResult,
    },
    PreviewFailed {
        ticket: RequestTicket,
        error: String,
    },

    // Transfer
    TransferStarted {
        ticket: RequestTicket,
        kind: TransferKind,
    },
    TransferAwaiting(RequestTicket),
    TransferCompleted {
        ticket: RequestTicket,
        kind: TransferKind,
        summary: TransferSummary,
    },
    TransferFailed {
        ticket: RequestTicket,
        error: String,
    },
    /// The post-success delay elapsed.
    ProgressHidden(RequestTicket),

    // Token
    TokenGenerated {
        ticket: RequestTicket,
        token: IssuedToken,
    },
}
