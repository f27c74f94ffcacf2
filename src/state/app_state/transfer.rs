//! Transfer progress and the kinds of transfer/preview actions.

/// Progress shown as soon as a transfer starts.
pub const PROGRESS_STARTED: u8 = 10;
/// Progress shown right before the backend response is awaited.
pub const PROGRESS_AWAITING: u8 = 30;
pub const PROGRESS_DONE: u8 = 100;

/// Synthetic progress indicator. It is not tied to real transfer progress.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ProgressState {
    pub visible: bool,
    pub percent: u8,
}

impl ProgressState {
    pub fn show(&mut self, percent: u8) {
        self.visible = true;
        self.percent = percent.min(PROGRESS_DONE);
    }

    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Fraction in `0.0..=100.0`, as the progress bar expects.
    pub fn value(&self) -> f32 {
        f32::from(self.percent)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransferKind {
    /// Flat file into a ClickHouse table.
    Upload,
    /// ClickHouse table into a flat file.
    Export,
    /// Joined ClickHouse tables into a flat file.
    JoinExport,
}

impl TransferKind {
    pub fn label(self) -> &'static str {
        match self {
            TransferKind::Upload => "upload",
            TransferKind::Export => "export",
            TransferKind::JoinExport => "join export",
        }
    }

    pub fn fallback_error(self) -> &'static str {
        match self {
            TransferKind::Upload => "Error uploading file",
            TransferKind::Export => "Error exporting data",
            TransferKind::JoinExport => "Error executing join export",
        }
    }
}

/// Where the rows of a preview came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreviewSource {
    Table,
    File,
    Join,
}

impl PreviewSource {
    pub fn fallback_error(self) -> &'static str {
        match self {
            PreviewSource::Table => "Failed to preview table data",
            PreviewSource::File => "Failed to preview CSV data",
            PreviewSource::Join => "Failed to preview join data",
        }
    }

    pub(crate) fn success_message(self, rows: usize) -> String {
        match self {
            PreviewSource::Join => format!("Loaded join preview data ({rows} rows)"),
            PreviewSource::Table | PreviewSource::File => {
                format!("Loaded preview data ({rows} rows)")
            }
        }
    }
}
