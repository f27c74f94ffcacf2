//! Flat file selection.

use std::path::{Path, PathBuf};

/// Table name used when the file name yields nothing usable.
pub const DEFAULT_TARGET_TABLE: &str = "imported_data";

/// A flat file picked by the user.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileSelection {
    pub path: PathBuf,
    pub name: String,
}

impl FileSelection {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let name = path
            .file_name()
            .and_then(|n| n.to_str())
            .map(|s| s.to_string())
            .unwrap_or_else(|| path.display().to_string());
        Self { path, name }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Target table name derived from this file's name.
    pub fn default_table_name(&self) -> String {
        default_table_name(&self.name)
    }

    /// File name proposed for the processed export of this file.
    pub fn processed_export_name(&self) -> String {
        format!("processed_{}", self.name)
    }
}

/// Strip the last extension segment; fall back to [`DEFAULT_TARGET_TABLE`].
///
/// `sales.csv` -> `sales`, `daily.sales.csv` -> `daily.sales`, `README` and
/// `.csv` -> `imported_data`.
pub fn default_table_name(file_name: &str) -> String {
    match file_name.rsplit_once('.') {
        Some((stem, _)) if !stem.is_empty() => stem.to_string(),
        _ => DEFAULT_TARGET_TABLE.to_string(),
    }
}
