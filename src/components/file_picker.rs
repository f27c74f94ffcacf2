//! File picker utilities using rfd crate for native file dialogs.

use std::path::PathBuf;

/// File type filter for file dialogs.
#[derive(Clone, Debug)]
pub struct FileFilter {
    pub name: String,
    pub extensions: Vec<String>,
}

impl FileFilter {
    pub fn new(name: impl Into<String>, extensions: Vec<&str>) -> Self {
        Self {
            name: name.into(),
            extensions: extensions.into_iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Delimited text files
    pub fn delimited() -> Self {
        Self::new("Delimited text", vec!["csv", "tsv", "txt"])
    }

    /// All files
    pub fn all() -> Self {
        Self::new("All Files", vec!["*"])
    }
}

/// Open a flat file picker asynchronously.
/// Returns None if the user cancelled.
pub async fn pick_flat_file() -> Option<PathBuf> {
    let mut dialog = rfd::AsyncFileDialog::new();
    for filter in [FileFilter::delimited(), FileFilter::all()] {
        let extensions: Vec<&str> = filter.extensions.iter().map(|s| s.as_str()).collect();
        dialog = dialog.add_filter(&filter.name, &extensions);
    }
    dialog.pick_file().await.map(|f| f.path().to_path_buf())
}
