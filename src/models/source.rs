//! Source and direction selectors.

use serde::{Deserialize, Serialize};

/// Which side the user treats as the data source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum DataSource {
    #[default]
    ClickHouse,
    FlatFile,
}

impl DataSource {
    pub fn label(self) -> &'static str {
        match self {
            DataSource::ClickHouse => "ClickHouse",
            DataSource::FlatFile => "Flat File",
        }
    }

    pub fn all() -> &'static [DataSource] {
        &[DataSource::ClickHouse, DataSource::FlatFile]
    }
}

/// Direction of the transfer relative to ClickHouse.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TransferDirection {
    #[default]
    ToClickHouse,
    FromClickHouse,
}

impl TransferDirection {
    pub fn label(self) -> &'static str {
        match self {
            TransferDirection::ToClickHouse => "To ClickHouse",
            TransferDirection::FromClickHouse => "From ClickHouse",
        }
    }

    pub fn all() -> &'static [TransferDirection] {
        &[TransferDirection::ToClickHouse, TransferDirection::FromClickHouse]
    }
}

/// Field delimiter for flat files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Delimiter {
    #[default]
    #[serde(rename = ",")]
    Comma,
    #[serde(rename = "\t")]
    Tab,
    #[serde(rename = ";")]
    Semicolon,
    #[serde(rename = "|")]
    Pipe,
}

impl Delimiter {
    pub fn as_str(self) -> &'static str {
        match self {
            Delimiter::Comma => ",",
            Delimiter::Tab => "\t",
            Delimiter::Semicolon => ";",
            Delimiter::Pipe => "|",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Delimiter::Comma => "Comma (,)",
            Delimiter::Tab => "Tab",
            Delimiter::Semicolon => "Semicolon (;)",
            Delimiter::Pipe => "Pipe (|)",
        }
    }

    pub fn all() -> &'static [Delimiter] {
        &[Delimiter::Comma, Delimiter::Tab, Delimiter::Semicolon, Delimiter::Pipe]
    }
}
