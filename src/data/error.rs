use std::path::PathBuf;

use thiserror::Error;

/// Failures while loading dashboard tables from a data source.
///
/// Any of these on a required sheet stops the dashboard from starting. On the
/// optional interpretation sheet they are downgraded to an absent table.
#[derive(Debug, Error)]
pub enum DataError {
    /// The workbook file could not be opened or recognized.
    #[error("Failed to open workbook {path}: {source}")]
    OpenWorkbook {
        path: PathBuf,
        source: calamine::Error,
    },
    /// A sheet exists but could not be read.
    #[error("Failed to read sheet '{sheet}': {message}")]
    ReadSheet { sheet: String, message: String },
    /// The source has no sheet with this name.
    #[error("Sheet '{sheet}' not found in {source_name}")]
    SheetMissing { sheet: String, source_name: String },
    /// A sheet lacks a column required by the canonical schema.
    #[error("Sheet '{sheet}' has no {column} column (headers: {headers:?})")]
    MissingColumn {
        sheet: String,
        column: &'static str,
        headers: Vec<String>,
    },
    /// A non-blank cell could not be converted to the expected type.
    #[error("Sheet '{sheet}' row {row}: invalid {column} value '{value}'")]
    InvalidCell {
        sheet: String,
        row: usize,
        column: &'static str,
        value: String,
    },
    /// The remote spreadsheet rejected the credential.
    #[error("Spreadsheet service rejected the credential (HTTP {status})")]
    Unauthorized { status: u16 },
    /// The remote spreadsheet answered with an unexpected status.
    #[error("Spreadsheet service returned HTTP {status}: {body}")]
    Remote { status: u16, body: String },
    /// Network failure before a response arrived.
    #[error("Spreadsheet service unreachable: {0}")]
    Transport(String),
    /// The remote response body was not the expected JSON shape.
    #[error("Unexpected spreadsheet response: {0}")]
    Decode(String),
    /// No usable credential for the remote spreadsheet.
    #[error("Spreadsheet credential unavailable: {0}")]
    Credential(String),
    /// The spreadsheet identifier or API URL is malformed.
    #[error("Invalid spreadsheet address '{0}'")]
    InvalidAddress(String),
}
