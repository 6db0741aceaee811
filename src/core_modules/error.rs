//! Error types for loading, analyzing and exporting blob grids.

use std::path::PathBuf;
use thiserror::Error;

/// Everything that can stop the analysis before a report is produced.
#[derive(Debug, Error)]
pub enum BlobError {
    // === Source Errors ===
    #[error("File cannot be opened.")]
    OpenFailure {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("No filename was entered")]
    MissingFilename,

    // === Header Errors ===
    #[error("Input is empty: expected a 'rows columns' header line")]
    MissingHeader,

    #[error("Invalid header '{line}': expected two whitespace-separated positive integers")]
    InvalidHeader { line: String },

    #[error("Grid dimensions must be positive, got {rows} x {columns}")]
    ZeroDimension { rows: usize, columns: usize },

    #[error("Grid dimensions {rows} x {columns} are too large")]
    OversizedGrid { rows: usize, columns: usize },

    // === Body Errors ===
    #[error("Input ends early: expected {expected} rows, found {found}")]
    TruncatedInput { expected: usize, found: usize },

    #[error("Row {row} is too short: expected {expected} characters, found {found}")]
    ShortRow { row: usize, expected: usize, found: usize },

    // === Export Errors ===
    #[error("Grid of {rows} x {columns} cells is too large for an image")]
    ImageTooLarge { rows: usize, columns: usize },

    #[error("Image export failed: {0}")]
    Image(#[from] image::ImageError),
}

pub type Result<T> = std::result::Result<T, BlobError>;
