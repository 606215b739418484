//! Error types for the generator.
//!
//! A single `GeneratorError` covers both the enrichment core and the
//! surrounding I/O. Every variant is fatal for the run; the enrichment is
//! deterministic, so nothing is retried.

use std::path::PathBuf;

use thiserror::Error;

/// Main error type for the generator library.
#[derive(Debug, Error)]
pub enum GeneratorError {
    /// A PSGC code is not exactly ten characters long.
    #[error("Invalid PSGC code length: '{code}' has {length} characters, expected 10")]
    InvalidCodeLength { code: String, length: usize },

    /// A record's geographic level tag is not one of the known levels.
    ///
    /// Only raised when strict level checking is enabled; otherwise the
    /// record is moved to the unclassified bucket.
    #[error("Unrecognized geographic level '{level}' for PSGC code {code}")]
    UnrecognizedLevel { code: String, level: String },

    /// A required column is absent from the header row of a CSV or workbook source.
    #[error("Missing required column in datafile: '{0}'")]
    MissingColumn(String),

    /// Population cell could not be read as a non-negative integer.
    #[error("Invalid population '{value}' for PSGC code {code}")]
    InvalidPopulation { code: String, value: String },

    /// Input file type is not supported.
    #[error("Unsupported input file: {}. Expected a .json, .csv or .xlsx file", .0.display())]
    UnsupportedInput(PathBuf),

    /// The workbook has no sheet at the requested index.
    #[error("Workbook has no sheet at index {index} ({available} sheets available)")]
    MissingSheet { index: usize, available: usize },

    /// A record's code cannot be used as an output file name.
    #[error("PSGC code '{0}' cannot be used as an output file name")]
    UnsafeOutputPath(String),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// JSON (de)serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// CSV parsing error.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Workbook parsing error.
    #[error("Spreadsheet error: {0}")]
    Spreadsheet(#[from] calamine::Error),
}

/// Result type alias for generator operations.
pub type Result<T> = std::result::Result<T, GeneratorError>;
