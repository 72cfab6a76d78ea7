//! Error types for corpus adapters

use std::io;
use std::path::PathBuf;

use thiserror::Error;

/// Result type for corpus adapter operations
pub type Result<T> = std::result::Result<T, Error>;

/// Error type for corpus adapter operations
#[derive(Error, Debug)]
pub enum Error {
    /// The backing file of a split is absent or unreadable
    #[error("missing input file for split '{split}': {path}")]
    MissingInputFile {
        /// Split being generated
        split: String,
        /// Path the split resolved to
        path: PathBuf,
        /// Underlying open error
        #[source]
        source: io::Error,
    },

    /// A mapped source column is not present in the file header
    #[error("schema mismatch in split '{split}': source column '{column}' not found in header of {path}")]
    SchemaMismatch {
        /// Split being generated
        split: String,
        /// Source column that could not be found
        column: String,
        /// File whose header was inspected
        path: PathBuf,
    },

    /// A data row could not be mapped onto the schema
    #[error("malformed row {row} in split '{split}': {reason}")]
    MalformedRow {
        /// Split being generated
        split: String,
        /// 1-based data row ordinal
        row: u64,
        /// What was wrong with the row
        reason: String,
    },

    /// The adapter does not declare the requested split
    #[error("unknown split '{split}' for dataset '{dataset}'")]
    UnknownSplit {
        /// Dataset name
        dataset: String,
        /// Requested split
        split: String,
    },

    /// Two schema fields share a name
    #[error("duplicate field in schema: {0}")]
    DuplicateField(String),

    /// Invalid argument
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// IO error during file operations
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// JSON (de)serialization error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}
