//! Error types for corpus readers

use thiserror::Error;

/// Error type for corpus readers
#[derive(Error, Debug)]
pub enum Error {
    /// Core library error
    #[error("Core error: {0}")]
    Core(#[from] ml_corpora_core::Error),

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// CSV format error
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// JSON format error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Invalid adapter configuration
    #[error("Invalid configuration: {0}")]
    Config(String),
}

/// Result type for corpus readers
pub type Result<T> = std::result::Result<T, Error>;

impl From<Error> for ml_corpora_core::Error {
    fn from(err: Error) -> Self {
        match err {
            Error::Core(inner) => inner,
            Error::Io(inner) => Self::Io(inner),
            Error::Csv(inner) => match inner.position() {
                Some(pos) => {
                    let message = format!("{} (line {}, byte {})", inner, pos.line(), pos.byte());
                    Self::Io(std::io::Error::new(std::io::ErrorKind::InvalidData, message))
                }
                None => Self::Io(inner.into()),
            },
            Error::Json(inner) => Self::Json(inner),
            Error::Config(message) => Self::InvalidArgument(message),
        }
    }
}
