//! Manually downloaded text corpora as labeled example streams
//!
//! Three corpora are provided, each as a [`CsvDatasetAdapter`] configuration:
//!
//! - [`rank_predict`]: question, review title, abstract and claim sentence,
//!   labelled with the claim's yes/no assertion.
//! - [`sentence_sentence`]: two claims answering the same question, labelled
//!   with whether they agree.
//! - [`sheffield_plagiarism`]: original passage and student answer, labelled
//!   with one of five plagiarism classes.
//!
//! The files are never downloaded here. Callers pass the manual data
//! directory that holds each corpus's subdirectory.

pub mod biocontradiction;
pub mod rank_predict;
pub mod sentence_sentence;
pub mod sheffield_plagiarism;

use tracing::debug;

pub use ml_corpora_readers::{CsvDatasetAdapter, Error, Result};

/// Names of the built-in datasets, in registry order
pub const DATASET_NAMES: [&str; 3] = [
    rank_predict::NAME,
    sentence_sentence::NAME,
    sheffield_plagiarism::NAME,
];

/// Build a built-in adapter by its registry name
pub fn adapter_by_name(name: &str) -> Result<CsvDatasetAdapter> {
    debug!(dataset = name, "building adapter");
    match name {
        rank_predict::NAME => rank_predict::adapter(),
        sentence_sentence::NAME => sentence_sentence::adapter(),
        sheffield_plagiarism::NAME => sheffield_plagiarism::adapter(),
        _ => Err(Error::Config(format!(
            "unknown dataset '{}', expected one of: {}",
            name,
            DATASET_NAMES.join(", ")
        ))),
    }
}

/// Build every built-in adapter
pub fn builtin_adapters() -> Result<Vec<CsvDatasetAdapter>> {
    DATASET_NAMES.iter().map(|name| adapter_by_name(name)).collect()
}
