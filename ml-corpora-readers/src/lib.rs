//! CSV-backed corpus adapters for ML data processing
//!
//! This crate turns header-bearing CSV files into keyed example streams. The
//! [`CsvDatasetAdapter`] is configured per corpus with a schema, a split table,
//! source column names and a label rule.

pub mod adapter;
pub mod csv;
mod error;

pub use adapter::{ColumnMapping, CsvAdapterConfig, CsvDatasetAdapter, RecordStream};
pub use crate::csv::{CsvReaderOptions, CsvRowReader, DuplicateColumnPolicy, MalformedRowPolicy};
pub use error::{Error, Result};

// Re-export core types
pub use ml_corpora_core::{
    DatasetAdapter, DatasetInfo, Example, ExampleSource, Field, FieldKind, LabelRule, Record,
    Schema, SplitName, Value,
};
