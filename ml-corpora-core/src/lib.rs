//! Core traits, schema and record types for ML corpus adapters
//!
//! A corpus adapter declares a fixed schema of text fields and a categorical
//! label, maps split names to manually provided files, and streams each file
//! as keyed records. This crate holds the pieces every adapter shares; the
//! file formats live in `ml-corpora-readers`.

#![warn(missing_docs)]

pub mod dataset;
pub mod error;
pub mod label;
pub mod record;
pub mod schema;
pub mod source;
pub mod split;

// Re-export key types for convenience
pub use dataset::{DatasetAdapter, DatasetInfo, Version};
pub use error::{Error, Result};
pub use label::LabelRule;
pub use record::{Record, Value};
pub use schema::{Field, FieldKind, Schema, INVALID_LABEL};
pub use source::{Example, ExampleSource};
pub use split::{ResolvedSplit, SplitFile, SplitName, SplitTable};
