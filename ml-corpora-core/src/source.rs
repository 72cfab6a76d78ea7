//! Keyed example streams produced by adapters

use std::sync::Arc;

use serde::Serialize;

use crate::error::Result;
use crate::record::Record;
use crate::schema::Schema;
use crate::split::SplitName;

/// One generated example: a key unique within its split, and the record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Example {
    /// 1-based source row ordinal rendered as a string
    pub key: String,

    /// The mapped record
    pub record: Record,
}

impl Example {
    /// Split into the `(key, record)` pair
    pub fn into_pair(self) -> (String, Record) {
        (self.key, self.record)
    }
}

/// A lazy, finite stream of examples for one split.
///
/// Each stream owns its input; dropping it releases the underlying file.
pub trait ExampleSource: Iterator<Item = Result<Example>> + Send {
    /// Schema every emitted record conforms to
    fn schema(&self) -> Arc<Schema>;

    /// Split being generated
    fn split(&self) -> &SplitName;

    /// Number of data rows read so far, emitted or not
    fn rows_read(&self) -> u64;

    /// Number of malformed rows skipped so far
    fn rows_skipped(&self) -> u64 {
        0
    }
}
