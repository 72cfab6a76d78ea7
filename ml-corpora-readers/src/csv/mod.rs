//! CSV input for corpus adapters
//!
//! Decoding is delegated to the `csv` crate. This module adds header lookup
//! by column name and per-row ordinals.

mod reader;

pub use reader::{
    is_row_level, CsvReaderOptions, CsvRowReader, DuplicateColumnPolicy, MalformedRowPolicy, RawRow,
};
