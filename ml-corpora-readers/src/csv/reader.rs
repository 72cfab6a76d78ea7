//! Header-aware CSV row reader

use std::collections::HashMap;
use std::io::Read;

use csv::{ReaderBuilder, StringRecord};
use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// What to do with a data row that cannot be mapped onto the schema
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum MalformedRowPolicy {
    /// Yield the error and end the stream
    #[default]
    Fail,

    /// Log the row, count it, and continue with the next one
    Skip,
}

/// Which column a header name refers to when it appears more than once
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DuplicateColumnPolicy {
    /// The leftmost column with the name
    #[default]
    FirstWins,

    /// The rightmost column with the name
    LastWins,
}

/// Options for CSV reader
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CsvReaderOptions {
    /// Delimiter character
    pub delimiter: u8,

    /// Quote character
    pub quote: u8,

    /// Escape character
    pub escape: Option<u8>,

    /// Comment character
    pub comment: Option<u8>,

    /// Buffer size for file reads
    pub buffer_size: usize,

    /// Handling of rows that do not fit the header
    pub malformed_rows: MalformedRowPolicy,

    /// Resolution of repeated header names
    pub duplicate_columns: DuplicateColumnPolicy,
}

impl Default for CsvReaderOptions {
    fn default() -> Self {
        Self {
            delimiter: b',',
            quote: b'"',
            escape: None,
            comment: None,
            buffer_size: 64 * 1024, // 64KB
            malformed_rows: MalformedRowPolicy::Fail,
            duplicate_columns: DuplicateColumnPolicy::FirstWins,
        }
    }
}

/// One data row together with its 1-based position among the data rows
#[derive(Debug, Clone)]
pub struct RawRow {
    /// 1-based data row ordinal; the header is not counted
    pub ordinal: u64,

    /// Decoded fields
    pub record: StringRecord,
}

impl RawRow {
    /// Get a field by position
    pub fn get(&self, index: usize) -> Option<&str> {
        self.record.get(index)
    }

    /// Number of fields in this row
    pub fn len(&self) -> usize {
        self.record.len()
    }

    /// Check whether the row has no fields
    pub fn is_empty(&self) -> bool {
        self.record.is_empty()
    }
}

/// Streams the data rows of a CSV input whose first row is a header.
///
/// Rows are not required to match the header width; callers decide what a
/// short or long row means.
pub struct CsvRowReader<R: Read> {
    /// Inner CSV reader
    reader: csv::Reader<R>,

    /// Header row
    header: StringRecord,

    /// Header positions by column name
    positions: HashMap<String, usize>,

    /// Data rows consumed so far, including undecodable ones
    rows_read: u64,

    /// Whether the reader is exhausted
    exhausted: bool,
}

impl<R: Read> CsvRowReader<R> {
    /// Create a row reader, consuming the header row
    pub fn new(reader: R, options: &CsvReaderOptions) -> Result<Self> {
        let mut builder = ReaderBuilder::new();
        builder
            .delimiter(options.delimiter)
            .quote(options.quote)
            .buffer_capacity(options.buffer_size)
            .has_headers(true)
            .flexible(true);

        if let Some(escape) = options.escape {
            builder.escape(Some(escape)).double_quote(false);
        }

        if let Some(comment) = options.comment {
            builder.comment(Some(comment));
        }

        let mut reader = builder.from_reader(reader);
        let header = reader.headers()?.clone();

        let mut positions = HashMap::with_capacity(header.len());
        for (i, name) in header.iter().enumerate() {
            match options.duplicate_columns {
                DuplicateColumnPolicy::FirstWins => {
                    positions.entry(name.to_string()).or_insert(i);
                }
                DuplicateColumnPolicy::LastWins => {
                    positions.insert(name.to_string(), i);
                }
            }
        }

        Ok(Self {
            reader,
            header,
            positions,
            rows_read: 0,
            exhausted: false,
        })
    }

    /// Get the header row
    pub fn header(&self) -> &StringRecord {
        &self.header
    }

    /// Get the position of a column in the header
    pub fn column_index(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    /// Number of data rows consumed so far
    pub fn rows_read(&self) -> u64 {
        self.rows_read
    }
}

/// Whether a CSV error affects only the row being read
pub fn is_row_level(err: &Error) -> bool {
    match err {
        Error::Csv(e) => matches!(
            e.kind(),
            csv::ErrorKind::Utf8 { .. } | csv::ErrorKind::UnequalLengths { .. }
        ),
        _ => false,
    }
}

impl<R: Read> Iterator for CsvRowReader<R> {
    type Item = Result<RawRow>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.exhausted {
            return None;
        }

        let mut record = StringRecord::with_capacity(256, self.header.len());
        match self.reader.read_record(&mut record) {
            Ok(true) => {
                self.rows_read += 1;
                Some(Ok(RawRow {
                    ordinal: self.rows_read,
                    record,
                }))
            }
            Ok(false) => {
                self.exhausted = true;
                None
            }
            Err(e) => {
                let err = Error::from(e);
                if is_row_level(&err) {
                    self.rows_read += 1;
                } else {
                    self.exhausted = true;
                }
                Some(Err(err))
            }
        }
    }
}
