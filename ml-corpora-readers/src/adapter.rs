//! Generic CSV-backed dataset adapter
//!
//! Every corpus handled here has the same shape: a header row, one example per
//! data row, text fields copied from named columns and one categorical label
//! derived from a named column. [`CsvDatasetAdapter`] implements that once and
//! is specialised by a [`CsvAdapterConfig`].

use std::collections::HashSet;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use ml_corpora_core::{
    DatasetAdapter, DatasetInfo, Error as CoreError, Example, ExampleSource, FieldKind, LabelRule,
    Record, ResolvedSplit, Result as CoreResult, Schema, SplitName, SplitTable, Value,
};

use crate::csv::{is_row_level, CsvReaderOptions, CsvRowReader, MalformedRowPolicy, RawRow};
use crate::error::{Error, Result};

/// Binds an output field to the source column it is read from
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ColumnMapping {
    /// Output field name
    pub field: String,

    /// Source column name in the CSV header
    pub column: String,
}

impl ColumnMapping {
    /// Create a new mapping
    pub fn new(field: &str, column: &str) -> Self {
        Self {
            field: field.to_string(),
            column: column.to_string(),
        }
    }
}

/// Everything that distinguishes one CSV corpus from another
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CsvAdapterConfig {
    /// Descriptive envelope
    pub info: DatasetInfo,

    /// Output schema
    pub schema: Schema,

    /// Split name to backing file
    pub splits: SplitTable,

    /// Source column of every schema field
    pub columns: Vec<ColumnMapping>,

    /// Normalization applied to label fields
    pub label_rule: LabelRule,

    /// CSV dialect and row handling
    #[serde(default)]
    pub reader: CsvReaderOptions,
}

impl CsvAdapterConfig {
    /// Check that the mapping covers the schema exactly and that the label
    /// rule fits every label field
    pub fn validate(&self) -> Result<()> {
        let mut seen = HashSet::with_capacity(self.columns.len());
        for mapping in &self.columns {
            if self.schema.index_of(&mapping.field).is_none() {
                return Err(Error::Config(format!(
                    "column mapping targets unknown field '{}'",
                    mapping.field
                )));
            }
            if !seen.insert(mapping.field.as_str()) {
                return Err(Error::Config(format!(
                    "field '{}' is mapped more than once",
                    mapping.field
                )));
            }
        }

        for field in self.schema.fields() {
            if !seen.contains(field.name()) {
                return Err(Error::Config(format!(
                    "field '{}' has no source column",
                    field.name()
                )));
            }
            if let FieldKind::ClassLabel { num_classes } = field.kind() {
                self.label_rule.validate(num_classes)?;
            }
        }

        Ok(())
    }

    /// Source column of a field
    pub fn source_column(&self, field: &str) -> Option<&str> {
        self.columns
            .iter()
            .find(|m| m.field == field)
            .map(|m| m.column.as_str())
    }
}

/// A dataset adapter over CSV files with a header row
#[derive(Debug, Clone)]
pub struct CsvDatasetAdapter {
    config: CsvAdapterConfig,
    schema: Arc<Schema>,
    label_rule: Arc<LabelRule>,
}

impl CsvDatasetAdapter {
    /// Create an adapter from a validated configuration
    pub fn new(config: CsvAdapterConfig) -> Result<Self> {
        config.validate()?;
        let schema = Arc::new(config.schema.clone());
        let label_rule = Arc::new(config.label_rule.clone());

        Ok(Self {
            config,
            schema,
            label_rule,
        })
    }

    /// Create an adapter from a JSON description of its configuration
    pub fn from_json(json: &str) -> Result<Self> {
        Self::new(serde_json::from_str(json)?)
    }

    /// Replace the reader options, e.g. to skip malformed rows
    pub fn with_reader_options(mut self, options: CsvReaderOptions) -> Self {
        self.config.reader = options;
        self
    }

    /// Get the configuration
    pub fn config(&self) -> &CsvAdapterConfig {
        &self.config
    }

    /// Open a split under `base_dir` as a concrete record stream
    pub fn open_split(&self, base_dir: &Path, split: &str) -> CoreResult<RecordStream> {
        let resolved = self
            .config
            .splits
            .resolve(base_dir, split)
            .ok_or_else(|| CoreError::UnknownSplit {
                dataset: self.config.info.name.clone(),
                split: split.to_string(),
            })?;

        RecordStream::open(self, resolved)
    }
}

impl DatasetAdapter for CsvDatasetAdapter {
    fn info(&self) -> &DatasetInfo {
        &self.config.info
    }

    fn schema(&self) -> Arc<Schema> {
        self.schema.clone()
    }

    fn list_splits(&self) -> Vec<SplitName> {
        self.config.splits.splits()
    }

    fn locate(&self, base_dir: &Path) -> Vec<ResolvedSplit> {
        self.config.splits.resolve_all(base_dir)
    }

    fn generate(&self, base_dir: &Path, split: &str) -> CoreResult<Box<dyn ExampleSource>> {
        Ok(Box::new(self.open_split(base_dir, split)?))
    }
}

/// Lazily maps the rows of one split's CSV file to examples.
///
/// Owns the file handle; it is closed when the stream is dropped.
pub struct RecordStream {
    rows: CsvRowReader<BufReader<File>>,
    schema: Arc<Schema>,
    label_rule: Arc<LabelRule>,
    split: SplitName,
    path: PathBuf,

    /// Header position and kind of every schema field, in schema order
    plan: Vec<(usize, FieldKind)>,
    header_width: usize,
    policy: MalformedRowPolicy,

    emitted: u64,
    skipped: u64,
    finished: bool,
}

impl RecordStream {
    fn open(adapter: &CsvDatasetAdapter, resolved: ResolvedSplit) -> CoreResult<Self> {
        let ResolvedSplit { split, path } = resolved;
        let options = &adapter.config.reader;

        let file = open_input(&path).map_err(|source| CoreError::MissingInputFile {
            split: split.to_string(),
            path: path.clone(),
            source,
        })?;
        let rows = CsvRowReader::new(BufReader::with_capacity(options.buffer_size, file), options)?;

        let mut plan = Vec::with_capacity(adapter.schema.len());
        for field in adapter.schema.fields() {
            let column = adapter.config.source_column(field.name()).ok_or_else(|| {
                CoreError::InvalidArgument(format!("field '{}' has no source column", field.name()))
            })?;
            let index = rows.column_index(column).ok_or_else(|| CoreError::SchemaMismatch {
                split: split.to_string(),
                column: column.to_string(),
                path: path.clone(),
            })?;
            plan.push((index, field.kind()));
        }

        let header_width = rows.header().len();
        debug!(
            dataset = %adapter.config.info.name,
            split = %split,
            path = %path.display(),
            columns = header_width,
            "opened split"
        );

        Ok(Self {
            rows,
            schema: adapter.schema.clone(),
            label_rule: adapter.label_rule.clone(),
            split,
            path,
            plan,
            header_width,
            policy: options.malformed_rows,
            emitted: 0,
            skipped: 0,
            finished: false,
        })
    }

    /// Number of examples emitted so far
    pub fn emitted(&self) -> u64 {
        self.emitted
    }

    fn map_row(&self, row: &RawRow) -> std::result::Result<Record, String> {
        if row.len() != self.header_width {
            return Err(format!(
                "expected {} fields, found {}",
                self.header_width,
                row.len()
            ));
        }

        let mut values = Vec::with_capacity(self.plan.len());
        for &(index, kind) in &self.plan {
            let raw = row
                .get(index)
                .ok_or_else(|| format!("no value at column {}", index))?;
            let value = match kind {
                FieldKind::Text => Value::Text(raw.to_string()),
                FieldKind::ClassLabel { num_classes } => {
                    Value::Label(self.label_rule.normalize(raw, num_classes)?)
                }
            };
            values.push(value);
        }

        Record::try_new(self.schema.clone(), values).map_err(|e| e.to_string())
    }

    /// Apply the malformed-row policy. Returns the error to yield, if any.
    fn reject(&mut self, row: u64, reason: String) -> Option<CoreError> {
        match self.policy {
            MalformedRowPolicy::Skip => {
                warn!(split = %self.split, row, %reason, "skipping malformed row");
                self.skipped += 1;
                None
            }
            MalformedRowPolicy::Fail => {
                self.finished = true;
                Some(CoreError::MalformedRow {
                    split: self.split.to_string(),
                    row,
                    reason,
                })
            }
        }
    }
}

fn open_input(path: &Path) -> std::io::Result<File> {
    let file = File::open(path)?;
    if file.metadata()?.is_dir() {
        return Err(std::io::Error::new(
            std::io::ErrorKind::InvalidInput,
            "path is a directory",
        ));
    }
    Ok(file)
}

impl Iterator for RecordStream {
    type Item = CoreResult<Example>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if self.finished {
                return None;
            }

            match self.rows.next() {
                None => {
                    self.finished = true;
                    debug!(
                        split = %self.split,
                        path = %self.path.display(),
                        emitted = self.emitted,
                        skipped = self.skipped,
                        "split exhausted"
                    );
                    return None;
                }
                Some(Ok(row)) => match self.map_row(&row) {
                    Ok(record) => {
                        self.emitted += 1;
                        return Some(Ok(Example {
                            key: row.ordinal.to_string(),
                            record,
                        }));
                    }
                    Err(reason) => {
                        if let Some(err) = self.reject(row.ordinal, reason) {
                            return Some(Err(err));
                        }
                    }
                },
                Some(Err(err)) if is_row_level(&err) => {
                    let row = self.rows.rows_read();
                    if let Some(err) = self.reject(row, err.to_string()) {
                        return Some(Err(err));
                    }
                }
                Some(Err(err)) => {
                    self.finished = true;
                    return Some(Err(err.into()));
                }
            }
        }
    }
}

impl ExampleSource for RecordStream {
    fn schema(&self) -> Arc<Schema> {
        self.schema.clone()
    }

    fn split(&self) -> &SplitName {
        &self.split
    }

    fn rows_read(&self) -> u64 {
        self.rows.rows_read()
    }

    fn rows_skipped(&self) -> u64 {
        self.skipped
    }
}
