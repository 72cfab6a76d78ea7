//! Export of corpus splits as JSON lines

use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};
use serde::Serialize;
use tracing::info;

use ml_corpora_core::{DatasetAdapter, DatasetInfo, Schema};
use ml_corpora_readers::{CsvDatasetAdapter, CsvReaderOptions, MalformedRowPolicy};

/// Export configuration
#[derive(Debug, Clone, Default)]
pub struct ExportConfig {
    /// Skip malformed rows instead of failing
    pub skip_malformed: bool,

    /// Leave out records whose label is the invalid sentinel
    pub drop_invalid_labels: bool,
}

/// Export result
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ExportSummary {
    /// Records written
    pub written: u64,

    /// Records left out because of an invalid label
    pub dropped: u64,

    /// Malformed rows skipped
    pub skipped: u64,
}

/// Descriptive view of a dataset
#[derive(Debug, Serialize)]
pub struct DatasetReport<'a> {
    /// Envelope
    pub info: &'a DatasetInfo,

    /// Output schema
    pub schema: &'a Schema,

    /// Declared splits
    pub splits: Vec<String>,
}

/// Build the descriptive view of an adapter
pub fn describe<'a>(adapter: &'a CsvDatasetAdapter) -> DatasetReport<'a> {
    DatasetReport {
        info: adapter.info(),
        schema: &adapter.config().schema,
        splits: adapter.list_splits().iter().map(ToString::to_string).collect(),
    }
}

/// Write one split as JSON lines of `{"key": .., "record": {..}}`
pub fn export<W: Write>(
    adapter: CsvDatasetAdapter,
    manual_dir: &Path,
    split: &str,
    config: &ExportConfig,
    mut out: W,
) -> Result<ExportSummary> {
    let adapter = if config.skip_malformed {
        let options = CsvReaderOptions {
            malformed_rows: MalformedRowPolicy::Skip,
            ..adapter.config().reader.clone()
        };
        adapter.with_reader_options(options)
    } else {
        adapter
    };

    let mut stream = adapter
        .generate(manual_dir, split)
        .with_context(|| format!("failed to open split '{}' of {}", split, adapter.name()))?;

    let mut summary = ExportSummary::default();
    for example in stream.by_ref() {
        let example = example.with_context(|| format!("failed to read split '{}'", split))?;
        if config.drop_invalid_labels && !example.record.has_valid_label() {
            summary.dropped += 1;
            continue;
        }
        serde_json::to_writer(&mut out, &example)?;
        out.write_all(b"\n")?;
        summary.written += 1;
    }
    out.flush()?;
    summary.skipped = stream.rows_skipped();

    info!(
        dataset = adapter.name(),
        split,
        written = summary.written,
        dropped = summary.dropped,
        skipped = summary.skipped,
        "export finished"
    );
    Ok(summary)
}
