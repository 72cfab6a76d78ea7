//! Claim assertion: does a sentence from an abstract answer the review question?

use ml_corpora_core::{Field, LabelRule, Schema, SplitFile, SplitName, SplitTable};
use ml_corpora_readers::{
    ColumnMapping, CsvAdapterConfig, CsvDatasetAdapter, CsvReaderOptions, DuplicateColumnPolicy, Result,
};

use crate::biocontradiction;

/// Registry name
pub const NAME: &str = "rank_predict";

/// Review question
pub const QUESTION: &str = "question";
/// Title of the systematic review
pub const REVIEW_TITLE: &str = "review_title";
/// Abstract body
pub const TEXT: &str = "text";
/// Sentence of the abstract that carries the claim
pub const BEST_SENTENCE: &str = "best_sentence";
/// 0 when the claim asserts a yes answer, 1 for no, -1 when unannotated
pub const LABEL: &str = "label";

const TRAIN_FILE: &str = "biocontradiction.csv";

const INSTRUCTIONS: &str = "
Place the preprocessed question/abstract CSV (columns QUESTION, REVIEW_TITLE, abstracts, TEXT,
ASSERTION) at <manual_dir>/biocontradiction/biocontradiction.csv.
";

/// Configuration of the claim-assertion corpus
pub fn config() -> Result<CsvAdapterConfig> {
    Ok(CsvAdapterConfig {
        info: biocontradiction::info(NAME, INSTRUCTIONS),
        schema: Schema::try_new(vec![
            Field::text(QUESTION),
            Field::text(REVIEW_TITLE),
            Field::text(TEXT),
            Field::text(BEST_SENTENCE),
            Field::class_label(LABEL, 2),
        ])?,
        splits: SplitTable::try_new(
            biocontradiction::SUBDIRECTORY,
            vec![SplitFile {
                split: SplitName::train(),
                file: TRAIN_FILE.into(),
            }],
        )?,
        columns: vec![
            ColumnMapping::new(QUESTION, "QUESTION"),
            ColumnMapping::new(REVIEW_TITLE, "REVIEW_TITLE"),
            ColumnMapping::new(TEXT, "abstracts"),
            ColumnMapping::new(BEST_SENTENCE, "TEXT"),
            ColumnMapping::new(LABEL, "ASSERTION"),
        ],
        label_rule: LabelRule::table([("YS", 0), ("NO", 1)]),
        reader: CsvReaderOptions {
            duplicate_columns: DuplicateColumnPolicy::LastWins,
            ..CsvReaderOptions::default()
        },
    })
}

/// Build the claim-assertion adapter
pub fn adapter() -> Result<CsvDatasetAdapter> {
    CsvDatasetAdapter::new(config()?)
}
