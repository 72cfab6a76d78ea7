//! Claim agreement: do two claims answering the same question agree?

use ml_corpora_core::{Field, LabelRule, Schema, SplitFile, SplitName, SplitTable};
use ml_corpora_readers::{
    ColumnMapping, CsvAdapterConfig, CsvDatasetAdapter, CsvReaderOptions, DuplicateColumnPolicy, Result,
};

use crate::biocontradiction;

/// Registry name
pub const NAME: &str = "sentence_sentence";

/// Review question shared by both claims
pub const QUESTION: &str = "question";
/// Review title of the first claim
pub const TITLE1: &str = "title1";
/// First claim
pub const TEXT1: &str = "text1";
/// Review title of the second claim
pub const TITLE2: &str = "title2";
/// Second claim
pub const TEXT2: &str = "text2";
/// 0 when the claims agree, 1 when they contradict, -1 when unannotated
pub const LABEL: &str = "label";

const TRAIN_FILE: &str = "abstract_pairs.csv";

const INSTRUCTIONS: &str = "
Download the corpus from the homepage, then pair every two abstracts addressing the same question
and write the pairs to <manual_dir>/biocontradiction/abstract_pairs.csv.
";

/// Configuration of the claim-agreement corpus
pub fn config() -> Result<CsvAdapterConfig> {
    Ok(CsvAdapterConfig {
        info: biocontradiction::info(NAME, INSTRUCTIONS),
        schema: Schema::try_new(vec![
            Field::text(QUESTION),
            Field::text(TITLE1),
            Field::text(TEXT1),
            Field::text(TITLE2),
            Field::text(TEXT2),
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
            ColumnMapping::new(TITLE1, "REVIEW_TITLE_x"),
            ColumnMapping::new(TEXT1, "TEXT_x"),
            ColumnMapping::new(TITLE2, "REVIEW_TITLE_y"),
            ColumnMapping::new(TEXT2, "TEXT_y"),
            ColumnMapping::new(LABEL, "AGREE"),
        ],
        label_rule: LabelRule::table([("TRUE", 0), ("FALSE", 1)]),
        reader: CsvReaderOptions {
            duplicate_columns: DuplicateColumnPolicy::LastWins,
            ..CsvReaderOptions::default()
        },
    })
}

/// Build the claim-agreement adapter
pub fn adapter() -> Result<CsvDatasetAdapter> {
    CsvDatasetAdapter::new(config()?)
}
