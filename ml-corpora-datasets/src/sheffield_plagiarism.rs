//! Short-answer plagiarism corpus: original passage, student answer, plagiarism class

use ml_corpora_core::{DatasetInfo, Field, LabelRule, Schema, SplitFile, SplitName, SplitTable, Version};
use ml_corpora_readers::{
    ColumnMapping, CsvAdapterConfig, CsvDatasetAdapter, CsvReaderOptions, DuplicateColumnPolicy, Result,
};

/// Registry name, also the manual subdirectory
pub const NAME: &str = "sheffield_plagiarism";

/// Source passage
pub const ORIGINAL: &str = "original";
/// Student answer
pub const STUDENT: &str = "student";
/// Plagiarism class in `0..5`, stored as-is in the CSV
pub const LABEL: &str = "label";

const NUM_CLASSES: u32 = 5;

const HOMEPAGE: &str = "https://ir.shef.ac.uk/cloughie/resources/plagiarism_corpus.html";

const CITATION: &str = r"
@article{article,
author = {Clough, Paul and Stevenson, Mark},
year = {2011},
month = {03},
pages = {5-24},
title = {Developing a corpus of plagiarised short answers},
volume = {45},
journal = {Language Resources and Evaluation},
doi = {10.1007/s10579-009-9112-1}
}";

const DESCRIPTION: &str =
    "A corpus consisting of answers to short questions in which plagiarism has been simulated.";

const INSTRUCTIONS: &str = "
Place sheffield_plagiarism_train.csv and sheffield_plagiarism_test.csv (columns original, student,
label) in <manual_dir>/sheffield_plagiarism/.
";

/// Configuration of the plagiarism corpus
pub fn config() -> Result<CsvAdapterConfig> {
    Ok(CsvAdapterConfig {
        info: DatasetInfo::new(NAME, Version::new(1, 0, 0))
            .description(DESCRIPTION)
            .homepage(HOMEPAGE)
            .citation(CITATION)
            .manual_download_instructions(INSTRUCTIONS),
        schema: Schema::try_new(vec![
            Field::text(ORIGINAL),
            Field::text(STUDENT),
            Field::class_label(LABEL, NUM_CLASSES),
        ])?,
        splits: SplitTable::try_new(
            NAME,
            vec![
                SplitFile {
                    split: SplitName::train(),
                    file: "sheffield_plagiarism_train.csv".into(),
                },
                SplitFile {
                    split: SplitName::test(),
                    file: "sheffield_plagiarism_test.csv".into(),
                },
            ],
        )?,
        columns: vec![
            ColumnMapping::new(ORIGINAL, "original"),
            ColumnMapping::new(STUDENT, "student"),
            ColumnMapping::new(LABEL, "label"),
        ],
        label_rule: LabelRule::Verbatim,
        reader: CsvReaderOptions {
            duplicate_columns: DuplicateColumnPolicy::FirstWins,
            ..CsvReaderOptions::default()
        },
    })
}

/// Build the plagiarism adapter
pub fn adapter() -> Result<CsvDatasetAdapter> {
    CsvDatasetAdapter::new(config()?)
}
