use std::fs;
use std::path::Path;

use anyhow::Result;
use ml_corpora_core::{DatasetAdapter, Error as CoreError, Example, INVALID_LABEL};
use ml_corpora_datasets::{rank_predict, sentence_sentence, sheffield_plagiarism};
use proptest::prelude::*;
use tempfile::TempDir;
use test_case::test_case;

fn write(dir: &Path, relative: &str, contents: &str) {
    let path = dir.join(relative);
    fs::create_dir_all(path.parent().unwrap()).unwrap();
    fs::write(path, contents).unwrap();
}

fn generate_all(adapter: &dyn DatasetAdapter, base: &Path, split: &str) -> Result<Vec<Example>> {
    let examples = adapter
        .generate(base, split)?
        .collect::<ml_corpora_core::Result<Vec<_>>>()?;
    Ok(examples)
}

fn csv_quote(value: &str) -> String {
    format!("\"{}\"", value.replace('"', "\"\""))
}

#[test]
fn rank_predict_example_scenario() -> Result<()> {
    let dir = TempDir::new()?;
    write(
        dir.path(),
        "biocontradiction/biocontradiction.csv",
        "QUESTION,REVIEW_TITLE,ASSERTION,abstracts,TEXT\n\
         \"Is X effective?\",\"Trial A\",\"YS\",\"abstract body\",\"claim sentence\"\n",
    );

    let adapter = rank_predict::adapter()?;
    let examples = generate_all(&adapter, dir.path(), "train")?;
    assert_eq!(examples.len(), 1);

    let (key, record) = examples[0].clone().into_pair();
    assert_eq!(key, "1");
    assert_eq!(
        serde_json::to_value(&record)?,
        serde_json::json!({
            "question": "Is X effective?",
            "review_title": "Trial A",
            "text": "abstract body",
            "best_sentence": "claim sentence",
            "label": 0,
        })
    );
    Ok(())
}

#[test_case("YS", 0 ; "yes")]
#[test_case("NO", 1 ; "no")]
#[test_case("", INVALID_LABEL ; "empty")]
#[test_case("MAYBE", INVALID_LABEL ; "unrecognized")]
fn rank_predict_assertion_labels(assertion: &str, expected: i64) {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "biocontradiction/biocontradiction.csv",
        &format!(
            "REVIEW_PMID,REVIEW_TITLE,ASSERTION,PMID,QUESTION,TYPE,TEXT,length,abstracts\n\
             1,Review,{assertion},2,Q?,T,sentence,10,abstract\n"
        ),
    );

    let examples = generate_all(&rank_predict::adapter().unwrap(), dir.path(), "train").unwrap();
    assert_eq!(examples[0].record.label(rank_predict::LABEL), Some(expected));
    assert_eq!(examples[0].record.has_valid_label(), expected != INVALID_LABEL);
}

#[test_case("TRUE", 0 ; "agree")]
#[test_case("FALSE", 1 ; "disagree")]
#[test_case("True", INVALID_LABEL ; "case sensitive")]
#[test_case("", INVALID_LABEL ; "empty")]
fn sentence_sentence_agreement_labels(agree: &str, expected: i64) {
    let dir = TempDir::new().unwrap();
    write(
        dir.path(),
        "biocontradiction/abstract_pairs.csv",
        &format!(
            ",REVIEW_PMID_x,REVIEW_TITLE_x,ASSERTION_x,QUESTION,TEXT_x,REVIEW_TITLE_y,TEXT_y,AGREE\n\
             0,11,Review one,YS,Q?,claim one,Review two,claim two,{agree}\n"
        ),
    );

    let examples =
        generate_all(&sentence_sentence::adapter().unwrap(), dir.path(), "train").unwrap();
    let record = &examples[0].record;
    assert_eq!(record.label(sentence_sentence::LABEL), Some(expected));
    assert_eq!(record.text(sentence_sentence::TITLE1), Some("Review one"));
    assert_eq!(record.text(sentence_sentence::TEXT1), Some("claim one"));
    assert_eq!(record.text(sentence_sentence::TITLE2), Some("Review two"));
    assert_eq!(record.text(sentence_sentence::TEXT2), Some("claim two"));
    assert_eq!(record.text(sentence_sentence::QUESTION), Some("Q?"));
}

#[test]
fn plagiarism_labels_are_verbatim_per_split() -> Result<()> {
    let dir = TempDir::new()?;
    write(
        dir.path(),
        "sheffield_plagiarism/sheffield_plagiarism_train.csv",
        "original,student,label\nsource a,answer a,0\nsource b,answer b,4\nsource c,answer c,2\n",
    );
    write(
        dir.path(),
        "sheffield_plagiarism/sheffield_plagiarism_test.csv",
        "original,student,label\nsource d,answer d,3\n",
    );

    let adapter = sheffield_plagiarism::adapter()?;
    assert_eq!(
        adapter.list_splits().iter().map(ToString::to_string).collect::<Vec<_>>(),
        ["train", "test"]
    );

    let train = generate_all(&adapter, dir.path(), "train")?;
    let labels: Vec<_> = train
        .iter()
        .map(|e| e.record.label(sheffield_plagiarism::LABEL))
        .collect();
    assert_eq!(labels, [Some(0), Some(4), Some(2)]);
    assert_eq!(train[1].record.text(sheffield_plagiarism::STUDENT), Some("answer b"));

    let test = generate_all(&adapter, dir.path(), "test")?;
    assert_eq!(test.len(), 1);
    assert_eq!(test[0].key, "1");
    assert_eq!(test[0].record.label(sheffield_plagiarism::LABEL), Some(3));
    Ok(())
}

#[test]
fn plagiarism_rejects_label_outside_vocabulary() -> Result<()> {
    let dir = TempDir::new()?;
    write(
        dir.path(),
        "sheffield_plagiarism/sheffield_plagiarism_train.csv",
        "original,student,label\na,b,1\nc,d,7\n",
    );

    let results: Vec<_> = sheffield_plagiarism::adapter()?
        .generate(dir.path(), "train")?
        .collect();
    assert_eq!(results.len(), 2);
    assert!(matches!(results[1], Err(CoreError::MalformedRow { row: 2, .. })));
    Ok(())
}

#[test_case(rank_predict::NAME ; "claim assertion")]
#[test_case(sentence_sentence::NAME ; "claim agreement")]
#[test_case(sheffield_plagiarism::NAME ; "plagiarism")]
fn missing_manual_dir_fails_before_any_record(name: &str) {
    let dir = TempDir::new().unwrap();
    let adapter = ml_corpora_datasets::adapter_by_name(name).unwrap();

    for split in adapter.list_splits() {
        match adapter.generate(&dir.path().join("nowhere"), split.as_str()) {
            Err(CoreError::MissingInputFile { split: reported, path, .. }) => {
                assert_eq!(reported, split.as_str());
                assert!(path.starts_with(dir.path().join("nowhere")));
            }
            Err(other) => panic!("unexpected error: {other}"),
            Ok(_) => panic!("generation of a missing split succeeded"),
        }
    }
}

#[test]
fn renamed_source_column_is_schema_mismatch() -> Result<()> {
    let dir = TempDir::new()?;
    write(
        dir.path(),
        "biocontradiction/abstract_pairs.csv",
        "QUESTION,REVIEW_TITLE_x,TEXT_x,REVIEW_TITLE_y,TEXT_y,AGREEMENT\nq,a,b,c,d,TRUE\n",
    );

    match sentence_sentence::adapter()?.generate(dir.path(), "train") {
        Err(CoreError::SchemaMismatch { column, split, .. }) => {
            assert_eq!(column, "AGREE");
            assert_eq!(split, "train");
        }
        Err(other) => panic!("unexpected error: {other}"),
        Ok(_) => panic!("generation with a missing column succeeded"),
    }
    Ok(())
}

#[test]
fn claim_adapters_read_the_last_repeated_column() -> Result<()> {
    let dir = TempDir::new()?;
    write(
        dir.path(),
        "biocontradiction/biocontradiction.csv",
        "QUESTION,REVIEW_TITLE,ASSERTION,abstracts,TEXT,TEXT\nq,t,YS,a,first,second\n",
    );
    write(
        dir.path(),
        "biocontradiction/abstract_pairs.csv",
        "QUESTION,REVIEW_TITLE_x,TEXT_x,REVIEW_TITLE_y,TEXT_y,AGREE,AGREE\nq,a,b,c,d,FALSE,TRUE\n",
    );

    let claims = generate_all(&rank_predict::adapter()?, dir.path(), "train")?;
    assert_eq!(claims[0].record.text(rank_predict::BEST_SENTENCE), Some("second"));

    let pairs = generate_all(&sentence_sentence::adapter()?, dir.path(), "train")?;
    assert_eq!(pairs[0].record.label(sentence_sentence::LABEL), Some(0));
    Ok(())
}

#[test]
fn plagiarism_reads_the_first_repeated_column() -> Result<()> {
    let dir = TempDir::new()?;
    write(
        dir.path(),
        "sheffield_plagiarism/sheffield_plagiarism_train.csv",
        "original,student,label,student\nsource,first,1,second\n",
    );

    let examples = generate_all(&sheffield_plagiarism::adapter()?, dir.path(), "train")?;
    assert_eq!(examples[0].record.text(sheffield_plagiarism::STUDENT), Some("first"));
    Ok(())
}

#[test]
fn unknown_split_is_rejected() -> Result<()> {
    let adapter = rank_predict::adapter()?;
    assert!(matches!(
        adapter.generate(Path::new("."), "test"),
        Err(CoreError::UnknownSplit { .. })
    ));
    Ok(())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(32))]

    #[test]
    fn one_record_per_row_with_sequential_keys(
        rows in prop::collection::vec(("[a-zA-Z ,\"\n]{0,12}", "[a-z ]{0,8}", 0u8..5), 0..20)
    ) {
        let dir = TempDir::new().unwrap();
        let mut contents = String::from("original,student,label\n");
        for (original, student, label) in &rows {
            contents.push_str(&format!("{},{},{}\n", csv_quote(original), csv_quote(student), label));
        }
        write(dir.path(), "sheffield_plagiarism/sheffield_plagiarism_train.csv", &contents);

        let adapter = sheffield_plagiarism::adapter().unwrap();
        let first = generate_all(&adapter, dir.path(), "train").unwrap();
        let second = generate_all(&adapter, dir.path(), "train").unwrap();

        prop_assert_eq!(first.len(), rows.len());
        prop_assert_eq!(&first, &second);
        for (i, (example, (original, student, label))) in first.iter().zip(&rows).enumerate() {
            prop_assert_eq!(&example.key, &(i + 1).to_string());
            prop_assert_eq!(example.record.text("original"), Some(original.as_str()));
            prop_assert_eq!(example.record.text("student"), Some(student.as_str()));
            prop_assert_eq!(example.record.label("label"), Some(i64::from(*label)));
        }
    }
}
