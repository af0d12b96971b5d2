use std::io::Write;

use super::{Dataset, JsonlDataset, Split};
use crate::error::EvalError;

fn write_jsonl(content: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().expect("temp file");
    file.write_all(content.as_bytes()).expect("write test data");
    file.flush().expect("flush test data");
    file
}

#[test]
fn loads_rows_in_file_order() {
    let file = write_jsonl(concat!(
        r#"{"question": "Janet has 5 apples. She gives 2 to Bob. How many does she have?", "answer": "5 - 2 = 3\n#### 3"}"#,
        "\n",
        r#"{"question": "There are 10 birds. 3 fly away. How many remain?", "answer": "10 - 3 = 7\n#### 7"}"#,
        "\n",
    ));

    let dataset = JsonlDataset::load(file.path()).expect("load");
    assert_eq!(dataset.len(), 2);
    assert!(dataset.get(0).unwrap().question.starts_with("Janet"));
    assert!(dataset.get(1).unwrap().answer.ends_with("#### 7"));
    assert!(dataset.get(2).is_none());
}

#[test]
fn blank_lines_are_skipped() {
    let file = write_jsonl("\n{\"question\": \"q\", \"answer\": \"#### 1\"}\n\n");
    let dataset = JsonlDataset::load(file.path()).expect("load");
    assert_eq!(dataset.len(), 1);
}

#[test]
fn malformed_line_fails_the_load() {
    let file = write_jsonl("{\"question\": \"q\", \"answer\": \"#### 1\"}\nnot json\n");
    let err = JsonlDataset::load(file.path()).unwrap_err();
    assert!(matches!(err, EvalError::Dataset(_)));
    assert!(err.to_string().contains(":2"));
}

#[test]
fn missing_file_is_an_io_error() {
    let err = JsonlDataset::load("/nonexistent/gsm8k/test.jsonl").unwrap_err();
    assert!(matches!(err, EvalError::Io(_)));
}

#[test]
fn split_parses_case_insensitively() {
    assert_eq!("test".parse::<Split>().unwrap(), Split::Test);
    assert_eq!("Train".parse::<Split>().unwrap(), Split::Train);
    assert!("validation".parse::<Split>().is_err());
    assert_eq!(Split::Test.to_string(), "test");
}
