//! GSM8K dataset rows and the JSONL loader that backs them.

use std::fmt;
use std::fs::File;
use std::io::{BufRead, BufReader};
use std::path::{Path, PathBuf};
use std::str::FromStr;

use serde::Deserialize;

use crate::error::EvalError;

/// One GSM8K row: a word problem and its gold answer text.
///
/// The gold answer contains the worked reasoning and ends with a final
/// numeral (the `#### N` convention).
#[derive(Debug, Clone, Deserialize)]
pub struct Gsm8kExample {
    pub question: String,
    pub answer: String,
}

/// Source of evaluation rows for a single split.
pub trait Dataset {
    /// Number of rows in the split.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the row at `index`, or `None` past the end.
    fn get(&self, index: usize) -> Option<&Gsm8kExample>;
}

/// GSM8K split selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Split {
    Train,
    Test,
}

impl Split {
    /// File stem used for the split's JSONL file (`train.jsonl`, `test.jsonl`).
    pub fn as_str(self) -> &'static str {
        match self {
            Split::Train => "train",
            Split::Test => "test",
        }
    }
}

impl fmt::Display for Split {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Split {
    type Err = EvalError;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        match raw.to_lowercase().as_str() {
            "train" => Ok(Split::Train),
            "test" => Ok(Split::Test),
            other => Err(EvalError::InvalidRequest(format!(
                "Unknown split '{other}', expected 'train' or 'test'"
            ))),
        }
    }
}

/// In-memory dataset loaded from a newline-delimited JSON file of
/// `{"question", "answer"}` objects.
#[derive(Debug)]
pub struct JsonlDataset {
    path: PathBuf,
    examples: Vec<Gsm8kExample>,
}

impl JsonlDataset {
    /// Loads every row of `path`. A malformed line fails the whole load.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, EvalError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let reader = BufReader::new(file);

        let mut examples = Vec::new();
        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            if line.trim().is_empty() {
                continue;
            }
            let example: Gsm8kExample = serde_json::from_str(&line).map_err(|err| {
                EvalError::Dataset(format!(
                    "{}:{}: {err}",
                    path.display(),
                    line_no + 1
                ))
            })?;
            examples.push(example);
        }

        log::debug!("loaded {} examples from {}", examples.len(), path.display());
        Ok(Self {
            path: path.to_path_buf(),
            examples,
        })
    }

    /// Convenience for the `{data_dir}/{split}.jsonl` layout.
    pub fn for_split(data_dir: impl AsRef<Path>, split: Split) -> Result<Self, EvalError> {
        Self::load(data_dir.as_ref().join(format!("{}.jsonl", split.as_str())))
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Dataset for JsonlDataset {
    fn len(&self) -> usize {
        self.examples.len()
    }

    fn get(&self, index: usize) -> Option<&Gsm8kExample> {
        self.examples.get(index)
    }
}

#[cfg(test)]
#[path = "dataset_tests.rs"]
mod tests;
