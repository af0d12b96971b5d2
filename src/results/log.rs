use std::fs::{File, OpenOptions};
use std::io::{BufRead, BufReader, Write};
use std::path::{Path, PathBuf};

use crate::error::EvalError;

use super::record::EvalRecord;

/// Append-only NDJSON log of evaluation records.
///
/// Opening replays any existing file to recover the resume point and the
/// running correct-count; prior content is never rewritten. Every append is
/// flushed immediately so that at most the in-flight row is lost if the
/// process is killed.
#[derive(Debug)]
pub struct ResultsLog {
    path: PathBuf,
    file: File,
    max_id: Option<u64>,
    correct: u64,
    replayed: u64,
}

impl ResultsLog {
    /// Opens `path` for appending, replaying existing records first.
    ///
    /// A malformed line fails the whole load; there is no partial-line
    /// recovery, since resuming from a misread log would corrupt the
    /// accuracy tally.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, EvalError> {
        let path = path.as_ref().to_path_buf();

        let mut max_id = None;
        let mut correct = 0u64;
        let mut replayed = 0u64;

        match File::open(&path) {
            Ok(existing) => {
                let reader = BufReader::new(existing);
                for (line_no, line) in reader.lines().enumerate() {
                    let line = line?;
                    if line.trim().is_empty() {
                        continue;
                    }
                    let record: EvalRecord =
                        serde_json::from_str(&line).map_err(|err| {
                            EvalError::MalformedRecord {
                                path: path.display().to_string(),
                                line: line_no + 1,
                                message: err.to_string(),
                            }
                        })?;
                    max_id = Some(max_id.map_or(record.id, |m: u64| m.max(record.id)));
                    if record.correct {
                        correct += 1;
                    }
                    replayed += 1;
                }
            }
            Err(ref err) if err.kind() == std::io::ErrorKind::NotFound => {}
            Err(err) => return Err(err.into()),
        }

        if replayed > 0 {
            log::info!(
                "resuming from {}: {} records, {} correct",
                path.display(),
                replayed,
                correct
            );
        }

        let file = OpenOptions::new().create(true).append(true).open(&path)?;
        Ok(Self {
            path,
            file,
            max_id,
            correct,
            replayed,
        })
    }

    /// First unprocessed row index: `max_id + 1`, or 0 for a fresh log.
    pub fn start_index(&self) -> u64 {
        self.max_id.map_or(0, |m| m + 1)
    }

    /// Correct rows seen so far, replayed history included.
    pub fn correct_so_far(&self) -> u64 {
        self.correct
    }

    /// Number of records recovered from the existing file at open time.
    pub fn replayed(&self) -> u64 {
        self.replayed
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Appends one record and flushes it to disk before returning.
    pub fn append(&mut self, record: &EvalRecord) -> Result<(), EvalError> {
        let mut line = serde_json::to_string(record)?;
        line.push('\n');
        self.file.write_all(line.as_bytes())?;
        self.file.flush()?;

        self.max_id = Some(self.max_id.map_or(record.id, |m| m.max(record.id)));
        if record.correct {
            self.correct += 1;
        }
        Ok(())
    }

    /// Syncs and releases the file handle, surfacing any deferred I/O error.
    ///
    /// Dropping the log without calling this still closes the handle, but
    /// silently.
    pub fn close(self) -> Result<(), EvalError> {
        self.file.sync_all()?;
        Ok(())
    }
}
