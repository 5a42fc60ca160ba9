// Append-only feedback log

use fs2::FileExt;
use std::fs::{self, OpenOptions};
use std::io::Write;
use std::path::{Path, PathBuf};
use tokio::sync::Mutex;

use super::context::ConversationContext;
use super::record::FeedbackRecord;
use crate::error::{EngineError, Result};

struct StoreState {
    next_sequence: u64,
}

/// Durable append-only store of feedback records, one JSON object per line.
///
/// All mutation goes through `record`, which holds an internal mutex for the
/// whole read-modify-write plus an exclusive advisory file lock for the
/// append itself, so concurrent callers (and a second process) can neither
/// interleave partial lines nor lose a write. `read_all` takes the same
/// mutex and therefore always sees a consistent snapshot.
pub struct FeedbackStore {
    log_path: PathBuf,
    state: Mutex<StoreState>,
}

impl FeedbackStore {
    /// Open (or create) the log at `log_path`, restoring the sequence
    /// counter from any records already on disk.
    pub fn open(log_path: PathBuf) -> Result<Self> {
        if let Some(parent) = log_path.parent() {
            fs::create_dir_all(parent)?;
        }

        let existing = read_records(&log_path)?;
        // Resume after the last parsed record, not the record count: a
        // skipped unparseable line must not make a later append reuse a
        // sequence number already on disk.
        let next_sequence = existing.last().map(|r| r.sequence + 1).unwrap_or(0);

        tracing::info!(
            path = %log_path.display(),
            records = existing.len(),
            "Opened feedback store"
        );

        Ok(Self {
            log_path,
            state: Mutex::new(StoreState { next_sequence }),
        })
    }

    /// Append one feedback record.
    ///
    /// Fails with `InvalidFeedback` (and writes nothing) when `chosen` is
    /// not one of `candidates`. On storage failure the log and the sequence
    /// counter are left exactly as they were.
    pub async fn record(
        &self,
        context: &ConversationContext,
        candidates: &[String],
        chosen: &str,
    ) -> Result<FeedbackRecord> {
        if !candidates.iter().any(|c| c == chosen) {
            return Err(EngineError::InvalidFeedback);
        }

        let mut state = self.state.lock().await;

        let record = FeedbackRecord::new(
            state.next_sequence,
            context.as_str().to_string(),
            candidates.to_vec(),
            chosen.to_string(),
        );

        let mut line = serde_json::to_string(&record)?;
        line.push('\n');

        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.log_path)?;

        file.lock_exclusive()?;
        let write_result: std::io::Result<()> = (|| {
            (&file).write_all(line.as_bytes())?;
            file.sync_all()
        })();
        let _ = FileExt::unlock(&file);
        write_result?;

        // Only advance once the record is durably on disk
        state.next_sequence += 1;

        tracing::debug!(
            sequence = record.sequence,
            id = %record.id,
            "Recorded feedback"
        );

        Ok(record)
    }

    /// All records in insertion order, as a consistent snapshot.
    pub async fn read_all(&self) -> Result<Vec<FeedbackRecord>> {
        let _guard = self.state.lock().await;
        read_records(&self.log_path)
    }

    pub fn path(&self) -> &Path {
        &self.log_path
    }
}

/// Parse the log file. Blank lines are ignored; an unparseable line (a
/// crash-torn tail append) is skipped with a warning rather than hiding
/// the records before it.
fn read_records(log_path: &Path) -> Result<Vec<FeedbackRecord>> {
    if !log_path.exists() {
        return Ok(Vec::new());
    }

    let contents = fs::read_to_string(log_path)?;
    let mut records = Vec::new();

    for (line_no, line) in contents.lines().enumerate() {
        if line.trim().is_empty() {
            continue;
        }
        match serde_json::from_str::<FeedbackRecord>(line) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!(
                    line = line_no + 1,
                    error = %e,
                    "Skipping unparseable feedback record"
                );
            }
        }
    }

    Ok(records)
}
