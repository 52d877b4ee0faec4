//! Append-only flat-file store for submissions.
//!
//! Every submission is written twice: once as a JSON line and once as a CSV
//! row. The two appends are independent; a failure between them leaves the
//! JSON store one line ahead of the CSV store.

use std::io::{self, ErrorKind, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tokio::fs::{self, OpenOptions};
use tokio::io::AsyncWriteExt;

use crate::error::CoreError;
use crate::submission::{NewSubmission, Submission, CSV_HEADER};

// ---------------------------------------------------------------------------
// Constants
// ---------------------------------------------------------------------------

/// Default storage directory, relative to the process working directory.
pub const DEFAULT_DATA_DIR: &str = "data";

/// File name of the line-delimited JSON store.
pub const JSONL_FILE_NAME: &str = "submissions.jsonl";

/// File name of the CSV store.
pub const CSV_FILE_NAME: &str = "submissions.csv";

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Where the two stores live on disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorageConfig {
    pub dir: PathBuf,
    pub jsonl_file: String,
    pub csv_file: String,
}

impl StorageConfig {
    /// Standard file names inside `dir`.
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self {
            dir: dir.into(),
            jsonl_file: JSONL_FILE_NAME.to_string(),
            csv_file: CSV_FILE_NAME.to_string(),
        }
    }

    pub fn jsonl_path(&self) -> PathBuf {
        self.dir.join(&self.jsonl_file)
    }

    pub fn csv_path(&self) -> PathBuf {
        self.dir.join(&self.csv_file)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self::new(DEFAULT_DATA_DIR)
    }
}

// ---------------------------------------------------------------------------
// Store
// ---------------------------------------------------------------------------

/// Submission store backed by `submissions.jsonl` and `submissions.csv`.
///
/// Holds only immutable configuration, so it can be shared across request
/// handlers behind an `Arc` without locking.
#[derive(Debug, Clone)]
pub struct SubmissionStore {
    config: StorageConfig,
}

impl SubmissionStore {
    pub fn new(config: StorageConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &StorageConfig {
        &self.config
    }

    /// Ensure the directory and both files exist.
    ///
    /// Idempotent. Existing files are never truncated; a newly created CSV
    /// file receives the header row.
    pub async fn ensure_initialized(&self) -> Result<(), CoreError> {
        let dir = &self.config.dir;
        fs::create_dir_all(dir)
            .await
            .map_err(|source| CoreError::StorageInit {
                path: dir.clone(),
                source,
            })?;

        create_if_missing(&self.config.jsonl_path(), String::new()).await?;
        create_if_missing(&self.config.csv_path(), format!("{CSV_HEADER}\n")).await?;
        Ok(())
    }

    /// Stamp `input` with the current time and append it to both stores,
    /// JSON first. Returns the stored record.
    pub async fn append(&self, input: NewSubmission) -> Result<Submission, CoreError> {
        let record = Submission::stamp(input, chrono::Utc::now());

        let json_line = record.to_json_line()?;
        let csv_line = record.to_csv_line();

        append_line(&self.config.jsonl_path(), &json_line).await?;
        append_line(&self.config.csv_path(), &csv_line).await?;

        tracing::debug!(timestamp = %record.timestamp, "Submission appended");
        Ok(record)
    }

    /// Run the initializer then append. This is the per-request write path.
    pub async fn save(&self, input: NewSubmission) -> Result<Submission, CoreError> {
        self.ensure_initialized().await?;
        self.append(input).await
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// Create `path` with `contents` unless it already exists.
///
/// The file is written in full under a temporary name and then linked into
/// place without overwriting, so no reader or appender ever sees a partially
/// initialized file. Losing a creation race to another caller counts as
/// success.
async fn create_if_missing(path: &Path, contents: String) -> Result<(), CoreError> {
    let init_err = |source| CoreError::StorageInit {
        path: path.to_path_buf(),
        source,
    };

    if fs::try_exists(path).await.map_err(init_err)? {
        return Ok(());
    }

    let target = path.to_path_buf();
    let created = tokio::task::spawn_blocking(move || write_new_file(&target, &contents))
        .await
        .map_err(|e| init_err(io::Error::other(e)))?
        .map_err(init_err)?;

    if created {
        tracing::info!(path = %path.display(), "Created storage file");
    }
    Ok(())
}

/// Blocking half of [`create_if_missing`]. Returns `false` if `path`
/// appeared in the meantime.
fn write_new_file(path: &Path, contents: &str) -> io::Result<bool> {
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or_else(|| Path::new("."));

    let mut staged = NamedTempFile::new_in(dir)?;
    staged.write_all(contents.as_bytes())?;
    staged.as_file().sync_all()?;

    match staged.persist_noclobber(path) {
        Ok(_) => Ok(true),
        Err(e) if e.error.kind() == ErrorKind::AlreadyExists => Ok(false),
        Err(e) => Err(e.error),
    }
}

/// Append one complete line with a single write in append mode.
async fn append_line(path: &Path, line: &str) -> Result<(), CoreError> {
    let persist_err = |source| CoreError::Persist {
        path: path.to_path_buf(),
        source,
    };

    let mut file = OpenOptions::new()
        .append(true)
        .open(path)
        .await
        .map_err(persist_err)?;
    file.write_all(line.as_bytes()).await.map_err(persist_err)?;
    file.flush().await.map_err(persist_err)?;
    Ok(())
}
