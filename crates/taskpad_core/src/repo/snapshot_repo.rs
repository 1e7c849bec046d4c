//! Snapshot repository contracts and JSON implementations.
//!
//! # Responsibility
//! - Round-trip the full task list across process restarts.
//! - Keep serialization details inside the persistence boundary.
//!
//! # Invariants
//! - `save` writes the whole list as one snapshot, never a delta.
//! - `load` degrades missing or corrupt data to an empty list instead of
//!   failing startup.

use crate::model::task::Task;
use log::{debug, warn};
use std::cell::RefCell;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Default file name for the on-disk snapshot entry.
pub const SNAPSHOT_FILE_NAME: &str = "tasks.json";

pub type SnapshotResult<T> = Result<T, SnapshotError>;

/// Persistence error for snapshot write failures.
///
/// Read failures never surface here; `load` absorbs them by policy.
#[derive(Debug)]
pub enum SnapshotError {
    Io(io::Error),
    Serialize(serde_json::Error),
}

impl Display for SnapshotError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io(err) => write!(f, "snapshot io failure: {err}"),
            Self::Serialize(err) => write!(f, "snapshot encoding failure: {err}"),
        }
    }
}

impl Error for SnapshotError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io(err) => Some(err),
            Self::Serialize(err) => Some(err),
        }
    }
}

impl From<io::Error> for SnapshotError {
    fn from(value: io::Error) -> Self {
        Self::Io(value)
    }
}

impl From<serde_json::Error> for SnapshotError {
    fn from(value: serde_json::Error) -> Self {
        Self::Serialize(value)
    }
}

/// Repository interface for durable task list snapshots.
pub trait SnapshotRepository {
    /// Loads the last saved task list.
    ///
    /// Missing or unparseable stored data yields an empty list; a failed
    /// read never aborts startup.
    fn load(&self) -> Vec<Task>;

    /// Overwrites the stored snapshot with `tasks`.
    fn save(&self, tasks: &[Task]) -> SnapshotResult<()>;
}

/// File-backed snapshot repository holding one named JSON entry.
pub struct JsonSnapshotRepository {
    path: PathBuf,
}

impl JsonSnapshotRepository {
    /// Creates a repository over an explicit snapshot file path.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Creates a repository using the default entry name inside `dir`.
    pub fn in_dir(dir: impl AsRef<Path>) -> Self {
        Self::new(dir.as_ref().join(SNAPSHOT_FILE_NAME))
    }

    /// Returns the snapshot file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl SnapshotRepository for JsonSnapshotRepository {
    fn load(&self) -> Vec<Task> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == io::ErrorKind::NotFound => {
                debug!(
                    "event=snapshot_load module=repo status=empty reason=missing path={}",
                    self.path.display()
                );
                return Vec::new();
            }
            Err(err) => {
                warn!(
                    "event=snapshot_load module=repo status=empty reason=unreadable path={} error={}",
                    self.path.display(),
                    err
                );
                return Vec::new();
            }
        };
        decode_snapshot(&raw, "file")
    }

    fn save(&self, tasks: &[Task]) -> SnapshotResult<()> {
        let encoded = serde_json::to_string(tasks)?;
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, encoded)?;
        debug!(
            "event=snapshot_save module=repo status=ok mode=file path={} tasks={}",
            self.path.display(),
            tasks.len()
        );
        Ok(())
    }
}

/// In-memory snapshot repository for harnesses and tests.
///
/// Round-trips through the same JSON encoding as the file repository, so
/// serialization behavior stays exercised without touching disk.
#[derive(Debug, Default)]
pub struct MemorySnapshotRepository {
    entry: RefCell<Option<String>>,
}

impl MemorySnapshotRepository {
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds the stored entry with raw content, bypassing serialization.
    ///
    /// Lets callers stage corrupt or legacy data.
    pub fn with_raw_entry(raw: impl Into<String>) -> Self {
        Self {
            entry: RefCell::new(Some(raw.into())),
        }
    }

    /// Returns the raw stored entry, if any.
    pub fn raw_entry(&self) -> Option<String> {
        self.entry.borrow().clone()
    }
}

impl SnapshotRepository for MemorySnapshotRepository {
    fn load(&self) -> Vec<Task> {
        match self.entry.borrow().as_deref() {
            Some(raw) => decode_snapshot(raw, "memory"),
            None => Vec::new(),
        }
    }

    fn save(&self, tasks: &[Task]) -> SnapshotResult<()> {
        let encoded = serde_json::to_string(tasks)?;
        *self.entry.borrow_mut() = Some(encoded);
        Ok(())
    }
}

fn decode_snapshot(raw: &str, mode: &str) -> Vec<Task> {
    match serde_json::from_str(raw) {
        Ok(tasks) => tasks,
        Err(err) => {
            warn!(
                "event=snapshot_load module=repo status=empty reason=corrupt mode={mode} error={err}"
            );
            Vec::new()
        }
    }
}
