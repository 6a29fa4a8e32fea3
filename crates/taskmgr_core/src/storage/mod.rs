//! Storage port and its implementations.
//!
//! # Responsibility
//! - Define the snapshot contract used by the task service.
//! - Keep file-format details out of service orchestration.
//!
//! # Invariants
//! - `load` with no prior data returns an empty `Vec`, never an error.
//! - `save` fully replaces prior contents; it never appends.
//! - `save` rejects any task that breaks `Task::validate` before writing, so
//!   every stored snapshot can be loaded again.
//! - Implementations are interchangeable behind `TaskStorage`.

use crate::model::task::{Task, TaskValidationError};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod json_file;
pub mod memory;

pub use json_file::JsonFileStorage;
pub use memory::InMemoryStorage;

pub type StorageResult<T> = Result<T, StorageError>;

/// Persistence failure raised by storage implementations.
#[derive(Debug)]
pub enum StorageError {
    /// Reading or writing the backing file failed.
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    /// Backing file exists but does not hold a valid task list.
    Parse {
        path: PathBuf,
        source: serde_json::Error,
    },
    /// Snapshot could not be encoded.
    Serialize(serde_json::Error),
    /// Task at `index` breaks a record invariant; nothing was written.
    InvalidTask {
        index: usize,
        source: TaskValidationError,
    },
}

impl Display for StorageError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "task file `{}` I/O failed: {source}", path.display())
            }
            Self::Parse { path, source } => {
                write!(f, "task file `{}` is not valid: {source}", path.display())
            }
            Self::Serialize(err) => write!(f, "failed to encode tasks: {err}"),
            Self::InvalidTask { index, source } => {
                write!(f, "refusing to store task {index}: {source}")
            }
        }
    }
}

impl Error for StorageError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse { source, .. } => Some(source),
            Self::Serialize(err) => Some(err),
            Self::InvalidTask { source, .. } => Some(source),
        }
    }
}

/// Snapshot persistence contract for the full task collection.
pub trait TaskStorage {
    /// Replaces all stored tasks with `tasks`.
    fn save(&mut self, tasks: &[Task]) -> StorageResult<()>;
    /// Returns every stored task in persisted order.
    fn load(&self) -> StorageResult<Vec<Task>>;
}

impl<S: TaskStorage + ?Sized> TaskStorage for &mut S {
    fn save(&mut self, tasks: &[Task]) -> StorageResult<()> {
        (**self).save(tasks)
    }

    fn load(&self) -> StorageResult<Vec<Task>> {
        (**self).load()
    }
}

/// Checks every task of a snapshot before it is written.
fn validate_snapshot(tasks: &[Task]) -> StorageResult<()> {
    for (index, task) in tasks.iter().enumerate() {
        task.validate()
            .map_err(|source| StorageError::InvalidTask { index, source })?;
    }
    Ok(())
}
