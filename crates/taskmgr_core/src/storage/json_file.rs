//! Durable storage backed by a single JSON document.
//!
//! # Responsibility
//! - Serialize the full task snapshot as a pretty JSON array on every save.
//! - Treat a missing file as an empty task list.
//!
//! # Invariants
//! - Each save rewrites the whole file; there is no append path.
//! - No locking or partial-write protection; one writer per invocation.
//! - Corrupt files surface as `StorageError::Parse` and are never repaired.

use super::{validate_snapshot, StorageError, StorageResult, TaskStorage};
use crate::model::task::Task;
use log::{debug, error};
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// File name used when no explicit path is configured.
pub const DEFAULT_TASK_FILE: &str = "tasks.json";

/// JSON-file `TaskStorage` implementation.
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StorageError {
        StorageError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Default for JsonFileStorage {
    fn default() -> Self {
        Self::new(DEFAULT_TASK_FILE)
    }
}

impl TaskStorage for JsonFileStorage {
    fn save(&mut self, tasks: &[Task]) -> StorageResult<()> {
        let started_at = Instant::now();
        if let Err(err) = validate_snapshot(tasks) {
            error!(
                "event=storage_save module=storage status=error backend=json_file error_code=invalid_task error={}",
                err
            );
            return Err(err);
        }
        let bytes = serde_json::to_vec_pretty(tasks).map_err(StorageError::Serialize)?;

        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            if let Err(err) = fs::create_dir_all(parent) {
                error!(
                    "event=storage_save module=storage status=error backend=json_file error_code=mkdir_failed error={}",
                    err
                );
                return Err(self.io_error(err));
            }
        }

        if let Err(err) = fs::write(&self.path, bytes) {
            error!(
                "event=storage_save module=storage status=error backend=json_file error_code=write_failed error={}",
                err
            );
            return Err(self.io_error(err));
        }

        debug!(
            "event=storage_save module=storage status=ok backend=json_file count={} duration_ms={}",
            tasks.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }

    fn load(&self) -> StorageResult<Vec<Task>> {
        let started_at = Instant::now();
        let bytes = match fs::read(&self.path) {
            Ok(bytes) => bytes,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                debug!("event=storage_load module=storage status=ok backend=json_file count=0 missing_file=true");
                return Ok(Vec::new());
            }
            Err(err) => {
                error!(
                    "event=storage_load module=storage status=error backend=json_file error_code=read_failed error={}",
                    err
                );
                return Err(self.io_error(err));
            }
        };

        let tasks: Vec<Task> = serde_json::from_slice(&bytes).map_err(|source| {
            error!(
                "event=storage_load module=storage status=error backend=json_file error_code=parse_failed line={} column={}",
                source.line(),
                source.column()
            );
            StorageError::Parse {
                path: self.path.clone(),
                source,
            }
        })?;

        debug!(
            "event=storage_load module=storage status=ok backend=json_file count={} duration_ms={}",
            tasks.len(),
            started_at.elapsed().as_millis()
        );
        Ok(tasks)
    }
}
