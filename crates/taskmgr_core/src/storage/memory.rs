//! Volatile storage kept in process memory.
//!
//! Used by tests and by callers that want service semantics without touching
//! the filesystem. Every call copies the snapshot so callers never alias the
//! stored list.

use super::{validate_snapshot, StorageResult, TaskStorage};
use crate::model::task::Task;

/// In-memory `TaskStorage` implementation.
#[derive(Debug, Clone, Default)]
pub struct InMemoryStorage {
    tasks: Vec<Task>,
}

impl InMemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }
}

impl TaskStorage for InMemoryStorage {
    fn save(&mut self, tasks: &[Task]) -> StorageResult<()> {
        validate_snapshot(tasks)?;
        self.tasks = tasks.to_vec();
        Ok(())
    }

    fn load(&self) -> StorageResult<Vec<Task>> {
        Ok(self.tasks.clone())
    }
}
