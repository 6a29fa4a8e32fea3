//! Task use-case service.
//!
//! # Responsibility
//! - Translate task operations into load → mutate → save cycles.
//! - Report out-of-range indices and unknown ids as recoverable errors.
//!
//! # Invariants
//! - Every operation performs exactly one `load`.
//! - Mutating operations perform at most one `save`, and none on failure.
//! - No snapshot is cached between calls.
//! - Tasks are addressed by index in the current snapshot; deleting a task
//!   shifts the index of every later task.

use crate::model::task::{Priority, Task, TaskId, TaskUpdate, TaskValidationError};
use crate::storage::{StorageError, TaskStorage};
use log::{debug, info, warn};
use std::error::Error;
use std::fmt::{Display, Formatter};

pub type ServiceResult<T> = Result<T, ServiceError>;

/// Service error for task use-cases.
#[derive(Debug)]
pub enum ServiceError {
    /// Index is outside the current snapshot (`len` tasks).
    NotFound { index: usize, len: usize },
    /// No task carries this stable id.
    IdNotFound(TaskId),
    /// Update would break a task invariant.
    Validation(TaskValidationError),
    /// Persistence-layer failure.
    Storage(StorageError),
}

impl Display for ServiceError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound { index, len } => {
                write!(f, "task {index} not found ({len} task(s) stored)")
            }
            Self::IdNotFound(id) => write!(f, "task not found: {id}"),
            Self::Validation(err) => write!(f, "{err}"),
            Self::Storage(err) => write!(f, "{err}"),
        }
    }
}

impl Error for ServiceError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Storage(err) => Some(err),
            Self::NotFound { .. } | Self::IdNotFound(_) => None,
        }
    }
}

impl From<StorageError> for ServiceError {
    fn from(value: StorageError) -> Self {
        Self::Storage(value)
    }
}

impl From<TaskValidationError> for ServiceError {
    fn from(value: TaskValidationError) -> Self {
        Self::Validation(value)
    }
}

/// Completion-state predicate used by `TaskFilter`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StatusFilter {
    Pending,
    Completed,
}

impl StatusFilter {
    fn matches(self, task: &Task) -> bool {
        match self {
            Self::Pending => !task.completed,
            Self::Completed => task.completed,
        }
    }
}

/// Listing predicates; every supplied field must match.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: Option<StatusFilter>,
    pub priority: Option<Priority>,
}

impl TaskFilter {
    pub fn matches(&self, task: &Task) -> bool {
        self.status.map_or(true, |status| status.matches(task))
            && self.priority.map_or(true, |priority| task.priority == priority)
    }
}

/// Per-priority task counts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PriorityBreakdown {
    pub low: usize,
    pub medium: usize,
    pub high: usize,
}

impl PriorityBreakdown {
    pub fn get(&self, priority: Priority) -> usize {
        match priority {
            Priority::Low => self.low,
            Priority::Medium => self.medium,
            Priority::High => self.high,
        }
    }

    fn record(&mut self, priority: Priority) {
        match priority {
            Priority::Low => self.low += 1,
            Priority::Medium => self.medium += 1,
            Priority::High => self.high += 1,
        }
    }
}

/// Aggregate counts over the full snapshot.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    pub total: usize,
    pub completed: usize,
    pub pending: usize,
    pub by_priority: PriorityBreakdown,
}

/// Task service facade over a storage implementation.
pub struct TaskService<S: TaskStorage> {
    storage: S,
}

impl<S: TaskStorage> TaskService<S> {
    /// Creates a service using the provided storage implementation.
    pub fn new(storage: S) -> Self {
        Self { storage }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    pub fn into_storage(self) -> S {
        self.storage
    }

    /// Appends `task` and returns its index.
    ///
    /// A task whose public fields were edited into an invalid state after
    /// construction is rejected before storage is touched.
    pub fn add(&mut self, task: Task) -> ServiceResult<usize> {
        task.validate()?;
        let mut tasks = self.storage.load()?;
        tasks.push(task);
        self.storage.save(&tasks)?;

        let index = tasks.len() - 1;
        info!(
            "event=task_add module=service status=ok index={} total={}",
            index,
            tasks.len()
        );
        Ok(index)
    }

    /// Marks the task at `index` as completed.
    pub fn complete(&mut self, index: usize) -> ServiceResult<()> {
        let mut tasks = self.storage.load()?;
        locate_mut(&mut tasks, index)?.complete();
        self.storage.save(&tasks)?;

        info!("event=task_complete module=service status=ok index={index}");
        Ok(())
    }

    /// Overwrites the provided fields of the task at `index`.
    pub fn update(&mut self, index: usize, update: TaskUpdate) -> ServiceResult<()> {
        let mut tasks = self.storage.load()?;
        locate_mut(&mut tasks, index)?.apply(update)?;
        self.storage.save(&tasks)?;

        info!("event=task_update module=service status=ok index={index}");
        Ok(())
    }

    /// Removes and returns the task at `index`.
    pub fn delete(&mut self, index: usize) -> ServiceResult<Task> {
        let mut tasks = self.storage.load()?;
        let len = tasks.len();
        if index >= len {
            warn!("event=task_delete module=service status=error error_code=not_found index={index} len={len}");
            return Err(ServiceError::NotFound { index, len });
        }
        let removed = tasks.remove(index);
        self.storage.save(&tasks)?;

        info!(
            "event=task_delete module=service status=ok index={} remaining={}",
            index,
            tasks.len()
        );
        Ok(removed)
    }

    pub fn get_all(&self) -> ServiceResult<Vec<Task>> {
        Ok(self.storage.load()?)
    }

    pub fn get(&self, index: usize) -> ServiceResult<Task> {
        let tasks = self.storage.load()?;
        let len = tasks.len();
        tasks
            .into_iter()
            .nth(index)
            .ok_or(ServiceError::NotFound { index, len })
    }

    /// Returns tasks matching every predicate in `filter`, in stored order.
    pub fn filter(&self, filter: &TaskFilter) -> ServiceResult<Vec<Task>> {
        self.filter_by(|task| filter.matches(task))
    }

    /// Returns tasks accepted by `predicate`, in stored order.
    pub fn filter_by<P>(&self, mut predicate: P) -> ServiceResult<Vec<Task>>
    where
        P: FnMut(&Task) -> bool,
    {
        let tasks = self.storage.load()?;
        Ok(tasks.into_iter().filter(|task| predicate(task)).collect())
    }

    /// Like `filter`, but pairs each match with its index in the snapshot.
    pub fn filter_indexed(&self, filter: &TaskFilter) -> ServiceResult<Vec<(usize, Task)>> {
        self.indexed_where(|task| filter.matches(task))
    }

    /// Returns tasks whose title or description contains `keyword`, ignoring case.
    pub fn search(&self, keyword: &str) -> ServiceResult<Vec<Task>> {
        self.filter_by(|task| task.matches_keyword(keyword))
    }

    /// Like `search`, but pairs each match with its index in the snapshot.
    pub fn search_indexed(&self, keyword: &str) -> ServiceResult<Vec<(usize, Task)>> {
        let hits = self.indexed_where(|task| task.matches_keyword(keyword))?;
        debug!(
            "event=task_search module=service status=ok keyword_len={} hits={}",
            keyword.chars().count(),
            hits.len()
        );
        Ok(hits)
    }

    pub fn stats(&self) -> ServiceResult<TaskStats> {
        let tasks = self.storage.load()?;
        let mut stats = TaskStats {
            total: tasks.len(),
            ..TaskStats::default()
        };
        for task in &tasks {
            if task.completed {
                stats.completed += 1;
            }
            stats.by_priority.record(task.priority);
        }
        stats.pending = stats.total - stats.completed;
        Ok(stats)
    }

    pub fn get_by_id(&self, id: TaskId) -> ServiceResult<Task> {
        self.storage
            .load()?
            .into_iter()
            .find(|task| task.id() == id)
            .ok_or(ServiceError::IdNotFound(id))
    }

    pub fn complete_by_id(&mut self, id: TaskId) -> ServiceResult<()> {
        let mut tasks = self.storage.load()?;
        tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(ServiceError::IdNotFound(id))?
            .complete();
        self.storage.save(&tasks)?;
        Ok(())
    }

    /// Overwrites the provided fields of the task with stable `id`.
    pub fn update_by_id(&mut self, id: TaskId, update: TaskUpdate) -> ServiceResult<()> {
        let mut tasks = self.storage.load()?;
        tasks
            .iter_mut()
            .find(|task| task.id() == id)
            .ok_or(ServiceError::IdNotFound(id))?
            .apply(update)?;
        self.storage.save(&tasks)?;
        Ok(())
    }

    pub fn delete_by_id(&mut self, id: TaskId) -> ServiceResult<Task> {
        let mut tasks = self.storage.load()?;
        let position = tasks
            .iter()
            .position(|task| task.id() == id)
            .ok_or(ServiceError::IdNotFound(id))?;
        let removed = tasks.remove(position);
        self.storage.save(&tasks)?;
        Ok(removed)
    }

    fn indexed_where<P>(&self, mut predicate: P) -> ServiceResult<Vec<(usize, Task)>>
    where
        P: FnMut(&Task) -> bool,
    {
        let tasks = self.storage.load()?;
        Ok(tasks
            .into_iter()
            .enumerate()
            .filter(|(_, task)| predicate(task))
            .collect())
    }
}

fn locate_mut(tasks: &mut [Task], index: usize) -> ServiceResult<&mut Task> {
    let len = tasks.len();
    tasks.get_mut(index).ok_or_else(|| {
        warn!("event=task_lookup module=service status=error error_code=not_found index={index} len={len}");
        ServiceError::NotFound { index, len }
    })
}
