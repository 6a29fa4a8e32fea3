//! Core domain logic for the task manager.
//! This crate owns task invariants, the storage and formatter ports, and the
//! service that ties them together.

pub mod format;
pub mod logging;
pub mod model;
pub mod service;
pub mod storage;

pub use format::{
    CompactFormatter, DetailedFormatter, StatsFormatter, TaskFormatter, NO_TASKS_MESSAGE,
};
pub use logging::{default_log_level, init_logging, logging_status};
pub use model::task::{
    parse_due_date, Priority, Task, TaskId, TaskUpdate, TaskValidationError, DUE_DATE_FORMAT,
};
pub use service::task_service::{
    PriorityBreakdown, ServiceError, ServiceResult, StatusFilter, TaskFilter, TaskService,
    TaskStats,
};
pub use storage::json_file::DEFAULT_TASK_FILE;
pub use storage::{InMemoryStorage, JsonFileStorage, StorageError, StorageResult, TaskStorage};

/// Returns the core crate version.
pub fn core_version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
