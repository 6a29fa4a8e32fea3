//! Task domain model.
//!
//! # Responsibility
//! - Define the single task record persisted by storage implementations.
//! - Validate title, priority and due date at construction time.
//! - Apply partial updates without touching identity or creation time.
//!
//! # Invariants
//! - `title` is non-empty after trimming.
//! - `created_at` is assigned once in `Task::new` and never mutated.
//! - Deserialization re-runs construction validation; invalid persisted
//!   records are rejected instead of being coerced.

use chrono::{Local, NaiveDate, NaiveDateTime};
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use uuid::Uuid;

/// Stable identifier assigned to every task at creation.
pub type TaskId = Uuid;

/// Accepted textual format for due dates (`YYYY-MM-DD`).
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

/// Task urgency level.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

impl Priority {
    /// All priorities in ascending urgency.
    pub const ALL: [Priority; 3] = [Priority::Low, Priority::Medium, Priority::High];

    /// Lowercase wire name (`low|medium|high`).
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
        }
    }
}

impl Display for Priority {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = TaskValidationError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            _ => Err(TaskValidationError::InvalidPriority(value.to_string())),
        }
    }
}

/// Validation failures raised while constructing or updating a task.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TaskValidationError {
    /// Title is empty or whitespace only.
    EmptyTitle,
    /// Priority text is not one of `low|medium|high`.
    InvalidPriority(String),
    /// Due date text is not a valid `YYYY-MM-DD` calendar date.
    InvalidDueDate(String),
}

impl Display for TaskValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyTitle => write!(f, "task title cannot be empty"),
            Self::InvalidPriority(value) => write!(
                f,
                "invalid priority `{value}`; expected one of: low, medium, high"
            ),
            Self::InvalidDueDate(value) => {
                write!(f, "invalid due date `{value}`; expected YYYY-MM-DD")
            }
        }
    }
}

impl Error for TaskValidationError {}

/// Partial update applied by `TaskService::update`.
///
/// Only `Some` fields are written; `None` leaves the current value in place.
/// A due date cannot be cleared through an update.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskUpdate {
    pub title: Option<String>,
    pub description: Option<String>,
    pub priority: Option<Priority>,
    pub due_date: Option<NaiveDate>,
}

impl TaskUpdate {
    /// Returns whether this update carries no field changes.
    pub fn is_empty(&self) -> bool {
        self.title.is_none()
            && self.description.is_none()
            && self.priority.is_none()
            && self.due_date.is_none()
    }
}

/// Canonical task record.
///
/// Serialized as a flat JSON object:
/// `id, title, description, priority, due_date, completed, created_at`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "TaskRecord")]
pub struct Task {
    id: TaskId,
    pub title: String,
    pub description: String,
    pub priority: Priority,
    pub due_date: Option<NaiveDate>,
    pub completed: bool,
    created_at: NaiveDateTime,
}

impl Task {
    /// Creates a pending, medium-priority task stamped with the local time.
    ///
    /// # Errors
    /// - `TaskValidationError::EmptyTitle` when `title` is blank.
    pub fn new(title: impl Into<String>) -> Result<Self, TaskValidationError> {
        let title = title.into();
        validate_title(&title)?;

        Ok(Self {
            id: Uuid::new_v4(),
            title,
            description: String::new(),
            priority: Priority::default(),
            due_date: None,
            completed: false,
            created_at: Local::now().naive_local(),
        })
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }

    pub fn with_due_date(mut self, due_date: Option<NaiveDate>) -> Self {
        self.due_date = due_date;
        self
    }

    pub fn id(&self) -> TaskId {
        self.id
    }

    pub fn created_at(&self) -> NaiveDateTime {
        self.created_at
    }

    /// Marks this task as done. Completing twice is a no-op.
    pub fn complete(&mut self) {
        self.completed = true;
    }

    /// Applies a partial update.
    ///
    /// Validation runs before any field is written, so a rejected update
    /// leaves the task untouched.
    pub fn apply(&mut self, update: TaskUpdate) -> Result<(), TaskValidationError> {
        if let Some(title) = update.title.as_deref() {
            validate_title(title)?;
        }

        if let Some(title) = update.title {
            self.title = title;
        }
        if let Some(description) = update.description {
            self.description = description;
        }
        if let Some(priority) = update.priority {
            self.priority = priority;
        }
        if let Some(due_date) = update.due_date {
            self.due_date = Some(due_date);
        }
        Ok(())
    }

    /// Checks the invariants this record must hold at any time.
    pub fn validate(&self) -> Result<(), TaskValidationError> {
        validate_title(&self.title)
    }

    /// Returns whether `keyword` occurs in title or description, ignoring case.
    pub fn matches_keyword(&self, keyword: &str) -> bool {
        let needle = keyword.to_lowercase();
        self.title.to_lowercase().contains(&needle)
            || self.description.to_lowercase().contains(&needle)
    }
}

/// Parses a strict `YYYY-MM-DD` due date.
pub fn parse_due_date(value: &str) -> Result<NaiveDate, TaskValidationError> {
    NaiveDate::parse_from_str(value.trim(), DUE_DATE_FORMAT)
        .map_err(|_| TaskValidationError::InvalidDueDate(value.to_string()))
}

fn validate_title(title: &str) -> Result<(), TaskValidationError> {
    if title.trim().is_empty() {
        return Err(TaskValidationError::EmptyTitle);
    }
    Ok(())
}

/// Unchecked wire shape; converted into `Task` through validation.
#[derive(Deserialize)]
struct TaskRecord {
    // Files written before ids existed get a fresh one on load.
    #[serde(default = "Uuid::new_v4")]
    id: TaskId,
    title: String,
    #[serde(default)]
    description: String,
    #[serde(default = "default_priority_text")]
    priority: String,
    #[serde(default)]
    due_date: Option<String>,
    #[serde(default)]
    completed: bool,
    created_at: NaiveDateTime,
}

fn default_priority_text() -> String {
    Priority::default().as_str().to_string()
}

impl TryFrom<TaskRecord> for Task {
    type Error = TaskValidationError;

    fn try_from(record: TaskRecord) -> Result<Self, Self::Error> {
        validate_title(&record.title)?;
        let priority = record.priority.parse::<Priority>()?;
        let due_date = record
            .due_date
            .as_deref()
            .map(parse_due_date)
            .transpose()?;

        Ok(Self {
            id: record.id,
            title: record.title,
            description: record.description,
            priority,
            due_date,
            completed: record.completed,
            created_at: record.created_at,
        })
    }
}
