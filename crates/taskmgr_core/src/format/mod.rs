//! Formatter port and text renderers.
//!
//! # Responsibility
//! - Render task sequences and statistics as display text.
//! - Keep presentation independent of storage and service logic.
//!
//! # Invariants
//! - Formatters are pure: no I/O, no storage access.
//! - An empty input renders `NO_TASKS_MESSAGE`, never an empty string.

use crate::model::task::{Priority, Task};

mod compact;
mod detailed;
mod stats;

pub use compact::CompactFormatter;
pub use detailed::DetailedFormatter;
pub use stats::StatsFormatter;

/// Rendering used for an empty task sequence.
pub const NO_TASKS_MESSAGE: &str = "No tasks found.";

/// Render contract for task sequences.
pub trait TaskFormatter {
    /// Renders tasks paired with the index callers use to address them.
    fn format_entries(&self, entries: &[(usize, &Task)]) -> String;

    /// Renders tasks, labelling each with its position in `tasks`.
    fn format_tasks(&self, tasks: &[Task]) -> String {
        let entries: Vec<(usize, &Task)> = tasks.iter().enumerate().collect();
        self.format_entries(&entries)
    }
}

fn priority_marker(priority: Priority) -> &'static str {
    match priority {
        Priority::Low => "↓",
        Priority::Medium => "→",
        Priority::High => "↑",
    }
}
