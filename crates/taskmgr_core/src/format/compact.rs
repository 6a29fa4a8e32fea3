//! Compact one-line-per-task renderer.
//!
//! Each line shows completion marker, index, priority arrow and title; the
//! description and due date are left to the detailed view.

use super::{priority_marker, TaskFormatter, NO_TASKS_MESSAGE};
use crate::model::task::Task;

/// One line per task: `[✓] 3. ↑ Title`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CompactFormatter;

impl TaskFormatter for CompactFormatter {
    fn format_entries(&self, entries: &[(usize, &Task)]) -> String {
        if entries.is_empty() {
            return NO_TASKS_MESSAGE.to_string();
        }

        entries
            .iter()
            .map(|(index, task)| {
                let status = if task.completed { "✓" } else { " " };
                format!(
                    "[{status}] {index}. {} {}",
                    priority_marker(task.priority),
                    task.title
                )
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
