//! Detailed multi-line renderer.
//!
//! # Invariants
//! - Blocks are separated by one blank line.
//! - A missing due date reads `Not set`.

use super::{TaskFormatter, NO_TASKS_MESSAGE};
use crate::model::task::{Task, DUE_DATE_FORMAT};

const RULE_WIDTH: usize = 60;
const CREATED_AT_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Multi-line block per task, including description, due date and timestamps.
#[derive(Debug, Clone, Copy, Default)]
pub struct DetailedFormatter;

impl TaskFormatter for DetailedFormatter {
    fn format_entries(&self, entries: &[(usize, &Task)]) -> String {
        if entries.is_empty() {
            return NO_TASKS_MESSAGE.to_string();
        }

        entries
            .iter()
            .map(|(index, task)| render_block(*index, task))
            .collect::<Vec<_>>()
            .join("\n\n")
    }
}

fn render_block(index: usize, task: &Task) -> String {
    let rule = "=".repeat(RULE_WIDTH);
    let status = if task.completed { "Completed" } else { "Pending" };
    let due = task
        .due_date
        .map(|date| date.format(DUE_DATE_FORMAT).to_string())
        .unwrap_or_else(|| "Not set".to_string());

    [
        rule.clone(),
        format!("Task #{index} (ID: {})", task.id()),
        rule,
        format!("Title:       {}", task.title),
        format!("Description: {}", task.description),
        format!("Priority:    {}", task.priority.as_str().to_uppercase()),
        format!("Status:      {status}"),
        format!("Due Date:    {due}"),
        format!("Created:     {}", task.created_at().format(CREATED_AT_FORMAT)),
    ]
    .join("\n")
}

#[cfg(test)]
mod tests {
    use super::DetailedFormatter;
    use crate::format::{TaskFormatter, NO_TASKS_MESSAGE};
    use crate::model::task::{parse_due_date, Priority, Task};

    #[test]
    fn block_includes_description_and_due_date() {
        let task = Task::new("Write report")
            .unwrap()
            .with_description("quarterly numbers")
            .with_priority(Priority::High)
            .with_due_date(Some(parse_due_date("2025-03-01").unwrap()));

        let text = DetailedFormatter.format_tasks(&[task.clone()]);

        assert!(text.contains(&format!("Task #0 (ID: {})", task.id())));
        assert!(text.contains("Description: quarterly numbers"));
        assert!(text.contains("Priority:    HIGH"));
        assert!(text.contains("Status:      Pending"));
        assert!(text.contains("Due Date:    2025-03-01"));
    }

    #[test]
    fn missing_due_date_reads_not_set() {
        let text = DetailedFormatter.format_tasks(&[Task::new("x").unwrap()]);
        assert!(text.contains("Due Date:    Not set"));
    }

    #[test]
    fn empty_input_uses_placeholder() {
        assert_eq!(DetailedFormatter.format_tasks(&[]), NO_TASKS_MESSAGE);
    }
}
