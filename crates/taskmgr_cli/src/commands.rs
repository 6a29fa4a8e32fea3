//! Command dispatch: one parsed command → service calls → rendered output.

use crate::cli::Command;
use anyhow::{bail, Context, Result};
use std::io::Write;
use taskmgr_core::{
    CompactFormatter, DetailedFormatter, StatsFormatter, Task, TaskFilter, TaskFormatter,
    TaskService, TaskStorage, TaskUpdate,
};

/// Runs `command` against `service`, writing user-facing output to `out`.
pub fn execute<S: TaskStorage>(
    service: &mut TaskService<S>,
    command: Command,
    out: &mut impl Write,
) -> Result<()> {
    match command {
        Command::Add {
            title,
            description,
            priority,
            due,
        } => {
            let task = Task::new(title)?
                .with_description(description)
                .with_priority(priority.into())
                .with_due_date(due);
            let title = task.title.clone();
            let index = service.add(task).context("failed to add task")?;
            writeln!(out, "✓ Task added successfully: {title} (index {index})")?;
        }
        Command::List {
            status,
            priority,
            detailed,
        } => {
            let filter = TaskFilter {
                status: status.map(Into::into),
                priority: priority.map(Into::into),
            };
            let entries = service
                .filter_indexed(&filter)
                .context("failed to list tasks")?;
            writeln!(out, "{}", render(formatter(detailed), &entries))?;
        }
        Command::Complete { index } => {
            service
                .complete(index)
                .with_context(|| format!("failed to complete task {index}"))?;
            writeln!(out, "✓ Task {index} marked as completed")?;
        }
        Command::Update {
            index,
            title,
            description,
            priority,
            due,
        } => {
            let update = TaskUpdate {
                title,
                description,
                priority: priority.map(Into::into),
                due_date: due,
            };
            if update.is_empty() {
                bail!("no updates specified for task {index}");
            }
            service
                .update(index, update)
                .with_context(|| format!("failed to update task {index}"))?;
            writeln!(out, "✓ Task {index} updated successfully")?;
        }
        Command::Delete { index } => {
            let removed = service
                .delete(index)
                .with_context(|| format!("failed to delete task {index}"))?;
            writeln!(out, "✓ Task {index} deleted: {}", removed.title)?;
        }
        Command::Search { keyword, detailed } => {
            let hits = service
                .search_indexed(&keyword)
                .context("failed to search tasks")?;
            if hits.is_empty() {
                writeln!(out, "No tasks found matching '{keyword}'")?;
            } else {
                writeln!(
                    out,
                    "Found {} task(s) matching '{keyword}':\n",
                    hits.len()
                )?;
                writeln!(out, "{}", render(formatter(detailed), &hits))?;
            }
        }
        Command::Stats => {
            let stats = service.stats().context("failed to compute statistics")?;
            writeln!(out, "{}", StatsFormatter.format_stats(&stats))?;
        }
    }
    Ok(())
}

fn formatter(detailed: bool) -> &'static dyn TaskFormatter {
    if detailed {
        &DetailedFormatter
    } else {
        &CompactFormatter
    }
}

fn render(formatter: &dyn TaskFormatter, entries: &[(usize, Task)]) -> String {
    let borrowed: Vec<(usize, &Task)> = entries.iter().map(|(index, task)| (*index, task)).collect();
    formatter.format_entries(&borrowed)
}
