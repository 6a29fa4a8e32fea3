//! Statistics summary renderer.

use crate::model::task::Priority;
use crate::service::task_service::TaskStats;

const RULE_WIDTH: usize = 40;

/// Renders `TaskStats` as a ruled summary block.
#[derive(Debug, Clone, Copy, Default)]
pub struct StatsFormatter;

impl StatsFormatter {
    pub fn format_stats(&self, stats: &TaskStats) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut lines = vec![
            rule.clone(),
            "Task Statistics".to_string(),
            rule.clone(),
            format!("Total Tasks:      {}", stats.total),
            format!("Completed:        {}", stats.completed),
            format!("Pending:          {}", stats.pending),
            String::new(),
            "By Priority:".to_string(),
        ];
        // Highest urgency first.
        for priority in Priority::ALL.iter().rev() {
            let label = format!("{}:", capitalize(priority.as_str()));
            lines.push(format!(
                "  {label:<16}{}",
                stats.by_priority.get(*priority)
            ));
        }
        lines.push(rule);
        lines.join("\n")
    }
}

fn capitalize(value: &str) -> String {
    let mut chars = value.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::StatsFormatter;
    use crate::service::task_service::{PriorityBreakdown, TaskStats};

    #[test]
    fn summary_lists_totals_and_breakdown() {
        let stats = TaskStats {
            total: 3,
            completed: 1,
            pending: 2,
            by_priority: PriorityBreakdown {
                low: 0,
                medium: 1,
                high: 2,
            },
        };

        let text = StatsFormatter.format_stats(&stats);

        assert!(text.contains("Total Tasks:      3"));
        assert!(text.contains("Pending:          2"));
        assert!(text.contains("  High:           2"));
        assert!(text.contains("  Low:            0"));
        let high = text.find("High:").unwrap();
        let low = text.find("Low:").unwrap();
        assert!(high < low);
    }
}
