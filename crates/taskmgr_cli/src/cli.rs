//! Command-line surface.
//!
//! Argument types stay in this crate so `taskmgr_core` never depends on clap.

use chrono::NaiveDate;
use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;
use taskmgr_core::{parse_due_date, Priority, StatusFilter, DEFAULT_TASK_FILE};

#[derive(Parser, Debug)]
#[command(
    name = "task",
    version,
    about = "Manage a personal task list stored in a JSON file",
    arg_required_else_help = true
)]
pub struct Cli {
    /// Task file to read and write
    #[arg(long, env = "TASKMGR_FILE", default_value = DEFAULT_TASK_FILE, global = true)]
    pub file: PathBuf,

    /// Absolute directory for rolling log files; logging is off when unset
    #[arg(long, env = "TASKMGR_LOG_DIR", global = true)]
    pub log_dir: Option<PathBuf>,

    /// Log level (trace|debug|info|warn|error)
    #[arg(long, env = "TASKMGR_LOG_LEVEL", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug, PartialEq, Eq)]
pub enum Command {
    /// Add a new task
    Add {
        title: String,
        #[arg(short, long, default_value = "")]
        description: String,
        #[arg(short, long, value_enum, default_value_t = PriorityArg::Medium)]
        priority: PriorityArg,
        /// Due date (YYYY-MM-DD)
        #[arg(long, value_parser = due_date_arg)]
        due: Option<NaiveDate>,
    },
    /// List tasks
    List {
        #[arg(long, value_enum)]
        status: Option<StatusArg>,
        #[arg(short, long, value_enum)]
        priority: Option<PriorityArg>,
        /// Show every field of each task
        #[arg(short = 'v', long)]
        detailed: bool,
    },
    /// Mark a task as complete
    Complete { index: usize },
    /// Update fields of a task
    Update {
        index: usize,
        #[arg(long)]
        title: Option<String>,
        #[arg(short, long)]
        description: Option<String>,
        #[arg(short, long, value_enum)]
        priority: Option<PriorityArg>,
        /// Due date (YYYY-MM-DD)
        #[arg(long, value_parser = due_date_arg)]
        due: Option<NaiveDate>,
    },
    /// Delete a task
    Delete { index: usize },
    /// Search titles and descriptions
    Search {
        keyword: String,
        #[arg(short = 'v', long)]
        detailed: bool,
    },
    /// Show task statistics
    Stats,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum PriorityArg {
    Low,
    Medium,
    High,
}

impl From<PriorityArg> for Priority {
    fn from(value: PriorityArg) -> Self {
        match value {
            PriorityArg::Low => Priority::Low,
            PriorityArg::Medium => Priority::Medium,
            PriorityArg::High => Priority::High,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StatusArg {
    Pending,
    Completed,
}

impl From<StatusArg> for StatusFilter {
    fn from(value: StatusArg) -> Self {
        match value {
            StatusArg::Pending => StatusFilter::Pending,
            StatusArg::Completed => StatusFilter::Completed,
        }
    }
}

fn due_date_arg(value: &str) -> Result<NaiveDate, String> {
    parse_due_date(value).map_err(|err| err.to_string())
}
