//! `task` command-line entry point.
//!
//! # Responsibility
//! - Compose concrete storage and formatter choices once per invocation.
//! - Map reported errors to a `✗` message on stderr and a non-zero exit.

mod cli;
mod commands;

use clap::Parser;
use cli::Cli;
use log::error;
use std::io;
use std::process::ExitCode;
use taskmgr_core::{default_log_level, init_logging, JsonFileStorage, TaskService};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(log_dir) = cli.log_dir.as_deref() {
        let level = cli.log_level.as_deref().unwrap_or(default_log_level());
        if let Err(err) = init_logging(level, &log_dir.to_string_lossy()) {
            eprintln!("✗ {err}");
            return ExitCode::FAILURE;
        }
    }

    let mut service = TaskService::new(JsonFileStorage::new(&cli.file));
    let mut stdout = io::stdout().lock();

    match commands::execute(&mut service, cli.command, &mut stdout) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("event=command module=cli status=error error={err:#}");
            eprintln!("✗ {err:#}");
            ExitCode::FAILURE
        }
    }
}
