//! Core use-case services.
//!
//! # Responsibility
//! - Orchestrate storage round-trips into task operations.
//! - Keep the CLI decoupled from persistence details.

pub mod task_service;
