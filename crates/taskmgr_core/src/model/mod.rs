//! Domain model for the task manager.
//!
//! # Responsibility
//! - Define the task record and its construction-time invariants.
//! - Keep the persisted wire shape next to the type that owns it.
//!
//! # Invariants
//! - Every task carries a generated `TaskId` that is never reused.
//! - Callers address tasks by collection index; the id is a secondary handle.

pub mod task;
