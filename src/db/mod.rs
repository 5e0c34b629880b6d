//! Database layer for tock.
//!
//! SQLite-backed persistence for tasks and their recorded intervals. Each
//! repository owns a connection to the shared store and applies its schema
//! idempotently on construction; there is no separate migration step.

/// Core database connection handling.
pub mod db;

/// Task-interval storage and the single-open-interval rule.
pub mod intervals;

/// Task storage and lookup.
pub mod tasks;
