//! # Tock - a personal time tracker
//!
//! A command-line utility that records how long you work on named tasks.
//! Start a task, stop it, and ask what is currently being tracked; every
//! interval is kept in a local SQLite database.
//!
//! ## Features
//!
//! - **Task Management**: Create, search, and edit named tasks
//! - **Interval Tracking**: At most one interval is open at a time,
//!   system-wide
//! - **History**: List every recorded interval for a task
//! - **Local Storage**: Single-file SQLite store in the platform data
//!   directory, relocatable with `--home` or `TOCK_HOME`
//!
//! ## Usage
//!
//! ```rust,no_run
//! use tock::commands::Cli;
//!
//! fn main() -> anyhow::Result<()> {
//!     Cli::menu()
//! }
//! ```

pub mod commands;
pub mod db;
pub mod libs;
