//! Core library modules for tock.
//!
//! Domain models (tasks and intervals), the error taxonomy, and the ambient
//! plumbing every command relies on: configuration, data-directory
//! resolution, message display, and table rendering.

pub mod config;
pub mod data_storage;
pub mod error;
pub mod formatter;
pub mod interval;
pub mod messages;
pub mod task;
pub mod view;
