//! Display implementation for tock messages.
//!
//! All user-facing text is defined here, in one place, so wording stays
//! consistent across commands and is easy to test against.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let text = match self {
            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved".to_string(),
            Message::PromptDatabaseFile => "Database file name".to_string(),
            Message::PromptDatetimeFormat => "Datetime format".to_string(),

            // === TASK MESSAGES ===
            Message::TaskCreated(name) => format!("Created task '{}'", name),
            Message::TaskUpdated(name) => format!("Updated task '{}'", name),
            Message::TaskNotFoundWithId(id) => format!("No task with id {}", id),
            Message::TasksNotFound => "No matching tasks".to_string(),
            Message::PromptSelectTask => "Several tasks match, pick one".to_string(),
            Message::PromptTaskName => "Task name".to_string(),
            Message::PromptTaskDescription => "Description".to_string(),

            // === TRACKING MESSAGES ===
            Message::Tracking(name) => format!("Tracking '{}'.", name),
            Message::TrackingSince(name, start, duration) => {
                format!("Tracking '{}' since {} ({}).", name, start, duration)
            }
            Message::NotTracking => "Not tracking.".to_string(),
            Message::NothingToStop => "Nothing to stop.".to_string(),
            Message::StoppedAfter(name, duration) => format!("Stopped '{}' after {}.", name, duration),
            Message::NoIntervals(name) => format!("No intervals recorded for '{}'", name),
            Message::InvalidTimestamp(value) => format!("Could not parse timestamp '{}'", value),
        };
        write!(f, "{}", text)
    }
}
