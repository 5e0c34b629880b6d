#[derive(Debug, Clone)]
pub enum Message {
    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    PromptDatabaseFile,
    PromptDatetimeFormat,

    // === TASK MESSAGES ===
    TaskCreated(String),
    TaskUpdated(String),
    TaskNotFoundWithId(i64),
    TasksNotFound,
    PromptSelectTask,
    PromptTaskName,
    PromptTaskDescription,

    // === TRACKING MESSAGES ===
    Tracking(String),
    TrackingSince(String, String, String), // name, start, duration
    NotTracking,
    NothingToStop,
    StoppedAfter(String, String), // name, duration
    NoIntervals(String),
    InvalidTimestamp(String),
}
