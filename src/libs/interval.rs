use chrono::Utc;

/// A span of work on one task. `stop_time` is absent while the interval is
/// still running. Times are epoch seconds.
#[derive(Debug, Clone, PartialEq)]
pub struct TaskInterval {
    pub id: i64,
    pub task_id: i64,
    pub start_time: i64,
    pub stop_time: Option<i64>,
}

impl TaskInterval {
    pub fn in_progress(&self) -> bool {
        self.stop_time.is_none()
    }

    /// Elapsed seconds; open intervals are measured against the current time.
    pub fn duration(&self) -> i64 {
        self.stop_time.unwrap_or_else(|| Utc::now().timestamp()) - self.start_time
    }
}
