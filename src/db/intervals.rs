//! Task-interval storage and the single-open-interval rule.
//!
//! At most one interval in the entire store may be open (`stop_time` NULL)
//! at any moment. `start` enforces this inside a single transaction, so the
//! read-check-insert sequence cannot interleave with another local writer.
//! The current state is never cached; [`TaskIntervals::in_progress`]
//! recomputes it from the store on every call.

use super::db::Db;
use super::tasks::Tasks;
use crate::libs::error::TrackError;
use crate::libs::interval::TaskInterval;
use crate::libs::task::Task;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Params, Row};

const SCHEMA_INTERVALS: &str = "CREATE TABLE IF NOT EXISTS task_intervals (
    id INTEGER NOT NULL PRIMARY KEY,
    task_id INTEGER NOT NULL REFERENCES tasks (id),
    start_time INTEGER NOT NULL,
    stop_time INTEGER
);";
const INSERT_INTERVAL: &str = "INSERT INTO task_intervals (task_id, start_time) VALUES (?1, ?2)";
const UPDATE_STOP: &str = "UPDATE task_intervals SET stop_time = ?1 WHERE id = ?2";
const SELECT_OPEN: &str = "SELECT id, task_id, start_time, stop_time FROM task_intervals
    WHERE stop_time IS NULL ORDER BY id";
const SELECT_LATEST_FOR_TASK: &str = "SELECT id, task_id, start_time, stop_time FROM task_intervals
    WHERE task_id = ?1 ORDER BY start_time DESC, id DESC LIMIT 1";
const SELECT_FOR_TASK: &str = "SELECT id, task_id, start_time, stop_time FROM task_intervals
    WHERE task_id = ?1 ORDER BY id";

pub struct TaskIntervals {
    pub conn: Connection,
    tasks: Tasks,
}

impl TaskIntervals {
    pub fn new() -> Result<TaskIntervals> {
        let tasks = Tasks::new()?;
        let db = Db::new()?;
        db.conn.execute(SCHEMA_INTERVALS, [])?;

        Ok(TaskIntervals { conn: db.conn, tasks })
    }

    /// Opens a new interval for `task` at `when` (epoch seconds).
    ///
    /// Fails with [`TrackError::TooManyInProgress`] when any interval is
    /// already open, naming its owning task. Fails with
    /// [`TrackError::InconsistentInterval`] when `when` does not come
    /// strictly after the task's latest interval, so a back-dated start
    /// cannot overlap an interval that has already ended.
    pub fn start(&mut self, task: &Task, when: i64) -> Result<TaskInterval, TrackError> {
        let tx = self.conn.transaction()?;

        let open = Self::query(&tx, SELECT_OPEN, [])?;
        if let Some(interval) = open.first() {
            let owner = self.tasks.by_id(interval.task_id)?;
            return Err(TrackError::TooManyInProgress { task: owner.name });
        }

        if let Some(latest) = Self::latest_for_task(&tx, task.id)? {
            let boundary = latest.stop_time.unwrap_or(latest.start_time);
            if boundary >= when {
                return Err(TrackError::InconsistentInterval { boundary, requested: when });
            }
        }

        tx.execute(INSERT_INTERVAL, params![task.id, when])?;
        let id = tx.last_insert_rowid();
        tx.commit()?;

        Ok(TaskInterval {
            id,
            task_id: task.id,
            start_time: when,
            stop_time: None,
        })
    }

    /// Closes the task's most recently started interval at `when`.
    ///
    /// The lookup takes the maximal `start_time`, ties broken by highest id,
    /// whether or not that interval is still open. A task with no intervals
    /// at all fails with [`TrackError::NoTaskInProgress`]; a `when` at or
    /// before the matched interval's start fails with
    /// [`TrackError::InconsistentInterval`] and leaves the row untouched.
    pub fn stop(&mut self, task: &Task, when: i64) -> Result<TaskInterval, TrackError> {
        let tx = self.conn.transaction()?;

        let Some(interval) = Self::latest_for_task(&tx, task.id)? else {
            return Err(TrackError::NoTaskInProgress { task: task.name.clone() });
        };
        if interval.start_time >= when {
            return Err(TrackError::InconsistentInterval {
                boundary: interval.start_time,
                requested: when,
            });
        }

        tx.execute(UPDATE_STOP, params![when, interval.id])?;
        tx.commit()?;

        Ok(TaskInterval {
            stop_time: Some(when),
            ..interval
        })
    }

    /// All intervals recorded for the task, in creation order.
    pub fn for_task(&mut self, task: &Task) -> Result<Vec<TaskInterval>, TrackError> {
        Self::query(&self.conn, SELECT_FOR_TASK, params![task.id])
    }

    /// The currently open interval together with its owning task, if any.
    ///
    /// More than one open row cannot be produced through [`Self::start`];
    /// finding several means the store was modified out from under us, and
    /// is reported as [`TrackError::TooManyInProgress`] rather than papered
    /// over.
    pub fn in_progress(&mut self) -> Result<Option<(Task, TaskInterval)>, TrackError> {
        let mut open = Self::query(&self.conn, SELECT_OPEN, [])?;
        match open.len() {
            0 => Ok(None),
            1 => {
                let interval = open.remove(0);
                let task = self.tasks.by_id(interval.task_id)?;
                Ok(Some((task, interval)))
            }
            _ => {
                let owner = self.tasks.by_id(open[0].task_id)?;
                Err(TrackError::TooManyInProgress { task: owner.name })
            }
        }
    }

    fn latest_for_task(conn: &Connection, task_id: i64) -> Result<Option<TaskInterval>, TrackError> {
        Ok(conn
            .query_row(SELECT_LATEST_FOR_TASK, params![task_id], Self::map_interval)
            .optional()?)
    }

    fn query<P: Params>(conn: &Connection, sql: &str, params: P) -> Result<Vec<TaskInterval>, TrackError> {
        let mut stmt = conn.prepare(sql)?;
        let interval_iter = stmt.query_map(params, Self::map_interval)?;

        let mut intervals = Vec::new();
        for interval in interval_iter {
            intervals.push(interval?);
        }
        Ok(intervals)
    }

    fn map_interval(row: &Row<'_>) -> rusqlite::Result<TaskInterval> {
        Ok(TaskInterval {
            id: row.get(0)?,
            task_id: row.get(1)?,
            start_time: row.get(2)?,
            stop_time: row.get(3)?,
        })
    }
}
