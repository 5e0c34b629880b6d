//! Task storage: create, update, and look up named tasks.
//!
//! The schema is applied on construction and tolerates an existing table,
//! so repositories can be built repeatedly against the same store. Tasks
//! are never deleted; renames go through [`Tasks::update`].

use super::db::Db;
use crate::libs::error::TrackError;
use crate::libs::task::Task;
use anyhow::Result;
use rusqlite::{params, Connection, OptionalExtension, Row};

const SCHEMA_TASKS: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER NOT NULL PRIMARY KEY,
    name TEXT NOT NULL,
    description TEXT
);";
const INSERT_TASK: &str = "INSERT INTO tasks (name, description) VALUES (?1, ?2)";
const UPDATE_TASK: &str = "UPDATE tasks SET name = ?1, description = ?2 WHERE id = ?3";
const SELECT_TASKS: &str = "SELECT id, name, description FROM tasks";
const SELECT_BY_NAME: &str = "SELECT id, name, description FROM tasks WHERE name LIKE ?1";
const SELECT_BY_ID: &str = "SELECT id, name, description FROM tasks WHERE id = ?1";

pub struct Tasks {
    pub conn: Connection,
}

impl Tasks {
    pub fn new() -> Result<Tasks> {
        let db = Db::new()?;
        db.conn.execute(SCHEMA_TASKS, [])?;

        Ok(Tasks { conn: db.conn })
    }

    /// Inserts a task and returns it with the identity the store assigned.
    /// Callers supply a non-empty name; the store only enforces NOT NULL.
    pub fn create(&mut self, name: &str, description: Option<&str>) -> Result<Task, TrackError> {
        self.conn.execute(INSERT_TASK, params![name, description])?;

        Ok(Task {
            id: self.conn.last_insert_rowid(),
            name: name.to_string(),
            description: description.map(str::to_string),
        })
    }

    /// Persists the task's current name and description, keyed by id.
    /// Zero affected rows passes silently; unknown ids are not reported.
    pub fn update(&mut self, task: &Task) -> Result<(), TrackError> {
        self.conn.execute(UPDATE_TASK, params![task.name, task.description, task.id])?;
        Ok(())
    }

    /// Substring search with SQL `LIKE` semantics; results come back in
    /// storage order.
    pub fn by_name(&mut self, name: &str) -> Result<Vec<Task>, TrackError> {
        let name_like = format!("%{}%", name);
        let mut stmt = self.conn.prepare(SELECT_BY_NAME)?;
        let task_iter = stmt.query_map([&name_like], Self::map_task)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    pub fn all(&mut self) -> Result<Vec<Task>, TrackError> {
        let mut stmt = self.conn.prepare(SELECT_TASKS)?;
        let task_iter = stmt.query_map([], Self::map_task)?;

        let mut tasks = Vec::new();
        for task in task_iter {
            tasks.push(task?);
        }
        Ok(tasks)
    }

    pub fn by_id(&mut self, id: i64) -> Result<Task, TrackError> {
        let task = self.conn.query_row(SELECT_BY_ID, params![id], Self::map_task).optional()?;
        task.ok_or(TrackError::TaskNotFound(id))
    }

    fn map_task(row: &Row<'_>) -> rusqlite::Result<Task> {
        Ok(Task {
            id: row.get(0)?,
            name: row.get(1)?,
            description: row.get(2)?,
        })
    }
}
