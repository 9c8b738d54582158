//! SQLite task store.
//!
//! [`Tasks`] is the only code that reads or writes the `tasks` table. It is
//! built from a database path; the schema is created, or upgraded from an
//! older layout, when the store is constructed with [`Tasks::new`].
//!
//! The store does not validate input. Empty descriptions, malformed dates and
//! unknown categories are stopped by the front ends before they get here, and
//! "not found" is reported as a `false` result rather than an error.
//!
//! ```rust,no_run
//! use todo_list::db::tasks::Tasks;
//! use todo_list::libs::operations::TaskOperations;
//!
//! let tasks = Tasks::new("todo_list.db")?;
//! let id = tasks.add("Buy milk", "2025-09-01", "Personal")?;
//! assert!(tasks.complete(id)?);
//! # Ok::<(), anyhow::Error>(())
//! ```

use super::db::Db;
use super::migrations::init_with_migrations;
use crate::libs::config::Config;
use crate::libs::operations::TaskOperations;
use crate::libs::task::{Task, TaskOrder, TaskStatus, ALL_CATEGORIES};
use anyhow::Result;
use rusqlite::{params, Row};
use std::path::{Path, PathBuf};

const INSERT_TASK: &str = "INSERT INTO tasks (description, due_date, category) VALUES (?1, ?2, ?3)";
const SELECT_TASKS: &str = "SELECT id, description, status, due_date, category FROM tasks";
const ORDER_BY_DUE_DATE: &str = "ORDER BY due_date ASC";
const WHERE_CATEGORY: &str = "WHERE category = ?1";
const WHERE_ID: &str = "WHERE id = ?1";
const UPDATE_TASK: &str = "UPDATE tasks SET description = ?1, due_date = ?2, category = ?3 WHERE id = ?4";
const UPDATE_STATUS: &str = "UPDATE tasks SET status = ?1 WHERE id = ?2";
const DELETE_TASK: &str = "DELETE FROM tasks WHERE id = ?1";
const COUNT_TASKS: &str = "SELECT COUNT(*) FROM tasks";

/// SQLite-backed task store.
///
/// Holds only the database path. Every method opens its own connection, runs
/// a single statement and closes the connection before returning; SQLite's
/// file locking is the only coordination between concurrent callers.
#[derive(Debug, Clone)]
pub struct Tasks {
    path: PathBuf,
}

impl Tasks {
    /// Store over the database at `path`, with the schema initialized.
    pub fn new(path: impl Into<PathBuf>) -> Result<Tasks> {
        let tasks = Tasks::at(path);
        tasks.init_schema()?;

        Ok(tasks)
    }

    /// Store over the database at `path`, leaving the schema as it is. Used
    /// where schema changes must stay explicit, such as `migrations status`.
    pub fn at(path: impl Into<PathBuf>) -> Tasks {
        Tasks { path: path.into() }
    }

    /// Store over the configured database (see [`Config::db_path`]).
    pub fn open() -> Result<Tasks> {
        let path = Config::read()?.db_path()?;
        Tasks::new(path)
    }

    /// Location of the database file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the `tasks` table and adds missing columns. Safe to repeat.
    pub fn init_schema(&self) -> Result<()> {
        let mut db = Db::open(&self.path)?;
        init_with_migrations(&mut db.conn)
    }

    /// Inserts a Pending task and returns its row id. Input is stored as given.
    pub fn insert(&self, description: &str, due_date: &str, category: &str) -> Result<i64> {
        let db = Db::open(&self.path)?;
        db.conn.execute(INSERT_TASK, params![description, due_date, category])?;
        let id = db.conn.last_insert_rowid();
        tracing::debug!(id, "task inserted");

        Ok(id)
    }

    /// All tasks in the requested order.
    ///
    /// [`TaskOrder::DueDateText`] leaves ordering to SQLite, so it compares the
    /// stored text: empty dates come first and `2025-10-01` sorts before
    /// `2025-9-1`. [`TaskOrder::DueDateCalendar`] sorts parsed dates here
    /// instead and puts rows without one at the end.
    pub fn fetch(&self, order: TaskOrder) -> Result<Vec<Task>> {
        let db = Db::open(&self.path)?;
        let sql = match order {
            TaskOrder::DueDateText => format!("{} {}", SELECT_TASKS, ORDER_BY_DUE_DATE),
            TaskOrder::Storage | TaskOrder::DueDateCalendar => SELECT_TASKS.to_string(),
        };

        let mut stmt = db.conn.prepare(&sql)?;
        let mut tasks = stmt.query_map([], map_task)?.collect::<Result<Vec<_>, _>>()?;

        if order == TaskOrder::DueDateCalendar {
            // Stable sort keeps storage order among equal or missing dates
            tasks.sort_by_key(|task| match task.due_date_parsed() {
                Some(date) => (false, Some(date)),
                None => (true, None),
            });
        }

        Ok(tasks)
    }

    /// Tasks whose category equals `category` exactly, or every task for `"All"`.
    /// Rows with no category only show up under `"All"`.
    pub fn fetch_by_category(&self, category: &str) -> Result<Vec<Task>> {
        if category == ALL_CATEGORIES {
            return self.fetch(TaskOrder::Storage);
        }

        let db = Db::open(&self.path)?;
        let mut stmt = db.conn.prepare(&format!("{} {}", SELECT_TASKS, WHERE_CATEGORY))?;
        let tasks = stmt.query_map([category], map_task)?.collect::<Result<Vec<_>, _>>()?;

        Ok(tasks)
    }

    /// Looks up a single task.
    pub fn get_by_id(&self, id: i64) -> Result<Option<Task>> {
        let db = Db::open(&self.path)?;
        let mut stmt = db.conn.prepare(&format!("{} {}", SELECT_TASKS, WHERE_ID))?;
        let task = stmt.query_map([id], map_task)?.next().transpose()?;

        Ok(task)
    }

    /// Overwrites description, due date and category. Status is left alone.
    pub fn update(&self, id: i64, description: &str, due_date: &str, category: &str) -> Result<bool> {
        let db = Db::open(&self.path)?;
        let changed = db.conn.execute(UPDATE_TASK, params![description, due_date, category, id])?;
        tracing::debug!(id, changed, "task updated");

        Ok(changed > 0)
    }

    /// Marks the task Completed. Completing it again still reports `true`.
    pub fn complete(&self, id: i64) -> Result<bool> {
        let db = Db::open(&self.path)?;
        let changed = db.conn.execute(UPDATE_STATUS, params![TaskStatus::Completed, id])?;
        tracing::debug!(id, changed, "task completed");

        Ok(changed > 0)
    }

    pub fn delete(&self, id: i64) -> Result<bool> {
        let db = Db::open(&self.path)?;
        let changed = db.conn.execute(DELETE_TASK, [id])?;
        tracing::debug!(id, changed, "task deleted");

        Ok(changed > 0)
    }

    /// Number of rows in the table. Fails if the table does not exist yet.
    pub fn count(&self) -> Result<usize> {
        let db = Db::open(&self.path)?;
        let count: i64 = db.conn.query_row(COUNT_TASKS, [], |row| row.get(0))?;

        Ok(count as usize)
    }
}

impl TaskOperations for Tasks {
    fn add(&self, description: &str, due_date: &str, category: &str) -> Result<i64> {
        self.insert(description, due_date, category)
    }

    fn list_sorted(&self, order: TaskOrder) -> Result<Vec<Task>> {
        self.fetch(order)
    }

    fn list_by_category(&self, category: &str) -> Result<Vec<Task>> {
        self.fetch_by_category(category)
    }

    fn get(&self, id: i64) -> Result<Option<Task>> {
        self.get_by_id(id)
    }

    fn update(&self, id: i64, description: &str, due_date: &str, category: &str) -> Result<bool> {
        Tasks::update(self, id, description, due_date, category)
    }

    fn complete(&self, id: i64) -> Result<bool> {
        Tasks::complete(self, id)
    }

    fn delete(&self, id: i64) -> Result<bool> {
        Tasks::delete(self, id)
    }
}

fn map_task(row: &Row<'_>) -> rusqlite::Result<Task> {
    Ok(Task {
        id: row.get(0)?,
        description: row.get(1)?,
        status: row.get(2)?,
        due_date: row.get(3)?,
        category: row.get(4)?,
    })
}
