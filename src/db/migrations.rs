//! Schema migration for the `tasks` table.
//!
//! The schema is described as an ordered list of steps, each keyed by the
//! feature it introduces. A step inspects the live schema to tell whether it
//! is already in place, so running the list again is a no-op and databases
//! created before a column existed pick it up on the next start. Existing rows
//! are never touched.
//!
//! ```rust,no_run
//! use todo_list::db::migrations::{init_with_migrations, needs_migration};
//! use rusqlite::Connection;
//!
//! let mut conn = Connection::open("todo_list.db")?;
//! init_with_migrations(&mut conn)?;
//! assert!(!needs_migration(&conn)?);
//! # Ok::<(), anyhow::Error>(())
//! ```

use crate::libs::messages::Message;
use crate::{msg_debug, msg_error, msg_info, msg_success};
use anyhow::Result;
use rusqlite::{Connection, Transaction};

pub const TASKS_TABLE: &str = "tasks";

const CREATE_TASKS_TABLE: &str = "CREATE TABLE IF NOT EXISTS tasks (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    description TEXT NOT NULL,
    status TEXT DEFAULT 'Pending',
    due_date TEXT,
    category TEXT
)";

/// One idempotent schema step.
#[derive(Debug, Clone)]
struct Migration {
    /// Feature this step introduces; also its identity.
    key: &'static str,
    /// Reports whether the live schema already has the feature.
    is_applied: fn(&Connection) -> Result<bool>,
    up: fn(&Transaction) -> Result<()>,
}

pub struct MigrationManager {
    migrations: Vec<Migration>,
}

impl MigrationManager {
    pub fn new() -> Self {
        let mut manager = Self { migrations: Vec::new() };
        manager.register_migrations();
        manager
    }

    /// Registers every step in application order. New columns go at the end.
    fn register_migrations(&mut self) {
        self.add_migration(
            "create_tasks_table",
            |conn| table_exists(conn, TASKS_TABLE),
            |tx| {
                tx.execute(CREATE_TASKS_TABLE, [])?;
                Ok(())
            },
        );

        // Databases from before due dates existed
        self.add_migration(
            "add_due_date_column",
            |conn| has_column(conn, TASKS_TABLE, "due_date"),
            |tx| {
                tx.execute("ALTER TABLE tasks ADD COLUMN due_date TEXT", [])?;
                Ok(())
            },
        );

        // Databases from before categories existed
        self.add_migration(
            "add_category_column",
            |conn| has_column(conn, TASKS_TABLE, "category"),
            |tx| {
                tx.execute("ALTER TABLE tasks ADD COLUMN category TEXT", [])?;
                Ok(())
            },
        );
    }

    fn add_migration(&mut self, key: &'static str, is_applied: fn(&Connection) -> Result<bool>, up: fn(&Transaction) -> Result<()>) {
        self.migrations.push(Migration { key, is_applied, up });
    }

    /// Keys of all registered steps, in order.
    pub fn keys(&self) -> Vec<&'static str> {
        self.migrations.iter().map(|m| m.key).collect()
    }

    /// Keys of the steps the database still lacks, in order.
    pub fn pending(&self, conn: &Connection) -> Result<Vec<&'static str>> {
        let mut pending = Vec::new();
        for migration in &self.migrations {
            if !(migration.is_applied)(conn)? {
                pending.push(migration.key);
            }
        }
        Ok(pending)
    }

    /// Returns `None` for a key no step is registered under.
    pub fn is_applied(&self, conn: &Connection, key: &str) -> Result<Option<bool>> {
        match self.migrations.iter().find(|m| m.key == key) {
            Some(migration) => Ok(Some((migration.is_applied)(conn)?)),
            None => Ok(None),
        }
    }

    /// Applies every pending step inside one transaction.
    ///
    /// Each step re-checks the schema inside the transaction, so a step made
    /// redundant by an earlier one (the table created with all columns) is
    /// skipped.
    pub fn run_migrations(&self, conn: &mut Connection) -> Result<()> {
        let pending = self.pending(conn)?;

        if pending.is_empty() {
            msg_debug!(Message::DatabaseUpToDate);
            return Ok(());
        }

        msg_debug!(Message::MigrationsFound(pending.len()));

        let tx = conn.transaction()?;

        for migration in &self.migrations {
            if (migration.is_applied)(&tx)? {
                continue;
            }

            msg_info!(Message::RunningMigration(migration.key.to_string()));

            match (migration.up)(&tx) {
                Ok(()) => {
                    msg_success!(Message::MigrationCompleted(migration.key.to_string()));
                }
                Err(e) => {
                    msg_error!(Message::MigrationFailed(migration.key.to_string(), e.to_string()));
                    return Err(e);
                }
            }
        }

        tx.commit()?;
        msg_debug!(Message::AllMigrationsCompleted);

        Ok(())
    }
}

impl Default for MigrationManager {
    fn default() -> Self {
        Self::new()
    }
}

/// Creates the `tasks` table if needed and adds any missing columns.
pub fn init_with_migrations(conn: &mut Connection) -> Result<()> {
    let manager = MigrationManager::new();
    manager.run_migrations(conn)?;
    Ok(())
}

pub fn needs_migration(conn: &Connection) -> Result<bool> {
    let manager = MigrationManager::new();
    Ok(!manager.pending(conn)?.is_empty())
}

/// Column names of `table` in declaration order; empty if the table is missing.
pub fn table_columns(conn: &Connection, table: &str) -> Result<Vec<String>> {
    let mut stmt = conn.prepare(&format!("PRAGMA table_info({})", table))?;
    let columns = stmt.query_map([], |row| row.get::<_, String>(1))?.collect::<Result<Vec<_>, _>>()?;

    Ok(columns)
}

fn table_exists(conn: &Connection, table: &str) -> Result<bool> {
    let count: i64 = conn.query_row("SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = ?1", [table], |row| row.get(0))?;

    Ok(count > 0)
}

fn has_column(conn: &Connection, table: &str, column: &str) -> Result<bool> {
    Ok(table_columns(conn, table)?.iter().any(|c| c == column))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_steps_are_ordered() {
        let manager = MigrationManager::new();
        assert_eq!(manager.keys(), vec!["create_tasks_table", "add_due_date_column", "add_category_column"]);
    }

    #[test]
    fn test_fresh_database_gets_full_schema() {
        let mut conn = Connection::open_in_memory().unwrap();
        assert!(needs_migration(&conn).unwrap());

        init_with_migrations(&mut conn).unwrap();

        assert_eq!(table_columns(&conn, TASKS_TABLE).unwrap(), vec!["id", "description", "status", "due_date", "category"]);
        assert!(!needs_migration(&conn).unwrap());
    }

    #[test]
    fn test_legacy_table_gains_missing_columns() {
        let mut conn = Connection::open_in_memory().unwrap();
        conn.execute("CREATE TABLE tasks (id INTEGER PRIMARY KEY AUTOINCREMENT, description TEXT NOT NULL, status TEXT DEFAULT 'Pending')", [])
            .unwrap();
        conn.execute("INSERT INTO tasks (description) VALUES ('Water plants')", []).unwrap();

        let manager = MigrationManager::new();
        assert_eq!(manager.pending(&conn).unwrap(), vec!["add_due_date_column", "add_category_column"]);
        assert_eq!(manager.is_applied(&conn, "create_tasks_table").unwrap(), Some(true));
        assert_eq!(manager.is_applied(&conn, "no_such_step").unwrap(), None);

        manager.run_migrations(&mut conn).unwrap();

        assert!(manager.pending(&conn).unwrap().is_empty());
        let description: String = conn.query_row("SELECT description FROM tasks", [], |row| row.get(0)).unwrap();
        assert_eq!(description, "Water plants");
    }
}
