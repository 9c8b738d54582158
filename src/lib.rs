//! # Todo List
//!
//! Personal task tracking over a single SQLite table, with a terminal and a
//! web front end sharing one store.
//!
//! ## Features
//!
//! - **Task Store**: add, list, filter, update, complete and delete tasks
//! - **Schema Steps**: idempotent, additive migration of older databases
//! - **Terminal Interface**: subcommands and an interactive menu
//! - **Web Interface**: server-rendered pages over the same operations
//!
//! ## Usage
//!
//! ```rust,no_run
//! use todo_list::db::tasks::Tasks;
//! use todo_list::libs::operations::TaskOperations;
//!
//! let tasks = Tasks::new("todo_list.db")?;
//! tasks.add("Buy milk", "2025-09-01", "Personal")?;
//! for task in tasks.list_all(true)? {
//!     println!("{} {}", task.id, task.description);
//! }
//! # Ok::<(), anyhow::Error>(())
//! ```

pub mod commands;
pub mod db;
pub mod libs;
pub mod web;
