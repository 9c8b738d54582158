//! The task operations both front ends are written against.
//!
//! [`crate::db::tasks::Tasks`] is the SQLite implementation. The terminal and
//! web adapters only see this trait, so either can run against another store.

use super::task::{Task, TaskOrder, ALL_CATEGORIES};
use anyhow::Result;

pub trait TaskOperations: Send + Sync {
    /// Inserts a Pending task and returns its id. Performs no validation.
    fn add(&self, description: &str, due_date: &str, category: &str) -> Result<i64>;

    fn list_sorted(&self, order: TaskOrder) -> Result<Vec<Task>>;

    /// Exact-match category filter; `"All"` returns every task.
    fn list_by_category(&self, category: &str) -> Result<Vec<Task>>;

    fn get(&self, id: i64) -> Result<Option<Task>>;

    /// Overwrites description, due date and category. Returns `false` when no task has `id`.
    fn update(&self, id: i64, description: &str, due_date: &str, category: &str) -> Result<bool>;

    /// Marks the task Completed. Returns `false` when no task has `id`.
    fn complete(&self, id: i64) -> Result<bool>;

    /// Returns `false` when no task has `id`.
    fn delete(&self, id: i64) -> Result<bool>;

    fn list_all(&self, sort_by_due_date: bool) -> Result<Vec<Task>> {
        self.list_sorted(TaskOrder::from_sort_flag(sort_by_due_date))
    }

    /// The listing shown by the front ends: a concrete category wins over the
    /// sort toggle, otherwise every task in the requested order.
    fn listing(&self, category: &str, sort_by_due_date: bool) -> Result<Vec<Task>> {
        if category != ALL_CATEGORIES {
            self.list_by_category(category)
        } else {
            self.list_all(sort_by_due_date)
        }
    }
}
