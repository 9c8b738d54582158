#![allow(dead_code)]

use anyhow::Result;
use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Mutex;
use todo_list::libs::operations::TaskOperations;
use todo_list::libs::task::{Task, TaskOrder, TaskStatus, ALL_CATEGORIES};

/// In-memory stand-in for the SQLite store, used to exercise the front ends.
#[derive(Default)]
pub struct MemoryTasks {
    rows: Mutex<Vec<Task>>,
    next_id: AtomicI64,
}

impl MemoryTasks {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn snapshot(&self) -> Vec<Task> {
        self.rows.lock().unwrap().clone()
    }

    /// A row as it looks after migrating a database that predates due dates and categories.
    pub fn insert_legacy(&self, description: &str) -> i64 {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.rows.lock().unwrap().push(Task {
            id,
            description: description.to_string(),
            status: TaskStatus::Pending,
            due_date: None,
            category: None,
        });
        id
    }
}

impl TaskOperations for MemoryTasks {
    fn add(&self, description: &str, due_date: &str, category: &str) -> Result<i64> {
        let id = self.next_id.fetch_add(1, Ordering::SeqCst) + 1;
        self.rows.lock().unwrap().push(Task {
            id,
            description: description.to_string(),
            status: TaskStatus::Pending,
            due_date: Some(due_date.to_string()),
            category: Some(category.to_string()),
        });
        Ok(id)
    }

    fn list_sorted(&self, order: TaskOrder) -> Result<Vec<Task>> {
        let mut rows = self.snapshot();
        match order {
            TaskOrder::Storage => {}
            TaskOrder::DueDateText => rows.sort_by(|a, b| a.due_date.cmp(&b.due_date)),
            TaskOrder::DueDateCalendar => rows.sort_by_key(|t| (t.due_date_parsed().is_none(), t.due_date_parsed())),
        }
        Ok(rows)
    }

    fn list_by_category(&self, category: &str) -> Result<Vec<Task>> {
        let rows = self.snapshot();
        if category == ALL_CATEGORIES {
            return Ok(rows);
        }
        Ok(rows.into_iter().filter(|t| t.category_str() == category).collect())
    }

    fn get(&self, id: i64) -> Result<Option<Task>> {
        Ok(self.snapshot().into_iter().find(|t| t.id == id))
    }

    fn update(&self, id: i64, description: &str, due_date: &str, category: &str) -> Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.description = description.to_string();
                task.due_date = Some(due_date.to_string());
                task.category = Some(category.to_string());
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn complete(&self, id: i64) -> Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        match rows.iter_mut().find(|t| t.id == id) {
            Some(task) => {
                task.status = TaskStatus::Completed;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&self, id: i64) -> Result<bool> {
        let mut rows = self.rows.lock().unwrap();
        let before = rows.len();
        rows.retain(|t| t.id != id);
        Ok(rows.len() < before)
    }
}

pub fn categories() -> Vec<String> {
    ["Work", "Personal", "Urgent", "Other"].iter().map(|c| c.to_string()).collect()
}
