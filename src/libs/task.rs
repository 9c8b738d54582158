//! Task domain types.
//!
//! A [`Task`] is the single entity the application tracks. Its status only
//! ever moves from [`TaskStatus::Pending`] to [`TaskStatus::Completed`].
//!
//! Due dates are kept as the text the user typed. The only accepted shapes
//! are the empty string and a calendar date written as a four digit year,
//! month and day separated by dashes (`2025-09-15`, also `2025-9-1`). Rows
//! written before a column existed read it back as `None`.

use chrono::NaiveDate;
use rusqlite::types::{FromSql, FromSqlResult, ToSql, ToSqlOutput, ValueRef};
use std::fmt;

/// Category value that disables category filtering.
pub const ALL_CATEGORIES: &str = "All";

/// Categories offered by the front ends when no configuration overrides them.
/// The store itself accepts any label.
pub const DEFAULT_CATEGORIES: [&str; 4] = ["Work", "Personal", "Urgent", "Other"];

/// Due date format accepted by [`validate_due_date`].
pub const DUE_DATE_FORMAT: &str = "%Y-%m-%d";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskStatus {
    #[default]
    Pending,
    Completed,
}

impl TaskStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskStatus::Pending => "Pending",
            TaskStatus::Completed => "Completed",
        }
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl ToSql for TaskStatus {
    fn to_sql(&self) -> rusqlite::Result<ToSqlOutput<'_>> {
        Ok(ToSqlOutput::from(self.as_str()))
    }
}

/// Only the exact text `Completed` reads as completed. `NULL`, `Pending` and
/// any other value (a hand-edited `Done`, a number) read as Pending.
impl FromSql for TaskStatus {
    fn column_result(value: ValueRef<'_>) -> FromSqlResult<Self> {
        match value {
            ValueRef::Text(b"Completed") => Ok(TaskStatus::Completed),
            _ => Ok(TaskStatus::Pending),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    pub id: i64,
    pub description: String,
    pub status: TaskStatus,
    /// `YYYY-MM-DD`, empty, or `None` for rows written before the column existed.
    pub due_date: Option<String>,
    pub category: Option<String>,
}

impl Task {
    pub fn due_date_str(&self) -> &str {
        self.due_date.as_deref().unwrap_or_default()
    }

    pub fn category_str(&self) -> &str {
        self.category.as_deref().unwrap_or_default()
    }

    pub fn is_completed(&self) -> bool {
        self.status == TaskStatus::Completed
    }

    /// The due date as a calendar date, if it holds one.
    pub fn due_date_parsed(&self) -> Option<NaiveDate> {
        parse_due_date(self.due_date_str())
    }
}

/// Row ordering for task listings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TaskOrder {
    /// Storage order of the table.
    #[default]
    Storage,
    /// Ascending by the raw `due_date` text. Empty and missing dates sort
    /// first because the comparison is lexical, not calendrical.
    DueDateText,
    /// Ascending by parsed calendar date; tasks without a valid date go last.
    DueDateCalendar,
}

impl TaskOrder {
    pub fn from_sort_flag(sort_by_due_date: bool) -> Self {
        if sort_by_due_date {
            TaskOrder::DueDateText
        } else {
            TaskOrder::Storage
        }
    }
}

/// Returns whether `due_date` is acceptable as a task due date.
///
/// An empty string means "no due date" and is valid. Anything else must be a
/// real calendar date in `YYYY-MM-DD` form, so `2025-02-30` is rejected.
/// Month and day may drop their leading zero; the year may not be shortened,
/// signed or padded with whitespace.
pub fn validate_due_date(due_date: &str) -> bool {
    due_date.is_empty() || parse_due_date(due_date).is_some()
}

fn parse_due_date(text: &str) -> Option<NaiveDate> {
    if !has_date_shape(text) {
        return None;
    }
    NaiveDate::parse_from_str(text, DUE_DATE_FORMAT).ok()
}

// chrono's %Y takes any digit count and a sign, and skips leading spaces
fn has_date_shape(text: &str) -> bool {
    let parts: Vec<&str> = text.split('-').collect();
    match parts.as_slice() {
        &[year, month, day] => is_digits(year, 4, 4) && is_digits(month, 1, 2) && is_digits(day, 1, 2),
        _ => false,
    }
}

fn is_digits(part: &str, min_len: usize, max_len: usize) -> bool {
    (min_len..=max_len).contains(&part.len()) && part.bytes().all(|b| b.is_ascii_digit())
}
