//! Input validation performed by the front ends before they touch the store.
//!
//! The store writes whatever it is given; rejecting an empty description or a
//! malformed due date is the caller's job, and both adapters do it through
//! [`TaskInput::parse`].

use super::task::validate_due_date;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Task description cannot be empty.")]
    EmptyDescription,
    #[error("Invalid due date format. Use YYYY-MM-DD or leave empty.")]
    InvalidDueDate,
    #[error("Unknown category '{0}'.")]
    UnknownCategory(String),
}

/// Task fields that passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInput {
    pub description: String,
    pub due_date: String,
    pub category: String,
}

impl TaskInput {
    /// Trims description and due date, then checks them.
    pub fn parse(description: &str, due_date: &str, category: &str) -> Result<Self, ValidationError> {
        let description = description.trim();
        let due_date = due_date.trim();

        if description.is_empty() {
            return Err(ValidationError::EmptyDescription);
        }
        if !validate_due_date(due_date) {
            return Err(ValidationError::InvalidDueDate);
        }

        Ok(Self {
            description: description.to_string(),
            due_date: due_date.to_string(),
            category: category.to_string(),
        })
    }

    /// [`TaskInput::parse`] plus a check that the category is one of `allowed`.
    pub fn parse_with_categories(description: &str, due_date: &str, category: &str, allowed: &[String]) -> Result<Self, ValidationError> {
        let input = Self::parse(description, due_date, category)?;
        check_category(&input.category, allowed)?;
        Ok(input)
    }
}

/// Front ends offer a fixed category list; this keeps typed input inside it.
pub fn check_category(category: &str, allowed: &[String]) -> Result<(), ValidationError> {
    if allowed.iter().any(|c| c == category) {
        Ok(())
    } else {
        Err(ValidationError::UnknownCategory(category.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_trims_fields() {
        let input = TaskInput::parse("  Pay rent ", " 2025-10-01 ", "Urgent").unwrap();
        assert_eq!(input.description, "Pay rent");
        assert_eq!(input.due_date, "2025-10-01");
        assert_eq!(input.category, "Urgent");
    }

    #[test]
    fn test_parse_rejects_blank_description() {
        assert_eq!(TaskInput::parse("   ", "", "Work"), Err(ValidationError::EmptyDescription));
    }

    #[test]
    fn test_parse_rejects_bad_due_date() {
        assert_eq!(TaskInput::parse("Call bank", "2025-02-30", "Work"), Err(ValidationError::InvalidDueDate));
    }

    #[test]
    fn test_check_category() {
        let allowed = vec!["Work".to_string(), "Personal".to_string()];
        assert!(check_category("Work", &allowed).is_ok());
        assert_eq!(check_category("work", &allowed), Err(ValidationError::UnknownCategory("work".to_string())));
    }

    #[test]
    fn test_parse_accepts_empty_due_date() {
        let input = TaskInput::parse("Call bank", "", "Other").unwrap();
        assert!(input.due_date.is_empty());
    }
}
