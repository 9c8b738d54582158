//! Display implementation for application messages.
//!
//! All user-facing text lives here so the terminal and web front ends word
//! things the same way.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded => "Task added successfully!".to_string(),
            Message::TaskUpdated => "Task updated successfully!".to_string(),
            Message::TaskCompleted => "Task marked as completed!".to_string(),
            Message::TaskDeleted => "Task deleted successfully!".to_string(),
            Message::TaskNotFound => "Task not found.".to_string(),
            Message::TaskAddedWithId(id) => format!("Task #{} added", id),
            Message::TaskUpdatedWithId(id) => format!("Task #{} updated", id),
            Message::TaskCompletedWithId(id) => format!("Task #{} marked as completed", id),
            Message::TaskDeletedWithId(id) => format!("Task #{} deleted", id),
            Message::TaskNotFoundWithId(id) => format!("Task #{} not found", id),
            Message::TasksNotFound => "No tasks yet".to_string(),
            Message::TasksNotFoundInCategory(category) => format!("No tasks in category '{}'", category),
            Message::TasksHeader => "Tasks:".to_string(),
            Message::TasksSortedHeader => "Tasks by due date:".to_string(),
            Message::TasksInCategoryHeader(category) => format!("Tasks in '{}':", category),
            Message::EditingTask(id, description) => format!("Editing task #{}: {}", id, description),
            Message::ConfirmDeleteTask(description) => format!("Are you sure you want to delete '{}'?", description),
            Message::OperationCancelled => "Operation cancelled".to_string(),
            Message::InvalidInput(reason) => reason.clone(),

            // === PROMPTS ===
            Message::PromptTaskDescription => "Description".to_string(),
            Message::PromptTaskDueDate => "Due date (YYYY-MM-DD, empty for none)".to_string(),
            Message::PromptTaskCategory => "Category".to_string(),
            Message::PromptFilterCategory => "Filter by category".to_string(),
            Message::PromptSortByDueDate => "Sort by due date?".to_string(),
            Message::SelectAction => "What would you like to do?".to_string(),
            Message::SelectTask => "Select a task".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigModuleDatabase => "Database".to_string(),
            Message::ConfigModuleServer => "Web server".to_string(),
            Message::ConfigModuleCategories => "Categories".to_string(),
            Message::SelectConfigModules => "Select modules to configure".to_string(),
            Message::PromptDatabasePath => "Database file path".to_string(),
            Message::PromptServerHost => "Server host".to_string(),
            Message::PromptServerPort => "Server port".to_string(),
            Message::PromptCategories => "Categories (comma separated)".to_string(),

            // === MIGRATION MESSAGES ===
            Message::DatabaseUpToDate => "Database is up to date".to_string(),
            Message::MigrationsFound(count) => format!("Found {} pending schema step(s)", count),
            Message::RunningMigration(key) => format!("Applying schema step '{}'", key),
            Message::MigrationCompleted(key) => format!("Schema step '{}' applied", key),
            Message::MigrationFailed(key, error) => format!("Schema step '{}' failed: {}", key, error),
            Message::AllMigrationsCompleted => "All schema steps applied".to_string(),
            Message::MigrationStatusHeader => "Schema steps:".to_string(),
            Message::MigrationStatus(key, applied) => format!("  [{}] {}", if *applied { "x" } else { " " }, key),
            Message::DatabasePath(path) => format!("Database: {}", path),
            Message::TaskCount(count) => format!("Tasks stored: {}", count),

            // === SERVER MESSAGES ===
            Message::ServerListening(addr) => format!("Serving tasks on http://{}", addr),
        };

        write!(f, "{}", text)
    }
}
