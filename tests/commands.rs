mod common;

#[cfg(test)]
mod tests {
    use super::common::{categories, MemoryTasks};
    use todo_list::commands::{add, complete, delete, list, update};
    use todo_list::libs::operations::TaskOperations;
    use todo_list::libs::task::TaskStatus;

    fn add_args(description: &str, due: &str, category: Option<&str>) -> add::AddArgs {
        add::AddArgs {
            description: description.to_string(),
            due: due.to_string(),
            category: category.map(str::to_string),
        }
    }

    #[test]
    fn test_add_validates_before_storing() {
        let store = MemoryTasks::new();
        let categories = categories();

        assert_eq!(add::cmd(&store, &categories, add_args("   ", "", None)).unwrap(), None);
        assert_eq!(add::cmd(&store, &categories, add_args("Dentist", "2025-02-30", None)).unwrap(), None);
        assert_eq!(add::cmd(&store, &categories, add_args("Dentist", "", Some("Hobby"))).unwrap(), None);
        assert!(store.snapshot().is_empty());

        let id = add::cmd(&store, &categories, add_args(" Dentist ", "2025-11-03", None)).unwrap().unwrap();
        let task = store.get(id).unwrap().unwrap();
        assert_eq!(task.description, "Dentist");
        assert_eq!(task.category.as_deref(), Some("Work"));
        assert_eq!(task.status, TaskStatus::Pending);
    }

    #[test]
    fn test_update_keeps_unspecified_fields() {
        let store = MemoryTasks::new();
        let categories = categories();
        let id = store.add("Plan trip", "2025-06-01", "Personal").unwrap();

        let changed = update::cmd(
            &store,
            &categories,
            update::UpdateArgs {
                id,
                description: None,
                due: Some(String::new()),
                category: Some("Other".to_string()),
            },
        )
        .unwrap();
        assert!(changed);

        let task = store.get(id).unwrap().unwrap();
        assert_eq!(task.description, "Plan trip");
        assert_eq!(task.due_date.as_deref(), Some(""));
        assert_eq!(task.category.as_deref(), Some("Other"));
    }

    #[test]
    fn test_update_rejects_invalid_input_and_missing_task() {
        let store = MemoryTasks::new();
        let categories = categories();
        let id = store.add("Plan trip", "", "Personal").unwrap();

        let bad_date = update::UpdateArgs {
            id,
            description: None,
            due: Some("tomorrow".to_string()),
            category: None,
        };
        assert!(!update::cmd(&store, &categories, bad_date).unwrap());
        assert_eq!(store.get(id).unwrap().unwrap().due_date.as_deref(), Some(""));

        let missing = update::UpdateArgs {
            id: id + 1,
            description: Some("Ghost".to_string()),
            due: None,
            category: None,
        };
        assert!(!update::cmd(&store, &categories, missing).unwrap());
    }

    #[test]
    fn test_update_legacy_task_without_category() {
        let store = MemoryTasks::new();
        let categories = categories();
        let id = store.insert_legacy("Old task");

        let rename = update::UpdateArgs {
            id,
            description: Some("Renamed".to_string()),
            due: None,
            category: None,
        };
        assert!(update::cmd(&store, &categories, rename).unwrap());

        let task = store.get(id).unwrap().unwrap();
        assert_eq!(task.description, "Renamed");
        assert_eq!(task.due_date.as_deref(), Some(""));
        assert_eq!(task.category.as_deref(), Some(""));
    }

    #[test]
    fn test_update_keeps_retired_category_unless_replaced() {
        let store = MemoryTasks::new();
        let categories = categories();
        let id = store.add("Water plants", "", "Garden").unwrap();

        let set_due = update::UpdateArgs {
            id,
            description: None,
            due: Some("2025-9-1".to_string()),
            category: None,
        };
        assert!(update::cmd(&store, &categories, set_due).unwrap());
        assert_eq!(store.get(id).unwrap().unwrap().category.as_deref(), Some("Garden"));

        let bad_category = update::UpdateArgs {
            id,
            description: None,
            due: None,
            category: Some("Hobby".to_string()),
        };
        assert!(!update::cmd(&store, &categories, bad_category).unwrap());
        assert_eq!(store.get(id).unwrap().unwrap().due_date.as_deref(), Some("2025-9-1"));
    }

    #[test]
    fn test_complete_and_delete() {
        let store = MemoryTasks::new();
        let id = store.add("Renew passport", "", "Urgent").unwrap();

        assert!(complete::cmd(&store, complete::CompleteArgs { id }).unwrap());
        assert!(complete::cmd(&store, complete::CompleteArgs { id }).unwrap());
        assert!(store.get(id).unwrap().unwrap().is_completed());
        assert!(!complete::cmd(&store, complete::CompleteArgs { id: id + 1 }).unwrap());

        assert!(!delete::cmd(&store, delete::DeleteArgs { id: id + 1, yes: true }).unwrap());
        assert!(delete::cmd(&store, delete::DeleteArgs { id, yes: true }).unwrap());
        assert!(store.snapshot().is_empty());
    }

    #[test]
    fn test_list_handles_filters() {
        let store = MemoryTasks::new();
        store.add("Write report", "", "Work").unwrap();

        list::cmd(&store, list::ListArgs::default()).unwrap();
        list::cmd(
            &store,
            list::ListArgs {
                sort: false,
                calendar: true,
                category: "All".to_string(),
            },
        )
        .unwrap();
        list::cmd(
            &store,
            list::ListArgs {
                sort: true,
                calendar: false,
                category: "Personal".to_string(),
            },
        )
        .unwrap();
    }

    #[test]
    fn test_listing_prefers_category_over_sort() {
        let store = MemoryTasks::new();
        store.add("B", "2025-02-01", "Work").unwrap();
        store.add("A", "2025-01-01", "Work").unwrap();
        store.add("C", "", "Personal").unwrap();

        let work: Vec<String> = store.listing("Work", true).unwrap().into_iter().map(|t| t.description).collect();
        assert_eq!(work, vec!["B", "A"]);

        let all: Vec<String> = store.listing("All", true).unwrap().into_iter().map(|t| t.description).collect();
        assert_eq!(all, vec!["C", "A", "B"]);
    }
}
