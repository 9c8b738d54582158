#[cfg(test)]
mod tests {
    use rusqlite::Connection;
    use std::path::PathBuf;
    use todo_list::db::db::Db;
    use todo_list::db::migrations::{needs_migration, table_columns, MigrationManager, TASKS_TABLE};
    use todo_list::db::tasks::Tasks;
    use todo_list::libs::operations::TaskOperations;
    use todo_list::libs::task::TaskStatus;
    use tempfile::TempDir;
    use test_context::{test_context, TestContext};

    struct MigrationTestContext {
        _temp_dir: TempDir,
        db_path: PathBuf,
    }

    impl TestContext for MigrationTestContext {
        fn setup() -> Self {
            let temp_dir = tempfile::tempdir().unwrap();
            let db_path = temp_dir.path().join("todo_list.db");
            MigrationTestContext { _temp_dir: temp_dir, db_path }
        }
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_schema_created_on_open(ctx: &mut MigrationTestContext) {
        Tasks::new(&ctx.db_path).unwrap();

        let db = Db::open(&ctx.db_path).unwrap();
        assert_eq!(table_columns(&db.conn, TASKS_TABLE).unwrap(), vec!["id", "description", "status", "due_date", "category"]);
        assert!(!needs_migration(&db.conn).unwrap());
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_init_twice_changes_nothing(ctx: &mut MigrationTestContext) {
        let tasks = Tasks::new(&ctx.db_path).unwrap();
        tasks.add("Buy milk", "2025-09-01", "Personal").unwrap();
        tasks.add("Pay rent", "", "Urgent").unwrap();

        let columns_before = table_columns(&Db::open(&ctx.db_path).unwrap().conn, TASKS_TABLE).unwrap();

        tasks.init_schema().unwrap();
        tasks.init_schema().unwrap();

        let columns_after = table_columns(&Db::open(&ctx.db_path).unwrap().conn, TASKS_TABLE).unwrap();
        assert_eq!(columns_before, columns_after);
        assert_eq!(tasks.count().unwrap(), 2);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_legacy_database_is_upgraded(ctx: &mut MigrationTestContext) {
        {
            let conn = Connection::open(&ctx.db_path).unwrap();
            conn.execute(
                "CREATE TABLE tasks (id INTEGER PRIMARY KEY AUTOINCREMENT, description TEXT NOT NULL, status TEXT DEFAULT 'Pending')",
                [],
            )
            .unwrap();
            conn.execute("INSERT INTO tasks (description, status) VALUES ('Old pending', 'Pending')", []).unwrap();
            conn.execute("INSERT INTO tasks (description, status) VALUES ('Old done', 'Completed')", []).unwrap();
        }

        let tasks = Tasks::new(&ctx.db_path).unwrap();

        let all = tasks.list_all(false).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].description, "Old pending");
        assert_eq!(all[0].due_date, None);
        assert_eq!(all[0].category, None);
        assert_eq!(all[1].status, TaskStatus::Completed);

        // Old rows and new rows live side by side
        let id = tasks.add("New task", "2025-09-15", "Work").unwrap();
        assert_eq!(tasks.get(id).unwrap().unwrap().category.as_deref(), Some("Work"));
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_count_without_schema_changes(ctx: &mut MigrationTestContext) {
        {
            let conn = Connection::open(&ctx.db_path).unwrap();
            conn.execute(
                "CREATE TABLE tasks (id INTEGER PRIMARY KEY AUTOINCREMENT, description TEXT NOT NULL, status TEXT DEFAULT 'Pending')",
                [],
            )
            .unwrap();
            conn.execute("INSERT INTO tasks (description) VALUES ('Old task')", []).unwrap();
        }

        assert_eq!(Tasks::at(&ctx.db_path).count().unwrap(), 1);

        let db = Db::open(&ctx.db_path).unwrap();
        assert_eq!(MigrationManager::new().pending(&db.conn).unwrap(), vec!["add_due_date_column", "add_category_column"]);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_partially_migrated_database(ctx: &mut MigrationTestContext) {
        {
            let conn = Connection::open(&ctx.db_path).unwrap();
            conn.execute(
                "CREATE TABLE tasks (id INTEGER PRIMARY KEY AUTOINCREMENT, description TEXT NOT NULL, status TEXT DEFAULT 'Pending', due_date TEXT)",
                [],
            )
            .unwrap();
        }

        let manager = MigrationManager::new();
        let mut db = Db::open(&ctx.db_path).unwrap();
        assert_eq!(manager.pending(&db.conn).unwrap(), vec!["add_category_column"]);

        manager.run_migrations(&mut db.conn).unwrap();
        assert!(manager.pending(&db.conn).unwrap().is_empty());
        assert!(table_columns(&db.conn, TASKS_TABLE).unwrap().contains(&"category".to_string()));
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_null_status_reads_as_pending(ctx: &mut MigrationTestContext) {
        let tasks = Tasks::new(&ctx.db_path).unwrap();
        {
            let db = Db::open(&ctx.db_path).unwrap();
            db.conn.execute("INSERT INTO tasks (description, status) VALUES ('Imported', NULL)", []).unwrap();
        }

        let all = tasks.list_all(false).unwrap();
        assert_eq!(all[0].status, TaskStatus::Pending);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_unknown_status_reads_as_pending(ctx: &mut MigrationTestContext) {
        let tasks = Tasks::new(&ctx.db_path).unwrap();
        {
            let db = Db::open(&ctx.db_path).unwrap();
            db.conn.execute("INSERT INTO tasks (description, status) VALUES ('Edited by hand', 'Done')", []).unwrap();
            db.conn.execute("INSERT INTO tasks (description, status) VALUES ('Finished', 'Completed')", []).unwrap();
        }

        let all = tasks.list_all(false).unwrap();
        assert_eq!(all.len(), 2);
        assert_eq!(all[0].status, TaskStatus::Pending);
        assert_eq!(all[1].status, TaskStatus::Completed);
    }

    #[test_context(MigrationTestContext)]
    #[test]
    fn test_legacy_row_can_be_updated(ctx: &mut MigrationTestContext) {
        {
            let conn = Connection::open(&ctx.db_path).unwrap();
            conn.execute(
                "CREATE TABLE tasks (id INTEGER PRIMARY KEY AUTOINCREMENT, description TEXT NOT NULL, status TEXT DEFAULT 'Pending')",
                [],
            )
            .unwrap();
            conn.execute("INSERT INTO tasks (description) VALUES ('Old task')", []).unwrap();
        }

        let tasks = Tasks::new(&ctx.db_path).unwrap();
        let id = tasks.list_all(false).unwrap()[0].id;

        assert!(tasks.update(id, "Renamed", "", "Other").unwrap());
        let task = tasks.get(id).unwrap().unwrap();
        assert_eq!(task.description, "Renamed");
        assert_eq!(task.due_date.as_deref(), Some(""));
        assert_eq!(task.category.as_deref(), Some("Other"));
    }
}
