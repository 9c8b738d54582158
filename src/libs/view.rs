use super::task::Task;
use anyhow::Result;
use prettytable::{row, Cell, Row, Table};

pub struct View {}

impl View {
    /// Prints tasks as a table. Completed tasks show their status in green.
    pub fn tasks(tasks: &[Task]) -> Result<()> {
        Self::tasks_table(tasks).printstd();

        Ok(())
    }

    pub fn tasks_table(tasks: &[Task]) -> Table {
        let mut table = Table::new();

        table.set_titles(row!["ID", "DESCRIPTION", "STATUS", "DUE DATE", "CATEGORY"]);
        for task in tasks {
            let status = if task.is_completed() {
                Cell::new(task.status.as_str()).style_spec("Fg")
            } else {
                Cell::new(task.status.as_str())
            };
            table.add_row(Row::new(vec![
                Cell::new(&task.id.to_string()),
                Cell::new(&task.description),
                status,
                Cell::new(task.due_date_str()),
                Cell::new(task.category_str()),
            ]));
        }

        table
    }
}
