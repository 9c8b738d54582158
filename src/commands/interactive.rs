//! Menu-driven session started when no subcommand is given.
//!
//! Each action delegates to the matching subcommand, so validation, the
//! delete confirmation and the list refresh behave exactly as on the
//! command line.

use super::{add, complete, delete, list, update};
use crate::{
    libs::{
        messages::Message,
        operations::TaskOperations,
        task::{Task, ALL_CATEGORIES},
    },
    msg_info,
};
use anyhow::Result;
use dialoguer::{theme::ColorfulTheme, Confirm, Input, Select};

const ACTIONS: [&str; 6] = ["Add task", "List tasks", "Update task", "Complete task", "Delete task", "Quit"];

pub fn cmd<O: TaskOperations>(ops: &O, categories: &[String]) -> Result<()> {
    list::refresh(ops)?;

    loop {
        let selection = Select::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::SelectAction.to_string())
            .items(&ACTIONS)
            .default(0)
            .interact()?;

        match selection {
            0 => {
                let (description, due, category) = prompt_new_task(categories)?;
                add::cmd(
                    ops,
                    categories,
                    add::AddArgs {
                        description,
                        due,
                        category: Some(category),
                    },
                )?;
            }
            1 => {
                let mut filters = vec![ALL_CATEGORIES.to_string()];
                filters.extend(categories.iter().cloned());
                let filter = Select::with_theme(&ColorfulTheme::default())
                    .with_prompt(Message::PromptFilterCategory.to_string())
                    .items(&filters)
                    .default(0)
                    .interact()?;
                let sort = filter == 0
                    && Confirm::with_theme(&ColorfulTheme::default())
                        .with_prompt(Message::PromptSortByDueDate.to_string())
                        .default(false)
                        .interact()?;
                list::cmd(
                    ops,
                    list::ListArgs {
                        sort,
                        calendar: false,
                        category: filters[filter].clone(),
                    },
                )?;
            }
            2 => {
                if let Some(id) = select_task(ops)? {
                    update::cmd(
                        ops,
                        categories,
                        update::UpdateArgs {
                            id,
                            description: None,
                            due: None,
                            category: None,
                        },
                    )?;
                }
            }
            3 => {
                if let Some(id) = select_task(ops)? {
                    complete::cmd(ops, complete::CompleteArgs { id })?;
                }
            }
            4 => {
                if let Some(id) = select_task(ops)? {
                    delete::cmd(ops, delete::DeleteArgs { id, yes: false })?;
                }
            }
            _ => return Ok(()),
        }
    }
}

fn prompt_new_task(categories: &[String]) -> Result<(String, String, String)> {
    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .allow_empty(true)
        .interact_text()?;

    let due: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .allow_empty(true)
        .interact_text()?;

    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskCategory.to_string())
        .items(categories)
        .default(0)
        .interact()?;

    Ok((description, due, categories.get(selection).cloned().unwrap_or_default()))
}

fn select_task<O: TaskOperations>(ops: &O) -> Result<Option<i64>> {
    let tasks = ops.list_all(false)?;
    if tasks.is_empty() {
        msg_info!(Message::TasksNotFound);
        return Ok(None);
    }

    let items: Vec<String> = tasks.iter().map(task_label).collect();
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::SelectTask.to_string())
        .items(&items)
        .default(0)
        .interact_opt()?;

    Ok(selection.map(|index| tasks[index].id))
}

fn task_label(task: &Task) -> String {
    let mut label = format!("#{} {} [{}]", task.id, task.description, task.status);
    if !task.due_date_str().is_empty() {
        label.push_str(&format!(" due {}", task.due_date_str()));
    }
    label
}
