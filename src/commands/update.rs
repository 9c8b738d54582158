use super::list;
use crate::{
    libs::{messages::Message, operations::TaskOperations, task::Task, validation::TaskInput},
    msg_error, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct UpdateArgs {
    /// Task ID
    pub id: i64,
    /// New description
    #[arg(short = 'm', long)]
    pub description: Option<String>,
    /// New due date as YYYY-MM-DD, or an empty string to clear it
    #[arg(short, long)]
    pub due: Option<String>,
    /// New category
    #[arg(short, long)]
    pub category: Option<String>,
}

impl UpdateArgs {
    fn has_changes(&self) -> bool {
        self.description.is_some() || self.due.is_some() || self.category.is_some()
    }
}

/// Overwrites description, due date and category of one task. Fields not given
/// on the command line keep their value; with none given, each is prompted
/// for with the current value as default. Returns whether the task changed.
pub fn cmd<O: TaskOperations>(ops: &O, categories: &[String], args: UpdateArgs) -> Result<bool> {
    let task = match ops.get(args.id)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFoundWithId(args.id));
            return Ok(false);
        }
    };

    // A category left unspecified keeps the stored label even when it is
    // outside the configured list, as for tasks written before categories existed
    let (description, due_date, category, check_category) = if args.has_changes() {
        let check_category = args.category.is_some();
        (
            args.description.unwrap_or_else(|| task.description.clone()),
            args.due.unwrap_or_else(|| task.due_date_str().to_string()),
            args.category.unwrap_or_else(|| task.category_str().to_string()),
            check_category,
        )
    } else {
        let (description, due_date, category) = prompt_fields(&task, categories)?;
        (description, due_date, category, true)
    };

    let parsed = if check_category {
        TaskInput::parse_with_categories(&description, &due_date, &category, categories)
    } else {
        TaskInput::parse(&description, &due_date, &category)
    };
    let input = match parsed {
        Ok(input) => input,
        Err(e) => {
            msg_error!(Message::InvalidInput(e.to_string()));
            return Ok(false);
        }
    };

    if !ops.update(task.id, &input.description, &input.due_date, &input.category)? {
        msg_error!(Message::TaskNotFoundWithId(task.id));
        return Ok(false);
    }

    msg_success!(Message::TaskUpdatedWithId(task.id));
    list::refresh(ops)?;

    Ok(true)
}

fn prompt_fields(task: &Task, categories: &[String]) -> Result<(String, String, String)> {
    msg_print!(Message::EditingTask(task.id, task.description.clone()), true);

    let description: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDescription.to_string())
        .default(task.description.clone())
        .interact_text()?;

    let due_date: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskDueDate.to_string())
        .default(task.due_date_str().to_string())
        .allow_empty(true)
        .interact_text()?;

    let current = categories.iter().position(|c| c == task.category_str()).unwrap_or(0);
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskCategory.to_string())
        .items(categories)
        .default(current)
        .interact()?;
    let category = categories.get(selection).cloned().unwrap_or_default();

    Ok((description, due_date, category))
}
