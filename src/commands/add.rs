use super::list;
use crate::{
    libs::{
        messages::Message,
        operations::TaskOperations,
        validation::TaskInput,
    },
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    /// What needs doing
    #[arg(required = true)]
    pub description: String,
    /// Due date as YYYY-MM-DD
    #[arg(short, long, default_value = "")]
    pub due: String,
    /// Category; defaults to the first configured one
    #[arg(short, long)]
    pub category: Option<String>,
}

/// Validates the input, stores the task and shows the refreshed list.
/// Returns the new id, or `None` when the input was rejected.
pub fn cmd<O: TaskOperations>(ops: &O, categories: &[String], args: AddArgs) -> Result<Option<i64>> {
    let category = args.category.or_else(|| categories.first().cloned()).unwrap_or_default();

    let input = match TaskInput::parse_with_categories(&args.description, &args.due, &category, categories) {
        Ok(input) => input,
        Err(e) => {
            msg_error!(Message::InvalidInput(e.to_string()));
            return Ok(None);
        }
    };

    let id = ops.add(&input.description, &input.due_date, &input.category)?;
    msg_success!(Message::TaskAddedWithId(id));
    list::refresh(ops)?;

    Ok(Some(id))
}
