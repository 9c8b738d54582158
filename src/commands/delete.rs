use super::list;
use crate::{
    libs::{messages::Message, operations::TaskOperations},
    msg_error, msg_success, msg_warning,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    /// Task ID
    pub id: i64,
    /// Skip the confirmation prompt
    #[arg(short, long)]
    pub yes: bool,
}

/// Deletes a task after confirmation. Returns whether a task was removed.
pub fn cmd<O: TaskOperations>(ops: &O, args: DeleteArgs) -> Result<bool> {
    let task = match ops.get(args.id)? {
        Some(task) => task,
        None => {
            msg_error!(Message::TaskNotFoundWithId(args.id));
            return Ok(false);
        }
    };

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(task.description.clone()).to_string())
            .default(false)
            .interact()?;
        if !confirmed {
            msg_warning!(Message::OperationCancelled);
            return Ok(false);
        }
    }

    if !ops.delete(task.id)? {
        msg_error!(Message::TaskNotFoundWithId(task.id));
        return Ok(false);
    }

    msg_success!(Message::TaskDeletedWithId(task.id));
    list::refresh(ops)?;

    Ok(true)
}
