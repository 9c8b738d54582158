use crate::{
    libs::{
        messages::Message,
        operations::TaskOperations,
        task::{TaskOrder, ALL_CATEGORIES},
        view::View,
    },
    msg_info, msg_print,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    /// Sort by due date (plain text order, tasks without a date first)
    #[arg(short, long)]
    pub sort: bool,
    /// Sort by calendar date instead, tasks without a date last
    #[arg(long, conflicts_with = "sort")]
    pub calendar: bool,
    /// Show only this category
    #[arg(short, long, default_value = ALL_CATEGORIES)]
    pub category: String,
}

impl Default for ListArgs {
    fn default() -> Self {
        Self {
            sort: false,
            calendar: false,
            category: ALL_CATEGORIES.to_string(),
        }
    }
}

pub fn cmd<O: TaskOperations>(ops: &O, args: ListArgs) -> Result<()> {
    let tasks = if args.calendar && args.category == ALL_CATEGORIES {
        ops.list_sorted(TaskOrder::DueDateCalendar)?
    } else {
        ops.listing(&args.category, args.sort)?
    };

    if tasks.is_empty() {
        if args.category == ALL_CATEGORIES {
            msg_info!(Message::TasksNotFound);
        } else {
            msg_info!(Message::TasksNotFoundInCategory(args.category));
        }
        return Ok(());
    }

    let header = if args.category != ALL_CATEGORIES {
        Message::TasksInCategoryHeader(args.category)
    } else if args.sort || args.calendar {
        Message::TasksSortedHeader
    } else {
        Message::TasksHeader
    };
    msg_print!(header, true);
    View::tasks(&tasks)?;

    Ok(())
}

/// Redisplays the whole task list; run after every change.
pub fn refresh<O: TaskOperations>(ops: &O) -> Result<()> {
    cmd(ops, ListArgs::default())
}
