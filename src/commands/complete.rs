use super::list;
use crate::{
    libs::{messages::Message, operations::TaskOperations},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct CompleteArgs {
    /// Task ID
    pub id: i64,
}

pub fn cmd<O: TaskOperations>(ops: &O, args: CompleteArgs) -> Result<bool> {
    if !ops.complete(args.id)? {
        msg_error!(Message::TaskNotFoundWithId(args.id));
        return Ok(false);
    }

    msg_success!(Message::TaskCompletedWithId(args.id));
    list::refresh(ops)?;

    Ok(true)
}
