use crate::{
    libs::{messages::Message, task_list::TaskList},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct MoveArgs {
    #[arg(required = true, help = "Current position of the task (1-based)")]
    from: usize,
    #[arg(required = true, help = "New position for the task (1-based)")]
    to: usize,
}

// Positions on the command line are the displayed 1-based numbers; the
// state machine itself works on 0-based indices.
pub fn cmd(args: MoveArgs) -> Result<()> {
    let mut list = TaskList::open()?;

    if args.from == 0 || args.to == 0 {
        msg_error!(Message::InvalidMove(list.len()));
        return Ok(());
    }

    if list.reorder(args.from - 1, args.to - 1) {
        msg_success!(Message::TaskMoved(args.from, args.to));
    } else {
        msg_error!(Message::InvalidMove(list.len()));
    }

    Ok(())
}
