use crate::{
    libs::{messages::Message, task_list::TaskList},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct DoneArgs {
    #[arg(required = true, help = "Task number as shown by 'tudu list'")]
    number: usize,
}

// Toggles completion, so running it twice restores the original state.
pub fn cmd(args: DoneArgs) -> Result<()> {
    let mut list = TaskList::open()?;

    let Some(task) = list.by_number(args.number) else {
        msg_error!(Message::TaskNotFoundWithNumber(args.number));
        return Ok(());
    };
    let id = task.id;
    let text = task.text.clone();

    match list.toggle_complete(id) {
        Some(true) => msg_success!(Message::TaskCompleted(text)),
        Some(false) => msg_success!(Message::TaskReopened(text)),
        None => msg_error!(Message::TaskNotFoundWithNumber(args.number)),
    }

    Ok(())
}
