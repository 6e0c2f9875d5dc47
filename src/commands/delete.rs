use crate::{
    libs::{messages::Message, task_list::TaskList},
    msg_error, msg_info, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Confirm};

#[derive(Debug, Args)]
pub struct DeleteArgs {
    #[arg(required = true, help = "Task number as shown by 'tudu list'")]
    number: usize,
    #[arg(long, short = 'y', help = "Delete without asking for confirmation")]
    yes: bool,
}

pub fn cmd(args: DeleteArgs) -> Result<()> {
    let mut list = TaskList::open()?;

    let Some(task) = list.by_number(args.number) else {
        msg_error!(Message::TaskNotFoundWithNumber(args.number));
        return Ok(());
    };
    let id = task.id;
    let text = task.text.clone();

    if !args.yes {
        let confirmed = Confirm::with_theme(&ColorfulTheme::default())
            .with_prompt(Message::ConfirmDeleteTask(text.clone()).to_string())
            .default(false)
            .interact()?;

        if !confirmed {
            msg_info!(Message::OperationCancelled);
            return Ok(());
        }
    }

    if list.delete(id) {
        msg_success!(Message::TaskDeleted(text));
    } else {
        msg_error!(Message::TaskNotFoundWithNumber(args.number));
    }

    Ok(())
}
