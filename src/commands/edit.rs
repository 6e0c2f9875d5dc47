//! Interactive in-place edit of one task.
//!
//! Opens an edit session on the state machine, collects new text and
//! priority with the drafts pre-filled, and commits. Starting an edit
//! here discards any draft a previous invocation left unsaved.

use crate::{
    libs::{
        messages::Message,
        task::Priority,
        task_list::TaskList,
    },
    msg_error, msg_print, msg_success,
};
use anyhow::Result;
use clap::Args;
use dialoguer::{theme::ColorfulTheme, Input, Select};

#[derive(Debug, Args)]
pub struct EditArgs {
    #[arg(required = true, help = "Task number as shown by 'tudu list'")]
    number: usize,
}

pub fn cmd(args: EditArgs) -> Result<()> {
    let mut list = TaskList::open()?;

    let Some(task) = list.by_number(args.number) else {
        msg_error!(Message::TaskNotFoundWithNumber(args.number));
        return Ok(());
    };
    let id = task.id;

    list.start_edit(id);
    let Some(session) = list.editing().cloned() else {
        msg_error!(Message::TaskNotFoundWithNumber(args.number));
        return Ok(());
    };

    msg_print!(Message::EditingTask(session.text.clone()), true);

    let text: String = Input::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskText.to_string())
        .default(session.text.clone())
        .allow_empty(true)
        .interact_text()?;

    let priorities = [Priority::Low, Priority::Medium, Priority::High];
    let current = priorities.iter().position(|p| *p == session.priority).unwrap_or(1);
    let selection = Select::with_theme(&ColorfulTheme::default())
        .with_prompt(Message::PromptTaskPriority.to_string())
        .items(&priorities)
        .default(current)
        .interact()?;

    list.update_draft(Some(&text), Some(priorities[selection]));
    if list.save_edit(id) {
        msg_success!(Message::TaskUpdated(text.trim().to_string()));
    } else {
        msg_error!(Message::TaskNotFoundWithNumber(args.number));
    }

    Ok(())
}
