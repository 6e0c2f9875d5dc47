use crate::{
    libs::{config::Config, messages::Message, task::Priority, task_list::TaskList},
    msg_error, msg_success,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct AddArgs {
    #[arg(required = true, help = "Task text")]
    text: String,
    #[arg(long, short, value_enum, help = "Task priority (defaults to the configured priority)")]
    priority: Option<Priority>,
    #[arg(long, short, help = "Task category (defaults to the configured category)")]
    category: Option<String>,
}

pub fn cmd(args: AddArgs) -> Result<()> {
    let defaults = Config::read()?.defaults.unwrap_or_default();
    let priority = args.priority.unwrap_or(defaults.priority);
    let category = args.category.unwrap_or(defaults.category);

    let mut list = TaskList::open()?;
    match list.add(&args.text, priority, Some(category.as_str())) {
        Some(task) => msg_success!(Message::TaskAdded(task.text.clone())),
        None => msg_error!(Message::TaskAddEmptyText),
    }

    Ok(())
}
