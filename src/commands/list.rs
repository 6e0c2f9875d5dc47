use crate::{
    libs::{
        filter::{self, FilterCriteria, StatusFilter},
        messages::Message,
        task::Priority,
        task_list::TaskList,
        view::View,
    },
    msg_info,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct ListArgs {
    #[arg(long, short, default_value = "", help = "Show tasks whose text contains this (case-insensitive)")]
    search: String,
    #[arg(long, short, value_enum, help = "Show tasks with this priority")]
    priority: Option<Priority>,
    #[arg(long, short, help = "Show tasks in this category")]
    category: Option<String>,
    #[arg(long, value_enum, help = "Show only active or completed tasks")]
    status: Option<StatusFilter>,
}

pub fn cmd(args: ListArgs) -> Result<()> {
    let list = TaskList::open()?;
    let criteria = FilterCriteria {
        search: args.search,
        priority: args.priority,
        category: args.category,
        status: args.status,
    };

    let visible = filter::apply(list.tasks(), &criteria);
    if visible.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    View::tasks(&visible)?;
    Ok(())
}
