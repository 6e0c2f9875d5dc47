use crate::{
    libs::{messages::Message, stats::Stats, task_list::TaskList, view::View},
    msg_info,
};
use anyhow::Result;
use clap::Args;

#[derive(Debug, Args)]
pub struct StatsArgs {}

pub fn cmd(_args: StatsArgs) -> Result<()> {
    let list = TaskList::open()?;

    if list.is_empty() {
        msg_info!(Message::NoTasksFound);
        return Ok(());
    }

    View::stats(&Stats::collect(list.tasks()))?;
    Ok(())
}
