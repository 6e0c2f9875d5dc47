use crate::{
    libs::{
        export::{ExportFormat, Exporter},
        messages::Message,
        task_list::TaskList,
    },
    msg_info,
};
use anyhow::Result;
use clap::Args;
use std::path::PathBuf;

#[derive(Debug, Args)]
pub struct ExportArgs {
    #[arg(long, short, value_enum, default_value = "csv", help = "Output format")]
    format: ExportFormat,
    #[arg(long, short, help = "Output file path (defaults to a date-stamped name)")]
    output: Option<PathBuf>,
}

pub fn cmd(args: ExportArgs) -> Result<()> {
    let list = TaskList::open()?;

    if list.is_empty() {
        msg_info!(Message::NothingToExport);
        return Ok(());
    }

    Exporter::new(args.format, args.output).export(list.tasks())?;
    Ok(())
}
