pub mod add;
pub mod delete;
pub mod done;
pub mod edit;
pub mod export;
pub mod init;
pub mod list;
pub mod reorder;
pub mod stats;

use clap::{Parser, Subcommand};

#[derive(Debug, Subcommand)]
enum Commands {
    #[command(about = "Configuration initialization")]
    Init(init::InitArgs),
    #[command(about = "Add a new task")]
    Add(add::AddArgs),
    #[command(about = "List tasks, optionally filtered")]
    List(list::ListArgs),
    #[command(about = "Toggle task completion")]
    Done(done::DoneArgs),
    #[command(about = "Edit a task's text and priority")]
    Edit(edit::EditArgs),
    #[command(about = "Delete a task")]
    Delete(delete::DeleteArgs),
    #[command(about = "Move a task to a new position")]
    Move(reorder::MoveArgs),
    #[command(about = "Show completion statistics")]
    Stats(stats::StatsArgs),
    #[command(about = "Export tasks to a file")]
    Export(export::ExportArgs),
}

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
#[command(arg_required_else_help(true))]
pub struct Cli {
    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    pub fn menu() -> anyhow::Result<()> {
        let cli = Self::parse();
        match cli.command {
            Commands::Init(args) => init::cmd(args),
            Commands::Add(args) => add::cmd(args),
            Commands::List(args) => list::cmd(args),
            Commands::Done(args) => done::cmd(args),
            Commands::Edit(args) => edit::cmd(args),
            Commands::Delete(args) => delete::cmd(args),
            Commands::Move(args) => reorder::cmd(args),
            Commands::Stats(args) => stats::cmd(args),
            Commands::Export(args) => export::cmd(args),
        }
    }
}
