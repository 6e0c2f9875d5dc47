use crate::libs::stats::Stats;
use crate::libs::task::Task;
use anyhow::Result;
use prettytable::{row, Table};

pub struct View {}

impl View {
    /// Renders tasks as a table, one row per visible task.
    ///
    /// Numbers are the tasks' own full-list positions, not row indices,
    /// so filtered views keep the numbers the other commands accept.
    pub fn tasks(tasks: &[&Task]) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["#", "DONE", "TASK", "PRIORITY", "CATEGORY", "DUE"]);
        for task in tasks {
            table.add_row(row![
                task.number,
                if task.completed { "✓" } else { "" },
                task.text,
                task.priority,
                task.category,
                task.due_date.map(|d| d.to_string()).unwrap_or_default()
            ]);
        }
        table.printstd();

        Ok(())
    }

    pub fn stats(stats: &Stats) -> Result<()> {
        let mut table = Table::new();

        table.add_row(row!["TOTAL", "COMPLETED", "PENDING", "COMPLETION"]);
        table.add_row(row![
            stats.total,
            stats.completed,
            stats.pending,
            format!("{}%", stats.completion_rate)
        ]);
        table.printstd();

        Ok(())
    }
}
