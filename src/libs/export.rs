//! Task list export for backup and external analysis.
//!
//! Exports write the full task list to CSV, JSON or Excel. The output
//! location comes from `--output`, falling back to the configured export
//! directory and then the current directory, with a date-stamped default
//! file name.

use crate::libs::config::Config;
use crate::libs::messages::Message;
use crate::libs::task::Task;
use crate::msg_success;
use anyhow::Result;
use chrono::Local;
use rust_xlsxwriter::{Format, Workbook};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

/// Supported export output formats.
#[derive(Debug, Clone, Copy, clap::ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values for spreadsheets and scripts.
    Csv,
    /// Pretty-printed JSON preserving types and structure.
    Json,
    /// Excel workbook with a formatted header row.
    Excel,
}

impl ExportFormat {
    fn extension(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
            ExportFormat::Excel => "xlsx",
        }
    }
}

/// Flat, string-valued task record used by all export formats.
#[derive(Debug, Serialize, Deserialize)]
pub struct ExportTask {
    pub number: usize,
    pub text: String,
    pub completed: bool,
    pub priority: String,
    pub category: String,
    pub due_date: String,
    pub created_at: String,
    pub updated_at: String,
}

impl From<&Task> for ExportTask {
    fn from(task: &Task) -> Self {
        ExportTask {
            number: task.number,
            text: task.text.clone(),
            completed: task.completed,
            priority: task.priority.to_string(),
            category: task.category.clone(),
            due_date: task.due_date.map(|d| d.to_string()).unwrap_or_default(),
            created_at: task.created_at.format("%Y-%m-%d %H:%M").to_string(),
            updated_at: task.updated_at.format("%Y-%m-%d %H:%M").to_string(),
        }
    }
}

const EXPORT_HEADERS: [&str; 8] = [
    "Number",
    "Task",
    "Completed",
    "Priority",
    "Category",
    "Due date",
    "Created",
    "Updated",
];

/// Writes the task list to a file in the selected format.
pub struct Exporter {
    format: ExportFormat,
    output: Option<PathBuf>,
}

impl Exporter {
    pub fn new(format: ExportFormat, output: Option<PathBuf>) -> Self {
        Exporter { format, output }
    }

    /// Exports `tasks` and reports the written path.
    pub fn export(&self, tasks: &[Task]) -> Result<()> {
        let path = self.resolve_path()?;
        let records: Vec<ExportTask> = tasks.iter().map(ExportTask::from).collect();

        match self.format {
            ExportFormat::Csv => self.write_csv(&records, &path)?,
            ExportFormat::Json => self.write_json(&records, &path)?,
            ExportFormat::Excel => self.write_excel(&records, &path)?,
        }

        msg_success!(Message::ExportSuccess(path.display().to_string()));
        Ok(())
    }

    /// Picks the output file path.
    ///
    /// An explicit `--output` wins; otherwise a date-stamped file name is
    /// placed in the configured export directory or the current directory.
    fn resolve_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.output {
            return Ok(path.clone());
        }

        let file_name = format!("tudu_tasks_{}.{}", Local::now().format("%Y-%m-%d"), self.format.extension());
        let dir = Config::read()?
            .export
            .and_then(|e| e.output_dir)
            .unwrap_or_else(|| PathBuf::from("."));
        Ok(dir.join(file_name))
    }

    fn write_csv(&self, records: &[ExportTask], path: &PathBuf) -> Result<()> {
        let mut writer = csv::Writer::from_path(path)?;
        for record in records {
            writer.serialize(record)?;
        }
        writer.flush()?;
        Ok(())
    }

    fn write_json(&self, records: &[ExportTask], path: &PathBuf) -> Result<()> {
        let mut file = File::create(path)?;
        let json = serde_json::to_string_pretty(records)?;
        file.write_all(json.as_bytes())?;
        Ok(())
    }

    fn write_excel(&self, records: &[ExportTask], path: &PathBuf) -> Result<()> {
        let mut workbook = Workbook::new();
        let worksheet = workbook.add_worksheet();
        let header_format = Format::new().set_bold();

        for (col, header) in EXPORT_HEADERS.iter().enumerate() {
            worksheet.write_with_format(0, col as u16, *header, &header_format)?;
        }

        for (row, record) in records.iter().enumerate() {
            let row = (row + 1) as u32;
            worksheet.write(row, 0, record.number as u32)?;
            worksheet.write(row, 1, record.text.as_str())?;
            worksheet.write(row, 2, if record.completed { "yes" } else { "no" })?;
            worksheet.write(row, 3, record.priority.as_str())?;
            worksheet.write(row, 4, record.category.as_str())?;
            worksheet.write(row, 5, record.due_date.as_str())?;
            worksheet.write(row, 6, record.created_at.as_str())?;
            worksheet.write(row, 7, record.updated_at.as_str())?;
        }

        worksheet.autofit();
        workbook.save(path)?;
        Ok(())
    }
}
