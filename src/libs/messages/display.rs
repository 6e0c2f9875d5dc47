//! Display implementation for tudu application messages.
//!
//! All user-facing text lives here, in one place, so the wording stays
//! consistent and the macros in [`super::macros`] can route any message to
//! either the console or the tracing subscriber without caring about its
//! content.

use super::types::Message;
use std::fmt;

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let message = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(text) => format!("Task '{}' added", text),
            Message::TaskAddEmptyText => "Task text cannot be empty".to_string(),
            Message::TaskNotFoundWithNumber(number) => format!("No task with number {}", number),
            Message::TaskCompleted(text) => format!("Task '{}' completed", text),
            Message::TaskReopened(text) => format!("Task '{}' reopened", text),
            Message::TaskDeleted(text) => format!("Task '{}' deleted", text),
            Message::TaskUpdated(text) => format!("Task '{}' updated", text),
            Message::TaskMoved(from, to) => format!("Task moved from position {} to {}", from, to),
            Message::InvalidMove(count) => format!("Positions must be distinct and between 1 and {}", count),
            Message::EditingTask(text) => format!("Editing task '{}'", text),
            Message::ConfirmDeleteTask(text) => format!("Delete task '{}'?", text),
            Message::NoTasksFound => "No tasks found".to_string(),
            Message::OperationCancelled => "Operation cancelled".to_string(),

            // === PROMPTS ===
            Message::PromptTaskText => "Task text".to_string(),
            Message::PromptTaskPriority => "Priority".to_string(),
            Message::PromptSelectModules => "Select modules to configure".to_string(),
            Message::PromptDefaultPriority => "Default priority for new tasks".to_string(),
            Message::PromptDefaultCategory => "Default category for new tasks".to_string(),
            Message::PromptExportDir => "Directory for exported files (empty for current)".to_string(),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigDeleted => "Configuration removed".to_string(),
            Message::ConfigModuleDefaults => "Configuring new task defaults".to_string(),
            Message::ConfigModuleExport => "Configuring export".to_string(),

            // === STORAGE MESSAGES ===
            Message::StorageUnreadable(path, error) => {
                format!("Could not read task list from {} ({}); starting with an empty list", path, error)
            }
            Message::StorageSaveFailed(error) => format!("Failed to save task list: {}", error),

            // === EXPORT MESSAGES ===
            Message::ExportSuccess(path) => format!("Tasks exported to: {}", path),
            Message::NothingToExport => "There are no tasks to export".to_string(),
        };

        write!(f, "{}", message)
    }
}
