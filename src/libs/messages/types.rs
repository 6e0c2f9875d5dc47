#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),
    TaskAddEmptyText,
    TaskNotFoundWithNumber(usize),
    TaskCompleted(String),
    TaskReopened(String),
    TaskDeleted(String),
    TaskUpdated(String),
    TaskMoved(usize, usize),
    InvalidMove(usize),
    EditingTask(String),
    ConfirmDeleteTask(String),
    NoTasksFound,
    OperationCancelled,

    // === PROMPTS ===
    PromptTaskText,
    PromptTaskPriority,
    PromptSelectModules,
    PromptDefaultPriority,
    PromptDefaultCategory,
    PromptExportDir,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigDeleted,
    ConfigModuleDefaults,
    ConfigModuleExport,

    // === STORAGE MESSAGES ===
    StorageUnreadable(String, String),
    StorageSaveFailed(String),

    // === EXPORT MESSAGES ===
    ExportSuccess(String),
    NothingToExport,
}
