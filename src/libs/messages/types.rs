#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded,
    TaskUpdated,
    TaskCompleted,
    TaskDeleted,
    TaskNotFound,
    TaskAddedWithId(i64),
    TaskUpdatedWithId(i64),
    TaskCompletedWithId(i64),
    TaskDeletedWithId(i64),
    TaskNotFoundWithId(i64),
    TasksNotFound,
    TasksNotFoundInCategory(String),
    TasksHeader,
    TasksSortedHeader,
    TasksInCategoryHeader(String),
    EditingTask(i64, String),
    ConfirmDeleteTask(String),
    OperationCancelled,
    InvalidInput(String),

    // === PROMPTS ===
    PromptTaskDescription,
    PromptTaskDueDate,
    PromptTaskCategory,
    PromptFilterCategory,
    PromptSortByDueDate,
    SelectAction,
    SelectTask,

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigModuleDatabase,
    ConfigModuleServer,
    ConfigModuleCategories,
    SelectConfigModules,
    PromptDatabasePath,
    PromptServerHost,
    PromptServerPort,
    PromptCategories,

    // === MIGRATION MESSAGES ===
    DatabaseUpToDate,
    MigrationsFound(usize),
    RunningMigration(String),
    MigrationCompleted(String),
    MigrationFailed(String, String),
    AllMigrationsCompleted,
    MigrationStatusHeader,
    MigrationStatus(String, bool),
    DatabasePath(String),
    TaskCount(usize),

    // === SERVER MESSAGES ===
    ServerListening(String),
}
