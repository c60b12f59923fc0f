#[derive(Debug, Clone)]
pub enum Message {
    // === TASK MESSAGES ===
    TaskAdded(String),
    TaskUpdated(String),
    TaskDeleted(String),
    TaskMarkedComplete(String),
    TaskMarkedIncomplete(String),
    TaskNotFound(String),
    DuplicateTitle(String),
    TaskCreationCancelled,
    NoChangesMade,
    TaskIdRequired,
    TitleRequired,
    TasksHeader(usize),
    NoTasksFound,
    CurrentTitle(String),
    CurrentDescription(String),
    UpdateKeepHint,

    // === SORT MESSAGES ===
    SortOptionsHeader,
    SortUpdated(String),
    InvalidSortOption(String),

    // === CONFIGURATION MESSAGES ===
    ConfigSaved,
    ConfigParseError,
    ConfigLoadFailed(String),
    ConfigModuleDisplay,

    // === REPL MESSAGES ===
    UnknownCommand(String),
    UnexpectedError(String),
    Goodbye,

    // === PROMPTS ===
    PromptTaskTitle,
    PromptTaskDescription,
    PromptTaskId,
    PromptNewTitle,
    PromptNewDescription,
    PromptSortOption,
    PromptDefaultSort,
    PromptDescriptionWidth,
    ConfirmDuplicateAdd(String),
    ConfirmSaveSortDefault,
}
