//! Display implementation for tydo application messages.
//!
//! Single source of truth for all user-facing text: every `Message`
//! variant maps to its terminal wording here, so prompts, confirmations
//! and status lines stay consistent across the command handlers and the
//! service layer. Validation and resolution errors carry their own
//! `thiserror` display text and are not duplicated in this enum.

use super::types::Message;
use std::fmt::{Display, Formatter, Result};

impl Display for Message {
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        let text = match self {
            // === TASK MESSAGES ===
            Message::TaskAdded(id) => format!("Task {} added successfully", id),
            Message::TaskUpdated(id) => format!("Task {} updated successfully", id),
            Message::TaskDeleted(id) => format!("Task {} deleted successfully", id),
            Message::TaskMarkedComplete(id) => format!("Task {} marked as complete", id),
            Message::TaskMarkedIncomplete(id) => format!("Task {} marked as incomplete", id),
            Message::TaskNotFound(prefix) => format!("Task not found: {}", prefix),
            Message::DuplicateTitle(title) => format!("A task with title '{}' already exists", title),
            Message::TaskCreationCancelled => "Task creation cancelled".to_string(),
            Message::NoChangesMade => "No changes made".to_string(),
            Message::TaskIdRequired => "Task ID is required".to_string(),
            Message::TitleRequired => "Title cannot be empty".to_string(),
            Message::TasksHeader(count) => format!("Tasks ({} total):", count),
            Message::NoTasksFound => "No tasks found. Use 'add' to create your first task.".to_string(),
            Message::CurrentTitle(title) => format!("Current title: {}", title),
            Message::CurrentDescription(description) => format!("Current description: {}", description),
            Message::UpdateKeepHint => "Press Enter to keep the current value, or type a new one".to_string(),

            // === SORT MESSAGES ===
            Message::SortOptionsHeader => "Available sort options:".to_string(),
            Message::SortUpdated(description) => format!("Sort preference updated to: {}", description),
            Message::InvalidSortOption(code) => format!("Invalid sort option '{}'. Valid options are A, B, C, D", code),

            // === CONFIGURATION MESSAGES ===
            Message::ConfigSaved => "Configuration saved successfully".to_string(),
            Message::ConfigParseError => "Failed to parse configuration".to_string(),
            Message::ConfigLoadFailed(error) => format!("Could not load configuration ({}), using defaults", error),
            Message::ConfigModuleDisplay => "Display settings".to_string(),

            // === REPL MESSAGES ===
            Message::UnknownCommand(command) => format!("Unknown command '{}'. Type 'help' for available commands", command),
            Message::UnexpectedError(error) => format!("Unexpected error: {}", error),
            Message::Goodbye => "Goodbye! All tasks have been cleared from memory.".to_string(),

            // === PROMPTS ===
            Message::PromptTaskTitle => "Task title".to_string(),
            Message::PromptTaskDescription => "Description (optional)".to_string(),
            Message::PromptTaskId => "Task ID (or prefix)".to_string(),
            Message::PromptNewTitle => "New title".to_string(),
            Message::PromptNewDescription => "New description".to_string(),
            Message::PromptSortOption => "Sort option (A/B/C/D)".to_string(),
            Message::PromptDefaultSort => "Default sort mode (A/B/C/D)".to_string(),
            Message::PromptDescriptionWidth => "Description column width".to_string(),
            Message::ConfirmDuplicateAdd(title) => {
                format!("A task with title '{}' already exists. Add it anyway?", title)
            }
            Message::ConfirmSaveSortDefault => "Save this mode as the default sort?".to_string(),
        };

        write!(f, "{}", text)
    }
}
