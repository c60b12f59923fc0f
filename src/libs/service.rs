//! Business-rule layer between the command handlers and the store.
//!
//! Every operation returns a [`TaskOutcome`] (success flag, human-readable
//! message, optional task payload) and never panics or propagates errors
//! for expected conditions (validation failures, duplicate titles, unknown
//! or ambiguous ids). The outcome type is serializable so the same contract
//! can sit behind a request boundary without changes.

use crate::libs::messages::Message;
use crate::libs::sort::SortMode;
use crate::libs::task::{short_id, Task};
use crate::storage::MemoryStore;
use serde::Serialize;
use thiserror::Error;
use uuid::Uuid;

/// Failure modes of identifier-prefix resolution.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ResolveError {
    #[error("Task not found: {0}")]
    NotFound(String),
    #[error("Ambiguous ID prefix '{prefix}': matches {}", .matches.join(", "))]
    Ambiguous { prefix: String, matches: Vec<String> },
}

/// Structured result of a service operation.
#[derive(Debug, Clone, Serialize)]
pub struct TaskOutcome {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub task: Option<Task>,
}

impl TaskOutcome {
    fn ok(message: impl ToString, task: Option<Task>) -> Self {
        TaskOutcome {
            success: true,
            message: message.to_string(),
            task,
        }
    }

    fn fail(message: impl ToString) -> Self {
        TaskOutcome {
            success: false,
            message: message.to_string(),
            task: None,
        }
    }
}

/// Validates inputs, resolves short-id prefixes and delegates mutations to
/// the store it owns.
#[derive(Debug, Default)]
pub struct TaskService {
    store: MemoryStore,
}

impl TaskService {
    pub fn new(store: MemoryStore) -> Self {
        TaskService { store }
    }

    /// Creates a task after the duplicate-title gate.
    ///
    /// With `force` false an existing task with the same title (trimmed,
    /// case-insensitive) short-circuits with a duplicate outcome and
    /// nothing is created. Validation failures surface as the outcome
    /// message.
    pub fn add_task(&mut self, title: &str, description: &str, force: bool) -> TaskOutcome {
        if !force && self.store.check_duplicate_title(title) {
            return TaskOutcome::fail(Message::DuplicateTitle(title.trim().to_string()));
        }

        match Task::create(title, description) {
            Ok(task) => {
                let message = Message::TaskAdded(task.short_id());
                let payload = task.clone();
                self.store.add(task);
                TaskOutcome::ok(message, Some(payload))
            }
            Err(e) => TaskOutcome::fail(e),
        }
    }

    /// Maps a possibly-truncated id string to exactly one stored task id.
    ///
    /// Zero matches fail with the prefix named; multiple matches fail
    /// listing the short form of every candidate. The empty prefix matches
    /// every task, so it is only resolvable while the store holds at most
    /// one.
    pub fn resolve_id_prefix(&self, prefix: &str) -> Result<Uuid, ResolveError> {
        let matches = self.store.find_by_prefix(prefix);
        match matches.as_slice() {
            [] => Err(ResolveError::NotFound(prefix.to_string())),
            [id] => Ok(*id),
            _ => Err(ResolveError::Ambiguous {
                prefix: prefix.to_string(),
                matches: matches.iter().map(short_id).collect(),
            }),
        }
    }

    /// Resolves then fetches. Resolution errors surface verbatim; a
    /// post-resolution miss yields its own not-found message.
    pub fn get_task(&self, id_or_prefix: &str) -> TaskOutcome {
        match self.resolve_id_prefix(id_or_prefix) {
            Ok(id) => match self.store.get(&id) {
                Some(task) => TaskOutcome::ok("", Some(task.clone())),
                None => TaskOutcome::fail(Message::TaskNotFound(id_or_prefix.to_string())),
            },
            Err(e) => TaskOutcome::fail(e),
        }
    }

    /// Resolves then updates title and/or description under the entity
    /// rules. The update is atomic: a validation failure leaves the task
    /// unchanged.
    pub fn update_task(&mut self, id_or_prefix: &str, title: Option<&str>, description: Option<&str>) -> TaskOutcome {
        let id = match self.resolve_id_prefix(id_or_prefix) {
            Ok(id) => id,
            Err(e) => return TaskOutcome::fail(e),
        };

        let Some(task) = self.store.get_mut(&id) else {
            return TaskOutcome::fail(Message::TaskNotFound(id_or_prefix.to_string()));
        };

        match task.apply_update(title, description) {
            Ok(()) => TaskOutcome::ok(Message::TaskUpdated(task.short_id()), Some(task.clone())),
            Err(e) => TaskOutcome::fail(e),
        }
    }

    /// Resolves then removes.
    pub fn delete_task(&mut self, id_or_prefix: &str) -> TaskOutcome {
        let id = match self.resolve_id_prefix(id_or_prefix) {
            Ok(id) => id,
            Err(e) => return TaskOutcome::fail(e),
        };

        if self.store.delete(&id) {
            TaskOutcome::ok(Message::TaskDeleted(short_id(&id)), None)
        } else {
            TaskOutcome::fail(Message::TaskNotFound(id_or_prefix.to_string()))
        }
    }

    /// Resolves then flips the completion flag.
    pub fn toggle_task(&mut self, id_or_prefix: &str) -> TaskOutcome {
        let id = match self.resolve_id_prefix(id_or_prefix) {
            Ok(id) => id,
            Err(e) => return TaskOutcome::fail(e),
        };

        let Some(task) = self.store.get_mut(&id) else {
            return TaskOutcome::fail(Message::TaskNotFound(id_or_prefix.to_string()));
        };

        task.toggle_completed();
        let message = if task.completed {
            Message::TaskMarkedComplete(task.short_id())
        } else {
            Message::TaskMarkedIncomplete(task.short_id())
        };
        TaskOutcome::ok(message, Some(task.clone()))
    }

    /// Used by the add handler to drive its confirm-before-force prompt.
    pub fn check_duplicate_title(&self, title: &str) -> bool {
        self.store.check_duplicate_title(title)
    }

    pub fn list_tasks(&self, mode: SortMode) -> Vec<Task> {
        self.store.get_all_sorted(mode)
    }

    pub fn count(&self) -> usize {
        self.store.count()
    }
}
