//! In-memory task storage.
//!
//! `MemoryStore` is the exclusive owner of every task for the lifetime of
//! the process; nothing is written to disk and all state is discarded on
//! exit. The store keeps an id → task map plus an explicit insertion-order
//! index: the map answers point lookups, the index drives sort mode A and
//! the stable tiebreak of every other mode.

use crate::libs::sort::SortMode;
use crate::libs::task::Task;
use std::cmp::Reverse;
use std::collections::HashMap;
use uuid::Uuid;

#[derive(Debug, Default)]
pub struct MemoryStore {
    tasks: HashMap<Uuid, Task>,
    order: Vec<Uuid>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts a task under its id.
    ///
    /// An id collision overwrites the stored task and keeps its original
    /// insertion slot. With v4 ids a collision is never expected, so the
    /// merge is not treated as an error.
    pub fn add(&mut self, task: Task) {
        let id = task.id;
        if self.tasks.insert(id, task).is_none() {
            self.order.push(id);
        }
    }

    pub fn get(&self, id: &Uuid) -> Option<&Task> {
        self.tasks.get(id)
    }

    pub fn get_mut(&mut self, id: &Uuid) -> Option<&mut Task> {
        self.tasks.get_mut(id)
    }

    /// Ids whose canonical textual form starts with `prefix`, in insertion
    /// order. The empty prefix matches every task.
    pub fn find_by_prefix(&self, prefix: &str) -> Vec<Uuid> {
        self.order.iter().filter(|id| id.to_string().starts_with(prefix)).copied().collect()
    }

    /// Case-insensitive, whitespace-trimmed title equality against any
    /// stored task.
    pub fn check_duplicate_title(&self, title: &str) -> bool {
        let needle = title.trim().to_lowercase();
        self.tasks.values().any(|task| task.title.trim().to_lowercase() == needle)
    }

    /// Removes a task by exact id. Returns whether anything was removed.
    pub fn delete(&mut self, id: &Uuid) -> bool {
        let removed = self.tasks.remove(id).is_some();
        if removed {
            self.order.retain(|stored| stored != id);
        }
        removed
    }

    pub fn exists(&self, id: &Uuid) -> bool {
        self.tasks.contains_key(id)
    }

    pub fn count(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Snapshot of all tasks in insertion order.
    pub fn get_all(&self) -> Vec<Task> {
        self.order.iter().filter_map(|id| self.tasks.get(id)).cloned().collect()
    }

    /// Snapshot ordered per `mode`. Every sort is stable, so tasks with
    /// equal keys keep their insertion order.
    pub fn get_all_sorted(&self, mode: SortMode) -> Vec<Task> {
        let mut tasks = self.get_all();

        match mode {
            SortMode::Insertion => {}
            SortMode::CreatedAsc => tasks.sort_by_key(|task| task.created_at),
            SortMode::CreatedDesc => tasks.sort_by_key(|task| Reverse(task.created_at)),
            SortMode::IncompleteFirst => tasks.sort_by_key(|task| (task.completed, task.created_at)),
        }

        tasks
    }
}
