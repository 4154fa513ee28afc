//! Task registry: collection ownership and identity rules

use std::collections::BTreeSet;

use chrono::NaiveDate;
use thiserror::Error;

use super::model::{Task, TaskId};

#[derive(Debug, Error)]
pub enum RegistryError {
    #[error("Task not found: {0}")]
    NotFound(TaskId),
}

/// Caller-supplied fields for a new task. The schedule must already be
/// validated; `Registry::create` never fails.
#[derive(Debug, Clone, Default)]
pub struct TaskAttrs {
    pub name: String,
    pub due: Option<NaiveDate>,
    pub schedule: Option<String>,
    pub tags: Vec<String>,
}

/// Owns the task collection for the lifetime of one invocation. Assigns
/// ids as the smallest non-negative integer not in use, so deleted ids are
/// reused rather than growing forever.
#[derive(Debug, Default)]
pub struct Registry {
    tasks: Vec<Task>,
    tags: BTreeSet<String>,
}

impl Registry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rebuild a registry from persisted records. A duplicate id in a
    /// hand-edited store keeps the first record; the rest are dropped with
    /// a warning so id uniqueness holds.
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut registry = Self::new();
        for task in tasks {
            if registry.get(task.id).is_some() {
                tracing::warn!("dropping duplicate task id {} from store", task.id);
                continue;
            }
            registry.tags.extend(task.tags.iter().cloned());
            registry.tasks.push(task);
        }
        registry
    }

    /// Create a task from `attrs`, assign the smallest free id, and index
    /// its tags.
    pub fn create(&mut self, attrs: TaskAttrs) -> &Task {
        let mut task = Task::new(self.next_free_id(), attrs.name);
        task.due = attrs.due;
        if let Some(schedule) = attrs.schedule {
            task.schedule = Some(schedule);
            task.recurs = true;
        }
        for tag in attrs.tags {
            task.add_tag(tag);
        }

        self.tags.extend(task.tags.iter().cloned());
        self.tasks.push(task);
        self.tasks.last().expect("task was just pushed")
    }

    /// Remove and return the task with `id`.
    pub fn remove(&mut self, id: TaskId) -> Result<Task, RegistryError> {
        let index = self
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or(RegistryError::NotFound(id))?;
        Ok(self.tasks.remove(index))
    }

    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id == id)
    }

    pub fn get_mut(&mut self, id: TaskId) -> Option<&mut Task> {
        self.tasks.iter_mut().find(|t| t.id == id)
    }

    /// Replace a task's tag set and fold the new tags into the index.
    pub fn retag<I>(&mut self, id: TaskId, tags: I) -> Result<(), RegistryError>
    where
        I: IntoIterator<Item = String>,
    {
        let task = self.get_mut(id).ok_or(RegistryError::NotFound(id))?;
        task.set_tags(tags);
        let added: Vec<String> = task.tags.clone();
        self.tags.extend(added);
        Ok(())
    }

    /// Drop every completed task, returning how many were removed.
    pub fn purge_completed(&mut self) -> usize {
        let before = self.tasks.len();
        self.tasks.retain(|t| !t.completed);
        before - self.tasks.len()
    }

    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    /// Every tag seen this invocation, sorted.
    pub fn known_tags(&self) -> &BTreeSet<String> {
        &self.tags
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    fn next_free_id(&self) -> TaskId {
        let mut id = 0;
        while self.tasks.iter().any(|t| t.id == TaskId(id)) {
            id += 1;
        }
        TaskId(id)
    }
}
