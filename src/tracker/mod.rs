//! In-memory task collection.
//!
//! # Architecture
//!
//! ```text
//! TaskManager
//!   ├── tasks: Vec<Task>      (insertion order, no compaction)
//!   └── next_id: TaskId       (starts at 1, bumped once per add)
//! ```
//!
//! The manager never prints. Each operation returns a typed outcome and the
//! [`report`](crate::report) module turns it into the lines the user sees.
//!
//! # Example
//!
//! ```
//! use tasklist::tracker::{TaskId, TaskManager};
//!
//! let mut manager = TaskManager::new();
//! let id = manager.add("Buy milk").unwrap().id();
//! assert_eq!(id, TaskId::new(1));
//!
//! manager.complete(id).unwrap();
//! assert_eq!(manager.stats().completed, 1);
//! ```

mod stats;
mod task;

pub use stats::TaskStats;
pub use task::{Task, TaskId};

use crate::error::{Result, TaskError};
use tracing::debug;

// ============================================================================
// Task Manager
// ============================================================================

/// Owner of every task for one run and the source of identifiers.
#[derive(Debug, Clone)]
pub struct TaskManager {
    tasks: Vec<Task>,
    next_id: TaskId,
}

impl Default for TaskManager {
    fn default() -> Self {
        Self {
            tasks: Vec::new(),
            next_id: TaskId::FIRST,
        }
    }
}

impl TaskManager {
    /// Create an empty manager whose first task will get id 1.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a task to the end of the collection.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::EmptyDescription`] if the description is empty or
    /// whitespace only. No identifier is consumed in that case.
    pub fn add(&mut self, description: &str) -> Result<&Task> {
        if description.trim().is_empty() {
            debug!("Rejected task with empty description");
            return Err(TaskError::EmptyDescription);
        }

        let id = self.next_id;
        self.tasks.push(Task::new(id, description));
        self.next_id = id.next();
        debug!(%id, "Added task");

        Ok(&self.tasks[self.tasks.len() - 1])
    }

    /// All tasks in ascending identifier order.
    ///
    /// Storage order is left untouched.
    #[must_use]
    pub fn list(&self) -> Vec<&Task> {
        let mut sorted: Vec<&Task> = self.tasks.iter().collect();
        sorted.sort_by_key(|task| task.id());
        sorted
    }

    /// Mark a task completed.
    ///
    /// Completing an already completed task succeeds again.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::NotFound`] if no task has this identifier.
    pub fn complete(&mut self, id: TaskId) -> Result<&Task> {
        let index = self.position(id)?;
        let task = &mut self.tasks[index];
        task.mark_completed();
        debug!(%id, "Completed task");
        Ok(task)
    }

    /// Remove a task and hand it back.
    ///
    /// The identifier is retired; `next_id` does not move.
    ///
    /// # Errors
    ///
    /// Returns [`TaskError::NotFound`] if no task has this identifier.
    pub fn delete(&mut self, id: TaskId) -> Result<Task> {
        let index = self.position(id)?;
        let removed = self.tasks.remove(index);
        debug!(%id, remaining = self.tasks.len(), "Deleted task");
        Ok(removed)
    }

    /// Count total, completed and pending tasks.
    #[must_use]
    pub fn stats(&self) -> TaskStats {
        let completed = self.tasks.iter().filter(|t| t.is_completed()).count();
        TaskStats::from_counts(self.tasks.len(), completed)
    }

    /// Look up a task by identifier.
    #[must_use]
    pub fn get(&self, id: TaskId) -> Option<&Task> {
        self.tasks.iter().find(|t| t.id() == id)
    }

    /// Number of tasks held.
    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    /// Check if the manager holds no tasks.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// The identifier the next successful add will use.
    #[must_use]
    pub fn next_id(&self) -> TaskId {
        self.next_id
    }

    fn position(&self, id: TaskId) -> Result<usize> {
        self.tasks
            .iter()
            .position(|t| t.id() == id)
            .ok_or(TaskError::NotFound { id: id.into() })
    }
}
