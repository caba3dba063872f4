//! Task record types.
//!
//! - [`TaskId`] - Sequential identifier handed out by the manager
//! - [`Task`] - One to-do item and its display rendering

use chrono::{DateTime, Local};
use std::fmt;

// ============================================================================
// Task Identifier
// ============================================================================

/// Identifier of a task within one manager.
///
/// Identifiers start at 1 and are never reused, even after deletion.
///
/// # Example
///
/// ```
/// use tasklist::tracker::TaskId;
///
/// let id = TaskId::new(3);
/// assert_eq!(id.get(), 3);
/// assert_eq!(id.to_string(), "3");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct TaskId(u32);

impl TaskId {
    /// The first identifier a fresh manager hands out.
    pub const FIRST: TaskId = TaskId(1);

    /// Wrap a raw identifier value.
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Get the raw identifier value.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// The identifier following this one.
    #[must_use]
    pub(crate) fn next(self) -> Self {
        Self(self.0 + 1)
    }
}

impl From<u32> for TaskId {
    fn from(value: u32) -> Self {
        Self(value)
    }
}

impl From<TaskId> for i64 {
    fn from(id: TaskId) -> Self {
        i64::from(id.0)
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// ============================================================================
// Task
// ============================================================================

/// A single to-do item.
///
/// The identifier, description and creation time are fixed at construction.
/// The completion flag only ever moves from `false` to `true`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Task {
    id: TaskId,
    description: String,
    completed: bool,
    created_at: DateTime<Local>,
}

impl Task {
    /// Create a pending task stamped with the current local time.
    ///
    /// The caller is responsible for rejecting empty descriptions.
    #[must_use]
    pub fn new(id: TaskId, description: impl Into<String>) -> Self {
        Self::with_created_at(id, description, Local::now())
    }

    /// Create a pending task with an explicit creation time.
    #[must_use]
    pub fn with_created_at(
        id: TaskId,
        description: impl Into<String>,
        created_at: DateTime<Local>,
    ) -> Self {
        Self {
            id,
            description: description.into(),
            completed: false,
            created_at,
        }
    }

    /// Get the task identifier.
    #[must_use]
    pub fn id(&self) -> TaskId {
        self.id
    }

    /// Get the task description.
    #[must_use]
    pub fn description(&self) -> &str {
        &self.description
    }

    /// Whether the task has been completed.
    #[must_use]
    pub fn is_completed(&self) -> bool {
        self.completed
    }

    /// When the task was created.
    #[must_use]
    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }

    /// Mark the task completed. Completing twice is a no-op.
    pub fn mark_completed(&mut self) {
        self.completed = true;
    }
}

impl fmt::Display for Task {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let marker = if self.completed { '✓' } else { ' ' };
        write!(
            f,
            "[{}] {}. {} ({})",
            marker,
            self.id,
            self.description,
            self.created_at.format("%d/%m/%Y")
        )
    }
}
