//! Rendering of manager outcomes into user-facing lines.
//!
//! The manager returns typed results; this module decides what the user
//! reads. Each [`Line`] carries a [`Tone`] that selects its terminal style.

use crate::error::TaskError;
use crate::tracker::{Task, TaskId, TaskStats};
use colored::Colorize;
use std::fmt;

/// Visual weight of an output line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    /// Unstyled text
    Plain,
    /// Confirmation of a successful change
    Success,
    /// Rejected input, nothing changed
    Warning,
    /// Section header
    Heading,
}

/// One line of output.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Line {
    pub text: String,
    pub tone: Tone,
}

impl Line {
    pub fn plain(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Plain)
    }

    pub fn success(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Success)
    }

    pub fn warning(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Warning)
    }

    pub fn heading(text: impl Into<String>) -> Self {
        Self::new(text, Tone::Heading)
    }

    /// An empty spacer line.
    pub fn blank() -> Self {
        Self::plain("")
    }

    fn new(text: impl Into<String>, tone: Tone) -> Self {
        Self {
            text: text.into(),
            tone,
        }
    }
}

impl fmt::Display for Line {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.tone {
            Tone::Plain => write!(f, "{}", self.text),
            Tone::Success => write!(f, "{}", self.text.green()),
            Tone::Warning => write!(f, "{}", self.text.yellow()),
            Tone::Heading => write!(f, "{}", self.text.bold()),
        }
    }
}

// ============================================================================
// Outcome rendering
// ============================================================================

/// Confirmation after a successful add.
pub fn added(task: &Task) -> Line {
    Line::success(format!("Task added: {}", task.description()))
}

/// Confirmation after a successful complete.
pub fn completed(id: TaskId) -> Line {
    Line::success(format!("Task {} marked as completed.", id))
}

/// Confirmation after a successful delete.
pub fn deleted(id: TaskId) -> Line {
    Line::success(format!("Task {} deleted.", id))
}

/// Notice for any recoverable error.
pub fn rejected(err: &TaskError) -> Line {
    Line::warning(err.to_string())
}

/// The task listing, or a notice when there is nothing to show.
pub fn task_list(tasks: &[&Task]) -> Vec<Line> {
    if tasks.is_empty() {
        return vec![Line::plain("No tasks in the list.")];
    }

    let mut lines = Vec::with_capacity(tasks.len() + 3);
    lines.push(Line::blank());
    lines.push(Line::heading("=== TASK LIST ==="));
    lines.extend(tasks.iter().map(|task| Line::plain(task.to_string())));
    lines.push(Line::blank());
    lines
}

/// The statistics block.
pub fn stats(stats: &TaskStats) -> Vec<Line> {
    vec![
        Line::blank(),
        Line::heading("=== STATISTICS ==="),
        Line::plain(format!("Total tasks: {}", stats.total)),
        Line::plain(format!("Completed: {}", stats.completed)),
        Line::plain(format!("Pending: {}", stats.pending)),
        Line::blank(),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracker::TaskManager;

    fn texts(lines: &[Line]) -> Vec<&str> {
        lines.iter().map(|l| l.text.as_str()).collect()
    }

    #[test]
    fn test_added_names_description() {
        let task = Task::new(TaskId::new(1), "Buy milk");
        let line = added(&task);
        assert_eq!(line.text, "Task added: Buy milk");
        assert_eq!(line.tone, Tone::Success);
    }

    #[test]
    fn test_completed_and_deleted() {
        assert_eq!(completed(TaskId::new(4)).text, "Task 4 marked as completed.");
        assert_eq!(deleted(TaskId::new(4)).text, "Task 4 deleted.");
    }

    #[test]
    fn test_rejected_uses_error_message() {
        let line = rejected(&TaskError::NotFound { id: 7 });
        assert_eq!(line.text, "No task found with ID 7.");
        assert_eq!(line.tone, Tone::Warning);
    }

    #[test]
    fn test_empty_task_list() {
        assert_eq!(texts(&task_list(&[])), vec!["No tasks in the list."]);
    }

    #[test]
    fn test_task_list_layout() {
        let mut manager = TaskManager::new();
        manager.add("Buy milk").unwrap();
        manager.add("Walk dog").unwrap();

        let lines = task_list(&manager.list());
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0].text, "");
        assert_eq!(lines[1].text, "=== TASK LIST ===");
        assert!(lines[2].text.starts_with("[ ] 1. Buy milk ("));
        assert!(lines[3].text.starts_with("[ ] 2. Walk dog ("));
        assert_eq!(lines[4].text, "");
    }

    #[test]
    fn test_stats_layout() {
        let lines = stats(&TaskStats::from_counts(3, 1));
        assert_eq!(
            texts(&lines),
            vec![
                "",
                "=== STATISTICS ===",
                "Total tasks: 3",
                "Completed: 1",
                "Pending: 2",
                "",
            ]
        );
    }

    #[test]
    fn test_plain_line_display_is_unstyled() {
        assert_eq!(Line::plain("hello").to_string(), "hello");
    }
}
