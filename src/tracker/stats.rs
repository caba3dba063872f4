//! Aggregate task counts.

// ============================================================================
// Task Stats
// ============================================================================

/// Snapshot of how many tasks exist and how many are done.
///
/// # Example
///
/// ```
/// use tasklist::tracker::TaskStats;
///
/// let stats = TaskStats::from_counts(5, 2);
/// assert_eq!(stats.pending, 3);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TaskStats {
    /// All tasks currently held
    pub total: usize,
    /// Tasks marked completed
    pub completed: usize,
    /// Tasks not yet completed
    pub pending: usize,
}

impl TaskStats {
    /// Build a snapshot from a total and a completed count.
    ///
    /// `completed` must not exceed `total`.
    #[must_use]
    pub fn from_counts(total: usize, completed: usize) -> Self {
        Self {
            total,
            completed,
            pending: total - completed,
        }
    }
}
