//! Tasklist - interactive in-memory task list
//!
//! Add, list, complete, delete and summarize to-do items for the length of
//! one terminal session. Nothing is persisted.
//!
//! # Architecture
//!
//! The crate is organized into several modules:
//!
//! - [`tracker`] - Task records and the [`TaskManager`] that owns them
//! - [`report`] - Rendering of manager outcomes into user-facing lines
//! - [`shell`] - Numbered-menu loop over a [`Console`]
//! - [`config`] - Session settings
//! - [`error`] - Error taxonomy for user input and console I/O
//! - [`testing`] - Test doubles for the console
//!
//! # Example
//!
//! ```
//! use tasklist::{TaskId, TaskManager};
//!
//! let mut manager = TaskManager::new();
//! manager.add("Buy milk").unwrap();
//! manager.add("Walk dog").unwrap();
//! manager.complete(TaskId::new(1)).unwrap();
//! manager.delete(TaskId::new(2)).unwrap();
//!
//! let stats = manager.stats();
//! assert_eq!((stats.total, stats.completed, stats.pending), (1, 1, 0));
//! ```

pub mod config;
pub mod error;
pub mod report;
pub mod shell;
pub mod testing;
pub mod tracker;

// Re-export commonly used types
pub use config::ShellConfig;
pub use error::{Result, TaskError};
pub use shell::{Console, Shell, TerminalConsole};
pub use tracker::{Task, TaskId, TaskManager, TaskStats};
