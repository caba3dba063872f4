//! Testing infrastructure for the task list.
//!
//! Test doubles for the interactive shell's console, so the menu loop can
//! be exercised without a real terminal.
//!
//! # Example
//!
//! ```
//! use tasklist::config::ShellConfig;
//! use tasklist::shell::Shell;
//! use tasklist::testing::MockConsole;
//!
//! let console = MockConsole::new().with_input(&["1", "Buy milk", "6"]);
//! let mut shell = Shell::new(console, ShellConfig::new().with_pause_between_actions(false));
//! shell.run().unwrap();
//! assert_eq!(shell.manager().len(), 1);
//! ```

pub mod mocks;

pub use mocks::*;
