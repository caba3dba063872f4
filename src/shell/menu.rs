//! Menu choices and input parsing for the shell.

use crate::error::{Result, TaskError};
use std::fmt;
use std::str::FromStr;

/// The menu lines shown before every choice.
pub const MENU_LINES: [&str; 6] = [
    "1. Add task",
    "2. List tasks",
    "3. Mark task as completed",
    "4. Delete task",
    "5. Show statistics",
    "6. Exit",
];

/// One entry of the numbered main menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Add,
    List,
    Complete,
    Delete,
    Stats,
    Exit,
}

impl FromStr for MenuChoice {
    type Err = TaskError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "1" => Ok(Self::Add),
            "2" => Ok(Self::List),
            "3" => Ok(Self::Complete),
            "4" => Ok(Self::Delete),
            "5" => Ok(Self::Stats),
            "6" => Ok(Self::Exit),
            other => Err(TaskError::invalid_option(other)),
        }
    }
}

impl fmt::Display for MenuChoice {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MenuChoice::Add => write!(f, "add"),
            MenuChoice::List => write!(f, "list"),
            MenuChoice::Complete => write!(f, "complete"),
            MenuChoice::Delete => write!(f, "delete"),
            MenuChoice::Stats => write!(f, "stats"),
            MenuChoice::Exit => write!(f, "exit"),
        }
    }
}

/// Parse a task ID typed by the user.
///
/// Accepts any 32-bit signed integer; surrounding whitespace is ignored.
///
/// # Errors
///
/// Returns [`TaskError::InvalidId`] for anything that is not an integer.
pub fn parse_task_id(input: &str) -> Result<i32> {
    input
        .trim()
        .parse::<i32>()
        .map_err(|_| TaskError::invalid_id(input))
}
