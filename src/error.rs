//! Error types for the task list.
//!
//! Every user-input condition is recoverable: the shell prints the error's
//! message and redraws the menu. Only console I/O failures end a session.

use thiserror::Error;

/// Main error type for task list operations
#[derive(Error, Debug)]
pub enum TaskError {
    // =========================================================================
    // Manager Errors
    // =========================================================================
    /// Description was empty or whitespace only
    #[error("Description must not be empty.")]
    EmptyDescription,

    /// No task carries the requested identifier
    #[error("No task found with ID {id}.")]
    NotFound { id: i64 },

    // =========================================================================
    // Shell Input Errors
    // =========================================================================
    /// Task ID input was not an integer
    #[error("Invalid ID.")]
    InvalidId { input: String },

    /// Menu input did not name a known option
    #[error("Invalid option. Please choose an option from 1 to 6.")]
    InvalidOption { input: String },

    // =========================================================================
    // Wrapped Errors
    // =========================================================================
    /// IO error wrapper
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl TaskError {
    /// Create an invalid ID error
    pub fn invalid_id(input: impl Into<String>) -> Self {
        Self::InvalidId {
            input: input.into(),
        }
    }

    /// Create an invalid option error
    pub fn invalid_option(input: impl Into<String>) -> Self {
        Self::InvalidOption {
            input: input.into(),
        }
    }

    /// The raw line the user typed, for input rejected at the shell
    pub fn input(&self) -> Option<&str> {
        match self {
            Self::InvalidId { input } | Self::InvalidOption { input } => {
                Some(input.as_str())
            }
            _ => None,
        }
    }

    /// Check if this error came from user input and leaves state untouched
    pub fn is_user_error(&self) -> bool {
        !matches!(self, Self::Io(_))
    }
}

/// Type alias for task list results
pub type Result<T> = std::result::Result<T, TaskError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            TaskError::EmptyDescription.to_string(),
            "Description must not be empty."
        );
        assert_eq!(
            TaskError::NotFound { id: 99 }.to_string(),
            "No task found with ID 99."
        );
        assert_eq!(TaskError::invalid_id("abc").to_string(), "Invalid ID.");
        assert!(TaskError::invalid_option("7")
            .to_string()
            .contains("from 1 to 6"));
    }

    #[test]
    fn test_is_user_error() {
        assert!(TaskError::EmptyDescription.is_user_error());
        assert!(TaskError::NotFound { id: 1 }.is_user_error());
        assert!(TaskError::invalid_id("x").is_user_error());
        assert!(TaskError::invalid_option("x").is_user_error());
    }

    #[test]
    fn test_invalid_id_keeps_input() {
        let err = TaskError::invalid_id("12abc");
        if let TaskError::InvalidId { input } = err {
            assert_eq!(input, "12abc");
        } else {
            panic!("Wrong error variant");
        }
    }

    #[test]
    fn test_input_of_shell_errors() {
        assert_eq!(TaskError::invalid_id("12abc").input(), Some("12abc"));
        assert_eq!(TaskError::invalid_option(" 1 ").input(), Some(" 1 "));
        assert_eq!(TaskError::EmptyDescription.input(), None);
        assert_eq!(TaskError::NotFound { id: 3 }.input(), None);
    }

    #[test]
    fn test_error_from_io() {
        let io_err = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "pipe closed");
        let err: TaskError = io_err.into();
        assert!(matches!(err, TaskError::Io(_)));
        assert!(!err.is_user_error());
        assert!(err.to_string().contains("pipe closed"));
    }
}
