//! Mock implementations of the shell's I/O seams.
//!
//! These mocks provide controllable test doubles for the terminal,
//! enabling deterministic tests of the interactive loop.

use crate::shell::Console;
use std::collections::VecDeque;
use std::io;

/// Mock implementation of a terminal console.
///
/// Serves input from a scripted queue and records everything written.
///
/// # Example
///
/// ```
/// use tasklist::shell::Console;
/// use tasklist::testing::MockConsole;
///
/// let mut console = MockConsole::new().with_input(&["1", "Buy milk"]);
/// assert_eq!(console.read_line().unwrap().as_deref(), Some("1"));
/// console.write_line("hello").unwrap();
/// assert_eq!(console.output(), "hello\n");
/// ```
#[derive(Debug, Clone, Default)]
pub struct MockConsole {
    input: VecDeque<String>,
    output: String,
    clears: u32,
    fail_writes: bool,
}

impl MockConsole {
    /// Create a console with no input queued.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue input lines, served in order.
    #[must_use]
    pub fn with_input(mut self, lines: &[&str]) -> Self {
        self.input.extend(lines.iter().map(|l| l.to_string()));
        self
    }

    /// Make every write fail with a broken pipe.
    #[must_use]
    pub fn with_write_error(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Everything written so far, clears excluded.
    #[must_use]
    pub fn output(&self) -> &str {
        &self.output
    }

    /// How many times the screen was cleared.
    #[must_use]
    pub fn clear_count(&self) -> u32 {
        self.clears
    }

    /// Input lines not yet consumed.
    #[must_use]
    pub fn remaining_input(&self) -> usize {
        self.input.len()
    }

    fn check_writable(&self) -> io::Result<()> {
        if self.fail_writes {
            return Err(io::Error::new(io::ErrorKind::BrokenPipe, "mock write failure"));
        }
        Ok(())
    }
}

impl Console for MockConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.check_writable()?;
        self.output.push_str(text);
        self.output.push('\n');
        Ok(())
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        self.check_writable()?;
        self.output.push_str(text);
        Ok(())
    }

    fn clear(&mut self) -> io::Result<()> {
        self.check_writable()?;
        self.clears += 1;
        Ok(())
    }
}
