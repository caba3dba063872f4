//! Console abstraction for the interactive shell.
//!
//! The shell only talks to a [`Console`], so tests can drive it with a
//! scripted implementation instead of a real terminal.

use std::io::{self, BufRead, Write};

/// Clears the screen and homes the cursor.
const CLEAR_SCREEN: &str = "\x1b[2J\x1b[1;1H";

/// Line-oriented terminal I/O used by the shell.
pub trait Console {
    /// Read one line of input without its trailing newline.
    ///
    /// Returns `Ok(None)` once input is exhausted.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying reader fails.
    fn read_line(&mut self) -> io::Result<Option<String>>;

    /// Write text followed by a newline.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn write_line(&mut self, text: &str) -> io::Result<()>;

    /// Write a prompt without a newline and flush it.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn prompt(&mut self, text: &str) -> io::Result<()>;

    /// Clear the visible screen.
    ///
    /// # Errors
    ///
    /// Returns an error if the underlying writer fails.
    fn clear(&mut self) -> io::Result<()>;
}

/// [`Console`] over any reader and writer, stdin/stdout by default.
pub struct TerminalConsole<R, W> {
    input: R,
    output: W,
}

impl TerminalConsole<io::StdinLock<'static>, io::Stdout> {
    /// Console bound to the process's stdin and stdout.
    #[must_use]
    pub fn stdio() -> Self {
        Self::new(io::stdin().lock(), io::stdout())
    }
}

impl<R: BufRead, W: Write> TerminalConsole<R, W> {
    /// Wrap an arbitrary reader and writer.
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    /// Give back the writer, e.g. to inspect captured output.
    pub fn into_output(self) -> W {
        self.output
    }
}

impl<R: BufRead, W: Write> Console for TerminalConsole<R, W> {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut buf = String::new();
        if self.input.read_line(&mut buf)? == 0 {
            return Ok(None);
        }
        let trimmed_len = buf.trim_end_matches(&['\r', '\n'][..]).len();
        buf.truncate(trimmed_len);
        Ok(Some(buf))
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        writeln!(self.output, "{}", text)
    }

    fn prompt(&mut self, text: &str) -> io::Result<()> {
        write!(self.output, "{}", text)?;
        self.output.flush()
    }

    fn clear(&mut self) -> io::Result<()> {
        write!(self.output, "{}", CLEAR_SCREEN)?;
        self.output.flush()
    }
}
