//! Interactive menu loop.
//!
//! The shell owns the [`TaskManager`] for the session and drives it from
//! lines read through a [`Console`]:
//!
//! ```text
//! banner
//! loop:
//!   menu ──> read choice ──> dispatch ──> notices
//!     │                                      │
//!     └── exit / end of input          pause + clear
//! ```
//!
//! All input problems (bad option, bad ID, empty description, unknown task)
//! are printed and the loop carries on. Only console I/O errors stop it.

mod console;
mod menu;

pub use console::{Console, TerminalConsole};
pub use menu::{parse_task_id, MenuChoice, MENU_LINES};

use crate::config::ShellConfig;
use crate::error::{Result, TaskError};
use crate::report::{self, Line};
use crate::tracker::{TaskId, TaskManager};
use tracing::{debug, info};

const DESCRIPTION_PROMPT: &str = "Enter the task description: ";
const COMPLETE_PROMPT: &str = "Enter the ID of the task to complete: ";
const DELETE_PROMPT: &str = "Enter the ID of the task to delete: ";
const CHOICE_PROMPT: &str = "Choose an option: ";
const PAUSE_PROMPT: &str = "Press Enter to continue...";

/// Whether the loop should keep going after a step.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Flow {
    Continue,
    Exit,
}

/// Interactive session over a console.
pub struct Shell<C: Console> {
    manager: TaskManager,
    console: C,
    config: ShellConfig,
}

impl<C: Console> Shell<C> {
    /// Create a session with an empty task list.
    pub fn new(console: C, config: ShellConfig) -> Self {
        Self {
            manager: TaskManager::new(),
            console,
            config,
        }
    }

    /// The task list as it stands.
    pub fn manager(&self) -> &TaskManager {
        &self.manager
    }

    /// The console the shell writes to.
    pub fn console(&self) -> &C {
        &self.console
    }

    /// Run until the user exits or input runs out.
    ///
    /// # Errors
    ///
    /// Returns an error only if reading or writing the console fails.
    pub fn run(&mut self) -> Result<()> {
        info!("Starting interactive session");
        self.emit(Line::heading("=== SIMPLE TASK MANAGER ==="))?;
        self.emit(Line::plain("Welcome to your task list!"))?;

        while self.step()? == Flow::Continue {
            if self.config.pause_between_actions {
                self.pause()?;
            }
        }

        let stats = self.manager.stats();
        info!(
            total = stats.total,
            completed = stats.completed,
            "Session finished"
        );
        Ok(())
    }

    fn step(&mut self) -> Result<Flow> {
        self.show_menu()?;

        let Some(input) = self.console.read_line()? else {
            debug!("Input exhausted at menu prompt");
            self.farewell()?;
            return Ok(Flow::Exit);
        };

        let choice = match input.parse::<MenuChoice>() {
            Ok(choice) => choice,
            Err(err) => {
                self.notify(Err(err))?;
                return Ok(Flow::Continue);
            }
        };
        debug!(%choice, "Menu choice");

        match choice {
            MenuChoice::Add => self.add()?,
            MenuChoice::List => self.list()?,
            MenuChoice::Complete => self.complete()?,
            MenuChoice::Delete => self.delete()?,
            MenuChoice::Stats => self.stats()?,
            MenuChoice::Exit => {
                self.farewell()?;
                return Ok(Flow::Exit);
            }
        }
        Ok(Flow::Continue)
    }

    // =========================================================================
    // Actions
    // =========================================================================

    fn add(&mut self) -> Result<()> {
        self.console.prompt(DESCRIPTION_PROMPT)?;
        let description = self.console.read_line()?.unwrap_or_default();
        let outcome = self.manager.add(&description).map(report::added);
        self.notify(outcome)
    }

    fn list(&mut self) -> Result<()> {
        let lines = report::task_list(&self.manager.list());
        self.emit_all(lines)
    }

    fn complete(&mut self) -> Result<()> {
        let outcome = self.read_task_id(COMPLETE_PROMPT)?.and_then(|id| {
            self.manager
                .complete(id)
                .map(|task| report::completed(task.id()))
        });
        self.notify(outcome)
    }

    fn delete(&mut self) -> Result<()> {
        let outcome = self.read_task_id(DELETE_PROMPT)?.and_then(|id| {
            self.manager
                .delete(id)
                .map(|task| report::deleted(task.id()))
        });
        self.notify(outcome)
    }

    fn stats(&mut self) -> Result<()> {
        let lines = report::stats(&self.manager.stats());
        self.emit_all(lines)
    }

    // =========================================================================
    // Console helpers
    // =========================================================================

    /// Prompt for a task ID.
    ///
    /// The outer result carries I/O failures, the inner one input problems.
    /// Integers that cannot name a task (zero, negatives) come back as
    /// [`TaskError::NotFound`] so the user sees the same notice as for any
    /// other unknown ID.
    fn read_task_id(&mut self, prompt: &str) -> Result<Result<TaskId>> {
        self.console.prompt(prompt)?;
        let input = self.console.read_line()?.unwrap_or_default();
        Ok(parse_task_id(&input).and_then(|raw| {
            u32::try_from(raw)
                .map(TaskId::new)
                .map_err(|_| TaskError::NotFound { id: raw.into() })
        }))
    }

    fn show_menu(&mut self) -> Result<()> {
        self.emit(Line::blank())?;
        self.emit(Line::heading("=== MAIN MENU ==="))?;
        for entry in MENU_LINES {
            self.emit(Line::plain(entry))?;
        }
        self.emit(Line::blank())?;
        self.console.prompt(CHOICE_PROMPT)?;
        Ok(())
    }

    fn pause(&mut self) -> Result<()> {
        self.emit(Line::blank())?;
        self.emit(Line::plain(PAUSE_PROMPT))?;
        self.console.read_line()?;
        self.console.clear()?;
        Ok(())
    }

    fn farewell(&mut self) -> Result<()> {
        self.emit(Line::plain("Goodbye!"))
    }

    /// Print the confirmation, or the notice for a recoverable error.
    fn notify(&mut self, outcome: Result<Line>) -> Result<()> {
        match outcome {
            Ok(line) => self.emit(line),
            Err(err) if err.is_user_error() => {
                debug!(error = %err, input = ?err.input(), "Rejected input");
                self.emit(report::rejected(&err))
            }
            Err(err) => Err(err),
        }
    }

    fn emit(&mut self, line: Line) -> Result<()> {
        self.console.write_line(&line.to_string())?;
        Ok(())
    }

    fn emit_all(&mut self, lines: Vec<Line>) -> Result<()> {
        for line in lines {
            self.emit(line)?;
        }
        Ok(())
    }
}
