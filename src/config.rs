//! Shell configuration.
//!
//! Defaults reproduce the plain interactive session: colored output, and a
//! pause plus screen clear after every action. The binary maps its CLI flags
//! onto these settings.

/// Settings for an interactive session.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShellConfig {
    /// Wait for Enter and clear the screen after each action
    pub pause_between_actions: bool,
    /// Style notices with terminal colors
    pub color: bool,
    /// Emit debug logging
    pub verbose: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            pause_between_actions: true,
            color: true,
            verbose: false,
        }
    }
}

impl ShellConfig {
    /// Create a configuration with default values.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to pause and clear the screen after each action.
    #[must_use]
    pub fn with_pause_between_actions(mut self, enabled: bool) -> Self {
        self.pause_between_actions = enabled;
        self
    }

    /// Set whether output is colored.
    #[must_use]
    pub fn with_color(mut self, enabled: bool) -> Self {
        self.color = enabled;
        self
    }

    /// Set verbose logging.
    #[must_use]
    pub fn with_verbose(mut self, verbose: bool) -> Self {
        self.verbose = verbose;
        self
    }

    /// Log filter directive matching the verbosity.
    #[must_use]
    pub fn log_filter(&self) -> &'static str {
        if self.verbose {
            "tasklist=debug,warn"
        } else {
            "tasklist=warn"
        }
    }
}
