//! Tasklist - interactive in-memory task list

use clap::Parser;
use tasklist::{Shell, ShellConfig, TerminalConsole};

#[derive(Parser)]
#[command(name = "tasklist")]
#[command(version = "0.1.0")]
#[command(about = "Interactive in-memory task list", long_about = None)]
struct Cli {
    /// Verbose output (debug logging on stderr)
    #[arg(short, long)]
    verbose: bool,

    /// Disable colored output
    #[arg(long, env = "TASKLIST_NO_COLOR")]
    no_color: bool,

    /// Do not pause or clear the screen between actions
    #[arg(long, env = "TASKLIST_NO_CLEAR")]
    no_clear: bool,
}

impl Cli {
    fn shell_config(&self) -> ShellConfig {
        ShellConfig::new()
            .with_verbose(self.verbose)
            .with_color(!self.no_color)
            .with_pause_between_actions(!self.no_clear)
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = cli.shell_config();

    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(config.log_filter())
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();

    if !config.color {
        colored::control::set_override(false);
    }

    let mut shell = Shell::new(TerminalConsole::stdio(), config);
    shell.run()?;

    Ok(())
}
