//! Command dispatching.
//!
//! This module provides the core command infrastructure:
//! - [`Command`] trait for implementing commands
//! - [`CommandResult`] for uniform result reporting
//! - [`CommandDispatcher`] for routing CLI subcommands

use std::path::PathBuf;

use crate::cli::args::{Cli, Commands};
use crate::config::Config;
use crate::error::Result;
use crate::ui::UserInterface;

/// Trait for command implementations.
///
/// Each CLI subcommand implements this trait to provide its execution logic.
pub trait Command {
    /// Execute the command.
    ///
    /// # Arguments
    ///
    /// * `ui` - User interface for displaying output
    ///
    /// # Returns
    ///
    /// A [`CommandResult`] indicating success/failure and exit code.
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult>;
}

/// Result of command execution.
#[derive(Debug)]
pub struct CommandResult {
    /// Whether the command succeeded.
    pub success: bool,

    /// Exit code to use (0 for success, non-zero for failure).
    pub exit_code: i32,
}

impl CommandResult {
    /// Create a successful result.
    pub fn success() -> Self {
        Self {
            success: true,
            exit_code: 0,
        }
    }

    /// Create a failure result.
    pub fn failure(exit_code: i32) -> Self {
        Self {
            success: false,
            exit_code,
        }
    }
}

/// Dispatches CLI commands to their implementations.
///
/// Configuration is resolved only for commands that touch the managed root,
/// so `version` and `completions` work even without a home directory.
pub struct CommandDispatcher {
    dir: Option<PathBuf>,
    mirror: Option<String>,
}

impl CommandDispatcher {
    /// Create a new dispatcher from optional root and mirror overrides.
    pub fn new(dir: Option<PathBuf>, mirror: Option<String>) -> Self {
        Self { dir, mirror }
    }

    /// Create a dispatcher from parsed global options.
    pub fn from_cli(cli: &Cli) -> Self {
        Self::new(cli.dir.clone(), cli.mirror.clone())
    }

    /// Resolve the configuration commands run against.
    pub fn config(&self) -> Result<Config> {
        Config::resolve(self.dir.clone(), self.mirror.clone())
    }

    /// Dispatch and execute a command.
    pub fn dispatch(
        &self,
        command: &Commands,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        match command {
            Commands::Use(args) => {
                let cmd = super::use_version::UseCommand::new(self.config()?, args.clone());
                cmd.execute(ui)
            }
            Commands::List(args) => {
                let cmd = super::list::ListCommand::new(self.config()?, args.clone());
                cmd.execute(ui)
            }
            Commands::Current => {
                let cmd = super::current::CurrentCommand::new(self.config()?);
                cmd.execute(ui)
            }
            Commands::Version => super::version::VersionCommand.execute(ui),
            Commands::Completions(args) => {
                let cmd = super::completions::CompletionsCommand::new(args.clone());
                cmd.execute(ui)
            }
        }
    }
}
