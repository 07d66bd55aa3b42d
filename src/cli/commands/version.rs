//! The `nodevm version` command.

use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Prints the tool's own version.
pub struct VersionCommand;

impl Command for VersionCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        ui.message(&format!("nodevm {}", env!("CARGO_PKG_VERSION")));
        Ok(CommandResult::success())
    }
}
