//! The `nodevm current` command.

use crate::config::Config;
use crate::error::Result;
use crate::manager::VersionManager;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Reports which installation the `bin` pointer targets.
pub struct CurrentCommand {
    config: Config,
}

impl CurrentCommand {
    pub fn new(config: Config) -> Self {
        Self { config }
    }
}

impl Command for CurrentCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let manager = VersionManager::read_only(self.config.clone());
        match manager.current()? {
            Some(name) => {
                if name.platform() == manager.platform() {
                    ui.message(name.version().as_str());
                } else {
                    ui.message(&format!("{} ({})", name.version(), name.platform()));
                }
            }
            None => ui.message("No active node version"),
        }
        Ok(CommandResult::success())
    }
}
