//! List command implementation.
//!
//! The `nodevm list` command shows every installed version and marks the one
//! the `bin` pointer targets.

use serde::Serialize;

use crate::cli::args::ListArgs;
use crate::config::Config;
use crate::error::Result;
use crate::manager::VersionManager;
use crate::naming::InstallationName;
use crate::platform::Platform;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    config: Config,
    args: ListArgs,
}

/// One entry of `list --json` output.
#[derive(Debug, Serialize)]
struct ListedVersion {
    version: String,
    platform: String,
    active: bool,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(config: Config, args: ListArgs) -> Self {
        Self { config, args }
    }

    fn listing(
        installations: &[InstallationName],
        active: Option<&InstallationName>,
    ) -> Vec<ListedVersion> {
        installations
            .iter()
            .map(|name| ListedVersion {
                version: name.version().to_string(),
                platform: name.platform().to_string(),
                active: Some(name) == active,
            })
            .collect()
    }

    fn render_text(
        &self,
        ui: &mut dyn UserInterface,
        entries: &[ListedVersion],
        host: &Platform,
    ) {
        if entries.is_empty() {
            ui.warning("No node versions installed");
            return;
        }

        let host = host.to_string();
        for entry in entries {
            let label = if entry.platform == host {
                entry.version.clone()
            } else {
                format!("{} ({})", entry.version, entry.platform)
            };
            ui.version_row(&label, entry.active);
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let manager = VersionManager::read_only(self.config.clone());

        let mut installations = manager.installations()?;
        installations.sort_by(|a, b| {
            a.version()
                .cmp(b.version())
                .then_with(|| a.platform().to_string().cmp(&b.platform().to_string()))
        });
        let active = manager.current()?;
        let entries = Self::listing(&installations, active.as_ref());

        if self.args.json {
            let json = serde_json::to_string_pretty(&entries).map_err(anyhow::Error::from)?;
            ui.message(&json);
        } else {
            self.render_text(ui, &entries, manager.platform());
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::naming::Version;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn install(manager: &VersionManager, version: &str, platform: Platform) -> InstallationName {
        let name = InstallationName::new(Version::parse(version).unwrap(), platform);
        fs::create_dir_all(manager.layout().installation_bin_dir(&name)).unwrap();
        name
    }

    #[test]
    fn empty_root_warns() {
        let temp = TempDir::new().unwrap();
        let mut ui = MockUI::new();

        let result = ListCommand::new(Config::with_root(temp.path()), ListArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(result.success);
        assert_eq!(ui.warnings(), ["No node versions installed".to_string()]);
        assert!(ui.messages().is_empty());
    }

    #[test]
    fn lists_sorted_and_marks_active() {
        let temp = TempDir::new().unwrap();
        let config = Config::with_root(temp.path());
        let manager = VersionManager::new(config.clone()).unwrap();
        install(&manager, "20.5.1", Platform::current());
        let active = install(&manager, "18.16.0", Platform::current());
        manager.link(&active).unwrap();

        let mut ui = MockUI::new();
        ListCommand::new(config, ListArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert_eq!(ui.messages().len(), 2);
        assert!(ui.messages()[0].contains("* 18.16.0"));
        assert_eq!(ui.messages()[1], "  20.5.1");
    }

    #[test]
    fn foreign_platform_is_labelled() {
        let temp = TempDir::new().unwrap();
        let config = Config::with_root(temp.path());
        let manager = VersionManager::new(config.clone()).unwrap();
        let foreign = if Platform::current().os() == "aix" {
            Platform::new("linux", "x64")
        } else {
            Platform::new("aix", "ppc64")
        };
        install(&manager, "16.20.0", foreign);

        let mut ui = MockUI::new();
        ListCommand::new(config, ListArgs::default())
            .execute(&mut ui)
            .unwrap();

        assert!(ui.messages()[0].contains("16.20.0 ("));
    }

    #[test]
    fn json_output_is_parseable() {
        let temp = TempDir::new().unwrap();
        let config = Config::with_root(temp.path());
        let manager = VersionManager::new(config.clone()).unwrap();
        let active = install(&manager, "18.16.0", Platform::current());
        manager.link(&active).unwrap();

        let mut ui = MockUI::new();
        ListCommand::new(config, ListArgs { json: true })
            .execute(&mut ui)
            .unwrap();

        let parsed: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(parsed[0]["version"], "18.16.0");
        assert_eq!(parsed[0]["platform"], Platform::current().to_string());
        assert_eq!(parsed[0]["active"], true);
    }
}
