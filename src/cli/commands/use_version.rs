//! Use command implementation.
//!
//! The `nodevm use <version>` command downloads, extracts and activates a
//! Node.js version.

use crate::cli::args::UseArgs;
use crate::config::Config;
use crate::error::Result;
use crate::manager::VersionManager;
use crate::naming::Version;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The use command implementation.
pub struct UseCommand {
    config: Config,
    args: UseArgs,
}

impl UseCommand {
    /// Create a new use command.
    pub fn new(config: Config, args: UseArgs) -> Self {
        Self { config, args }
    }
}

impl Command for UseCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let version = match Version::parse(&self.args.version) {
            Ok(version) => version,
            Err(e) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(2));
            }
        };

        let manager = VersionManager::new(self.config.clone())?;

        let mut spinner = ui.start_spinner(&format!("Installing node {}...", version));
        let result = manager.use_version(&version);
        spinner.finish_and_clear();

        match result {
            Ok(outcome) => {
                tracing::debug!(
                    "downloaded={} extracted={} bin={}",
                    outcome.downloaded,
                    outcome.extracted,
                    outcome.bin_dir.display()
                );
                ui.success(&format!(
                    "Switched node version to {} successfully",
                    version
                ));
                Ok(CommandResult::success())
            }
            Err(e) => {
                ui.error(&e.to_string());
                Ok(CommandResult::failure(1))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::archive::write_test_archive;
    use crate::naming::InstallationName;
    use crate::platform::Platform;
    use crate::ui::MockUI;
    use httpmock::prelude::*;
    use tempfile::TempDir;

    fn host_name(version: &str) -> InstallationName {
        InstallationName::new(Version::parse(version).unwrap(), Platform::current())
    }

    fn command(temp: &TempDir, server: &MockServer, version: &str) -> UseCommand {
        let config = Config::with_root(temp.path().join(".nodevm")).with_mirror(server.base_url());
        UseCommand::new(
            config,
            UseArgs {
                version: version.to_string(),
            },
        )
    }

    #[test]
    fn reports_success_and_links() {
        let temp = TempDir::new().unwrap();
        let name = host_name("18.16.0");
        let archive = temp.path().join("fixture.tar.gz");
        write_test_archive(&archive, &name.to_string());

        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET)
                .path(format!("/v18.16.0/{}", name.archive_file_name()));
            then.status(200).body(std::fs::read(&archive).unwrap());
        });

        let mut ui = MockUI::new();
        let result = command(&temp, &server, "18.16.0").execute(&mut ui).unwrap();

        mock.assert();
        assert!(result.success);
        assert!(ui.has_success("Switched node version to 18.16.0 successfully"));
        assert_eq!(ui.spinners(), ["Installing node 18.16.0...".to_string()]);
        assert_eq!(ui.cleared_spinners(), 1);
        assert!(temp.path().join(".nodevm/bin").join("node").exists());
    }

    #[test]
    fn reports_missing_version_as_error() {
        let temp = TempDir::new().unwrap();
        let server = MockServer::start();
        server.mock(|when, then| {
            when.method(GET);
            then.status(404);
        });

        let mut ui = MockUI::new();
        let result = command(&temp, &server, "99.0.0").execute(&mut ui).unwrap();

        assert!(!result.success);
        assert_eq!(result.exit_code, 1);
        assert!(ui.has_error("Node version 99.0.0 not found"));
        assert_eq!(ui.cleared_spinners(), 1);
        assert!(ui.successes().is_empty());
    }

    #[test]
    fn rejects_invalid_version_before_any_request() {
        let temp = TempDir::new().unwrap();
        let server = MockServer::start();
        let mock = server.mock(|when, then| {
            when.method(GET);
            then.status(200);
        });

        let mut ui = MockUI::new();
        let result = command(&temp, &server, "../etc").execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, 2);
        assert!(ui.has_error("Invalid version"));
        mock.assert_calls(0);
        assert!(!temp.path().join(".nodevm").exists());
    }
}
