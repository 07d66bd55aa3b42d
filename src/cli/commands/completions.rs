//! The `nodevm completions <shell>` command.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::error::Result;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// Writes a completion script for the requested shell to stdout.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

/// Render the completion script for `shell` into `out`.
pub fn render(shell: Shell, out: &mut dyn Write) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "nodevm", out);
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> Result<CommandResult> {
        render(self.args.shell, &mut std::io::stdout());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn script(shell: Shell) -> String {
        let mut buf = Vec::new();
        render(shell, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn bash_script_names_binary_and_subcommands() {
        let output = script(Shell::Bash);
        assert!(output.contains("nodevm"));
        assert!(output.contains("complete"));
        assert!(output.contains("use"));
        assert!(output.contains("list"));
    }

    #[test]
    fn zsh_and_fish_scripts_name_binary() {
        assert!(script(Shell::Zsh).contains("nodevm"));
        assert!(script(Shell::Fish).contains("nodevm"));
    }
}
