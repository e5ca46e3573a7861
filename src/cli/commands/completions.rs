//! Shell completions generation.
//!
//! The `checkrun completions` command generates shell completion scripts.

use std::io::Write;

use clap::CommandFactory;
use clap_complete::Shell;

use crate::cli::args::{Cli, CompletionsArgs};
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The completions command implementation.
pub struct CompletionsCommand {
    args: CompletionsArgs,
}

impl CompletionsCommand {
    /// Create a new completions command.
    pub fn new(args: CompletionsArgs) -> Self {
        Self { args }
    }
}

/// Write the completion script for `shell` to `out`.
pub fn write_completions<W: Write>(shell: Shell, out: &mut W) {
    let mut cmd = Cli::command();
    clap_complete::generate(shell, &mut cmd, "checkrun", out);
}

impl Command for CompletionsCommand {
    fn execute(&self, _ui: &mut dyn UserInterface) -> crate::error::Result<CommandResult> {
        write_completions(self.args.shell, &mut std::io::stdout());
        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn generate(shell: Shell) -> String {
        let mut buf = Vec::new();
        write_completions(shell, &mut buf);
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn generates_bash_completions() {
        let output = generate(Shell::Bash);
        assert!(output.contains("checkrun"));
        assert!(output.contains("complete"));
        assert!(output.contains("--source-dir"));
    }

    #[test]
    fn generates_zsh_completions() {
        assert!(generate(Shell::Zsh).contains("checkrun"));
    }

    #[test]
    fn generates_fish_completions() {
        assert!(generate(Shell::Fish).contains("fail-fast"));
    }
}
