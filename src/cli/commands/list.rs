//! List command implementation.
//!
//! The `checkrun list` command shows the configured checks in execution
//! order, the command each one runs, and whether its tool is on PATH.

use std::path::{Path, PathBuf};

use serde::Serialize;

use crate::checks::Check;
use crate::cli::args::ListArgs;
use crate::config::{resolve_config, ConfigOverrides};
use crate::error::{CheckrunError, Result};
use crate::report::EXIT_CONFIG_ERROR;
use crate::runner::CheckRunner;
use crate::shell::find_on_path;
use crate::ui::{CheckrunTheme, StatusKind, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The list command implementation.
pub struct ListCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    overrides: ConfigOverrides,
    args: ListArgs,
}

#[derive(Serialize)]
struct ListedCheck {
    kind: &'static str,
    description: &'static str,
    command: String,
    enabled: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    tool_path: Option<PathBuf>,
}

impl ListCommand {
    /// Create a new list command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: ListArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            overrides: ConfigOverrides::default(),
            args,
        }
    }

    /// Apply the same overrides `run` would use.
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        self.overrides = overrides;
        self
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &ListArgs {
        &self.args
    }

    fn describe(check: &Check, source_dir: &Path) -> ListedCheck {
        ListedCheck {
            kind: check.kind.name(),
            description: check.kind.description(),
            command: check.command_line(source_dir),
            enabled: check.enabled,
            tool_path: find_on_path(&check.program),
        }
    }
}

impl Command for ListCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let resolved = resolve_config(
            &self.project_root,
            self.config_path.as_deref(),
            &self.overrides,
        );
        let config = match resolved {
            Ok(c) => c,
            Err(e) if e.is_config_error() => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_CONFIG_ERROR));
            }
            Err(e) => return Err(e),
        };

        let runner = CheckRunner::new(&self.project_root, &config);
        let listed: Vec<ListedCheck> = runner
            .checks()
            .iter()
            .map(|c| Self::describe(c, runner.source_dir()))
            .collect();

        if self.args.json {
            let json = serde_json::to_string_pretty(&listed)
                .map_err(|e| CheckrunError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

        let theme = CheckrunTheme::detect();

        ui.message(&format!(
            "  {} {}",
            theme.header.apply_to("Checks for"),
            theme.highlight.apply_to(runner.source_dir().display())
        ));
        for (index, check) in listed.iter().enumerate() {
            let status = match (&check.tool_path, check.enabled) {
                (_, false) => StatusKind::Skipped,
                (Some(_), true) => StatusKind::Pending,
                (None, true) => StatusKind::Failed,
            };
            let note = match (&check.tool_path, check.enabled) {
                (_, false) => "disabled".to_string(),
                (Some(path), true) => path.display().to_string(),
                (None, true) => "not found on PATH".to_string(),
            };
            ui.message(&format!(
                "    {}. {} {:<10} {}",
                index + 1,
                status.styled(&theme),
                check.kind,
                theme.command.apply_to(&check.command),
            ));
            ui.message(&format!(
                "          {} {} {}",
                theme.dim.apply_to(check.description),
                theme.dim.apply_to("·"),
                theme.dim.apply_to(note)
            ));
        }
        ui.message(&format!(
            "  {} {}",
            theme.dim.apply_to("policy:"),
            theme.info.apply_to(runner.policy())
        ));

        Ok(CommandResult::success())
    }
}
