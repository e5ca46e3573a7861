//! Run command implementation.
//!
//! The `checkrun run` command executes the check sequence and turns the
//! aggregate result into the process exit code.

use std::path::{Path, PathBuf};

use crate::cli::args::RunArgs;
use crate::config::{resolve_config, CheckrunConfig, FailurePolicy};
use crate::error::{CheckrunError, Result};
use crate::report::{JsonFormatter, ReportFormat, ReportFormatter, EXIT_CONFIG_ERROR};
use crate::runner::{CheckExecutor, CheckRunner, ProcessExecutor, Selection};
use crate::ui::{OutputMode, UserInterface};

use super::dispatcher::{Command, CommandResult};

/// The run command implementation.
pub struct RunCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    args: RunArgs,
}

impl RunCommand {
    /// Create a new run command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: RunArgs) -> Self {
        Self {
            project_root: project_root.to_path_buf(),
            config_path: config_path.map(Path::to_path_buf),
            args,
        }
    }

    /// Get the project root path.
    pub fn project_root(&self) -> &Path {
        &self.project_root
    }

    /// Get the command arguments.
    pub fn args(&self) -> &RunArgs {
        &self.args
    }

    fn load(&self) -> Result<(CheckrunConfig, Selection)> {
        let config = resolve_config(
            &self.project_root,
            self.config_path.as_deref(),
            &self.args.overrides(),
        )?;
        let selection = Selection::parse(&self.args.only, &self.args.skip)?;
        Ok((config, selection))
    }

    /// Load config and selection, reporting configuration errors.
    ///
    /// Returns `Ok(None)` after printing the error when the command should
    /// exit with the configuration-error code.
    fn load_or_report(
        &self,
        ui: &mut dyn UserInterface,
    ) -> Result<Option<(CheckrunConfig, Selection)>> {
        match self.load() {
            Ok(loaded) => Ok(Some(loaded)),
            Err(e) if e.is_config_error() => {
                ui.error(&e.to_string());
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    /// Run with a caller-supplied executor.
    pub fn execute_with(
        &self,
        executor: &mut dyn CheckExecutor,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        match self.load_or_report(ui)? {
            Some((config, selection)) => self.run_checks(&config, selection, executor, ui),
            None => Ok(CommandResult::failure(EXIT_CONFIG_ERROR)),
        }
    }

    fn run_checks(
        &self,
        config: &CheckrunConfig,
        selection: Selection,
        executor: &mut dyn CheckExecutor,
        ui: &mut dyn UserInterface,
    ) -> Result<CommandResult> {
        let runner = CheckRunner::new(&self.project_root, config).with_selection(selection);
        let json = self.args.format == ReportFormat::Json;

        let saved_mode = ui.output_mode();
        if json {
            ui.set_output_mode(OutputMode::Silent);
        } else {
            ui.show_header(&format!("Checking {}", config.source_dir.display()));
        }

        let result = runner.run(executor, ui);
        ui.set_output_mode(saved_mode);

        let report = match result {
            Ok(report) => report,
            Err(e @ CheckrunError::SourceDirNotFound { .. }) => {
                ui.error(&e.to_string());
                return Ok(CommandResult::failure(EXIT_CONFIG_ERROR));
            }
            Err(e) => return Err(e),
        };

        if json {
            ui.message(&JsonFormatter::new().format_to_string(&report));
        } else {
            ui.show_run_summary(&report);
            if report.outcomes.iter().all(|o| !o.status.was_run()) {
                ui.warning("No checks ran; check --only/--skip and enabled settings");
            }
            if report.success() {
                ui.success(&report.headline());
            } else {
                ui.error(&report.headline());
                if report.skipped_count() > 0 && config.policy == FailurePolicy::FailFast {
                    ui.show_hint("Run with --keep-going to see every failing check");
                }
            }
        }

        if report.success() {
            Ok(CommandResult::success())
        } else {
            Ok(CommandResult::failure(report.exit_code()))
        }
    }
}

impl Command for RunCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        let Some((config, selection)) = self.load_or_report(ui)? else {
            return Ok(CommandResult::failure(EXIT_CONFIG_ERROR));
        };
        let mut executor =
            ProcessExecutor::new(&self.project_root).with_env(config.env.clone());
        self.run_checks(&config, selection, &mut executor, ui)
    }
}
