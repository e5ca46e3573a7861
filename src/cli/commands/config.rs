//! Config command implementation.
//!
//! The `checkrun config` command shows the resolved configuration, or the
//! JSON Schema of the config file with `--schema`.

use std::path::{Path, PathBuf};

use crate::cli::args::ConfigArgs;
use crate::config::{resolve_config, CheckrunConfig, ConfigOverrides, ConfigPaths};
use crate::error::{CheckrunError, Result};
use crate::report::EXIT_CONFIG_ERROR;
use crate::ui::UserInterface;

use super::dispatcher::{Command, CommandResult};

/// The config command implementation.
pub struct ConfigCommand {
    project_root: PathBuf,
    config_path: Option<PathBuf>,
    overrides: ConfigOverrides,
    args: ConfigArgs,
}

impl ConfigCommand {
    /// Create a new config command.
    pub fn new(project_root: &Path, config_path: Option<&Path>, args: ConfigArgs) -> Self {
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
    pub fn args(&self) -> &ConfigArgs {
        &self.args
    }

    fn source_path(&self) -> Option<PathBuf> {
        match &self.config_path {
            Some(path) => Some(self.project_root.join(path)),
            None => ConfigPaths::discover(&self.project_root).project,
        }
    }
}

impl Command for ConfigCommand {
    fn execute(&self, ui: &mut dyn UserInterface) -> Result<CommandResult> {
        if self.args.schema {
            let schema = schemars::schema_for!(CheckrunConfig);
            let json = serde_json::to_string_pretty(&schema)
                .map_err(|e| CheckrunError::Other(e.into()))?;
            ui.message(&json);
            return Ok(CommandResult::success());
        }

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

        if self.args.json {
            let json = serde_json::to_string_pretty(&config)
                .map_err(|e| CheckrunError::Other(e.into()))?;
            ui.message(&json);
        } else {
            match self.source_path() {
                Some(path) => ui.message(&format!("# {}", path.display())),
                None => ui.message("# defaults (no .checkrun.yml found)"),
            }
            let yaml =
                serde_yaml::to_string(&config).map_err(|e| CheckrunError::Other(e.into()))?;
            ui.message(&yaml);
        }

        Ok(CommandResult::success())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::MockUI;
    use std::fs;
    use tempfile::TempDir;

    fn setup_project(config: &str) -> TempDir {
        let temp = TempDir::new().unwrap();
        fs::write(temp.path().join(".checkrun.yml"), config).unwrap();
        temp
    }

    #[test]
    fn config_command_creation() {
        let temp = TempDir::new().unwrap();
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs::default());
        assert_eq!(cmd.project_root(), temp.path());
        assert!(!cmd.args().schema);
    }

    #[test]
    fn config_defaults_without_file() {
        let temp = TempDir::new().unwrap();
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert!(result.success);
        assert!(ui.has_message("# defaults"));
        assert!(ui.has_message("source_dir: src"));
    }

    #[test]
    fn config_shows_config_path() {
        let temp = setup_project("source_dir: lib\n");
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs::default());
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message(".checkrun.yml"));
        assert!(ui.has_message("source_dir: lib"));
    }

    #[test]
    fn config_shows_source_dir_override() {
        let temp = setup_project("source_dir: lib\n");
        let overrides = ConfigOverrides {
            source_dir: Some(PathBuf::from("app")),
            ..Default::default()
        };
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs::default())
            .with_overrides(overrides);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("source_dir: app"));
    }

    #[test]
    fn config_json_output() {
        let temp = setup_project("policy: fail_fast\n");
        let args = ConfigArgs {
            json: true,
            ..Default::default()
        };
        let cmd = ConfigCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        let doc: serde_json::Value = serde_json::from_str(&ui.messages()[0]).unwrap();
        assert_eq!(doc["policy"], "fail_fast");
        assert_eq!(doc["checks"].as_array().unwrap().len(), 4);
    }

    #[test]
    fn config_schema_output() {
        let temp = TempDir::new().unwrap();
        let args = ConfigArgs {
            schema: true,
            ..Default::default()
        };
        let cmd = ConfigCommand::new(temp.path(), None, args);
        let mut ui = MockUI::new();

        cmd.execute(&mut ui).unwrap();

        assert!(ui.has_message("\"source_dir\""));
        assert!(ui.has_message("fail_fast"));
    }

    #[test]
    fn config_explicit_missing_file() {
        let temp = TempDir::new().unwrap();
        let cmd = ConfigCommand::new(
            temp.path(),
            Some(Path::new("ci.yml")),
            ConfigArgs::default(),
        );
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, EXIT_CONFIG_ERROR);
        assert!(ui.has_error("ci.yml"));
    }

    #[test]
    fn config_invalid_values_rejected() {
        let temp = setup_project("source_dir: \"\"\n");
        let cmd = ConfigCommand::new(temp.path(), None, ConfigArgs::default());
        let mut ui = MockUI::new();

        let result = cmd.execute(&mut ui).unwrap();

        assert_eq!(result.exit_code, EXIT_CONFIG_ERROR);
        assert!(ui.has_error("Invalid configuration"));
    }
}
