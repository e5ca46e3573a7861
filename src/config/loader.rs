//! Configuration file discovery and loading.
//!
//! Resolution order, highest priority first:
//! 1. Command-line flags (and their environment variables)
//! 2. Explicit `--config` file, or `.checkrun.yml` in the project root
//! 3. Built-in defaults

use crate::config::schema::{CheckrunConfig, FailurePolicy};
use crate::config::validator::validate;
use crate::error::{CheckrunError, Result};
use std::fs;
use std::path::{Path, PathBuf};

/// Config file names looked up in the project root, in order.
pub const CONFIG_FILE_NAMES: [&str; 2] = [".checkrun.yml", ".checkrun.yaml"];

/// Location of the project's config file, if any.
#[derive(Debug, Clone)]
pub struct ConfigPaths {
    /// Project config: .checkrun.yml
    pub project: Option<PathBuf>,
}

impl ConfigPaths {
    /// Discover the config file for the given project root.
    pub fn discover(project_root: &Path) -> Self {
        let project = CONFIG_FILE_NAMES
            .iter()
            .map(|name| project_root.join(name))
            .find(|path| path.is_file());
        Self { project }
    }

    /// Check if a project config exists.
    pub fn has_project_config(&self) -> bool {
        self.project.is_some()
    }
}

/// Values from the command line that override the config file.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Replaces `source_dir`.
    pub source_dir: Option<PathBuf>,
    /// Replaces `policy`.
    pub policy: Option<FailurePolicy>,
}

impl ConfigOverrides {
    /// Apply the overrides to a loaded config.
    pub fn apply(&self, config: &mut CheckrunConfig) {
        if let Some(dir) = &self.source_dir {
            config.source_dir = dir.clone();
        }
        if let Some(policy) = self.policy {
            config.policy = policy;
        }
    }
}

/// Find the project root by walking up from `start`.
///
/// Looks for:
/// 1. A `.checkrun.yml` file (primary indicator)
/// 2. A `.git` directory (fallback)
pub fn find_project_root(start: &Path) -> Option<PathBuf> {
    let mut current = start.to_path_buf();

    loop {
        if ConfigPaths::discover(&current).has_project_config() {
            return Some(current);
        }

        if current.join(".git").exists() {
            return Some(current);
        }

        if !current.pop() {
            return None;
        }
    }
}

/// Load a single config file and parse it into CheckrunConfig.
///
/// # Errors
///
/// Returns `ConfigNotFound` if the file doesn't exist.
/// Returns `ConfigParseError` if the YAML is invalid.
pub fn load_config_file(path: &Path) -> Result<CheckrunConfig> {
    let content = fs::read_to_string(path).map_err(|e| {
        if e.kind() == std::io::ErrorKind::NotFound {
            CheckrunError::ConfigNotFound {
                path: path.to_path_buf(),
            }
        } else {
            CheckrunError::Io(e)
        }
    })?;

    parse_config(&content, path)
}

/// Parse YAML content into CheckrunConfig.
///
/// An empty document yields the defaults. Check kinds the file does not
/// mention keep their default entry.
pub fn parse_config(content: &str, source_path: &Path) -> Result<CheckrunConfig> {
    if content.trim().is_empty() {
        return Ok(CheckrunConfig::default());
    }

    let mut config: CheckrunConfig =
        serde_yaml::from_str(content).map_err(|e| CheckrunError::ConfigParseError {
            path: source_path.to_path_buf(),
            message: e.to_string(),
        })?;
    config.fill_default_checks();
    Ok(config)
}

/// Load config with optional path override.
///
/// If `config_override` is provided, that file must exist. Otherwise the
/// project config is used when present, and the defaults when not.
pub fn load_config(project_root: &Path, config_override: Option<&Path>) -> Result<CheckrunConfig> {
    if let Some(override_path) = config_override {
        let path = project_root.join(override_path);
        tracing::debug!("Loading config from {}", path.display());
        return load_config_file(&path);
    }

    match ConfigPaths::discover(project_root).project {
        Some(path) => {
            tracing::debug!("Loading config from {}", path.display());
            load_config_file(&path)
        }
        None => {
            tracing::debug!("No config file found, using defaults");
            Ok(CheckrunConfig::default())
        }
    }
}

/// Load, apply overrides and validate.
pub fn resolve_config(
    project_root: &Path,
    config_override: Option<&Path>,
    overrides: &ConfigOverrides,
) -> Result<CheckrunConfig> {
    let mut config = load_config(project_root, config_override)?;
    overrides.apply(&mut config);
    validate(&config)?;
    Ok(config)
}
