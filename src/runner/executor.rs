//! The seam between the runner and the processes it starts.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::checks::Check;
use crate::error::Result;
use crate::shell::{execute, CommandOptions, CommandResult};

/// Runs one check tool to completion.
///
/// Implementations return `Ok` for any tool that ran, whatever its exit
/// code, and `Err` only when the tool could not be started.
pub trait CheckExecutor {
    /// Invoke `check` against `source_dir`.
    fn run(&mut self, check: &Check, source_dir: &Path) -> Result<CommandResult>;
}

/// Executor that spawns the real tool with captured output.
#[derive(Debug, Clone, Default)]
pub struct ProcessExecutor {
    cwd: Option<PathBuf>,
    env: HashMap<String, String>,
}

impl ProcessExecutor {
    /// Create an executor that runs tools from `cwd`.
    pub fn new(cwd: &Path) -> Self {
        Self {
            cwd: Some(cwd.to_path_buf()),
            env: HashMap::new(),
        }
    }

    /// Add environment variables passed to every tool.
    pub fn with_env<I>(mut self, env: I) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        self.env.extend(env);
        self
    }
}

impl CheckExecutor for ProcessExecutor {
    fn run(&mut self, check: &Check, source_dir: &Path) -> Result<CommandResult> {
        let options = CommandOptions {
            cwd: self.cwd.clone(),
            env: self.env.clone(),
            capture_stdout: true,
            capture_stderr: true,
        };
        execute(&check.program, &check.argv(source_dir), &options)
    }
}
