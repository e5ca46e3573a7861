//! CLI argument definitions.
//!
//! This module defines all CLI arguments using clap's derive macros.
//! The main entry point is the [`Cli`] struct.

use clap::{Args, FromArgMatches, Parser, Subcommand};
use clap_complete::Shell;
use std::path::PathBuf;

use crate::config::{ConfigOverrides, FailurePolicy};
use crate::report::ReportFormat;

/// Environment variable that overrides the source directory.
pub const SOURCE_DIR_ENV: &str = "CHECKRUN_SOURCE_DIR";

/// checkrun - Run style, import-order, lint and type checks as one gate.
#[derive(Debug, Parser)]
#[command(name = "checkrun")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to config file (overrides .checkrun.yml discovery)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Path to project root (overrides current directory)
    #[arg(short, long, global = true)]
    pub project: Option<PathBuf>,

    /// Show tool output for passing checks too
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Minimal output
    #[arg(short, long, global = true, conflicts_with = "verbose")]
    pub quiet: bool,

    /// Disable colored output
    #[arg(long, global = true)]
    pub no_color: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    pub debug: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// Run the checks (default if no command specified)
    Run(RunArgs),

    /// List configured checks and whether their tools are on PATH
    List(ListArgs),

    /// Show resolved configuration
    Config(ConfigArgs),

    /// Generate shell completions
    Completions(CompletionsArgs),
}

/// Arguments for the `run` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct RunArgs {
    /// Directory to check, relative to the project root
    #[arg(long, value_name = "DIR", env = SOURCE_DIR_ENV)]
    pub source_dir: Option<PathBuf>,

    /// Stop at the first failing check
    #[arg(long, conflicts_with = "keep_going")]
    pub fail_fast: bool,

    /// Run every check even after a failure
    #[arg(long)]
    pub keep_going: bool,

    /// Run only specified checks (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub only: Vec<String>,

    /// Skip specified checks (comma-separated)
    #[arg(long, value_delimiter = ',')]
    pub skip: Vec<String>,

    /// Report format
    #[arg(long, value_enum, default_value_t = ReportFormat::Human)]
    pub format: ReportFormat,
}

impl RunArgs {
    /// Run args as if `checkrun run` was given no flags.
    ///
    /// Environment fallbacks such as `CHECKRUN_SOURCE_DIR` are resolved by
    /// clap, the same way as for an explicit `run`.
    pub fn from_env() -> Self {
        <Self as Args>::augment_args(clap::Command::new("run"))
            .try_get_matches_from(["run"])
            .and_then(|matches| Self::from_arg_matches(&matches))
            .unwrap_or_else(|e| {
                tracing::warn!("Ignoring run environment: {}", e);
                Self::default()
            })
    }

    /// Policy requested on the command line, if any.
    pub fn policy(&self) -> Option<FailurePolicy> {
        if self.fail_fast {
            Some(FailurePolicy::FailFast)
        } else if self.keep_going {
            Some(FailurePolicy::CollectAll)
        } else {
            None
        }
    }

    /// Config overrides carried by these flags.
    pub fn overrides(&self) -> ConfigOverrides {
        ConfigOverrides {
            source_dir: self.source_dir.clone(),
            policy: self.policy(),
        }
    }
}

/// Arguments for the `list` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ListArgs {
    /// Output as JSON
    #[arg(long)]
    pub json: bool,
}

/// Arguments for the `config` command.
#[derive(Debug, Clone, Default, clap::Args)]
pub struct ConfigArgs {
    /// Output as JSON
    #[arg(long, conflicts_with = "schema")]
    pub json: bool,

    /// Print the JSON Schema for .checkrun.yml
    #[arg(long)]
    pub schema: bool,
}

/// Arguments for the `completions` command.
#[derive(Debug, Clone, clap::Args)]
pub struct CompletionsArgs {
    /// Shell to generate completions for
    #[arg(value_enum)]
    pub shell: Shell,
}
