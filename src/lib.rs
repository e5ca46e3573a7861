//! checkrun - one pass/fail gate over a project's code-quality tools.
//!
//! checkrun runs a fixed sequence of external check tools (style,
//! import ordering, lint, static types) against a source directory and
//! reports a single aggregate result. A failure in any check, including
//! the last one, fails the run.
//!
//! # Modules
//!
//! - [`checks`] - Check kinds, resolved checks and their outcomes
//! - [`cli`] - Command-line interface and argument parsing
//! - [`config`] - Configuration loading, parsing, and validation
//! - [`error`] - Error types and result aliases
//! - [`report`] - Aggregate run reports and their human/JSON renderings
//! - [`runner`] - The check sequencer and process executor
//! - [`shell`] - External process execution and PATH lookup
//! - [`ui`] - Spinners, status lines, and terminal output
//!
//! # Example
//!
//! ```
//! use checkrun::checks::{Check, CheckKind};
//! use std::path::Path;
//!
//! let check = Check::default_for(CheckKind::Imports);
//! assert_eq!(check.command_line(Path::new("src")), "isort --check-only src");
//! ```

pub mod checks;
pub mod cli;
pub mod config;
pub mod error;
pub mod report;
pub mod runner;
pub mod shell;
pub mod ui;

pub use error::{CheckrunError, Result};
