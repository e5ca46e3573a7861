//! External command execution and environment helpers.

pub mod command;
pub mod platform;

pub use command::{command_line, execute, CommandOptions, CommandResult};
pub use platform::{find_in_dirs, find_on_path, is_ci, parse_system_path};
