//! Check execution orchestration.

pub mod executor;
pub mod sequence;

pub use executor::{CheckExecutor, ProcessExecutor};
pub use sequence::{CheckRunner, Selection};
