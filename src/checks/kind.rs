//! The four kinds of quality check and their default tools.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A kind of quality check.
///
/// Variant order is the order checks always run in.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, JsonSchema,
)]
#[serde(rename_all = "lowercase")]
pub enum CheckKind {
    /// Formatting conformance, check-only.
    Style,
    /// Import ordering, check-only.
    Imports,
    /// Suspicious or non-idiomatic code patterns.
    Lint,
    /// Static type checking.
    Typecheck,
}

impl CheckKind {
    /// All kinds in execution order.
    pub const ALL: [CheckKind; 4] = [
        CheckKind::Style,
        CheckKind::Imports,
        CheckKind::Lint,
        CheckKind::Typecheck,
    ];

    /// Config and CLI name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Style => "style",
            Self::Imports => "imports",
            Self::Lint => "lint",
            Self::Typecheck => "typecheck",
        }
    }

    /// One-line description for `checkrun list`.
    pub fn description(self) -> &'static str {
        match self {
            Self::Style => "Source formatting (check only)",
            Self::Imports => "Import ordering (check only)",
            Self::Lint => "Lint rules",
            Self::Typecheck => "Static type checking",
        }
    }

    /// Tool invoked when the config does not override it.
    pub fn default_program(self) -> &'static str {
        match self {
            Self::Style => "black",
            Self::Imports => "isort",
            Self::Lint => "pylint",
            Self::Typecheck => "mypy",
        }
    }

    /// Arguments placed before the source directory by default.
    pub fn default_args(self) -> &'static [&'static str] {
        match self {
            Self::Style => &["--check"],
            Self::Imports => &["--check-only"],
            Self::Lint => &[],
            Self::Typecheck => &[],
        }
    }
}

impl fmt::Display for CheckKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for CheckKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "style" | "format" => Ok(Self::Style),
            "imports" | "import-order" | "isort" => Ok(Self::Imports),
            "lint" => Ok(Self::Lint),
            "typecheck" | "type-check" | "types" => Ok(Self::Typecheck),
            _ => Err(format!("unknown check: {}", s)),
        }
    }
}
