//! Configuration validation rules.
//!
//! This module validates configuration for correctness:
//! - `source_dir` must not be empty
//! - Each check kind may be configured at most once
//! - A `command` override must name a program
//! - Environment variable names must be non-empty and contain no `=`

use crate::checks::CheckKind;
use crate::config::schema::CheckrunConfig;
use crate::error::{CheckrunError, Result};
use std::collections::HashSet;

/// Validation error with context.
#[derive(Debug, Clone)]
pub struct ValidationError {
    /// Rule identifier
    pub rule: String,
    /// Human-readable error message
    pub message: String,
    /// Check kind if error is check-specific
    pub check: Option<CheckKind>,
}

/// Validate a configuration and return all errors.
///
/// This function collects all validation errors rather than stopping
/// at the first one, allowing users to fix multiple issues at once.
pub fn validate_config(config: &CheckrunConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    if config.source_dir.as_os_str().is_empty() {
        errors.push(ValidationError {
            rule: "empty-source-dir".to_string(),
            message: "'source_dir' must not be empty".to_string(),
            check: None,
        });
    }

    errors.extend(validate_checks(config));
    errors.extend(validate_env(config));

    errors
}

fn validate_checks(config: &CheckrunConfig) -> Vec<ValidationError> {
    let mut errors = Vec::new();
    let mut seen = HashSet::new();

    for check in &config.checks {
        if !seen.insert(check.kind) {
            errors.push(ValidationError {
                rule: "duplicate-check".to_string(),
                message: format!("Check '{}' is configured more than once", check.kind),
                check: Some(check.kind),
            });
        }

        if let Some(command) = &check.command {
            if command.trim().is_empty() {
                errors.push(ValidationError {
                    rule: "empty-command".to_string(),
                    message: format!("Check '{}' has an empty 'command'", check.kind),
                    check: Some(check.kind),
                });
            }
        }
    }

    errors
}

fn validate_env(config: &CheckrunConfig) -> Vec<ValidationError> {
    config
        .env
        .keys()
        .filter(|key| key.is_empty() || key.contains('='))
        .map(|key| ValidationError {
            rule: "invalid-env-name".to_string(),
            message: format!("Invalid environment variable name '{}'", key),
            check: None,
        })
        .collect()
}

/// Validate and return Result (for convenience).
///
/// # Errors
///
/// Returns `ConfigValidationError` if any validation rules fail.
pub fn validate(config: &CheckrunConfig) -> Result<()> {
    let errors = validate_config(config);

    if errors.is_empty() {
        Ok(())
    } else {
        let messages: Vec<_> = errors.iter().map(|e| e.message.clone()).collect();
        Err(CheckrunError::ConfigValidationError {
            message: messages.join("; "),
        })
    }
}
