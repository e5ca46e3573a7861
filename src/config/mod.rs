//! Configuration loading, parsing, and validation for checkrun.
//!
//! - Schema definitions in [`schema`]
//! - File discovery, loading and overrides in [`loader`]
//! - Validation in [`validator`]
//!
//! # Example
//!
//! ```
//! use checkrun::config::{load_config, validate};
//! use tempfile::TempDir;
//! use std::fs;
//!
//! let temp = TempDir::new().unwrap();
//! fs::write(temp.path().join(".checkrun.yml"), "source_dir: firmware").unwrap();
//!
//! let config = load_config(temp.path(), None).unwrap();
//! validate(&config).unwrap();
//! assert_eq!(config.source_dir, std::path::PathBuf::from("firmware"));
//! assert_eq!(config.checks.len(), 4);
//! ```

pub mod loader;
pub mod schema;
pub mod validator;

pub use schema::{CheckConfig, CheckrunConfig, FailurePolicy, DEFAULT_SOURCE_DIR};

pub use loader::{
    find_project_root, load_config, load_config_file, parse_config, resolve_config,
    ConfigOverrides, ConfigPaths, CONFIG_FILE_NAMES,
};

pub use validator::{validate, validate_config, ValidationError};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn config_json_schema_describes_source_dir() {
        let schema = schemars::schema_for!(CheckrunConfig);
        let json = serde_json::to_value(&schema).unwrap();
        assert!(json["properties"]["source_dir"].is_object());
        assert!(json["properties"]["checks"].is_object());
    }
}
