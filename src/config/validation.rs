//! Configuration validation for sbom-index.

use super::defaults::SBOM_FILE_SUFFIX;
use super::types::{AppConfig, IndexConfig, PathsConfig};
use crate::utils::canonicalize_lenient;
use std::path::Path;

// ============================================================================
// Configuration Error
// ============================================================================

/// Error type for configuration validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigError {
    /// The field that failed validation
    pub field: String,
    /// Description of the validation error
    pub message: String,
}

impl ConfigError {
    fn new(field: &str, message: impl Into<String>) -> Self {
        Self {
            field: field.to_string(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl std::error::Error for ConfigError {}

// ============================================================================
// Validation Trait
// ============================================================================

/// Trait for validatable configuration types.
pub trait Validatable {
    /// Validate the configuration, returning any errors found.
    fn validate(&self) -> Vec<ConfigError>;

    /// Check if the configuration is valid.
    fn is_valid(&self) -> bool {
        self.validate().is_empty()
    }
}

// ============================================================================
// Validation Implementations
// ============================================================================

impl Validatable for AppConfig {
    fn validate(&self) -> Vec<ConfigError> {
        self.paths.validate()
    }
}

impl Validatable for PathsConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if is_blank(&self.sbom_root) {
            errors.push(ConfigError::new("paths.sbom_root", "must not be empty"));
        }

        if is_blank(&self.output_file) {
            errors.push(ConfigError::new("paths.output_file", "must not be empty"));
        } else if self.output_file.file_name().is_none() {
            errors.push(ConfigError::new(
                "paths.output_file",
                format!("'{}' does not name a file", self.output_file.display()),
            ));
        }

        if let Some(base) = &self.base_dir {
            if is_blank(base) {
                errors.push(ConfigError::new(
                    "paths.base_dir",
                    "must not be empty when set",
                ));
            }
        }

        errors
    }
}

impl Validatable for IndexConfig {
    fn validate(&self) -> Vec<ConfigError> {
        let mut errors = Vec::new();

        if self.output_file.is_dir() {
            errors.push(ConfigError::new(
                "paths.output_file",
                format!("'{}' is a directory", self.output_file.display()),
            ));
        }

        let json_name = self
            .output_file
            .file_name()
            .filter(|n| n.to_string_lossy().ends_with(SBOM_FILE_SUFFIX));
        let inside_root = json_name.is_some_and(|name| {
            let parent = self.output_file.parent().unwrap_or_else(|| Path::new(""));
            canonicalize_lenient(parent)
                .join(name)
                .starts_with(canonicalize_lenient(&self.sbom_root))
        });
        if inside_root {
            errors.push(ConfigError::new(
                "paths.output_file",
                format!(
                    "'{}' lies inside the SBOM root '{}' and would be indexed on the next run",
                    self.output_file.display(),
                    self.sbom_root.display()
                ),
            ));
        }

        errors
    }
}

/// Join validation errors into a single message.
#[must_use]
pub fn describe_errors(errors: &[ConfigError]) -> String {
    errors
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join("; ")
}

fn is_blank(path: &Path) -> bool {
    path.as_os_str().is_empty()
}
