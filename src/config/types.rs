//! Configuration types for sbom-index.

use super::defaults::{DEFAULT_OUTPUT_FILE, DEFAULT_SBOM_ROOT};
use super::validation::{describe_errors, Validatable};
use crate::error::IndexError;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

// ============================================================================
// Unified Application Configuration
// ============================================================================

/// Application configuration as loaded from a config file and CLI flags.
///
/// Paths may be relative; [`AppConfig::resolve`] turns them into the
/// [`IndexConfig`] the pipeline runs with.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct AppConfig {
    /// Input and output locations
    pub paths: PathsConfig,
    /// Behavior flags
    pub behavior: BehaviorConfig,
}

impl AppConfig {
    /// Create an `AppConfig` builder.
    pub fn builder() -> AppConfigBuilder {
        AppConfigBuilder::default()
    }

    /// Resolve relative paths against the base directory.
    ///
    /// The base directory is `paths.base_dir` if set (itself resolved against
    /// `cwd` when relative), otherwise `cwd`.
    #[must_use]
    pub fn resolve(&self, cwd: &Path) -> IndexConfig {
        let base = match &self.paths.base_dir {
            Some(dir) => cwd.join(dir),
            None => cwd.to_path_buf(),
        };
        IndexConfig {
            sbom_root: base.join(&self.paths.sbom_root),
            output_file: base.join(&self.paths.output_file),
            quiet: self.behavior.quiet,
        }
    }

    /// Validate the configuration, then [`resolve`](Self::resolve) it.
    ///
    /// Fails with [`IndexError::Validation`] before any path is joined, so an
    /// empty `sbom_root` never silently becomes the base directory.
    pub fn try_resolve(&self, cwd: &Path) -> crate::error::Result<IndexConfig> {
        let problems = self.validate();
        if !problems.is_empty() {
            return Err(IndexError::validation(describe_errors(&problems)));
        }
        Ok(self.resolve(cwd))
    }
}

/// Input and output locations.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct PathsConfig {
    /// Directory that relative paths are resolved against (default: current directory)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub base_dir: Option<PathBuf>,
    /// Root of the SBOM tree to index
    pub sbom_root: PathBuf,
    /// Where the aggregated component index is written
    pub output_file: PathBuf,
}

impl Default for PathsConfig {
    fn default() -> Self {
        Self {
            base_dir: None,
            sbom_root: PathBuf::from(DEFAULT_SBOM_ROOT),
            output_file: PathBuf::from(DEFAULT_OUTPUT_FILE),
        }
    }
}

/// Behavior flags.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(default)]
pub struct BehaviorConfig {
    /// Suppress informational progress lines (warnings are still logged)
    pub quiet: bool,
}

/// Explicit overrides from the command line or environment.
///
/// `None` leaves the file/default value in place.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub base_dir: Option<PathBuf>,
    pub sbom_root: Option<PathBuf>,
    pub output_file: Option<PathBuf>,
    pub quiet: bool,
}

// ============================================================================
// Resolved configuration
// ============================================================================

/// Fully resolved configuration handed to [`crate::pipeline::run`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexConfig {
    /// Root of the SBOM tree
    pub sbom_root: PathBuf,
    /// Output file path
    pub output_file: PathBuf,
    /// Suppress informational progress lines
    pub quiet: bool,
}

impl IndexConfig {
    /// Create a resolved config from explicit paths.
    pub fn new(sbom_root: impl Into<PathBuf>, output_file: impl Into<PathBuf>) -> Self {
        Self {
            sbom_root: sbom_root.into(),
            output_file: output_file.into(),
            quiet: false,
        }
    }

    /// Set the quiet flag (builder style)
    #[must_use]
    pub const fn with_quiet(mut self, quiet: bool) -> Self {
        self.quiet = quiet;
        self
    }
}

// ============================================================================
// Builder for AppConfig
// ============================================================================

/// Builder for constructing `AppConfig` with fluent API.
#[derive(Debug, Default)]
#[must_use]
pub struct AppConfigBuilder {
    config: AppConfig,
}

impl AppConfigBuilder {
    /// Set the base directory.
    pub fn base_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.config.paths.base_dir = Some(dir.into());
        self
    }

    /// Set the SBOM root.
    pub fn sbom_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.config.paths.sbom_root = root.into();
        self
    }

    /// Set the output file.
    pub fn output_file(mut self, file: impl Into<PathBuf>) -> Self {
        self.config.paths.output_file = file.into();
        self
    }

    /// Enable quiet mode.
    pub const fn quiet(mut self, quiet: bool) -> Self {
        self.config.behavior.quiet = quiet;
        self
    }

    /// Build the configuration.
    #[must_use]
    pub fn build(self) -> AppConfig {
        self.config
    }
}
