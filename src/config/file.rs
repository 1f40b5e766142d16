//! Configuration file loading and discovery.
//!
//! Supports loading configuration from YAML files with automatic discovery.

use super::types::{AppConfig, ConfigOverrides};
use std::path::{Path, PathBuf};

// ============================================================================
// Configuration File Discovery
// ============================================================================

/// Standard config file names to search for.
pub const CONFIG_FILE_NAMES: &[&str] = &[
    ".sbom-index.yaml",
    ".sbom-index.yml",
    "sbom-index.yaml",
    "sbom-index.yml",
];

/// Discover a config file by searching standard locations.
///
/// Search order:
/// 1. Explicit path if provided
/// 2. Current directory
/// 3. Git repository root (if in a repo)
/// 4. User config directory (~/.config/sbom-index/)
/// 5. Home directory
#[must_use]
pub fn discover_config_file(explicit_path: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit_path {
        if path.exists() {
            return Some(path.to_path_buf());
        }
    }

    search_dirs().iter().find_map(|dir| find_config_in_dir(dir))
}

/// Directories searched for a config file, in order.
#[must_use]
pub fn search_dirs() -> Vec<PathBuf> {
    let mut dirs_out = Vec::new();
    if let Ok(cwd) = std::env::current_dir() {
        dirs_out.push(cwd);
    }
    if let Some(git_root) = find_git_root() {
        dirs_out.push(git_root);
    }
    if let Some(config_dir) = dirs::config_dir() {
        dirs_out.push(config_dir.join("sbom-index"));
    }
    if let Some(home) = dirs::home_dir() {
        dirs_out.push(home);
    }
    dirs_out
}

/// Find a config file in a specific directory.
fn find_config_in_dir(dir: &Path) -> Option<PathBuf> {
    CONFIG_FILE_NAMES
        .iter()
        .map(|name| dir.join(name))
        .find(|path| path.exists())
}

/// Find the git repository root by walking up the directory tree.
fn find_git_root() -> Option<PathBuf> {
    let cwd = std::env::current_dir().ok()?;
    let mut current = cwd.as_path();

    loop {
        if current.join(".git").exists() {
            return Some(current.to_path_buf());
        }
        current = current.parent()?;
    }
}

// ============================================================================
// Configuration File Loading
// ============================================================================

/// Error type for config file operations.
#[derive(Debug)]
pub enum ConfigFileError {
    /// File not found
    NotFound(PathBuf),
    /// IO error reading file
    Io(std::io::Error),
    /// YAML parsing error
    Parse(serde_yaml::Error),
}

impl std::fmt::Display for ConfigFileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::NotFound(path) => {
                write!(f, "Config file not found: {}", path.display())
            }
            Self::Io(e) => write!(f, "Failed to read config file: {e}"),
            Self::Parse(e) => write!(f, "Failed to parse config file: {e}"),
        }
    }
}

impl std::error::Error for ConfigFileError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::NotFound(_) => None,
            Self::Io(e) => Some(e),
            Self::Parse(e) => Some(e),
        }
    }
}

impl From<std::io::Error> for ConfigFileError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<serde_yaml::Error> for ConfigFileError {
    fn from(err: serde_yaml::Error) -> Self {
        Self::Parse(err)
    }
}

/// Load an `AppConfig` from a YAML file.
pub fn load_config_file(path: &Path) -> Result<AppConfig, ConfigFileError> {
    if !path.exists() {
        return Err(ConfigFileError::NotFound(path.to_path_buf()));
    }

    let content = std::fs::read_to_string(path)?;
    if content.trim().is_empty() {
        return Ok(AppConfig::default());
    }
    let config: AppConfig = serde_yaml::from_str(&content)?;
    Ok(config)
}

/// Load config from discovered file, or return default.
///
/// A broken config file is reported and ignored.
#[must_use]
pub fn load_or_default(explicit_path: Option<&Path>) -> (AppConfig, Option<PathBuf>) {
    discover_config_file(explicit_path).map_or_else(
        || (AppConfig::default(), None),
        |path| match load_config_file(&path) {
            Ok(config) => (config, Some(path)),
            Err(e) => {
                tracing::warn!("Failed to load config from {}: {}", path.display(), e);
                (AppConfig::default(), None)
            }
        },
    )
}

// ============================================================================
// Configuration Merging
// ============================================================================

impl AppConfig {
    /// Layer command-line and environment overrides over this config.
    pub fn merge_overrides(&mut self, overrides: &ConfigOverrides) {
        if overrides.base_dir.is_some() {
            self.paths.base_dir.clone_from(&overrides.base_dir);
        }
        if let Some(root) = &overrides.sbom_root {
            self.paths.sbom_root.clone_from(root);
        }
        if let Some(file) = &overrides.output_file {
            self.paths.output_file.clone_from(file);
        }
        if overrides.quiet {
            self.behavior.quiet = true;
        }
    }
}

// ============================================================================
// Example Config Generation
// ============================================================================

/// Generate an example configuration file content.
#[must_use]
pub fn generate_example_config() -> String {
    r"# sbom-index configuration file
# Place this file as .sbom-index.yaml in your project root or ~/.config/sbom-index/
# Relative paths are resolved against paths.base_dir, or the current directory.

paths:
  # Directory relative paths are resolved against
  # base_dir: /srv/inventory

  # Root of the SBOM tree; every *.json file below it is indexed
  sbom_root: sboms

  # Aggregated, sorted component index (overwritten on every run)
  output_file: data/components.json

behavior:
  # Only log warnings and errors
  quiet: false
"
    .to_string()
}
