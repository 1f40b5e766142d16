//! Configuration module for sbom-index.
//!
//! Configuration is layered: built-in defaults, then an optional YAML config
//! file, then environment variables and command-line flags.
//!
//! ```rust,ignore
//! use sbom_index::config::{load_or_default, ConfigOverrides};
//!
//! let (mut config, _loaded_from) = load_or_default(None);
//! config.merge_overrides(&ConfigOverrides {
//!     sbom_root: Some("inventory".into()),
//!     ..ConfigOverrides::default()
//! });
//! let resolved = config.try_resolve(&std::env::current_dir()?)?;
//! ```
//!
//! # Configuration File
//!
//! Place a `.sbom-index.yaml` file in your project root or `~/.config/sbom-index/`:
//!
//! ```yaml
//! paths:
//!   sbom_root: sboms
//!   output_file: data/components.json
//! behavior:
//!   quiet: false
//! ```

mod defaults;
pub mod file;
mod types;
mod validation;

pub use defaults::{DEFAULT_OUTPUT_FILE, DEFAULT_SBOM_ROOT, SBOM_FILE_SUFFIX};
pub use types::{
    AppConfig, AppConfigBuilder, BehaviorConfig, ConfigOverrides, IndexConfig, PathsConfig,
};
pub use validation::{describe_errors, ConfigError, Validatable};

pub use file::{
    discover_config_file, generate_example_config, load_config_file, load_or_default,
    ConfigFileError, CONFIG_FILE_NAMES,
};

/// Generate a JSON Schema for the `AppConfig` configuration format.
pub fn generate_json_schema() -> Result<String, serde_json::Error> {
    let schema = schemars::schema_for!(AppConfig);
    serde_json::to_string_pretty(&schema)
}
