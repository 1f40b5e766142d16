//! **Aggregate a tree of `CycloneDX` SBOMs into one sorted component index.**
//!
//! `sbom-index` walks a directory of `CycloneDX` JSON documents, flattens every
//! component of every document into a [`ComponentRecord`] carrying its
//! project's metadata and source path, sorts the lot by
//! `(project_name, component_name, component_version)` and writes a single
//! JSON array.
//!
//! ## Core Concepts & Modules
//!
//! - **[`parsers`]**: Lenient `CycloneDX` JSON extraction into [`ParsedSbom`].
//!   Missing fields default to empty; malformed files are reported per file.
//! - **[`model`]**: [`ParsedSbom`] and the flat [`ComponentRecord`] the index is made of.
//! - **[`pipeline`]**: The discover → extract → aggregate → write stages and
//!   [`pipeline::run`], which drives one full pass.
//! - **[`config`]**: Layered configuration (defaults, YAML file, environment, flags).
//!
//! ## Getting Started
//!
//! ```no_run
//! use sbom_index::{pipeline, IndexConfig};
//!
//! fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = IndexConfig::new("sboms", "data/components.json");
//!     let summary = pipeline::run(&config)?;
//!
//!     println!(
//!         "Indexed {} components from {} SBOM file(s) ({} skipped).",
//!         summary.records_written, summary.files_found, summary.files_skipped
//!     );
//!
//!     Ok(())
//! }
//! ```
//!
//! Parsing a single document without touching the filesystem:
//!
//! ```
//! use sbom_index::parse_sbom_str;
//!
//! let sbom = parse_sbom_str(r#"{"components":[{"name":"serde","version":"1.0.204"}]}"#)
//!     .expect("valid document");
//! assert_eq!(sbom.component_count(), 1);
//! assert_eq!(sbom.project.name, None);
//! ```
//!
//! ## Command-Line Interface (CLI)
//!
//! This documentation is for the `sbom-index` library crate. The `sbom-index`
//! binary wraps [`pipeline::run`] with config discovery and logging.

// Lint to discourage unwrap() in production code - prefer explicit error handling
#![warn(clippy::unwrap_used)]
#![allow(clippy::missing_errors_doc, clippy::missing_panics_doc)]

pub mod cli;
pub mod config;
pub mod error;
pub mod model;
pub mod parsers;
pub mod pipeline;
pub mod utils;

// Re-export main types for convenience
pub use config::{AppConfig, AppConfigBuilder, ConfigOverrides, IndexConfig};
pub use config::{ConfigError, Validatable};
pub use error::{ErrorContext, IndexError, Result};
pub use model::{ComponentRecord, ParsedSbom, SbomComponent, SbomProject};
pub use parsers::{parse_sbom, parse_sbom_str, ParseError, SbomParser};
pub use pipeline::RunSummary;
