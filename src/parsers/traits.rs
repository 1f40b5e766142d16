//! Parser trait definitions and error types.

use crate::model::ParsedSbom;
use std::path::Path;
use thiserror::Error;

/// Errors that can occur while reading or parsing a single SBOM file.
///
/// These are recoverable: the pipeline logs them and moves on to the next file.
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("IO error: {0}")]
    IoError(String),

    #[error("JSON parse error: {0}")]
    JsonError(String),

    #[error("Invalid SBOM structure: {0}")]
    InvalidStructure(String),

    #[error("SBOM file is {size_mb} MB, exceeding the {limit_mb} MB limit")]
    TooLarge { size_mb: u64, limit_mb: u64 },
}

impl From<std::io::Error> for ParseError {
    fn from(err: std::io::Error) -> Self {
        Self::IoError(err.to_string())
    }
}

impl From<serde_json::Error> for ParseError {
    fn from(err: serde_json::Error) -> Self {
        Self::JsonError(err.to_string())
    }
}

/// Trait for SBOM format parsers
pub trait SbomParser {
    /// Parse SBOM content into the normalized per-file model
    fn parse_str(&self, content: &str) -> Result<ParsedSbom, ParseError>;

    /// Parse an SBOM file
    fn parse(&self, path: &Path) -> Result<ParsedSbom, ParseError> {
        let content = std::fs::read_to_string(path)?;
        self.parse_str(&content)
    }

    /// Human-readable format name
    fn format_name(&self) -> &str;
}
