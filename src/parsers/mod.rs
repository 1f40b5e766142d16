//! SBOM parsers.
//!
//! Only the JSON shape of CycloneDX is understood. Every file found under the
//! SBOM root is handed to [`CycloneDxParser`]; documents that are not
//! CycloneDX simply yield no components.
//!
//! ## Usage
//!
//! ```no_run
//! use sbom_index::parsers::parse_sbom;
//! use std::path::Path;
//!
//! let sbom = parse_sbom(Path::new("sboms/billing/bom.json")).unwrap();
//! println!("{} components", sbom.component_count());
//! ```

mod cyclonedx;
mod traits;

pub use cyclonedx::{CycloneDxParser, LicenseChoice};
pub use traits::{ParseError, SbomParser};

use crate::model::ParsedSbom;
use std::path::Path;

/// Maximum SBOM file size (512 MB)
pub const MAX_SBOM_FILE_SIZE: u64 = 512 * 1024 * 1024;

/// Read and parse one SBOM file.
///
/// The file handle is closed before this returns, on success and on failure.
pub fn parse_sbom(path: &Path) -> Result<ParsedSbom, ParseError> {
    let metadata = std::fs::metadata(path)?;
    if metadata.len() > MAX_SBOM_FILE_SIZE {
        return Err(ParseError::TooLarge {
            size_mb: metadata.len() / (1024 * 1024),
            limit_mb: MAX_SBOM_FILE_SIZE / (1024 * 1024),
        });
    }
    let parser = CycloneDxParser::new();
    tracing::debug!("Parsing {} as {}", path.display(), parser.format_name());
    parser.parse(path)
}

/// Parse SBOM from string content
pub fn parse_sbom_str(content: &str) -> Result<ParsedSbom, ParseError> {
    CycloneDxParser::new().parse_str(content)
}
