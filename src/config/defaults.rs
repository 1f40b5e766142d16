//! Default values for sbom-index configuration.

/// Default SBOM root, relative to the base directory.
pub const DEFAULT_SBOM_ROOT: &str = "sboms";

/// Default output file, relative to the base directory.
pub const DEFAULT_OUTPUT_FILE: &str = "data/components.json";

/// File-name suffix that marks a file as an SBOM candidate.
pub const SBOM_FILE_SUFFIX: &str = ".json";
