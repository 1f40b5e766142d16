//! Extraction stage: one SBOM file in, flattened component records out.

use crate::model::{ComponentRecord, ParsedSbom};
use crate::parsers::{parse_sbom, ParseError};
use crate::utils::{infer_project_name, relative_posix_path};
use std::path::Path;

/// Read, parse and flatten one SBOM file.
///
/// Errors are per-file and recoverable; the caller decides how to report them.
pub fn extract_records(path: &Path, root: &Path) -> Result<Vec<ComponentRecord>, ParseError> {
    let sbom = parse_sbom(path)?;
    Ok(flatten_sbom(sbom, path, root))
}

/// Flatten a parsed SBOM into records, one per component, in document order.
#[must_use]
pub fn flatten_sbom(sbom: ParsedSbom, path: &Path, root: &Path) -> Vec<ComponentRecord> {
    let ParsedSbom {
        project,
        components,
    } = sbom;

    let project_name = project.name_or_else(|| infer_project_name(path, root));
    let sbom_path = relative_posix_path(path, root).unwrap_or_else(|| {
        path.file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default()
    });

    components
        .into_iter()
        .map(|component| {
            ComponentRecord::from_component(&project_name, &project, &sbom_path, component)
        })
        .collect()
}
