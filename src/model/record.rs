//! Flattened component records, the unit of the aggregated index.

use super::sbom::{SbomComponent, SbomProject};
use serde::{Deserialize, Serialize};

/// One component of one SBOM, joined with its project's metadata.
///
/// Field order is the serialized key order of the index file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ComponentRecord {
    pub project_name: String,
    pub project_version: String,
    pub project_group: String,
    /// Source file, relative to the SBOM root, `/`-separated
    pub sbom_path: String,
    pub component_name: String,
    pub component_version: String,
    pub component_group: String,
    pub component_type: String,
    pub purl: String,
    pub licenses: Vec<String>,
}

/// Borrowed ordering key: `(project_name, component_name, component_version)`.
pub type RecordSortKey<'a> = (&'a str, &'a str, &'a str);

impl ComponentRecord {
    /// Build a record from a parsed component.
    ///
    /// `project_name` is passed separately because it may have been derived
    /// from the file path rather than declared by the project.
    pub fn from_component(
        project_name: &str,
        project: &SbomProject,
        sbom_path: &str,
        component: SbomComponent,
    ) -> Self {
        Self {
            project_name: project_name.to_string(),
            project_version: project.version.clone(),
            project_group: project.group.clone(),
            sbom_path: sbom_path.to_string(),
            component_name: component.name,
            component_version: component.version,
            component_group: component.group,
            component_type: component.component_type,
            purl: component.purl,
            licenses: component.licenses,
        }
    }

    /// The key the index is ordered by.
    #[must_use]
    pub fn sort_key(&self) -> RecordSortKey<'_> {
        (
            &self.project_name,
            &self.component_name,
            &self.component_version,
        )
    }
}
