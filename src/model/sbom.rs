//! Per-file SBOM data after parsing.

use serde::{Deserialize, Serialize};

/// The project an SBOM was generated for (`metadata.component`).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SbomProject {
    /// Declared project name, `None` when absent or empty
    pub name: Option<String>,
    /// Declared project version, empty when absent
    pub version: String,
    /// Declared project group, empty when absent
    pub group: String,
}

impl SbomProject {
    /// Create a project entry with only a name set.
    pub fn named(name: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            name: (!name.is_empty()).then_some(name),
            ..Self::default()
        }
    }

    /// Resolve the project name, deriving it lazily when none was declared.
    pub fn name_or_else<F>(&self, fallback: F) -> String
    where
        F: FnOnce() -> String,
    {
        self.name.clone().unwrap_or_else(fallback)
    }
}

/// A component declared in an SBOM's `components` list.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SbomComponent {
    pub name: String,
    pub version: String,
    pub group: String,
    pub purl: String,
    pub component_type: String,
    /// License identifiers in source order
    pub licenses: Vec<String>,
}

impl SbomComponent {
    /// Create a component with a name and everything else empty.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }
}

/// One parsed SBOM document.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParsedSbom {
    pub project: SbomProject,
    pub components: Vec<SbomComponent>,
}

impl ParsedSbom {
    /// Number of components declared in the document
    #[must_use]
    pub fn component_count(&self) -> usize {
        self.components.len()
    }
}
