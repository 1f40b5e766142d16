//! CycloneDX SBOM parser.
//!
//! Reads the JSON shape of CycloneDX documents leniently: nothing is required,
//! absent or `null` fields default to empty values, and unknown fields are
//! ignored. A string field holding another JSON type reads as absent; a
//! container (`metadata`, `components`, an entry, `licenses`) of the wrong
//! type makes the document invalid.

use crate::model::{ParsedSbom, SbomComponent, SbomProject};
use crate::parsers::traits::{ParseError, SbomParser};
use serde_json::{Map, Value};

/// Parser for CycloneDX JSON documents
#[derive(Debug, Clone, Copy, Default)]
pub struct CycloneDxParser;

impl CycloneDxParser {
    /// Create a new CycloneDX parser
    #[must_use]
    pub const fn new() -> Self {
        Self
    }

    /// Parse a CycloneDX BOM from a JSON reader
    pub fn parse_json_reader<R: std::io::Read>(&self, reader: R) -> Result<ParsedSbom, ParseError> {
        let value: Value = serde_json::from_reader(reader)?;
        self.convert_document(&value)
    }

    fn convert_document(&self, doc: &Value) -> Result<ParsedSbom, ParseError> {
        let doc = doc.as_object().ok_or_else(|| {
            ParseError::InvalidStructure(format!(
                "top-level value is {}, expected an object",
                json_type_name(doc)
            ))
        })?;

        let project = match optional_object(doc, "metadata", "document")? {
            Some(metadata) => match optional_object(metadata, "component", "metadata")? {
                Some(component) => Self::convert_project(component),
                None => SbomProject::default(),
            },
            None => SbomProject::default(),
        };

        let components = match optional_array(doc, "components", "document")? {
            Some(entries) => entries
                .iter()
                .enumerate()
                .map(|(idx, entry)| Self::convert_component(idx, entry))
                .collect::<Result<Vec<_>, _>>()?,
            None => Vec::new(),
        };

        Ok(ParsedSbom {
            project,
            components,
        })
    }

    /// Convert `metadata.component` to the project description
    fn convert_project(component: &Map<String, Value>) -> SbomProject {
        let scope = "metadata.component";
        SbomProject {
            version: string_field(component, "version", scope),
            group: string_field(component, "group", scope),
            ..SbomProject::named(string_field(component, "name", scope))
        }
    }

    /// Convert one entry of `components`
    fn convert_component(idx: usize, entry: &Value) -> Result<SbomComponent, ParseError> {
        let scope = format!("components[{idx}]");
        let obj = entry.as_object().ok_or_else(|| {
            ParseError::InvalidStructure(format!(
                "{scope} is {}, expected an object",
                json_type_name(entry)
            ))
        })?;

        let licenses = match optional_array(obj, "licenses", &scope)? {
            Some(entries) => entries
                .iter()
                .filter_map(|entry| LicenseChoice::classify(entry).into_identifier())
                .collect(),
            None => Vec::new(),
        };

        Ok(SbomComponent {
            version: string_field(obj, "version", &scope),
            group: string_field(obj, "group", &scope),
            purl: string_field(obj, "purl", &scope),
            component_type: string_field(obj, "type", &scope),
            licenses,
            ..SbomComponent::new(string_field(obj, "name", &scope))
        })
    }
}

impl SbomParser for CycloneDxParser {
    fn parse_str(&self, content: &str) -> Result<ParsedSbom, ParseError> {
        let value: Value = serde_json::from_str(content)?;
        self.convert_document(&value)
    }

    fn format_name(&self) -> &str {
        "CycloneDX"
    }
}

// ============================================================================
// License entries
// ============================================================================

/// Classification of one `licenses[]` entry.
///
/// Only `{"license": {...}}` entries carrying a non-empty `id` or `name` yield
/// an identifier. Expressions, bare strings and other shapes are skipped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LicenseChoice {
    /// A structured license with a usable identifier
    Identified(String),
    /// Anything else
    Unrecognized,
}

impl LicenseChoice {
    /// Classify a raw `licenses[]` entry. `id` wins over `name`.
    #[must_use]
    pub fn classify(entry: &Value) -> Self {
        let Some(Value::Object(license)) = entry.get("license") else {
            return Self::Unrecognized;
        };

        let non_empty = |key: &str| {
            license
                .get(key)
                .and_then(Value::as_str)
                .filter(|s| !s.is_empty())
        };

        non_empty("id")
            .or_else(|| non_empty("name"))
            .map_or(Self::Unrecognized, |id| Self::Identified(id.to_string()))
    }

    /// The identifier, if any
    #[must_use]
    pub fn into_identifier(self) -> Option<String> {
        match self {
            Self::Identified(id) => Some(id),
            Self::Unrecognized => None,
        }
    }
}

// ============================================================================
// Field accessors
// ============================================================================

/// Read an optional string field; absent, `null` and non-string values read as empty.
fn string_field(obj: &Map<String, Value>, key: &str, scope: &str) -> String {
    match obj.get(key) {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(s)) => s.clone(),
        Some(other) => {
            tracing::debug!(
                "Ignoring {scope}.{key}: {}, expected a string",
                json_type_name(other)
            );
            String::new()
        }
    }
}

fn optional_object<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    scope: &str,
) -> Result<Option<&'a Map<String, Value>>, ParseError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Object(map)) => Ok(Some(map)),
        Some(other) => Err(wrong_type(scope, key, "an object", other)),
    }
}

fn optional_array<'a>(
    obj: &'a Map<String, Value>,
    key: &str,
    scope: &str,
) -> Result<Option<&'a Vec<Value>>, ParseError> {
    match obj.get(key) {
        None | Some(Value::Null) => Ok(None),
        Some(Value::Array(items)) => Ok(Some(items)),
        Some(other) => Err(wrong_type(scope, key, "an array", other)),
    }
}

fn wrong_type(scope: &str, key: &str, expected: &str, found: &Value) -> ParseError {
    ParseError::InvalidStructure(format!(
        "{scope}.{key} is {}, expected {expected}",
        json_type_name(found)
    ))
}

const fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
