//! Normalized representation of SBOM input and flattened index output.
//!
//! Parsers produce a [`ParsedSbom`] per file: the project the SBOM describes
//! plus its components, with every optional field already defaulted. The
//! extraction stage then flattens each component into a [`ComponentRecord`],
//! the unit written to the aggregated index.

mod record;
mod sbom;

pub use record::{ComponentRecord, RecordSortKey};
pub use sbom::{ParsedSbom, SbomComponent, SbomProject};
