//! Aggregation stage: order the flattened records.

use crate::model::ComponentRecord;

/// Stable sort by `(project_name, component_name, component_version)`.
///
/// Records with equal keys keep their aggregation order.
pub fn sort_records(records: &mut [ComponentRecord]) {
    records.sort_by(|a, b| a.sort_key().cmp(&b.sort_key()));
}

/// Concatenate per-file batches in order and sort the result.
#[must_use]
pub fn aggregate<I>(batches: I) -> Vec<ComponentRecord>
where
    I: IntoIterator<Item = Vec<ComponentRecord>>,
{
    let mut records: Vec<ComponentRecord> = batches.into_iter().flatten().collect();
    sort_records(&mut records);
    records
}
