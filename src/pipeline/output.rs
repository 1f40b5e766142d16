//! Emission stage: write the sorted index to disk.

use crate::error::{ErrorContext, IndexError, Result};
use crate::model::ComponentRecord;
use crate::utils::content_hash;
use std::path::Path;

/// What a write did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct WriteOutcome {
    /// Bytes written
    pub bytes: usize,
    /// Whether the content differs from what was at the path before
    pub changed: bool,
}

/// Render records as a JSON array with 2-space indentation.
pub fn render_index(records: &[ComponentRecord]) -> Result<String> {
    serde_json::to_string_pretty(records).context("rendering component index")
}

/// Write the index to `path`, creating missing parent directories.
///
/// Any existing file is overwritten, even when its content is identical.
pub fn write_index(records: &[ComponentRecord], path: &Path) -> Result<WriteOutcome> {
    let content = render_index(records)?;

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        std::fs::create_dir_all(parent)
            .map_err(|e| IndexError::io(parent, e))
            .context("creating output directory")?;
    }

    let previous_hash = std::fs::read(path).ok().map(|old| content_hash(&old));

    std::fs::write(path, content.as_bytes())
        .map_err(|e| IndexError::io(path, e))
        .context("writing component index")?;

    Ok(WriteOutcome {
        bytes: content.len(),
        changed: previous_hash != Some(content_hash(content.as_bytes())),
    })
}
