//! Index command handler.
//!
//! Validates the merged configuration, resolves it and runs the full
//! discover → extract → aggregate → write pipeline.

use crate::config::AppConfig;
use crate::pipeline::{self, RunSummary};
use anyhow::{Context, Result};
use std::path::Path;

/// Run the index command
pub fn run_index(config: &AppConfig, cwd: &Path) -> Result<RunSummary> {
    let resolved = config
        .try_resolve(cwd)
        .context("invalid sbom-index configuration")?;

    let summary = pipeline::run(&resolved).with_context(|| {
        format!(
            "failed to index {} into {}",
            resolved.sbom_root.display(),
            resolved.output_file.display()
        )
    })?;

    if summary.files_skipped > 0 {
        tracing::warn!(
            "{} of {} SBOM file(s) could not be read and were skipped",
            summary.files_skipped,
            summary.files_found
        );
    }

    Ok(summary)
}
