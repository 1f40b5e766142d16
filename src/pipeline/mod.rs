//! Indexing pipeline: discover → extract → aggregate → write.
//!
//! [`run`] drives one full pass over the SBOM tree. Per-file read and parse
//! failures are logged and skipped; only a missing SBOM root, an invalid
//! configuration or a failed write abort the run.

mod aggregate;
mod discover;
mod extract;
mod output;

pub use aggregate::{aggregate, sort_records};
pub use discover::find_sbom_files;
pub use extract::{extract_records, flatten_sbom};
pub use output::{render_index, write_index, WriteOutcome};

use crate::config::{describe_errors, IndexConfig, Validatable};
use crate::error::{IndexError, Result};
use std::path::PathBuf;

/// Outcome of a completed indexing run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunSummary {
    /// SBOM candidates found under the root
    pub files_found: usize,
    /// Candidates that could not be read or parsed
    pub files_skipped: usize,
    /// Records in the written index
    pub records_written: usize,
    /// Where the index was written
    pub output_file: PathBuf,
    /// Whether the index content differs from the previous run
    pub output_changed: bool,
}

/// Index every SBOM under `config.sbom_root` into `config.output_file`.
///
/// On a fatal error the output file is left as it was.
pub fn run(config: &IndexConfig) -> Result<RunSummary> {
    let problems = config.validate();
    if !problems.is_empty() {
        return Err(IndexError::config(describe_errors(&problems)));
    }

    tracing::debug!(
        "Indexing {} into {}",
        config.sbom_root.display(),
        config.output_file.display()
    );

    let files = find_sbom_files(&config.sbom_root)?;
    if !config.quiet {
        tracing::info!(
            "Found {} SBOM file(s) under {}",
            files.len(),
            config.sbom_root.display()
        );
    }

    let mut batches = Vec::with_capacity(files.len());
    let mut files_skipped = 0;
    for path in &files {
        match extract_records(path, &config.sbom_root) {
            Ok(records) => {
                if !config.quiet {
                    tracing::info!("{}: extracted {} components", path.display(), records.len());
                }
                batches.push(records);
            }
            Err(e) => {
                tracing::warn!("Failed to read SBOM {}: {}", path.display(), e);
                files_skipped += 1;
            }
        }
    }

    let records = aggregate(batches);
    let outcome = write_index(&records, &config.output_file)?;

    if !config.quiet {
        tracing::info!(
            "Wrote {} components to {}",
            records.len(),
            config.output_file.display()
        );
    }
    tracing::debug!(
        "Wrote {} bytes ({})",
        outcome.bytes,
        if outcome.changed { "changed" } else { "unchanged" }
    );

    Ok(RunSummary {
        files_found: files.len(),
        files_skipped,
        records_written: records.len(),
        output_file: config.output_file.clone(),
        output_changed: outcome.changed,
    })
}
