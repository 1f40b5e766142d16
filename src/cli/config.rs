//! Config command handlers.
//!
//! Implements `config show`, `config path`, `config init` and `config-schema`.

use crate::config::{
    discover_config_file, file::search_dirs, generate_example_config, generate_json_schema,
    load_or_default, CONFIG_FILE_NAMES,
};
use anyhow::{bail, Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};

/// File name written by `config init`.
const INIT_FILE_NAME: &str = ".sbom-index.yaml";

/// Print the effective configuration (defaults merged with the config file) as YAML.
pub fn run_config_show(explicit: Option<&Path>, out: &mut impl Write) -> Result<()> {
    let (config, loaded_from) = load_or_default(explicit);
    match &loaded_from {
        Some(path) => writeln!(out, "# Loaded from: {}", path.display())?,
        None => writeln!(out, "# No config file found; showing defaults")?,
    }
    let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
    write!(out, "{yaml}")?;
    Ok(())
}

/// Print config file search paths, recognized names and the active file.
pub fn run_config_path(explicit: Option<&Path>, out: &mut impl Write) -> Result<()> {
    writeln!(out, "Config file search paths (in order):")?;
    for dir in search_dirs() {
        writeln!(out, "  {}", dir.display())?;
    }
    writeln!(out)?;
    writeln!(out, "Recognized file names:")?;
    for name in CONFIG_FILE_NAMES {
        writeln!(out, "  {name}")?;
    }
    writeln!(out)?;
    match discover_config_file(explicit) {
        Some(path) => writeln!(out, "Active config file: {}", path.display())?,
        None => writeln!(out, "No config file found.")?,
    }
    Ok(())
}

/// Write an example config file into `dir`, refusing to overwrite.
pub fn run_config_init(dir: &Path) -> Result<PathBuf> {
    let target = dir.join(INIT_FILE_NAME);
    if target.exists() {
        bail!(
            "{} already exists. Remove it first to re-initialize.",
            target.display()
        );
    }
    std::fs::write(&target, generate_example_config())
        .with_context(|| format!("failed to write {}", target.display()))?;
    tracing::info!("Created {}", target.display());
    Ok(target)
}

/// Emit the config JSON Schema to `output`, or stdout when `None`.
pub fn run_config_schema(output: Option<&Path>) -> Result<()> {
    let schema = generate_json_schema().context("failed to generate config schema")?;
    match output {
        Some(path) => {
            std::fs::write(path, &schema)
                .with_context(|| format!("failed to write {}", path.display()))?;
            tracing::info!("Schema written to {}", path.display());
        }
        None => println!("{schema}"),
    }
    Ok(())
}
