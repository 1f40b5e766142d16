//! sbom-index: aggregate a tree of `CycloneDX` SBOMs into one component index
//!
//! Walks the SBOM root, flattens every component into a record and writes a
//! single sorted JSON array.

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use sbom_index::{
    cli,
    config::{load_or_default, ConfigOverrides},
};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "sbom-index")]
#[command(version)]
#[command(about = "Aggregate CycloneDX SBOMs into a sorted component index", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  Index written (including an empty index)
    1  SBOM root missing, invalid configuration, or write failure

EXAMPLES:
    # Index ./sboms into ./data/components.json
    sbom-index

    # Index another tree
    sbom-index --sbom-root /srv/sboms -O /srv/index/components.json

    # Resolve the default paths against another directory
    sbom-index --base-dir /srv/inventory")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Directory relative paths are resolved against (default: current directory)
    #[arg(long, env = "SBOM_INDEX_BASE_DIR")]
    base_dir: Option<PathBuf>,

    /// Root of the SBOM tree [default: sboms]
    #[arg(long, env = "SBOM_INDEX_ROOT")]
    sbom_root: Option<PathBuf>,

    /// Output file path [default: data/components.json]
    #[arg(short = 'O', long = "output", env = "SBOM_INDEX_OUTPUT")]
    output_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .sbom-index.yaml in the current directory
    Init,
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false))
        .init();

    match cli.command {
        None => {
            let (mut config, loaded_from) = load_or_default(cli.config.as_deref());
            if let Some(path) = &loaded_from {
                tracing::debug!("Loaded config from {}", path.display());
            }
            config.merge_overrides(&ConfigOverrides {
                base_dir: cli.base_dir,
                sbom_root: cli.sbom_root,
                output_file: cli.output_file,
                quiet: cli.quiet,
            });

            let cwd = std::env::current_dir().context("cannot determine current directory")?;
            cli::run_index(&config, &cwd)?;
            Ok(())
        }

        Some(Commands::Completions { shell }) => {
            generate(shell, &mut Cli::command(), "sbom-index", &mut io::stdout());
            Ok(())
        }

        Some(Commands::ConfigSchema { output }) => cli::run_config_schema(output.as_deref()),

        Some(Commands::Config { action }) => match action {
            ConfigAction::Show => cli::run_config_show(cli.config.as_deref(), &mut io::stdout()),
            ConfigAction::Path => cli::run_config_path(cli.config.as_deref(), &mut io::stderr()),
            ConfigAction::Init => {
                let cwd = std::env::current_dir().context("cannot determine current directory")?;
                cli::run_config_init(&cwd)?;
                Ok(())
            }
        },
    }
}
