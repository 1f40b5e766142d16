//! CLI command handlers.
//!
//! Testable handlers invoked by main.rs, one per command.

mod config;
mod index;

pub use config::{run_config_init, run_config_path, run_config_show, run_config_schema};
pub use index::run_index;
