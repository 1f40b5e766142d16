//! Shared utilities.

mod hash;
mod paths;

pub use hash::content_hash;
pub use paths::{canonicalize_lenient, infer_project_name, relative_posix_path};
