//! Path rendering relative to the SBOM root.

use std::path::{Component, Path, PathBuf};

/// Render `path` relative to `root` with `/` separators.
///
/// Returns `None` when `path` is not under `root`.
#[must_use]
pub fn relative_posix_path(path: &Path, root: &Path) -> Option<String> {
    let rel = path.strip_prefix(root).ok()?;
    Some(normal_segments(rel).join("/"))
}

/// Derive a project name from an SBOM's location.
///
/// `teams/alpha/sbom.json` under the root becomes `teams/alpha/sbom`. Only the
/// last extension of the file name is dropped. Paths outside the root fall
/// back to the bare file stem.
#[must_use]
pub fn infer_project_name(path: &Path, root: &Path) -> String {
    let Ok(rel) = path.strip_prefix(root) else {
        return file_stem_lossy(path);
    };

    let mut segments = normal_segments(rel);
    if let Some(last) = segments.last_mut() {
        *last = file_stem_lossy(Path::new(last.as_str()));
    }

    if segments.is_empty() {
        file_stem_lossy(path)
    } else {
        segments.join("/")
    }
}

/// Resolve `path` against the filesystem as far as it exists.
///
/// Relative paths are taken from the current directory. The longest existing
/// prefix is canonicalized; the remaining components are
/// applied lexically, so `.` and `..` in a not-yet-created tail still collapse.
#[must_use]
pub fn canonicalize_lenient(path: &Path) -> PathBuf {
    let anchored = if path.is_relative() {
        Path::new(".").join(path)
    } else {
        path.to_path_buf()
    };
    let parts: Vec<Component<'_>> = anchored.components().collect();
    for split in (1..=parts.len()).rev() {
        let prefix: PathBuf = parts[..split].iter().collect();
        if let Ok(mut resolved) = prefix.canonicalize() {
            push_lexically(&mut resolved, &parts[split..]);
            return resolved;
        }
    }
    let mut resolved = PathBuf::new();
    push_lexically(&mut resolved, &parts);
    resolved
}

fn push_lexically(base: &mut PathBuf, parts: &[Component<'_>]) {
    for part in parts {
        match part {
            Component::CurDir => {}
            Component::ParentDir => {
                base.pop();
            }
            other => base.push(other.as_os_str()),
        }
    }
}

fn normal_segments(path: &Path) -> Vec<String> {
    path.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy().into_owned()),
            _ => None,
        })
        .collect()
}

fn file_stem_lossy(path: &Path) -> String {
    path.file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default()
}
