//! Discovery stage: find SBOM candidates under the root.

use crate::config::SBOM_FILE_SUFFIX;
use crate::error::{IndexError, Result};
use std::path::{Path, PathBuf};
use walkdir::{DirEntry, WalkDir};

/// Recursively collect every `*.json` file under `root`.
///
/// Entries are visited in file-name order, so the result is the same on every
/// filesystem. Symlinks to regular files are included; symlinked directories
/// are not descended. Unreadable subdirectories are logged and skipped.
///
/// Fails only when `root` itself is missing or not a directory.
pub fn find_sbom_files(root: &Path) -> Result<Vec<PathBuf>> {
    ensure_root(root)?;

    let mut files = Vec::new();
    for entry in WalkDir::new(root).follow_links(false).sort_by_file_name() {
        match entry {
            Ok(entry) if is_sbom_candidate(&entry) => files.push(entry.into_path()),
            Ok(_) => {}
            Err(e) => {
                tracing::warn!("Skipping unreadable entry under {}: {}", root.display(), e);
            }
        }
    }

    Ok(files)
}

fn ensure_root(root: &Path) -> Result<()> {
    match std::fs::metadata(root) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(IndexError::RootNotDirectory {
            path: root.to_path_buf(),
        }),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => Err(IndexError::missing_root(root)),
        Err(e) => Err(IndexError::io(root, e)),
    }
}

fn is_sbom_candidate(entry: &DirEntry) -> bool {
    if !entry.file_name().to_string_lossy().ends_with(SBOM_FILE_SUFFIX) {
        return false;
    }
    let file_type = entry.file_type();
    file_type.is_file() || (file_type.is_symlink() && entry.path().is_file())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;

    fn touch(path: &Path) {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("create dirs");
        }
        fs::write(path, "{}").expect("write file");
    }

    #[test]
    fn test_finds_nested_json_files_in_name_order() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = dir.path();
        touch(&root.join("zeta.json"));
        touch(&root.join("teams/beta/bom.json"));
        touch(&root.join("teams/alpha/sbom.json"));
        touch(&root.join("alpha.json"));

        let files = find_sbom_files(root).expect("discover");
        let rel: Vec<_> = files
            .iter()
            .map(|p| p.strip_prefix(root).expect("under root").to_path_buf())
            .collect();

        assert_eq!(
            rel,
            vec![
                PathBuf::from("alpha.json"),
                PathBuf::from("teams/alpha/sbom.json"),
                PathBuf::from("teams/beta/bom.json"),
                PathBuf::from("zeta.json"),
            ]
        );
    }

    #[test]
    fn test_ignores_other_extensions_and_directories() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let root = dir.path();
        touch(&root.join("README.md"));
        touch(&root.join("bom.xml"));
        touch(&root.join("bom.JSON"));
        touch(&root.join("bom.json.bak"));
        fs::create_dir_all(root.join("folder.json")).expect("create dir");
        touch(&root.join("folder.json/inner.json"));

        let files = find_sbom_files(root).expect("discover");
        assert_eq!(files, vec![root.join("folder.json/inner.json")]);
    }

    #[test]
    fn test_empty_root_yields_nothing() {
        let dir = tempfile::tempdir().expect("create temp dir");
        assert!(find_sbom_files(dir.path()).expect("discover").is_empty());
    }

    #[test]
    fn test_missing_root_is_fatal() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let err = find_sbom_files(&dir.path().join("absent")).unwrap_err();
        assert!(matches!(err, IndexError::MissingRoot { .. }), "{err:?}");
    }

    #[test]
    fn test_file_root_is_fatal() {
        let dir = tempfile::tempdir().expect("create temp dir");
        let file = dir.path().join("bom.json");
        touch(&file);
        let err = find_sbom_files(&file).unwrap_err();
        assert!(matches!(err, IndexError::RootNotDirectory { .. }), "{err:?}");
    }

    #[cfg(unix)]
    #[test]
    fn test_symlinked_file_included() {
        let outside = tempfile::tempdir().expect("create temp dir");
        let target = outside.path().join("shared.json");
        touch(&target);

        let dir = tempfile::tempdir().expect("create temp dir");
        std::os::unix::fs::symlink(&target, dir.path().join("link.json")).expect("symlink");
        std::os::unix::fs::symlink(outside.path(), dir.path().join("linked-dir"))
            .expect("symlink");

        let files = find_sbom_files(dir.path()).expect("discover");
        assert_eq!(files, vec![dir.path().join("link.json")]);
    }
}
