//! Output directory handling.

use crate::error::{AsgError, AsgResult};
use std::path::Path;

/// Make sure `path` is a directory, creating it and its parents if missing.
pub fn ensure_dir(path: &Path) -> AsgResult<()> {
    match std::fs::metadata(path) {
        Ok(meta) if meta.is_dir() => Ok(()),
        Ok(_) => Err(AsgError::DirectoryConflict(path.to_path_buf())),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            log::info!("Creating target directory {}", path.display());
            std::fs::create_dir_all(path).map_err(|e| AsgError::io(path, e))
        }
        Err(e) => Err(AsgError::io(path, e)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ensure_dir_creates_nested() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let target = dir.path().join("a").join("tf-files");
        ensure_dir(&target).expect("create");
        assert!(target.is_dir());
        // second call on an existing directory is fine
        ensure_dir(&target).expect("existing");
    }

    #[test]
    fn test_ensure_dir_file_conflict() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let file = dir.path().join("tf-files");
        std::fs::write(&file, "not a dir").unwrap();
        let err = ensure_dir(&file).unwrap_err();
        assert!(matches!(err, AsgError::DirectoryConflict(p) if p == file));
    }
}
