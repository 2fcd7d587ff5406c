//! Local filesystem adapter using std::fs.

use std::io;
use std::io::Write as _;
use std::path::Path;

use gantry_core::{application::ports::Filesystem, error::GantryResult};
use tracing::trace;

/// Production filesystem implementation using `std::fs`.
///
/// File writes go through a temporary file in the destination directory
/// followed by a rename, so a crash mid-write never leaves a partially
/// written file at the destination path.
#[derive(Debug, Clone, Copy)]
pub struct LocalFilesystem;

impl LocalFilesystem {
    /// Create a new local filesystem adapter.
    pub fn new() -> Self {
        Self
    }
}

impl Default for LocalFilesystem {
    fn default() -> Self {
        Self::new()
    }
}

impl Filesystem for LocalFilesystem {
    fn create_dir_all(&self, path: &Path) -> GantryResult<()> {
        std::fs::create_dir_all(path).map_err(|e| map_io_error(path, e, "create directory"))
    }

    fn write_file_atomic(&self, path: &Path, content: &str) -> GantryResult<()> {
        let dir = path.parent().ok_or_else(|| {
            map_io_error(
                path,
                io::Error::new(io::ErrorKind::InvalidInput, "path has no parent directory"),
                "resolve parent of",
            )
        })?;

        // Temp file must live on the same filesystem as the destination for
        // the rename to be atomic.
        let mut tmp = tempfile::NamedTempFile::new_in(dir)
            .map_err(|e| map_io_error(path, e, "create temporary file for"))?;
        tmp.write_all(content.as_bytes())
            .map_err(|e| map_io_error(path, e, "write"))?;
        tmp.persist(path)
            .map_err(|e| map_io_error(path, e.error, "persist"))?;

        trace!(path = %path.display(), bytes = content.len(), "file written");
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

fn map_io_error(path: &Path, e: io::Error, operation: &str) -> gantry_core::error::GantryError {
    use gantry_core::application::ApplicationError;

    ApplicationError::Filesystem {
        path: path.to_path_buf(),
        reason: format!("failed to {operation}: {e}"),
    }
    .into()
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_then_read_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("stub.swift");

        fs.write_file_atomic(&path, "public final class A {}\n").unwrap();
        assert_eq!(
            std::fs::read_to_string(&path).unwrap(),
            "public final class A {}\n"
        );
    }

    #[test]
    fn overwrite_replaces_content() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("stub.swift");

        fs.write_file_atomic(&path, "one").unwrap();
        fs.write_file_atomic(&path, "two").unwrap();
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "two");
    }

    #[test]
    fn create_dir_all_is_idempotent() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let nested = dir.path().join("a/b/c");

        fs.create_dir_all(&nested).unwrap();
        fs.create_dir_all(&nested).unwrap();
        assert!(fs.exists(&nested));
    }

    #[test]
    fn write_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let fs = LocalFilesystem::new();
        let path = dir.path().join("missing/stub.swift");
        assert!(fs.write_file_atomic(&path, "x").is_err());
    }
}
