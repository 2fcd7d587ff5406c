//! In-memory filesystem adapter for testing.

use std::{
    collections::{HashMap, HashSet},
    path::{Path, PathBuf},
    sync::{Arc, RwLock},
};

use gantry_core::application::ports::Filesystem;
use gantry_core::application::ApplicationError;
use gantry_core::error::GantryResult;

/// In-memory filesystem for testing.
///
/// Clones share storage, so a test can keep a handle while the writer owns
/// a boxed clone. `fail_on` injects a failure for every operation touching
/// the given path or anything beneath it, which is how per-module failure
/// handling is exercised without a real broken disk.
#[derive(Debug, Clone, Default)]
pub struct MemoryFilesystem {
    inner: Arc<RwLock<MemoryFilesystemInner>>,
}

#[derive(Debug, Default)]
struct MemoryFilesystemInner {
    files: HashMap<PathBuf, String>,
    directories: HashSet<PathBuf>,
    fail_paths: HashSet<PathBuf>,
}

impl MemoryFilesystem {
    /// Create a new empty memory filesystem.
    pub fn new() -> Self {
        Self::default()
    }

    /// Inject a failure: any operation on `path` or below it errors.
    pub fn fail_on(&self, path: impl Into<PathBuf>) {
        self.inner.write().unwrap().fail_paths.insert(path.into());
    }

    /// Read a file's content (testing helper).
    pub fn read_file(&self, path: &Path) -> Option<String> {
        let inner = self.inner.read().ok()?;
        inner.files.get(path).cloned()
    }

    /// List all files, sorted for stable assertions.
    pub fn list_files(&self) -> Vec<PathBuf> {
        let inner = self.inner.read().unwrap();
        let mut files: Vec<_> = inner.files.keys().cloned().collect();
        files.sort();
        files
    }

    /// Number of stored files.
    pub fn file_count(&self) -> usize {
        self.inner.read().unwrap().files.len()
    }

    /// Clear all contents and injected failures.
    pub fn clear(&self) {
        let mut inner = self.inner.write().unwrap();
        inner.files.clear();
        inner.directories.clear();
        inner.fail_paths.clear();
    }

    fn check_injected(inner: &MemoryFilesystemInner, path: &Path) -> GantryResult<()> {
        if inner.fail_paths.iter().any(|p| path.starts_with(p)) {
            return Err(ApplicationError::Filesystem {
                path: path.to_path_buf(),
                reason: "injected failure".into(),
            }
            .into());
        }
        Ok(())
    }
}

impl Filesystem for MemoryFilesystem {
    fn create_dir_all(&self, path: &Path) -> GantryResult<()> {
        let mut inner = self.inner.write().unwrap();
        Self::check_injected(&inner, path)?;

        let mut current = PathBuf::new();
        for component in path.components() {
            current.push(component);
            inner.directories.insert(current.clone());
        }
        Ok(())
    }

    fn write_file_atomic(&self, path: &Path, content: &str) -> GantryResult<()> {
        let mut inner = self.inner.write().unwrap();
        Self::check_injected(&inner, path)?;

        // Mirror the local adapter: the parent directory must already exist.
        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !inner.directories.contains(parent) {
                return Err(ApplicationError::Filesystem {
                    path: path.to_path_buf(),
                    reason: "parent directory does not exist".into(),
                }
                .into());
            }
        }

        inner.files.insert(path.to_path_buf(), content.to_string());
        Ok(())
    }

    fn exists(&self, path: &Path) -> bool {
        let inner = self.inner.read().unwrap();
        inner.files.contains_key(path) || inner.directories.contains(path)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn write_requires_parent_directory() {
        let fs = MemoryFilesystem::new();
        assert!(fs.write_file_atomic(Path::new("/a/b.txt"), "x").is_err());

        fs.create_dir_all(Path::new("/a")).unwrap();
        fs.write_file_atomic(Path::new("/a/b.txt"), "x").unwrap();
        assert_eq!(fs.read_file(Path::new("/a/b.txt")).as_deref(), Some("x"));
    }

    #[test]
    fn clones_share_storage() {
        let fs = MemoryFilesystem::new();
        let view = fs.clone();
        fs.create_dir_all(Path::new("/a")).unwrap();
        fs.write_file_atomic(Path::new("/a/f"), "y").unwrap();
        assert!(view.exists(Path::new("/a/f")));
    }

    #[test]
    fn injected_failure_covers_subtree() {
        let fs = MemoryFilesystem::new();
        fs.fail_on("/broken");
        assert!(fs.create_dir_all(Path::new("/broken/sub")).is_err());
        assert!(fs.create_dir_all(Path::new("/healthy")).is_ok());
    }

    #[test]
    fn clear_resets_everything() {
        let fs = MemoryFilesystem::new();
        fs.create_dir_all(Path::new("/a")).unwrap();
        fs.write_file_atomic(Path::new("/a/f"), "z").unwrap();
        fs.fail_on("/a");
        fs.clear();
        assert_eq!(fs.file_count(), 0);
        assert!(fs.create_dir_all(Path::new("/a")).is_ok());
    }
}
