//! Driven (output) ports - implemented by infrastructure.
//!
//! These traits define what the application needs from external systems.
//! The `gantry-adapters` crate provides implementations.

use std::path::Path;

use crate::domain::ProjectDescriptor;
use crate::error::GantryResult;

/// Port for filesystem operations.
///
/// Implemented by:
/// - `gantry_adapters::filesystem::LocalFilesystem` (production)
/// - `gantry_adapters::filesystem::MemoryFilesystem` (testing, fault injection)
///
/// Implementations must be `Sync`: the scaffold writer calls them from a
/// bounded worker pool, one module per task.
pub trait Filesystem: Send + Sync {
    /// Create a directory and all parent directories. Idempotent: an
    /// already-existing directory is not an error.
    fn create_dir_all(&self, path: &Path) -> GantryResult<()>;

    /// Write content to a file, atomically with respect to partial-content
    /// corruption (write-then-rename or equivalent). Overwrites an existing
    /// file.
    fn write_file_atomic(&self, path: &Path, content: &str) -> GantryResult<()>;

    /// Check if path exists.
    fn exists(&self, path: &Path) -> bool;
}

/// Port through which the finished descriptor leaves the core.
///
/// The downstream build-description consumer lives behind this boundary;
/// everything past it (rendering the native project format, compiling,
/// signing) is out of the core's hands.
pub trait ManifestSink: Send + Sync {
    fn emit(&self, descriptor: &ProjectDescriptor) -> GantryResult<()>;
}
