//! Core domain layer for Gantry.
//!
//! Pure business logic: validated identifiers, module name synthesis, target
//! and descriptor value objects, and graph invariants. No I/O, no async, no
//! subscribers — filesystem and emission concerns are handled via ports
//! defined in the application layer.

pub mod config;
pub mod descriptor;
pub mod error;
pub mod graph;
pub mod module;
pub mod name;
pub mod stub;
pub mod target;

// Re-exports for convenience
pub use config::{GeneratorConfig, GeneratorConfigBuilder};
pub use descriptor::{DefaultSettings, ProjectDescriptor, Settings};
pub use error::{DomainError, ErrorCategory};
pub use module::{
    generate_all_modules, generate_modules, ModuleFamily, ModuleSpec, SOURCES_DIR, TARGETS_DIR,
    TESTS_DIR,
};
pub use name::{NameRegistry, PackageRef, TargetName};
pub use stub::{StubTemplate, PLACEHOLDER};
pub use target::{Dependency, InfoPlist, Platform, PlistValue, ProductKind, TargetSpec};
