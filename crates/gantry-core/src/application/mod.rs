//! Application layer for Gantry.
//!
//! This layer contains:
//! - **Services**: use-case orchestration (TargetGraphBuilder,
//!   ScaffoldWriter, ManifestAssembler)
//! - **Ports**: interface definitions (traits) for external dependencies
//! - **Errors**: application-specific error types
//!
//! The application layer coordinates the domain layer but contains no
//! business rules itself. Invariants live in `crate::domain`.

pub mod error;
pub mod ports;
pub mod services;

// Re-export main services
pub use services::{
    CancelFlag, ManifestAssembler, ModuleFailure, ScaffoldOptions, ScaffoldReport, ScaffoldWriter,
    TargetGraphBuilder,
};

// Re-export port traits (for adapter implementation)
pub use ports::{Filesystem, ManifestSink};

pub use error::ApplicationError;
