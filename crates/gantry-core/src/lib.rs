//! Gantry Core - Hexagonal Architecture Implementation
//!
//! This crate provides the domain and application layers for the Gantry
//! project-manifest generator, following hexagonal (ports and adapters)
//! architecture.
//!
//! ## Architecture Overview
//!
//! ```text
//! ┌─────────────────────────────────────────┐
//! │           gantry-cli (CLI)              │
//! │     (Implements Driving Ports)          │
//! └──────────────────┬──────────────────────┘
//!                    │ calls
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │         Application Services            │
//! │ (TargetGraphBuilder, ScaffoldWriter,    │
//! │  ManifestAssembler)                     │
//! └──────────────────┬──────────────────────┘
//!                    │ uses
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │      Application Ports (Traits)         │
//! │     (Driven: Filesystem, Sink)          │
//! └──────────────────┬──────────────────────┘
//!                    │ implemented by
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │    gantry-adapters (Infrastructure)     │
//! │ (LocalFilesystem, MemoryFilesystem,     │
//! │  JsonManifestSink)                      │
//! └─────────────────────────────────────────┘
//!                    │
//!                    ▼
//! ┌─────────────────────────────────────────┐
//! │        Domain Layer (Pure Logic)        │
//! │  (names, modules, targets, descriptor)  │
//! └─────────────────────────────────────────┘
//! ```
//!
//! ## Usage
//!
//! ```rust,no_run
//! use gantry_core::domain::{
//!     generate_all_modules, GeneratorConfig, TargetName,
//! };
//! use gantry_core::application::TargetGraphBuilder;
//!
//! let config = GeneratorConfig::builder()
//!     .app_name(TargetName::new("TuistApp")?)
//!     .development_team("72SA8V3WYL")
//!     .module_count(300)
//!     .replication_count(300)
//!     .build()?;
//!
//! let modules = generate_all_modules(config.app_name(), config.module_count());
//! let targets = TargetGraphBuilder::new(&config).build(&modules)?;
//! # Ok::<(), gantry_core::domain::DomainError>(())
//! ```

// Re-export domain layer (stable, well-defined API)
pub mod domain;

// Re-export application layer (orchestration logic)
pub mod application;

// Re-export error types
pub mod error;

// Public API - what external crates should use
pub mod prelude {
    pub use crate::application::{
        ports::{Filesystem, ManifestSink},
        CancelFlag, ManifestAssembler, ScaffoldOptions, ScaffoldReport, ScaffoldWriter,
        TargetGraphBuilder,
    };
    pub use crate::domain::{
        generate_all_modules, generate_modules, GeneratorConfig, ModuleFamily, ModuleSpec,
        PackageRef, Platform, ProductKind, ProjectDescriptor, StubTemplate, TargetName,
        TargetSpec,
    };
    pub use crate::error::{GantryError, GantryResult};
}

// Version info
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
