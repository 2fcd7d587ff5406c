//! Application layer errors.
//!
//! These errors represent failures in orchestration — filesystem mutation
//! and final assembly — not business logic. Business rule violations are
//! `DomainError` from `crate::domain`.

use std::path::PathBuf;
use thiserror::Error;

use crate::domain::ErrorCategory;

/// Errors that occur during application orchestration.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum ApplicationError {
    /// A filesystem operation failed.
    ///
    /// `reason` is a string rather than the source `io::Error` so the error
    /// stays cloneable for per-module aggregation.
    #[error("filesystem error at {path}: {reason}")]
    Filesystem { path: PathBuf, reason: String },

    /// Every module in the batch failed to scaffold.
    #[error("scaffolding failed for all {failed} modules")]
    AllModulesFailed { failed: usize },

    /// Duplicate target name detected at final assembly.
    ///
    /// Unreachable when the graph builder produced the target list; checked
    /// defensively because a duplicate here means an upstream bug, not bad
    /// user input.
    #[error("assembled manifest contains duplicate target name '{name}'")]
    DuplicateAssembledName { name: String },

    /// A target edge failed to resolve at final assembly.
    #[error("assembled manifest: target '{target}' references unknown target '{missing}'")]
    DanglingReference { target: String, missing: String },

    /// The manifest sink rejected the descriptor.
    #[error("manifest emission failed: {reason}")]
    SinkFailed { reason: String },

    /// Worker-pool construction failed.
    #[error("failed to build scaffold worker pool: {reason}")]
    WorkerPool { reason: String },
}

impl ApplicationError {
    /// Error category for CLI display and exit-code mapping.
    ///
    /// Orchestration failures are all system-level: filesystem trouble needs
    /// caller intervention, and the assembly variants indicate internal
    /// invariant violations.
    pub fn category(&self) -> ErrorCategory {
        ErrorCategory::Internal
    }
}
