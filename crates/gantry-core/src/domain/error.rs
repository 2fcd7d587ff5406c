use thiserror::Error;

/// Root domain error type.
///
/// Every variant represents a configuration or graph invariant violation.
/// These abort the run before any filesystem mutation happens. All errors
/// are cloneable and categorizable for CLI display.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum DomainError {
    // ========================================================================
    // Identifier validation
    // ========================================================================
    #[error("invalid name '{name}': {reason}")]
    InvalidName { name: String, reason: &'static str },

    #[error("invalid package reference: {0}")]
    InvalidPackageRef(String),

    #[error("duplicate target name: '{0}'")]
    DuplicateTargetName(String),

    // ========================================================================
    // Graph invariants
    // ========================================================================
    #[error("dependency cycle through target '{0}'")]
    DependencyCycle(String),

    #[error("target '{target}' depends on unknown target '{missing}'")]
    UnknownDependency { target: String, missing: String },

    #[error("unit-test target '{target}' must depend on exactly one target, found {found}")]
    TestDependencyCount { target: String, found: usize },

    #[error("unit-test target '{target}' depends on another test target '{dependency}'")]
    TestDependsOnTest { target: String, dependency: String },

    #[error("bundle id '{bundle_id}' is shared by targets '{first}' and '{second}'")]
    DuplicateBundleId {
        bundle_id: String,
        first: String,
        second: String,
    },

    // ========================================================================
    // Configuration / templates
    // ========================================================================
    #[error("required field missing: {field}")]
    MissingRequiredField { field: &'static str },

    #[error("invalid generator configuration: {0}")]
    InvalidConfig(String),

    #[error("stub template does not contain the '{placeholder}' placeholder")]
    MissingPlaceholder { placeholder: &'static str },
}

impl DomainError {
    /// Error category for CLI display styling.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UnknownDependency { .. } => ErrorCategory::NotFound,
            _ => ErrorCategory::Validation,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Validation,
    NotFound,
    Internal,
}
