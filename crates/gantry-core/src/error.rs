//! Unified error handling for Gantry Core.
//!
//! This module provides a unified error type that wraps domain and
//! application errors, with categories and user-actionable suggestions.

use thiserror::Error;

use crate::application::ApplicationError;
use crate::domain::DomainError;

pub use crate::domain::ErrorCategory;

/// Root error type for Gantry Core operations.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum GantryError {
    /// Errors from the domain layer (invariant violations).
    #[error("validation error: {0}")]
    Domain(#[from] DomainError),

    /// Errors from the application layer (orchestration failures).
    #[error("{0}")]
    Application(#[from] ApplicationError),
}

impl GantryError {
    /// Error category for display/styling and exit-code mapping.
    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Domain(e) => e.category(),
            Self::Application(e) => e.category(),
        }
    }

    /// User-actionable suggestions for fixing this error.
    pub fn suggestions(&self) -> Vec<String> {
        match self {
            Self::Domain(DomainError::DuplicateTargetName(name)) => vec![
                format!("'{name}' is synthesized more than once for this app name"),
                "Pick an app name that does not collide with the fixed extension targets".into(),
                "(AppClip, NotificationServiceExtension, Intent, IntentUI, Widget)".into(),
            ],
            Self::Domain(DomainError::DuplicateBundleId { bundle_id, .. }) => vec![
                format!("Bundle id '{bundle_id}' is reused"),
                "Replicated app targets share the canonical bundle id by default".into(),
                "Drop --deny-duplicate-bundle-ids to accept the duplicates".into(),
            ],
            Self::Domain(DomainError::MissingRequiredField { field }) => vec![
                format!("Set '{field}' on the command line or in the config file"),
            ],
            Self::Domain(DomainError::MissingPlaceholder { placeholder }) => vec![
                format!("Stub templates must contain '{placeholder}' at least once"),
                "The token is replaced with each module's name".into(),
            ],
            Self::Application(ApplicationError::Filesystem { path, .. }) => vec![
                format!("Failed to access: {}", path.display()),
                "Check write permissions and available disk space".into(),
            ],
            Self::Application(ApplicationError::AllModulesFailed { .. }) => vec![
                "No module could be scaffolded".into(),
                "Check that the destination root is writable".into(),
            ],
            _ => vec!["See the error message above for details".into()],
        }
    }
}

/// Convenient result type alias.
pub type GantryResult<T> = Result<T, GantryError>;
