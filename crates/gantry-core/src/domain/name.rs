//! Validated identifiers: target names, package references, and the
//! duplicate-rejecting [`NameRegistry`].
//!
//! Targets and modules are identified purely by synthesized strings, so
//! identity lives behind a validated newtype instead of a convention: a
//! [`TargetName`] cannot be empty and cannot contain whitespace or path
//! separators. Uniqueness across a build run is enforced by claiming every
//! name in a single [`NameRegistry`].

use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::DomainError;

// ── TargetName ────────────────────────────────────────────────────────────────

/// A validated build-target or module identifier.
///
/// Invariants: non-empty, no whitespace, no `/` or `\`. Enforced at
/// construction.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(transparent)]
pub struct TargetName(String);

impl TargetName {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.is_empty() {
            return Err(DomainError::InvalidName {
                name,
                reason: "name cannot be empty",
            });
        }
        if name.chars().any(char::is_whitespace) {
            return Err(DomainError::InvalidName {
                name,
                reason: "name cannot contain whitespace",
            });
        }
        if name.contains('/') || name.contains('\\') {
            return Err(DomainError::InvalidName {
                name,
                reason: "name cannot contain path separators",
            });
        }
        Ok(Self(name))
    }

    /// Construct from a compile-time literal.
    ///
    /// # Panics
    ///
    /// Panics if the literal violates the name invariants. This is a
    /// programming error (invalid hard-coded target name), not a runtime
    /// error.
    pub fn literal(name: &'static str) -> Self {
        Self::new(name).expect("hard-coded target name must be valid")
    }

    /// Append a literal suffix, e.g. `App` → `AppTests`.
    ///
    /// The suffixes used throughout the generator (`Kit`, `UI`, `Tests`)
    /// cannot invalidate an already-valid name, so this is infallible.
    pub fn suffixed(&self, suffix: &str) -> Self {
        Self(format!("{}{suffix}", self.0))
    }

    /// Append a numeric index, e.g. `AppKit` → `AppKit7`.
    pub fn indexed(&self, index: u32) -> Self {
        Self(format!("{}{index}", self.0))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TargetName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for TargetName {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl FromStr for TargetName {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::new(s)
    }
}

// ── PackageRef ────────────────────────────────────────────────────────────────

/// Reference to an externally managed package, identified by name only.
///
/// Resolution and versioning are the downstream consumer's responsibility;
/// inside the graph a package reference is a leaf.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PackageRef(String);

impl PackageRef {
    pub fn new(name: impl Into<String>) -> Result<Self, DomainError> {
        let name = name.into();
        if name.trim().is_empty() {
            return Err(DomainError::InvalidPackageRef(
                "package name cannot be empty".into(),
            ));
        }
        Ok(Self(name))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PackageRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// ── NameRegistry ──────────────────────────────────────────────────────────────

/// Duplicate-rejecting name set.
///
/// The single uniqueness authority for a generation run: every synthesized
/// target name is claimed here exactly once, and a second claim of the same
/// name is a [`DomainError::DuplicateTargetName`].
#[derive(Debug, Default)]
pub struct NameRegistry {
    claimed: HashSet<TargetName>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claim a name, rejecting duplicates.
    pub fn claim(&mut self, name: &TargetName) -> Result<(), DomainError> {
        if !self.claimed.insert(name.clone()) {
            return Err(DomainError::DuplicateTargetName(name.to_string()));
        }
        Ok(())
    }

    pub fn contains(&self, name: &TargetName) -> bool {
        self.claimed.contains(name)
    }

    pub fn len(&self) -> usize {
        self.claimed.len()
    }

    pub fn is_empty(&self) -> bool {
        self.claimed.is_empty()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_names_pass() {
        for name in ["App", "AppKit0", "AppUI299", "My-App", "x"] {
            assert!(TargetName::new(name).is_ok(), "failed for: {name}");
        }
    }

    #[test]
    fn empty_name_is_rejected() {
        assert!(matches!(
            TargetName::new(""),
            Err(DomainError::InvalidName { .. })
        ));
    }

    #[test]
    fn whitespace_is_rejected() {
        assert!(TargetName::new("My App").is_err());
        assert!(TargetName::new("App\t").is_err());
    }

    #[test]
    fn path_separators_are_rejected() {
        assert!(TargetName::new("a/b").is_err());
        assert!(TargetName::new("a\\b").is_err());
    }

    #[test]
    fn suffixed_and_indexed_compose() {
        let app = TargetName::new("App").unwrap();
        assert_eq!(app.suffixed("Kit").indexed(3).as_str(), "AppKit3");
        assert_eq!(app.suffixed("Tests").as_str(), "AppTests");
    }

    #[test]
    fn registry_rejects_second_claim() {
        let mut registry = NameRegistry::new();
        let name = TargetName::new("App").unwrap();
        registry.claim(&name).unwrap();
        assert_eq!(
            registry.claim(&name),
            Err(DomainError::DuplicateTargetName("App".into()))
        );
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn registry_distinguishes_case() {
        let mut registry = NameRegistry::new();
        registry.claim(&TargetName::new("App").unwrap()).unwrap();
        assert!(registry.claim(&TargetName::new("app").unwrap()).is_ok());
    }

    #[test]
    fn package_ref_rejects_blank() {
        assert!(PackageRef::new("").is_err());
        assert!(PackageRef::new("   ").is_err());
        assert!(PackageRef::new("Alamofire").is_ok());
    }
}
