//! The `GeneratorConfig` aggregate root and its typestate builder.
//!
//! A `GeneratorConfig` is the fully-resolved, validated description of one
//! generation run. All fields are validated at build time; once a config
//! exists it is guaranteed consistent.
//!
//! # Typestate builder
//!
//! The builder uses two phantom marker types (`NoApp` / `HasApp`) to enforce
//! at *compile time* that the app name is set before any other field.
//! Runtime validation (`validate`) is still called at `build()` to catch
//! cross-field invariants that cannot be expressed in the type system.

use std::fmt;
use std::marker::PhantomData;

use crate::domain::error::DomainError;
use crate::domain::name::{PackageRef, TargetName};
use crate::domain::target::Platform;

// ── Aggregate root ────────────────────────────────────────────────────────────

/// A fully-validated generation run configuration.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    app_name: TargetName,
    platform: Platform,
    module_count: u32,
    replication_count: u32,
    external_packages: Vec<PackageRef>,
    organization: String,
    bundle_id_prefix: String,
    development_team: String,
    allow_duplicate_bundle_ids: bool,
}

impl GeneratorConfig {
    /// Start building a new `GeneratorConfig`.
    pub fn builder() -> GeneratorConfigBuilder<NoApp> {
        GeneratorConfigBuilder::new()
    }

    pub const fn app_name(&self) -> &TargetName {
        &self.app_name
    }
    pub const fn platform(&self) -> Platform {
        self.platform
    }
    pub const fn module_count(&self) -> u32 {
        self.module_count
    }
    pub const fn replication_count(&self) -> u32 {
        self.replication_count
    }
    pub fn external_packages(&self) -> &[PackageRef] {
        &self.external_packages
    }
    pub fn organization(&self) -> &str {
        &self.organization
    }
    pub fn bundle_id_prefix(&self) -> &str {
        &self.bundle_id_prefix
    }
    pub fn development_team(&self) -> &str {
        &self.development_team
    }
    pub const fn allow_duplicate_bundle_ids(&self) -> bool {
        self.allow_duplicate_bundle_ids
    }

    /// Validate internal consistency.
    ///
    /// Called automatically by the builder; available for re-validation
    /// after external construction.
    pub fn validate(&self) -> Result<(), DomainError> {
        if self.organization.trim().is_empty() {
            return Err(DomainError::InvalidConfig(
                "organization cannot be empty".into(),
            ));
        }
        if self.bundle_id_prefix.trim().is_empty()
            || self.bundle_id_prefix.chars().any(char::is_whitespace)
        {
            return Err(DomainError::InvalidConfig(
                "bundle id prefix must be a non-empty reverse-domain string".into(),
            ));
        }
        if self.development_team.trim().is_empty() {
            return Err(DomainError::MissingRequiredField {
                field: "development_team",
            });
        }
        Ok(())
    }
}

impl fmt::Display for GeneratorConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} ({}, {} modules x2, {} replicas)",
            self.app_name, self.platform, self.module_count, self.replication_count
        )
    }
}

// ── Typestate markers ─────────────────────────────────────────────────────────

/// Marker: app name has not yet been set.
pub struct NoApp;
/// Marker: app name has been set; other fields may now be configured.
pub struct HasApp;

// ── Builder ───────────────────────────────────────────────────────────────────

/// Typestate builder for [`GeneratorConfig`].
pub struct GeneratorConfigBuilder<S> {
    app_name: Option<TargetName>,
    platform: Platform,
    module_count: u32,
    replication_count: u32,
    external_packages: Vec<PackageRef>,
    organization: String,
    bundle_id_prefix: String,
    development_team: Option<String>,
    allow_duplicate_bundle_ids: bool,
    _marker: PhantomData<S>,
}

impl GeneratorConfigBuilder<NoApp> {
    pub fn new() -> Self {
        Self {
            app_name: None,
            platform: Platform::Ios,
            module_count: 0,
            replication_count: 0,
            external_packages: Vec::new(),
            organization: "tuist.io".to_string(),
            bundle_id_prefix: "io.tuist".to_string(),
            development_team: None,
            allow_duplicate_bundle_ids: true,
            _marker: PhantomData,
        }
    }

    /// Set the app name. This transitions the builder to `HasApp`.
    pub fn app_name(self, app_name: TargetName) -> GeneratorConfigBuilder<HasApp> {
        GeneratorConfigBuilder {
            app_name: Some(app_name),
            platform: self.platform,
            module_count: self.module_count,
            replication_count: self.replication_count,
            external_packages: self.external_packages,
            organization: self.organization,
            bundle_id_prefix: self.bundle_id_prefix,
            development_team: self.development_team,
            allow_duplicate_bundle_ids: self.allow_duplicate_bundle_ids,
            _marker: PhantomData,
        }
    }
}

impl Default for GeneratorConfigBuilder<NoApp> {
    fn default() -> Self {
        Self::new()
    }
}

impl GeneratorConfigBuilder<HasApp> {
    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    /// Module count *per family*; the run generates `2 * count` modules.
    pub fn module_count(mut self, count: u32) -> Self {
        self.module_count = count;
        self
    }

    /// Number of additional app/test pairs replicated from the canonical app.
    pub fn replication_count(mut self, count: u32) -> Self {
        self.replication_count = count;
        self
    }

    pub fn external_packages(mut self, packages: impl IntoIterator<Item = PackageRef>) -> Self {
        self.external_packages = packages.into_iter().collect();
        self
    }

    pub fn organization(mut self, organization: impl Into<String>) -> Self {
        self.organization = organization.into();
        self
    }

    pub fn bundle_id_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.bundle_id_prefix = prefix.into();
        self
    }

    pub fn development_team(mut self, team: impl Into<String>) -> Self {
        self.development_team = Some(team.into());
        self
    }

    pub fn allow_duplicate_bundle_ids(mut self, allow: bool) -> Self {
        self.allow_duplicate_bundle_ids = allow;
        self
    }

    /// Build and validate the `GeneratorConfig`.
    pub fn build(self) -> Result<GeneratorConfig, DomainError> {
        let config = GeneratorConfig {
            app_name: self.app_name.expect("typestate guarantees app name is set"),
            platform: self.platform,
            module_count: self.module_count,
            replication_count: self.replication_count,
            external_packages: self.external_packages,
            organization: self.organization,
            bundle_id_prefix: self.bundle_id_prefix,
            development_team: self.development_team.ok_or(
                DomainError::MissingRequiredField {
                    field: "development_team",
                },
            )?,
            allow_duplicate_bundle_ids: self.allow_duplicate_bundle_ids,
        };
        config.validate()?;
        Ok(config)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
