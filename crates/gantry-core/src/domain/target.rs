//! Build-target value objects: platforms, product kinds, dependencies,
//! info-plists, and the [`TargetSpec`] itself.
//!
//! These are pure value types with no graph logic. Graph invariants
//! (uniqueness, acyclicity, test fan-out) live in `graph.rs`.

use std::collections::BTreeMap;
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::DomainError;
use crate::domain::name::{PackageRef, TargetName};

// ── Platform ──────────────────────────────────────────────────────────────────

/// Target platform identifier, opaque to the graph logic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    Ios,
    Macos,
    Tvos,
    Watchos,
}

impl Platform {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Ios => "ios",
            Self::Macos => "macos",
            Self::Tvos => "tvos",
            Self::Watchos => "watchos",
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Platform {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ios" => Ok(Self::Ios),
            "macos" => Ok(Self::Macos),
            "tvos" => Ok(Self::Tvos),
            "watchos" => Ok(Self::Watchos),
            other => Err(DomainError::InvalidConfig(format!(
                "unknown platform: {other}"
            ))),
        }
    }
}

// ── ProductKind ───────────────────────────────────────────────────────────────

/// What a target builds into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum ProductKind {
    App,
    Framework,
    UnitTests,
    AppExtension,
    AppClip,
}

impl ProductKind {
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::App => "app",
            Self::Framework => "framework",
            Self::UnitTests => "unit-tests",
            Self::AppExtension => "app-extension",
            Self::AppClip => "app-clip",
        }
    }

    /// Test targets carry a single dependency edge to the target they test.
    pub const fn is_test(&self) -> bool {
        matches!(self, Self::UnitTests)
    }
}

impl fmt::Display for ProductKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Dependency ────────────────────────────────────────────────────────────────

/// A single dependency edge.
///
/// `Target` edges reference another target *by name*; they are resolved by
/// lookup at assembly time, so forward references are legal while the graph
/// is being built. `Package` edges reference externally managed dependencies
/// and are leaves of the graph.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Dependency {
    Target(TargetName),
    Package(PackageRef),
}

impl Dependency {
    /// The referenced target name, if this is a target edge.
    pub fn as_target(&self) -> Option<&TargetName> {
        match self {
            Self::Target(name) => Some(name),
            Self::Package(_) => None,
        }
    }
}

// ── InfoPlist ─────────────────────────────────────────────────────────────────

/// A value inside an info-plist dictionary.
///
/// Extension plists nest an `NSExtension` dictionary, so values are either
/// strings or nested dictionaries. `BTreeMap` keeps serialization
/// deterministic.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum PlistValue {
    String(String),
    Dictionary(BTreeMap<String, PlistValue>),
}

impl From<&str> for PlistValue {
    fn from(s: &str) -> Self {
        Self::String(s.to_string())
    }
}

/// Structured info-plist configuration for a target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum InfoPlist {
    /// Consumer-supplied defaults, no overrides.
    Default,
    /// Defaults extended with the given keys.
    Extended(BTreeMap<String, PlistValue>),
    /// Backed by a plist file checked into the scaffold.
    File(PathBuf),
}

impl InfoPlist {
    /// Build an `Extended` plist from key/value pairs.
    pub fn extended<K, V, I>(pairs: I) -> Self
    where
        K: Into<String>,
        V: Into<PlistValue>,
        I: IntoIterator<Item = (K, V)>,
    {
        Self::Extended(
            pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

// ── TargetSpec ────────────────────────────────────────────────────────────────

/// A named, buildable unit in the downstream consumer's model.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetSpec {
    pub name: TargetName,
    pub kind: ProductKind,
    pub platform: Platform,
    pub bundle_id: String,
    pub info_plist: InfoPlist,
    /// Source path globs, relative to the generation root.
    pub sources: Vec<String>,
    /// Resource path globs, relative to the generation root.
    pub resources: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub entitlements: Option<PathBuf>,
    /// Ordered dependency edges; order is preserved into the descriptor.
    pub dependencies: Vec<Dependency>,
}

impl TargetSpec {
    pub fn new(
        name: TargetName,
        kind: ProductKind,
        platform: Platform,
        bundle_id: impl Into<String>,
    ) -> Self {
        Self {
            name,
            kind,
            platform,
            bundle_id: bundle_id.into(),
            info_plist: InfoPlist::Default,
            sources: Vec::new(),
            resources: Vec::new(),
            entitlements: None,
            dependencies: Vec::new(),
        }
    }

    pub fn with_info_plist(mut self, plist: InfoPlist) -> Self {
        self.info_plist = plist;
        self
    }

    pub fn with_sources(mut self, globs: impl IntoIterator<Item = String>) -> Self {
        self.sources = globs.into_iter().collect();
        self
    }

    pub fn with_resources(mut self, globs: impl IntoIterator<Item = String>) -> Self {
        self.resources = globs.into_iter().collect();
        self
    }

    pub fn with_entitlements(mut self, path: impl Into<PathBuf>) -> Self {
        self.entitlements = Some(path.into());
        self
    }

    pub fn with_dependencies(mut self, deps: impl IntoIterator<Item = Dependency>) -> Self {
        self.dependencies = deps.into_iter().collect();
        self
    }

    pub fn is_test(&self) -> bool {
        self.kind.is_test()
    }

    /// Iterate the target edges, skipping package leaves.
    pub fn target_dependencies(&self) -> impl Iterator<Item = &TargetName> {
        self.dependencies.iter().filter_map(Dependency::as_target)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
