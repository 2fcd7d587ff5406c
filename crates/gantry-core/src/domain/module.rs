//! Module families and the module name generator.

use std::fmt;
use std::str::FromStr;

use serde::Serialize;

use crate::domain::error::DomainError;
use crate::domain::name::TargetName;

/// Directory that holds every generated module tree.
pub const TARGETS_DIR: &str = "Targets";
/// Source subdirectory inside a module.
pub const SOURCES_DIR: &str = "Sources";
/// Test subdirectory inside a module.
pub const TESTS_DIR: &str = "Tests";

// ── ModuleFamily ──────────────────────────────────────────────────────────────

/// The two generated library families.
///
/// Family tokens feed name synthesis: base `App` yields `AppKit0`,
/// `AppKit1`, … and `AppUI0`, `AppUI1`, …
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ModuleFamily {
    Kit,
    Ui,
}

impl ModuleFamily {
    /// Generation order: kit family first, then ui.
    pub const ALL: [ModuleFamily; 2] = [ModuleFamily::Kit, ModuleFamily::Ui];

    /// The token appended to the base name during synthesis.
    pub const fn token(&self) -> &'static str {
        match self {
            Self::Kit => "Kit",
            Self::Ui => "UI",
        }
    }

    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Kit => "kit",
            Self::Ui => "ui",
        }
    }
}

impl fmt::Display for ModuleFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ModuleFamily {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "kit" => Ok(Self::Kit),
            "ui" => Ok(Self::Ui),
            other => Err(DomainError::InvalidConfig(format!(
                "unknown module family: {other}"
            ))),
        }
    }
}

// ── ModuleSpec ────────────────────────────────────────────────────────────────

/// A single generated library module: one family, one index, one unique name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModuleSpec {
    family: ModuleFamily,
    index: u32,
    name: TargetName,
}

impl ModuleSpec {
    pub const fn family(&self) -> ModuleFamily {
        self.family
    }

    pub const fn index(&self) -> u32 {
        self.index
    }

    pub const fn name(&self) -> &TargetName {
        &self.name
    }

    /// File name of the module's source stub, e.g. `AppKit0.swift`.
    pub fn source_file_name(&self, extension: &str) -> String {
        format!("{}.{extension}", self.name)
    }

    /// File name of the module's test stub, e.g. `AppKit0Tests.swift`.
    pub fn test_file_name(&self, extension: &str) -> String {
        format!("{}Tests.{extension}", self.name)
    }
}

// ── Name generator ────────────────────────────────────────────────────────────

/// Generate the module specs for one family: `base + token + index` for
/// indices `0..count`.
///
/// Pure and deterministic — identical inputs always yield the identical
/// sequence. Invalid inputs are unrepresentable here: the base name is
/// already a validated [`TargetName`] and counts are unsigned.
pub fn generate_modules(base: &TargetName, family: ModuleFamily, count: u32) -> Vec<ModuleSpec> {
    let stem = base.suffixed(family.token());
    (0..count)
        .map(|index| ModuleSpec {
            family,
            index,
            name: stem.indexed(index),
        })
        .collect()
}

/// Generate both families in emission order (kit first, then ui),
/// `count` modules each.
pub fn generate_all_modules(base: &TargetName, count: u32) -> Vec<ModuleSpec> {
    ModuleFamily::ALL
        .iter()
        .flat_map(|family| generate_modules(base, *family, count))
        .collect()
}

// ── Tests ─────────────────────────────────────────────────────────────────────
