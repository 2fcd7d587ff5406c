//! The project descriptor: the complete, renderer-agnostic representation of
//! the generated project handed to the external build-description consumer.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::domain::name::TargetName;
use crate::domain::target::TargetSpec;

// ── Settings ──────────────────────────────────────────────────────────────────

/// Which baseline the downstream consumer should start from before applying
/// the explicit setting dictionaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DefaultSettings {
    #[default]
    Recommended,
    Essential,
    None,
}

/// Global build settings attached to the descriptor.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Settings {
    pub base: BTreeMap<String, String>,
    pub debug: BTreeMap<String, String>,
    pub release: BTreeMap<String, String>,
    pub defaults: DefaultSettings,
}

impl Settings {
    /// Settings with automatic code signing for the given development team
    /// seeded into `base`, empty debug/release overrides, recommended
    /// defaults.
    pub fn automatic_code_signing(development_team: &str) -> Self {
        let mut base = BTreeMap::new();
        base.insert("CODE_SIGN_STYLE".to_string(), "Automatic".to_string());
        base.insert(
            "DEVELOPMENT_TEAM".to_string(),
            development_team.to_string(),
        );
        Self {
            base,
            ..Self::default()
        }
    }
}

// ── ProjectDescriptor ─────────────────────────────────────────────────────────

/// The sole data contract at the downstream boundary.
///
/// Constructed once per generator run by the assembler, serialized through a
/// sink, never mutated afterwards. Target order is significant only in that
/// it is the order the consumer sees; it is stable across runs with
/// identical inputs.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectDescriptor {
    pub name: TargetName,
    pub organization: String,
    pub development_team: String,
    pub settings: Settings,
    pub targets: Vec<TargetSpec>,
}

impl ProjectDescriptor {
    pub fn target_names(&self) -> impl Iterator<Item = &TargetName> {
        self.targets.iter().map(|t| &t.name)
    }

    pub fn target_count(&self) -> usize {
        self.targets.len()
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn code_signing_seeds_base_settings() {
        let settings = Settings::automatic_code_signing("72SA8V3WYL");
        assert_eq!(
            settings.base.get("DEVELOPMENT_TEAM").map(String::as_str),
            Some("72SA8V3WYL")
        );
        assert_eq!(
            settings.base.get("CODE_SIGN_STYLE").map(String::as_str),
            Some("Automatic")
        );
        assert!(settings.debug.is_empty());
        assert!(settings.release.is_empty());
        assert_eq!(settings.defaults, DefaultSettings::Recommended);
    }

    #[test]
    fn settings_serialize_deterministically() {
        let a = serde_json::to_string(&Settings::automatic_code_signing("T")).unwrap();
        let b = serde_json::to_string(&Settings::automatic_code_signing("T")).unwrap();
        assert_eq!(a, b);
        // BTreeMap ordering: CODE_SIGN_STYLE before DEVELOPMENT_TEAM.
        assert!(a.find("CODE_SIGN_STYLE").unwrap() < a.find("DEVELOPMENT_TEAM").unwrap());
    }
}
