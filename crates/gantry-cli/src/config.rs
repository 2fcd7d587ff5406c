//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value. The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `GANTRY_*` environment variables (e.g. `GANTRY_DEFAULTS__ORGANIZATION`)
//! 3. Config file (`--config`, or the default location)
//! 4. Built-in defaults (always present)

use std::path::PathBuf;

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Default values for generation runs.
    pub defaults: Defaults,
    /// Output settings.
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Defaults {
    pub organization: String,
    pub bundle_prefix: String,
    pub development_team: Option<String>,
    pub platform: String,
    pub module_count: u32,
    pub replication_count: u32,
    pub packages: Vec<String>,
    pub file_extension: String,
    pub jobs: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    pub no_color: bool,
    pub format: String,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            defaults: Defaults {
                organization: "tuist.io".into(),
                bundle_prefix: "io.tuist".into(),
                development_team: None,
                platform: "ios".into(),
                // Stress-scale defaults: 300 modules per family and 300
                // replicated app/test pairs.
                module_count: 300,
                replication_count: 300,
                packages: vec![
                    "Alamofire".into(),
                    "RxSwift".into(),
                    "Moya".into(),
                    "Promises".into(),
                    "SnapKit".into(),
                    "TinyConstraints".into(),
                    "Defaults".into(),
                    "CombineExt".into(),
                    "CombineCocoa".into(),
                    "SpotifyAPI".into(),
                ],
                file_extension: "swift".into(),
                jobs: 0,
            },
            output: OutputConfig {
                no_color: false,
                format: "human".into(),
            },
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then file, then environment.
    ///
    /// An explicitly passed `--config` file must exist; the default location
    /// is optional.
    pub fn load(config_file: Option<&PathBuf>) -> anyhow::Result<Self> {
        let mut builder = config::Config::builder()
            .add_source(config::Config::try_from(&AppConfig::default())?);

        builder = match config_file {
            Some(path) => builder.add_source(config::File::from(path.clone()).required(true)),
            None => builder.add_source(config::File::from(Self::config_path()).required(false)),
        };

        builder = builder.add_source(
            config::Environment::with_prefix("GANTRY")
                .separator("__")
                .try_parsing(true),
        );

        builder
            .build()
            .context("failed to read configuration")?
            .try_deserialize()
            .context("configuration has invalid shape")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.gantry.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("com", "gantry", "gantry")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".gantry.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_stress_scale() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.defaults.organization, "tuist.io");
        assert_eq!(cfg.defaults.bundle_prefix, "io.tuist");
        assert_eq!(cfg.defaults.module_count, 300);
        assert_eq!(cfg.defaults.replication_count, 300);
        assert_eq!(cfg.defaults.packages.len(), 10);
        assert_eq!(cfg.defaults.packages[0], "Alamofire");
        assert!(cfg.defaults.development_team.is_none());
    }

    #[test]
    fn load_without_file_returns_defaults() {
        let cfg = AppConfig::load(None).unwrap();
        assert_eq!(cfg.defaults.file_extension, "swift");
        assert_eq!(cfg.defaults.jobs, 0);
    }

    #[test]
    fn missing_explicit_config_file_is_an_error() {
        let missing = PathBuf::from("/definitely/not/here/gantry.toml");
        assert!(AppConfig::load(Some(&missing)).is_err());
    }

    #[test]
    fn config_path_is_non_empty() {
        assert!(!AppConfig::config_path().as_os_str().is_empty());
    }
}
