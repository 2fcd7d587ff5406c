//! Command handlers. Each submodule implements one subcommand; shared
//! argument-to-core translation lives here.

pub mod completions;
pub mod config;
pub mod generate;
pub mod init;
pub mod plan;

use gantry_core::domain::{GeneratorConfig, PackageRef, Platform, TargetName};

use crate::{
    cli::{GraphArgs, PlatformArg},
    config::AppConfig,
    error::{CliError, CliResult},
};

/// Translate CLI graph arguments + loaded config into a validated core
/// [`GeneratorConfig`]. CLI flags win over config-file defaults.
pub(crate) fn build_generator_config(
    args: &GraphArgs,
    config: &AppConfig,
) -> CliResult<GeneratorConfig> {
    let app_name = TargetName::new(args.name.clone()).map_err(|e| CliError::InvalidAppName {
        name: args.name.clone(),
        reason: e.to_string(),
    })?;

    let team = args
        .team
        .clone()
        .or_else(|| config.defaults.development_team.clone())
        .ok_or(CliError::MissingDevelopmentTeam)?;

    let platform = match args.platform {
        Some(p) => convert_platform(p),
        None => config
            .defaults
            .platform
            .parse::<Platform>()
            .map_err(|e| CliError::ConfigError {
                message: format!("defaults.platform: {e}"),
                source: None,
            })?,
    };

    let package_names = if args.packages.is_empty() {
        config.defaults.packages.clone()
    } else {
        args.packages.clone()
    };
    let packages = package_names
        .into_iter()
        .map(PackageRef::new)
        .collect::<Result<Vec<_>, _>>()
        .map_err(|e| CliError::Core(e.into()))?;

    GeneratorConfig::builder()
        .app_name(app_name)
        .platform(platform)
        .module_count(args.modules.unwrap_or(config.defaults.module_count))
        .replication_count(args.replicas.unwrap_or(config.defaults.replication_count))
        .external_packages(packages)
        .organization(
            args.organization
                .clone()
                .unwrap_or_else(|| config.defaults.organization.clone()),
        )
        .bundle_id_prefix(
            args.bundle_prefix
                .clone()
                .unwrap_or_else(|| config.defaults.bundle_prefix.clone()),
        )
        .development_team(team)
        .allow_duplicate_bundle_ids(!args.deny_duplicate_bundle_ids)
        .build()
        .map_err(|e| CliError::Core(e.into()))
}

fn convert_platform(platform: PlatformArg) -> Platform {
    match platform {
        PlatformArg::Ios => Platform::Ios,
        PlatformArg::Macos => Platform::Macos,
        PlatformArg::Tvos => Platform::Tvos,
        PlatformArg::Watchos => Platform::Watchos,
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    fn graph_args(name: &str) -> GraphArgs {
        GraphArgs {
            name: name.into(),
            modules: None,
            replicas: None,
            platform: None,
            team: Some("72SA8V3WYL".into()),
            organization: None,
            bundle_prefix: None,
            packages: Vec::new(),
            deny_duplicate_bundle_ids: false,
        }
    }

    #[test]
    fn config_defaults_flow_into_generator_config() {
        let config = AppConfig::default();
        let generated = build_generator_config(&graph_args("TuistApp"), &config).unwrap();
        assert_eq!(generated.module_count(), 300);
        assert_eq!(generated.replication_count(), 300);
        assert_eq!(generated.organization(), "tuist.io");
        assert_eq!(generated.external_packages().len(), 10);
        assert_eq!(generated.platform(), Platform::Ios);
    }

    #[test]
    fn cli_flags_override_config_defaults() {
        let config = AppConfig::default();
        let mut args = graph_args("MyApp");
        args.modules = Some(2);
        args.replicas = Some(0);
        args.platform = Some(PlatformArg::Macos);
        args.packages = vec!["OnlyOne".into()];

        let generated = build_generator_config(&args, &config).unwrap();
        assert_eq!(generated.module_count(), 2);
        assert_eq!(generated.replication_count(), 0);
        assert_eq!(generated.platform(), Platform::Macos);
        assert_eq!(generated.external_packages().len(), 1);
    }

    #[test]
    fn missing_team_everywhere_is_a_config_error() {
        let config = AppConfig::default(); // no team in defaults
        let mut args = graph_args("MyApp");
        args.team = None;
        assert!(matches!(
            build_generator_config(&args, &config),
            Err(CliError::MissingDevelopmentTeam)
        ));
    }

    #[test]
    fn invalid_app_name_is_rejected_up_front() {
        let config = AppConfig::default();
        assert!(matches!(
            build_generator_config(&graph_args("My App"), &config),
            Err(CliError::InvalidAppName { .. })
        ));
    }

    #[test]
    fn duplicate_bundle_id_flag_flips_the_policy() {
        let config = AppConfig::default();
        let mut args = graph_args("MyApp");
        args.deny_duplicate_bundle_ids = true;
        let generated = build_generator_config(&args, &config).unwrap();
        assert!(!generated.allow_duplicate_bundle_ids());
    }
}
