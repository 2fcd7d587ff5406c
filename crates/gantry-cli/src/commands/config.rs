//! `gantry config` — read configuration values.

use crate::{
    cli::ConfigCommands,
    config::AppConfig,
    error::{CliError, CliResult},
    output::Console,
};

/// Dispatch to the correct config subcommand.
pub fn execute(cmd: ConfigCommands, config: AppConfig, console: Console) -> CliResult<()> {
    match cmd {
        ConfigCommands::Get { key } => {
            let value = get_config_value(&config, &key)?;
            console.print(&format!("{key} = {value}"))?;
        }

        ConfigCommands::List => {
            console.header("Current Configuration:")?;
            let serialised =
                toml::to_string_pretty(&config).map_err(|e| CliError::ConfigError {
                    message: format!("Failed to serialise config: {e}"),
                    source: Some(Box::new(e)),
                })?;
            console.print(&serialised)?;
        }

        ConfigCommands::Path => {
            console.print(&AppConfig::config_path().display().to_string())?;
        }
    }

    Ok(())
}

// ── helpers ───────────────────────────────────────────────────────────────────

fn get_config_value(config: &AppConfig, key: &str) -> CliResult<String> {
    match key {
        "defaults.organization" => Ok(config.defaults.organization.clone()),
        "defaults.bundle_prefix" => Ok(config.defaults.bundle_prefix.clone()),
        "defaults.development_team" => Ok(config
            .defaults
            .development_team
            .clone()
            .unwrap_or_default()),
        "defaults.platform" => Ok(config.defaults.platform.clone()),
        "defaults.module_count" => Ok(config.defaults.module_count.to_string()),
        "defaults.replication_count" => Ok(config.defaults.replication_count.to_string()),
        "defaults.file_extension" => Ok(config.defaults.file_extension.clone()),
        "defaults.jobs" => Ok(config.defaults.jobs.to_string()),
        "defaults.packages" => Ok(config.defaults.packages.join(", ")),
        "output.no_color" => Ok(config.output.no_color.to_string()),
        "output.format" => Ok(config.output.format.clone()),
        _ => Err(CliError::ConfigError {
            message: format!("Unknown config key: '{key}'"),
            source: None,
        }),
    }
}

// ── tests ─────────────────────────────────────────────────────────────────────
