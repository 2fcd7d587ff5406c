//! `gantry plan` — build and validate the target graph, print a summary,
//! write nothing.

use std::collections::BTreeMap;

use tracing::instrument;

use gantry_core::domain::generate_all_modules;
use gantry_core::prelude::TargetGraphBuilder;

use crate::{
    cli::{GlobalArgs, OutputFormat, PlanArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::Console,
};

/// Execute the `gantry plan` command.
#[instrument(skip_all, fields(app = %args.graph.name))]
pub fn execute(
    args: PlanArgs,
    _global: GlobalArgs,
    config: AppConfig,
    console: Console,
) -> CliResult<()> {
    let generator = super::build_generator_config(&args.graph, &config)?;
    let modules = generate_all_modules(generator.app_name(), generator.module_count());
    let targets = TargetGraphBuilder::new(&generator)
        .build(&modules)
        .map_err(|e| CliError::Core(e.into()))?;

    let mut by_kind: BTreeMap<&'static str, usize> = BTreeMap::new();
    for target in &targets {
        *by_kind.entry(target.kind.as_str()).or_default() += 1;
    }

    if console.format() == OutputFormat::Json {
        let summary = serde_json::json!({
            "app": generator.app_name().as_str(),
            "platform": generator.platform().as_str(),
            "modules_per_family": generator.module_count(),
            "replicas": generator.replication_count(),
            "targets_by_kind": by_kind,
            "total_targets": targets.len(),
        });
        let rendered =
            serde_json::to_string_pretty(&summary).map_err(|e| CliError::InvalidInput {
                message: format!("failed to serialise plan summary: {e}"),
                source: Some(Box::new(e)),
            })?;
        println!("{rendered}");
        return Ok(());
    }

    console.header(&format!("Plan for '{}'", generator.app_name()))?;
    console.detail("Platform:", &generator.platform().to_string())?;
    console.detail(
        "Modules:",
        &format!("{} per family ({} total)", generator.module_count(), modules.len()),
    )?;
    console.detail("Replicas:", &generator.replication_count().to_string())?;
    console.print("")?;
    for (kind, count) in &by_kind {
        console.detail(&format!("{kind}:"), &count.to_string())?;
    }
    console.print("")?;
    console.success(&format!("{} targets, graph is valid", targets.len()))?;

    Ok(())
}
