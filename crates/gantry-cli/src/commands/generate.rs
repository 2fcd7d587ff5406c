//! Implementation of the `gantry generate` command.
//!
//! Responsibility: translate CLI arguments into a core `GeneratorConfig`,
//! run the pipeline (graph → scaffold → assemble → emit), and display
//! results. No business logic lives here.
//!
//! Graph validation runs before any filesystem mutation; a validation
//! failure aborts the run with nothing written. Per-module scaffold failures
//! do not abort — they are collected and reported at the end, and the run
//! only fails outright when every module failed.

use std::path::Path;

use tracing::{debug, info, instrument};

use gantry_adapters::{builtin_stubs, JsonManifestSink, LocalFilesystem};
use gantry_core::domain::{generate_all_modules, StubTemplate, TARGETS_DIR};
use gantry_core::prelude::{
    CancelFlag, ManifestAssembler, ManifestSink as _, ScaffoldOptions, ScaffoldWriter,
    TargetGraphBuilder,
};

use crate::{
    cli::{GenerateArgs, GlobalArgs},
    config::AppConfig,
    error::{CliError, CliResult},
    output::Console,
};

/// Execute the `gantry generate` command.
///
/// Dispatch sequence:
/// 1. Build the generator config (CLI flags over config defaults)
/// 2. Synthesize module names and build + validate the target graph
/// 3. Early-exit if `--dry-run`
/// 4. Confirm with the user unless `--yes` or `--quiet`
/// 5. Scaffold all modules (parallel, per-module error aggregation)
/// 6. Assemble the descriptor and emit it through the manifest sink
/// 7. Print the scaffold report
#[instrument(skip_all, fields(app = %args.graph.name))]
pub fn execute(
    args: GenerateArgs,
    global: GlobalArgs,
    config: AppConfig,
    console: Console,
) -> CliResult<()> {
    // 1. Resolve configuration
    let generator = super::build_generator_config(&args.graph, &config)?;

    // 2. Names + graph. Validation failures land here, before any
    //    filesystem mutation.
    let modules = generate_all_modules(generator.app_name(), generator.module_count());
    let targets = TargetGraphBuilder::new(&generator)
        .build(&modules)
        .map_err(|e| CliError::Core(e.into()))?;

    debug!(
        modules = modules.len(),
        targets = targets.len(),
        "target graph validated"
    );

    let scaffold_root = args.root.join(TARGETS_DIR);

    // 3. Dry run: describe but do not write.
    if args.dry_run {
        console.header(&format!("Dry run for '{}'", generator.app_name()))?;
        console.detail("Platform:", &generator.platform().to_string())?;
        console.detail("Modules:", &format!("{} per family", generator.module_count()))?;
        console.detail("Replicas:", &generator.replication_count().to_string())?;
        console.detail("Targets:", &targets.len().to_string())?;
        console.detail("Root:", &scaffold_root.display().to_string())?;
        return Ok(());
    }

    // 4. Show configuration and confirm
    if !global.quiet && !args.yes {
        show_configuration(&generator, modules.len(), &scaffold_root, &console)?;
        if !confirm()? {
            return Err(CliError::Cancelled);
        }
    }

    // 5. Scaffold
    let (source_template, test_template) = load_templates(&args)?;
    let options = ScaffoldOptions::new(&scaffold_root)
        .with_file_extension(
            args.extension
                .clone()
                .unwrap_or_else(|| config.defaults.file_extension.clone()),
        )
        .with_jobs(args.jobs.unwrap_or(config.defaults.jobs));

    info!(root = %scaffold_root.display(), modules = modules.len(), "scaffold started");
    let spinner = console.scaffold_spinner(modules.len());
    let writer = ScaffoldWriter::new(Box::new(LocalFilesystem::new()));
    let report = writer
        .write_all(
            &modules,
            &source_template,
            &test_template,
            &options,
            &CancelFlag::new(),
        )
        .map_err(CliError::Core)?;
    spinner.finish_and_clear();

    if report.is_total_failure() {
        return Err(CliError::ScaffoldFailed {
            failed: report.failures.len(),
        });
    }

    // 6. Assemble + emit
    let descriptor =
        ManifestAssembler::assemble(&generator, targets).map_err(CliError::Core)?;
    let sink = manifest_sink(&args.manifest_out);
    sink.emit(&descriptor).map_err(CliError::Core)?;

    info!(
        run_id = %report.run_id,
        started_at = %report.started_at,
        targets = descriptor.target_count(),
        written = report.written.len(),
        failed = report.failures.len(),
        "generation finished"
    );

    // 7. Report
    if report.has_failures() {
        console.warning(&format!(
            "{} of {} modules failed to scaffold:",
            report.failures.len(),
            modules.len(),
        ))?;
        for failure in &report.failures {
            console.error(&format!("  {}: {}", failure.module, failure.error))?;
        }
    }
    console.success(&format!(
        "Generated {} targets, scaffolded {} modules",
        descriptor.target_count(),
        report.written.len(),
    ))?;

    Ok(())
}

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Resolve the source/test stub templates: user-supplied files win, the
/// built-in stubs are the fallback.
fn load_templates(args: &GenerateArgs) -> CliResult<(StubTemplate, StubTemplate)> {
    let source = match &args.source_template {
        Some(path) => read_template(path)?,
        None => builtin_stubs::source_stub().map_err(CliError::Core)?,
    };
    let test = match &args.test_template {
        Some(path) => read_template(path)?,
        None => builtin_stubs::test_stub().map_err(CliError::Core)?,
    };
    Ok((source, test))
}

fn read_template(path: &Path) -> CliResult<StubTemplate> {
    let text = std::fs::read_to_string(path).map_err(|e| CliError::TemplateFile {
        path: path.to_path_buf(),
        source: e,
    })?;
    StubTemplate::new(text).map_err(|e| CliError::Core(e.into()))
}

fn manifest_sink(out: &Path) -> JsonManifestSink {
    if out == Path::new("-") {
        JsonManifestSink::to_stdout()
    } else {
        JsonManifestSink::to_file(out)
    }
}

// ── UI helpers ────────────────────────────────────────────────────────────────

fn show_configuration(
    generator: &gantry_core::domain::GeneratorConfig,
    module_count: usize,
    root: &Path,
    console: &Console,
) -> CliResult<()> {
    console.header("Configuration")?;
    console.detail("App:", generator.app_name().as_str())?;
    console.detail("Platform:", &generator.platform().to_string())?;
    console.detail("Modules:", &format!("{module_count} (both families)"))?;
    console.detail("Replicas:", &generator.replication_count().to_string())?;
    console.detail("Packages:", &generator.external_packages().len().to_string())?;
    console.detail("Root:", &root.display().to_string())?;
    console.print("")?;
    Ok(())
}

fn confirm() -> CliResult<bool> {
    use std::io::{self, Write};

    print!("Continue? [Y/n] ");
    io::stdout().flush().map_err(|e| CliError::IoError {
        message: "failed to flush stdout".into(),
        source: e,
    })?;

    let mut input = String::new();
    io::stdin()
        .read_line(&mut input)
        .map_err(|e| CliError::IoError {
            message: "failed to read confirmation input".into(),
            source: e,
        })?;

    let input = input.trim().to_ascii_lowercase();
    Ok(input.is_empty() || input == "y" || input == "yes")
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn dash_means_stdout_sink() {
        // Just verify dispatch doesn't panic; the sink types are opaque.
        let _ = manifest_sink(Path::new("-"));
        let _ = manifest_sink(Path::new("manifest.json"));
    }

    #[test]
    fn missing_template_file_is_a_template_error() {
        let result = read_template(Path::new("/definitely/not/here.swift"));
        assert!(matches!(result, Err(CliError::TemplateFile { .. })));
    }
}
