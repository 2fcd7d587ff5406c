//! Scaffold writer - materialises module trees through the filesystem port.
//!
//! For each module: a root directory with `Sources/` and `Tests/` beneath
//! it, plus one rendered stub file in each. Directory creation is
//! idempotent and each file write is atomic, but a module as a whole is
//! *not* transactional — a failure mid-module leaves a partial tree behind.
//!
//! Batch policy: one module's failure never aborts the batch. Failures are
//! recorded per module in the [`ScaffoldReport`] and the remaining modules
//! keep going; the run only counts as failed when every module failed.
//! Independent modules own disjoint subtrees, so the batch fans out across
//! a bounded worker pool, and a caller-supplied cancel flag is honoured
//! between modules.

use std::path::PathBuf;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use chrono::{DateTime, Utc};
use rayon::prelude::*;
use tracing::{debug, instrument, warn};
use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::application::ports::Filesystem;
use crate::domain::{ModuleSpec, StubTemplate, TargetName, SOURCES_DIR, TESTS_DIR};
use crate::error::{GantryError, GantryResult};

// ── Options ───────────────────────────────────────────────────────────────────

/// Where and how the scaffold is written.
#[derive(Debug, Clone)]
pub struct ScaffoldOptions {
    /// Root directory every module tree is created under.
    pub root: PathBuf,
    /// Extension of the generated stub files.
    pub file_extension: String,
    /// Worker-pool size; `0` lets the pool pick based on available cores,
    /// capped to avoid file-descriptor exhaustion at large module counts.
    pub jobs: usize,
}

impl ScaffoldOptions {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            file_extension: "swift".to_string(),
            jobs: 0,
        }
    }

    pub fn with_file_extension(mut self, extension: impl Into<String>) -> Self {
        self.file_extension = extension.into();
        self
    }

    pub fn with_jobs(mut self, jobs: usize) -> Self {
        self.jobs = jobs;
        self
    }

    fn effective_jobs(&self) -> usize {
        if self.jobs > 0 {
            self.jobs
        } else {
            std::thread::available_parallelism()
                .map(|n| n.get().min(8))
                .unwrap_or(1)
        }
    }
}

// ── Cancellation ──────────────────────────────────────────────────────────────

/// Cooperative cancellation flag, checked between module-scaffolding units.
#[derive(Debug, Clone, Default)]
pub struct CancelFlag(Arc<AtomicBool>);

impl CancelFlag {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn cancel(&self) {
        self.0.store(true, Ordering::Relaxed);
    }

    pub fn is_cancelled(&self) -> bool {
        self.0.load(Ordering::Relaxed)
    }
}

// ── Report ────────────────────────────────────────────────────────────────────

/// One module that could not be scaffolded, with its cause.
#[derive(Debug, Clone)]
pub struct ModuleFailure {
    pub module: TargetName,
    pub error: GantryError,
}

/// Aggregated outcome of a scaffold batch.
#[derive(Debug, Clone)]
pub struct ScaffoldReport {
    /// Identity of this run, for provenance in logs and summaries.
    pub run_id: Uuid,
    pub started_at: DateTime<Utc>,
    /// Modules written completely, in input order.
    pub written: Vec<TargetName>,
    /// Modules that failed, with their causes, in input order.
    pub failures: Vec<ModuleFailure>,
    /// Modules skipped because the batch was cancelled first.
    pub skipped: Vec<TargetName>,
}

impl ScaffoldReport {
    pub fn has_failures(&self) -> bool {
        !self.failures.is_empty()
    }

    /// A batch with at least one attempted module where nothing succeeded.
    pub fn is_total_failure(&self) -> bool {
        self.written.is_empty() && !self.failures.is_empty()
    }
}

// ── Writer ────────────────────────────────────────────────────────────────────

enum ModuleOutcome {
    Written(TargetName),
    Failed(ModuleFailure),
    Skipped(TargetName),
}

/// Writes module scaffolds through the [`Filesystem`] port.
pub struct ScaffoldWriter {
    filesystem: Box<dyn Filesystem>,
}

impl ScaffoldWriter {
    pub fn new(filesystem: Box<dyn Filesystem>) -> Self {
        Self { filesystem }
    }

    /// Scaffold a single module: directories, rendered source stub, rendered
    /// test stub.
    pub fn write_module(
        &self,
        module: &ModuleSpec,
        source_template: &StubTemplate,
        test_template: &StubTemplate,
        options: &ScaffoldOptions,
    ) -> GantryResult<()> {
        let module_root = options.root.join(module.name().as_str());
        let sources_dir = module_root.join(SOURCES_DIR);
        let tests_dir = module_root.join(TESTS_DIR);

        self.filesystem.create_dir_all(&sources_dir)?;
        self.filesystem.create_dir_all(&tests_dir)?;

        self.filesystem.write_file_atomic(
            &sources_dir.join(module.source_file_name(&options.file_extension)),
            &source_template.render(module.name()),
        )?;
        self.filesystem.write_file_atomic(
            &tests_dir.join(module.test_file_name(&options.file_extension)),
            &test_template.render(module.name()),
        )?;

        Ok(())
    }

    /// Scaffold the whole batch.
    ///
    /// Returns `Ok(report)` even when some modules failed — callers decide
    /// what success-with-errors means for them via
    /// [`ScaffoldReport::is_total_failure`]. Only worker-pool construction
    /// itself is a hard error.
    #[instrument(skip_all, fields(modules = modules.len(), root = %options.root.display()))]
    pub fn write_all(
        &self,
        modules: &[ModuleSpec],
        source_template: &StubTemplate,
        test_template: &StubTemplate,
        options: &ScaffoldOptions,
        cancel: &CancelFlag,
    ) -> GantryResult<ScaffoldReport> {
        let run_id = Uuid::new_v4();
        let started_at = Utc::now();

        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(options.effective_jobs())
            .build()
            .map_err(|e| ApplicationError::WorkerPool {
                reason: e.to_string(),
            })?;

        let outcomes: Vec<ModuleOutcome> = pool.install(|| {
            modules
                .par_iter()
                .map(|module| {
                    if cancel.is_cancelled() {
                        return ModuleOutcome::Skipped(module.name().clone());
                    }
                    match self.write_module(module, source_template, test_template, options) {
                        Ok(()) => ModuleOutcome::Written(module.name().clone()),
                        Err(error) => ModuleOutcome::Failed(ModuleFailure {
                            module: module.name().clone(),
                            error,
                        }),
                    }
                })
                .collect()
        });

        let mut report = ScaffoldReport {
            run_id,
            started_at,
            written: Vec::new(),
            failures: Vec::new(),
            skipped: Vec::new(),
        };
        for outcome in outcomes {
            match outcome {
                ModuleOutcome::Written(name) => report.written.push(name),
                ModuleOutcome::Failed(failure) => {
                    warn!(module = %failure.module, error = %failure.error, "module scaffold failed");
                    report.failures.push(failure);
                }
                ModuleOutcome::Skipped(name) => report.skipped.push(name),
            }
        }

        debug!(
            run_id = %report.run_id,
            written = report.written.len(),
            failed = report.failures.len(),
            skipped = report.skipped.len(),
            "scaffold batch finished"
        );
        Ok(report)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
//
// Unit tests here use a minimal in-crate fake; the full suite against the
// real adapters (including fault injection and on-disk atomicity) lives in
// the gantry-adapters integration tests.
