//! Manifest assembler - merges targets and global settings into the final
//! project descriptor.
//!
//! Pure aggregation. The graph builder already guarantees a valid target
//! set; the duplicate-name and edge-resolution checks here are defensive
//! only, and tripping one means an upstream bug rather than bad user input.

use std::collections::HashSet;

use tracing::{debug, instrument};

use crate::application::error::ApplicationError;
use crate::domain::{GeneratorConfig, ProjectDescriptor, Settings, TargetSpec};
use crate::error::GantryResult;

pub struct ManifestAssembler;

impl ManifestAssembler {
    /// Assemble the final descriptor from a validated target set.
    #[instrument(skip_all, fields(app = %config.app_name(), targets = targets.len()))]
    pub fn assemble(
        config: &GeneratorConfig,
        targets: Vec<TargetSpec>,
    ) -> GantryResult<ProjectDescriptor> {
        let mut seen = HashSet::with_capacity(targets.len());
        for target in &targets {
            if !seen.insert(&target.name) {
                return Err(ApplicationError::DuplicateAssembledName {
                    name: target.name.to_string(),
                }
                .into());
            }
        }
        for target in &targets {
            for dep in target.target_dependencies() {
                if !seen.contains(dep) {
                    return Err(ApplicationError::DanglingReference {
                        target: target.name.to_string(),
                        missing: dep.to_string(),
                    }
                    .into());
                }
            }
        }

        debug!("descriptor assembled");
        Ok(ProjectDescriptor {
            name: config.app_name().clone(),
            organization: config.organization().to_string(),
            development_team: config.development_team().to_string(),
            settings: Settings::automatic_code_signing(config.development_team()),
            targets,
        })
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
