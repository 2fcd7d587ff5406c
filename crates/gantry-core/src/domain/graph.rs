//! Dependency-graph validation.
//!
//! The directed graph formed by target edges (package references are leaves
//! and do not participate) must be acyclic, every referenced target must
//! exist, and every unit-test target must carry exactly one edge to a
//! non-test target. Name uniqueness is checked here as well so that a
//! caller-supplied app name colliding with a synthesized module name
//! surfaces before anything touches the filesystem.

use std::collections::HashMap;

use petgraph::algo::toposort;
use petgraph::graph::{DiGraph, NodeIndex};

use crate::domain::error::DomainError;
use crate::domain::name::{NameRegistry, TargetName};
use crate::domain::target::TargetSpec;

/// Validate the full target set.
///
/// Checks, in order: name uniqueness, bundle-id uniqueness (unless
/// `allow_duplicate_bundle_ids`), unit-test fan-out, edge resolution, and
/// acyclicity.
pub fn validate(targets: &[TargetSpec], allow_duplicate_bundle_ids: bool) -> Result<(), DomainError> {
    let mut registry = NameRegistry::new();
    for target in targets {
        registry.claim(&target.name)?;
    }

    if !allow_duplicate_bundle_ids {
        check_bundle_ids(targets)?;
    }

    let by_name: HashMap<&TargetName, &TargetSpec> =
        targets.iter().map(|t| (&t.name, t)).collect();

    for target in targets {
        if target.is_test() {
            check_test_fan_out(target, &by_name)?;
        }
        for dep in target.target_dependencies() {
            if !by_name.contains_key(dep) {
                return Err(DomainError::UnknownDependency {
                    target: target.name.to_string(),
                    missing: dep.to_string(),
                });
            }
        }
    }

    check_acyclic(targets, &by_name)
}

/// A unit-test target has exactly one dependency: a target edge to the
/// non-test target it tests.
fn check_test_fan_out(
    target: &TargetSpec,
    by_name: &HashMap<&TargetName, &TargetSpec>,
) -> Result<(), DomainError> {
    let edges: Vec<&TargetName> = target.target_dependencies().collect();
    if edges.len() != 1 || target.dependencies.len() != 1 {
        return Err(DomainError::TestDependencyCount {
            target: target.name.to_string(),
            found: target.dependencies.len(),
        });
    }

    let tested = edges[0];
    if let Some(dep) = by_name.get(tested) {
        if dep.is_test() {
            return Err(DomainError::TestDependsOnTest {
                target: target.name.to_string(),
                dependency: tested.to_string(),
            });
        }
    }
    // Unknown referents are reported by the caller's edge-resolution pass.
    Ok(())
}

fn check_bundle_ids(targets: &[TargetSpec]) -> Result<(), DomainError> {
    let mut seen: HashMap<&str, &TargetName> = HashMap::new();
    for target in targets {
        if let Some(first) = seen.insert(target.bundle_id.as_str(), &target.name) {
            return Err(DomainError::DuplicateBundleId {
                bundle_id: target.bundle_id.clone(),
                first: first.to_string(),
                second: target.name.to_string(),
            });
        }
    }
    Ok(())
}

/// Cycle check over the target edges via a topological sort.
fn check_acyclic(
    targets: &[TargetSpec],
    by_name: &HashMap<&TargetName, &TargetSpec>,
) -> Result<(), DomainError> {
    let mut graph: DiGraph<&TargetName, ()> = DiGraph::new();
    let mut nodes: HashMap<&TargetName, NodeIndex> = HashMap::with_capacity(targets.len());

    for target in targets {
        let idx = graph.add_node(&target.name);
        nodes.insert(&target.name, idx);
    }
    for target in targets {
        let from = nodes[&target.name];
        for dep in target.target_dependencies() {
            if by_name.contains_key(dep) {
                graph.add_edge(from, nodes[dep], ());
            }
        }
    }

    match toposort(&graph, None) {
        Ok(_) => Ok(()),
        Err(cycle) => Err(DomainError::DependencyCycle(
            graph[cycle.node_id()].to_string(),
        )),
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────
