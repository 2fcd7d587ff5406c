//! End-to-end pipeline tests: name generation → target graph → scaffold →
//! assembly, driven through the real adapters.

use std::path::Path;

use gantry_adapters::{builtin_stubs, JsonManifestSink, LocalFilesystem, MemoryFilesystem};
use gantry_core::domain::{generate_all_modules, GeneratorConfig, PackageRef, TargetName};
use gantry_core::prelude::*;

fn config(modules: u32, replicas: u32) -> GeneratorConfig {
    GeneratorConfig::builder()
        .app_name(TargetName::new("TuistApp").unwrap())
        .development_team("72SA8V3WYL")
        .module_count(modules)
        .replication_count(replicas)
        .external_packages(
            ["Alamofire", "RxSwift", "Moya"].map(|p| PackageRef::new(p).unwrap()),
        )
        .build()
        .unwrap()
}

fn stubs() -> (StubTemplate, StubTemplate) {
    (
        builtin_stubs::source_stub().unwrap(),
        builtin_stubs::test_stub().unwrap(),
    )
}

#[test]
fn scaffold_writes_the_expected_tree_on_disk() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("Targets");
    let config = config(2, 0);
    let modules = generate_all_modules(config.app_name(), config.module_count());
    let (source, test) = stubs();

    let writer = ScaffoldWriter::new(Box::new(LocalFilesystem::new()));
    let report = writer
        .write_all(
            &modules,
            &source,
            &test,
            &ScaffoldOptions::new(&root),
            &CancelFlag::new(),
        )
        .unwrap();

    assert_eq!(report.written.len(), 4);
    assert!(!report.has_failures());

    for name in ["TuistAppKit0", "TuistAppKit1", "TuistAppUI0", "TuistAppUI1"] {
        let source_file = root.join(name).join("Sources").join(format!("{name}.swift"));
        let test_file = root
            .join(name)
            .join("Tests")
            .join(format!("{name}Tests.swift"));
        let body = std::fs::read_to_string(&source_file).unwrap();
        assert!(body.contains(&format!("public final class {name}")));
        assert!(!body.contains("???"));
        assert!(test_file.exists(), "missing {}", test_file.display());
    }
}

#[test]
fn rerunning_with_identical_inputs_is_byte_identical() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path().join("Targets");
    let config = config(1, 1);
    let modules = generate_all_modules(config.app_name(), config.module_count());
    let (source, test) = stubs();
    let writer = ScaffoldWriter::new(Box::new(LocalFilesystem::new()));
    let options = ScaffoldOptions::new(&root);

    writer
        .write_all(&modules, &source, &test, &options, &CancelFlag::new())
        .unwrap();
    let stub_path = root.join("TuistAppKit0/Sources/TuistAppKit0.swift");
    let first = std::fs::read(&stub_path).unwrap();

    // Second run against the now-populated destination overwrites in place.
    writer
        .write_all(&modules, &source, &test, &options, &CancelFlag::new())
        .unwrap();
    assert_eq!(std::fs::read(&stub_path).unwrap(), first);

    // The descriptor is just as stable.
    let targets_a = TargetGraphBuilder::new(&config).build(&modules).unwrap();
    let targets_b = TargetGraphBuilder::new(&config).build(&modules).unwrap();
    let a = ManifestAssembler::assemble(&config, targets_a).unwrap();
    let b = ManifestAssembler::assemble(&config, targets_b).unwrap();
    let manifest_a = dir.path().join("a.json");
    let manifest_b = dir.path().join("b.json");
    JsonManifestSink::to_file(&manifest_a).emit(&a).unwrap();
    JsonManifestSink::to_file(&manifest_b).emit(&b).unwrap();
    assert_eq!(
        std::fs::read(&manifest_a).unwrap(),
        std::fs::read(&manifest_b).unwrap()
    );
}

#[test]
fn forced_failure_on_one_module_leaves_the_rest_intact() {
    let fs = MemoryFilesystem::new();
    fs.fail_on("/out/Targets/TuistAppKit1");

    let config = config(3, 0);
    let modules = generate_all_modules(config.app_name(), config.module_count());
    let (source, test) = stubs();
    let writer = ScaffoldWriter::new(Box::new(fs.clone()));

    let report = writer
        .write_all(
            &modules,
            &source,
            &test,
            &ScaffoldOptions::new("/out/Targets"),
            &CancelFlag::new(),
        )
        .unwrap();

    assert_eq!(report.failures.len(), 1);
    assert_eq!(report.failures[0].module.as_str(), "TuistAppKit1");
    assert_eq!(report.written.len(), 5);
    assert!(!report.is_total_failure());

    // Every healthy module is fully scaffolded.
    for name in ["TuistAppKit0", "TuistAppKit2", "TuistAppUI0", "TuistAppUI1", "TuistAppUI2"] {
        let path = format!("/out/Targets/{name}/Sources/{name}.swift");
        assert!(fs.exists(Path::new(&path)), "missing {path}");
    }
    // The broken one left nothing behind.
    assert!(!fs.exists(Path::new(
        "/out/Targets/TuistAppKit1/Sources/TuistAppKit1.swift"
    )));
}

#[test]
fn cancellation_between_modules_is_honoured() {
    let config = config(5, 0);
    let modules = generate_all_modules(config.app_name(), config.module_count());
    let (source, test) = stubs();
    let writer = ScaffoldWriter::new(Box::new(MemoryFilesystem::new()));
    let cancel = CancelFlag::new();
    cancel.cancel();

    let report = writer
        .write_all(
            &modules,
            &source,
            &test,
            &ScaffoldOptions::new("/out/Targets"),
            &cancel,
        )
        .unwrap();

    assert!(report.written.is_empty());
    assert_eq!(report.skipped.len(), modules.len());
}

#[test]
fn full_pipeline_produces_the_documented_target_counts() {
    for (modules, replicas, expected) in [(0, 0, 7), (2, 1, 17), (3, 2, 23)] {
        let config = config(modules, replicas);
        let specs = generate_all_modules(config.app_name(), config.module_count());
        let targets = TargetGraphBuilder::new(&config).build(&specs).unwrap();
        let descriptor = ManifestAssembler::assemble(&config, targets).unwrap();
        assert_eq!(
            descriptor.target_count(),
            expected,
            "modules={modules} replicas={replicas}"
        );
    }
}

#[test]
fn every_test_target_in_the_descriptor_resolves() {
    let config = config(4, 3);
    let specs = generate_all_modules(config.app_name(), config.module_count());
    let targets = TargetGraphBuilder::new(&config).build(&specs).unwrap();
    let descriptor = ManifestAssembler::assemble(&config, targets).unwrap();

    for test in descriptor.targets.iter().filter(|t| t.is_test()) {
        let deps: Vec<_> = test.target_dependencies().collect();
        assert_eq!(deps.len(), 1);
        let tested = descriptor
            .targets
            .iter()
            .find(|t| &t.name == deps[0])
            .unwrap_or_else(|| panic!("{} points at a missing target", test.name));
        assert!(!tested.is_test());
    }
}
