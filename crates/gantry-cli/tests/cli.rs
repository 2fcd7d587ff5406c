//! Integration tests for the gantry binary.

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn gantry() -> Command {
    let mut cmd = Command::cargo_bin("gantry").unwrap();
    cmd.env("NO_COLOR", "1");
    cmd
}

#[test]
fn help_flag_shows_usage() {
    gantry()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("gantry"))
        .stdout(predicate::str::contains("generate"))
        .stdout(predicate::str::contains("plan"));
}

#[test]
fn version_flag_matches_cargo() {
    gantry()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn generate_scaffolds_modules_and_writes_the_manifest() {
    let temp = TempDir::new().unwrap();
    let manifest = temp.path().join("manifest.json");

    gantry()
        .args([
            "generate",
            "TuistApp",
            "--modules",
            "2",
            "--replicas",
            "1",
            "--team",
            "72SA8V3WYL",
            "--yes",
        ])
        .arg("--root")
        .arg(temp.path())
        .arg("--manifest-out")
        .arg(&manifest)
        .assert()
        .success();

    // Scaffold: <root>/Targets/<module>/{Sources,Tests}/<files>
    for name in ["TuistAppKit0", "TuistAppKit1", "TuistAppUI0", "TuistAppUI1"] {
        let source = temp
            .path()
            .join("Targets")
            .join(name)
            .join("Sources")
            .join(format!("{name}.swift"));
        let test = temp
            .path()
            .join("Targets")
            .join(name)
            .join("Tests")
            .join(format!("{name}Tests.swift"));
        assert!(source.exists(), "missing {}", source.display());
        assert!(test.exists(), "missing {}", test.display());

        let body = std::fs::read_to_string(&source).unwrap();
        assert!(body.contains(&format!("public final class {name}")));
        assert!(!body.contains("???"));
    }

    // Manifest: 7 fixed + 8 module targets + 2 replicated = 17.
    let manifest: serde_json::Value =
        serde_json::from_str(&std::fs::read_to_string(&manifest).unwrap()).unwrap();
    assert_eq!(manifest["name"], "TuistApp");
    assert_eq!(manifest["organization"], "tuist.io");
    assert_eq!(manifest["targets"].as_array().unwrap().len(), 17);
    assert_eq!(
        manifest["settings"]["base"]["DEVELOPMENT_TEAM"],
        "72SA8V3WYL"
    );
}

#[test]
fn generate_twice_is_deterministic() {
    let temp = TempDir::new().unwrap();
    let first = temp.path().join("a.json");
    let second = temp.path().join("b.json");

    for manifest in [&first, &second] {
        gantry()
            .args([
                "generate", "MyApp", "-m", "1", "-r", "2", "--team", "T1", "--yes",
            ])
            .arg("--root")
            .arg(temp.path())
            .arg("--manifest-out")
            .arg(manifest)
            .assert()
            .success();
    }

    assert_eq!(
        std::fs::read(&first).unwrap(),
        std::fs::read(&second).unwrap(),
    );
}

#[test]
fn dry_run_writes_nothing() {
    let temp = TempDir::new().unwrap();

    gantry()
        .args([
            "generate", "MyApp", "-m", "3", "--team", "T1", "--dry-run",
        ])
        .arg("--root")
        .arg(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Dry run"));

    assert!(!temp.path().join("Targets").exists());
}

#[test]
fn invalid_app_name_exits_with_user_error() {
    gantry()
        .args(["plan", "Bad/Name", "-m", "0", "-r", "0", "--team", "T"])
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("Invalid app name"));
}

#[test]
fn app_name_colliding_with_extension_target_fails_validation() {
    let temp = TempDir::new().unwrap();

    gantry()
        .args(["generate", "Widget", "-m", "0", "-r", "0", "--team", "T", "--yes"])
        .arg("--root")
        .arg(temp.path())
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("duplicate target name"));

    // Validation aborts before any filesystem mutation.
    assert!(!temp.path().join("Targets").exists());
}

#[test]
fn missing_team_is_a_configuration_error() {
    gantry()
        .args(["plan", "MyApp", "-m", "0", "-r", "0"])
        .assert()
        .failure()
        .code(4)
        .stderr(predicate::str::contains("development team"));
}

#[test]
fn plan_json_reports_the_fixed_seven() {
    let output = gantry()
        .args([
            "plan",
            "MyApp",
            "-m",
            "0",
            "-r",
            "0",
            "--team",
            "T",
            "--output-format",
            "json",
        ])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let summary: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(summary["total_targets"], 7);
    assert_eq!(summary["targets_by_kind"]["app"], 1);
    assert_eq!(summary["targets_by_kind"]["app-extension"], 4);
    assert_eq!(summary["targets_by_kind"]["app-clip"], 1);
    assert_eq!(summary["targets_by_kind"]["unit-tests"], 1);
}

#[test]
fn config_list_prints_defaults() {
    gantry()
        .args(["config", "list"])
        .assert()
        .success()
        .stdout(predicate::str::contains("organization"))
        .stdout(predicate::str::contains("tuist.io"));
}

#[test]
fn config_get_unknown_key_exits_with_config_error() {
    gantry()
        .args(["config", "get", "no.such.key"])
        .assert()
        .failure()
        .code(4);
}

#[test]
fn completions_emit_a_bash_script() {
    gantry()
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("gantry"));
}
