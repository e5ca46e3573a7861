//! Integration tests for the checkrun binary.
// The cargo_bin function is marked deprecated in favor of cargo_bin! macro,
// but both work correctly. Suppressing until assert_cmd stabilizes the new API.
#![allow(deprecated)]

use assert_cmd::cargo::cargo_bin;
use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const KINDS: [&str; 4] = ["style", "imports", "lint", "typecheck"];

/// Config whose checks are `sh` scripts that leave a `ran-<kind>` marker
/// and exit with the given code.
fn scripted_config(exits: [i32; 4]) -> String {
    let mut yaml = String::from("checks:\n");
    for (kind, code) in KINDS.iter().zip(exits) {
        yaml.push_str(&format!(
            "  - kind: {kind}\n    command: sh\n    args: [\"-c\", \"touch ran-{kind}; echo {kind} says $1; exit {code}\", \"sh\"]\n"
        ));
    }
    yaml
}

fn setup_project(config: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    fs::create_dir(temp.path().join("src")).unwrap();
    fs::write(temp.path().join(".checkrun.yml"), config).unwrap();
    temp
}

fn checkrun(dir: &Path) -> Command {
    let mut cmd = Command::new(cargo_bin("checkrun"));
    cmd.current_dir(dir)
        .env_remove("CHECKRUN_SOURCE_DIR")
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn ran(dir: &Path) -> Vec<&'static str> {
    KINDS
        .iter()
        .copied()
        .filter(|k| dir.join(format!("ran-{k}")).exists())
        .collect()
}

#[test]
fn cli_shows_help() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    checkrun(temp.path())
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("checkrun"))
        .stdout(predicate::str::contains("completions"));
    Ok(())
}

#[test]
fn cli_shows_version() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    checkrun(temp.path())
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_no_args_runs_every_check() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&scripted_config([0, 0, 0, 0]));
    checkrun(temp.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("All 4 checks passed"));
    assert_eq!(ran(temp.path()), KINDS);
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_typecheck_failure_alone_fails_the_run() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&scripted_config([0, 0, 0, 3]));
    checkrun(temp.path())
        .arg("run")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("1 of 4 checks failed: typecheck"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_fail_fast_stops_after_style() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&scripted_config([1, 0, 0, 0]));
    checkrun(temp.path())
        .args(["run", "--fail-fast"])
        .assert()
        .code(1);
    assert_eq!(ran(temp.path()), ["style"]);
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_collect_all_runs_past_failures() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&scripted_config([1, 0, 2, 0]));
    checkrun(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("style, lint"));
    assert_eq!(ran(temp.path()), KINDS);
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_failing_tool_output_is_shown() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&scripted_config([0, 0, 5, 0]));
    checkrun(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("lint says src"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_missing_source_dir_runs_nothing() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&scripted_config([0, 0, 0, 0]));
    fs::remove_dir(temp.path().join("src"))?;
    checkrun(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Source directory not found"));
    assert!(ran(temp.path()).is_empty());
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_source_dir_flag_and_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&scripted_config([0, 0, 0, 0]));
    fs::create_dir(temp.path().join("lib"))?;

    checkrun(temp.path())
        .args(["run", "--source-dir", "lib", "-v"])
        .assert()
        .success()
        .stdout(predicate::str::contains("style says lib"));

    checkrun(temp.path())
        .args(["run", "-v"])
        .env("CHECKRUN_SOURCE_DIR", "lib")
        .assert()
        .success()
        .stdout(predicate::str::contains("typecheck says lib"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_bare_invocation_reads_source_dir_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&scripted_config([0, 0, 0, 0]));
    fs::create_dir(temp.path().join("lib"))?;

    checkrun(temp.path())
        .arg("-v")
        .env("CHECKRUN_SOURCE_DIR", "lib")
        .assert()
        .success()
        .stdout(predicate::str::contains("style says lib"))
        .stdout(predicate::str::contains("typecheck says lib"));
    assert_eq!(ran(temp.path()), KINDS);
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_partial_config_keeps_remaining_checks() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(concat!(
        "checks:\n",
        "  - kind: typecheck\n    command: /bin/sh\n    args: [\"-c\", \"exit 0\", \"sh\"]\n",
    ));
    // No tools on PATH, so every default check is missing.
    checkrun(temp.path())
        .env("PATH", temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("3 of 4 checks failed: style, imports, lint"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_missing_tool_fails() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(concat!(
        "checks:\n",
        "  - kind: style\n    command: \"true\"\n",
        "  - kind: imports\n    command: \"true\"\n",
        "  - kind: lint\n    command: checkrun-no-such-linter\n",
        "  - kind: typecheck\n    command: \"true\"\n",
    ));
    checkrun(temp.path())
        .assert()
        .code(1)
        .stderr(predicate::str::contains("checkrun-no-such-linter"));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_json_report() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&scripted_config([0, 4, 0, 0]));
    let output = checkrun(temp.path())
        .args(["run", "--format", "json"])
        .output()?;

    assert_eq!(output.status.code(), Some(1));
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(doc["success"], false);
    assert_eq!(doc["source_dir"], "src");
    assert_eq!(doc["checks"][1]["kind"], "imports");
    assert_eq!(doc["checks"][1]["exit_code"], 4);
    assert_eq!(doc["checks"].as_array().map(Vec::len), Some(4));
    Ok(())
}

#[cfg(unix)]
#[test]
fn cli_only_and_skip() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project(&scripted_config([1, 0, 0, 1]));
    checkrun(temp.path())
        .args(["run", "--only", "imports,lint,typecheck", "--skip", "typecheck"])
        .assert()
        .success();
    assert_eq!(ran(temp.path()), ["imports", "lint"]);
    Ok(())
}

#[test]
fn cli_unknown_check_is_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("");
    checkrun(temp.path())
        .args(["run", "--only", "coverage"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Unknown check: coverage"));
    Ok(())
}

#[test]
fn cli_invalid_config_is_usage_error() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("source_dir: src\nretries: 3\n");
    checkrun(temp.path())
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Failed to parse config"));
    Ok(())
}

#[test]
fn cli_fail_fast_conflicts_with_keep_going() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    checkrun(temp.path())
        .args(["run", "--fail-fast", "--keep-going"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("cannot be used with"));
    Ok(())
}

#[test]
fn cli_list_json() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("source_dir: lib\n");
    let output = checkrun(temp.path()).args(["list", "--json"]).output()?;

    assert!(output.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(doc[0]["command"], "black --check lib");
    assert_eq!(doc[3]["command"], "mypy lib");
    Ok(())
}

#[test]
fn cli_list_reads_source_dir_env() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("source_dir: lib\n");
    let output = checkrun(temp.path())
        .args(["list", "--json"])
        .env("CHECKRUN_SOURCE_DIR", "app")
        .output()?;

    assert!(output.status.success());
    let doc: serde_json::Value = serde_json::from_slice(&output.stdout)?;
    assert_eq!(doc[0]["command"], "black --check app");
    Ok(())
}

#[test]
fn cli_list_rejects_duplicate_checks() -> Result<(), Box<dyn std::error::Error>> {
    let temp = setup_project("checks:\n  - kind: lint\n  - kind: lint\n");
    checkrun(temp.path())
        .arg("list")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("more than once"));
    Ok(())
}

#[test]
fn cli_config_schema() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    checkrun(temp.path())
        .args(["config", "--schema"])
        .assert()
        .success()
        .stdout(predicate::str::contains("source_dir"))
        .stdout(predicate::str::contains("collect_all"));
    Ok(())
}

#[test]
fn cli_config_with_explicit_file() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    fs::write(temp.path().join("ci.yml"), "policy: fail_fast\n")?;
    checkrun(temp.path())
        .args(["config", "-p", ".", "--config", "ci.yml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("policy: fail_fast"));
    Ok(())
}

#[test]
fn cli_completions_bash() -> Result<(), Box<dyn std::error::Error>> {
    let temp = TempDir::new()?;
    checkrun(temp.path())
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("checkrun"));
    Ok(())
}
