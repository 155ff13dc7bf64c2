//! Process exit behaviour of the `preflight` binary

use std::path::Path;
use std::process::{Command, Output};

fn run(dir: &Path, properties: &str, args: &[&str]) -> Output {
    run_with_env(dir, properties, args, &[])
}

/// Runs the binary with only `env` as `PREFLIGHT_*` overrides; inherited ones are dropped
fn run_with_env(dir: &Path, properties: &str, args: &[&str], env: &[(&str, &str)]) -> Output {
    let config = dir.join("props.toml");
    std::fs::write(&config, properties).unwrap();

    let mut cmd = Command::new(env!("CARGO_BIN_EXE_preflight"));
    cmd.current_dir(dir).env_remove("RUST_LOG");
    for (key, _) in std::env::vars_os() {
        if key.to_string_lossy().starts_with("PREFLIGHT_") {
            cmd.env_remove(key);
        }
    }

    cmd.envs(env.iter().copied())
        .arg("--config")
        .arg(&config)
        .args(args)
        .output()
        .unwrap()
}

// No distribution matches this allow-list, so the run always has a finding.
const UNSUPPORTED_HOST: &str = r#"
es_heap_size = "1k"
supported_distros = ["no-such-distro"]
minimum_required_total_physical_memory_in_mb = 0
minimum_required_available_disk_space_in_gb = 0
allowed_heap_size_gap_in_mb = 0
"#;

#[test]
fn test_failed_validation_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), UNSUPPORTED_HOST, &["validate"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Validation Error: "), "{}", stderr);
}

#[test]
fn test_bypassed_validation_exits_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(
        dir.path(),
        UNSUPPORTED_HOST,
        &["validate", "--ignore-validations", "--format", "json"],
    );

    assert!(output.status.success(), "{:?}", output);
    let stdout = String::from_utf8_lossy(&output.stdout);
    assert!(stdout.contains("pass_with_warnings"), "{}", stdout);
}

#[test]
fn test_malformed_heap_exits_non_zero_even_with_bypass() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(
        dir.path(),
        "es_heap_size = \"two gigs\"\nignore_bootstrap_validations = true\n",
        &["validate"],
    );

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("Invalid size string"), "{}", stderr);
}

#[test]
fn test_missing_heap_exits_non_zero() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), "", &["validate"]);

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("es_heap_size"), "{}", stderr);
}

#[test]
fn test_failed_validation_still_prints_outcome() {
    let dir = tempfile::tempdir().unwrap();
    let output = run(dir.path(), UNSUPPORTED_HOST, &["validate", "--format", "json"]);

    assert!(!output.status.success());
    let stdout = String::from_utf8_lossy(&output.stdout);
    let value: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(value["outcome"], "fail");
}

#[test]
fn test_environment_bypass_overrides_file() {
    let dir = tempfile::tempdir().unwrap();
    let output = run_with_env(
        dir.path(),
        UNSUPPORTED_HOST,
        &["validate"],
        &[("PREFLIGHT_IGNORE_BOOTSTRAP_VALIDATIONS", "yes")],
    );

    assert!(output.status.success(), "{:?}", output);
}
