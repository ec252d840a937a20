use assert_cmd::prelude::*;
use serde_json::{Value, json};
use std::fs;
use std::path::{Path, PathBuf};
use std::process::Command;

fn repo_root() -> PathBuf {
    let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
    manifest_dir
        .parent()
        .and_then(|p| p.parent())
        .expect("expected crates/<name> layout")
        .to_path_buf()
}

fn stdout_json(output: &std::process::Output) -> Value {
    serde_json::from_slice(&output.stdout).expect("stdout is JSON")
}

#[test]
fn cli_transforms_fixture_file() {
    let fixture = repo_root().join("fixtures").join("pie").join("pipeline.json");
    assert!(fixture.exists(), "fixture missing: {}", fixture.display());

    let exe = assert_cmd::cargo_bin!("chartdata-cli");
    let output = Command::new(exe)
        .args(["transform", "--type", "pie", fixture.to_string_lossy().as_ref()])
        .output()
        .expect("run chartdata-cli");
    assert!(output.status.success());

    let doc = stdout_json(&output);
    assert_eq!(doc["properties"]["colorLength"], json!(3));
    assert_eq!(doc["data"][0]["key"], json!("Prospecting"));
    assert_eq!(doc["data"][0]["value"], json!(1500.0));
}

#[test]
fn cli_reads_stdin_and_prints_table() {
    let exe = assert_cmd::cargo_bin!("chartdata-cli");
    let assert = assert_cmd::Command::new(exe)
        .args(["table", "--type", "multibar", "--bar-type", "grouped", "-"])
        .write_stdin(
            r#"{"label":["Q1","Q2"],"values":[{"label":"East","values":[1,2]},{"label":"West","values":[3,4]}]}"#,
        )
        .assert()
        .success();

    let doc: Value = serde_json::from_slice(&assert.get_output().stdout).expect("stdout is JSON");
    assert_eq!(
        doc["data"],
        json!([
            { "key": "Q1", "disabled": false, "values": [{ "x": 1, "y": 1.0 }, { "x": 2, "y": 3.0 }] },
            { "key": "Q2", "disabled": false, "values": [{ "x": 1, "y": 2.0 }, { "x": 2, "y": 4.0 }] }
        ])
    );
}

#[test]
fn cli_applies_config_overrides() {
    let tmp = tempfile::tempdir().expect("tempdir");
    let config = tmp.path().join("config.json");
    fs::write(&config, r#"{ "labels": { "placeholder": "n/a" } }"#).expect("write config");
    let input = tmp.path().join("input.json");
    fs::write(&input, r#"{ "values": [{ "values": [1, 2] }] }"#).expect("write input");

    let exe = assert_cmd::cargo_bin!("chartdata-cli");
    let output = Command::new(exe)
        .args([
            "--type",
            "pie",
            "--config",
            config.to_string_lossy().as_ref(),
            input.to_string_lossy().as_ref(),
        ])
        .output()
        .expect("run chartdata-cli");
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["data"][0]["key"], json!("n/a"));
}

#[test]
fn cli_rejects_unknown_chart_type_with_usage_exit_code() {
    let exe = assert_cmd::cargo_bin!("chartdata-cli");
    Command::new(exe)
        .args(["--type", "scatter"])
        .assert()
        .code(2);
}

#[test]
fn cli_reports_invalid_input_json() {
    let exe = assert_cmd::cargo_bin!("chartdata-cli");
    assert_cmd::Command::new(exe)
        .args(["--type", "pie"])
        .write_stdin("{not json")
        .assert()
        .code(1);
}

#[test]
fn cli_lists_chart_types() {
    let exe = assert_cmd::cargo_bin!("chartdata-cli");
    let output = Command::new(exe).arg("types").output().expect("run chartdata-cli");
    assert!(output.status.success());
    let stdout = String::from_utf8(output.stdout).expect("utf-8 stdout");
    let types: Vec<&str> = stdout.lines().collect();
    assert_eq!(types.len(), 11);
    assert!(types.contains(&"multibar"));
    assert!(types.contains(&"pareto"));
}
