//! CLI argument, input and output tests.

#![allow(deprecated)] // cargo_bin deprecation

use std::fs;

use assert_cmd::Command;
use predicates::prelude::*;

const REQUEST: &str = r#"{
    "image": {"width": 800, "height": 600},
    "faces": [
        {"bounds": {"x": 80, "y": 60, "width": 160, "height": 200}},
        {"bounds": {"x": 400, "y": 300, "width": 90, "height": 100},
         "landmarks": {"left_eye": {"x": 420, "y": 330}, "right_eye": {"x": 465, "y": 330}},
         "smiling_probability": 0.1}
    ]
}"#;

fn cmd_in(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("face-attrs").unwrap();
    cmd.current_dir(dir);
    cmd
}

fn write_request(dir: &std::path::Path, body: &str) -> std::path::PathBuf {
    let path = dir.join("faces.json");
    fs::write(&path, body).unwrap();
    path
}

#[test]
fn missing_input_shows_error() {
    let dir = tempfile::tempdir().unwrap();
    cmd_in(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("required").or(predicate::str::contains("INPUT")));
}

#[test]
fn nonexistent_input_fails() {
    let dir = tempfile::tempdir().unwrap();
    cmd_in(dir.path())
        .arg("no-such-file.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("I/O error"));
}

#[test]
fn malformed_json_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_request(dir.path(), "{ not json");
    cmd_in(dir.path())
        .arg(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("JSON error"));
}

#[test]
fn zero_image_size_fails() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_request(dir.path(), r#"{"image": {"width": 0, "height": 10}, "faces": []}"#);
    cmd_in(dir.path())
        .arg(input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid image size"));
}

#[test]
fn invalid_format_rejected() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_request(dir.path(), REQUEST);
    cmd_in(dir.path())
        .arg(input)
        .args(["--format", "xml"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("json").and(predicate::str::contains("text")));
}

#[test]
fn json_output_by_default() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_request(dir.path(), REQUEST);
    let out = cmd_in(dir.path()).arg(input).assert().success().get_output().stdout.clone();

    let json: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let faces = json["faces"].as_array().unwrap();
    assert_eq!(faces.len(), 2);
    assert_eq!(faces[0]["id"], "face1");
    assert_eq!(faces[0]["age"]["min"], 25);
    assert_eq!(faces[0]["age"]["max"], 45);
    assert_eq!(faces[1]["id"], "face2");
    assert_eq!(faces[1]["gender"]["label"], "male");
    assert_eq!(faces[0]["bbox"]["x"], 0.1);
}

#[test]
fn reads_stdin() {
    let dir = tempfile::tempdir().unwrap();
    cmd_in(dir.path())
        .arg("-")
        .write_stdin(REQUEST)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"face2\""));
}

#[test]
fn text_output() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_request(dir.path(), REQUEST);
    cmd_in(dir.path())
        .arg(input)
        .args(["--format", "text"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Faces detected: 2")
                .and(predicate::str::contains("--- face1 ---"))
                .and(predicate::str::contains("Age:    25-45 years"))
                .and(predicate::str::contains("Gender: male (65%)")),
        );
}

#[test]
fn text_output_without_faces() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_request(dir.path(), r#"{"image": {"width": 640, "height": 480}}"#);
    cmd_in(dir.path())
        .arg(input)
        .args(["--format", "text"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No faces found."));
}

#[test]
fn writes_output_file() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_request(dir.path(), REQUEST);
    let output = dir.path().join("result.json");
    cmd_in(dir.path())
        .arg(input)
        .arg("-o")
        .arg(&output)
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    let written = fs::read_to_string(&output).unwrap();
    assert!(written.contains("\"face1\""));
}

#[test]
fn project_config_sets_format() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_request(dir.path(), REQUEST);
    fs::write(dir.path().join(".face-attrs.toml"), "[output]\nformat = 'text'\n").unwrap();

    cmd_in(dir.path())
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("Faces detected: 2"));

    // CLI flag wins over config
    cmd_in(dir.path())
        .arg(&input)
        .args(["--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"));
}

#[test]
fn project_config_pretty_json() {
    let dir = tempfile::tempdir().unwrap();
    let input = write_request(dir.path(), REQUEST);
    fs::write(dir.path().join(".face-attrs.toml"), "[output]\npretty = true\n").unwrap();

    cmd_in(dir.path())
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{\n"));
}
