//! End-to-end tests driving the `tokenc` binary.

use std::fs;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

use tempfile::{tempdir, TempDir};

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("tests")
        .join("fixtures")
        .join(name)
}

fn tokenc(args: &[&str]) -> Output {
    Command::new(env!("CARGO_BIN_EXE_tokenc"))
        .args(args)
        .output()
        .unwrap()
}

fn arg(path: &Path) -> String {
    path.display().to_string()
}

/// A temp dir holding a copy of the fixture document.
fn workspace() -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tokens.json");
    fs::copy(fixture("tokens.json"), &input).unwrap();
    (dir, input)
}

#[test]
fn build_generates_swift() {
    let (dir, input) = workspace();
    let output = dir.path().join("Tokens.swift");

    let result = tokenc(&["build", &format!("[{}]", arg(&input)), &arg(&output)]);
    assert!(result.status.success(), "{}", String::from_utf8_lossy(&result.stderr));

    let text = fs::read_to_string(&output).unwrap();
    assert!(text.starts_with("import SwiftUI\n"));
    assert!(text.contains("public enum TokenColors {"));
    assert!(!text.contains("public enum BackgroundSubtle"));
    assert!(text.contains("public static let `default` = UIColor"));
    assert!(text.contains("public static let surface1 = UIColor"));
    assert!(text.contains("public static let extraSmall = CGFloat(2.0)"));
    assert!(text.contains("/// 0.5pt"));

    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("Generated"));
    assert!(stderr.contains("has no dark variant"));
    assert!(stderr.contains("has no light variant"));
}

#[test]
fn build_is_deterministic() {
    let (dir, input) = workspace();
    let first = dir.path().join("First.swift");
    let second = dir.path().join("Second.swift");

    assert!(tokenc(&["build", &arg(&input), &arg(&first)]).status.success());
    assert!(tokenc(&["build", &arg(&input), &arg(&second)]).status.success());

    assert_eq!(
        fs::read_to_string(first).unwrap(),
        fs::read_to_string(second).unwrap()
    );
}

#[test]
fn missing_arguments_exit_1() {
    let result = tokenc(&["build", "tokens.json"]);
    assert_eq!(result.status.code(), Some(1));
}

#[test]
fn several_inputs_exit_1() {
    let (dir, input) = workspace();
    let output = dir.path().join("Tokens.swift");

    let list = format!("[{}, {}]", arg(&input), arg(&input));
    let result = tokenc(&["build", &list, &arg(&output)]);

    assert_eq!(result.status.code(), Some(1));
    assert!(!output.exists());
}

#[test]
fn wrong_output_extension_exit_2() {
    let dir = tempdir().unwrap();
    let output = dir.path().join("Tokens.kt");

    // The input does not exist: the extension is checked before any reading.
    let result = tokenc(&["build", "missing/tokens.json", &arg(&output)]);

    assert_eq!(result.status.code(), Some(2));
    assert!(!output.exists());
}

#[test]
fn malformed_json_exit_3() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tokens.json");
    let output = dir.path().join("Tokens.swift");
    fs::write(&input, "[1, 2").unwrap();

    let result = tokenc(&["build", &arg(&input), &arg(&output)]);

    assert_eq!(result.status.code(), Some(3));
    assert!(!output.exists());
}

#[test]
fn missing_section_exit_3() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tokens.json");
    let output = dir.path().join("Tokens.swift");
    fs::write(&input, r#"{ "Core/Main": { "Colors": {} } }"#).unwrap();

    let result = tokenc(&["build", &arg(&input), &arg(&output)]);

    assert_eq!(result.status.code(), Some(3));
    assert!(String::from_utf8_lossy(&result.stderr).contains("Couldn't find"));
}

#[test]
fn unresolved_reference_exit_4() {
    let (dir, input) = workspace();
    let output = dir.path().join("Tokens.swift");

    let source = fs::read_to_string(&input)
        .unwrap()
        .replace("{Colors.Error.600}", "{Colors.Error.999}");
    fs::write(&input, source).unwrap();

    let result = tokenc(&["build", &arg(&input), &arg(&output)]);

    assert_eq!(result.status.code(), Some(4));
    let stderr = String::from_utf8_lossy(&result.stderr);
    assert!(stderr.contains("--color-text-error"));
    assert!(stderr.contains("{Colors.Error.999}"));
    assert!(!output.exists());
}

#[test]
fn missing_input_file_exit_4() {
    let dir = tempdir().unwrap();
    let input = dir.path().join("tokens.json");
    let output = dir.path().join("Tokens.swift");

    let result = tokenc(&["build", &arg(&input), &arg(&output)]);
    assert_eq!(result.status.code(), Some(4));
}

#[test]
fn check_reports_without_writing() {
    let (dir, input) = workspace();

    let result = tokenc(&["check", &arg(&input)]);
    assert!(result.status.success());
    assert!(String::from_utf8_lossy(&result.stderr).contains("Checked"));

    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn init_then_build_uses_config() {
    let (dir, input) = workspace();
    let output = dir.path().join("Tokens.swift");

    assert!(tokenc(&["init", &arg(dir.path())]).status.success());
    assert_eq!(tokenc(&["init", &arg(dir.path())]).status.code(), Some(4));

    let config = dir.path().join("tokenc.yaml");
    let yaml = fs::read_to_string(&config)
        .unwrap()
        .replace("TokenRadius", "CornerRadius");
    fs::write(&config, yaml).unwrap();

    assert!(tokenc(&["build", &arg(&input), &arg(&output)]).status.success());
    let text = fs::read_to_string(&output).unwrap();
    assert!(text.contains("public enum CornerRadius {"));
}

#[test]
fn completions_print_to_stdout() {
    let result = tokenc(&["completions", "bash"]);
    assert!(result.status.success());
    assert!(String::from_utf8_lossy(&result.stdout).contains("tokenc"));
}
