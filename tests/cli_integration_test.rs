//! End-to-end tests driving the `spreadrank` binary.

use assert_cmd::Command;
use indoc::indoc;
use serde_json::Value;
use std::fs;
use tempfile::TempDir;

/// Binary invocation isolated from any `.spreadrank.toml` on the host.
fn spreadrank(workdir: &TempDir) -> Command {
    let mut cmd = Command::new(env!("CARGO_BIN_EXE_spreadrank"));
    cmd.current_dir(workdir.path())
        .env_remove("RUST_LOG")
        .env("NO_COLOR", "1");
    cmd
}

fn stdout_of(output: &std::process::Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

#[test]
fn test_inline_list() {
    let dir = TempDir::new().unwrap();
    spreadrank(&dir)
        .args(["--items", "a a a b"])
        .assert()
        .success()
        .stdout("SpreadRank score: 0.666667\n");
}

#[test]
fn test_inline_uniform_list_scores_zero() {
    let dir = TempDir::new().unwrap();
    spreadrank(&dir)
        .args(["-i", "a b c d"])
        .assert()
        .success()
        .stdout("SpreadRank score: 0.000000\n");
}

#[test]
fn test_file_input_skips_blank_lines() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("labels.txt");
    fs::write(
        &path,
        indoc! {"
            a
            a

            a
            b
            b

            c
        "},
    )
    .unwrap();

    spreadrank(&dir)
        .arg("--file")
        .arg(&path)
        .assert()
        .success()
        .stdout("SpreadRank score: 0.416667\n");
}

#[test]
fn test_missing_file_fails() {
    let dir = TempDir::new().unwrap();
    let output = spreadrank(&dir)
        .args(["--file", "does-not-exist.txt"])
        .output()
        .unwrap();

    assert!(!output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert!(stderr.contains("does-not-exist.txt"), "stderr: {}", stderr);
}

#[test]
fn test_stdin_input() {
    let dir = TempDir::new().unwrap();
    let mut input = "x\n".repeat(100);
    input.push_str("\ny\n");

    spreadrank(&dir)
        .arg("--stdin")
        .write_stdin(input)
        .assert()
        .success()
        .stdout("SpreadRank score: 0.990000\n");
}

#[test]
fn test_piped_input_without_flags_reads_all_lines() {
    let dir = TempDir::new().unwrap();
    let output = spreadrank(&dir).write_stdin("a\na\na\nb\n").output().unwrap();

    assert!(output.status.success());
    // Piped input never sees the interactive prompt
    assert_eq!(stdout_of(&output), "SpreadRank score: 0.666667\n");
}

#[test]
fn test_piped_empty_input_without_flags_scores_zero() {
    let dir = TempDir::new().unwrap();
    spreadrank(&dir)
        .write_stdin("")
        .assert()
        .success()
        .stdout("SpreadRank score: 0.000000\n");
}

#[test]
fn test_conflicting_sources_rejected() {
    let dir = TempDir::new().unwrap();
    spreadrank(&dir)
        .args(["--items", "a b", "--stdin"])
        .assert()
        .failure();
}

#[test]
fn test_json_format() {
    let dir = TempDir::new().unwrap();
    let output = spreadrank(&dir)
        .args(["--items", "a a a b b c", "--format", "json"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let json: Value = serde_json::from_str(&stdout_of(&output)).expect("valid JSON");
    assert_eq!(json["source"], "inline");
    assert_eq!(json["distinct_labels"], 3);
    assert_eq!(json["frequencies"], serde_json::json!([3, 2, 1]));
    let score = json["score"].as_f64().unwrap();
    assert!((score - 0.416_667).abs() < 1e-6);
}

#[test]
fn test_verbose_prints_breakdown() {
    let dir = TempDir::new().unwrap();
    let output = spreadrank(&dir)
        .args(["--items", "a a a b", "-v"])
        .output()
        .unwrap();

    assert!(output.status.success());
    let stdout = stdout_of(&output);
    assert!(stdout.contains("Frequencies:     3, 1"), "stdout: {}", stdout);
    assert!(stdout.ends_with("SpreadRank score: 0.666667\n"));
}

#[test]
fn test_config_file_in_working_directory() {
    let dir = TempDir::new().unwrap();
    fs::write(
        dir.path().join(".spreadrank.toml"),
        indoc! {r#"
            [output]
            precision = 2
        "#},
    )
    .unwrap();

    spreadrank(&dir)
        .args(["--items", "a a a b"])
        .assert()
        .success()
        .stdout("SpreadRank score: 0.67\n");

    // Flags win over the file
    spreadrank(&dir)
        .args(["--items", "a a a b", "--precision", "4"])
        .assert()
        .success()
        .stdout("SpreadRank score: 0.6667\n");
}

#[test]
fn test_explicit_invalid_config_fails() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.toml");
    fs::write(&path, "[output]\nprecision = \"many\"\n").unwrap();

    spreadrank(&dir)
        .args(["--items", "a b"])
        .arg("--config")
        .arg(&path)
        .assert()
        .failure();
}
