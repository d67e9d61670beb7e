//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

fn cmd() -> assert_cmd::Command {
    assert_cmd::Command::cargo_bin("summatim").unwrap()
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

#[test]
fn test_cli_file_input() {
    cmd().arg(get_fixture_path("article.txt")).assert().success();
}

#[test]
fn test_cli_stdin_input() {
    let text = std::fs::read_to_string(get_fixture_path("article.txt")).unwrap();
    cmd()
        .arg("-")
        .write_stdin(text)
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_cli_ratio_one_keeps_every_sentence() {
    cmd()
        .args(["-r", "1.0", &get_fixture_path("short.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Rust compiles to native code."))
        .stdout(predicate::str::contains("Native code runs fast."));
}

#[test]
fn test_cli_frequency_strategy() {
    cmd()
        .args(["-s", "frequency", &get_fixture_path("article.txt")])
        .assert()
        .success()
        .stdout(predicate::str::is_empty().not());
}

#[test]
fn test_cli_json_format() {
    let output = cmd()
        .args(["-f", "json", &get_fixture_path("short.txt")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(json.get("text").is_some());
    assert!(json.get("selected").is_some());
    assert_eq!(json["strategy"], "graph");
}

#[test]
fn test_cli_metrics_text() {
    cmd()
        .args(["-m", &get_fixture_path("article.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Sentences:"))
        .stdout(predicate::str::contains("Reading time:"));
}

#[test]
fn test_cli_metrics_json() {
    let output = cmd()
        .args(["-m", "-f", "json", &get_fixture_path("article.txt")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .get_output()
        .stdout
        .clone();

    let json: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert!(json.get("reading_time").is_some());
    assert!(json["words"].as_u64().unwrap() > 0);
}

#[test]
fn test_cli_output_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("summary.txt");

    cmd()
        .args(["-o", output.to_str().unwrap()])
        .arg(get_fixture_path("article.txt"))
        .assert()
        .success();

    assert!(output.exists());
    assert!(!std::fs::read_to_string(&output).unwrap().is_empty());
}

#[test]
fn test_cli_verbose_keeps_stdout_clean() {
    cmd()
        .args(["-v", "-r", "1.0", &get_fixture_path("short.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Summatim").not())
        .stderr(predicate::str::contains("Summatim"));
}

#[test]
fn test_cli_empty_input_is_not_an_error() {
    cmd()
        .arg(get_fixture_path("empty.txt"))
        .assert()
        .success()
        .stdout(predicate::str::diff("\n"));
}

#[test]
fn test_cli_metrics_on_empty_input() {
    cmd()
        .args(["-m", &get_fixture_path("empty.txt")])
        .assert()
        .success()
        .stdout(predicate::str::contains("n/a"))
        .stdout(predicate::str::contains("0s"));
}

#[test]
fn test_cli_invalid_file() {
    cmd().arg("nonexistent.txt").assert().failure();
}

#[test]
fn test_cli_invalid_ratio() {
    cmd()
        .args(["-r", "0", &get_fixture_path("short.txt")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid ratio"));
}

#[test]
fn test_cli_invalid_strategy() {
    cmd()
        .args(["-s", "centroid", &get_fixture_path("short.txt")])
        .assert()
        .failure()
        .stderr(predicate::str::contains("centroid"));
}
