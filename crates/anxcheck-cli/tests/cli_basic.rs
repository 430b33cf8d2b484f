//! Basic CLI E2E tests.
//!
//! Tests invoke CLI commands via cargo run and verify outputs.

use std::io::Write;
use std::process::{Command, Stdio};

/// Run a CLI command and return (stdout, stderr, exit code).
fn run_cli(args: &[&str]) -> (String, String, i32) {
    let output = Command::new("cargo")
        .args(["run", "-p", "anxcheck-cli", "--"])
        .args(args)
        .output()
        .expect("Failed to execute CLI command");

    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let stderr = String::from_utf8_lossy(&output.stderr).to_string();
    let code = output.status.code().unwrap_or(-1);

    (stdout, stderr, code)
}

/// Run the CLI with the given stdin content.
fn run_cli_with_stdin(args: &[&str], stdin: &str) -> (String, i32) {
    let mut child = Command::new("cargo")
        .args(["run", "-p", "anxcheck-cli", "--"])
        .args(args)
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .expect("Failed to spawn CLI command");

    child
        .stdin
        .as_mut()
        .expect("stdin not captured")
        .write_all(stdin.as_bytes())
        .expect("Failed to write stdin");

    let output = child.wait_with_output().expect("Failed to wait for CLI");
    let stdout = String::from_utf8_lossy(&output.stdout).to_string();
    let code = output.status.code().unwrap_or(-1);
    (stdout, code)
}

#[test]
fn test_catalog_list() {
    let (stdout, _, code) = run_cli(&["catalog", "list"]);
    assert_eq!(code, 0, "Catalog list failed");
    assert!(stdout.contains("Generalized Anxiety Assessment"));
    assert!(stdout.contains("felt anxious, worried, or nervous"));
}

#[test]
fn test_catalog_list_json() {
    let (stdout, _, code) = run_cli(&["catalog", "list", "--json"]);
    assert_eq!(code, 0, "Catalog list JSON failed");
    let questions: serde_json::Value =
        serde_json::from_str(&stdout).expect("invalid JSON from catalog list");
    assert_eq!(questions.as_array().unwrap().len(), 10);
    assert_eq!(questions[0]["id"], 1);
}

#[test]
fn test_catalog_options() {
    let (stdout, _, code) = run_cli(&["catalog", "options"]);
    assert_eq!(code, 0, "Catalog options failed");
    assert!(stdout.contains("[0] Never"));
    assert!(stdout.contains("[4] All of the time"));
}

#[test]
fn test_bands_show() {
    let (stdout, _, code) = run_cli(&["bands", "show"]);
    assert_eq!(code, 0, "Bands show failed");
    assert!(stdout.contains("Minimal"));
    assert!(stdout.contains("Severe"));
    assert!(stdout.contains("14"));
}

#[test]
fn test_bands_show_json() {
    let (stdout, _, code) = run_cli(&["bands", "show", "--json"]);
    assert_eq!(code, 0, "Bands show JSON failed");
    let bands: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(bands.as_array().unwrap().len(), 4);
}

#[test]
fn test_score_compute_scenario() {
    let (stdout, _, code) = run_cli(&["score", "compute", "2,1,0,3,2,1,0,4,2,1"]);
    assert_eq!(code, 0, "Score compute failed");
    assert!(stdout.contains("Total Score: 16"));
    assert!(stdout.contains("Moderate Anxiety"));
}

#[test]
fn test_score_compute_json() {
    let (stdout, _, code) = run_cli(&["score", "compute", "0,0,0,0,0,0,0,0,0,0", "--json"]);
    assert_eq!(code, 0, "Score compute JSON failed");
    let parsed: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed["total_score"], 0);
    assert_eq!(parsed["severity"], "Minimal");
}

#[test]
fn test_score_compute_rejects_short_vector() {
    let (_, stderr, code) = run_cli(&["score", "compute", "1,2,3"]);
    assert_ne!(code, 0, "Short vector unexpectedly accepted");
    assert!(stderr.contains("expected 10 answers"));
}

#[test]
fn test_score_compute_rejects_out_of_scale_value() {
    let (_, stderr, code) = run_cli(&["score", "compute", "0,0,0,0,0,0,0,0,0,5"]);
    assert_ne!(code, 0, "Out-of-scale value unexpectedly accepted");
    assert!(stderr.contains("outside the 0-4 scale"));
}

#[test]
fn test_assess_run_with_answers() {
    let (stdout, _, code) = run_cli(&["assess", "run", "--answers", "4,4,4,4,4,4,4,4,4,4"]);
    assert_eq!(code, 0, "Assess run failed");
    assert!(stdout.contains("Total Score: 40"));
    assert!(stdout.contains("Severe Anxiety"));
    assert!(stdout.contains("screening tool, not a diagnosis"));
}

#[test]
fn test_assess_run_with_answers_json() {
    let (stdout, _, code) = run_cli(&[
        "assess",
        "run",
        "--answers",
        "2,1,0,3,2,1,0,4,2,1",
        "--json",
    ]);
    assert_eq!(code, 0, "Assess run JSON failed");
    let report: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(report["total_score"], 16);
    assert_eq!(report["severity"], "moderate");
    assert_eq!(report["breakdown"]["rows"].as_array().unwrap().len(), 10);
}

#[test]
fn test_assess_run_rejects_incomplete_answers() {
    let (_, stderr, code) = run_cli(&["assess", "run", "--answers", "1,1,1"]);
    assert_ne!(code, 0, "Incomplete answers unexpectedly accepted");
    assert!(stderr.contains("expected 10 answers"));
}

#[test]
fn test_assess_run_interactive() {
    // Answer every question with 1, with one back-navigation in the middle.
    let stdin = "1\n1\n1\nb\n1\n1\n1\n1\n1\n1\n1\n1\n";
    let (stdout, code) = run_cli_with_stdin(&["assess", "run"], stdin);
    assert_eq!(code, 0, "Interactive assess failed");
    assert!(stdout.contains("Question 1 of 10"));
    assert!(stdout.contains("Total Score: 10"));
    assert!(stdout.contains("Mild Anxiety"));
}

#[test]
fn test_assess_run_interactive_truncated_input_fails() {
    let (_, code) = run_cli_with_stdin(&["assess", "run"], "1\n1\n");
    assert_ne!(code, 0, "Truncated input unexpectedly succeeded");
}
