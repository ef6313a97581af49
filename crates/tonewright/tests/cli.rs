//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    let mut cmd = Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap();
    cmd.env(
        "TONEWRIGHT_LOG_DIR",
        std::env::temp_dir().join("tonewright-test-logs"),
    );
    cmd
}

/// Write `content` to `name` inside a fresh temp dir.
fn input_file(name: &str, content: &str) -> (TempDir, String) {
    let tmp = TempDir::new().unwrap();
    let path = tmp.path().join(name);
    fs::write(&path, content).unwrap();
    (tmp, path.to_str().unwrap().to_string())
}

fn stdout_json(output: &std::process::Output) -> serde_json::Value {
    serde_json::from_slice(&output.stdout).expect("stdout should be valid JSON")
}

const DENSE: &str = "The implementation of the comprehensive organizational restructuring \
                     initiative necessitated interdepartmental communication protocols.";

// =============================================================================
// Help & Version
// =============================================================================

#[test]
fn help_flag_shows_usage() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("enhance"));
}

#[test]
fn long_help_lists_environment() {
    cmd()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("TONEWRIGHT_MAX_INPUT_BYTES"));
}

#[test]
fn version_flag_shows_version() {
    cmd()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn version_only_prints_bare_version() {
    cmd()
        .arg("--version-only")
        .assert()
        .success()
        .stdout(predicate::str::diff(format!(
            "{}\n",
            env!("CARGO_PKG_VERSION")
        )));
}

// =============================================================================
// Info Command
// =============================================================================

#[test]
fn info_shows_package_name_and_version() {
    cmd()
        .arg("info")
        .assert()
        .success()
        .stdout(predicate::str::contains(env!("CARGO_PKG_NAME")))
        .stdout(predicate::str::contains(env!("CARGO_PKG_VERSION")));
}

#[test]
fn info_json_outputs_valid_json() {
    let output = cmd().args(["info", "--json"]).output().unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["version"], env!("CARGO_PKG_VERSION"));
    assert!(json["config"].is_object());
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["-q", "info"]).assert().success();
}

#[test]
fn verbose_flags_accepted() {
    cmd().args(["-vv", "info"]).assert().success();
}

#[test]
fn color_never_accepted() {
    cmd().args(["--color", "never", "info"]).assert().success();
}

#[test]
fn chdir_flag_changes_directory() {
    let tmp = TempDir::new().unwrap();
    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "info"])
        .assert()
        .success();
}

#[test]
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}

// =============================================================================
// Analyze Command
// =============================================================================

#[test]
fn analyze_prints_report() {
    let (_tmp, path) = input_file("note.txt", "The cat sat on the mat. The dog ran fast.");
    cmd()
        .args(["--color", "never", "analyze", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("Readability:"))
        .stdout(predicate::str::contains("10 words, 2 sentences"));
}

#[test]
fn analyze_json_has_report_fields() {
    let (_tmp, path) = input_file("note.txt", "The report was written yesterday.");
    let output = cmd().args(["analyze", &path, "--json"]).output().unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["word_count"], 5);
    assert_eq!(json["passive_voices"].as_array().unwrap().len(), 1);
    assert!(json["readability_level"].is_string());
}

#[test]
fn analyze_reads_stdin() {
    let output = cmd()
        .args(["analyze", "-", "--json"])
        .write_stdin("One two three.")
        .output()
        .unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["word_count"], 3);
}

#[test]
fn analyze_strips_markdown_files() {
    let (_tmp, path) = input_file(
        "doc.md",
        "# A heading nobody reads\n\nTwo words.\n\n```\nlet hidden = 1;\n```\n",
    );
    let output = cmd().args(["analyze", &path, "--json"]).output().unwrap();
    assert!(output.status.success());
    assert_eq!(stdout_json(&output)["word_count"], 2);
}

#[test]
fn analyze_min_score_gate_fails() {
    let (_tmp, path) = input_file("dense.txt", DENSE);
    cmd()
        .args(["analyze", &path, "--min-score", "50"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("below minimum"));
}

#[test]
fn analyze_min_score_from_environment() {
    let (_tmp, path) = input_file("dense.txt", DENSE);
    cmd()
        .env("TONEWRIGHT_MIN_SCORE", "50")
        .args(["analyze", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("below minimum"));
}

#[test]
fn analyze_missing_file_fails() {
    cmd()
        .args(["analyze", "/nonexistent/input.txt"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to read"));
}

#[test]
fn input_limit_rejects_large_files() {
    let (_tmp, path) = input_file("big.txt", &"word ".repeat(100));
    cmd()
        .env("TONEWRIGHT_MAX_INPUT_BYTES", "64")
        .args(["analyze", &path])
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

#[test]
fn input_limit_applies_to_stdin() {
    cmd()
        .env("TONEWRIGHT_MAX_INPUT_BYTES", "8")
        .args(["grammar", "-"])
        .write_stdin("This is far more than eight bytes.")
        .assert()
        .failure()
        .stderr(predicate::str::contains("input too large"));
}

// =============================================================================
// Enhance Command
// =============================================================================

#[test]
fn enhance_formal_from_stdin() {
    cmd()
        .args(["enhance", "-", "--tone", "formal"])
        .write_stdin("i dont know")
        .assert()
        .success()
        .stdout(predicate::str::diff("I do not know.\n"));
}

#[test]
fn enhance_without_tone_fixes_spelling() {
    cmd()
        .args(["enhance", "-"])
        .write_stdin("i recieve teh mail")
        .assert()
        .success()
        .stdout(predicate::str::diff("I receive the mail.\n"));
}

#[test]
fn enhance_accepts_tone_list() {
    cmd()
        .args(["enhance", "-", "--tone", "formal,concise"])
        .write_stdin("We left in order to rest.")
        .assert()
        .success()
        .stdout(predicate::str::diff("We left to rest.\n"));
}

#[test]
fn enhance_writes_output_file() {
    let (tmp, path) = input_file("in.txt", "it's gonna work");
    let out = tmp.path().join("out.txt");
    cmd()
        .args(["enhance", &path, "--tone", "formal", "-o", out.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::is_empty());

    assert_eq!(fs::read_to_string(out).unwrap(), "It is going to work.\n");
}

#[test]
fn enhance_json_output() {
    let output = cmd()
        .args(["enhance", "-", "--tone", "formal", "--json"])
        .write_stdin("i dont know")
        .output()
        .unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["text"], "I do not know.");
    assert_eq!(json["tone"]["formal"], true);
}

#[test]
fn enhance_uses_configured_tones() {
    let tmp = TempDir::new().unwrap();
    fs::write(tmp.path().join(".tonewright.toml"), r#"tones = ["formal"]"#).unwrap();
    cmd()
        .args(["-C", tmp.path().to_str().unwrap(), "enhance", "-"])
        .write_stdin("i dont know")
        .assert()
        .success()
        .stdout(predicate::str::diff("I do not know.\n"));
}

#[test]
fn enhance_rejects_unknown_tone() {
    cmd()
        .args(["enhance", "-", "--tone", "sarcastic"])
        .write_stdin("hello")
        .assert()
        .failure()
        .stderr(predicate::str::contains("sarcastic"));
}

// =============================================================================
// Grammar Command
// =============================================================================

#[test]
fn grammar_reports_passive_voice() {
    let (_tmp, path) = input_file("g.txt", "The report was written by the team.");
    cmd()
        .args(["--color", "never", "grammar", &path])
        .assert()
        .success()
        .stdout(predicate::str::contains("Passive voice: 1"));
}

#[test]
fn grammar_json_output() {
    let (_tmp, path) = input_file(
        "g.txt",
        "The report was written by the team. She codes every day.",
    );
    let output = cmd().args(["grammar", &path, "--json"]).output().unwrap();
    assert!(output.status.success());

    let json = stdout_json(&output);
    assert_eq!(json["sentence_count"], 2);
    assert!(json["issues"].is_array());
}

#[test]
fn grammar_max_issues_gate_fails() {
    let (_tmp, path) = input_file("g.txt", "the the end");
    cmd()
        .args(["grammar", &path, "--max-issues", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("grammar issues"));
}

#[test]
fn grammar_clean_text_passes_gate() {
    let (_tmp, path) = input_file("g.txt", "She codes every day.");
    cmd()
        .args(["grammar", &path, "--max-issues", "0"])
        .assert()
        .success();
}

// =============================================================================
// Error Cases
// =============================================================================

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}

#[test]
fn invalid_flag_shows_error() {
    cmd()
        .arg("--not-a-flag")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
