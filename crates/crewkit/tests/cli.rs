//! End-to-end CLI integration tests
//!
//! These tests invoke the compiled binary as a subprocess to verify
//! that the CLI behaves correctly from a user's perspective.

use assert_cmd::Command;
use predicates::prelude::*;

/// Returns a Command configured to run our binary.
///
/// Note: `cargo_bin` is marked deprecated for edge cases involving custom
/// cargo build directories, but works correctly for standard project layouts.
#[allow(deprecated)]
fn cmd() -> Command {
    Command::cargo_bin(env!("CARGO_PKG_NAME")).unwrap()
}

/// A context file that passes every required-section check.
const COMPLETE_DOC: &str = "# Project Context\n\n\
## Overview\n\nWhat the project does, at length, for anyone joining the team.\n\n---\n\n\
## Technology Stack\n\n- Rust\n- SQLite\n\n\
## Architecture\n\nLayered. Commands call into a small core library.\n\n\
## Coding Standards\n\nDon't commit dead code. Keep functions small.\n\n\
```rust\nfn main() {}\n```\n\n\
## File Structure\n\n- src/\n- tests/\n\n\
Further notes padding this file comfortably past the length heuristics so\n\
that only recommended-section warnings remain. More words, more context,\n\
more detail about conventions, tooling, deployment habits, review flow,\n\
and everything else a new contributor would want to know on day one.\n\
Even more words to be safe: the validator counts characters, not lines,\n\
and this block exists purely to stay above that threshold.\n";

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
        .stdout(predicate::str::contains("Options:"));
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

#[test]
fn no_subcommand_shows_help() {
    // arg_required_else_help makes clap print help to stderr and exit 2
    cmd()
        .assert()
        .code(2)
        .stderr(predicate::str::contains("Usage:"));
}

// =============================================================================
// Estimate: non-interactive
// =============================================================================

#[test]
fn estimate_json_small_planning_only() {
    let output = cmd()
        .args([
            "--json",
            "estimate",
            "--size",
            "small",
            "--skip",
            "development,testing,documentation",
        ])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("estimate --json should output valid JSON");

    assert_eq!(json["project_size"], "small");
    assert_eq!(json["team_size"], 3);
    assert_eq!(json["phases"], serde_json::json!(["planning"]));
    assert_eq!(json["tokens"]["min"], 30_000);
    assert_eq!(json["tokens"]["avg"], 50_000);
    assert_eq!(json["tokens"]["max"], 80_000);
    assert_eq!(json["cost_usd"]["min"], 0.63);
    assert_eq!(json["cost_usd"]["avg"], 1.05);
    assert_eq!(json["cost_usd"]["max"], 1.68);
    assert_eq!(json["time_hours"]["min"], 22.5);
    assert_eq!(json["time_hours"]["avg"], 37.5);
    assert_eq!(json["time_hours"]["max"], 60.0);
    assert_eq!(json["phase_details"]["planning"]["avg_tokens"], 50_000);
    assert!(json["phase_details"]["development"].is_null());
}

#[test]
fn estimate_json_team_of_six_doubles_medium() {
    let output = cmd()
        .args(["--json", "estimate", "--size", "medium", "--team-size", "6"])
        .assert()
        .success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();

    // Medium baseline avg is 850k tokens; a team of six doubles it.
    assert_eq!(json["team_size"], 6);
    assert_eq!(json["tokens"]["avg"], 1_700_000);
    assert_eq!(json["phase_details"]["development"]["avg_tokens"], 800_000);
}

#[test]
fn estimate_text_report_has_sections() {
    cmd()
        .args(["estimate", "--size", "medium"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Workflow Cost Estimate"))
        .stdout(predicate::str::contains("Project Size: MEDIUM"))
        .stdout(predicate::str::contains("ESTIMATE RANGES"))
        .stdout(predicate::str::contains("BREAKDOWN BY PHASE"))
        .stdout(predicate::str::contains("NOTES"))
        .stdout(predicate::str::contains("850,000 tokens"));
}

#[test]
fn estimate_skip_removes_phase_from_report() {
    cmd()
        .args(["estimate", "--size", "small", "--skip", "testing"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Phases: planning, development, documentation",
        ))
        .stdout(predicate::str::contains("TESTING:").not());
}

#[test]
fn estimate_unknown_skip_names_are_ignored() {
    cmd()
        .args(["estimate", "--size", "small", "--skip", "bogus,review"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Phases: planning, development, testing, documentation",
        ));
}

#[test]
fn estimate_invalid_size_is_fatal() {
    cmd()
        .args(["estimate", "--size", "gigantic"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

#[test]
fn estimate_invalid_team_size_is_fatal() {
    cmd()
        .args(["estimate", "--team-size", "several"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value"));
}

// =============================================================================
// Estimate: interactive
// =============================================================================

#[test]
fn estimate_interactive_defaults_to_medium() {
    cmd()
        .arg("estimate")
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactive Mode"))
        .stdout(predicate::str::contains("Project Size: MEDIUM"))
        .stdout(predicate::str::contains("Team Size: 3 agents per phase"));
}

#[test]
fn estimate_interactive_accepts_choices() {
    cmd()
        .arg("estimate")
        .write_stdin("1\n2\ntesting,documentation\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Project Size: SMALL"))
        .stdout(predicate::str::contains("Team Size: 2 agents per phase"))
        .stdout(predicate::str::contains("Phases: planning, development"));
}

#[test]
fn estimate_interactive_clamps_team_size() {
    cmd()
        .arg("estimate")
        .write_stdin("2\n9\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Team Size: 3 agents per phase"));
}

#[test]
fn estimate_interactive_bad_team_size_falls_back() {
    cmd()
        .arg("estimate")
        .write_stdin("2\nlots\n\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Team Size: 3 agents per phase"));
}

// =============================================================================
// Validate
// =============================================================================

#[test]
fn validate_complete_file_passes() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("CLAUDE.md");
    std::fs::write(&path, COMPLETE_DOC).unwrap();

    cmd()
        .args(["validate", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("Validating:"))
        .stdout(predicate::str::contains("is valid!"));
}

#[test]
fn validate_defaults_to_claude_md_in_cwd() {
    let dir = tempfile::tempdir().unwrap();
    std::fs::write(dir.path().join("CLAUDE.md"), COMPLETE_DOC).unwrap();

    cmd()
        .args(["-C", dir.path().to_str().unwrap(), "validate"])
        .assert()
        .success()
        .stdout(predicate::str::contains("CLAUDE.md is valid!"));
}

#[test]
fn validate_missing_sections_fails_with_errors() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("CLAUDE.md");
    std::fs::write(&path, "# Title\n\n## Overview\n\nToo little.\n").unwrap();

    cmd()
        .args(["validate", path.to_str().unwrap()])
        .assert()
        .failure()
        .stdout(predicate::str::contains("ERRORS (Must Fix):"))
        .stdout(predicate::str::contains(
            "Missing required section: Technology Stack",
        ))
        .stdout(predicate::str::contains("has errors that must be fixed"))
        .stderr(predicate::str::contains("failed validation"));
}

#[test]
fn validate_nonexistent_file_reports_not_found() {
    cmd()
        .args(["validate", "/definitely/not/a/real/file.md"])
        .assert()
        .failure()
        .stdout(predicate::str::contains("File not found"));
}

#[test]
fn validate_json_reports_findings() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("CLAUDE.md");
    std::fs::write(&path, "# Title\n\nShort.\n").unwrap();

    let output = cmd()
        .args(["--json", "validate", path.to_str().unwrap()])
        .assert()
        .failure();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("validate --json should output valid JSON");

    assert_eq!(json["valid"], false);
    assert_eq!(json["errors"].as_array().unwrap().len(), 5);
    assert!(
        json["warnings"]
            .as_array()
            .unwrap()
            .iter()
            .any(|w| w.as_str().unwrap().contains("very short"))
    );
}

#[test]
fn validate_warnings_do_not_fail_the_run() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("CLAUDE.md");
    // Complete required sections, but no recommended ones: warnings only.
    std::fs::write(&path, COMPLETE_DOC).unwrap();

    cmd()
        .args(["validate", path.to_str().unwrap()])
        .assert()
        .success()
        .stdout(predicate::str::contains("WARNINGS (Should Fix):"));
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
fn info_json_outputs_calibration_constants() {
    let output = cmd().args(["info", "--json"]).assert().success();

    let stdout = String::from_utf8_lossy(&output.get_output().stdout);
    let json: serde_json::Value =
        serde_json::from_str(&stdout).expect("info --json should output valid JSON");

    assert_eq!(json["name"], env!("CARGO_PKG_NAME"));
    assert_eq!(json["calibration"]["input_price_per_mtok"], 5.0);
    assert_eq!(json["calibration"]["output_price_per_mtok"], 25.0);
    assert_eq!(json["calibration"]["baseline_team_size"], 3);
    assert!(
        json["required_sections"]
            .as_array()
            .unwrap()
            .iter()
            .any(|s| s == "Overview")
    );
}

// =============================================================================
// Global Flags
// =============================================================================

#[test]
fn quiet_flag_accepted() {
    cmd().args(["--quiet", "info"]).assert().success();
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
fn chdir_nonexistent_fails() {
    cmd()
        .args(["-C", "/nonexistent/path/that/does/not/exist", "info"])
        .assert()
        .failure();
}

#[test]
fn invalid_subcommand_shows_error() {
    cmd()
        .arg("not-a-command")
        .assert()
        .failure()
        .stderr(predicate::str::contains("error:"));
}
