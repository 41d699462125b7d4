use assert_cmd::Command;
use predicates::prelude::*;
use std::io::Write;

fn cmd() -> Command {
    let mut cmd = Command::cargo_bin("context-transformer").unwrap();
    cmd.arg("--no-color");
    cmd
}

#[test]
fn test_default_runs_demo() {
    cmd()
        .assert()
        .success()
        .stdout(predicate::str::contains("🔍 TEST 1: Make the inspector panel draggable"))
        .stdout(predicate::str::contains("🔍 TEST 7: Need to position the tooltip correctly"))
        .stdout(predicate::str::contains("-".repeat(40)));
}

#[test]
fn test_transform_words() {
    cmd()
        .args(["transform", "Add", "a", "database", "table", "for", "orders"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "Add a database table for orders.\n\nIMPORTANT CONTEXT:",
        ))
        .stdout(predicate::str::contains(
            "We likely have existing database patterns and schema structure",
        ));
}

#[test]
fn test_transform_reads_stdin() {
    // "user" is an auth keyword and auth is declared before api_backend
    cmd()
        .arg("transform")
        .write_stdin("Build an API endpoint for user data\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- We likely have existing user management and session patterns\n",
        ))
        .stdout(predicate::str::contains("backend architecture").not());
}

#[test]
fn test_transform_api_backend_request() {
    cmd()
        .args(["transform", "Create a REST endpoint for orders"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "- We likely have existing API patterns and backend architecture\n",
        ));
}

#[test]
fn test_transform_explain_reports_detection() {
    cmd()
        .args(["transform", "--explain", "Add authentication to my app"])
        .assert()
        .success()
        .stderr(predicate::str::contains("Domain: auth"))
        .stderr(predicate::str::contains(
            "Complexity: Keep it simple - prefer existing solutions over external dependencies",
        ))
        .stdout(predicate::str::starts_with("Add authentication to my app.\n"));
}

#[test]
fn test_transform_json() {
    cmd()
        .args(["transform", "--format", "json", "Create a new modal component"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"domain\": \"ui_component\""))
        .stdout(predicate::str::contains("\"originalRequest\": \"Create a new modal component\""));
}

#[test]
fn test_transform_rejects_script_content() {
    cmd()
        .args(["transform", "<script>alert(1)</script>"])
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Invalid content detected"));
}

#[test]
fn test_transform_short_request_without_validation() {
    cmd()
        .args(["transform", "--no-validate", "hi"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("hi.\n"));
}

#[test]
fn test_rules_unknown_domain_is_not_an_error() {
    cmd()
        .args(["rules", "--domain", "billing"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Domain 'billing' not found"));
}

#[test]
fn test_rules_json() {
    cmd()
        .args(["rules", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"drag_move\""))
        .stdout(predicate::str::contains("\"default_complexity\""));
}

#[test]
fn test_config_file_limits() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[limits]\nmin_chars = 20").unwrap();

    cmd()
        .arg("--config")
        .arg(file.path())
        .args(["transform", "Fix the login"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Request too short (min 20 characters)"));
}

#[test]
fn test_invalid_config_file() {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    writeln!(file, "[limits]\nmax_chars = 0").unwrap();

    cmd()
        .arg("--config")
        .arg(file.path())
        .arg("demo")
        .assert()
        .failure()
        .stderr(predicate::str::contains("max_chars must be greater than zero"));
}
