//! End-to-end CLI integration tests.

use std::fs;
use std::path::Path;

use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn keepbest() -> Command {
    Command::cargo_bin("keepbest").expect("binary not found")
}

/// Workspace with an `inputs` dir holding the given problem files.
fn workspace(problems: &[(&str, &str)]) -> TempDir {
    let dir = TempDir::new().unwrap();
    fs::create_dir(dir.path().join("inputs")).unwrap();
    for (name, contents) in problems {
        fs::write(dir.path().join("inputs").join(name), contents).unwrap();
    }
    dir
}

fn harness(dir: &Path) -> Command {
    let mut cmd = keepbest();
    cmd.env_remove("KEEPBEST_INPUTS")
        .env_remove("KEEPBEST_OUTPUTS")
        .env_remove("KEEPBEST_SCORES")
        .env_remove("RUST_LOG")
        .arg("--inputs")
        .arg(dir.join("inputs"))
        .arg("--outputs")
        .arg(dir.join("outputs"))
        .arg("--scores")
        .arg(dir.join("scores"))
        .arg("--no-color");
    cmd
}

fn score(dir: &Path, name: &str) -> Option<String> {
    fs::read_to_string(dir.join("scores").join(name))
        .ok()
        .map(|s| s.trim().to_string())
}

#[test]
fn help_flag() {
    keepbest()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("--inputs"))
        .stdout(predicate::str::contains("--exit-when-done"));
}

#[test]
fn version_flag() {
    keepbest()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("keepbest"));
}

#[test]
fn completion_bash() {
    keepbest()
        .args(["--completion", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("keepbest"));
}

#[test]
fn quit_command_saves_and_ends() {
    let dir = workspace(&[("alpha.txt", "10\n3 4 5\n")]);
    harness(dir.path())
        .write_stdin("q\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[al]\tStart new simple solution"))
        .stdout(predicate::str::contains("[al]\tRead all data from alpha.txt"))
        .stdout(predicate::str::contains("[al]\tSaved new solution (9)"))
        .stdout(predicate::str::contains("[al]\tEnd"))
        .stdout(predicate::str::contains("stopped by quit command"));
    assert_eq!(score(dir.path(), "alpha.txt").as_deref(), Some("9"));
    let output = fs::read_to_string(dir.path().join("outputs").join("alpha.txt")).unwrap();
    assert_eq!(output.trim(), "1 2");
}

#[test]
fn end_of_input_shuts_down() {
    let dir = workspace(&[("a.txt", "5\n5\n")]);
    harness(dir.path())
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("end of operator input"));
    assert_eq!(score(dir.path(), "a.txt").as_deref(), Some("5"));
}

#[test]
fn other_lines_are_ignored() {
    let dir = workspace(&[("a.txt", "5\n5\n")]);
    harness(dir.path())
        .write_stdin("status\nQ\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("stopped by quit command"));
}

#[test]
fn hidden_files_are_skipped() {
    let dir = workspace(&[("visible.txt", "4\n1 3\n"), (".hidden", "4\n4\n")]);
    harness(dir.path())
        .write_stdin("quit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("[vi]\tEnd"))
        .stdout(predicate::str::contains("[.h]").not());
    assert!(score(dir.path(), ".hidden").is_none());
    assert_eq!(score(dir.path(), "visible.txt").as_deref(), Some("4"));
}

#[test]
fn worse_score_is_not_kept_without_force() {
    let dir = workspace(&[("a.txt", "10\n3 4 5\n")]);
    fs::create_dir(dir.path().join("scores")).unwrap();
    fs::write(dir.path().join("scores").join("a.txt"), "10").unwrap();
    harness(dir.path())
        .args(["--no-force-first-save", "--exit-when-done"])
        .write_stdin("")
        .assert()
        .success();
    assert_eq!(score(dir.path(), "a.txt").as_deref(), Some("10"));
}

#[test]
fn exit_when_done_stops_without_operator() {
    let dir = workspace(&[("a.txt", "10\n3 4 5\n"), ("b.txt", "7\n2 2 2\n")]);
    harness(dir.path())
        .arg("--exit-when-done")
        .assert()
        .success();
    assert_eq!(score(dir.path(), "a.txt").as_deref(), Some("9"));
    assert_eq!(score(dir.path(), "b.txt").as_deref(), Some("6"));
}

#[test]
fn brute_force_with_iteration_limit() {
    let dir = workspace(&[("a.txt", "10\n3 4 5 6 7\n")]);
    harness(dir.path())
        .args(["--mode", "brute-force", "--max-iterations", "50", "--exit-when-done"])
        .assert()
        .success()
        .stdout(predicate::str::contains("[a.]\tStart new brute force solution"))
        .stdout(predicate::str::contains("[a.]\tStopped after 50 iterations"))
        .stdout(predicate::str::contains("[a.]\tEnd"));
    let best: i64 = score(dir.path(), "a.txt").unwrap().parse().unwrap();
    assert!(best > 0 && best <= 10);
}

#[test]
fn corrupt_score_record_fails_the_task() {
    let dir = workspace(&[("a.txt", "5\n5\n")]);
    fs::create_dir(dir.path().join("scores")).unwrap();
    fs::write(dir.path().join("scores").join("a.txt"), "garbage").unwrap();
    harness(dir.path())
        .write_stdin("q\n")
        .assert()
        .code(5)
        .stdout(predicate::str::contains("[a.]\tEnd"))
        .stdout(predicate::str::contains("FAILED"));
    assert_eq!(score(dir.path(), "a.txt").as_deref(), Some("garbage"));
}

#[test]
fn invalid_input_fails_only_that_problem() {
    let dir = workspace(&[("bad.txt", "not a number\n"), ("good.txt", "3\n1 2\n")]);
    harness(dir.path())
        .arg("--exit-when-done")
        .assert()
        .code(5)
        .stdout(predicate::str::contains("[ba]\tEnd"))
        .stdout(predicate::str::contains("[go]\tSaved new solution (3)"));
    assert_eq!(score(dir.path(), "good.txt").as_deref(), Some("3"));
}

#[test]
fn missing_input_dir_is_a_config_error() {
    let dir = TempDir::new().unwrap();
    harness(dir.path())
        .write_stdin("q\n")
        .assert()
        .code(4)
        .stderr(predicate::str::contains("cannot read input directory"));
}

#[test]
fn deadline_stops_brute_force() {
    let dir = workspace(&[("a.txt", "10\n3 4 5 6 7\n")]);
    harness(dir.path())
        .args(["--mode", "brute-force", "--deadline", "300ms", "--exit-when-done"])
        .write_stdin("")
        .timeout(std::time::Duration::from_secs(30))
        .assert()
        .success()
        .stdout(predicate::str::contains("[a.]\tStopped after"))
        .stdout(predicate::str::contains("[a.]\tEnd"))
        .stdout(predicate::str::contains("stopped by deadline reached"));
}

#[test]
fn invalid_deadline_is_rejected() {
    keepbest()
        .args(["--deadline", "tomorrow"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid duration"));
}
