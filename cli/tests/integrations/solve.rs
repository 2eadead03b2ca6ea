use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_cli_solve_catalog_puzzle() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("ferry").unwrap();
    cmd.arg("solve")
        .arg("farmer")
        .arg("--dir")
        .arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Cabbage,Farmer,Goat,Wolf|||Left"))
        .stdout(predicate::str::contains("|Cabbage,Farmer,Goat,Wolf||Right"))
        .stdout(predicate::str::contains("Solved 'farmer' in 7 crossings"));
}

#[test]
fn test_cli_solve_puzzle_file() {
    let temp_dir = TempDir::new().unwrap();
    let river_file = temp_dir.path().join("rower.river");

    fs::write(
        &river_file,
        r#"
puzzle rower "A single rower crosses"
boat capacity 1
passenger Rower navigator
start left
goal right
"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("ferry").unwrap();
    cmd.arg("solve")
        .arg("rower")
        .arg("--dir")
        .arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Left → Right: Rower"))
        .stdout(predicate::str::contains("Solved 'rower' in 1 crossing\n"));
}

#[test]
fn test_cli_no_solution_exits_successfully() {
    let temp_dir = TempDir::new().unwrap();
    let river_file = temp_dir.path().join("stuck.river");

    fs::write(
        &river_file,
        r#"
puzzle stuck
boat capacity 1
passenger Farmer navigator
passenger Goat
start left
goal right
"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("ferry").unwrap();
    cmd.arg("solve")
        .arg("stuck")
        .arg("--dir")
        .arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("No solution for 'stuck'"));
}

#[test]
fn test_cli_solve_json() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("ferry").unwrap();
    cmd.arg("solve")
        .arg("farmer")
        .arg("--json")
        .arg("--dir")
        .arg(temp_dir.path());

    let output = cmd.output().unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["outcome"], "solved");
    assert_eq!(json["steps"].as_array().unwrap().len(), 8);
    assert_eq!(json["steps"][1]["crossing"]["from"], "Left");
}

#[test]
fn test_cli_solve_nonexistent_puzzle() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("ferry").unwrap();
    cmd.arg("solve")
        .arg("nonexistent")
        .arg("--dir")
        .arg(temp_dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("not found"));
}

#[test]
fn test_cli_solve_state_limit() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("ferry").unwrap();
    cmd.arg("solve")
        .arg("missionaries")
        .arg("--max-states")
        .arg("5")
        .arg("--dir")
        .arg(temp_dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Resource limit exceeded: max_visited_states"));
}

#[test]
fn test_cli_reports_semantic_errors() {
    let temp_dir = TempDir::new().unwrap();
    let river_file = temp_dir.path().join("typo.river");

    fs::write(
        &river_file,
        r#"puzzle typo
boat capacity 2
passenger Farmer navigator
passenger Wolf
passenger Goat
Goat dies with wolf unless Farmer
start left
goal right
"#,
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("ferry").unwrap();
    cmd.arg("solve")
        .arg("typo")
        .arg("--dir")
        .arg(temp_dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Undefined species: 'wolf'"))
        .stderr(predicate::str::contains("Did you mean 'Wolf'?"));
}
