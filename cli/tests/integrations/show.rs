use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

#[test]
fn test_cli_show_catalog_puzzle() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("ferry").unwrap();
    cmd.arg("show")
        .arg("farmer")
        .arg("--dir")
        .arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Boat capacity 2 at Left"))
        .stdout(predicate::str::contains("Cabbage"))
        .stdout(predicate::str::contains("with Goat unless Farmer"));
}

#[test]
fn test_cli_show_unknown_puzzle() {
    let temp_dir = TempDir::new().unwrap();

    let mut cmd = Command::cargo_bin("ferry").unwrap();
    cmd.arg("show")
        .arg("nonexistent")
        .arg("--dir")
        .arg(temp_dir.path());

    cmd.assert()
        .failure()
        .stderr(predicate::str::contains("Puzzle 'nonexistent' not found"));
}
