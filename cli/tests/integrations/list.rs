use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;

#[test]
fn test_cli_list_catalog_and_files() {
    let temp_dir = TempDir::new().unwrap();
    let nested = temp_dir.path().join("nested");
    fs::create_dir(&nested).unwrap();

    fs::write(
        nested.join("rower.river"),
        "puzzle rower\nboat capacity 1\npassenger Rower navigator\nstart left\ngoal right\n",
    )
    .unwrap();

    let mut cmd = Command::cargo_bin("ferry").unwrap();
    cmd.arg("list").arg("--dir").arg(temp_dir.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Found 6 puzzles (catalog and 1 .river file)"))
        .stdout(predicate::str::contains("missionaries"))
        .stdout(predicate::str::contains("rower"));
}

#[test]
fn test_cli_help_lists_commands() {
    let mut cmd = Command::cargo_bin("ferry").unwrap();
    cmd.arg("--help");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("solve"))
        .stdout(predicate::str::contains("show"))
        .stdout(predicate::str::contains("list"));
}
