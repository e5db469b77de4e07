use assert_cmd::Command;
use predicates::prelude::*;

// The binary refuses to run without a real terminal: the first layout pass
// cannot determine a size and the error propagates out of the loop. Both
// tests pipe stdio, so they exercise exactly that path deterministically.

#[test]
fn piped_output_fails_with_terminal_error() {
    let temp_dir = tempfile::tempdir().unwrap();

    let mut cmd = Command::cargo_bin("tallyz").unwrap();
    cmd.current_dir(temp_dir.path())
        .write_stdin("/quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("terminal"));
}

#[test]
fn malformed_data_file_fails_before_drawing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let data_file = temp_dir.path().join("broken.json");
    std::fs::write(&data_file, "{ not json").unwrap();

    let mut cmd = Command::cargo_bin("tallyz").unwrap();
    cmd.current_dir(temp_dir.path())
        .arg("broken.json")
        .write_stdin("/quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Serialization error"));
}
