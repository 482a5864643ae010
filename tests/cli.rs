use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn calc(dir: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("decimal-calc").unwrap();
    cmd.current_dir(dir)
        .env_remove("ENVIRONMENT")
        .env_remove("CALC_HISTORY_FILE")
        .env_remove("CALC_HISTORY_LIMIT")
        .env_remove("CALC_LOG_DIR")
        .env("RUST_LOG", "off");
    cmd
}

#[test]
fn session_saves_history_and_exits_cleanly() {
    let dir = tempdir().unwrap();

    calc(dir.path())
        .write_stdin("add 3 5\nfoo 1 2\ndivide 1 0\nhistory save\n  EXIT \nadd 1 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("History file 'history.csv' not found."))
        .stdout(predicate::str::contains("The result of adding 3 and 5 is equal to 8."))
        .stdout(predicate::str::contains("No such command: foo"))
        .stdout(predicate::str::contains("Error: Division by zero is not allowed."))
        .stdout(predicate::str::contains("History saved to history.csv."))
        .stdout(predicate::str::contains("Exiting..."))
        .stdout(predicate::str::contains("The result of adding 1 and 1").not());

    let saved = std::fs::read_to_string(dir.path().join("history.csv")).unwrap();
    let lines: Vec<&str> = saved.lines().collect();
    assert_eq!(lines, vec!["Command", "add 3 5", "divide 1 0"]);
    assert!(dir.path().join("logs").join("app.log").exists());
}

#[test]
fn history_is_restored_on_next_start() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("saved.csv"), "Command\nmean 1 2 3\n").unwrap();

    calc(dir.path())
        .args(["--history-file", "saved.csv", "--log-dir", "var/log"])
        .write_stdin("history\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("History loaded from saved.csv."))
        .stdout(predicate::str::contains("│ mean 1 2 3 │"));

    assert!(dir.path().join("var/log/app.log").exists());
}

#[test]
fn end_of_input_is_a_clean_exit() {
    let dir = tempdir().unwrap();
    calc(dir.path())
        .arg("--no-history-load")
        .write_stdin("mean 1 2 3\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("The mean of 1.0, 2.0, 3.0 is 2.0."))
        .stdout(predicate::str::contains("not found").not());
}
