//! Integration tests for the tasklist CLI

use assert_cmd::cargo;
use assert_cmd::Command;
use predicates::prelude::*;

/// Get a Command for the tasklist binary with plain, non-pausing output
fn tasklist() -> Command {
    let mut cmd = Command::new(cargo::cargo_bin!("tasklist"));
    cmd.arg("--no-color").arg("--no-clear");
    cmd
}

#[test]
fn test_help() {
    Command::new(cargo::cargo_bin!("tasklist"))
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Interactive in-memory task list"));
}

#[test]
fn test_version() {
    Command::new(cargo::cargo_bin!("tasklist"))
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("0.1.0"));
}

#[test]
fn test_exit_immediately() {
    tasklist()
        .write_stdin("6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("=== SIMPLE TASK MANAGER ==="))
        .stdout(predicate::str::contains("=== MAIN MENU ==="))
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_end_of_input_exits_cleanly() {
    tasklist()
        .write_stdin("")
        .assert()
        .success()
        .stdout(predicate::str::contains("Goodbye!"));
}

#[test]
fn test_add_complete_delete_scenario() {
    tasklist()
        .write_stdin("1\nBuy milk\n1\nWalk dog\n3\n1\n4\n2\n2\n5\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Task added: Buy milk"))
        .stdout(predicate::str::contains("Task added: Walk dog"))
        .stdout(predicate::str::contains("Task 1 marked as completed."))
        .stdout(predicate::str::contains("Task 2 deleted."))
        .stdout(predicate::str::contains("[✓] 1. Buy milk ("))
        .stdout(predicate::str::contains("2. Walk dog (").not())
        .stdout(predicate::str::contains("Total tasks: 1"))
        .stdout(predicate::str::contains("Completed: 1"))
        .stdout(predicate::str::contains("Pending: 0"));
}

#[test]
fn test_list_sorted_after_deletes() {
    let output = tasklist()
        .write_stdin("1\na\n1\nb\n1\nc\n4\n2\n1\nd\n2\n6\n")
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let stdout = String::from_utf8(output).unwrap();

    let first = stdout.find("] 1. a (").unwrap();
    let third = stdout.find("] 3. c (").unwrap();
    let fourth = stdout.find("] 4. d (").unwrap();
    assert!(first < third && third < fourth);
    assert!(!stdout.contains("] 2. b ("));
}

#[test]
fn test_rejections_are_not_fatal() {
    tasklist()
        .write_stdin("1\n   \n3\nabc\n3\n99\n8\n2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Description must not be empty."))
        .stdout(predicate::str::contains("Invalid ID."))
        .stdout(predicate::str::contains("No task found with ID 99."))
        .stdout(predicate::str::contains(
            "Invalid option. Please choose an option from 1 to 6.",
        ))
        .stdout(predicate::str::contains("No tasks in the list."));
}

#[test]
fn test_padded_menu_choice_rejected() {
    tasklist()
        .write_stdin(" 1 \nBuy milk\n2\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid option. Please choose an option from 1 to 6.",
        ))
        .stdout(predicate::str::contains("Task added").not())
        .stdout(predicate::str::contains("No tasks in the list."));
}

#[test]
fn test_pause_prompt_by_default() {
    Command::new(cargo::cargo_bin!("tasklist"))
        .arg("--no-color")
        .write_stdin("5\n\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Press Enter to continue...\n"))
        .stdout(predicate::str::contains("\x1b[2J"));
}

#[test]
fn test_no_clear_from_env() {
    Command::new(cargo::cargo_bin!("tasklist"))
        .arg("--no-color")
        .env("TASKLIST_NO_CLEAR", "true")
        .write_stdin("5\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Press Enter").not());
}

#[test]
fn test_logging_stays_off_stdout() {
    tasklist()
        .arg("--verbose")
        .write_stdin("1\nBuy milk\n6\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Added task").not())
        .stderr(predicate::str::contains("Added task"));
}
