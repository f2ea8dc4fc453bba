use assert_cmd::Command;
use assert_cmd::cargo_bin;
use predicates::prelude::*;

mod common;

#[test]
fn test_malformed_selections_keep_the_menu_alive() {
    let mut cmd = Command::new(cargo_bin!("teller"));
    cmd.write_stdin(common::script(&[
        "banana", // not a number
        "42",     // out of range
        "1", "1234", // still works afterwards
        "7",
    ]));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "Invalid input: not a menu number: banana",
        ))
        .stdout(predicate::str::contains("Unrecognized menu option: 42"))
        .stdout(predicate::str::contains("PIN set successfully"))
        .stdout(predicate::str::contains("Exit!"));
}

#[test]
fn test_malformed_amount_keeps_the_session_alive() {
    let mut cmd = Command::new(cargo_bin!("teller"));
    cmd.write_stdin(common::script(&[
        "1", "1234", //
        "2", "1234", "abc", // not a number
        "2", "1234", "50", // works afterwards
        "4", "1234", //
        "7",
    ]));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Invalid input: not a number: abc"))
        .stdout(predicate::str::contains("Money successfully deposited"))
        .stdout(predicate::str::contains(
            "The balance in your account is: 50",
        ));
}

#[test]
fn test_input_closing_mid_operation_fails() {
    let mut cmd = Command::new(cargo_bin!("teller"));
    // Selection 2 starts a deposit, then stdin closes before the PIN prompt
    // can be answered.
    cmd.write_stdin(common::script(&["2"]));

    cmd.assert().failure();
}
