use assert_cmd::Command;
use assert_cmd::cargo_bin;
use predicates::prelude::*;

mod common;

#[test]
fn test_cli_end_to_end() -> Result<(), Box<dyn std::error::Error>> {
    let mut cmd = Command::new(cargo_bin!("teller"));
    cmd.write_stdin(common::script(&[
        "1", "1234", // create PIN
        "2", "1234", "100", // deposit
        "4", "1234", // check balance
        "6", "1234", // history
        "7",
    ]));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Account session #1 opened"))
        .stdout(predicate::str::contains("How would you like to proceed"))
        .stdout(predicate::str::contains("PIN set successfully"))
        .stdout(predicate::str::contains("Money successfully deposited"))
        .stdout(predicate::str::contains(
            "The balance in your account is: 100",
        ))
        .stdout(predicate::str::contains("Transaction History:"))
        .stdout(predicate::str::contains("Deposited: 100"))
        .stdout(predicate::str::contains("Exit!"));

    Ok(())
}

#[test]
fn test_cli_runs_sequential_sessions_with_increasing_serials() {
    let mut cmd = Command::new(cargo_bin!("teller"));
    cmd.arg("--sessions").arg("2");
    cmd.write_stdin(common::script(&["7", "7"]));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("Account session #1 opened"))
        .stdout(predicate::str::contains("Account session #2 opened"));
}

#[test]
fn test_cli_exits_cleanly_when_input_closes_at_menu() {
    let mut cmd = Command::new(cargo_bin!("teller"));
    cmd.write_stdin(common::script(&["1", "1234"]));

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("PIN set successfully"))
        .stdout(predicate::str::contains("Exit!").not());
}
