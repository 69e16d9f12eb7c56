use assert_cmd::cargo_bin;
use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::process::Command;

mod common;
use common::{accounts_csv, payments_csv};

#[test]
fn test_cli_end_to_end() {
    let accounts = accounts_csv(&[
        "11111111, 100, chaps, live",
        "22222222, 100, chaps, disabled",
        "33333333, 100, faster_payments, live",
        "44444444, 100, bacs, live",
    ]);
    let payments = payments_csv(&[
        "11111111, 99999999, 10, chaps, 2026-10-18T09:00:00Z",
        "22222222, 99999999, 10, chaps, 2026-10-18T09:01:00Z",
        "33333333, 99999999, 500, faster_payments, 2026-10-18T09:02:00Z",
        "33333333, 99999999, 10, faster_payments, 2026-10-18T09:03:00Z",
        "55555555, 99999999, 10, bacs, 2026-10-18T09:04:00Z",
        "44444444, 99999999, 10, chaps, 2026-10-18T09:05:00Z",
    ]);
    let out = tempfile::NamedTempFile::new().unwrap();

    let mut cmd = Command::new(cargo_bin!("schemepay"));
    cmd.arg(accounts.path())
        .arg(payments.path())
        .arg("--accounts-out")
        .arg(out.path())
        .env_remove("DATA_STORE_TYPE");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "debtor,creditor,scheme,amount,success,reason",
        ))
        .stdout(predicate::str::contains("11111111,99999999,chaps,10,true,\n"))
        .stdout(predicate::str::contains(
            "22222222,99999999,chaps,10,false,account_not_live",
        ))
        .stdout(predicate::str::contains(
            "33333333,99999999,faster_payments,500,false,insufficient_funds",
        ))
        .stdout(predicate::str::contains(
            "33333333,99999999,faster_payments,10,true,\n",
        ))
        .stdout(predicate::str::contains(
            "55555555,99999999,bacs,10,false,account_not_found",
        ))
        .stdout(predicate::str::contains(
            "44444444,99999999,chaps,10,false,scheme_not_allowed",
        ));

    let final_state = std::fs::read_to_string(out.path()).unwrap();
    assert!(final_state.contains("11111111,90,chaps,live"));
    assert!(final_state.contains("22222222,100,chaps,disabled"));
    assert!(final_state.contains("33333333,90,faster_payments,live"));
    assert!(final_state.contains("44444444,100,bacs,live"));
}

#[test]
fn test_cli_backup_store_selection() {
    let primary = accounts_csv(&["11111111, 100, bacs, live"]);
    let backup = accounts_csv(&["11111111, 300, bacs, live"]);
    let payments = payments_csv(&["11111111, 99999999, 25, bacs, 2026-10-18T09:00:00Z"]);
    let out = tempfile::NamedTempFile::new().unwrap();

    let mut cmd = Command::new(cargo_bin!("schemepay"));
    cmd.arg(primary.path())
        .arg(payments.path())
        .arg("--backup-accounts")
        .arg(backup.path())
        .arg("--data-store")
        .arg("Backup")
        .arg("--accounts-out")
        .arg(out.path());

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("11111111,99999999,bacs,25,true,"));

    let final_state = std::fs::read_to_string(out.path()).unwrap();
    assert!(final_state.contains("11111111,100,bacs,live"));
    assert!(final_state.contains("11111111,275,bacs,live"));
}

#[test]
fn test_cli_selector_from_environment() {
    let primary = accounts_csv(&[]);
    let backup = accounts_csv(&["11111111, 50, chaps, live"]);
    let payments = payments_csv(&["11111111, 99999999, 5, chaps, 2026-10-18T09:00:00Z"]);

    let mut cmd = Command::new(cargo_bin!("schemepay"));
    cmd.arg(primary.path())
        .arg(payments.path())
        .arg("--backup-accounts")
        .arg(backup.path())
        .env("DATA_STORE_TYPE", "Backup");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains("11111111,99999999,chaps,5,true,"));
}

#[test]
fn test_cli_skips_malformed_payments() {
    let accounts = accounts_csv(&[
        "11111111, 100, bacs|chaps, live",
        "22222222, plenty, bacs, live",
    ]);
    let payments = payments_csv(&[
        "11111111, 99999999, 10, bacs, 2026-10-18T09:00:00Z",
        "11111111, 99999999, 10, swift, 2026-10-18T09:01:00Z",
        "11111111, 99999999, not_a_number, bacs, 2026-10-18T09:02:00Z",
        "11111111, 99999999, 5, chaps, 2026-10-18T09:03:00Z",
    ]);

    let mut cmd = Command::new(cargo_bin!("schemepay"));
    cmd.arg(accounts.path())
        .arg(payments.path())
        .env_remove("DATA_STORE_TYPE")
        .env_remove("RUST_LOG");

    cmd.assert()
        .success()
        .stderr(predicate::str::contains("skipping unreadable account record"))
        .stderr(predicate::str::contains("skipping unreadable payment record"))
        .stdout(predicate::str::contains("11111111,99999999,bacs,10,true,"))
        .stdout(predicate::str::contains("11111111,99999999,chaps,5,true,"))
        .stdout(predicate::str::contains("swift").not());
}

#[test]
fn test_cli_missing_input_fails() {
    let mut cmd = Command::new(cargo_bin!("schemepay"));
    cmd.arg("does/not/exist.csv").arg("also/missing.csv");

    cmd.assert().failure();
}

#[test]
fn test_cli_keeps_decimal_precision() {
    let accounts = accounts_csv(&["11111111, 100.000000000000000001, faster_payments, live"]);
    let payments = payments_csv(&["11111111, 99999999, 100, faster_payments, 2026-10-18T09:00:00Z"]);
    let out = tempfile::NamedTempFile::new().unwrap();

    let mut cmd = Command::new(cargo_bin!("schemepay"));
    cmd.arg(accounts.path())
        .arg(payments.path())
        .arg("--accounts-out")
        .arg(out.path())
        .env_remove("DATA_STORE_TYPE");

    cmd.assert()
        .success()
        .stdout(predicate::str::contains(
            "11111111,99999999,faster_payments,100,true,",
        ));

    let final_state = std::fs::read_to_string(out.path()).unwrap();
    assert!(final_state.contains("11111111,0.000000000000000001,faster_payments,live"));
}
