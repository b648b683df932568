use assert_cmd::Command;
use predicates::prelude::*;

const EXPECTED: &str = "Iterative Fibonacci:\n\
                        0 1 1 2 3 5 8 13 21 34 \n\
                        Recursive Fibonacci:\n\
                        0 1 1 2 3 5 8 13 21 34 \n";

#[test]
fn prints_the_expected_block() {
    Command::cargo_bin("fibgen")
        .unwrap()
        .assert()
        .success()
        .stdout(predicate::str::diff(EXPECTED));
}

#[test]
fn logging_stays_off_stdout() {
    Command::cargo_bin("fibgen")
        .unwrap()
        .env("RUST_LOG", "debug")
        .assert()
        .success()
        .stdout(predicate::str::diff(EXPECTED));
}
