use std::{
    path::PathBuf,
    sync::atomic::{AtomicU32, Ordering},
};

use assert_cmd::Command;
use predicates::prelude::*;

fn cmd() -> Command {
    Command::cargo_bin("modalk").unwrap()
}

/// Writes `contents` to a uniquely named file under the OS temp dir and
/// returns its path. Leaked deliberately: these are a handful of bytes
/// per test run, cleaned up by the OS temp dir's own housekeeping.
fn formula_file(contents: &str) -> PathBuf {
    static COUNTER: AtomicU32 = AtomicU32::new(0);
    let n = COUNTER.fetch_add(1, Ordering::Relaxed);
    let path = std::env::temp_dir().join(format!("modalk-cli-test-{}-{n}.formula", std::process::id()));
    std::fs::write(&path, contents).unwrap();
    path
}

/// Asserts what is part of the CLI's documented interface; changes here
/// should be deliberate, not incidental.
#[test]
fn test_help_text() {
    let stdout = String::from_utf8(
        cmd()
            .arg("--help")
            .assert()
            .success()
            .get_output()
            .stdout
            .clone(),
    )
    .unwrap();

    assert!(stdout.contains("Proof-checker for modal logic K"));
    assert!(stdout.contains("--timeout"));
    assert!(stdout.contains("--no-color"));
}

/// Scenario 1 from the testable-properties list: a bare atom against a
/// one-world witness that satisfies it.
#[test]
fn scenario_satisfied_atom_is_ok() {
    let f = formula_file("p1");
    cmd()
        .arg(&f)
        .write_stdin("s SATISFIABLE\nv 1 1 0 0\nv 1 0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("OK 1"));
}

/// Scenario 2: a negated atom refuted by the witness.
#[test]
fn scenario_opposite_atom_is_refuted() {
    let f = formula_file("~p1");
    cmd()
        .arg(&f)
        .write_stdin("s SATISFIABLE\nv 1 1 0 0\nv 1 0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("ERROR: model is incorrect"));
}

/// Scenario 3: an unassigned atom is UNKNOWN, not an error.
#[test]
fn scenario_unassigned_atom_is_unknown() {
    let f = formula_file("p1");
    cmd()
        .arg(&f)
        .write_stdin("s SATISFIABLE\nv 1 1 0 0\nv 0 0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("UNKNOWN"));
}

/// Scenario 4: box over a conjunction across an edge.
#[test]
fn scenario_box_of_conjunction_across_an_edge() {
    let f = formula_file("[r1](p1 & p2)");
    cmd()
        .arg(&f)
        .write_stdin("s SATISFIABLE\nv 2 2 0 0\nv 0 0 0\nv 1 1 0\nv e w0 w1 0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("OK 2"));
}

/// Scenario 5: a diamond with no successors is UNKNOWN, never KO.
#[test]
fn scenario_diamond_with_no_successors_is_unknown() {
    let f = formula_file("<r1>p1");
    cmd()
        .arg(&f)
        .write_stdin("s SATISFIABLE\nv 1 1 0 0\nv 0 0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("UNKNOWN"));
}

/// Scenario 6: chain-shrinking across a straight-line run of worlds.
#[test]
fn scenario_chain_of_boxes_shrinks_through_a_linear_model() {
    let f = formula_file("[r1][r1][r1]p1");
    cmd()
        .arg(&f)
        .write_stdin(
            "s SATISFIABLE\nv 1 4 0 0\nv 0 0\nv 0 0\nv 0 0\nv 1 0\nv e w0 w1 0\nv e w1 w2 0\nv e w2 w3 0\n",
        )
        .assert()
        .success()
        .stdout(predicate::str::contains("OK 4"));
}

/// Scenario 7: box-lifting normalises a pre-normal conjunction of boxes
/// before checking, landing on the same outcome as scenario 4.
#[test]
fn scenario_pre_normal_form_lifts_before_checking() {
    let f = formula_file("[r1]p1 & [r1]p2");
    cmd()
        .arg(&f)
        .write_stdin("s SATISFIABLE\nv 2 2 0 0\nv 0 0 0\nv 1 1 0\nv e w0 w1 0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("OK 2"));
}

#[test]
fn unsatisfiable_witness_is_a_fixed_error_message() {
    let f = formula_file("p1");
    cmd()
        .arg(&f)
        .write_stdin("s UNSATISFIABLE\n")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "UNSATISFIABLE formulae are not checkable yet.",
        ));
}

#[test]
fn missing_status_line_is_a_fixed_error_message() {
    let f = formula_file("p1");
    cmd()
        .arg(&f)
        .write_stdin("c nothing here\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("solution not in Kripke-CNF."));
}

#[test]
fn unreadable_formula_file_is_a_usage_failure() {
    cmd()
        .arg("/nonexistent/path/to/formula.txt")
        .write_stdin("s SATISFIABLE\nv 1 1 0 0\nv 1 0\n")
        .assert()
        .failure()
        .code(2);
}
