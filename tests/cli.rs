#![forbid(unsafe_code)]
use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::tempdir;

fn cli(roster: &std::path::Path) -> Command {
    let mut cmd = Command::cargo_bin("semainier-cli").unwrap();
    cmd.arg("--roster").arg(roster);
    cmd
}

#[test]
fn generate_on_empty_registry_warns_and_exits_2() {
    let dir = tempdir().unwrap();
    let roster = dir.path().join("roster.json");

    cli(&roster)
        .arg("generate")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("WEEKLY SCHEDULE"))
        .stderr(predicate::str::contains("minimum staffing"));
}

#[test]
fn add_employee_then_list() {
    let dir = tempdir().unwrap();
    let roster = dir.path().join("roster.json");

    cli(&roster)
        .args(["add-employee", "--name", "Alice"])
        .assert()
        .success();

    cli(&roster)
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("Alice"));
}

#[test]
fn preferences_flow_through_generate() {
    let dir = tempdir().unwrap();
    let roster = dir.path().join("roster.json");

    for name in ["Alice", "Bob"] {
        cli(&roster)
            .args(["add-employee", "--name", name])
            .assert()
            .success();
        cli(&roster)
            .args([
                "add-preference",
                "--name",
                name,
                "--day",
                "monday",
                "--shift",
                "morning",
                "--priority",
                "3",
            ])
            .assert()
            .success();
    }

    // sous-effectif ailleurs dans la semaine : code 2, mais le créneau
    // préféré est bien rempli
    cli(&roster)
        .arg("generate")
        .assert()
        .code(2)
        .stdout(predicate::str::contains("Morning   : Alice Bob (2 employees)"));
}
