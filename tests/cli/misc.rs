use crate::cli::support::rota;
use predicates::prelude::*;

#[test]
fn test_help_flag() {
    rota()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: rota"))
        .stdout(predicate::str::contains("route"))
        .stdout(predicate::str::contains("compare"))
        .stdout(predicate::str::contains("neighbors"))
        .stdout(predicate::str::contains("edges"));
}

#[test]
fn test_help_notes_undirected_cannot_be_turned_off() {
    rota()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "cannot turn off `undirected = true` from rota.toml",
        ));
}

#[test]
fn test_version_flag() {
    rota()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("rota"));
}

#[test]
fn test_route_help_lists_strategies() {
    rota()
        .args(["route", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("dijkstra"));
}

#[test]
fn test_no_subcommand_prints_banner() {
    let dir = tempfile::tempdir().unwrap();
    rota()
        .current_dir(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("rota --help"));
}
