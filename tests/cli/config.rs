use crate::cli::support::{rota, Fixture, TRIANGLE};
use predicates::prelude::*;
use serde_json::Value;
use std::fs;

#[test]
fn test_config_file_in_current_directory() {
    let fx = Fixture::triangle();
    fx.write("rota.toml", "edges = \"edges.csv\"\ndefault_strategy = \"dijkstra\"\n");

    rota()
        .current_dir(fx.path())
        .args(["route", "A", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("(Dijkstra)"))
        .stdout(predicate::str::contains("Cost: 2"));
}

#[test]
fn test_cli_strategy_overrides_config() {
    let fx = Fixture::triangle();
    fx.write("rota.toml", "edges = \"edges.csv\"\ndefault_strategy = \"dijkstra\"\n");

    rota()
        .current_dir(fx.path())
        .args(["route", "A", "C", "--strategy", "bfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path found: 1 step: A -> C"));
}

#[test]
fn test_explicit_config_resolves_paths_against_its_directory() {
    let fx = Fixture::triangle();
    let sub = fx.path().join("data");
    fs::create_dir(&sub).unwrap();
    fs::write(sub.join("edges.csv"), TRIANGLE).unwrap();
    let config = fx.write("custom.toml", "edges = \"data/edges.csv\"\nundirected = true\n");

    rota()
        .arg("--config")
        .arg(&config)
        .args(["route", "C", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path found: 1 step: C -> A"));
}

#[test]
fn test_headerless_tables() {
    let fx = Fixture::new("A,B,1\nB,C,1\n");
    fx.rota()
        .args(["--no-header", "route", "A", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("A -> B -> C"));
}

#[test]
fn test_config_command_json() {
    let fx = Fixture::triangle();
    fx.write("rota.toml", "step_limit = 4\n");

    let output = fx
        .rota()
        .args(["--format", "json", "config"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["step_limit"], 4);
    assert_eq!(json["has_header"], true);
    assert_eq!(json["default_strategy"], "bfs");
}

#[test]
fn test_init_writes_config() {
    let fx = Fixture::triangle();
    rota()
        .current_dir(fx.path())
        .args(["--edges", "edges.csv", "init"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Wrote"));

    let content = fs::read_to_string(fx.path().join("rota.toml")).unwrap();
    let parsed: toml::Table = toml::from_str(&content).unwrap();
    assert_eq!(parsed["edges"].as_str(), Some("edges.csv"));
    assert_eq!(parsed["step_limit"].as_integer(), Some(10));

    rota()
        .current_dir(fx.path())
        .args(["route", "A", "C"])
        .assert()
        .success();
}

#[test]
fn test_init_refuses_to_overwrite() {
    let fx = Fixture::triangle();
    fx.write("rota.toml", "step_limit = 4\n");

    rota()
        .current_dir(fx.path())
        .arg("init")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("already exists"));

    rota()
        .current_dir(fx.path())
        .args(["init", "--force"])
        .assert()
        .success();
}
