use crate::cli::support::{rota, Fixture};
use predicates::prelude::*;

#[test]
fn test_unknown_vertex_exit_code_3() {
    let fx = Fixture::triangle();
    fx.rota()
        .args(["route", "A", "Q"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown vertex: Q"));
}

#[test]
fn test_unknown_vertex_json_envelope() {
    let fx = Fixture::triangle();
    fx.rota()
        .args(["--format", "json", "neighbors", "Q"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("\"type\":\"unknown_vertex\""));
}

#[test]
fn test_negative_weight_exit_code_3() {
    let fx = Fixture::new("origin,neighbor,weight\nA,B,1\nB,C,-1\n");
    fx.rota()
        .args(["route", "A", "C"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("malformed edge record 2: negative weight"));
}

#[test]
fn test_non_numeric_weight_exit_code_3() {
    let fx = Fixture::new("origin,neighbor,weight\nA,B,far\n");
    fx.rota()
        .args(["vertices"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("weight is not a number"));
}

#[test]
fn test_missing_edge_table_exit_code_3() {
    let dir = tempfile::tempdir().unwrap();
    rota()
        .current_dir(dir.path())
        .args(["route", "A", "B"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("no edge table configured"));
}

#[test]
fn test_missing_edge_file_exit_code_1() {
    let dir = tempfile::tempdir().unwrap();
    rota()
        .current_dir(dir.path())
        .args(["--edges", "nope.csv", "vertices"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("failed to open"));
}

#[test]
fn test_unknown_strategy_exit_code_2() {
    let fx = Fixture::triangle();
    fx.rota()
        .args(["route", "A", "C", "--strategy", "astar"])
        .assert()
        .code(2);
}

#[test]
fn test_unknown_format_exit_code_2() {
    let fx = Fixture::triangle();
    fx.rota()
        .args(["--format", "yaml", "vertices"])
        .assert()
        .code(2);
}

#[test]
fn test_usage_error_json_envelope() {
    rota()
        .args(["--format", "json", "route", "A"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"type\":\"usage_error\""));
}

#[test]
fn test_bad_config_is_reported() {
    let fx = Fixture::triangle();
    fx.write("rota.toml", "default_strategy = \"astar\"\n");
    rota()
        .current_dir(fx.path())
        .args(["route", "A", "C"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("astar"));
}
