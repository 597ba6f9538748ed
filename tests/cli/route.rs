use crate::cli::support::Fixture;
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn test_route_bfs_human() {
    let fx = Fixture::triangle();
    fx.rota()
        .args(["route", "A", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Route: A -> C (Breadth-first)"))
        .stdout(predicate::str::contains("Path found: 1 step: A -> C"))
        .stdout(predicate::str::contains("Visited (2): A, B"))
        .stdout(predicate::str::contains("Cost:").not());
}

#[test]
fn test_route_dijkstra_takes_cheaper_route() {
    let fx = Fixture::triangle();
    fx.rota()
        .args(["route", "A", "C", "--strategy", "dijkstra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path found: 2 steps: A -> B -> C"))
        .stdout(predicate::str::contains("Cost: 2"));
}

#[test]
fn test_route_json() {
    let fx = Fixture::triangle();
    let output = fx
        .rota()
        .args(["--format", "json", "route", "A", "C", "-s", "ucs"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["strategy"], "uniform-cost");
    assert_eq!(json["outcome"], "found");
    assert_eq!(json["path"], serde_json::json!(["A", "B", "C"]));
    assert_eq!(json["cost"], 2.0);
    assert!(json.get("groups").is_none());
}

#[test]
fn test_route_json_with_groups() {
    let fx = Fixture::triangle();
    let output = fx
        .rota()
        .args(["--format", "json", "route", "A", "C", "--groups"])
        .output()
        .unwrap();

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["groups"][0]["vertex"], "A");
    assert_eq!(json["groups"][0]["reached"], serde_json::json!(["B"]));
}

#[test]
fn test_route_records() {
    let fx = Fixture::triangle();
    fx.rota()
        .args(["--format", "records", "route", "A", "C"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("H rota="))
        .stdout(predicate::str::contains("strategy=bfs"))
        .stdout(predicate::str::contains("S steps=1 visited=2 expanded=1"))
        .stdout(predicate::str::contains("P 1 \"C\""));
}

#[test]
fn test_route_no_path_is_success() {
    let fx = Fixture::triangle();
    fx.rota()
        .args(["route", "A", "Z"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path found from A to Z"));
}

#[test]
fn test_route_directed_by_default() {
    let fx = Fixture::triangle();
    fx.rota()
        .args(["route", "C", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No path found"));

    fx.rota()
        .args(["--undirected", "route", "C", "A"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path found: 1 step: C -> A"));
}

#[test]
fn test_route_depth_limited_exhausts() {
    let fx = Fixture::triangle();
    fx.rota()
        .args(["route", "A", "C", "--strategy", "dls", "--limit", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "Step limit 0 reached before C was found",
        ));
}

#[test]
fn test_route_negative_limit_clamps() {
    let fx = Fixture::triangle();
    let output = fx
        .rota()
        .args(["--format", "json", "route", "A", "C", "-s", "dls", "--limit", "-5"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["outcome"], "limit_exhausted");
    assert_eq!(json["expanded"], 0);
}

#[test]
fn test_route_bidirectional_reports_meeting_point() {
    let fx = Fixture::triangle();
    fx.rota()
        .args(["route", "A", "C", "--strategy", "bidi"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Met at: C"));
}

#[test]
fn test_route_quiet_hides_visited() {
    let fx = Fixture::triangle();
    fx.rota()
        .args(["--quiet", "route", "A", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path found"))
        .stdout(predicate::str::contains("Visited").not());
}

#[test]
fn test_route_same_origin_and_goal() {
    let fx = Fixture::triangle();
    fx.rota()
        .args(["route", "B", "B", "-s", "dijkstra"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Path found: 0 steps: B"))
        .stdout(predicate::str::contains("Cost: 0"));
}
