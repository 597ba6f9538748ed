use crate::cli::support::Fixture;
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn test_compare_human_lists_every_strategy() {
    let fx = Fixture::triangle();
    fx.rota()
        .args(["compare", "A", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Breadth-first"))
        .stdout(predicate::str::contains("Iterative deepening"))
        .stdout(predicate::str::contains("Dijkstra"));
}

#[test]
fn test_compare_json() {
    let fx = Fixture::triangle();
    let output = fx
        .rota()
        .args(["--format", "json", "compare", "A", "C"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = json["results"].as_array().unwrap();
    assert_eq!(results.len(), 7);
    assert_eq!(results[0]["strategy"], "bfs");
    assert_eq!(results[0]["path"], serde_json::json!(["A", "C"]));
    assert_eq!(results[6]["strategy"], "dijkstra");
    assert_eq!(results[6]["cost"], 2.0);
    assert_eq!(json["limit"], 10);
}

#[test]
fn test_compare_records() {
    let fx = Fixture::triangle();
    fx.rota()
        .args(["--format", "records", "compare", "A", "C", "--limit", "3"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=compare"))
        .stdout(predicate::str::contains(
            "R strategy=dijkstra outcome=found steps=2",
        ));
}
