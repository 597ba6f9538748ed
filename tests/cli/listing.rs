use crate::cli::support::Fixture;
use predicates::prelude::*;
use serde_json::Value;

#[test]
fn test_vertices_in_insertion_order() {
    let fx = Fixture::triangle();
    fx.rota()
        .arg("vertices")
        .assert()
        .success()
        .stdout(predicate::str::is_match(r"(?s)^A  out=2 in=0\nB  out=1 in=1\nC  out=0 in=2\n").unwrap());
}

#[test]
fn test_vertices_with_locations() {
    let fx = Fixture::triangle();
    let locations = fx.write("cities.csv", "id,x,y\nA,0,0\nB,1,2\nC,3,1\nY,9,9\n");
    fx.rota()
        .arg("--locations")
        .arg(&locations)
        .arg("vertices")
        .assert()
        .success()
        .stdout(predicate::str::contains("B  out=1 in=1  (1, 2)"))
        .stderr(predicate::str::contains("no location for vertex"));
}

#[test]
fn test_vertices_json() {
    let fx = Fixture::triangle();
    let output = fx
        .rota()
        .args(["--format", "json", "vertices"])
        .output()
        .unwrap();

    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    let entries = json.as_array().unwrap();
    assert_eq!(entries.len(), 5);
    assert_eq!(entries[0]["id"], "A");
    assert_eq!(entries[0]["out_degree"], 2);
    assert!(entries[0].get("x").is_none());
}

#[test]
fn test_neighbors_in_stored_order() {
    let fx = Fixture::triangle();
    fx.rota()
        .args(["neighbors", "A"])
        .assert()
        .success()
        .stdout("A -> B (1)\nA -> C (5)\n");
}

#[test]
fn test_neighbors_records() {
    let fx = Fixture::triangle();
    fx.rota()
        .args(["--format", "records", "--undirected", "neighbors", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=neighbors"))
        .stdout(predicate::str::contains("N \"C\" \"B\" weight=1"))
        .stdout(predicate::str::contains("N \"C\" \"A\" weight=5"));
}

#[test]
fn test_neighbors_of_sink() {
    let fx = Fixture::triangle();
    fx.rota()
        .args(["neighbors", "C"])
        .assert()
        .success()
        .stdout(predicate::str::contains("No edges leave C"));
}

#[test]
fn test_edges_lists_each_pair_once() {
    let fx = Fixture::triangle();
    let expected = "A -- B\nA -- C\nB -- C\nY -- Z\n";
    fx.rota().arg("edges").assert().success().stdout(expected);
    fx.rota()
        .args(["--undirected", "edges"])
        .assert()
        .success()
        .stdout(expected);
}

#[test]
fn test_edges_json_and_records() {
    let fx = Fixture::new("origin,neighbor,weight\nA,B,1\nB,A,2\n");
    let output = fx
        .rota()
        .args(["--format", "json", "edges"])
        .output()
        .unwrap();
    let json: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json, serde_json::json!([{"a": "A", "b": "B"}]));

    fx.rota()
        .args(["--format", "records", "edges"])
        .assert()
        .success()
        .stdout(predicate::str::contains("mode=edges"))
        .stdout(predicate::str::contains("E \"A\" \"B\""));
}
