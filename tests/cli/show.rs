use crate::cli::support::{graphpath_in, setup_graph, DIAMOND};
use predicates::prelude::*;

// ============================================================================
// Show command tests
// ============================================================================

#[test]
fn test_show_prints_sorted_neighbors() {
    let dir = setup_graph(DIAMOND);

    graphpath_in(&dir)
        .args(["show", "graph.csv"])
        .assert()
        .success()
        .stdout("A [B, C]\nB [D]\nC [D]\nD []\n");
}

#[test]
fn test_show_omits_placeholders() {
    let dir = setup_graph("A,,C,B,\nB\nC\n");

    graphpath_in(&dir)
        .args(["show", "graph.csv"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("A [B, C]\n"));
}

#[test]
fn test_show_json_keeps_file_order() {
    let dir = setup_graph("C,A\nA,C,B,\nB\n");

    let output = graphpath_in(&dir)
        .args(["show", "graph.csv", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let json: serde_json::Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(json["A"], serde_json::json!(["B", "C"]));
    assert_eq!(json["B"], serde_json::json!([]));

    let c = stdout.find("\"C\":").unwrap();
    let a = stdout.find("\"A\":").unwrap();
    assert!(c < a, "nodes should appear in file order");
}

#[test]
fn test_show_missing_file() {
    let dir = setup_graph(DIAMOND);

    graphpath_in(&dir)
        .args(["show", "nope.csv"])
        .assert()
        .code(3);
}
