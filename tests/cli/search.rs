use crate::cli::support::{graphpath_in, setup_graph, write_config, DIAMOND};
use predicates::prelude::*;

// ============================================================================
// Search command tests
// ============================================================================

#[test]
fn test_search_runs_both_engines() {
    let dir = setup_graph(DIAMOND);

    graphpath_in(&dir)
        .args(["search", "graph.csv", "A", "D"])
        .assert()
        .success()
        .stdout(
            "Breadth-first search\nA -> B -> D\n\nDepth-first search\nA -> B -> D\n",
        );
}

#[test]
fn test_search_bfs_finds_shortest_dfs_finds_first() {
    let dir = setup_graph("A,B,D\nB,C\nC,E\nD,E\nE\n");

    graphpath_in(&dir)
        .args(["search", "graph.csv", "A", "E"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Breadth-first search\nA -> D -> E\n"))
        .stdout(predicate::str::contains("Depth-first search\nA -> B -> C -> E\n"));
}

#[test]
fn test_search_single_algorithm() {
    let dir = setup_graph(DIAMOND);

    graphpath_in(&dir)
        .args(["search", "graph.csv", "A", "D", "--algorithm", "dfs"])
        .assert()
        .success()
        .stdout("Depth-first search\nA -> B -> D\n");
}

#[test]
fn test_search_custom_separator() {
    let dir = setup_graph(DIAMOND);

    graphpath_in(&dir)
        .args(["search", "graph.csv", "A", "D", "-a", "bfs", "-s", ","])
        .assert()
        .success()
        .stdout("Breadth-first search\nA,B,D\n");
}

#[test]
fn test_search_no_path_is_success() {
    let dir = setup_graph(DIAMOND);

    graphpath_in(&dir)
        .args(["search", "graph.csv", "D", "A"])
        .assert()
        .success()
        .stdout(
            "Breadth-first search\nNo path was found\n\nDepth-first search\nNo path was found\n",
        );
}

#[test]
fn test_search_start_equals_end() {
    let dir = setup_graph(DIAMOND);

    graphpath_in(&dir)
        .args(["search", "graph.csv", "C", "C", "-a", "bfs"])
        .assert()
        .success()
        .stdout("Breadth-first search\nC\n");
}

#[test]
fn test_search_json_output() {
    let dir = setup_graph(DIAMOND);

    let output = graphpath_in(&dir)
        .args(["--format", "json", "search", "graph.csv", "A", "D"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    let results = json.as_array().unwrap();
    assert_eq!(results.len(), 2);
    assert_eq!(results[0]["algorithm"], "bfs");
    assert_eq!(results[0]["from"], "A");
    assert_eq!(results[0]["to"], "D");
    assert_eq!(results[0]["found"], true);
    assert_eq!(results[0]["path"], serde_json::json!(["A", "B", "D"]));
    assert_eq!(results[0]["path_length"], 2);
    assert_eq!(results[1]["algorithm"], "dfs");
}

#[test]
fn test_search_config_supplies_defaults() {
    let dir = setup_graph(DIAMOND);
    write_config(&dir, "separator = \" > \"\nalgorithm = \"bfs\"\n");

    graphpath_in(&dir)
        .args(["search", "graph.csv", "A", "D"])
        .assert()
        .success()
        .stdout("Breadth-first search\nA > B > D\n");
}

#[test]
fn test_search_flags_override_config() {
    let dir = setup_graph(DIAMOND);
    write_config(&dir, "separator = \" > \"\nalgorithm = \"bfs\"\n");

    graphpath_in(&dir)
        .args(["search", "graph.csv", "A", "D", "-a", "dfs", "-s", "/"])
        .assert()
        .success()
        .stdout("Depth-first search\nA/B/D\n");
}

#[test]
fn test_search_root_flag_resolves_file() {
    let dir = setup_graph(DIAMOND);
    let elsewhere = tempfile::tempdir().unwrap();

    crate::cli::support::graphpath()
        .current_dir(elsewhere.path())
        .env("GRAPHPATH_CONFIG_DIR", elsewhere.path())
        .args(["--root", dir.path().to_str().unwrap()])
        .args(["search", "graph.csv", "A", "B", "-a", "bfs"])
        .assert()
        .success()
        .stdout("Breadth-first search\nA -> B\n");
}

// ============================================================================
// Error handling
// ============================================================================

#[test]
fn test_search_unknown_node_exit_code() {
    let dir = setup_graph(DIAMOND);

    graphpath_in(&dir)
        .args(["search", "graph.csv", "A", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found: Z"));
}

#[test]
fn test_search_unknown_node_json_envelope() {
    let dir = setup_graph(DIAMOND);

    let output = graphpath_in(&dir)
        .args(["--format", "json", "search", "graph.csv", "Q", "A"])
        .output()
        .unwrap();
    assert_eq!(output.status.code(), Some(3));

    let json: serde_json::Value = serde_json::from_slice(&output.stderr).unwrap();
    assert_eq!(json["error"]["code"], 3);
    assert_eq!(json["error"]["type"], "node_not_found");
}

#[test]
fn test_search_missing_file_exit_code() {
    let dir = setup_graph(DIAMOND);

    graphpath_in(&dir)
        .args(["search", "missing.csv", "A", "B"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("file not found"));
}

#[test]
fn test_search_empty_graph_exit_code() {
    let dir = setup_graph("From,To\n");

    graphpath_in(&dir)
        .args(["search", "graph.csv", "A", "B"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("has no nodes"));
}

#[test]
fn test_search_bad_algorithm_exit_code() {
    let dir = setup_graph(DIAMOND);

    graphpath_in(&dir)
        .args(["search", "graph.csv", "A", "B", "--algorithm", "astar"])
        .assert()
        .code(2);
}

#[test]
fn test_search_invalid_config_exit_code() {
    let dir = setup_graph(DIAMOND);
    write_config(&dir, "separator = \"\"\n");

    graphpath_in(&dir)
        .args(["search", "graph.csv", "A", "B"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("invalid separator"));
}

#[test]
fn test_search_dangling_neighbor_is_data_error() {
    let dir = setup_graph("A,X,B\nB,C\nC\n");

    graphpath_in(&dir)
        .args(["search", "graph.csv", "A", "C", "-a", "bfs"])
        .assert()
        .code(3)
        .stderr(predicate::str::contains("node not found: X"));
}

#[test]
fn test_quiet_suppresses_error_message() {
    let dir = setup_graph(DIAMOND);

    graphpath_in(&dir)
        .args(["--quiet", "search", "graph.csv", "A", "Z"])
        .assert()
        .code(3)
        .stderr(predicate::str::is_empty());
}
