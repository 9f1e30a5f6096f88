use crate::cli::support::{graphpath_in, setup_graph, write_config, DIAMOND};
use predicates::prelude::*;

// ============================================================================
// Config command tests
// ============================================================================

#[test]
fn test_config_defaults() {
    let dir = setup_graph(DIAMOND);

    graphpath_in(&dir)
        .arg("config")
        .assert()
        .success()
        .stdout(predicate::str::contains("config.toml"))
        .stdout(predicate::str::contains("separator = \" -> \""))
        .stdout(predicate::str::contains("algorithm = \"both\""))
        .stdout(predicate::str::contains("header_marker = \"To\""));
}

#[test]
fn test_config_reads_file() {
    let dir = setup_graph(DIAMOND);
    write_config(&dir, "algorithm = \"dfs\"\n");

    let output = graphpath_in(&dir)
        .args(["config", "--format", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let json: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(json["exists"], true);
    assert_eq!(json["config"]["algorithm"], "dfs");
    assert_eq!(json["config"]["separator"], " -> ");
}

#[test]
fn test_config_flag_overrides_location() {
    let dir = setup_graph(DIAMOND);
    let custom = dir.path().join("custom.toml");
    std::fs::write(&custom, "header_marker = \"Target\"\n").unwrap();

    graphpath_in(&dir)
        .args(["--config", custom.to_str().unwrap(), "config"])
        .assert()
        .success()
        .stdout(predicate::str::contains("custom.toml"))
        .stdout(predicate::str::contains("header_marker = \"Target\""));
}

#[test]
fn test_header_marker_from_config() {
    let dir = setup_graph("Node,Target\nA,B\nB\n");
    write_config(&dir, "header_marker = \"Target\"\n");

    graphpath_in(&dir)
        .args(["show", "graph.csv"])
        .assert()
        .success()
        .stdout("A [B]\nB []\n");
}

#[test]
fn test_malformed_config_is_failure() {
    let dir = setup_graph(DIAMOND);
    write_config(&dir, "algorithm = [\n");

    graphpath_in(&dir)
        .arg("config")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("TOML error"));
}
