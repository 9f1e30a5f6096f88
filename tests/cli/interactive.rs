use crate::cli::support::{graphpath_in, setup_graph, DIAMOND};
use predicates::prelude::*;

// ============================================================================
// Interactive session tests
// ============================================================================

#[test]
fn test_no_subcommand_runs_interactive_session() {
    let dir = setup_graph(DIAMOND);

    graphpath_in(&dir)
        .write_stdin("graph.csv\nA\nD\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter file name with extension: "))
        .stdout(predicate::str::contains("Loading..."))
        .stdout(predicate::str::contains("Enter starting node(A-D): "))
        .stdout(predicate::str::contains("Enter ending node(A-D): "))
        .stdout(predicate::str::ends_with(
            "\nBreadth-first search\nA -> B -> D\n\nDepth-first search\nA -> B -> D\n",
        ));
}

#[test]
fn test_interactive_retries() {
    let dir = setup_graph(DIAMOND);

    graphpath_in(&dir)
        .arg("interactive")
        .write_stdin("missing.csv\ngraph.csv\nX\nB\nY\nD\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("File not found, please try again."))
        .stdout(predicate::str::contains("Not a valid starting node, please try again."))
        .stdout(predicate::str::contains("Not a valid ending node, please try again."))
        .stdout(predicate::str::contains("Breadth-first search\nB -> D\n"));
}

#[test]
fn test_interactive_file_flag() {
    let dir = setup_graph(DIAMOND);

    graphpath_in(&dir)
        .args(["interactive", "--file", "graph.csv"])
        .write_stdin("D\nA\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Please enter file name").not())
        .stdout(predicate::str::contains("No path was found"));
}

#[test]
fn test_interactive_end_of_input_is_usage_error() {
    let dir = setup_graph(DIAMOND);

    graphpath_in(&dir)
        .write_stdin("graph.csv\n")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("unexpected end of input"));
}
