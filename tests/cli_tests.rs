//! Integration tests for the pathtrace CLI
//!
//! These run the binary end to end: graph files in temp dirs, real argv,
//! exit codes and output checked per command.

use std::fs;
use std::path::PathBuf;

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use predicates::prelude::*;
use tempfile::{tempdir, TempDir};

/// Get a Command for pathtrace
fn pathtrace() -> Command {
    cargo_bin_cmd!("pathtrace")
}

/// Write a graph description into a fresh temp dir
fn graph_file(contents: &str) -> (TempDir, PathBuf) {
    let dir = tempdir().unwrap();
    let path = dir.path().join("graph.txt");
    fs::write(&path, contents).unwrap();
    (dir, path)
}

/// Three nodes in a line plus a heavy direct edge: the weighted solvers
/// should go 0 -> 1 -> 2 at cost 10, BFS should take the single hop
const TRIANGLE: &str = "node 0 0\n\
                        node 10 0\n\
                        node 20 0\n\
                        edge 0 1 5\n\
                        edge 1 2 5\n\
                        edge 0 2 20\n";

// ============================================================================
// Help, version, algos
// ============================================================================

#[test]
fn test_help_flag() {
    pathtrace()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage: pathtrace"))
        .stdout(predicate::str::contains("Commands:"))
        .stdout(predicate::str::contains("run"))
        .stdout(predicate::str::contains("demo"))
        .stdout(predicate::str::contains("algos"));
}

#[test]
fn test_version_flag() {
    pathtrace()
        .arg("--version")
        .assert()
        .success()
        .stdout(predicate::str::contains("pathtrace"));
}

#[test]
fn test_algos_lists_all_variants() {
    pathtrace()
        .arg("algos")
        .assert()
        .success()
        .stdout(predicate::str::contains("bfs"))
        .stdout(predicate::str::contains("dfs"))
        .stdout(predicate::str::contains("dijkstra"))
        .stdout(predicate::str::contains("astar"));
}

#[test]
fn test_algos_json() {
    let output = pathtrace()
        .args(["algos", "--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let names: Vec<&str> = value["algorithms"]
        .as_array()
        .unwrap()
        .iter()
        .map(|v| v.as_str().unwrap())
        .collect();
    assert_eq!(names, vec!["bfs", "dfs", "dijkstra", "astar"]);
}

// ============================================================================
// run
// ============================================================================

#[test]
fn test_run_dijkstra_finds_light_route() {
    let (_dir, path) = graph_file(TRIANGLE);

    pathtrace()
        .arg("run")
        .arg(&path)
        .args(["--algo", "dijkstra", "--start", "0", "--end", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("state:     found path"))
        .stdout(predicate::str::contains("path:      0 -> 1 -> 2"))
        .stdout(predicate::str::contains("cost:      10"));
}

#[test]
fn test_run_bfs_takes_fewest_hops() {
    let (_dir, path) = graph_file(TRIANGLE);

    pathtrace()
        .arg("run")
        .arg(&path)
        .args(["--algo", "bfs", "--start", "0", "--end", "2"])
        .assert()
        .success()
        .stdout(predicate::str::contains("path:      0 -> 2"));
}

#[test]
fn test_run_json_report() {
    let (_dir, path) = graph_file(TRIANGLE);

    let output = pathtrace()
        .arg("run")
        .arg(&path)
        .args(["--algo", "astar", "--start", "0", "--end", "2"])
        .args(["--format", "json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let report: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(report["algorithm"], "astar");
    assert_eq!(report["state"], "finished_found_path");
    assert_eq!(report["path"], serde_json::json!([0, 1, 2]));
    assert_eq!(report["cost"], 10.0);
    assert_eq!(report["nodes"], 3);
    // A* publishes per-node scores along the path
    assert_eq!(report["scores"][0]["node"], 0);
    assert_eq!(report["scores"][0]["scores"]["g"], 0.0);
}

#[test]
fn test_run_reads_stdin() {
    pathtrace()
        .args(["run", "-", "--algo", "bfs", "--start", "0", "--end", "1"])
        .write_stdin("node 0 0\nnode 10 0\nedge 0 1\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("path:      0 -> 1"));
}

#[test]
fn test_run_no_path_is_success() {
    // Disconnected endpoints: not an error, just a no-path result
    pathtrace()
        .args(["run", "-", "--start", "0", "--end", "1"])
        .write_stdin("node 0 0\nnode 10 0\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("state:     no path"))
        .stdout(predicate::str::contains("path:").not());
}

#[test]
fn test_run_quiet_prints_path_only() {
    let (_dir, path) = graph_file(TRIANGLE);

    pathtrace()
        .arg("run")
        .arg(&path)
        .args(["--algo", "dijkstra", "--start", "0", "--end", "2", "--quiet"])
        .assert()
        .success()
        .stdout(predicate::eq("0 -> 1 -> 2\n"));
}

#[test]
fn test_run_trace_emits_step_records() {
    let (_dir, path) = graph_file(TRIANGLE);

    pathtrace()
        .arg("run")
        .arg(&path)
        .args(["--algo", "bfs", "--start", "0", "--end", "2"])
        .args(["--trace", "--delay-ms", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("step    1"))
        .stdout(predicate::str::contains("frontier"));
}

#[test]
fn test_run_missing_file_fails() {
    pathtrace()
        .args(["run", "/no/such/graph.txt", "--start", "0", "--end", "1"])
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error:"));
}

// ============================================================================
// Input validation (exit code 3)
// ============================================================================

#[test]
fn test_run_malformed_graph_line() {
    pathtrace()
        .args(["run", "-", "--start", "0", "--end", "1"])
        .write_stdin("node 0 0\nblob 1 2\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("line 2"));
}

#[test]
fn test_run_edge_with_unknown_endpoint() {
    pathtrace()
        .args(["run", "-", "--start", "0", "--end", "1"])
        .write_stdin("node 0 0\nedge 0 9\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown node id 9"));
}

#[test]
fn test_run_unknown_start_node() {
    pathtrace()
        .args(["run", "-", "--start", "7", "--end", "0"])
        .write_stdin("node 0 0\n")
        .assert()
        .code(3)
        .stderr(predicate::str::contains("unknown node id: 7"));
}

// ============================================================================
// Usage errors (exit code 2)
// ============================================================================

#[test]
fn test_run_unknown_algorithm() {
    pathtrace()
        .args(["run", "-", "--algo", "sssp", "--start", "0", "--end", "1"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("sssp"));
}

#[test]
fn test_json_error_envelope_for_usage_errors() {
    let output = pathtrace()
        .args(["run", "-", "--algo", "sssp", "--start", "0", "--end", "1"])
        .args(["--format", "json"])
        .assert()
        .code(2)
        .get_output()
        .stderr
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["error"]["code"], 2);
    assert_eq!(value["error"]["type"], "usage_error");
}

#[test]
fn test_json_error_envelope_for_input_errors() {
    let output = pathtrace()
        .args(["run", "-", "--start", "0", "--end", "1", "--format", "json"])
        .write_stdin("node 0 0\nedge 0 9\n")
        .assert()
        .code(3)
        .get_output()
        .stderr
        .clone();

    let value: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(value["error"]["code"], 3);
    assert_eq!(value["error"]["type"], "invalid_graph_line");
}

// ============================================================================
// Configuration
// ============================================================================

#[test]
fn test_config_default_edge_weight() {
    // With the default weight cranked up, the unweighted direct edge loses
    // to the explicitly weighted detour
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("pathtrace.toml");
    fs::write(&config_path, "default_edge_weight = 50.0\n").unwrap();

    let graph_path = dir.path().join("graph.txt");
    fs::write(
        &graph_path,
        "node 0 0\nnode 10 0\nnode 20 0\nedge 0 1\nedge 0 2 10\nedge 2 1 10\n",
    )
    .unwrap();

    pathtrace()
        .arg("run")
        .arg(&graph_path)
        .args(["--algo", "dijkstra", "--start", "0", "--end", "1"])
        .arg("--config")
        .arg(&config_path)
        .assert()
        .success()
        .stdout(predicate::str::contains("path:      0 -> 2 -> 1"))
        .stdout(predicate::str::contains("cost:      20"));
}

#[test]
fn test_config_malformed_file_fails() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("pathtrace.toml");
    fs::write(&config_path, "default_edge_weight = \"heavy\"\n").unwrap();

    pathtrace()
        .args(["algos", "--config"])
        .arg(&config_path)
        .assert()
        .code(1)
        .stderr(predicate::str::contains("error:"));
}

// ============================================================================
// demo
// ============================================================================

#[test]
fn test_demo_runs_to_a_path() {
    pathtrace()
        .arg("demo")
        .assert()
        .success()
        .stdout(predicate::str::contains("algorithm: astar"))
        .stdout(predicate::str::contains("state:     found path"));
}

#[test]
fn test_demo_accepts_algorithm_override() {
    pathtrace()
        .args(["demo", "--algo", "dfs"])
        .assert()
        .success()
        .stdout(predicate::str::contains("algorithm: dfs"));
}
