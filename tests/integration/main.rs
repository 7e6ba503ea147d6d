//! Integration tests for costgraph
//!
//! These replay the reference scenes end to end: build, search, report.

use assert_cmd::{cargo::cargo_bin_cmd, Command};
use costgraph_core::{
    DijkstraPathFinder, EdgeId, NoopObserver, PathFinder, SearchEvent, VertexId,
};
use costgraph_samples::{position_graph, Position, Scenario};
use predicates::prelude::*;
use std::cell::RefCell;
use std::rc::Rc;

fn finder() -> DijkstraPathFinder {
    DijkstraPathFinder::with_observer(NoopObserver)
}

/// Adding a thousand vertices assigns ids in call order
#[test]
fn test_large_graph_ids() {
    let mut graph = position_graph().unwrap();

    let ids: Vec<VertexId> = (0..1000)
        .map(|i| {
            let k = (i % 3) as f32;
            graph.add(Position::new(k, k + 1.0, k + 2.0))
        })
        .collect();

    for (i, id) in ids.iter().enumerate() {
        assert_eq!(id.0, i as u64);
    }
}

/// Every scenario answers every query consistently
#[test]
fn test_all_scenarios_route() {
    for scenario in Scenario::ALL {
        let scene = scenario.build().unwrap();
        let count = scene.vertices().len();

        for from in 0..count {
            for to in 0..count {
                let report = scene.route(&finder(), from, to).unwrap();
                if from == to {
                    assert!(report.found);
                    assert!(report.edges.is_empty());
                    assert_eq!(report.total_cost, Some(0.0));
                }
                if report.found {
                    let first = report.edges.first().map(|e| e.from);
                    let last = report.edges.last().map(|e| e.to);
                    if from != to {
                        assert_eq!(first, Some(scene.vertex(from).unwrap()));
                        assert_eq!(last, Some(scene.vertex(to).unwrap()));
                    }
                }
            }
        }
    }
}

/// Joined chains: the long way round is never taken
#[test]
fn test_joined_chains_report() {
    let scene = Scenario::JoinedChains.build().unwrap();

    let report = scene.route(&finder(), 0, 7).unwrap();
    let hops: Vec<String> = report.edges.iter().map(EdgeId::to_string).collect();
    insta::assert_snapshot!(hops.join(", "), @"0 -> 1, 1 -> 2, 2 -> 4, 4 -> 5, 5 -> 6, 6 -> 7");
    assert_eq!(report.total_cost, Some(50.0));
}

/// A fresh search after reset starts from id 0 again and finds the new topology
#[test]
fn test_reset_then_rebuild() {
    let mut scene = Scenario::BidirectionalCycle.build().unwrap();
    scene.graph.reset();

    let a = scene.graph.add(Position::new(0.0, 0.0, 0.0));
    let b = scene.graph.add(Position::new(0.0, 3.0, 4.0));
    assert_eq!(a, VertexId(0));

    assert_eq!(finder().find_path(&scene.graph, a, b), None);
    scene.graph.connect(a, b, false);
    let path = finder().find_path(&scene.graph, a, b).unwrap();
    assert_eq!(scene.graph.path_cost(&path), 5.0);
}

/// Observers see the goal exactly once per successful query
#[test]
fn test_observer_sees_goal() {
    let scene = Scenario::DirectedCycle.build().unwrap();
    let goals = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&goals);
    let finder = DijkstraPathFinder::with_observer(move |event: &SearchEvent| {
        if let SearchEvent::GoalReached { vertex, .. } = event {
            sink.borrow_mut().push(*vertex);
        }
    });

    let d = scene.vertex(3).unwrap();
    finder.find_path(&scene.graph, scene.vertex(0).unwrap(), d).unwrap();

    assert_eq!(*goals.borrow(), vec![d]);
}

/// Get a Command for the costgraph binary
fn costgraph() -> Command {
    cargo_bin_cmd!("costgraph")
}

#[test]
fn test_cli_list_names_every_scenario() {
    costgraph()
        .arg("list")
        .assert()
        .success()
        .stdout(predicate::str::contains("directed-cycle"))
        .stdout(predicate::str::contains("bidirectional-cycle"))
        .stdout(predicate::str::contains("joined-chains"));
}

#[test]
fn test_cli_route_text() {
    costgraph()
        .args(["route", "directed-cycle", "3", "0"])
        .assert()
        .success()
        .stdout(predicate::str::starts_with(
            "directed-cycle: 3 -> 0 (1 edge, cost 10)",
        ))
        .stdout(predicate::str::contains("  3 -> 0"));
}

#[test]
fn test_cli_route_json() {
    let output = costgraph()
        .args(["route", "joined-chains", "0", "7", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let report: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(report["scenario"], "joined-chains");
    assert_eq!(report["found"], true);
    assert_eq!(report["edges"].as_array().map(Vec::len), Some(6));
    assert_eq!(report["edges"][2], serde_json::json!({ "from": 2, "to": 4 }));
    assert_eq!(report["total_cost"].as_f64(), Some(50.0));
}

#[test]
fn test_cli_verbose_logs_to_stderr() {
    costgraph()
        .args(["--verbose", "route", "bidirectional-cycle", "0", "3", "--json"])
        .env_remove("RUST_LOG")
        .assert()
        .success()
        .stdout(predicate::str::starts_with("{"))
        .stderr(predicate::str::contains("Built bidirectional-cycle"));
}

#[test]
fn test_cli_unknown_scenario_fails() {
    costgraph()
        .args(["route", "maze", "0", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown scenario 'maze'"));
}

#[test]
fn test_cli_point_out_of_range_fails() {
    costgraph()
        .args(["route", "directed-cycle", "0", "9"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("vertex 9 out of range"));
}

#[test]
fn test_cli_rejects_non_numeric_point() {
    costgraph()
        .args(["route", "directed-cycle", "zero", "1"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid value 'zero'"));
}

#[test]
fn test_cli_version() {
    costgraph()
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!("Costgraph v", env!("CARGO_PKG_VERSION"))));
}
