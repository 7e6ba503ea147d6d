//! CLI command implementations

use anyhow::Context;
use costgraph_core::DijkstraPathFinder;
use costgraph_samples::Scenario;

pub fn list() {
    for scenario in Scenario::ALL {
        println!("{:<22}{}", scenario.name(), scenario.description());
    }
}

pub fn route(scenario: &str, from: usize, to: usize, json: bool) -> anyhow::Result<()> {
    let scenario: Scenario = scenario.parse()?;
    let scene = scenario.build()?;
    tracing::info!(
        "Built {}: {} vertices, {} edges",
        scenario,
        scene.graph.vertex_count(),
        scene.graph.edge_count()
    );

    let finder = DijkstraPathFinder::new();
    let report = scene
        .route(&finder, from, to)
        .with_context(|| format!("route {from} -> {to} in {scenario}"))?;

    if json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    } else {
        print!("{}", report);
        if !report.found {
            println!();
        }
    }

    Ok(())
}
