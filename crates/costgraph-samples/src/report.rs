//! Path query over a scene, packaged for display

use costgraph_core::{EdgeId, PathFinder};
use serde::Serialize;

use crate::error::Result;
use crate::position::Position;
use crate::scenario::{Scenario, Scene};

/// Outcome of one path query over a scene.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RouteReport {
    pub scenario: Scenario,
    pub from: usize,
    pub to: usize,
    pub found: bool,
    pub edges: Vec<EdgeId>,
    /// Sum of edge costs. `None` when no path was found.
    pub total_cost: Option<f32>,
}

impl Scene {
    /// Find a path between the `from`-th and `to`-th points of the scene.
    pub fn route(
        &self,
        finder: &dyn PathFinder<Position>,
        from: usize,
        to: usize,
    ) -> Result<RouteReport> {
        let (source, target) = (self.vertex(from)?, self.vertex(to)?);
        let path = finder.find_path(&self.graph, source, target);
        let total_cost = path.as_deref().map(|edges| self.graph.path_cost(edges));

        Ok(RouteReport {
            scenario: self.scenario,
            from,
            to,
            found: path.is_some(),
            edges: path.unwrap_or_default(),
            total_cost,
        })
    }
}

impl std::fmt::Display for RouteReport {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let Some(total_cost) = self.total_cost else {
            return write!(f, "{}: no path from {} to {}", self.scenario, self.from, self.to);
        };
        writeln!(
            f,
            "{}: {} -> {} ({} edge{}, cost {})",
            self.scenario,
            self.from,
            self.to,
            self.edges.len(),
            if self.edges.len() == 1 { "" } else { "s" },
            total_cost
        )?;
        for edge in &self.edges {
            writeln!(f, "  {}", edge)?;
        }
        Ok(())
    }
}
