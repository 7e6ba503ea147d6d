//! Reference scenes: small position graphs with known shortest paths

use std::fmt;
use std::str::FromStr;

use costgraph_core::{Graph, VertexId};
use serde::{Deserialize, Serialize};

use crate::error::{Result, ScenarioError};
use crate::position::{position_graph, Position};

/// The built-in scenes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Scenario {
    /// A, B, C, D joined A -> B -> C -> D -> A in one direction only.
    DirectedCycle,
    /// The same four points joined both ways around the cycle.
    BidirectionalCycle,
    /// Two bidirectional chains 0-1-2-3 and 4-5-6-7, linked by 2-4 (free,
    /// the points coincide) and 3-4.
    JoinedChains,
}

impl Scenario {
    pub const ALL: [Scenario; 3] = [
        Scenario::DirectedCycle,
        Scenario::BidirectionalCycle,
        Scenario::JoinedChains,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Scenario::DirectedCycle => "directed-cycle",
            Scenario::BidirectionalCycle => "bidirectional-cycle",
            Scenario::JoinedChains => "joined-chains",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Scenario::DirectedCycle => "four points in a one-way cycle",
            Scenario::BidirectionalCycle => "four points in a two-way cycle",
            Scenario::JoinedChains => "two two-way chains joined by a short and a long link",
        }
    }

    fn points(self) -> &'static [[f32; 3]] {
        const CORNERS: [[f32; 3]; 4] = [
            [0.0, 0.0, 0.0],
            [10.0, 0.0, 0.0],
            [0.0, 10.0, 0.0],
            [0.0, 0.0, 10.0],
        ];
        const CHAINS: [[f32; 3]; 8] = [
            [0.0, 0.0, 0.0],
            [10.0, 0.0, 0.0],
            [20.0, 0.0, 0.0],
            [30.0, 0.0, 0.0],
            [20.0, 0.0, 0.0],
            [20.0, 10.0, 0.0],
            [20.0, 20.0, 0.0],
            [20.0, 30.0, 0.0],
        ];
        match self {
            Scenario::DirectedCycle | Scenario::BidirectionalCycle => &CORNERS,
            Scenario::JoinedChains => &CHAINS,
        }
    }

    /// `(from, to, bidirectional)` by point index, in connection order.
    fn links(self) -> &'static [(usize, usize, bool)] {
        match self {
            Scenario::DirectedCycle => {
                &[(0, 1, false), (1, 2, false), (2, 3, false), (3, 0, false)]
            }
            Scenario::BidirectionalCycle => {
                &[(0, 1, true), (1, 2, true), (2, 3, true), (3, 0, true)]
            }
            Scenario::JoinedChains => &[
                (0, 1, true),
                (1, 2, true),
                (2, 3, true),
                (4, 5, true),
                (5, 6, true),
                (6, 7, true),
                (2, 4, true),
                (3, 4, true),
            ],
        }
    }

    /// Build the scene's graph.
    pub fn build(self) -> Result<Scene> {
        let mut graph = position_graph()?;
        let vertices: Vec<VertexId> = self
            .points()
            .iter()
            .map(|&point| graph.add(Position::from(point)))
            .collect();

        for &(from, to, bidirectional) in self.links() {
            graph.connect(vertices[from], vertices[to], bidirectional);
        }

        tracing::debug!(
            scenario = self.name(),
            vertices = graph.vertex_count(),
            edges = graph.edge_count(),
            "built scene"
        );

        Ok(Scene {
            scenario: self,
            graph,
            vertices,
        })
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Scenario {
    type Err = ScenarioError;

    fn from_str(s: &str) -> Result<Self> {
        Scenario::ALL
            .into_iter()
            .find(|scenario| scenario.name() == s)
            .ok_or_else(|| ScenarioError::UnknownScenario(s.to_string()))
    }
}

/// A built scenario: the graph plus its vertices in point order.
#[derive(Debug)]
pub struct Scene {
    pub scenario: Scenario,
    pub graph: Graph<Position>,
    vertices: Vec<VertexId>,
}

impl Scene {
    /// Vertex for the `index`-th point of the scene.
    pub fn vertex(&self, index: usize) -> Result<VertexId> {
        self.vertices
            .get(index)
            .copied()
            .ok_or(ScenarioError::VertexOutOfRange {
                index,
                count: self.vertices.len(),
            })
    }

    pub fn vertices(&self) -> &[VertexId] {
        &self.vertices
    }
}
