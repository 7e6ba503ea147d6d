//! Sample payload: a point in 3D space

use costgraph_core::{Graph, GraphConfig, Traversal};
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// A vertex placed in 3D space. Moving between two positions costs their
/// Euclidean distance.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct Position {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Position {
    pub const fn new(x: f32, y: f32, z: f32) -> Self {
        Position { x, y, z }
    }

    /// Straight-line distance to `other`.
    pub fn distance(&self, other: &Position) -> f32 {
        let (dx, dy, dz) = (self.x - other.x, self.y - other.y, self.z - other.z);
        (dx * dx + dy * dy + dz * dz).sqrt()
    }
}

impl From<[f32; 3]> for Position {
    fn from([x, y, z]: [f32; 3]) -> Self {
        Position { x, y, z }
    }
}

impl Traversal for Position {
    fn traversal_cost(&self, to: &Self) -> f32 {
        if self == to {
            return 0.0;
        }
        self.distance(to)
    }
}

/// An empty graph of positions, costed by distance.
pub fn position_graph() -> Result<Graph<Position>> {
    Ok(Graph::from_config(GraphConfig::from_payload())?)
}
