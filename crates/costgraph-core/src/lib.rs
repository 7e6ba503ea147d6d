//! Costgraph Core — weighted directed graph with lazily cached edge costs,
//! and shortest-path search over it

pub mod config;
pub mod error;
pub mod graph;
pub mod model;
pub mod pathfinder;


#[cfg(test)]
pub mod test_utils;

pub use config::{CostFn, GraphConfig, Traversal};
pub use error::{GraphError, Result};
pub use graph::Graph;
pub use model::{Edge, EdgeId, Vertex, VertexId};
pub use pathfinder::{
    DijkstraPathFinder, NoopObserver, PathFinder, SearchEvent, SearchObserver, TracingObserver,
};
