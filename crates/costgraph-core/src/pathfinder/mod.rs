//! Path finding over a [`Graph`]

pub mod dijkstra;
pub mod observer;

pub use dijkstra::DijkstraPathFinder;
pub use observer::{NoopObserver, SearchEvent, SearchObserver, TracingObserver};

use crate::graph::Graph;
use crate::model::{EdgeId, VertexId};

/// Finds a route between two vertices of a graph.
pub trait PathFinder<T> {
    /// Returns the edges from `from` to `to`, front to back.
    ///
    /// `Some(vec![])` means `from` and `to` are the same vertex; `None`
    /// means there is no route (or an endpoint is not in the graph).
    fn find_path(&self, graph: &Graph<T>, from: VertexId, to: VertexId) -> Option<Vec<EdgeId>>;
}
