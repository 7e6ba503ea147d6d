//! Graph container: vertex arena with per-vertex edge lists and lazily
//! evaluated, cached edge costs.

use crate::config::{CostFn, GraphConfig};
use crate::error::{GraphError, Result};
use crate::model::*;

/// A directed graph with stable vertex ids.
///
/// Vertices live in an arena indexed by id and edges live in their source
/// vertex's list. Handles that do not name anything stored in the graph are
/// absorbed: queries answer `false`/`0.0` and `connect` does nothing.
pub struct Graph<T> {
    vertices: Vec<Vertex<T>>,
    next_id: u64,
    edge_count: usize,
    get_cost: CostFn<T>,
}

impl<T> std::fmt::Debug for Graph<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Graph")
            .field("vertex_count", &self.vertex_count())
            .field("edge_count", &self.edge_count())
            .field("next_id", &self.next_id)
            .finish()
    }
}

impl<T> Graph<T> {
    /// Create an empty graph bound to `get_cost`.
    pub fn new<F>(get_cost: F) -> Self
    where
        F: Fn(&T, &T) -> f32 + 'static,
    {
        Graph {
            vertices: Vec::new(),
            next_id: 0,
            edge_count: 0,
            get_cost: Box::new(get_cost),
        }
    }

    /// Create an empty graph from a config. Fails if no cost function is bound.
    pub fn from_config(config: GraphConfig<T>) -> Result<Self> {
        let get_cost = config.get_cost.ok_or(GraphError::MissingCostFunction)?;
        Ok(Graph {
            vertices: Vec::new(),
            next_id: 0,
            edge_count: 0,
            get_cost,
        })
    }

    /// Add a vertex. Returns its id; ids run 0, 1, 2, ... in call order.
    pub fn add(&mut self, data: T) -> VertexId {
        let id = VertexId(self.next_id);
        self.vertices.push(Vertex::new(id, data));
        self.next_id += 1;
        id
    }

    /// Whether `id` names a vertex of this graph.
    pub fn contains(&self, id: VertexId) -> bool {
        self.vertex(id).is_some()
    }

    /// Get a vertex by id.
    pub fn vertex(&self, id: VertexId) -> Option<&Vertex<T>> {
        self.vertices.get(id.index()).filter(|v| v.id == id)
    }

    /// Get a vertex by id, or an error naming the missing id.
    pub fn checked_vertex(&self, id: VertexId) -> Result<&Vertex<T>> {
        self.vertex(id).ok_or(GraphError::UnknownVertex(id))
    }

    /// Get the payload of a vertex.
    pub fn payload(&self, id: VertexId) -> Option<&T> {
        self.vertex(id).map(|v| &v.data)
    }

    /// Outgoing edges of a vertex, in insertion order. Empty for unknown ids.
    pub fn edges_from(&self, id: VertexId) -> &[Edge] {
        self.vertex(id).map(|v| v.edges()).unwrap_or(&[])
    }

    /// Get an edge by id.
    pub fn edge(&self, id: EdgeId) -> Option<&Edge> {
        self.vertex(id.from).and_then(|v| v.edge_to(id.to))
    }

    /// Connect `from` to `to`. With `bidirectional`, also connect `to` to
    /// `from`. Existing edges are left alone, so repeated calls are no-ops.
    pub fn connect(&mut self, from: VertexId, to: VertexId, bidirectional: bool) {
        if !self.contains(from) || !self.contains(to) {
            tracing::trace!(%from, %to, "connect ignored: unknown vertex");
            return;
        }

        self.insert_edge(from, to);
        if bidirectional {
            self.insert_edge(to, from);
        }
    }

    fn insert_edge(&mut self, from: VertexId, to: VertexId) {
        if self.is_connected(from, to, false) {
            return;
        }
        self.vertices[from.index()].push_edge(Edge::new(from, to));
        self.edge_count += 1;
    }

    /// Whether there is an edge `from -> to`. With `bidirectional`, both
    /// `from -> to` and `to -> from` must exist.
    pub fn is_connected(&self, from: VertexId, to: VertexId, bidirectional: bool) -> bool {
        if bidirectional {
            return self.is_connected(from, to, false) && self.is_connected(to, from, false);
        }

        self.contains(to) && self.edge(EdgeId::new(from, to)).is_some()
    }

    /// Identity comparison. `false` if either id is unknown.
    pub fn are_equal(&self, a: VertexId, b: VertexId) -> bool {
        self.contains(a) && self.contains(b) && a == b
    }

    /// Cost of an edge, evaluating and caching it on first use.
    ///
    /// Returns `0.0` for an unknown edge. A real edge can also cost `0.0`,
    /// so the value says nothing about validity.
    pub fn edge_cost(&self, id: EdgeId) -> f32 {
        self.edge(id).map_or(0.0, |edge| self.cost_of(edge))
    }

    /// Cached cost of an edge, without evaluating it.
    pub fn cached_cost(&self, id: EdgeId) -> Option<f32> {
        self.edge(id).and_then(Edge::cached_cost)
    }

    pub(crate) fn cost_of(&self, edge: &Edge) -> f32 {
        edge.cost_or_init(|| match (self.payload(edge.from), self.payload(edge.to)) {
            (Some(a), Some(b)) => (self.get_cost)(a, b),
            _ => 0.0,
        })
    }

    /// Sum of the edge costs along `path`.
    pub fn path_cost(&self, path: &[EdgeId]) -> f32 {
        path.iter().fold(0.0, |total, &id| total + self.edge_cost(id))
    }

    /// All vertex ids, in creation order.
    pub fn vertices(&self) -> Vec<VertexId> {
        self.vertices.iter().map(|v| v.id).collect()
    }

    /// Iterate over all vertices, in creation order.
    pub fn all_vertices(&self) -> impl Iterator<Item = &Vertex<T>> {
        self.vertices.iter()
    }

    /// Total number of vertices.
    pub fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    /// Total number of edges.
    pub fn edge_count(&self) -> usize {
        self.edge_count
    }

    pub fn is_empty(&self) -> bool {
        self.vertices.is_empty()
    }

    /// Drop every vertex and edge and restart id assignment at 0.
    /// The cost function stays bound.
    pub fn reset(&mut self) {
        self.vertices.clear();
        self.next_id = 0;
        self.edge_count = 0;
    }
}
