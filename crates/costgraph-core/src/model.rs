//! Core data structures for the cost graph

use std::cell::OnceCell;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Stable identifier for a vertex. Assigned sequentially from 0 by the graph.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, Default)]
pub struct VertexId(pub u64);

impl VertexId {
    pub(crate) fn index(self) -> usize {
        self.0 as usize
    }
}

impl fmt::Display for VertexId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Identifies a directed edge. The graph keeps at most one edge per ordered
/// pair, so the endpoints are enough to name it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct EdgeId {
    pub from: VertexId,
    pub to: VertexId,
}

impl EdgeId {
    pub fn new(from: VertexId, to: VertexId) -> Self {
        EdgeId { from, to }
    }
}

impl fmt::Display for EdgeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} -> {}", self.from, self.to)
    }
}

/// A directed edge stored in its source vertex's edge list.
#[derive(Debug, Clone)]
pub struct Edge {
    pub from: VertexId,
    pub to: VertexId,
    /// Traversal cost, filled in on first evaluation and never changed after.
    cost: OnceCell<f32>,
}

impl Edge {
    pub(crate) fn new(from: VertexId, to: VertexId) -> Self {
        Edge {
            from,
            to,
            cost: OnceCell::new(),
        }
    }

    pub fn id(&self) -> EdgeId {
        EdgeId::new(self.from, self.to)
    }

    /// Cost if it has already been evaluated.
    pub fn cached_cost(&self) -> Option<f32> {
        self.cost.get().copied()
    }

    pub(crate) fn cost_or_init(&self, init: impl FnOnce() -> f32) -> f32 {
        *self.cost.get_or_init(init)
    }
}

/// A vertex owned by the graph, carrying caller payload data.
#[derive(Debug, Clone)]
pub struct Vertex<T> {
    pub id: VertexId,
    pub data: T,
    /// Outgoing edges in insertion order.
    edges: Vec<Edge>,
}

impl<T> Vertex<T> {
    pub(crate) fn new(id: VertexId, data: T) -> Self {
        Vertex {
            id,
            data,
            edges: Vec::new(),
        }
    }

    /// Outgoing edges, oldest first.
    pub fn edges(&self) -> &[Edge] {
        &self.edges
    }

    /// Find the outgoing edge to `to`, if any.
    pub fn edge_to(&self, to: VertexId) -> Option<&Edge> {
        self.edges.iter().find(|e| e.to == to)
    }

    pub(crate) fn push_edge(&mut self, edge: Edge) {
        self.edges.push(edge);
    }
}
