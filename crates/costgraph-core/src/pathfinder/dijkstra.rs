//! Dijkstra shortest-path search over a [`Graph`].

use std::collections::HashMap;

use super::observer::{SearchEvent, SearchObserver, TracingObserver};
use super::PathFinder;
use crate::graph::Graph;
use crate::model::{EdgeId, VertexId};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum RecordState {
    Open,
    Closed,
}

/// Per-query bookkeeping for one discovered vertex.
#[derive(Debug, Clone)]
struct SearchRecord {
    node: VertexId,
    /// Record this one was reached from. `None` for the source.
    prev: Option<usize>,
    /// Edge from `prev` to `node`. `None` for the source.
    edge: Option<EdgeId>,
    cost_so_far: f32,
    state: RecordState,
}

/// Open and closed sets for one query. Records are indexed by position in
/// `records`; links between them are indices, never references.
#[derive(Debug, Default)]
struct SearchState {
    records: Vec<SearchRecord>,
    by_vertex: HashMap<VertexId, usize>,
    /// Open records in discovery order.
    open: Vec<usize>,
}

impl SearchState {
    fn make_record<T>(
        &mut self,
        graph: &Graph<T>,
        node: VertexId,
        prev: Option<usize>,
        observer: &dyn SearchObserver,
    ) -> Option<usize> {
        if !graph.contains(node) {
            observer.on_event(&SearchEvent::InvalidEndpoint { vertex: node });
            return None;
        }

        let idx = self.records.len();
        self.records.push(SearchRecord {
            node,
            prev,
            edge: None,
            cost_so_far: 0.0,
            state: RecordState::Open,
        });
        self.by_vertex.insert(node, idx);
        observer.on_event(&SearchEvent::RecordCreated { vertex: node });
        Some(idx)
    }

    /// Position in `open` of the cheapest record. Ties go to the first one
    /// found; the order among equal costs is not otherwise defined.
    fn smallest_open(&self) -> Option<usize> {
        let mut best: Option<usize> = None;
        for (pos, &idx) in self.open.iter().enumerate() {
            let cost = self.records[idx].cost_so_far;
            match best {
                Some(b) if self.records[self.open[b]].cost_so_far <= cost => {}
                _ => best = Some(pos),
            }
        }
        best
    }

    /// Walk predecessor links back from `goal` and return the edges front to back.
    fn trace_back(&self, goal: usize, from: VertexId) -> Vec<EdgeId> {
        let mut path = Vec::new();
        let mut current = goal;
        loop {
            let record = &self.records[current];
            if record.node == from {
                break;
            }
            match (record.edge, record.prev) {
                (Some(edge), Some(prev)) => {
                    path.push(edge);
                    current = prev;
                }
                _ => break,
            }
        }
        path.reverse();
        path
    }
}

/// Label-setting Dijkstra search with explicit open and closed sets.
///
/// Each query keeps its own records, so one finder can serve any number of
/// queries. Edge costs are evaluated through the graph and stay cached on it
/// afterwards. Costs must be non-negative; this is not checked.
pub struct DijkstraPathFinder {
    observer: Box<dyn SearchObserver>,
}

impl std::fmt::Debug for DijkstraPathFinder {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DijkstraPathFinder").finish_non_exhaustive()
    }
}

impl DijkstraPathFinder {
    /// A finder that reports its progress through `tracing`.
    pub fn new() -> Self {
        Self::with_observer(TracingObserver)
    }

    /// A finder that reports its progress to `observer`.
    pub fn with_observer(observer: impl SearchObserver + 'static) -> Self {
        DijkstraPathFinder {
            observer: Box::new(observer),
        }
    }

    fn emit(&self, event: SearchEvent) {
        self.observer.on_event(&event);
    }
}

impl Default for DijkstraPathFinder {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> PathFinder<T> for DijkstraPathFinder {
    fn find_path(&self, graph: &Graph<T>, from: VertexId, to: VertexId) -> Option<Vec<EdgeId>> {
        self.emit(SearchEvent::Started { from, to });

        if graph.are_equal(from, to) {
            self.emit(SearchEvent::Completed { edges: 0 });
            return Some(Vec::new());
        }

        if !graph.contains(to) {
            self.emit(SearchEvent::InvalidEndpoint { vertex: to });
            return None;
        }

        let observer = &*self.observer;
        let mut state = SearchState::default();
        let start = state.make_record(graph, from, None, observer)?;
        state.open.push(start);

        let mut current = None;
        while let Some(pos) = state.smallest_open() {
            let cur = state.open[pos];
            current = Some(cur);
            let node = state.records[cur].node;
            let cost_so_far = state.records[cur].cost_so_far;
            self.emit(SearchEvent::Selected {
                vertex: node,
                cost_so_far,
                open: state.open.len(),
            });

            if graph.are_equal(node, to) {
                self.emit(SearchEvent::GoalReached {
                    vertex: node,
                    cost: cost_so_far,
                });
                break;
            }

            let edges = graph.edges_from(node);
            self.emit(SearchEvent::Expanding {
                vertex: node,
                edges: edges.len(),
            });

            for edge in edges {
                let edge_id = edge.id();
                let candidate = cost_so_far + graph.cost_of(edge);
                let existing = state.by_vertex.get(&edge.to).copied();

                if let Some(idx) = existing {
                    let record = &state.records[idx];
                    if record.state == RecordState::Closed {
                        self.emit(SearchEvent::SkippedClosed { edge: edge_id });
                        continue;
                    }
                    if record.cost_so_far <= candidate {
                        self.emit(SearchEvent::SkippedWorse {
                            edge: edge_id,
                            candidate,
                            best: record.cost_so_far,
                        });
                        continue;
                    }
                }

                let idx = match existing {
                    Some(idx) => idx,
                    None => match state.make_record(graph, edge.to, Some(cur), observer) {
                        Some(idx) => {
                            state.open.push(idx);
                            idx
                        }
                        None => continue,
                    },
                };

                let record = &mut state.records[idx];
                record.cost_so_far = candidate;
                record.prev = Some(cur);
                record.edge = Some(edge_id);
                self.emit(SearchEvent::CostUpdated {
                    edge: edge_id,
                    cost: candidate,
                });
            }

            state.records[cur].state = RecordState::Closed;
            state.open.remove(pos);
            self.emit(SearchEvent::Closed { vertex: node });
        }

        let goal = match current {
            Some(cur) if graph.are_equal(state.records[cur].node, to) => cur,
            _ => {
                self.emit(SearchEvent::Exhausted {
                    last: current.map(|cur| state.records[cur].node),
                });
                return None;
            }
        };

        let path = state.trace_back(goal, from);
        self.emit(SearchEvent::Completed { edges: path.len() });
        Some(path)
    }
}
