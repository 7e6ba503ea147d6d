//! Observation hook for path searches

use crate::model::{EdgeId, VertexId};

/// A step of a path search, reported to a [`SearchObserver`].
#[derive(Debug, Clone, PartialEq)]
pub enum SearchEvent {
    /// A query was issued.
    Started { from: VertexId, to: VertexId },
    /// An endpoint does not belong to the graph; the search is abandoned.
    InvalidEndpoint { vertex: VertexId },
    /// The cheapest open record was picked for processing.
    Selected { vertex: VertexId, cost_so_far: f32, open: usize },
    /// The selected record is the goal.
    GoalReached { vertex: VertexId, cost: f32 },
    /// Outgoing edges of the selected vertex are about to be relaxed.
    Expanding { vertex: VertexId, edges: usize },
    /// The edge leads to a vertex whose cost is final.
    SkippedClosed { edge: EdgeId },
    /// The edge does not improve on the open record of its target.
    SkippedWorse { edge: EdgeId, candidate: f32, best: f32 },
    /// A record was created for a newly discovered vertex.
    RecordCreated { vertex: VertexId },
    /// The target's best route now goes through `edge`.
    CostUpdated { edge: EdgeId, cost: f32 },
    /// The vertex was moved to the closed set.
    Closed { vertex: VertexId },
    /// The open set ran dry before the goal was reached.
    Exhausted { last: Option<VertexId> },
    /// A path of `edges` edges was produced.
    Completed { edges: usize },
}

pub trait SearchObserver {
    fn on_event(&self, event: &SearchEvent);
}

impl<F> SearchObserver for F
where
    F: Fn(&SearchEvent),
{
    fn on_event(&self, event: &SearchEvent) {
        self(event)
    }
}

/// Forwards search events to `tracing`.
#[derive(Debug, Clone, Copy, Default)]
pub struct TracingObserver;

impl SearchObserver for TracingObserver {
    fn on_event(&self, event: &SearchEvent) {
        match *event {
            SearchEvent::Started { from, to } => {
                tracing::debug!(%from, %to, "starting path query");
            }
            SearchEvent::InvalidEndpoint { vertex } => {
                tracing::warn!(%vertex, "path query endpoint is not in the graph");
            }
            SearchEvent::Selected { vertex, cost_so_far, open } => {
                tracing::trace!(%vertex, cost_so_far, open, "next open node");
            }
            SearchEvent::GoalReached { vertex, cost } => {
                tracing::debug!(%vertex, cost, "found end");
            }
            SearchEvent::Expanding { vertex, edges } => {
                tracing::trace!(%vertex, edges, "processing edges");
            }
            SearchEvent::SkippedClosed { edge } => {
                tracing::trace!(%edge, "target already closed");
            }
            SearchEvent::SkippedWorse { edge, candidate, best } => {
                tracing::trace!(%edge, candidate, best, "route not better than open record");
            }
            SearchEvent::RecordCreated { vertex } => {
                tracing::trace!(%vertex, "new record");
            }
            SearchEvent::CostUpdated { edge, cost } => {
                tracing::trace!(%edge, cost, "cost set");
            }
            SearchEvent::Closed { vertex } => {
                tracing::trace!(%vertex, "completed processing");
            }
            SearchEvent::Exhausted { last } => match last {
                Some(last) => tracing::debug!(%last, "no path: open set exhausted"),
                None => tracing::debug!("no path: nothing was searched"),
            },
            SearchEvent::Completed { edges } => {
                tracing::debug!(edges, "path found");
            }
        }
    }
}

/// Discards every event.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopObserver;

impl SearchObserver for NoopObserver {
    fn on_event(&self, _event: &SearchEvent) {}
}
