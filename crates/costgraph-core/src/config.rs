//! Cost binding for a graph

use std::fmt;

/// Resolves the traversal cost between two connected payloads.
///
/// Must be pure: the graph calls it at most once per edge and caches the
/// result, so a function that depends on anything but its arguments will see
/// its later answers ignored.
pub type CostFn<T> = Box<dyn Fn(&T, &T) -> f32>;

/// Payload types that know their own traversal cost.
pub trait Traversal {
    /// Cost of moving from `self` to `to`. Must be non-negative.
    fn traversal_cost(&self, to: &Self) -> f32;
}

/// Type binding for a [`Graph`](crate::Graph).
pub struct GraphConfig<T> {
    pub(crate) get_cost: Option<CostFn<T>>,
}

impl<T> GraphConfig<T> {
    /// An empty config. It must be given a cost function before use.
    pub fn new() -> Self {
        GraphConfig { get_cost: None }
    }

    /// Bind the cost function.
    pub fn with_cost<F>(mut self, get_cost: F) -> Self
    where
        F: Fn(&T, &T) -> f32 + 'static,
    {
        self.get_cost = Some(Box::new(get_cost));
        self
    }

    pub fn has_cost(&self) -> bool {
        self.get_cost.is_some()
    }
}

impl<T: Traversal + 'static> GraphConfig<T> {
    /// Bind the payload's own [`Traversal`] implementation.
    pub fn from_payload() -> Self {
        GraphConfig::new().with_cost(|a: &T, b: &T| a.traversal_cost(b))
    }
}

impl<T> Default for GraphConfig<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> fmt::Debug for GraphConfig<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GraphConfig")
            .field("has_cost", &self.has_cost())
            .finish()
    }
}
