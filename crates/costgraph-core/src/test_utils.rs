//! Test utilities for costgraph-core

use std::cell::Cell;
use std::collections::HashMap;
use std::rc::Rc;

use crate::graph::Graph;
use crate::model::{EdgeId, VertexId};

/// Cost function over integer payloads (`|a - b|`) that counts its calls.
pub fn counting_cost() -> (impl Fn(&u32, &u32) -> f32 + 'static, Rc<Cell<usize>>) {
    let calls = Rc::new(Cell::new(0));
    let counter = Rc::clone(&calls);
    let get_cost = move |a: &u32, b: &u32| {
        counter.set(counter.get() + 1);
        a.abs_diff(*b) as f32
    };
    (get_cost, calls)
}

/// `n` unconnected vertices with payloads 0..n; edge cost is `|a - b|`.
pub fn line_graph(n: u32) -> Graph<u32> {
    let mut graph = Graph::new(|a: &u32, b: &u32| a.abs_diff(*b) as f32);
    for i in 0..n {
        graph.add(i);
    }
    graph
}

/// `n` vertices with payloads 0..n and the given directed edges, each with an
/// explicit cost. Edges are connected in slice order.
pub fn table_graph(n: u32, edges: &[(u32, u32, f32)]) -> Graph<u32> {
    let costs: HashMap<(u32, u32), f32> = edges.iter().map(|&(a, b, c)| ((a, b), c)).collect();
    let mut graph =
        Graph::new(move |a: &u32, b: &u32| costs.get(&(*a, *b)).copied().unwrap_or(0.0));
    for i in 0..n {
        graph.add(i);
    }
    for &(a, b, _) in edges {
        graph.connect(VertexId(a as u64), VertexId(b as u64), false);
    }
    graph
}

/// Render a path as its vertex sequence, e.g. `0 -> 1 -> 3`.
pub fn render_path(path: &[EdgeId]) -> String {
    let Some(first) = path.first() else {
        return String::new();
    };
    let mut out = first.from.to_string();
    for edge in path {
        out.push_str(&format!(" -> {}", edge.to));
    }
    out
}

/// Small deterministic xorshift generator for building test graphs.
pub struct XorShift(u64);

impl XorShift {
    pub fn new(seed: u64) -> Self {
        XorShift(seed.max(1))
    }

    pub fn next_u64(&mut self) -> u64 {
        let mut x = self.0;
        x ^= x << 13;
        x ^= x >> 7;
        x ^= x << 17;
        self.0 = x;
        x
    }

    pub fn below(&mut self, bound: u32) -> u32 {
        (self.next_u64() % bound as u64) as u32
    }
}

/// Random directed edges with integer costs in 1..=9. Duplicate pairs keep
/// their first cost.
pub fn random_edges(rng: &mut XorShift, n: u32, m: usize) -> Vec<(u32, u32, f32)> {
    let mut seen = HashMap::new();
    let mut edges = Vec::new();
    for _ in 0..m {
        let a = rng.below(n);
        let b = rng.below(n);
        if seen.contains_key(&(a, b)) {
            continue;
        }
        let cost = (rng.below(9) + 1) as f32;
        seen.insert((a, b), cost);
        edges.push((a, b, cost));
    }
    edges
}
