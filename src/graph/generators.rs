use crate::graph::{DirectedGraph, MutableGraph};
use ordered_float::OrderedFloat;
use rand::Rng;

/// Generates a random directed graph with roughly `edge_factor * n` edges.
/// Self-loops are skipped and weights are drawn from `1.0..100.0`.
///
/// The caller supplies the RNG so tests can use a seeded one.
pub fn generate_random_graph<R: Rng>(
    n: usize,
    edge_factor: f64,
    rng: &mut R,
) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(n);
    if n < 2 {
        return graph;
    }

    let num_edges = (edge_factor * n as f64) as usize;

    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            let weight = OrderedFloat(rng.gen_range(1.0..100.0));
            graph.add_edge(u, v, weight);
        }
    }

    graph
}

/// Generates a `width * height` grid with unit-weight edges in both
/// directions between horizontal and vertical neighbours.
///
/// Vertex `(x, y)` has index `y * width + x`. Grids have many equal-cost
/// paths, which makes them useful for exercising tie-breaking.
pub fn generate_grid(width: usize, height: usize) -> DirectedGraph<OrderedFloat<f64>> {
    let mut graph = DirectedGraph::with_capacity(width * height);
    let index = |x: usize, y: usize| y * width + x;

    for y in 0..height {
        for x in 0..width {
            let current = index(x, y);
            if x > 0 {
                graph.add_edge(current, index(x - 1, y), OrderedFloat(1.0));
            }
            if x + 1 < width {
                graph.add_edge(current, index(x + 1, y), OrderedFloat(1.0));
            }
            if y > 0 {
                graph.add_edge(current, index(x, y - 1), OrderedFloat(1.0));
            }
            if y + 1 < height {
                graph.add_edge(current, index(x, y + 1), OrderedFloat(1.0));
            }
        }
    }

    graph
}
