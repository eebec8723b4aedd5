use crate::graph::traits::{Graph, MutableGraph};
use crate::{Error, Result};
use log::debug;
use num_traits::{Float, Zero};
use std::collections::HashMap;
use std::fmt::Debug;

/// How strictly [`DirectedGraph::build`] checks its input
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Validation {
    /// Any endpoint is accepted; vertices never mentioned by an edge are isolated
    #[default]
    Permissive,
    /// Endpoints must lie in `0..vertex_count` and each ordered pair may appear once
    Strict { vertex_count: usize },
}

/// Options for building a graph from an edge list
#[derive(Debug, Clone, Copy, Default)]
pub struct BuildOptions {
    pub validation: Validation,
}

impl BuildOptions {
    /// Strict validation against a declared number of vertices
    pub fn strict(vertex_count: usize) -> Self {
        BuildOptions {
            validation: Validation::Strict { vertex_count },
        }
    }
}

/// A directed graph implementation using adjacency lists
#[derive(Debug, Clone)]
pub struct DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Number of vertices in the graph
    vertex_count: usize,

    /// Outgoing edges for each vertex: vertex_id -> [(target_vertex, weight)]
    outgoing_edges: HashMap<usize, Vec<(usize, W)>>,
}

impl<W> Default for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            vertex_count: 0,
            outgoing_edges: HashMap::new(),
        }
    }

    /// Creates a new directed graph with the specified number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        let mut graph = DirectedGraph {
            vertex_count: vertices,
            outgoing_edges: HashMap::with_capacity(vertices),
        };

        for v in 0..vertices {
            graph.outgoing_edges.insert(v, Vec::new());
        }

        graph
    }

    /// Builds a graph from `(from, to, weight)` triples.
    ///
    /// Negative or NaN weights are always rejected. Under
    /// [`Validation::Permissive`] the vertex range grows to cover every endpoint
    /// and a repeated pair keeps its last weight; under [`Validation::Strict`]
    /// out-of-range endpoints and repeated pairs are errors.
    pub fn build(edges: &[(usize, usize, W)], options: BuildOptions) -> Result<Self> {
        let vertex_count = match options.validation {
            Validation::Permissive => edges
                .iter()
                .map(|&(from, to, _)| from.max(to) + 1)
                .max()
                .unwrap_or(0),
            Validation::Strict { vertex_count } => vertex_count,
        };

        let mut graph = DirectedGraph::with_capacity(vertex_count);

        for &(from, to, weight) in edges {
            if weight.is_nan() || weight < W::zero() {
                return Err(Error::MalformedGraph(format!(
                    "edge {} -> {} has invalid weight {:?}",
                    from, to, weight
                )));
            }

            if let Validation::Strict { vertex_count } = options.validation {
                if from >= vertex_count || to >= vertex_count {
                    return Err(Error::MalformedGraph(format!(
                        "edge {} -> {} references a vertex outside 0..{}",
                        from, to, vertex_count
                    )));
                }
                if graph.has_edge(from, to) {
                    return Err(Error::MalformedGraph(format!(
                        "duplicate edge {} -> {}",
                        from, to
                    )));
                }
            }

            graph.add_edge(from, to, weight);
        }

        debug!(
            "built graph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        Ok(graph)
    }
}

impl<W> Graph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn vertex_count(&self) -> usize {
        self.vertex_count
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.values().map(|edges| edges.len()).sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        if let Some(edges) = self.outgoing_edges.get(&vertex) {
            Box::new(edges.iter().cloned())
        } else {
            Box::new(std::iter::empty())
        }
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        vertex < self.vertex_count
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        self.outgoing_edges
            .get(&from)?
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| *weight)
    }
}

impl<W> MutableGraph<W> for DirectedGraph<W>
where
    W: Float + Zero + Debug + Copy,
{
    fn add_vertex(&mut self) -> usize {
        let new_id = self.vertex_count;
        self.outgoing_edges.insert(new_id, Vec::new());
        self.vertex_count += 1;
        new_id
    }

    fn add_edge(&mut self, from: usize, to: usize, weight: W) -> bool {
        if !self.has_vertex(from) || !self.has_vertex(to) || weight.is_nan() || weight < W::zero() {
            return false;
        }

        let outgoing = self.outgoing_edges.entry(from).or_default();

        // Check if edge already exists and update it if it does
        if let Some(edge) = outgoing.iter_mut().find(|(target, _)| *target == to) {
            edge.1 = weight;
        } else {
            outgoing.push((to, weight));
        }

        true
    }
}
