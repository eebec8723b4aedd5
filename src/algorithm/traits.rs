use std::fmt::Debug;
use num_traits::{Float, Zero};
use crate::graph::Graph;
use crate::Result;

/// A loopless path together with its total cost
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Path<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Vertices from source to target, no vertex repeated
    pub vertices: Vec<usize>,

    /// Sum of the edge weights along `vertices`
    pub cost: W,
}

impl<W> Path<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// The zero-cost path that starts and ends at `vertex`
    pub fn trivial(vertex: usize) -> Self {
        Path {
            vertices: vec![vertex],
            cost: W::zero(),
        }
    }

    pub fn source(&self) -> Option<usize> {
        self.vertices.first().copied()
    }

    pub fn target(&self) -> Option<usize> {
        self.vertices.last().copied()
    }

    /// Number of edges traversed
    pub fn edge_count(&self) -> usize {
        self.vertices.len().saturating_sub(1)
    }

    /// True if no vertex appears twice
    pub fn is_loopless(&self) -> bool {
        let mut seen = std::collections::HashSet::with_capacity(self.vertices.len());
        self.vertices.iter().all(|v| seen.insert(*v))
    }
}

/// Trait for point-to-point shortest path algorithms
pub trait ShortestPathAlgorithm<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Computes the cheapest path from `source` to `target`.
    ///
    /// `Ok(None)` means no path exists in `graph`; it is not an error.
    fn shortest_path<G: Graph<W>>(
        &self,
        graph: &G,
        source: usize,
        target: usize,
    ) -> Result<Option<Path<W>>>;
}
