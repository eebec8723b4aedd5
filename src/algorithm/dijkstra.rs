use std::fmt::Debug;
use log::trace;
use num_traits::{Float, Zero};

use crate::graph::Graph;
use crate::algorithm::{Path, ShortestPathAlgorithm};
use crate::data_structures::FrontierQueue;
use crate::{Error, Result};

/// Classic Dijkstra's algorithm, stopping as soon as the target is settled.
///
/// Labels with equal distance are settled in ascending vertex order. All search
/// state is local to one call, so the same instance can be reused against
/// differently pruned views of one graph.
#[derive(Debug, Default, Clone, Copy)]
pub struct Dijkstra;

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra
    }
}

impl<W> ShortestPathAlgorithm<W> for Dijkstra
where
    W: Float + Zero + Debug + Copy + Ord,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn shortest_path<G: Graph<W>>(
        &self,
        graph: &G,
        source: usize,
        target: usize,
    ) -> Result<Option<Path<W>>> {
        if !graph.has_vertex(source) || !graph.has_vertex(target) {
            return Ok(None);
        }

        let n = graph.vertex_count();

        let mut distances: Vec<Option<W>> = vec![None; n];
        let mut predecessors: Vec<Option<usize>> = vec![None; n];
        let mut settled = vec![false; n];

        distances[source] = Some(W::zero());

        let mut queue = FrontierQueue::new();
        queue.push(source, W::zero());

        while let Some((u, dist_u)) = queue.pop() {
            // Stale label
            if settled[u] {
                continue;
            }
            settled[u] = true;

            if u == target {
                let vertices = reconstruct_path(&predecessors, source, target)
                    .ok_or_else(|| Error::AlgorithmError(format!(
                        "broken predecessor chain from {} to {}",
                        source, target
                    )))?;
                return Ok(Some(Path {
                    vertices,
                    cost: dist_u,
                }));
            }

            for (v, weight) in graph.outgoing_edges(u) {
                if weight.is_nan() || weight < W::zero() {
                    return Err(Error::InvalidWeight {
                        from: u,
                        to: v,
                        weight: weight.to_f64().unwrap_or(f64::NAN),
                    });
                }

                if v >= n || settled[v] {
                    continue;
                }

                let new_dist = dist_u + weight;

                let should_update = match distances[v] {
                    None => true,
                    Some(current_dist) => new_dist < current_dist,
                };

                if should_update {
                    trace!("relax {} -> {} to {:?}", u, v, new_dist);
                    distances[v] = Some(new_dist);
                    predecessors[v] = Some(u);
                    queue.push(v, new_dist);
                }
            }
        }

        Ok(None)
    }
}

/// Walks the predecessor chain back from `target`. Returns `None` if the chain
/// breaks or runs longer than the number of vertices.
fn reconstruct_path(
    predecessors: &[Option<usize>],
    source: usize,
    target: usize,
) -> Option<Vec<usize>> {
    let mut path = vec![target];
    let mut current = target;

    while current != source {
        current = predecessors[current]?;
        path.push(current);
        if path.len() > predecessors.len() {
            return None;
        }
    }

    path.reverse();
    Some(path)
}
