use std::fmt::Debug;
use log::debug;
use num_traits::{Float, Zero};

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::{Path, ShortestPathAlgorithm};
use crate::data_structures::CandidatePool;
use crate::graph::{Graph, GraphView};
use crate::{Error, Result};

/// Yen's algorithm for the K shortest loopless paths.
///
/// Each new path is found by deviating from the most recently accepted one:
/// for every spur node along it, the edges that earlier accepted paths take
/// out of the same root are hidden, the root's other nodes are hidden, and
/// the inner algorithm searches spur → target on that view. Deviations go
/// into a [`CandidatePool`] and the cheapest is accepted next.
#[derive(Debug, Default, Clone)]
pub struct YenKsp<A = Dijkstra> {
    algorithm: A,
}

impl YenKsp<Dijkstra> {
    /// Creates a ranking engine backed by [`Dijkstra`]
    pub fn new() -> Self {
        YenKsp {
            algorithm: Dijkstra::new(),
        }
    }
}

impl<A> YenKsp<A> {
    /// Creates a ranking engine backed by another point-to-point algorithm
    pub fn with_algorithm(algorithm: A) -> Self {
        YenKsp { algorithm }
    }

    pub fn algorithm(&self) -> &A {
        &self.algorithm
    }

    /// Returns up to `k` loopless paths from `source` to `target`, cheapest
    /// first. Equal-cost paths keep the order in which they were discovered.
    ///
    /// Fewer than `k` paths (possibly none) is a normal result. `source ==
    /// target` yields the single zero-cost path `[source]` for any `k > 0`.
    pub fn k_shortest_paths<W, G>(
        &self,
        graph: &G,
        source: usize,
        target: usize,
        k: usize,
    ) -> Result<Vec<Path<W>>>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
        A: ShortestPathAlgorithm<W>,
    {
        if k == 0 {
            return Ok(Vec::new());
        }
        if source == target {
            return Ok(vec![Path::trivial(source)]);
        }

        let view = GraphView::new(graph);

        let first = match self.algorithm.shortest_path(&view, source, target)? {
            Some(path) => path,
            None => {
                debug!("no path from {} to {}", source, target);
                return Ok(Vec::new());
            }
        };

        let mut candidates = CandidatePool::new();
        candidates.mark_seen(&first.vertices);
        let mut accepted = vec![first];

        while accepted.len() < k {
            let previous = accepted[accepted.len() - 1].vertices.clone();

            for spur_index in 0..previous.len() - 1 {
                let Some(vertices) = self.deviate(&view, &accepted, &previous, spur_index, target)? else {
                    continue;
                };

                let cost = graph
                    .path_cost(&vertices)
                    .ok_or_else(|| Error::InvalidPath(vertices.clone()))?;

                if candidates.contains(&vertices) {
                    debug!("duplicate candidate {:?}", vertices);
                } else {
                    debug!("candidate {:?} with cost {:?}", vertices, cost);
                    candidates.push(vertices, cost);
                }
            }

            match candidates.pop() {
                Some((vertices, cost)) => accepted.push(Path { vertices, cost }),
                None => {
                    debug!(
                        "candidates exhausted after {} of {} paths",
                        accepted.len(),
                        k
                    );
                    break;
                }
            }
        }

        Ok(accepted)
    }

    /// Searches for a deviation from `previous` at `spur_index` and returns the
    /// full root + spur vertex sequence.
    ///
    /// Everything hidden here is restored before returning, on the error path
    /// as well.
    fn deviate<W, G>(
        &self,
        view: &GraphView<'_, W, G>,
        accepted: &[Path<W>],
        previous: &[usize],
        spur_index: usize,
        target: usize,
    ) -> Result<Option<Vec<usize>>>
    where
        W: Float + Zero + Debug + Copy + Ord,
        G: Graph<W>,
        A: ShortestPathAlgorithm<W>,
    {
        let spur_node = previous[spur_index];
        let root = &previous[..=spur_index];

        let mut guards = Vec::new();

        for path in accepted {
            if path.vertices.len() > spur_index + 1 && path.vertices[..=spur_index] == *root {
                guards.push(view.hide_edge(spur_node, path.vertices[spur_index + 1]));
            }
        }

        guards.extend(root[..spur_index].iter().map(|&node| view.hide_node(node)));

        debug!(
            "spur {} at index {} with {} hidden elements",
            spur_node,
            spur_index,
            guards.len()
        );

        let spur_path = self.algorithm.shortest_path(view, spur_node, target)?;

        Ok(spur_path.map(|spur| {
            let mut vertices = root[..spur_index].to_vec();
            vertices.extend(spur.vertices);
            vertices
        }))
    }
}
