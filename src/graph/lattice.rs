//! Layered lattice built from a score matrix.
//!
//! Each row of the matrix is one vocabulary entry, each column one sequence
//! position. A start→end path through the lattice picks exactly one row per
//! column, and its cost is the sum of the picked scores, so the K cheapest
//! paths are the K best-scoring row sequences.

use std::fmt::Debug;

use num_traits::{Float, Zero};

use crate::graph::directed::{BuildOptions, DirectedGraph};
use crate::graph::Graph;
use crate::{Error, Result};

#[derive(Debug, Clone)]
pub struct ScoreLattice<W>
where
    W: Float + Zero + Debug + Copy,
{
    graph: DirectedGraph<W>,
    vocab_size: usize,
    sequence_length: usize,
}

impl<W> ScoreLattice<W>
where
    W: Float + Zero + Debug + Copy,
{
    /// Builds the lattice for `scores[row][column]`.
    ///
    /// Node 0 is the start, node `column * vocab_size + row + 1` is the cell
    /// `(column, row)` and the last node is the end. Entering a cell costs its
    /// score; leaving the last column costs nothing.
    pub fn build(scores: &[Vec<W>]) -> Result<Self> {
        let vocab_size = scores.len();
        let sequence_length = scores.first().map_or(0, |row| row.len());

        if vocab_size == 0 || sequence_length == 0 {
            return Err(Error::MalformedGraph("score matrix is empty".to_string()));
        }
        if let Some((index, row)) = scores
            .iter()
            .enumerate()
            .find(|(_, row)| row.len() != sequence_length)
        {
            return Err(Error::MalformedGraph(format!(
                "score row {} has {} columns, expected {}",
                index,
                row.len(),
                sequence_length
            )));
        }

        let num_nodes = sequence_length * vocab_size + 2;
        let end = num_nodes - 1;
        let cell = |column: usize, row: usize| column * vocab_size + row + 1;

        let mut edges = Vec::with_capacity(vocab_size * vocab_size * sequence_length + 2 * vocab_size);

        for (row, scores_row) in scores.iter().enumerate() {
            edges.push((0, cell(0, row), scores_row[0]));
        }

        for column in 0..sequence_length - 1 {
            for row in 0..vocab_size {
                for (next_row, scores_row) in scores.iter().enumerate() {
                    edges.push((cell(column, row), cell(column + 1, next_row), scores_row[column + 1]));
                }
            }
        }

        for row in 0..vocab_size {
            edges.push((cell(sequence_length - 1, row), end, W::zero()));
        }

        let graph = DirectedGraph::build(&edges, BuildOptions::strict(num_nodes))?;

        Ok(ScoreLattice {
            graph,
            vocab_size,
            sequence_length,
        })
    }

    pub fn graph(&self) -> &DirectedGraph<W> {
        &self.graph
    }

    pub fn source(&self) -> usize {
        0
    }

    pub fn target(&self) -> usize {
        self.graph.vertex_count() - 1
    }

    pub fn vocab_size(&self) -> usize {
        self.vocab_size
    }

    pub fn sequence_length(&self) -> usize {
        self.sequence_length
    }

    /// Node id of cell `(column, row)`
    pub fn node(&self, column: usize, row: usize) -> usize {
        column * self.vocab_size + row + 1
    }

    /// Maps a start→end path back to its row per column.
    ///
    /// Returns `None` if the path does not walk the columns in order.
    pub fn decode(&self, path: &[usize]) -> Option<Vec<usize>> {
        if path.len() != self.sequence_length + 2
            || path.first() != Some(&self.source())
            || path.last() != Some(&self.target())
        {
            return None;
        }

        path[1..path.len() - 1]
            .iter()
            .enumerate()
            .map(|(expected_column, &node)| {
                let offset = node.checked_sub(1)?;
                let column = offset / self.vocab_size;
                (column == expected_column).then_some(offset % self.vocab_size)
            })
            .collect()
    }
}
