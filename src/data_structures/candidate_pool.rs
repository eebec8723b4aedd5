use std::cmp::{Ordering, Reverse};
use std::collections::{BinaryHeap, HashSet};
use std::fmt::Debug;

/// Pool of candidate paths waiting to be accepted by the ranking engine.
///
/// Candidates pop cheapest first; equal costs pop in insertion order. Every
/// node sequence the pool has ever been told about (queued or accepted) is
/// remembered, so the same path is never queued twice.
#[derive(Debug)]
pub struct CandidatePool<W>
where
    W: Copy + Debug + Ord,
{
    heap: BinaryHeap<Reverse<Candidate<W>>>,
    seen: HashSet<Vec<usize>>,
    next_sequence: u64,
}

#[derive(Debug)]
struct Candidate<W> {
    cost: W,
    sequence: u64,
    vertices: Vec<usize>,
}

impl<W: Ord> PartialEq for Candidate<W> {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl<W: Ord> Eq for Candidate<W> {}

impl<W: Ord> PartialOrd for Candidate<W> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<W: Ord> Ord for Candidate<W> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.cost
            .cmp(&other.cost)
            .then_with(|| self.sequence.cmp(&other.sequence))
    }
}

impl<W> Default for CandidatePool<W>
where
    W: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<W> CandidatePool<W>
where
    W: Copy + Debug + Ord,
{
    pub fn new() -> Self {
        CandidatePool {
            heap: BinaryHeap::new(),
            seen: HashSet::new(),
            next_sequence: 0,
        }
    }

    /// Records a path as known without queueing it (used for accepted paths).
    /// Returns false if it was already known.
    pub fn mark_seen(&mut self, vertices: &[usize]) -> bool {
        self.seen.insert(vertices.to_vec())
    }

    /// True if the path has been queued or marked seen at any point
    pub fn contains(&self, vertices: &[usize]) -> bool {
        self.seen.contains(vertices)
    }

    /// Queues a candidate. Returns false, leaving the pool unchanged, if the
    /// same node sequence is already known.
    pub fn push(&mut self, vertices: Vec<usize>, cost: W) -> bool {
        if self.seen.contains(vertices.as_slice()) {
            return false;
        }
        self.seen.insert(vertices.clone());

        let sequence = self.next_sequence;
        self.next_sequence += 1;
        self.heap.push(Reverse(Candidate {
            cost,
            sequence,
            vertices,
        }));
        true
    }

    /// Removes the cheapest candidate, earliest-inserted first on ties
    pub fn pop(&mut self) -> Option<(Vec<usize>, W)> {
        self.heap
            .pop()
            .map(|Reverse(candidate)| (candidate.vertices, candidate.cost))
    }

    /// Number of queued candidates
    pub fn len(&self) -> usize {
        self.heap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }
}
