use std::cmp::Reverse;
use std::collections::BinaryHeap;
use std::fmt::Debug;

/// Min-priority queue of `(vertex, distance)` labels for label-setting search.
///
/// Pops the smallest distance first; equal distances pop the smallest vertex
/// id first, which keeps search order deterministic.
#[derive(Debug)]
pub struct FrontierQueue<P>
where
    P: Copy + Debug + Ord,
{
    heap: BinaryHeap<Reverse<(P, usize)>>,
}

impl<P> Default for FrontierQueue<P>
where
    P: Copy + Debug + Ord,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P> FrontierQueue<P>
where
    P: Copy + Debug + Ord,
{
    /// Creates a new empty queue
    pub fn new() -> Self {
        FrontierQueue {
            heap: BinaryHeap::new(),
        }
    }

    pub fn is_empty(&self) -> bool {
        self.heap.is_empty()
    }

    pub fn len(&self) -> usize {
        self.heap.len()
    }

    /// Pushes a tentative label. Stale labels are left in place and must be
    /// skipped by the caller when popped.
    pub fn push(&mut self, vertex: usize, distance: P) {
        self.heap.push(Reverse((distance, vertex)));
    }

    /// Removes the label with the smallest distance
    pub fn pop(&mut self) -> Option<(usize, P)> {
        self.heap.pop().map(|Reverse((distance, vertex))| (vertex, distance))
    }

    pub fn peek(&self) -> Option<(usize, P)> {
        self.heap.peek().map(|Reverse((distance, vertex))| (*vertex, *distance))
    }
}
