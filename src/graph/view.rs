use std::cell::RefCell;
use std::collections::HashMap;
use std::fmt::Debug;
use std::marker::PhantomData;

use log::trace;
use num_traits::{Float, Zero};

use crate::graph::Graph;

/// An element of the base graph that can be hidden from a view
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Hidden {
    Node(usize),
    Edge(usize, usize),
}

/// Reference-counted set of hidden elements.
///
/// An element stays hidden while at least one guard for it is alive.
#[derive(Debug, Default)]
struct Overlay {
    counts: HashMap<Hidden, usize>,
}

impl Overlay {
    fn hide(&mut self, element: Hidden) {
        *self.counts.entry(element).or_insert(0) += 1;
    }

    fn restore(&mut self, element: Hidden) {
        if let Some(count) = self.counts.get_mut(&element) {
            *count -= 1;
            if *count == 0 {
                self.counts.remove(&element);
            }
        }
    }

    fn contains(&self, element: &Hidden) -> bool {
        self.counts.contains_key(element)
    }
}

/// A read-only view of a base graph with some nodes and edges hidden.
///
/// The base graph is never modified. Hiding goes through [`GraphView::hide_node`]
/// and [`GraphView::hide_edge`], which return a [`HideGuard`]; the element is
/// visible again as soon as the guard is dropped, including on early return or
/// `?` propagation out of the scope that owns the guard.
///
/// A view is single-threaded (`!Sync`). Concurrent queries over one base graph
/// each create their own view.
#[derive(Debug)]
pub struct GraphView<'g, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    graph: &'g G,
    overlay: RefCell<Overlay>,
    _weight_marker: PhantomData<W>,
}

impl<'g, W, G> GraphView<'g, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    /// Creates a view with nothing hidden
    pub fn new(graph: &'g G) -> Self {
        GraphView {
            graph,
            overlay: RefCell::new(Overlay::default()),
            _weight_marker: PhantomData,
        }
    }

    /// The underlying graph, ignoring anything hidden
    pub fn base(&self) -> &'g G {
        self.graph
    }

    /// Hides `node` and every edge touching it until the guard is dropped
    pub fn hide_node(&self, node: usize) -> HideGuard<'_> {
        self.hide(Hidden::Node(node))
    }

    /// Hides the edge `from -> to` until the guard is dropped
    pub fn hide_edge(&self, from: usize, to: usize) -> HideGuard<'_> {
        self.hide(Hidden::Edge(from, to))
    }

    fn hide(&self, element: Hidden) -> HideGuard<'_> {
        trace!("hiding {:?}", element);
        self.overlay.borrow_mut().hide(element);
        HideGuard {
            overlay: &self.overlay,
            element,
        }
    }

    pub fn is_node_hidden(&self, node: usize) -> bool {
        self.overlay.borrow().contains(&Hidden::Node(node))
    }

    pub fn is_edge_hidden(&self, from: usize, to: usize) -> bool {
        let overlay = self.overlay.borrow();
        overlay.contains(&Hidden::Edge(from, to))
            || overlay.contains(&Hidden::Node(from))
            || overlay.contains(&Hidden::Node(to))
    }

    /// Number of distinct elements currently hidden
    pub fn hidden_count(&self) -> usize {
        self.overlay.borrow().counts.len()
    }
}

/// Keeps one element hidden in a [`GraphView`]; restores it on drop
#[must_use = "the element is restored as soon as the guard is dropped"]
#[derive(Debug)]
pub struct HideGuard<'v> {
    overlay: &'v RefCell<Overlay>,
    element: Hidden,
}

impl HideGuard<'_> {
    pub fn element(&self) -> Hidden {
        self.element
    }
}

impl Drop for HideGuard<'_> {
    fn drop(&mut self) {
        trace!("restoring {:?}", self.element);
        self.overlay.borrow_mut().restore(self.element);
    }
}

impl<W, G> Graph<W> for GraphView<'_, W, G>
where
    W: Float + Zero + Debug + Copy,
    G: Graph<W>,
{
    fn vertex_count(&self) -> usize {
        self.graph.vertex_count()
    }

    fn edge_count(&self) -> usize {
        (0..self.vertex_count())
            .map(|v| self.outgoing_edges(v).count())
            .sum()
    }

    fn outgoing_edges(&self, vertex: usize) -> Box<dyn Iterator<Item = (usize, W)> + '_> {
        let overlay = self.overlay.borrow();
        if overlay.contains(&Hidden::Node(vertex)) {
            return Box::new(std::iter::empty());
        }

        Box::new(self.graph.outgoing_edges(vertex).filter(move |&(target, _)| {
            !overlay.contains(&Hidden::Node(target))
                && !overlay.contains(&Hidden::Edge(vertex, target))
        }))
    }

    fn has_vertex(&self, vertex: usize) -> bool {
        self.graph.has_vertex(vertex) && !self.is_node_hidden(vertex)
    }

    fn get_edge_weight(&self, from: usize, to: usize) -> Option<W> {
        if self.is_edge_hidden(from, to) {
            return None;
        }
        self.graph.get_edge_weight(from, to)
    }
}
