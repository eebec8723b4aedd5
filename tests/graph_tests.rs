use yens_ksp::graph::{DirectedGraph, Graph, GraphView, MutableGraph};
use yens_ksp::{BuildOptions, Error};
use ordered_float::OrderedFloat;

fn triangle() -> DirectedGraph<OrderedFloat<f64>> {
    let edges = [
        (0, 1, OrderedFloat(1.0)),
        (1, 2, OrderedFloat(1.0)),
        (0, 2, OrderedFloat(5.0)),
    ];
    DirectedGraph::build(&edges, BuildOptions::default()).unwrap()
}

#[test]
fn test_build_permissive() {
    let graph = triangle();
    assert_eq!(graph.vertex_count(), 3);
    assert_eq!(graph.edge_count(), 3);
    assert_eq!(graph.get_edge_weight(0, 2), Some(OrderedFloat(5.0)));
    assert!(!graph.has_edge(2, 0));

    let neighbours: Vec<usize> = graph.outgoing_edges(0).map(|(v, _)| v).collect();
    assert_eq!(neighbours, vec![1, 2]);
}

#[test]
fn test_build_permissive_unseen_vertices_are_isolated() {
    let edges = [(0, 7, OrderedFloat(2.0))];
    let graph = DirectedGraph::build(&edges, BuildOptions::default()).unwrap();

    assert_eq!(graph.vertex_count(), 8);
    assert!(graph.has_vertex(3));
    assert_eq!(graph.outgoing_edges(3).count(), 0);
}

#[test]
fn test_build_keeps_last_duplicate_weight() {
    let edges = [(0, 1, OrderedFloat(4.0)), (0, 1, OrderedFloat(2.0))];
    let graph = DirectedGraph::build(&edges, BuildOptions::default()).unwrap();

    assert_eq!(graph.edge_count(), 1);
    assert_eq!(graph.get_edge_weight(0, 1), Some(OrderedFloat(2.0)));
}

#[test]
fn test_build_rejects_negative_weight() {
    let edges = [(0, 1, OrderedFloat(1.0)), (1, 2, OrderedFloat(-0.5))];
    let result = DirectedGraph::build(&edges, BuildOptions::default());
    assert!(matches!(result, Err(Error::MalformedGraph(_))));
}

#[test]
fn test_build_rejects_nan_weight() {
    let edges = [(0, 1, OrderedFloat(f64::NAN))];
    let result = DirectedGraph::build(&edges, BuildOptions::default());
    assert!(matches!(result, Err(Error::MalformedGraph(_))));
}

#[test]
fn test_build_strict() {
    let edges = [(0, 1, OrderedFloat(1.0)), (1, 4, OrderedFloat(1.0))];

    let ok = DirectedGraph::build(&edges, BuildOptions::strict(5)).unwrap();
    assert_eq!(ok.vertex_count(), 5);

    let missing = DirectedGraph::build(&edges, BuildOptions::strict(4));
    assert!(matches!(missing, Err(Error::MalformedGraph(_))));

    let duplicate = [(0, 1, OrderedFloat(1.0)), (0, 1, OrderedFloat(3.0))];
    let result = DirectedGraph::build(&duplicate, BuildOptions::strict(2));
    assert!(matches!(result, Err(Error::MalformedGraph(_))));
}

#[test]
fn test_mutable_graph() {
    let mut graph: DirectedGraph<OrderedFloat<f64>> = DirectedGraph::new();
    for _ in 0..3 {
        graph.add_vertex();
    }

    assert!(graph.add_edge(0, 1, OrderedFloat(1.0)));
    assert!(!graph.add_edge(0, 3, OrderedFloat(1.0)), "target out of range");
    assert!(!graph.add_edge(0, 2, OrderedFloat(-1.0)), "negative weight");
    assert!(graph.add_edge(0, 1, OrderedFloat(9.0)));
    assert_eq!(graph.get_edge_weight(0, 1), Some(OrderedFloat(9.0)));
}

#[test]
fn test_path_cost() {
    let graph = triangle();
    assert_eq!(graph.path_cost(&[0, 1, 2]), Some(OrderedFloat(2.0)));
    assert_eq!(graph.path_cost(&[1]), Some(OrderedFloat(0.0)));
    assert_eq!(graph.path_cost(&[2, 0]), None);
}

#[test]
fn test_view_hide_edge_restores_on_drop() {
    let graph = triangle();
    let view = GraphView::new(&graph);

    {
        let _guard = view.hide_edge(0, 1);
        assert!(!view.has_edge(0, 1));
        assert!(view.is_edge_hidden(0, 1));
        let neighbours: Vec<usize> = view.outgoing_edges(0).map(|(v, _)| v).collect();
        assert_eq!(neighbours, vec![2]);
        assert_eq!(view.edge_count(), 2);
    }

    assert!(view.has_edge(0, 1));
    assert_eq!(view.hidden_count(), 0);
    assert_eq!(view.edge_count(), 3);
}

#[test]
fn test_view_hide_node_hides_incident_edges() {
    let graph = triangle();
    let view = GraphView::new(&graph);

    let guard = view.hide_node(1);
    assert!(!view.has_vertex(1));
    assert!(!view.has_edge(0, 1));
    assert!(!view.has_edge(1, 2));
    assert_eq!(view.outgoing_edges(1).count(), 0);
    assert_eq!(view.outgoing_edges(0).map(|(v, _)| v).collect::<Vec<_>>(), vec![2]);

    drop(guard);
    assert!(view.has_vertex(1));
    assert!(view.has_edge(1, 2));
}

#[test]
fn test_view_overlapping_guards_are_counted() {
    let graph = triangle();
    let view = GraphView::new(&graph);

    let first = view.hide_edge(1, 2);
    let second = view.hide_edge(1, 2);
    drop(first);
    assert!(!view.has_edge(1, 2), "still hidden by the second guard");
    drop(second);
    assert!(view.has_edge(1, 2));
}

#[test]
fn test_view_restores_on_early_return() {
    fn hide_then_fail(view: &GraphView<'_, OrderedFloat<f64>, DirectedGraph<OrderedFloat<f64>>>) -> Result<(), Error> {
        let _node = view.hide_node(2);
        let _edge = view.hide_edge(0, 1);
        "not a number"
            .parse::<usize>()
            .map_err(|e| Error::AlgorithmError(e.to_string()))?;
        Ok(())
    }

    let graph = triangle();
    let view = GraphView::new(&graph);

    assert!(hide_then_fail(&view).is_err());
    assert_eq!(view.hidden_count(), 0);
    assert!(view.has_edge(0, 1));
    assert!(view.has_vertex(2));
}

#[test]
fn test_view_never_modifies_base_graph() {
    let graph = triangle();
    let view = GraphView::new(&graph);

    let _guards = vec![view.hide_node(1), view.hide_edge(0, 2)];
    assert_eq!(view.edge_count(), 0);
    assert_eq!(view.base().edge_count(), 3);
    assert_eq!(graph.get_edge_weight(0, 2), Some(OrderedFloat(5.0)));
}
