use ordered_float::OrderedFloat;

use yens_ksp::batch::{run_batch, Query};
use yens_ksp::graph::{DirectedGraph, ScoreLattice};
use yens_ksp::protocol::{
    parse_edge_list, parse_lattice_request, parse_request, write_json, write_lattice_text, write_text,
};
use yens_ksp::{BuildOptions, Error, Path, YenKsp};

#[test]
fn test_parse_request() {
    let queries = parse_request("3|0 2|5 0\n").unwrap();
    assert_eq!(queries, vec![Query::new(0, 2, 3), Query::new(5, 0, 3)]);
}

#[test]
fn test_parse_request_query_shapes() {
    // lone id, intermediate context, blank field
    let queries = parse_request(" 2 | 4 |1 9 8 3|  |").unwrap();
    assert_eq!(queries, vec![Query::new(4, 4, 2), Query::new(1, 3, 2)]);

    assert!(parse_request("7").unwrap().is_empty());
}

#[test]
fn test_parse_request_errors() {
    assert!(matches!(parse_request("x|0 1"), Err(Error::Parse { line: 0, .. })));
    assert!(matches!(parse_request(""), Err(Error::Parse { line: 0, .. })));
    assert!(matches!(parse_request("2|0 1|0 -1"), Err(Error::Parse { line: 2, .. })));
}

#[test]
fn test_parse_lattice_request() {
    let request = parse_lattice_request("40|0.5 1 2|0.25 0 3\n").unwrap();
    assert_eq!(request.k, 40);
    assert_eq!(request.scores, vec![vec![0.5, 1.0, 2.0], vec![0.25, 0.0, 3.0]]);

    assert!(matches!(parse_lattice_request("4|0.5 abc"), Err(Error::Parse { line: 1, .. })));
}

#[test]
fn test_parse_edge_list() {
    let text = "# from to weight\n0 1 1.5\n\n  1 2 2\n";
    let edges = parse_edge_list(text).unwrap();
    assert_eq!(edges, vec![(0, 1, 1.5), (1, 2, 2.0)]);

    assert!(matches!(parse_edge_list("0 1\n"), Err(Error::Parse { line: 1, .. })));
    assert!(matches!(parse_edge_list("0 1 1\n0 x 1\n"), Err(Error::Parse { line: 2, .. })));
    assert!(matches!(parse_edge_list("0 1 heavy"), Err(Error::Parse { line: 1, .. })));
}

fn triangle_with_island() -> DirectedGraph<OrderedFloat<f64>> {
    let edges: Vec<_> = parse_edge_list("0 1 1\n1 2 1\n0 2 5\n5 4 1\n")
        .unwrap()
        .into_iter()
        .map(|(from, to, weight)| (from, to, OrderedFloat(weight)))
        .collect();
    DirectedGraph::build(&edges, BuildOptions::default()).unwrap()
}

#[test]
fn test_write_text() {
    let graph = triangle_with_island();
    let queries = parse_request("3|0 2|0 5|1 1").unwrap();
    let results = run_batch(&graph, &queries);

    let mut out = Vec::new();
    write_text(&mut out, &results).unwrap();

    assert_eq!(
        String::from_utf8(out).unwrap(),
        "0 1 2 c=2\n0 2 c=5\n\n\n1 c=0\n\n"
    );
}

#[test]
fn test_write_text_keeps_precision() {
    let results = vec![Ok(vec![Path {
        vertices: vec![3, 4],
        cost: OrderedFloat(0.1 + 0.2),
    }])];

    let mut out = Vec::new();
    write_text(&mut out, &results).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "3 4 c=0.30000000000000004\n\n");
}

#[test]
fn test_write_text_failed_query_is_empty_block() {
    let results: Vec<yens_ksp::QueryResult<OrderedFloat<f64>>> = vec![
        Err(Error::AlgorithmError("boom".to_string())),
        Ok(vec![Path::trivial(2)]),
    ];

    let mut out = Vec::new();
    write_text(&mut out, &results).unwrap();
    assert_eq!(String::from_utf8(out).unwrap(), "\n2 c=0\n\n");
}

#[test]
fn test_write_json() {
    let graph = triangle_with_island();
    let queries = parse_request("2|0 2|0 5").unwrap();
    let results = run_batch(&graph, &queries);

    let mut out = Vec::new();
    write_json(&mut out, &queries, &results).unwrap();

    let value: serde_json::Value = serde_json::from_slice(&out).unwrap();
    let records = value.as_array().unwrap();
    assert_eq!(records.len(), 2);

    assert_eq!(records[0]["source"], 0);
    assert_eq!(records[0]["target"], 2);
    assert_eq!(records[0]["paths"][0]["vertices"], serde_json::json!([0, 1, 2]));
    assert_eq!(records[0]["paths"][1]["cost"], 5.0);
    assert_eq!(records[0]["paths"][1]["rank"], 1);
    assert!(records[0].get("error").is_none());

    assert_eq!(records[1]["paths"], serde_json::json!([]));
}

#[test]
fn test_write_lattice_text() {
    let scores = vec![
        vec![OrderedFloat(1.0), OrderedFloat(4.0)],
        vec![OrderedFloat(2.0), OrderedFloat(1.0)],
    ];
    let lattice = ScoreLattice::build(&scores).unwrap();
    let paths = YenKsp::new()
        .k_shortest_paths(lattice.graph(), lattice.source(), lattice.target(), 2)
        .unwrap();

    let mut out = Vec::new();
    write_lattice_text(&mut out, &lattice, &paths).unwrap();

    // [row 0, row 1] costs 1 + 1, then [row 1, row 1] costs 2 + 1
    assert_eq!(String::from_utf8(out).unwrap(), "0 1 c=2\n1 1 c=3\n");
}
