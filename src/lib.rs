//! Yen's K Shortest Paths
//!
//! This library ranks the K cheapest loopless paths between a source and a target
//! in a weighted directed graph, following Yen's deviation method on top of a
//! point-to-point Dijkstra search.
//!
//! Deviation searches never mutate the base graph. They run against a
//! [`GraphView`] whose hidden nodes and edges are released by guards, so one
//! immutable [`DirectedGraph`] can serve many queries, in parallel if desired.

pub mod algorithm;
pub mod batch;
pub mod data_structures;
pub mod graph;
pub mod protocol;

pub use algorithm::{
    dijkstra::Dijkstra, yen::YenKsp, Path, ShortestPathAlgorithm,
};
pub use batch::{BatchConfig, Query, QueryResult};
/// Re-export main types for convenient use
pub use graph::directed::{BuildOptions, DirectedGraph, Validation};
pub use graph::view::GraphView;

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Malformed graph: {0}")]
    MalformedGraph(String),

    #[error("Invalid edge weight {weight} on edge from {from} to {to}")]
    InvalidWeight { from: usize, to: usize, weight: f64 },

    #[error("Invalid path, missing edge in {0:?}")]
    InvalidPath(Vec<usize>),

    #[error("Parse error on field {line}: {message}")]
    Parse { line: usize, message: String },

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Algorithm execution error: {0}")]
    AlgorithmError(String),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
