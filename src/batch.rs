//! Runs independent path queries against one shared graph.
//!
//! Every query gets its own [`GraphView`](crate::GraphView) inside the ranking
//! engine, so queries never observe each other's hidden elements and can run on
//! a rayon pool when [`BatchConfig::parallel`] is set.

use std::fmt::Debug;

use log::{info, warn};
use num_traits::{Float, Zero};
use rayon::prelude::*;
use serde::{Deserialize, Serialize};

use crate::algorithm::dijkstra::Dijkstra;
use crate::algorithm::yen::YenKsp;
use crate::algorithm::{Path, ShortestPathAlgorithm};
use crate::graph::Graph;
use crate::{Error, Result};

/// One ranking request: up to `k` paths from `source` to `target`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Query {
    pub source: usize,
    pub target: usize,
    pub k: usize,
}

impl Query {
    pub fn new(source: usize, target: usize, k: usize) -> Self {
        Query { source, target, k }
    }
}

/// Outcome of one query. An empty `Ok` list means no path exists.
pub type QueryResult<W> = Result<Vec<Path<W>>>;

/// Configuration for running a batch
#[derive(Debug, Clone, Default)]
pub struct BatchConfig {
    /// Run queries on a rayon pool instead of one after another
    pub parallel: bool,
    /// Size of a dedicated pool; `None` uses rayon's global pool
    pub threads: Option<usize>,
}

impl BatchConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    /// Use a dedicated pool of `threads` workers. Implies parallel execution.
    pub fn with_threads(mut self, threads: usize) -> Self {
        self.parallel = true;
        self.threads = Some(threads);
        self
    }
}

/// Runs `queries` one after another with the default engine, preserving order.
///
/// A failing query occupies its own slot as an `Err`; the other queries are
/// unaffected.
pub fn run_batch<W, G>(graph: &G, queries: &[Query]) -> Vec<QueryResult<W>>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
{
    let engine = YenKsp::new();
    queries
        .iter()
        .enumerate()
        .map(|(index, query)| run_query(&engine, graph, index, query))
        .collect()
}

/// Batch driver with a configurable engine and execution mode
#[derive(Debug, Clone, Default)]
pub struct BatchRunner<A = Dijkstra> {
    engine: YenKsp<A>,
    config: BatchConfig,
}

impl BatchRunner<Dijkstra> {
    pub fn new(config: BatchConfig) -> Self {
        BatchRunner {
            engine: YenKsp::new(),
            config,
        }
    }
}

impl<A> BatchRunner<A> {
    pub fn with_engine(engine: YenKsp<A>, config: BatchConfig) -> Self {
        BatchRunner { engine, config }
    }

    pub fn config(&self) -> &BatchConfig {
        &self.config
    }

    /// Runs every query and returns the results in input order.
    ///
    /// The outer error is reserved for failing to set up the worker pool;
    /// per-query failures are inside the returned vector.
    pub fn run<W, G>(&self, graph: &G, queries: &[Query]) -> Result<Vec<QueryResult<W>>>
    where
        W: Float + Zero + Debug + Copy + Ord + Send + Sync,
        G: Graph<W> + Sync,
        A: ShortestPathAlgorithm<W> + Sync,
    {
        let results: Vec<QueryResult<W>> = if !self.config.parallel {
            queries
                .iter()
                .enumerate()
                .map(|(index, query)| run_query(&self.engine, graph, index, query))
                .collect()
        } else if let Some(threads) = self.config.threads {
            let pool = rayon::ThreadPoolBuilder::new()
                .num_threads(threads)
                .build()
                .map_err(|e| Error::AlgorithmError(format!("failed to build thread pool: {}", e)))?;
            pool.install(|| self.run_parallel(graph, queries))
        } else {
            self.run_parallel(graph, queries)
        };

        let failed = results.iter().filter(|r| r.is_err()).count();
        info!(
            "batch finished: {} queries, {} failed",
            queries.len(),
            failed
        );

        Ok(results)
    }

    fn run_parallel<W, G>(&self, graph: &G, queries: &[Query]) -> Vec<QueryResult<W>>
    where
        W: Float + Zero + Debug + Copy + Ord + Send + Sync,
        G: Graph<W> + Sync,
        A: ShortestPathAlgorithm<W> + Sync,
    {
        queries
            .par_iter()
            .enumerate()
            .map(|(index, query)| run_query(&self.engine, graph, index, query))
            .collect()
    }
}

fn run_query<W, G, A>(engine: &YenKsp<A>, graph: &G, index: usize, query: &Query) -> QueryResult<W>
where
    W: Float + Zero + Debug + Copy + Ord,
    G: Graph<W>,
    A: ShortestPathAlgorithm<W>,
{
    let result = engine.k_shortest_paths(graph, query.source, query.target, query.k);
    if let Err(e) = &result {
        warn!(
            "query {} ({} -> {}) failed: {}",
            index, query.source, query.target, e
        );
    }
    result
}
