use std::time::{Duration, Instant};

use rand::rngs::StdRng;
use rand::SeedableRng;

use yens_ksp::batch::{BatchConfig, BatchRunner, Query};
use yens_ksp::graph::generators::generate_random_graph;
use yens_ksp::graph::Graph;
use yens_ksp::YenKsp;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    env_logger::init();

    let graph_sizes = [1_000, 5_000, 20_000];
    let k_values = [1, 5, 20];
    let edge_factor = 4.0;
    let queries_per_batch = 32;

    println!("=====================================================");
    println!("Benchmark: Yen K shortest paths");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let engine = YenKsp::new();
    let mut rng = StdRng::seed_from_u64(42);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        let graph = generate_random_graph(size, edge_factor, &mut rng);
        println!(
            "\nGraph with {} vertices and {} edges",
            graph.vertex_count(),
            graph.edge_count()
        );

        for &k in &k_values {
            let start = Instant::now();
            let paths = engine.k_shortest_paths(&graph, 0, size - 1, k)?;
            let single = start.elapsed();
            println!("  k = {:<3} found {:<3} paths in {:?}", k, paths.len(), single);

            let queries: Vec<Query> = (0..queries_per_batch)
                .map(|i| Query::new(i, size - 1 - i, k))
                .collect();

            let sequential = time_batch(&graph, &queries, BatchConfig::new())?;
            let parallel = time_batch(&graph, &queries, BatchConfig::new().with_parallel(true))?;

            results.push((size, k, single, sequential, parallel));
        }
    }

    println!("\n=====================================================");
    println!("Summary of Results ({} queries per batch)", queries_per_batch);
    println!("=====================================================");
    println!(
        "{:<10} | {:<5} | {:<12} | {:<12} | {:<12} | {:<8}",
        "Vertices", "k", "Single (ms)", "Batch (ms)", "Par (ms)", "Speedup"
    );
    println!("-----------------------------------------------------");

    for (size, k, single, sequential, parallel) in &results {
        println!(
            "{:<10} | {:<5} | {:<12} | {:<12} | {:<12} | {:<8.2}",
            size,
            k,
            single.as_millis(),
            sequential.as_millis(),
            parallel.as_millis(),
            sequential.as_secs_f64() / parallel.as_secs_f64().max(f64::EPSILON)
        );
    }

    Ok(())
}

fn time_batch<G>(graph: &G, queries: &[Query], config: BatchConfig) -> yens_ksp::Result<Duration>
where
    G: Graph<ordered_float::OrderedFloat<f64>> + Sync,
{
    let start = Instant::now();
    BatchRunner::new(config).run(graph, queries)?;
    Ok(start.elapsed())
}
