use std::time::{Duration, Instant};
use ordered_float::OrderedFloat;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use indexed_sssp::algorithm::{dijkstra::Dijkstra, ShortestPathAlgorithm};
use indexed_sssp::graph::generators::generate_random;
use indexed_sssp::graph::{DirectedGraph, Graph};

type BenchGraph = DirectedGraph<usize, OrderedFloat<f64>>;

// Time a full single-source run
fn benchmark_full(dijkstra: &Dijkstra, graph: &BenchGraph, source: usize) -> Duration {
    let start = Instant::now();
    let result = match dijkstra.compute_shortest_paths(graph, &source) {
        Ok(result) => result,
        Err(err) => {
            eprintln!("  - run failed: {}", err);
            return start.elapsed();
        }
    };
    let duration = start.elapsed();

    println!("  - Full run reached {} vertices in {:?}", result.reachable_count(), duration);
    duration
}

// Time a batch of single-target queries
fn benchmark_targets(
    dijkstra: &Dijkstra,
    graph: &BenchGraph,
    source: usize,
    targets: &[usize],
) -> Duration {
    let start = Instant::now();
    let mut found = 0;
    for target in targets {
        if let Ok(outcome) = dijkstra.shortest_path(graph, &source, target) {
            if !outcome.is_unreachable() {
                found += 1;
            }
        }
    }
    let duration = start.elapsed();

    println!("  - {}/{} targets reachable, {:?} total", found, targets.len(), duration);
    duration
}

fn main() {
    env_logger::init();

    let graph_sizes = vec![1_000, 10_000, 50_000, 100_000];
    let edge_factor = 2.0;
    let queries = 20;

    println!("=====================================================");
    println!("Benchmark: indexed-heap Dijkstra");
    println!("Edge factor: {} edges per vertex (on average)", edge_factor);
    println!("=====================================================");

    let mut rng = StdRng::seed_from_u64(2024);
    let early_exit = Dijkstra::new();
    let no_early_exit = Dijkstra::new().with_early_exit(false);
    let mut results = Vec::new();

    for &size in &graph_sizes {
        println!("\nGenerating random graph with {} vertices...", size);
        let graph = match generate_random(size, edge_factor, &mut rng) {
            Ok(graph) => graph,
            Err(err) => {
                eprintln!("failed to generate graph: {}", err);
                continue;
            }
        };
        println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

        let targets: Vec<usize> = (0..queries).map(|_| rng.gen_range(0..size)).collect();

        let full_time = benchmark_full(&no_early_exit, &graph, 0);
        let early_time = benchmark_targets(&early_exit, &graph, 0, &targets);
        let late_time = benchmark_targets(&no_early_exit, &graph, 0, &targets);

        results.push((size, full_time, early_time, late_time));
    }

    println!("\n=====================================================");
    println!("Summary of Results");
    println!("=====================================================");
    println!(
        "{:<10} | {:<12} | {:<16} | {:<16}",
        "Vertices", "Full (ms)", "Early exit (ms)", "No exit (ms)"
    );
    println!("-----------------------------------------------------");

    for (size, full_time, early_time, late_time) in &results {
        println!(
            "{:<10} | {:<12} | {:<16} | {:<16}",
            size,
            full_time.as_millis(),
            early_time.as_millis(),
            late_time.as_millis()
        );
    }
}
