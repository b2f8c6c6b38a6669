use indexed_sssp::graph::{load_neighbor_list, MutableGraph};
use indexed_sssp::{Dijkstra, DirectedGraph, PathOutcome, ShortestPathAlgorithm, UndirectedGraph};
use std::env;
use std::process;

const USAGE: &str = "usage: shortest_path <graph-file> <source> <target> [--undirected] [--json]";

/// Command line options
#[derive(Debug)]
struct Options {
    graph_file: String,
    source: String,
    target: String,
    undirected: bool,
    json: bool,
}

fn parse_args(args: &[String]) -> Option<Options> {
    let mut positional = Vec::new();
    let mut undirected = false;
    let mut json = false;

    for arg in args {
        match arg.as_str() {
            "--undirected" => undirected = true,
            "--json" => json = true,
            flag if flag.starts_with("--") => return None,
            value => positional.push(value.to_string()),
        }
    }

    let [graph_file, source, target]: [String; 3] = positional.try_into().ok()?;
    Some(Options {
        graph_file,
        source,
        target,
        undirected,
        json,
    })
}

fn run<G>(mut graph: G, options: &Options) -> Result<(), Box<dyn std::error::Error>>
where
    G: MutableGraph<String, f64>,
{
    load_neighbor_list(&options.graph_file, &mut graph)?;
    log::info!(
        "Loaded {} with {} vertices and {} edges",
        options.graph_file,
        graph.vertex_count(),
        graph.edge_count()
    );

    let dijkstra = Dijkstra::new();
    let outcome: PathOutcome<String, f64> =
        dijkstra.shortest_path(&graph, &options.source, &options.target)?;

    if options.json {
        println!("{}", serde_json::to_string_pretty(&outcome)?);
        return Ok(());
    }

    match outcome {
        PathOutcome::Found(path) if path.vertices.is_empty() => {
            println!("{} is both source and target (distance 0)", options.source);
        }
        PathOutcome::Found(path) => {
            println!("{}", path.vertices.join(" -> "));
            println!("Total weight: {}", path.total_weight);
        }
        PathOutcome::Unreachable => {
            println!("No path from {} to {}", options.source, options.target);
        }
    }
    Ok(())
}

fn main() {
    // Initialize logging
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let Some(options) = parse_args(&args) else {
        eprintln!("{}", USAGE);
        process::exit(2);
    };

    let result = if options.undirected {
        run(UndirectedGraph::<String, f64>::new(), &options)
    } else {
        run(DirectedGraph::<String, f64>::new(), &options)
    };

    if let Err(err) = result {
        eprintln!("error: {}", err);
        process::exit(1);
    }
}
