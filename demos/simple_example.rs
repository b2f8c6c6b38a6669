use indexed_sssp::graph::{Graph, MutableGraph};
use indexed_sssp::{Dijkstra, DirectedGraph, PathOutcome, ShortestPathAlgorithm};
use ordered_float::OrderedFloat;

fn main() -> indexed_sssp::Result<()> {
    // Create a simple directed graph
    let mut graph = DirectedGraph::new();

    // Add edges with weights; endpoints are created on demand
    graph.add_edge("A", "B", OrderedFloat(10.0))?;
    graph.add_edge("A", "C", OrderedFloat(5.0))?;
    graph.add_edge("B", "D", OrderedFloat(1.0))?;
    graph.add_edge("C", "B", OrderedFloat(3.0))?;
    graph.add_edge("C", "D", OrderedFloat(9.0))?;
    graph.add_edge("C", "E", OrderedFloat(2.0))?;
    graph.add_edge("D", "E", OrderedFloat(4.0))?;
    graph.add_edge("E", "A", OrderedFloat(7.0))?;
    graph.add_edge("E", "D", OrderedFloat(6.0))?;
    graph.add_vertex("F");

    println!("--- Testing on a simple graph ---");
    println!("Graph has {} vertices and {} edges", graph.vertex_count(), graph.edge_count());

    let dijkstra = Dijkstra::new();
    let result = dijkstra.compute_shortest_paths(&graph, &"A")?;

    println!("\nDistances from A:");
    for v in graph.vertices() {
        match result.distance_to(v) {
            None => println!("  No path to {}", v),
            Some(dist) => println!("  Distance to {}: {:.1}", v, dist.into_inner()),
        }
    }

    for target in ["D", "F"] {
        match dijkstra.shortest_path(&graph, &"A", &target)? {
            PathOutcome::Found(path) => println!(
                "\nA -> {}: {} (weight {:.1})",
                target,
                path.vertices.join(" -> "),
                path.total_weight.into_inner()
            ),
            PathOutcome::Unreachable => println!("\nA -> {}: unreachable", target),
        }
    }

    Ok(())
}
