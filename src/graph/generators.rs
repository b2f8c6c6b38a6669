use crate::graph::{DirectedGraph, MutableGraph};
use crate::Result;
use ordered_float::OrderedFloat;
use rand::prelude::*;

/// Generates a random directed graph with `n` vertices (0..n) and roughly
/// `edge_factor * n` edges. Weights are drawn uniformly from `[1, 100)`; self-loops are skipped.
pub fn generate_random<R: Rng>(
    n: usize,
    edge_factor: f64,
    rng: &mut R,
) -> Result<DirectedGraph<usize, OrderedFloat<f64>>> {
    let mut graph = DirectedGraph::with_capacity(n);
    for v in 0..n {
        graph.add_vertex(v);
    }
    if n < 2 {
        return Ok(graph);
    }

    let num_edges = (edge_factor * n as f64) as usize;
    for _ in 0..num_edges {
        let u = rng.gen_range(0..n);
        let v = rng.gen_range(0..n);
        if u != v {
            graph.add_edge(u, v, OrderedFloat(rng.gen_range(1.0..100.0)))?;
        }
    }

    Ok(graph)
}

/// Generates a `width * height` grid where each cell connects to its 8 neighbors.
///
/// Vertex `y * width + x` is cell `(x, y)`. Cardinal moves cost 1.0, diagonal moves 1.4.
/// Cells listed in `blocked` get no edges in or out.
pub fn generate_grid(
    width: usize,
    height: usize,
    blocked: &[(usize, usize)],
) -> Result<DirectedGraph<usize, OrderedFloat<f64>>> {
    let mut graph = DirectedGraph::with_capacity(width * height);
    for v in 0..width * height {
        graph.add_vertex(v);
    }

    let is_blocked = |x: usize, y: usize| blocked.contains(&(x, y));
    let directions = [
        // Cardinal directions (N, E, S, W)
        (0, -1, 1.0), (1, 0, 1.0), (0, 1, 1.0), (-1, 0, 1.0),
        // Diagonal directions (NE, SE, SW, NW)
        (1, -1, 1.4), (1, 1, 1.4), (-1, 1, 1.4), (-1, -1, 1.4),
    ];

    for y in 0..height {
        for x in 0..width {
            if is_blocked(x, y) {
                continue;
            }
            for (dx, dy, cost) in directions {
                let nx = x as i64 + dx;
                let ny = y as i64 + dy;
                if nx < 0 || ny < 0 || nx >= width as i64 || ny >= height as i64 {
                    continue;
                }
                let (nx, ny) = (nx as usize, ny as usize);
                if !is_blocked(nx, ny) {
                    graph.add_edge(y * width + x, ny * width + nx, OrderedFloat(cost))?;
                }
            }
        }
    }

    Ok(graph)
}
