//! Neighbor-list text format.
//!
//! One vertex per line, followed by a period and a parenthesised list of its
//! neighbors:
//!
//! ```text
//! # comment
//! A. (B, C:2.5, D,)
//! E. ()
//! ```
//!
//! A trailing comma is allowed. `name:weight` sets the edge weight, otherwise
//! it is 1. Weights must be finite and non-negative.
//!
//! The whole input is parsed before anything is added to the graph, so a
//! malformed line leaves the graph untouched.

use std::fmt::Debug;
use std::fs;
use std::path::Path;

use log::debug;
use num_traits::{Float, NumCast};

use crate::graph::traits::check_weight;
use crate::graph::MutableGraph;
use crate::{Error, Result};

/// A parsed line: the vertex and its weighted neighbors
type Adjacency<W> = (String, Vec<(String, W)>);

/// Parses neighbor-list text into `graph`.
///
/// On error the graph is left as it was.
pub fn parse_neighbor_list<W, G>(input: &str, graph: &mut G) -> Result<()>
where
    W: Float + Debug,
    G: MutableGraph<String, W>,
{
    let mut staged = Vec::new();
    for (index, raw) in input.lines().enumerate() {
        let line = raw.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }
        staged.push(parse_line(line, index + 1)?);
    }

    let lines_read = staged.len();
    for (start, neighbors) in staged {
        graph.add_vertex(start.clone());
        for (name, weight) in neighbors {
            graph.add_edge(start.clone(), name, weight)?;
        }
    }

    debug!(
        "parsed {} neighbor-list lines: {} vertices, {} edges",
        lines_read,
        graph.vertex_count(),
        graph.edge_count()
    );
    Ok(())
}

/// Reads a neighbor-list file from disk into `graph`
pub fn load_neighbor_list<W, G, P>(path: P, graph: &mut G) -> Result<()>
where
    W: Float + Debug,
    G: MutableGraph<String, W>,
    P: AsRef<Path>,
{
    let contents = fs::read_to_string(path.as_ref())?;
    parse_neighbor_list(&contents, graph)
}

fn parse_line<W: Float + Debug>(line: &str, line_no: usize) -> Result<Adjacency<W>> {
    let parse_error = |message: String| Error::Parse {
        line: line_no,
        message,
    };

    let (start, rest) = line
        .split_once('.')
        .ok_or_else(|| parse_error("expected '.' after the vertex name".to_string()))?;
    let start = start.trim();
    if start.is_empty() {
        return Err(parse_error("missing vertex name".to_string()));
    }

    let list = rest
        .trim()
        .strip_prefix('(')
        .and_then(|s| s.strip_suffix(')'))
        .ok_or_else(|| parse_error("neighbor list must be enclosed in parentheses".to_string()))?;

    let mut neighbors = Vec::new();
    for item in list.split(',').map(str::trim).filter(|s| !s.is_empty()) {
        let (name, weight) = match item.split_once(':') {
            Some((name, weight)) => (name.trim(), parse_weight(weight.trim(), line_no)?),
            None => (item, W::one()),
        };
        if name.is_empty() {
            return Err(parse_error("empty neighbor name".to_string()));
        }
        check_weight(weight).map_err(|err| {
            parse_error(format!("bad weight for {} -> {}: {}", start, name, err))
        })?;
        neighbors.push((name.to_string(), weight));
    }
    Ok((start.to_string(), neighbors))
}

fn parse_weight<W: Float>(text: &str, line_no: usize) -> Result<W> {
    text.parse::<f64>()
        .ok()
        .and_then(|w| <W as NumCast>::from(w))
        .ok_or_else(|| Error::Parse {
            line: line_no,
            message: format!("invalid edge weight '{}'", text),
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graph::{DirectedGraph, Graph, UndirectedGraph};

    #[test]
    fn test_parse_unweighted_lists() {
        let input = "1. (2, 3, 4,)\n2. (5, 6,)\n";
        let mut graph: DirectedGraph<String, f64> = DirectedGraph::new();
        parse_neighbor_list(input, &mut graph).unwrap();

        assert_eq!(graph.vertex_count(), 6);
        assert_eq!(graph.edge_count(), 5);
        assert_eq!(graph.weight(&"1".to_string(), &"4".to_string()), Some(1.0));
    }

    #[test]
    fn test_parse_weights_comments_and_isolated_vertices() {
        let input = "# roads\n\nA. (B:2.5, C)\nD. ()\n";
        let mut graph: DirectedGraph<String, f64> = DirectedGraph::new();
        parse_neighbor_list(input, &mut graph).unwrap();

        assert_eq!(graph.weight(&"A".to_string(), &"B".to_string()), Some(2.5));
        assert_eq!(graph.weight(&"A".to_string(), &"C".to_string()), Some(1.0));
        assert!(graph.has_vertex(&"D".to_string()));
        assert_eq!(graph.neighbors(&"D".to_string()).count(), 0);
    }

    #[test]
    fn test_parse_into_undirected_graph() {
        let mut graph: UndirectedGraph<String, f32> = UndirectedGraph::new();
        parse_neighbor_list("x. (y:3,)", &mut graph).unwrap();
        assert_eq!(graph.weight(&"y".to_string(), &"x".to_string()), Some(3.0));
    }

    #[test]
    fn test_malformed_lines_report_line_number() {
        let mut graph: DirectedGraph<String, f64> = DirectedGraph::new();

        let err = parse_neighbor_list("A. (B)\nC (D)\n", &mut graph).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));

        let err = parse_neighbor_list("A. B, C", &mut graph).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));

        let err = parse_neighbor_list("A. (B:heavy)", &mut graph).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));

        let err = parse_neighbor_list("A. (B:-2)", &mut graph).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));
    }

    #[test]
    fn test_load_missing_file_is_io_error() {
        let mut graph: DirectedGraph<String, f64> = DirectedGraph::new();
        let err = load_neighbor_list("/nonexistent/graph.txt", &mut graph).unwrap_err();
        assert!(matches!(err, Error::Io(_)));
    }

    #[test]
    fn test_non_finite_weights_are_parse_errors() {
        let mut graph: DirectedGraph<String, f64> = DirectedGraph::new();

        let err = parse_neighbor_list("A. (B:inf)", &mut graph).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 1, .. }));

        let err = parse_neighbor_list("A. (B:1)\nB. (C:NaN)", &mut graph).unwrap_err();
        assert!(matches!(err, Error::Parse { line: 2, .. }));

        assert_eq!(graph.vertex_count(), 0);
    }

    #[test]
    fn test_failed_parse_leaves_graph_untouched() {
        let mut graph: DirectedGraph<String, f64> = DirectedGraph::new();
        parse_neighbor_list("X. (Y:4)", &mut graph).unwrap();

        let input = "A. (B, C)\nB. (C:2)\nC. (A:-1)\n";
        assert!(parse_neighbor_list(input, &mut graph).is_err());

        assert_eq!(graph.vertex_count(), 2);
        assert_eq!(graph.edge_count(), 1);
        assert!(!graph.has_vertex(&"A".to_string()));
    }
}
