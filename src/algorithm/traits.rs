use std::collections::{HashMap, HashSet};
use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;
use serde::Serialize;
use crate::graph::Graph;
use crate::{Error, Result};

/// Result of a single-source shortest path run
#[derive(Debug, Clone)]
pub struct ShortestPathResult<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Final distances from source, for every finalized vertex at finite distance
    pub distances: HashMap<V, W>,

    /// Predecessor of each reached vertex in the shortest path tree; the source has none
    pub predecessors: HashMap<V, V>,

    /// Source vertex
    pub source: V,
}

impl<V, W> ShortestPathResult<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Distance from the source to `target`, or None if unreachable
    pub fn distance_to(&self, target: &V) -> Option<W> {
        self.distances.get(target).copied()
    }

    /// Walks predecessors back from `target` and returns the path source -> target.
    ///
    /// Returns None if `target` was not reached. The path to the source itself is `[source]`.
    pub fn path_to(&self, target: &V) -> Option<Vec<V>> {
        if !self.distances.contains_key(target) {
            return None;
        }

        let mut path = vec![target.clone()];
        let mut visited = HashSet::new();
        let mut current = target;

        while *current != self.source {
            if !visited.insert(current) {
                log::warn!("Cycle detected in path reconstruction at vertex {:?}", current);
                return None;
            }
            current = self.predecessors.get(current)?;
            path.push(current.clone());
        }

        path.reverse();
        Some(path)
    }

    /// Number of vertices reached from the source, including the source
    pub fn reachable_count(&self) -> usize {
        self.distances.len()
    }
}

/// A concrete shortest path between two vertices
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ShortestPath<V, W> {
    /// Vertices from source to target, inclusive. Empty when source equals target.
    pub vertices: Vec<V>,

    /// Sum of edge weights along the path
    pub total_weight: W,
}

/// Outcome of a single-target query
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum PathOutcome<V, W> {
    /// A shortest path exists
    Found(ShortestPath<V, W>),
    /// No path leads from the source to the target
    Unreachable,
}

impl<V, W> PathOutcome<V, W> {
    /// Returns the path if one was found
    pub fn path(&self) -> Option<&ShortestPath<V, W>> {
        match self {
            PathOutcome::Found(path) => Some(path),
            PathOutcome::Unreachable => None,
        }
    }

    pub fn is_unreachable(&self) -> bool {
        matches!(self, PathOutcome::Unreachable)
    }
}

/// Trait for shortest path algorithms
pub trait ShortestPathAlgorithm<V, W, G>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
    G: Graph<V, W>,
{
    /// Compute shortest paths from a source vertex to all other vertices
    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>>;

    /// Get the name of the algorithm
    fn name(&self) -> &'static str;

    /// Compute shortest paths from `source` for a query that only needs `target`.
    ///
    /// Implementations may stop once `target` is final; the default runs to completion.
    fn compute_paths_until(
        &self,
        graph: &G,
        source: &V,
        _target: &V,
    ) -> Result<ShortestPathResult<V, W>> {
        self.compute_shortest_paths(graph, source)
    }

    /// Compute the shortest path from `source` to `target`
    fn shortest_path(&self, graph: &G, source: &V, target: &V) -> Result<PathOutcome<V, W>> {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(format!("{:?}", source)));
        }
        if !graph.has_vertex(target) {
            return Err(Error::TargetNotFound(format!("{:?}", target)));
        }
        if source == target {
            return Ok(PathOutcome::Found(ShortestPath {
                vertices: Vec::new(),
                total_weight: W::zero(),
            }));
        }

        let result = self.compute_paths_until(graph, source, target)?;
        let outcome = outcome_for(&result, target);
        if outcome.is_unreachable() {
            log::debug!("{:?} is unreachable from {:?}", target, source);
        }
        Ok(outcome)
    }

    /// Get the shortest path from source to target as a sequence of vertices
    fn get_path(&self, result: &ShortestPathResult<V, W>, target: &V) -> Option<Vec<V>> {
        result.path_to(target)
    }
}

/// Converts a finished run into the outcome for `target`
fn outcome_for<V, W>(result: &ShortestPathResult<V, W>, target: &V) -> PathOutcome<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    match (result.path_to(target), result.distance_to(target)) {
        (Some(vertices), Some(total_weight)) => PathOutcome::Found(ShortestPath {
            vertices,
            total_weight,
        }),
        _ => PathOutcome::Unreachable,
    }
}
