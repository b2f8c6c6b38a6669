use std::fmt::Debug;
use std::hash::Hash;
use num_traits::Float;

use crate::{Error, Result};

/// Trait representing a weighted graph consumed read-only by shortest-path queries
pub trait Graph<V, W>: Debug
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Returns an iterator over every vertex in the graph
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Returns an iterator over the neighbors reachable from `vertex` by one edge
    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = &V> + '_>;

    /// Gets the weight of the edge `from -> to`, or None if `to` is not a neighbor of `from`
    fn weight(&self, from: &V, to: &V) -> Option<W>;

    /// Returns the outgoing edges of `vertex` as `(neighbor, weight)` pairs.
    ///
    /// The default looks each neighbor up through `weight`; adjacency-list graphs
    /// override it to yield their stored pairs directly. A listed neighbor with no
    /// weight comes back as NaN, which shortest-path queries reject.
    fn edges_from<'a>(&'a self, vertex: &'a V) -> Box<dyn Iterator<Item = (&'a V, W)> + 'a> {
        Box::new(self.neighbors(vertex).map(move |to| {
            let weight = self.weight(vertex, to).unwrap_or_else(W::nan);
            (to, weight)
        }))
    }

    /// Returns the number of vertices in the graph
    fn vertex_count(&self) -> usize;

    /// Returns the number of edges in the graph
    fn edge_count(&self) -> usize;

    /// Returns true if the vertex exists in the graph
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns true if there's an edge between the two vertices
    fn has_edge(&self, from: &V, to: &V) -> bool {
        self.weight(from, to).is_some()
    }
}

/// Trait for mutable graph operations
pub trait MutableGraph<V, W>: Graph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Adds a vertex; returns false if it was already present
    fn add_vertex(&mut self, vertex: V) -> bool;

    /// Adds an edge, creating missing endpoints. An existing edge has its weight replaced.
    ///
    /// Negative, NaN and infinite weights are rejected.
    fn add_edge(&mut self, from: V, to: V, weight: W) -> Result<()>;

    /// Removes an edge from the graph
    fn remove_edge(&mut self, from: &V, to: &V) -> bool;

    /// Updates the weight of an existing edge; returns false if there is no such edge
    fn update_edge_weight(&mut self, from: &V, to: &V, weight: W) -> Result<bool>;
}

/// Rejects weights Dijkstra cannot handle: NaN, infinities and negative values
pub(crate) fn check_weight<W: Float + Debug>(weight: W) -> Result<()> {
    let value = weight.to_f64().unwrap_or(f64::NAN);
    if !weight.is_finite() {
        Err(Error::InvalidWeight(value))
    } else if weight < W::zero() {
        Err(Error::NegativeWeight(value))
    } else {
        Ok(())
    }
}
