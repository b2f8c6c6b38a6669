use crate::graph::directed::DirectedGraph;
use crate::graph::traits::{Graph, MutableGraph};
use crate::Result;
use num_traits::Float;
use std::fmt::Debug;
use std::hash::Hash;

/// An undirected graph: every edge is stored in both directions
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    inner: DirectedGraph<V, W>,
    edge_count: usize,
}

impl<V, W> Default for UndirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> UndirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Creates a new empty undirected graph
    pub fn new() -> Self {
        UndirectedGraph {
            inner: DirectedGraph::new(),
            edge_count: 0,
        }
    }

    /// Builds a graph from `(u, v, weight)` triples
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = Self::new();
        for (u, v, weight) in edges {
            graph.add_edge(u, v, weight)?;
        }
        Ok(graph)
    }
}

impl<V, W> Graph<V, W> for UndirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        self.inner.vertices()
    }

    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = &V> + '_> {
        self.inner.neighbors(vertex)
    }

    fn edges_from<'a>(&'a self, vertex: &'a V) -> Box<dyn Iterator<Item = (&'a V, W)> + 'a> {
        self.inner.edges_from(vertex)
    }

    fn weight(&self, from: &V, to: &V) -> Option<W> {
        self.inner.weight(from, to)
    }

    fn vertex_count(&self) -> usize {
        self.inner.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.edge_count
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.inner.has_vertex(vertex)
    }
}

impl<V, W> MutableGraph<V, W> for UndirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        self.inner.add_vertex(vertex)
    }

    fn add_edge(&mut self, u: V, v: V, weight: W) -> Result<()> {
        let is_new = !self.inner.has_edge(&u, &v);
        self.inner.add_edge(u.clone(), v.clone(), weight)?;
        if u != v {
            self.inner.add_edge(v, u, weight)?;
        }
        if is_new {
            self.edge_count += 1;
        }
        Ok(())
    }

    fn remove_edge(&mut self, u: &V, v: &V) -> bool {
        let removed = self.inner.remove_edge(u, v);
        if u != v {
            self.inner.remove_edge(v, u);
        }
        if removed {
            self.edge_count -= 1;
        }
        removed
    }

    fn update_edge_weight(&mut self, u: &V, v: &V, weight: W) -> Result<bool> {
        let updated = self.inner.update_edge_weight(u, v, weight)?;
        if updated && u != v {
            self.inner.update_edge_weight(v, u, weight)?;
        }
        Ok(updated)
    }
}
