use crate::graph::traits::{check_weight, Graph, MutableGraph};
use crate::Result;
use num_traits::Float;
use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;

/// A directed graph implementation using adjacency lists
///
/// Vertices are kept in insertion order, so iteration over `vertices()` and
/// `neighbors()` is deterministic.
#[derive(Debug, Clone)]
pub struct DirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Vertex labels indexed by internal id
    vertices: Vec<V>,

    /// Vertex label -> internal id
    ids: HashMap<V, usize>,

    /// Outgoing edges for each vertex id: [(target_id, weight)]
    outgoing_edges: Vec<Vec<(usize, W)>>,
}

impl<V, W> Default for DirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<V, W> DirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    /// Creates a new empty directed graph
    pub fn new() -> Self {
        DirectedGraph {
            vertices: Vec::new(),
            ids: HashMap::new(),
            outgoing_edges: Vec::new(),
        }
    }

    /// Creates a new directed graph with room for the specified number of vertices
    pub fn with_capacity(vertices: usize) -> Self {
        DirectedGraph {
            vertices: Vec::with_capacity(vertices),
            ids: HashMap::with_capacity(vertices),
            outgoing_edges: Vec::with_capacity(vertices),
        }
    }

    /// Builds a graph from `(from, to, weight)` triples
    pub fn from_edges<I>(edges: I) -> Result<Self>
    where
        I: IntoIterator<Item = (V, V, W)>,
    {
        let mut graph = Self::new();
        for (from, to, weight) in edges {
            graph.add_edge(from, to, weight)?;
        }
        Ok(graph)
    }

    /// Validate that every weight is finite and non-negative
    pub fn validate_non_negative(&self) -> bool {
        self.outgoing_edges
            .iter()
            .flatten()
            .all(|(_, weight)| check_weight(*weight).is_ok())
    }

    fn id_or_insert(&mut self, vertex: V) -> usize {
        if let Some(&id) = self.ids.get(&vertex) {
            return id;
        }
        let id = self.vertices.len();
        self.ids.insert(vertex.clone(), id);
        self.vertices.push(vertex);
        self.outgoing_edges.push(Vec::new());
        id
    }
}

impl<V, W> Graph<V, W> for DirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    fn vertices(&self) -> Box<dyn Iterator<Item = &V> + '_> {
        Box::new(self.vertices.iter())
    }

    fn neighbors(&self, vertex: &V) -> Box<dyn Iterator<Item = &V> + '_> {
        match self.ids.get(vertex) {
            Some(&id) => Box::new(
                self.outgoing_edges[id]
                    .iter()
                    .map(move |&(target, _)| &self.vertices[target]),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    fn edges_from<'a>(&'a self, vertex: &'a V) -> Box<dyn Iterator<Item = (&'a V, W)> + 'a> {
        match self.ids.get(vertex) {
            Some(&id) => Box::new(
                self.outgoing_edges[id]
                    .iter()
                    .map(move |&(target, weight)| (&self.vertices[target], weight)),
            ),
            None => Box::new(std::iter::empty()),
        }
    }

    fn weight(&self, from: &V, to: &V) -> Option<W> {
        let from = *self.ids.get(from)?;
        let to = *self.ids.get(to)?;
        self.outgoing_edges[from]
            .iter()
            .find(|(target, _)| *target == to)
            .map(|(_, weight)| *weight)
    }

    fn vertex_count(&self) -> usize {
        self.vertices.len()
    }

    fn edge_count(&self) -> usize {
        self.outgoing_edges.iter().map(|edges| edges.len()).sum()
    }

    fn has_vertex(&self, vertex: &V) -> bool {
        self.ids.contains_key(vertex)
    }
}

impl<V, W> MutableGraph<V, W> for DirectedGraph<V, W>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
{
    fn add_vertex(&mut self, vertex: V) -> bool {
        if self.ids.contains_key(&vertex) {
            return false;
        }
        self.id_or_insert(vertex);
        true
    }

    fn add_edge(&mut self, from: V, to: V, weight: W) -> Result<()> {
        check_weight(weight)?;

        let from = self.id_or_insert(from);
        let to = self.id_or_insert(to);

        // Check if edge already exists and update it if it does
        let outgoing = &mut self.outgoing_edges[from];
        match outgoing.iter_mut().find(|(target, _)| *target == to) {
            Some(edge) => edge.1 = weight,
            None => outgoing.push((to, weight)),
        }
        Ok(())
    }

    fn remove_edge(&mut self, from: &V, to: &V) -> bool {
        let (Some(&from), Some(&to)) = (self.ids.get(from), self.ids.get(to)) else {
            return false;
        };
        let outgoing = &mut self.outgoing_edges[from];
        let len_before = outgoing.len();
        outgoing.retain(|(target, _)| *target != to);
        len_before > outgoing.len()
    }

    fn update_edge_weight(&mut self, from: &V, to: &V, weight: W) -> Result<bool> {
        check_weight(weight)?;

        let (Some(&from), Some(&to)) = (self.ids.get(from), self.ids.get(to)) else {
            return Ok(false);
        };
        match self.outgoing_edges[from]
            .iter_mut()
            .find(|(target, _)| *target == to)
        {
            Some(edge) => {
                edge.1 = weight;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}
