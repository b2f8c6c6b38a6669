use std::collections::HashMap;
use std::fmt::Debug;
use std::hash::Hash;
use log::{debug, trace};
use num_traits::Float;

use crate::algorithm::{ShortestPathAlgorithm, ShortestPathResult};
use crate::data_structures::IndexedMinHeap;
use crate::graph::traits::check_weight;
use crate::graph::Graph;
use crate::{Error, Result};

/// Dijkstra's algorithm over an [`IndexedMinHeap`] frontier.
///
/// Every vertex starts in the heap at infinite distance (the source at zero).
/// A vertex leaves the heap exactly when its distance becomes final, so heap
/// membership is the only "not yet finalized" signal: relaxation only touches
/// neighbors still in the heap, and lowers their key in place with
/// `decrease_key` rather than pushing duplicates.
#[derive(Debug, Clone)]
pub struct Dijkstra {
    /// Stop as soon as the target is extracted in single-target queries
    early_exit: bool,
    /// Scan every edge for invalid weights before running
    validate_weights: bool,
}

impl Default for Dijkstra {
    fn default() -> Self {
        Self::new()
    }
}

impl Dijkstra {
    /// Creates a new Dijkstra algorithm instance
    pub fn new() -> Self {
        Dijkstra {
            early_exit: true,
            validate_weights: false,
        }
    }

    /// Set whether single-target queries stop once the target is finalized
    pub fn with_early_exit(mut self, enabled: bool) -> Self {
        self.early_exit = enabled;
        self
    }

    /// Set whether every edge weight is validated before the run starts
    pub fn with_weight_validation(mut self, enabled: bool) -> Self {
        self.validate_weights = enabled;
        self
    }

    /// Runs the main loop from `source`, stopping early at `target` if given
    fn run<V, W, G>(
        &self,
        graph: &G,
        source: &V,
        target: Option<&V>,
    ) -> Result<ShortestPathResult<V, W>>
    where
        V: Eq + Hash + Clone + Debug,
        W: Float + Debug,
        G: Graph<V, W>,
    {
        if !graph.has_vertex(source) {
            return Err(Error::SourceNotFound(format!("{:?}", source)));
        }
        if self.validate_weights {
            validate_weights(graph)?;
        }

        let mut heap = IndexedMinHeap::from_entries(graph.vertices().map(|v| {
            let key = if v == source { W::zero() } else { W::infinity() };
            (v.clone(), key)
        }))?;

        let mut distances: HashMap<V, W> = HashMap::new();
        let mut predecessors: HashMap<V, V> = HashMap::new();

        while !heap.is_empty() {
            let (u, dist_u) = heap.extract_min()?;

            // Everything left in the heap is unreachable
            if dist_u.is_infinite() {
                break;
            }
            distances.insert(u.clone(), dist_u);

            if target == Some(&u) {
                break;
            }

            for (v, weight) in graph.edges_from(&u) {
                check_weight(weight)?;
                let Some(current) = heap.key_of(v) else {
                    continue;
                };

                let candidate = dist_u + weight;
                if candidate < current {
                    trace!("relax {:?} -> {:?}: {:?} -> {:?}", u, v, current, candidate);
                    heap.decrease_key(v, candidate)?;
                    predecessors.insert(v.clone(), u.clone());
                }
            }
        }

        // Predecessors of vertices left in the heap are tentative
        predecessors.retain(|v, _| distances.contains_key(v));

        debug!(
            "Dijkstra from {:?}: finalized {} of {} vertices",
            source,
            distances.len(),
            graph.vertex_count()
        );

        Ok(ShortestPathResult {
            distances,
            predecessors,
            source: source.clone(),
        })
    }
}

/// Fails on the first negative, infinite or NaN edge weight in `graph`
fn validate_weights<V, W, G>(graph: &G) -> Result<()>
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
    G: Graph<V, W>,
{
    for u in graph.vertices() {
        for (_, weight) in graph.edges_from(u) {
            check_weight(weight)?;
        }
    }
    Ok(())
}

impl<V, W, G> ShortestPathAlgorithm<V, W, G> for Dijkstra
where
    V: Eq + Hash + Clone + Debug,
    W: Float + Debug,
    G: Graph<V, W>,
{
    fn name(&self) -> &'static str {
        "Dijkstra"
    }

    fn compute_shortest_paths(&self, graph: &G, source: &V) -> Result<ShortestPathResult<V, W>> {
        self.run(graph, source, None)
    }

    fn compute_paths_until(
        &self,
        graph: &G,
        source: &V,
        target: &V,
    ) -> Result<ShortestPathResult<V, W>> {
        let stop_at = if self.early_exit { Some(target) } else { None };
        self.run(graph, source, stop_at)
    }
}
