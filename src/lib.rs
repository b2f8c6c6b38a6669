//! Indexed SSSP - Dijkstra single-source shortest paths over an indexed binary min-heap
//!
//! The heap keeps a value -> position index next to its array so that any vertex's
//! tentative distance can be looked up in O(1) and lowered in O(log n). Dijkstra's
//! algorithm uses it as its frontier: heap membership is exactly the set of vertices
//! whose distance is not yet final.
//!
//! Edge weights must be finite and non-negative; anything else is reported as an error.

pub mod algorithm;
pub mod data_structures;
pub mod graph;

pub use algorithm::{
    dijkstra::Dijkstra, PathOutcome, ShortestPath, ShortestPathAlgorithm, ShortestPathResult,
};
/// Re-export main types for convenient use
pub use data_structures::{HeapError, IndexedMinHeap};
pub use graph::{DirectedGraph, UndirectedGraph};

/// Error types for the library
#[derive(thiserror::Error, Debug)]
pub enum Error {
    #[error("Source vertex not found in graph: {0}")]
    SourceNotFound(String),

    #[error("Target vertex not found in graph: {0}")]
    TargetNotFound(String),

    #[error("Negative edge weight: {0}")]
    NegativeWeight(f64),

    #[error("Edge weight is not a finite number: {0}")]
    InvalidWeight(f64),

    #[error("Heap error: {0}")]
    Heap(#[from] HeapError),

    #[error("Parse error on line {line}: {message}")]
    Parse { line: usize, message: String },

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

/// Result type for the library
pub type Result<T> = std::result::Result<T, Error>;
