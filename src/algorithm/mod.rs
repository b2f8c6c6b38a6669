pub mod traits;
pub mod dijkstra;

pub use traits::{PathOutcome, ShortestPath, ShortestPathAlgorithm, ShortestPathResult};
