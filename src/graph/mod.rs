pub mod traits;
pub mod directed;
pub mod undirected;
pub mod parser;
pub mod generators;

pub use traits::{Graph, MutableGraph};
pub use directed::DirectedGraph;
pub use undirected::UndirectedGraph;
pub use parser::{load_neighbor_list, parse_neighbor_list};
