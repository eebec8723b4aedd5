pub mod traits;
pub mod dijkstra;
pub mod yen;

pub use traits::{Path, ShortestPathAlgorithm};
