pub mod traits;
pub mod directed;
pub mod generators;
pub mod lattice;
pub mod view;

pub use traits::{Graph, MutableGraph};
pub use directed::DirectedGraph;
pub use lattice::ScoreLattice;
pub use view::{GraphView, HideGuard};
