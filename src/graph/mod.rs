//! Value-keyed undirected graphs with derived faces and subgraph algebra.
//!
//! - `traits`: the read-only [`GraphView`] and mutable [`Graph`] capabilities
//! - `undirected`: [`UndirectedGraph`], the adjacency store implementing both
//! - `error`: [`GraphError`], one variant per rejected operation

pub mod error;
pub mod traits;
pub mod undirected;

// Re-export commonly used types from submodules
pub use error::{GraphError, GraphResult};
pub use traits::{Graph, GraphView};
pub use undirected::{GraphStatistics, UndirectedGraph, MIN_FACE_VERTICES};
