//! # `trellis` - Undirected Graphs with Faces and Subgraph Algebra
//!
//! An in-memory, mutable, undirected graph keyed by arbitrary hashable vertex
//! values, with faces and subgraph set operations layered on top of the
//! vertex and edge primitives.
//!
//! ## Guarantees
//!
//! ### Invariants
//! - **Symmetry**: `b` is a neighbor of `a` iff `a` is a neighbor of `b`.
//! - **No self-loops**: connecting (or even querying) a vertex with itself is
//!   rejected with [`GraphError::SelfLoopNotAllowed`].
//! - **No duplicate edges**: an existing edge is never added twice.
//! - **Exclusive ownership**: accessors return copies or shared borrows, so the
//!   invariants cannot be broken from outside.
//!
//! ### Failure Model
//! - Every rejected operation returns a distinct [`GraphError`] variant.
//! - A rejected operation leaves the graph exactly as it was.
//! - There is no internal locking; mutation requires `&mut` access.
//!
//! ## Architecture
//!
//! 1. **Capabilities** ([`GraphView`], [`Graph`]):
//!    - `GraphView` is the read-only contract consumed by subgraph operations
//!    - `Graph` adds the mutators
//!    - both are object safe, so subgraphs travel as `&dyn GraphView<V>`
//!
//! 2. **Store** ([`UndirectedGraph`]):
//!    - insertion-ordered vertices with per-vertex adjacency sequences
//!    - vertex and edge primitives enforce every invariant
//!
//! 3. **Derived structure**:
//!    - *faces*: cycles of at least [`MIN_FACE_VERTICES`] distinct vertices,
//!      validated and built on demand, never stored
//!    - *subgraphs*: containment, union, difference and a containment-based
//!      equality check against any `GraphView`
//!
//! ## Example
//!
//! ```rust
//! use trellis::{GraphError, UndirectedGraph};
//!
//! let mut graph: UndirectedGraph<i32> = UndirectedGraph::new();
//! graph.add_face(&[1, 2, 3, 4, 5]).unwrap();
//! graph.add_face(&[1, 2, 6, 7, 8]).unwrap();
//! graph.add_edge(1, 6).unwrap();
//!
//! assert_eq!(graph.vertex_count(), 8);
//! assert_eq!(graph.edge_count(), 10);
//! assert!(graph.has_face(&[5, 4, 3, 2, 1]).unwrap());
//! assert_eq!(graph.add_edge(3, 3), Err(GraphError::SelfLoopNotAllowed(3)));
//!
//! let mut path: UndirectedGraph<i32> = UndirectedGraph::new();
//! path.add_edge(1, 2).unwrap();
//! path.add_edge(2, 3).unwrap();
//! assert!(graph.has_subgraph(Some(&path)).unwrap());
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

#[macro_use]
mod macros;

pub mod graph;

pub use graph::{
    Graph, GraphError, GraphResult, GraphStatistics, GraphView, UndirectedGraph, MIN_FACE_VERTICES,
};
