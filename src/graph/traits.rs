//! Capability traits shared by graph implementations.
//!
//! [`GraphView`] is the read-only capability set. Subgraph operations consume
//! their argument through it, so any conforming type can act as a subgraph.
//! [`Graph`] extends it with the mutators.
//!
//! Both traits are object safe; subgraph arguments are passed as
//! `Option<&dyn GraphView<V>>`, with `None` standing for an absent subgraph.

use core::fmt;
use core::hash::Hash;
use std::collections::HashSet;

use super::error::{GraphError, GraphResult};
use super::undirected::render;

/// Read-only view of an undirected graph.
pub trait GraphView<V>
where
    V: Clone + Eq + Hash,
{
    /// Returns `true` if `vertex` is in the graph.
    fn has_vertex(&self, vertex: &V) -> bool;

    /// Returns a copy of the vertex set in iteration order.
    fn vertices(&self) -> Vec<V>;

    /// Returns the adjacency sequence of `vertex`.
    fn neighbors(&self, vertex: &V) -> GraphResult<&[V], V>;

    /// Returns the number of vertices.
    fn vertex_count(&self) -> usize;

    /// Returns the number of undirected edges.
    fn edge_count(&self) -> usize;

    /// Counting faces is not supported: faces are validated on demand, never
    /// stored.
    fn face_count(&self) -> GraphResult<usize, V> {
        Err(GraphError::FaceCountUnsupported)
    }

    /// Returns `true` if the graph has no vertices.
    fn is_empty(&self) -> bool {
        self.vertex_count() == 0
    }

    /// Checks whether `a` and `b` are connected.
    ///
    /// # Errors
    /// [`GraphError::SelfLoopNotAllowed`] if `a == b`.
    fn has_edge(&self, a: &V, b: &V) -> GraphResult<bool, V>;

    /// Checks whether every cyclically-consecutive pair of the distinct
    /// vertices in `vertices` is an edge.
    ///
    /// # Errors
    /// [`GraphError::InsufficientFaceVertices`] for fewer than three distinct vertices.
    fn has_face(&self, vertices: &[V]) -> GraphResult<bool, V>;

    /// Checks whether every edge of `subgraph` is an edge of this graph.
    ///
    /// # Errors
    /// [`GraphError::NullSubgraph`] or [`GraphError::EmptySubgraph`].
    fn has_subgraph(&self, subgraph: Option<&dyn GraphView<V>>) -> GraphResult<bool, V>;

    /// Containment-based equality: `true` when this graph holds every edge of
    /// `other`. Extra edges on this side are not detected.
    ///
    /// # Errors
    /// [`GraphError::NullSubgraph`] or [`GraphError::EmptySubgraph`].
    fn is_equal(&self, other: Option<&dyn GraphView<V>>) -> GraphResult<bool, V>;

    /// Lists every undirected edge once, in vertex iteration order.
    ///
    /// The default walks [`vertices`](Self::vertices) and
    /// [`neighbors`](Self::neighbors), skipping the reverse of a pair that has
    /// already been emitted.
    fn edges(&self) -> Vec<(V, V)> {
        let mut emitted: HashSet<(V, V)> = HashSet::new();
        let mut edges = Vec::new();
        for vertex in self.vertices() {
            let Ok(neighbors) = self.neighbors(&vertex) else {
                continue;
            };
            for neighbor in neighbors {
                let reverse = (neighbor.clone(), vertex.clone());
                if emitted.contains(&reverse) {
                    continue;
                }
                let pair = (vertex.clone(), neighbor.clone());
                if emitted.insert(pair.clone()) {
                    edges.push(pair);
                }
            }
        }
        edges
    }

    /// Renders the `"Graph:"` dump, one line per vertex.
    fn render(&self) -> String
    where
        V: fmt::Display,
    {
        let vertices = self.vertices();
        let rows = vertices
            .iter()
            .map(|vertex| (vertex, self.neighbors(vertex).unwrap_or(&[][..])));
        let mut out = String::new();
        // Writing into a `String` cannot fail.
        let _ = render::write_rows(&mut out, rows);
        out
    }

    /// Prints [`render`](Self::render) to stdout.
    fn print(&self)
    where
        V: fmt::Display,
    {
        println!("{}", self.render());
    }
}

/// Mutable undirected graph.
pub trait Graph<V>: GraphView<V>
where
    V: Clone + Eq + Hash,
{
    /// Adds an isolated vertex.
    ///
    /// # Errors
    /// [`GraphError::DuplicateVertex`] if it is already present.
    fn add_vertex(&mut self, vertex: V) -> GraphResult<(), V>;

    /// Removes a vertex together with all of its edges.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if it is absent.
    fn remove_vertex(&mut self, vertex: &V) -> GraphResult<(), V>;

    /// Connects `a` and `b`, creating either endpoint if needed.
    ///
    /// # Errors
    /// [`GraphError::SelfLoopNotAllowed`] or [`GraphError::DuplicateEdge`].
    fn add_edge(&mut self, a: V, b: V) -> GraphResult<(), V>;

    /// Disconnects `a` and `b`, or removes both endpoints when
    /// `remove_vertices` is set.
    ///
    /// # Errors
    /// [`GraphError::SelfLoopNotAllowed`] or [`GraphError::UnknownEdge`].
    fn remove_edge(&mut self, a: &V, b: &V, remove_vertices: bool) -> GraphResult<(), V>;

    /// Adds the missing edges of the face through `vertices`.
    ///
    /// # Errors
    /// [`GraphError::InsufficientFaceVertices`] or [`GraphError::FaceAlreadyComplete`].
    fn add_face(&mut self, vertices: &[V]) -> GraphResult<(), V>;

    /// Removes the edges (or vertices) of the face through `vertices`.
    ///
    /// # Errors
    /// [`GraphError::InsufficientFaceVertices`] or [`GraphError::NoSuchFace`].
    fn remove_face(&mut self, vertices: &[V], remove_vertices: bool) -> GraphResult<(), V>;

    /// Adds every edge of `subgraph` this graph lacks.
    ///
    /// # Errors
    /// [`GraphError::NullSubgraph`], [`GraphError::EmptySubgraph`] or
    /// [`GraphError::SubgraphAlreadyPresent`].
    fn add_subgraph(&mut self, subgraph: Option<&dyn GraphView<V>>) -> GraphResult<(), V>;

    /// Removes every edge of `subgraph` (or its endpoints).
    ///
    /// # Errors
    /// [`GraphError::NullSubgraph`], [`GraphError::EmptySubgraph`] or
    /// [`GraphError::SubgraphNotPresent`].
    fn remove_subgraph(
        &mut self,
        subgraph: Option<&dyn GraphView<V>>,
        remove_vertices: bool,
    ) -> GraphResult<(), V>;

    /// Removes every vertex and edge.
    fn clear(&mut self);
}
