//! A dynamic, value-keyed undirected graph.
//!
//! Vertices are arbitrary `Clone + Eq + Hash` values; each one owns an
//! adjacency sequence in insertion order. The store keeps three invariants
//! at all times:
//! - **symmetry**: `b` is listed by `a` iff `a` is listed by `b`
//! - **no self-loops**: a vertex never lists itself
//! - **no duplicate edges**: a neighbor is listed at most once
//!
//! Faces and subgraphs are not stored; their operations (see the `face` and
//! `subgraph` submodules) are built purely from the vertex and edge primitives
//! defined here.
//!
//! ### Performance Characteristics
//! | Operation | Complexity | Notes |
//! |-----------|------------|-------|
//! | `has_vertex` | \(O(1)\) | hash lookup |
//! | `add_vertex` | \(O(1)\) amortized | appends to the dense vectors |
//! | `remove_vertex` | \(O(n + d^2)\) | shifts later slots, scrubs each neighbor |
//! | `has_edge` | \(O(d)\) | scans both adjacency sequences |
//! | `add_edge` | \(O(d)\) | existence check, then two appends |
//! | `remove_edge` | \(O(d)\) | linear scan of both sequences |
//! | `edge_count` | \(O(n)\) | sums sequence lengths |

use core::hash::Hash;

use super::error::{GraphError, GraphResult};
use super::traits::{Graph, GraphView};

mod face;
pub(crate) mod render;
mod serialize;
mod stats;
mod store;
mod subgraph;

#[cfg(test)]
mod tests;

pub use face::MIN_FACE_VERTICES;
pub use stats::GraphStatistics;
use store::VertexStore;

/// An undirected graph keyed by vertex value.
///
/// The graph exclusively owns its adjacency storage; every accessor hands out
/// copies or shared borrows. It performs no internal locking: mutation needs
/// `&mut self`, and sharing one graph between threads that mutate it requires
/// external synchronization (e.g. a `Mutex`).
#[derive(Debug, Clone)]
pub struct UndirectedGraph<V> {
    store: VertexStore<V>,
}

impl<V> Default for UndirectedGraph<V> {
    fn default() -> Self {
        Self {
            store: VertexStore::default(),
        }
    }
}

impl<V> UndirectedGraph<V>
where
    V: Clone + Eq + Hash,
{
    /// Creates an empty graph.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates an empty graph with room for `vertex_capacity` vertices.
    pub fn with_capacity(vertex_capacity: usize) -> Self {
        Self {
            store: VertexStore::with_capacity(vertex_capacity),
        }
    }

    /// Builds a graph by adding each edge in order.
    ///
    /// # Errors
    /// Fails like [`add_edge`](Self::add_edge) on the first self-loop or
    /// repeated edge.
    pub fn from_edges<I>(edges: I) -> GraphResult<Self, V>
    where
        I: IntoIterator<Item = (V, V)>,
    {
        let mut graph = Self::new();
        for (a, b) in edges {
            graph.add_edge(a, b)?;
        }
        Ok(graph)
    }

    /// Builds a graph from explicit adjacency rows, keeping both the vertex
    /// order and each neighbor order exactly as given.
    ///
    /// # Errors
    /// - [`GraphError::DuplicateVertex`] if a vertex has two rows
    /// - [`GraphError::UnknownVertex`] if a neighbor has no row
    /// - [`GraphError::SelfLoopNotAllowed`] if a row lists its own vertex
    /// - [`GraphError::DuplicateEdge`] if a row lists a neighbor twice
    /// - [`GraphError::UnknownEdge`] if a neighbor does not list the vertex back
    pub fn from_adjacency<I>(rows: I) -> GraphResult<Self, V>
    where
        I: IntoIterator<Item = (V, Vec<V>)>,
    {
        let rows = rows.into_iter();
        let mut store = VertexStore::with_capacity(rows.size_hint().0);
        for (vertex, neighbors) in rows {
            if store.contains(&vertex) {
                return Err(GraphError::DuplicateVertex(vertex));
            }
            store.insert(vertex, neighbors);
        }

        for (vertex, neighbors) in store.iter() {
            for (i, neighbor) in neighbors.iter().enumerate() {
                if neighbor == vertex {
                    return Err(GraphError::SelfLoopNotAllowed(vertex.clone()));
                }
                if neighbors[..i].contains(neighbor) {
                    return Err(GraphError::DuplicateEdge(vertex.clone(), neighbor.clone()));
                }
                let Some(back) = store.neighbors(neighbor) else {
                    return Err(GraphError::UnknownVertex(neighbor.clone()));
                };
                if !back.contains(vertex) {
                    return Err(GraphError::UnknownEdge(neighbor.clone(), vertex.clone()));
                }
            }
        }

        Ok(Self { store })
    }

    /// Returns the number of vertices.
    #[inline]
    pub fn vertex_count(&self) -> usize {
        self.store.len()
    }

    /// Returns the number of undirected edges.
    pub fn edge_count(&self) -> usize {
        self.store.total_degree() / 2
    }

    /// Returns `true` if the graph has no vertices.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.store.len() == 0
    }

    /// Returns a copy of the vertices in insertion order.
    pub fn vertices(&self) -> Vec<V> {
        self.store.keys().to_vec()
    }

    /// Iterates over `(vertex, neighbors)` in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&V, &[V])> + '_ {
        self.store.iter()
    }

    /// Returns `true` if `vertex` is in the graph.
    #[inline]
    pub fn has_vertex(&self, vertex: &V) -> bool {
        self.store.contains(vertex)
    }

    /// Returns the adjacency sequence of `vertex`.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if it is absent.
    pub fn neighbors(&self, vertex: &V) -> GraphResult<&[V], V> {
        self.store
            .neighbors(vertex)
            .ok_or_else(|| GraphError::UnknownVertex(vertex.clone()))
    }

    /// Returns the number of neighbors of `vertex`.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if it is absent.
    pub fn degree(&self, vertex: &V) -> GraphResult<usize, V> {
        self.neighbors(vertex).map(<[V]>::len)
    }

    /// Adds an isolated vertex.
    ///
    /// # Errors
    /// [`GraphError::DuplicateVertex`] if it is already present.
    pub fn add_vertex(&mut self, vertex: V) -> GraphResult<(), V> {
        if self.store.contains(&vertex) {
            return Err(GraphError::DuplicateVertex(vertex).rejected("add_vertex"));
        }
        self.store.insert(vertex, Vec::new());
        graph_event!(trace, vertices = self.vertex_count(), "vertex added");
        Ok(())
    }

    /// Removes a vertex and every edge touching it.
    ///
    /// # Errors
    /// [`GraphError::UnknownVertex`] if it is absent.
    pub fn remove_vertex(&mut self, vertex: &V) -> GraphResult<(), V> {
        if !self.detach_vertex(vertex) {
            return Err(GraphError::UnknownVertex(vertex.clone()).rejected("remove_vertex"));
        }
        graph_event!(trace, vertices = self.vertex_count(), "vertex removed");
        Ok(())
    }

    /// Checks whether `a` and `b` are connected, looking at both adjacency
    /// sequences.
    ///
    /// # Errors
    /// [`GraphError::SelfLoopNotAllowed`] if `a == b`; a self-loop query is a
    /// usage error rather than `false`.
    pub fn has_edge(&self, a: &V, b: &V) -> GraphResult<bool, V> {
        if a == b {
            return Err(GraphError::SelfLoopNotAllowed(a.clone()));
        }
        Ok(self.connected(a, b))
    }

    /// Connects `a` and `b`, creating either endpoint if it is missing.
    ///
    /// # Errors
    /// [`GraphError::SelfLoopNotAllowed`] if `a == b`,
    /// [`GraphError::DuplicateEdge`] if they are already connected.
    pub fn add_edge(&mut self, a: V, b: V) -> GraphResult<(), V> {
        if a == b {
            return Err(GraphError::SelfLoopNotAllowed(a).rejected("add_edge"));
        }
        if self.connected(&a, &b) {
            return Err(GraphError::DuplicateEdge(a, b).rejected("add_edge"));
        }
        self.connect(a, b);
        graph_event!(trace, edges = self.edge_count(), "edge added");
        Ok(())
    }

    /// Disconnects `a` and `b`. With `remove_vertices`, both endpoints are
    /// removed instead, taking all of their other edges with them.
    ///
    /// # Errors
    /// [`GraphError::SelfLoopNotAllowed`] if `a == b`,
    /// [`GraphError::UnknownEdge`] if they are not connected.
    pub fn remove_edge(&mut self, a: &V, b: &V, remove_vertices: bool) -> GraphResult<(), V> {
        if a == b {
            return Err(GraphError::SelfLoopNotAllowed(a.clone()).rejected("remove_edge"));
        }
        if !self.connected(a, b) {
            return Err(GraphError::UnknownEdge(a.clone(), b.clone()).rejected("remove_edge"));
        }
        if remove_vertices {
            self.detach_vertex(a);
            self.detach_vertex(b);
        } else {
            self.disconnect(a, b);
        }
        graph_event!(
            trace,
            remove_vertices,
            vertices = self.vertex_count(),
            edges = self.edge_count(),
            "edge removed"
        );
        Ok(())
    }

    /// Lists every edge once: ordered by the position of its first endpoint,
    /// then by that endpoint's adjacency order.
    pub fn edges(&self) -> Vec<(V, V)> {
        let mut edges = Vec::with_capacity(self.edge_count());
        for (position, (vertex, neighbors)) in self.store.iter().enumerate() {
            for neighbor in neighbors {
                // Each edge is emitted from whichever endpoint comes first.
                if self.store.slot(neighbor).is_some_and(|slot| slot > position) {
                    edges.push((vertex.clone(), neighbor.clone()));
                }
            }
        }
        edges
    }

    /// Removes every vertex and edge.
    pub fn clear(&mut self) {
        self.store.clear();
        graph_event!(trace, "graph cleared");
    }

    /// Mutual adjacency check without the self-loop guard.
    pub(crate) fn connected(&self, a: &V, b: &V) -> bool {
        self.store.neighbors(a).is_some_and(|n| n.contains(b))
            && self.store.neighbors(b).is_some_and(|n| n.contains(a))
    }

    /// Appends each endpoint to the other's sequence, creating missing
    /// endpoints. Callers guarantee `a != b` and that the edge is absent.
    pub(crate) fn connect(&mut self, a: V, b: V) {
        if !self.store.contains(&a) {
            self.store.insert(a.clone(), Vec::new());
        }
        if !self.store.contains(&b) {
            self.store.insert(b.clone(), Vec::new());
        }
        if let Some(neighbors) = self.store.neighbors_mut(&a) {
            neighbors.push(b.clone());
        }
        if let Some(neighbors) = self.store.neighbors_mut(&b) {
            neighbors.push(a);
        }
    }

    /// Drops the mutual adjacency entries of `a` and `b`.
    pub(crate) fn disconnect(&mut self, a: &V, b: &V) {
        if let Some(neighbors) = self.store.neighbors_mut(a) {
            neighbors.retain(|n| n != b);
        }
        if let Some(neighbors) = self.store.neighbors_mut(b) {
            neighbors.retain(|n| n != a);
        }
    }

    /// Removes `vertex` and scrubs it from its neighbors. Returns `false` if it
    /// was absent.
    pub(crate) fn detach_vertex(&mut self, vertex: &V) -> bool {
        let Some(neighbors) = self.store.remove(vertex) else {
            return false;
        };
        for neighbor in &neighbors {
            if let Some(back) = self.store.neighbors_mut(neighbor) {
                back.retain(|n| n != vertex);
            }
        }
        true
    }
}

impl<V> GraphView<V> for UndirectedGraph<V>
where
    V: Clone + Eq + Hash,
{
    fn has_vertex(&self, vertex: &V) -> bool {
        UndirectedGraph::has_vertex(self, vertex)
    }

    fn vertices(&self) -> Vec<V> {
        UndirectedGraph::vertices(self)
    }

    fn neighbors(&self, vertex: &V) -> GraphResult<&[V], V> {
        UndirectedGraph::neighbors(self, vertex)
    }

    fn vertex_count(&self) -> usize {
        UndirectedGraph::vertex_count(self)
    }

    fn edge_count(&self) -> usize {
        UndirectedGraph::edge_count(self)
    }

    fn is_empty(&self) -> bool {
        UndirectedGraph::is_empty(self)
    }

    fn has_edge(&self, a: &V, b: &V) -> GraphResult<bool, V> {
        UndirectedGraph::has_edge(self, a, b)
    }

    fn has_face(&self, vertices: &[V]) -> GraphResult<bool, V> {
        UndirectedGraph::has_face(self, vertices)
    }

    fn has_subgraph(&self, subgraph: Option<&dyn GraphView<V>>) -> GraphResult<bool, V> {
        UndirectedGraph::has_subgraph(self, subgraph)
    }

    fn is_equal(&self, other: Option<&dyn GraphView<V>>) -> GraphResult<bool, V> {
        UndirectedGraph::is_equal(self, other)
    }

    fn edges(&self) -> Vec<(V, V)> {
        UndirectedGraph::edges(self)
    }
}

impl<V> Graph<V> for UndirectedGraph<V>
where
    V: Clone + Eq + Hash,
{
    fn add_vertex(&mut self, vertex: V) -> GraphResult<(), V> {
        UndirectedGraph::add_vertex(self, vertex)
    }

    fn remove_vertex(&mut self, vertex: &V) -> GraphResult<(), V> {
        UndirectedGraph::remove_vertex(self, vertex)
    }

    fn add_edge(&mut self, a: V, b: V) -> GraphResult<(), V> {
        UndirectedGraph::add_edge(self, a, b)
    }

    fn remove_edge(&mut self, a: &V, b: &V, remove_vertices: bool) -> GraphResult<(), V> {
        UndirectedGraph::remove_edge(self, a, b, remove_vertices)
    }

    fn add_face(&mut self, vertices: &[V]) -> GraphResult<(), V> {
        UndirectedGraph::add_face(self, vertices)
    }

    fn remove_face(&mut self, vertices: &[V], remove_vertices: bool) -> GraphResult<(), V> {
        UndirectedGraph::remove_face(self, vertices, remove_vertices)
    }

    fn add_subgraph(&mut self, subgraph: Option<&dyn GraphView<V>>) -> GraphResult<(), V> {
        UndirectedGraph::add_subgraph(self, subgraph)
    }

    fn remove_subgraph(
        &mut self,
        subgraph: Option<&dyn GraphView<V>>,
        remove_vertices: bool,
    ) -> GraphResult<(), V> {
        UndirectedGraph::remove_subgraph(self, subgraph, remove_vertices)
    }

    fn clear(&mut self) {
        UndirectedGraph::clear(self);
    }
}
