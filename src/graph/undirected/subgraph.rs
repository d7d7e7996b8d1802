//! Subgraph containment, union, difference and equality.
//!
//! The subgraph argument is only read, through [`GraphView`], and only for the
//! duration of the call. Its edges are taken from [`GraphView::edges`], so
//! every undirected edge is visited once. Isolated vertices of a subgraph
//! carry no edges and therefore never affect these operations.

use core::hash::Hash;

use super::UndirectedGraph;
use crate::graph::error::{GraphError, GraphResult};
use crate::graph::traits::GraphView;

/// Rejects absent and empty subgraphs.
fn require_subgraph<V>(subgraph: Option<&dyn GraphView<V>>) -> GraphResult<&dyn GraphView<V>, V>
where
    V: Clone + Eq + Hash,
{
    let subgraph = subgraph.ok_or(GraphError::NullSubgraph)?;
    if subgraph.is_empty() {
        return Err(GraphError::EmptySubgraph);
    }
    Ok(subgraph)
}

impl<V> UndirectedGraph<V>
where
    V: Clone + Eq + Hash,
{
    /// Builds a graph holding every edge of `subgraph`.
    ///
    /// # Errors
    /// [`GraphError::NullSubgraph`], [`GraphError::EmptySubgraph`], or
    /// [`GraphError::SelfLoopNotAllowed`] if the view lists a vertex as its own
    /// neighbor.
    pub fn from_subgraph(subgraph: Option<&dyn GraphView<V>>) -> GraphResult<Self, V> {
        let subgraph = require_subgraph(subgraph)?;
        let mut graph = Self::with_capacity(subgraph.vertex_count());
        for (a, b) in subgraph.edges() {
            if !graph.has_edge(&a, &b)? {
                graph.connect(a, b);
            }
        }
        Ok(graph)
    }

    /// Checks whether every edge of `subgraph` is also an edge of this graph.
    ///
    /// # Errors
    /// [`GraphError::NullSubgraph`] or [`GraphError::EmptySubgraph`].
    pub fn has_subgraph(&self, subgraph: Option<&dyn GraphView<V>>) -> GraphResult<bool, V> {
        let subgraph = require_subgraph(subgraph)?;
        for (a, b) in subgraph.edges() {
            if !self.has_edge(&a, &b)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// Adds every edge of `subgraph` that this graph lacks, creating vertices
    /// as needed.
    ///
    /// # Errors
    /// [`GraphError::NullSubgraph`], [`GraphError::EmptySubgraph`], or
    /// [`GraphError::SubgraphAlreadyPresent`] when no edge would be added.
    pub fn add_subgraph(&mut self, subgraph: Option<&dyn GraphView<V>>) -> GraphResult<(), V> {
        let subgraph = require_subgraph(subgraph).map_err(|err| err.rejected("add_subgraph"))?;
        let mut missing = Vec::new();
        for (a, b) in subgraph.edges() {
            if !self.has_edge(&a, &b).map_err(|err| err.rejected("add_subgraph"))? {
                missing.push((a, b));
            }
        }
        if missing.is_empty() {
            return Err(GraphError::SubgraphAlreadyPresent.rejected("add_subgraph"));
        }

        graph_event!(trace, added = missing.len(), "adding subgraph");
        for (a, b) in missing {
            // A view may list an edge in both directions.
            if !self.connected(&a, &b) {
                self.connect(a, b);
            }
        }
        Ok(())
    }

    /// Removes every edge of `subgraph`, or with `remove_vertices` every
    /// endpoint of those edges.
    ///
    /// All edges are checked before anything is removed, so a failed call
    /// leaves the graph untouched.
    ///
    /// # Errors
    /// [`GraphError::NullSubgraph`], [`GraphError::EmptySubgraph`], or
    /// [`GraphError::SubgraphNotPresent`] naming the first missing edge.
    pub fn remove_subgraph(
        &mut self,
        subgraph: Option<&dyn GraphView<V>>,
        remove_vertices: bool,
    ) -> GraphResult<(), V> {
        let subgraph = require_subgraph(subgraph).map_err(|err| err.rejected("remove_subgraph"))?;
        let edges = subgraph.edges();
        for (a, b) in &edges {
            if !self.has_edge(a, b).map_err(|err| err.rejected("remove_subgraph"))? {
                return Err(GraphError::SubgraphNotPresent(a.clone(), b.clone())
                    .rejected("remove_subgraph"));
            }
        }

        graph_event!(trace, edges = edges.len(), remove_vertices, "removing subgraph");
        for (a, b) in &edges {
            if remove_vertices {
                self.detach_vertex(a);
                self.detach_vertex(b);
            } else {
                self.disconnect(a, b);
            }
        }
        Ok(())
    }

    /// Containment-based equality.
    ///
    /// Seeds a working copy from the edges of `other`, strips from it every
    /// edge this graph also has (dropping endpoints left without neighbors),
    /// and reports `true` iff nothing remains. Only `other ⊆ self` is checked:
    /// edges present here but absent from `other` do not make the result
    /// `false`.
    ///
    /// # Errors
    /// [`GraphError::NullSubgraph`] or [`GraphError::EmptySubgraph`].
    pub fn is_equal(&self, other: Option<&dyn GraphView<V>>) -> GraphResult<bool, V> {
        let mut working = Self::from_subgraph(other)?;
        for (a, b) in self.edges() {
            if !working.connected(&a, &b) {
                continue;
            }
            working.disconnect(&a, &b);
            for endpoint in [&a, &b] {
                if working.store.neighbors(endpoint).is_some_and(<[V]>::is_empty) {
                    working.detach_vertex(endpoint);
                }
            }
        }
        Ok(working.is_empty())
    }
}
