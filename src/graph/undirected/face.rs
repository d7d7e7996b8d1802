//! Face operations.
//!
//! A face is never stored. It is the cycle through the distinct vertices of a
//! sequence (first occurrence order, wrapping from the last vertex back to the
//! first), and it exists iff every consecutive pair of that cycle is an edge.

use core::hash::Hash;
use std::collections::HashSet;

use super::UndirectedGraph;
use crate::graph::error::{GraphError, GraphResult};

/// Fewest distinct vertices that can bound a face.
pub const MIN_FACE_VERTICES: usize = 3;

/// Collapses repeated vertices, keeping first occurrences in order.
fn distinct_cycle<V>(vertices: &[V]) -> GraphResult<Vec<V>, V>
where
    V: Clone + Eq + Hash,
{
    let mut seen = HashSet::with_capacity(vertices.len());
    let cycle: Vec<V> = vertices
        .iter()
        .filter(|vertex| seen.insert(*vertex))
        .cloned()
        .collect();
    if cycle.len() < MIN_FACE_VERTICES {
        return Err(GraphError::InsufficientFaceVertices {
            distinct: cycle.len(),
        });
    }
    Ok(cycle)
}

/// Consecutive pairs of `cycle`, including the wrap-around pair.
fn cycle_pairs<V>(cycle: &[V]) -> impl Iterator<Item = (&V, &V)> + '_ {
    cycle.iter().zip(cycle.iter().cycle().skip(1))
}

impl<V> UndirectedGraph<V>
where
    V: Clone + Eq + Hash,
{
    /// Checks whether the face through `vertices` is complete.
    ///
    /// # Errors
    /// [`GraphError::InsufficientFaceVertices`] for fewer than three distinct
    /// vertices.
    pub fn has_face(&self, vertices: &[V]) -> GraphResult<bool, V> {
        let cycle = distinct_cycle(vertices)?;
        let complete = cycle_pairs(&cycle).all(|(a, b)| self.connected(a, b));
        Ok(complete)
    }

    /// Adds every missing edge of the face through `vertices`, creating
    /// vertices as needed.
    ///
    /// The call must connect at least one pair: a face that is already
    /// complete is rejected.
    ///
    /// # Errors
    /// [`GraphError::InsufficientFaceVertices`] or
    /// [`GraphError::FaceAlreadyComplete`].
    pub fn add_face(&mut self, vertices: &[V]) -> GraphResult<(), V> {
        let cycle = distinct_cycle(vertices).map_err(|err| err.rejected("add_face"))?;
        let missing: Vec<(V, V)> = cycle_pairs(&cycle)
            .filter(|(a, b)| !self.connected(a, b))
            .map(|(a, b)| (a.clone(), b.clone()))
            .collect();
        if missing.is_empty() {
            return Err(GraphError::FaceAlreadyComplete.rejected("add_face"));
        }

        graph_event!(trace, size = cycle.len(), added = missing.len(), "adding face");
        for (a, b) in missing {
            self.connect(a, b);
        }
        Ok(())
    }

    /// Removes the face through `vertices`.
    ///
    /// Without `remove_vertices` only the face's edges go; with it, every
    /// vertex of the face is removed along with all of its edges.
    ///
    /// # Errors
    /// [`GraphError::InsufficientFaceVertices`] or [`GraphError::NoSuchFace`].
    pub fn remove_face(&mut self, vertices: &[V], remove_vertices: bool) -> GraphResult<(), V> {
        let cycle = distinct_cycle(vertices).map_err(|err| err.rejected("remove_face"))?;
        if !cycle_pairs(&cycle).all(|(a, b)| self.connected(a, b)) {
            return Err(GraphError::NoSuchFace.rejected("remove_face"));
        }

        if remove_vertices {
            for vertex in &cycle {
                self.detach_vertex(vertex);
            }
        } else {
            for (a, b) in cycle_pairs(&cycle) {
                self.disconnect(a, b);
            }
        }
        graph_event!(trace, size = cycle.len(), remove_vertices, "face removed");
        Ok(())
    }
}
