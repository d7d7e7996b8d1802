//! Insertion-ordered vertex store.
//!
//! Structure:
//! - **Dense vectors**: `keys` and `adjacency` hold each vertex and its
//!   neighbor sequence at the same slot, in insertion order.
//! - **Hash index**: maps a vertex to its dense slot for O(1) lookup.
//!
//! Removal shifts later slots down instead of swapping, so iteration order is
//! always the insertion order of the surviving vertices.

use core::hash::Hash;
use std::collections::HashMap;

#[derive(Debug, Clone)]
pub(crate) struct VertexStore<V> {
    keys: Vec<V>,
    adjacency: Vec<Vec<V>>,
    index: HashMap<V, usize>,
}

impl<V> Default for VertexStore<V> {
    fn default() -> Self {
        Self {
            keys: Vec::new(),
            adjacency: Vec::new(),
            index: HashMap::new(),
        }
    }
}

impl<V> VertexStore<V>
where
    V: Clone + Eq + Hash,
{
    pub(crate) fn with_capacity(capacity: usize) -> Self {
        Self {
            keys: Vec::with_capacity(capacity),
            adjacency: Vec::with_capacity(capacity),
            index: HashMap::with_capacity(capacity),
        }
    }

    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.keys.len()
    }

    #[inline]
    pub(crate) fn contains(&self, vertex: &V) -> bool {
        self.index.contains_key(vertex)
    }

    #[inline]
    pub(crate) fn keys(&self) -> &[V] {
        &self.keys
    }

    /// Dense slot of `vertex`, i.e. its position in iteration order.
    #[inline]
    pub(crate) fn slot(&self, vertex: &V) -> Option<usize> {
        self.index.get(vertex).copied()
    }

    pub(crate) fn neighbors(&self, vertex: &V) -> Option<&[V]> {
        let slot = *self.index.get(vertex)?;
        Some(&self.adjacency[slot])
    }

    pub(crate) fn neighbors_mut(&mut self, vertex: &V) -> Option<&mut Vec<V>> {
        let slot = *self.index.get(vertex)?;
        Some(&mut self.adjacency[slot])
    }

    /// Appends `vertex` with `neighbors`. Returns `false` (and leaves the store
    /// untouched) if the vertex is already present.
    pub(crate) fn insert(&mut self, vertex: V, neighbors: Vec<V>) -> bool {
        if self.index.contains_key(&vertex) {
            return false;
        }
        self.index.insert(vertex.clone(), self.keys.len());
        self.keys.push(vertex);
        self.adjacency.push(neighbors);
        true
    }

    /// Removes `vertex`, returning its neighbor sequence.
    ///
    /// Neighbors still list `vertex` afterwards; severing those entries is the
    /// caller's job.
    pub(crate) fn remove(&mut self, vertex: &V) -> Option<Vec<V>> {
        let slot = self.index.remove(vertex)?;
        self.keys.remove(slot);
        let neighbors = self.adjacency.remove(slot);
        for (shifted, key) in self.keys.iter().enumerate().skip(slot) {
            if let Some(entry) = self.index.get_mut(key) {
                *entry = shifted;
            }
        }
        Some(neighbors)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (&V, &[V])> + '_ {
        self.keys
            .iter()
            .zip(self.adjacency.iter().map(Vec::as_slice))
    }

    /// Sum of all adjacency sequence lengths.
    pub(crate) fn total_degree(&self) -> usize {
        self.adjacency.iter().map(Vec::len).sum()
    }

    pub(crate) fn clear(&mut self) {
        self.keys.clear();
        self.adjacency.clear();
        self.index.clear();
    }
}
