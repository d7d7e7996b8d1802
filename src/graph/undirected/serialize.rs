//! Serde support.
//!
//! A graph serializes as an ordered map from vertex to neighbor list. Input is
//! rebuilt through [`UndirectedGraph::from_adjacency`], so asymmetric rows,
//! self-loops and repeated neighbors are rejected rather than repaired.

use core::fmt;
use core::hash::Hash;
use core::marker::PhantomData;

use serde::de::{self, MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use super::UndirectedGraph;

impl<V> Serialize for UndirectedGraph<V>
where
    V: Serialize + Clone + Eq + Hash,
{
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.vertex_count()))?;
        for (vertex, neighbors) in self.iter() {
            map.serialize_entry(vertex, neighbors)?;
        }
        map.end()
    }
}

struct AdjacencyVisitor<V>(PhantomData<V>);

impl<'de, V> Visitor<'de> for AdjacencyVisitor<V>
where
    V: Deserialize<'de>,
{
    type Value = Vec<(V, Vec<V>)>;

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("a map from each vertex to its neighbor list")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut rows = Vec::with_capacity(access.size_hint().unwrap_or(0));
        while let Some(row) = access.next_entry()? {
            rows.push(row);
        }
        Ok(rows)
    }
}

impl<'de, V> Deserialize<'de> for UndirectedGraph<V>
where
    V: Deserialize<'de> + Clone + Eq + Hash + fmt::Debug,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let rows = deserializer.deserialize_map(AdjacencyVisitor(PhantomData))?;
        UndirectedGraph::from_adjacency(rows).map_err(de::Error::custom)
    }
}
