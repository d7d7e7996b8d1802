//! Degree statistics.

use core::hash::Hash;

use serde::{Deserialize, Serialize};

use super::UndirectedGraph;

/// Degree statistics of an undirected graph.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GraphStatistics {
    /// Number of vertices.
    pub vertex_count: usize,
    /// Number of undirected edges.
    pub edge_count: usize,
    /// Minimum degree over all vertices.
    pub min_degree: usize,
    /// Maximum degree over all vertices.
    pub max_degree: usize,
    /// Median degree over all vertices (lower-rounded mean of the middle pair
    /// for an even vertex count).
    pub median_degree: usize,
    /// Average degree \(= 2m/n\).
    pub average_degree: f64,
}

impl<V> UndirectedGraph<V>
where
    V: Clone + Eq + Hash,
{
    /// Computes basic degree statistics. All fields are zero for the empty
    /// graph.
    pub fn statistics(&self) -> GraphStatistics {
        let vertex_count = self.vertex_count();
        let edge_count = self.edge_count();

        let mut degrees: Vec<usize> = self.iter().map(|(_, neighbors)| neighbors.len()).collect();
        degrees.sort_unstable();

        let min_degree = degrees.first().copied().unwrap_or(0);
        let max_degree = degrees.last().copied().unwrap_or(0);
        let median_degree = if degrees.is_empty() {
            0
        } else if degrees.len() % 2 == 0 {
            let a = degrees[degrees.len() / 2 - 1];
            let b = degrees[degrees.len() / 2];
            (a + b) / 2
        } else {
            degrees[degrees.len() / 2]
        };

        GraphStatistics {
            vertex_count,
            edge_count,
            min_degree,
            max_degree,
            median_degree,
            average_degree: if vertex_count == 0 {
                0.0
            } else {
                (2 * edge_count) as f64 / vertex_count as f64
            },
        }
    }
}
