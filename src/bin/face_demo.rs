//! Builds two faces sharing an edge, adds a chord, and prints the result.

use anyhow::{Context, Result};
use trellis::UndirectedGraph;

fn main() -> Result<()> {
    let mut graph: UndirectedGraph<i32> = UndirectedGraph::new();

    graph
        .add_face(&[1, 2, 3, 4, 5])
        .context("adding face (1, 2, 3, 4, 5)")?;
    graph
        .add_face(&[1, 2, 6, 7, 8])
        .context("adding face (1, 2, 6, 7, 8)")?;
    graph.add_edge(1, 6).context("adding edge (1; 6)")?;

    graph.print();

    let stats = graph.statistics();
    println!(
        "{} vertices, {} edges, degree {}..={} (average {:.2})",
        stats.vertex_count, stats.edge_count, stats.min_degree, stats.max_degree, stats.average_degree
    );

    let triangle: UndirectedGraph<i32> = UndirectedGraph::from_edges([(1, 2), (2, 6), (6, 1)])?;
    println!(
        "contains triangle (1, 2, 6): {}",
        graph.has_subgraph(Some(&triangle))?
    );

    Ok(())
}
