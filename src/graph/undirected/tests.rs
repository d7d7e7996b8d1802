//! Tests for the undirected graph.

use super::*;

/// Faces (1,2,3,4,5) and (1,2,6,7,8) plus the chord 1-6.
fn two_faces_and_chord() -> UndirectedGraph<i32> {
    let mut graph = UndirectedGraph::new();
    graph.add_face(&[1, 2, 3, 4, 5]).expect("first face");
    graph.add_face(&[1, 2, 6, 7, 8]).expect("second face");
    graph.add_edge(1, 6).expect("chord");
    graph
}

fn assert_symmetric(graph: &UndirectedGraph<i32>) {
    for (vertex, neighbors) in graph.iter() {
        assert!(!neighbors.contains(vertex), "{vertex} lists itself");
        for neighbor in neighbors {
            let back = graph.neighbors(neighbor).expect("neighbor is a vertex");
            assert!(back.contains(vertex), "{neighbor} does not list {vertex}");
        }
    }
}

#[test]
fn test_vertex_add_remove() {
    let mut graph = UndirectedGraph::new();
    assert!(graph.is_empty());

    graph.add_vertex("a").expect("fresh");
    graph.add_vertex("b").expect("fresh");
    assert_eq!(graph.add_vertex("a"), Err(GraphError::DuplicateVertex("a")));
    assert!(graph.has_vertex(&"a"));
    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.vertices(), vec!["a", "b"]);

    graph.remove_vertex(&"a").expect("present");
    assert!(!graph.has_vertex(&"a"));
    assert_eq!(graph.remove_vertex(&"a"), Err(GraphError::UnknownVertex("a")));
    assert_eq!(graph.neighbors(&"a"), Err(GraphError::UnknownVertex("a")));
    assert_eq!(graph.degree(&"z"), Err(GraphError::UnknownVertex("z")));
}

#[test]
fn test_remove_vertex_severs_edges() {
    let mut graph: UndirectedGraph<i32> = UndirectedGraph::from_edges([(1, 2), (1, 3), (2, 3), (3, 4)]).expect("valid");
    graph.remove_vertex(&3).expect("present");

    assert_eq!(graph.vertices(), vec![1, 2, 4]);
    assert_eq!(graph.neighbors(&1), Ok(&[2][..]));
    assert_eq!(graph.neighbors(&2), Ok(&[1][..]));
    assert_eq!(graph.neighbors(&4), Ok(&[][..]));
    assert_eq!(graph.edge_count(), 1);
    assert_symmetric(&graph);
}

#[test]
fn test_edge_add_creates_vertices_symmetrically() {
    let mut graph = UndirectedGraph::new();
    graph.add_vertex(1).expect("fresh");
    graph.add_edge(1, 2).expect("fresh edge");

    assert_eq!(graph.vertex_count(), 2);
    assert_eq!(graph.has_edge(&1, &2), Ok(true));
    assert_eq!(graph.has_edge(&2, &1), Ok(true));
    assert_eq!(graph.add_edge(2, 1), Err(GraphError::DuplicateEdge(2, 1)));
    assert_eq!(graph.degree(&1), Ok(1));
    assert_symmetric(&graph);
}

#[test]
fn test_self_loops_rejected_everywhere() {
    let mut graph = UndirectedGraph::new();
    graph.add_vertex(4).expect("fresh");

    assert_eq!(graph.add_edge(4, 4), Err(GraphError::SelfLoopNotAllowed(4)));
    assert_eq!(graph.has_edge(&4, &4), Err(GraphError::SelfLoopNotAllowed(4)));
    // Absent vertices are still a usage error, not `false`.
    assert_eq!(graph.has_edge(&9, &9), Err(GraphError::SelfLoopNotAllowed(9)));
    assert_eq!(
        graph.remove_edge(&4, &4, false),
        Err(GraphError::SelfLoopNotAllowed(4))
    );
    assert_eq!(graph.vertex_count(), 1);
}

#[test]
fn test_remove_edge_keeps_or_drops_vertices() {
    let mut graph: UndirectedGraph<i32> = UndirectedGraph::from_edges([(1, 2), (2, 3), (3, 1), (3, 4)]).expect("valid");

    assert_eq!(graph.remove_edge(&1, &4, false), Err(GraphError::UnknownEdge(1, 4)));

    graph.remove_edge(&1, &2, false).expect("present");
    assert_eq!(graph.has_edge(&1, &2), Ok(false));
    assert!(graph.has_vertex(&1) && graph.has_vertex(&2));

    graph.remove_edge(&3, &2, true).expect("present");
    assert_eq!(graph.vertices(), vec![1, 4]);
    assert_eq!(graph.edge_count(), 0);
    assert_symmetric(&graph);
}

#[test]
fn test_add_remove_round_trip_restores_adjacency() {
    let mut graph: UndirectedGraph<i32> = UndirectedGraph::from_edges([(1, 2), (2, 3)]).expect("valid");
    let before = graph.to_string();

    graph.add_edge(1, 3).expect("fresh");
    graph.remove_edge(&1, &3, false).expect("present");
    assert_eq!(graph.to_string(), before);
}

#[test]
fn test_edges_lists_each_edge_once() {
    let graph: UndirectedGraph<i32> = UndirectedGraph::from_edges([(1, 2), (3, 1), (2, 3), (4, 2)]).expect("valid");
    assert_eq!(graph.edges(), vec![(1, 2), (1, 3), (2, 3), (2, 4)]);
    assert_eq!(graph.edges().len(), graph.edge_count());
}

#[test]
fn test_from_adjacency_validates_rows() {
    let graph = UndirectedGraph::from_adjacency([(1, vec![2, 3]), (2, vec![1]), (3, vec![1])])
        .expect("symmetric rows");
    assert_eq!(graph.edge_count(), 2);

    assert_eq!(
        UndirectedGraph::from_adjacency([(1, vec![]), (1, vec![])]).map(|g| g.vertex_count()),
        Err(GraphError::DuplicateVertex(1))
    );
    assert_eq!(
        UndirectedGraph::from_adjacency([(1, vec![2, 2]), (2, vec![1])]).map(|g| g.vertex_count()),
        Err(GraphError::DuplicateEdge(1, 2))
    );
}

#[test]
fn test_scenario_a_single_face() {
    let mut graph = UndirectedGraph::new();
    graph.add_face(&[1, 2, 3, 4, 5]).expect("fresh face");

    for (a, b) in [(1, 2), (2, 3), (3, 4), (4, 5), (5, 1)] {
        assert_eq!(graph.has_edge(&a, &b), Ok(true), "missing {a}-{b}");
    }
    assert_eq!(graph.edge_count(), 5);
    assert_eq!(graph.vertex_count(), 5);
}

#[test]
fn test_scenario_b_overlapping_face_makes_progress() {
    let mut graph = UndirectedGraph::new();
    graph.add_face(&[1, 2, 3, 4, 5]).expect("fresh face");
    graph.add_face(&[1, 2, 6, 7, 8]).expect("1-2 exists but others do not");

    for (a, b) in [(2, 6), (6, 7), (7, 8), (8, 1)] {
        assert_eq!(graph.has_edge(&a, &b), Ok(true), "missing {a}-{b}");
    }
    assert_eq!(graph.vertex_count(), 8);
    assert_eq!(graph.edge_count(), 9);
}

#[test]
fn test_scenario_c_chord() {
    let graph = two_faces_and_chord();
    assert_eq!(graph.edge_count(), 10);
    assert_symmetric(&graph);
}

#[test]
fn test_scenario_d_remove_face_with_vertices() {
    let mut graph = UndirectedGraph::new();
    graph.add_face(&[1, 2, 3, 4, 5]).expect("fresh face");
    graph.add_face(&[1, 5, 6, 7, 8]).expect("fresh face");
    graph.add_edge(1, 6).expect("chord");

    graph.remove_face(&[1, 5, 6], true).expect("1-5, 5-6 and 6-1 exist");
    for vertex in [1, 5, 6] {
        assert!(!graph.has_vertex(&vertex));
    }
    assert_eq!(graph.vertices(), vec![2, 3, 4, 7, 8]);
    // Only 2-3, 3-4 and 7-8 survive.
    assert_eq!(graph.edge_count(), 3);
    assert_symmetric(&graph);
}

#[test]
fn test_scenario_e_face_queries() {
    let mut graph = UndirectedGraph::new();
    graph.add_vertex(1).expect("fresh");
    graph.add_vertex(2).expect("fresh");

    assert_eq!(graph.has_face(&[1, 2, 3]), Ok(false));
    assert_eq!(
        graph.has_face(&[1, 2]),
        Err(GraphError::InsufficientFaceVertices { distinct: 2 })
    );
    assert_eq!(
        graph.has_face(&[1, 2, 1, 2]),
        Err(GraphError::InsufficientFaceVertices { distinct: 2 })
    );
}

#[test]
fn test_face_rotations_and_reversal() {
    let mut graph = UndirectedGraph::new();
    graph.add_face(&[1, 2, 3, 4]).expect("fresh face");

    assert_eq!(graph.has_face(&[3, 4, 1, 2]), Ok(true));
    assert_eq!(graph.has_face(&[4, 3, 2, 1]), Ok(true));
    assert_eq!(graph.has_face(&[1, 3, 2, 4]), Ok(false));
}

#[test]
fn test_add_face_must_make_progress() {
    let mut graph = UndirectedGraph::new();
    graph.add_face(&[1, 2, 3]).expect("fresh face");

    assert_eq!(graph.add_face(&[3, 2, 1]), Err(GraphError::FaceAlreadyComplete));
    assert_eq!(graph.add_face(&[1, 1, 2, 3, 3]), Err(GraphError::FaceAlreadyComplete));
    assert_eq!(
        graph.add_face(&[7, 8]),
        Err(GraphError::InsufficientFaceVertices { distinct: 2 })
    );
    assert_eq!(graph.vertex_count(), 3);
}

#[test]
fn test_remove_face_edges_only() {
    let mut graph = two_faces_and_chord();

    assert_eq!(graph.remove_face(&[2, 4, 6], false), Err(GraphError::NoSuchFace));
    graph.remove_face(&[1, 2, 3, 4, 5], false).expect("complete face");

    assert_eq!(graph.vertex_count(), 8);
    assert_eq!(graph.edge_count(), 5);
    assert_eq!(graph.has_edge(&1, &2), Ok(false));
    assert_eq!(graph.has_face(&[1, 2, 6, 7, 8]), Ok(false));
    assert_symmetric(&graph);
}

#[test]
fn test_subgraph_requires_presence_and_content() {
    let graph = two_faces_and_chord();
    let empty: UndirectedGraph<i32> = UndirectedGraph::new();

    assert_eq!(graph.has_subgraph(None), Err(GraphError::NullSubgraph));
    assert_eq!(graph.has_subgraph(Some(&empty)), Err(GraphError::EmptySubgraph));
    assert_eq!(graph.is_equal(None), Err(GraphError::NullSubgraph));
    assert_eq!(
        UndirectedGraph::from_subgraph(Some(&empty)).map(|g| g.vertex_count()),
        Err(GraphError::EmptySubgraph)
    );
    assert_eq!(graph.is_equal(Some(&empty)), Err(GraphError::EmptySubgraph));
}

#[test]
fn test_subgraph_mutators_reject_missing_or_empty_input() {
    let mut graph = two_faces_and_chord();
    let before = graph.to_string();
    let empty: UndirectedGraph<i32> = UndirectedGraph::new();

    assert_eq!(graph.add_subgraph(None), Err(GraphError::NullSubgraph));
    assert_eq!(graph.add_subgraph(Some(&empty)), Err(GraphError::EmptySubgraph));
    assert_eq!(graph.remove_subgraph(None, false), Err(GraphError::NullSubgraph));
    assert_eq!(graph.remove_subgraph(None, true), Err(GraphError::NullSubgraph));
    assert_eq!(
        graph.remove_subgraph(Some(&empty), false),
        Err(GraphError::EmptySubgraph)
    );
    assert_eq!(
        graph.remove_subgraph(Some(&empty), true),
        Err(GraphError::EmptySubgraph)
    );
    assert_eq!(graph.to_string(), before);
}

/// A view that lists every edge from both of its endpoints.
struct BothWays(UndirectedGraph<u8>);

impl GraphView<u8> for BothWays {
    fn has_vertex(&self, vertex: &u8) -> bool {
        self.0.has_vertex(vertex)
    }

    fn vertices(&self) -> Vec<u8> {
        self.0.vertices()
    }

    fn neighbors(&self, vertex: &u8) -> GraphResult<&[u8], u8> {
        self.0.neighbors(vertex)
    }

    fn vertex_count(&self) -> usize {
        self.0.vertex_count()
    }

    fn edge_count(&self) -> usize {
        self.0.edge_count()
    }

    fn has_edge(&self, a: &u8, b: &u8) -> GraphResult<bool, u8> {
        self.0.has_edge(a, b)
    }

    fn has_face(&self, vertices: &[u8]) -> GraphResult<bool, u8> {
        self.0.has_face(vertices)
    }

    fn has_subgraph(&self, subgraph: Option<&dyn GraphView<u8>>) -> GraphResult<bool, u8> {
        self.0.has_subgraph(subgraph)
    }

    fn is_equal(&self, other: Option<&dyn GraphView<u8>>) -> GraphResult<bool, u8> {
        self.0.is_equal(other)
    }

    fn edges(&self) -> Vec<(u8, u8)> {
        self.0
            .iter()
            .flat_map(|(v, ns)| ns.iter().map(move |n| (*v, *n)))
            .collect()
    }
}

#[test]
fn test_subgraph_ops_tolerate_views_listing_edges_twice() {
    let other = BothWays(UndirectedGraph::from_edges([(1, 2), (2, 3)]).expect("valid"));
    assert_eq!(other.edges().len(), 4);

    let mut graph: UndirectedGraph<u8> = UndirectedGraph::new();
    graph.add_subgraph(Some(&other)).expect("graph is empty");
    assert_eq!(graph.neighbors(&1), Ok(&[2][..]));
    assert_eq!(graph.neighbors(&2), Ok(&[1, 3][..]));
    assert_eq!(graph.edge_count(), 2);
    assert_eq!(graph.add_subgraph(Some(&other)), Err(GraphError::SubgraphAlreadyPresent));

    let copy = UndirectedGraph::from_subgraph(Some(&other)).expect("non-empty");
    assert_eq!(copy.edge_count(), 2);
    assert_eq!(graph.is_equal(Some(&other)), Ok(true));

    graph.remove_subgraph(Some(&other), false).expect("both edges exist");
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.vertex_count(), 3);
}

#[test]
fn test_has_subgraph_is_edge_containment() {
    let graph = two_faces_and_chord();

    let triangle: UndirectedGraph<i32> = UndirectedGraph::from_edges([(1, 2), (2, 6), (6, 1)]).expect("valid");
    assert_eq!(graph.has_subgraph(Some(&triangle)), Ok(true));

    let stray: UndirectedGraph<i32> = UndirectedGraph::from_edges([(1, 2), (3, 7)]).expect("valid");
    assert_eq!(graph.has_subgraph(Some(&stray)), Ok(false));

    // Isolated vertices carry no edges.
    let mut isolated: UndirectedGraph<i32> = UndirectedGraph::new();
    isolated.add_vertex(42).expect("fresh");
    assert_eq!(graph.has_subgraph(Some(&isolated)), Ok(true));
}

#[test]
fn test_add_subgraph_union_and_idempotence() {
    let mut graph: UndirectedGraph<i32> = UndirectedGraph::from_edges([(1, 2), (2, 3)]).expect("valid");
    let other: UndirectedGraph<i32> = UndirectedGraph::from_edges([(2, 3), (3, 4), (4, 1)]).expect("valid");

    graph.add_subgraph(Some(&other)).expect("3-4 and 4-1 are new");
    assert_eq!(graph.edge_count(), 4);
    assert_eq!(graph.has_face(&[1, 2, 3, 4]), Ok(true));

    assert_eq!(graph.add_subgraph(Some(&other)), Err(GraphError::SubgraphAlreadyPresent));
    assert_eq!(graph.add_subgraph(None), Err(GraphError::NullSubgraph));
    assert_symmetric(&graph);
}

#[test]
fn test_remove_subgraph_checks_before_removing() {
    let mut graph = two_faces_and_chord();
    let before = graph.to_string();

    let partial: UndirectedGraph<i32> = UndirectedGraph::from_edges([(1, 2), (2, 4)]).expect("valid");
    assert_eq!(
        graph.remove_subgraph(Some(&partial), false),
        Err(GraphError::SubgraphNotPresent(2, 4))
    );
    assert_eq!(graph.to_string(), before);

    let path: UndirectedGraph<i32> = UndirectedGraph::from_edges([(6, 7), (7, 8)]).expect("valid");
    graph.remove_subgraph(Some(&path), false).expect("both edges exist");
    assert_eq!(graph.edge_count(), 8);
    assert!(graph.has_vertex(&7));

    let chord: UndirectedGraph<i32> = UndirectedGraph::from_edges([(1, 6)]).expect("valid");
    graph.remove_subgraph(Some(&chord), true).expect("chord exists");
    assert!(!graph.has_vertex(&1) && !graph.has_vertex(&6));
    assert_symmetric(&graph);
}

#[test]
fn test_remove_subgraph_with_vertices_tolerates_shared_endpoints() {
    let mut graph: UndirectedGraph<i32> = UndirectedGraph::from_edges([(1, 2), (2, 3), (3, 4)]).expect("valid");
    let path: UndirectedGraph<i32> = UndirectedGraph::from_edges([(1, 2), (2, 3)]).expect("valid");

    graph.remove_subgraph(Some(&path), true).expect("both edges exist");
    assert_eq!(graph.vertices(), vec![4]);
    assert_eq!(graph.edge_count(), 0);
}

#[test]
fn test_is_equal_is_containment_based() {
    let graph = two_faces_and_chord();
    let same = graph.clone();
    assert_eq!(graph.is_equal(Some(&same)), Ok(true));

    // `other` is contained in `graph`: reported equal even though `graph` has more.
    let smaller: UndirectedGraph<i32> = UndirectedGraph::from_edges([(1, 2), (2, 3)]).expect("valid");
    assert_eq!(graph.is_equal(Some(&smaller)), Ok(true));
    // The reverse direction sees the missing edges.
    assert_eq!(smaller.is_equal(Some(&graph)), Ok(false));

    let disjoint: UndirectedGraph<i32> = UndirectedGraph::from_edges([(10, 11)]).expect("valid");
    assert_eq!(graph.is_equal(Some(&disjoint)), Ok(false));
}

#[test]
fn test_trait_objects_share_the_contract() {
    let mut graph: UndirectedGraph<i32> = UndirectedGraph::new();
    {
        let mutable: &mut dyn Graph<i32> = &mut graph;
        mutable.add_face(&[1, 2, 3]).expect("fresh face");
        mutable.add_vertex(4).expect("fresh");
        mutable.remove_edge(&1, &2, false).expect("present");
    }

    let view: &dyn GraphView<i32> = &graph;
    assert_eq!(view.vertex_count(), 4);
    assert_eq!(view.edge_count(), 2);
    assert_eq!(view.neighbors(&3), Ok(&[2, 1][..]));
    assert_eq!(view.has_face(&[1, 2, 3]), Ok(false));
    assert_eq!(view.face_count(), Err(GraphError::FaceCountUnsupported));
    assert_eq!(view.edges(), vec![(1, 3), (2, 3)]);
    assert_eq!(view.render(), graph.render());

    let mut copy: UndirectedGraph<i32> = UndirectedGraph::new();
    Graph::add_subgraph(&mut copy, Some(view)).expect("copy is empty");
    assert_eq!(copy.edge_count(), 2);
    assert_eq!(copy.is_equal(Some(view)), Ok(true));
    Graph::clear(&mut copy);
    assert!(GraphView::is_empty(&copy));
}

#[test]
fn test_clear_drops_everything() {
    let mut graph = two_faces_and_chord();
    graph.clear();
    assert!(graph.is_empty());
    assert_eq!(graph.edge_count(), 0);
    assert_eq!(graph.to_string(), "Graph:");
}
