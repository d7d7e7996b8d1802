//! Error kinds reported by graph operations.
//!
//! Every rejected operation maps to exactly one variant; nothing is silently
//! ignored or repaired. Variants carry the offending vertex values where there
//! are any, so messages can name them.

use core::fmt;

/// Result alias used throughout the graph API.
pub type GraphResult<T, V> = Result<T, GraphError<V>>;

/// The error type for rejected graph operations.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GraphError<V> {
    /// The vertex is not present in the graph.
    UnknownVertex(V),
    /// The vertex is already present in the graph.
    DuplicateVertex(V),
    /// Both endpoints of an edge (or edge query) are the same vertex.
    SelfLoopNotAllowed(V),
    /// There is no edge between the two vertices.
    UnknownEdge(V, V),
    /// The two vertices are already connected.
    DuplicateEdge(V, V),
    /// A face needs at least three distinct vertices.
    InsufficientFaceVertices {
        /// Number of distinct vertices that were supplied.
        distinct: usize,
    },
    /// Every edge of the face already exists, so adding it would change nothing.
    FaceAlreadyComplete,
    /// At least one edge of the face is missing.
    NoSuchFace,
    /// The subgraph has no vertices.
    EmptySubgraph,
    /// No subgraph was supplied.
    NullSubgraph,
    /// Every edge of the subgraph already exists in the graph.
    SubgraphAlreadyPresent,
    /// The graph lacks this edge of the subgraph.
    SubgraphNotPresent(V, V),
    /// Faces are not stored, so they cannot be counted.
    FaceCountUnsupported,
}

impl<V> GraphError<V> {
    /// Short, stable name of the error kind.
    pub fn kind(&self) -> &'static str {
        match self {
            Self::UnknownVertex(_) => "unknown_vertex",
            Self::DuplicateVertex(_) => "duplicate_vertex",
            Self::SelfLoopNotAllowed(_) => "self_loop_not_allowed",
            Self::UnknownEdge(..) => "unknown_edge",
            Self::DuplicateEdge(..) => "duplicate_edge",
            Self::InsufficientFaceVertices { .. } => "insufficient_face_vertices",
            Self::FaceAlreadyComplete => "face_already_complete",
            Self::NoSuchFace => "no_such_face",
            Self::EmptySubgraph => "empty_subgraph",
            Self::NullSubgraph => "null_subgraph",
            Self::SubgraphAlreadyPresent => "subgraph_already_present",
            Self::SubgraphNotPresent(..) => "subgraph_not_present",
            Self::FaceCountUnsupported => "face_count_unsupported",
        }
    }

    /// Records the rejection of a mutating operation and hands the error back.
    #[inline]
    #[cfg_attr(not(feature = "tracing"), allow(unused_variables))]
    pub(crate) fn rejected(self, operation: &'static str) -> Self {
        graph_event!(debug, operation, kind = self.kind(), "graph operation rejected");
        self
    }
}

impl<V: fmt::Debug> fmt::Display for GraphError<V> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnknownVertex(v) => write!(f, "there is no vertex ({v:?}) in the graph"),
            Self::DuplicateVertex(v) => write!(f, "vertex ({v:?}) has already been added to the graph"),
            Self::SelfLoopNotAllowed(v) => write!(f, "vertex ({v:?}) cannot be connected to itself"),
            Self::UnknownEdge(a, b) => write!(f, "there is no edge ({a:?}; {b:?}) in the graph"),
            Self::DuplicateEdge(a, b) => write!(f, "edge ({a:?}; {b:?}) has already been added to the graph"),
            Self::InsufficientFaceVertices { distinct } => write!(
                f,
                "a face needs at least 3 distinct vertices, got {distinct}"
            ),
            Self::FaceAlreadyComplete => f.write_str("every edge of the face is already in the graph"),
            Self::NoSuchFace => f.write_str("the graph does not contain this face"),
            Self::EmptySubgraph => f.write_str("the subgraph is empty"),
            Self::NullSubgraph => f.write_str("no subgraph was supplied"),
            Self::SubgraphAlreadyPresent => f.write_str("the graph already contains this subgraph"),
            Self::SubgraphNotPresent(a, b) => write!(
                f,
                "the graph does not contain this subgraph: edge ({a:?}; {b:?}) is missing"
            ),
            Self::FaceCountUnsupported => f.write_str("faces are not tracked, so they cannot be counted"),
        }
    }
}

impl<V: fmt::Debug> std::error::Error for GraphError<V> {}
