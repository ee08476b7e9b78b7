use thiserror::Error;

use crate::directed::Edge;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
#[error("Unable to topologically sort, graph has at least one cycle")]
pub struct GraphHasCycle;

/// Reasons a mutation of the graph was rejected. A rejected call
/// leaves the graph exactly as it was.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum GraphInteractionError {
    #[error("Please enter a vertex name")]
    EmptyLabel,

    #[error("Vertex `{0}` already exists")]
    DuplicateVertex(String),

    #[error("Please select a FROM vertex and enter a TO vertex")]
    MissingEndpoint,

    #[error("Cannot create an edge from `{0}` to itself")]
    SelfLoop(String),

    #[error("Vertex `{0}` does not exist")]
    UnknownVertex(String),

    #[error("Edge {} already exists", Edge::display(.from, .to))]
    DuplicateEdge { from: String, to: String },
}

/// Outcome of checking a proposed order. Each failure carries every
/// offending entry, not only the first one found.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(tag = "kind", content = "items"))]
pub enum OrderError {
    #[error("Graph is empty. Please add vertices and edges.")]
    EmptyGraph,

    #[error("Graph contains a cycle. Topological sort is impossible.")]
    HasCycle,

    #[error("No input provided.")]
    NoInput,

    #[error("Missing vertices: {}", .0.join(", "))]
    MissingVertices(Vec<String>),

    #[error("Extra vertices: {}", .0.join(", "))]
    ExtraVertices(Vec<String>),

    #[error("Repeated vertices: {}", .0.join(", "))]
    DuplicateEntries(Vec<String>),

    #[error("Invalid order for edges: {}", join_edges(.0))]
    OrderViolation(Vec<Edge>),
}

impl From<GraphHasCycle> for OrderError {
    fn from(_: GraphHasCycle) -> Self {
        OrderError::HasCycle
    }
}

/// Failure of [`DirectedGraphBuilder::build_acyclic`].
///
/// [`DirectedGraphBuilder::build_acyclic`]: crate::directed::DirectedGraphBuilder::build_acyclic
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    #[error(transparent)]
    Interaction(#[from] GraphInteractionError),
    #[error(transparent)]
    Cycle(#[from] GraphHasCycle),
}

fn join_edges(edges: &[Edge]) -> String {
    edges
        .iter()
        .map(ToString::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
