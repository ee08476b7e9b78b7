//! Plain-data view of a graph for presentation layers.

use crate::prelude::*;

/// Vertices in insertion order and, for every vertex with outgoing
/// edges, its neighbours in insertion order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct GraphSnapshot {
    pub vertices: Vec<String>,
    #[cfg_attr(feature = "serde", serde(default))]
    pub edges: Vec<(String, Vec<String>)>,
}

impl DirectedGraph {
    pub fn snapshot(&self) -> GraphSnapshot {
        GraphSnapshot {
            vertices: self.vertices().map(String::from).collect(),
            edges: self
                .adjacency()
                .filter(|(_, children)| !children.is_empty())
                .map(|(parent, children)| {
                    (
                        parent.to_string(),
                        children.into_iter().map(String::from).collect(),
                    )
                })
                .collect(),
        }
    }
}

impl From<&GraphSnapshot> for DirectedGraphBuilder {
    fn from(snapshot: &GraphSnapshot) -> Self {
        let mut builder = DirectedGraphBuilder::new();
        builder.add_vertices(snapshot.vertices.iter().cloned());
        for (parent, children) in &snapshot.edges {
            for child in children {
                builder.add_edge(parent.as_str(), child.as_str());
            }
        }
        builder
    }
}

impl TryFrom<&GraphSnapshot> for DirectedGraph {
    type Error = GraphInteractionError;

    /// Rebuilds the graph through the regular mutators, so a snapshot
    /// that breaks an invariant is rejected.
    fn try_from(snapshot: &GraphSnapshot) -> Result<Self, Self::Error> {
        DirectedGraphBuilder::from(snapshot).build()
    }
}

/// Failure to read a graph from JSON.
#[cfg(feature = "json")]
#[derive(Debug, thiserror::Error)]
pub enum ReadError {
    #[error(transparent)]
    Json(#[from] serde_json::Error),
    #[error(transparent)]
    Graph(#[from] GraphInteractionError),
}

#[cfg(feature = "json")]
impl DirectedGraph {
    pub fn to_json<W>(&self, writer: W) -> Result<(), serde_json::Error>
    where
        W: std::io::Write,
    {
        serde_json::to_writer_pretty(writer, &self.snapshot())
    }

    pub fn from_json<R>(reader: R) -> Result<Self, ReadError>
    where
        R: std::io::Read,
    {
        let snapshot: GraphSnapshot = serde_json::from_reader(reader)?;
        Ok(DirectedGraph::try_from(&snapshot)?)
    }
}
