use crate::prelude::*;

#[derive(Clone, Debug, PartialEq, Eq)]
enum Step {
    Vertex(String),
    Edge(String, String),
}

/// Records vertices and edges and replays them on a [`DirectedGraph`]
/// through [`DirectedGraph::add_vertex`] and [`DirectedGraph::add_edge`],
/// so a bulk load obeys exactly the same rules as one call at a time.
#[derive(Clone, Debug, Default)]
pub struct DirectedGraphBuilder {
    steps: Vec<Step>,
}

impl DirectedGraphBuilder {
    pub fn new() -> Self {
        DirectedGraphBuilder { steps: Vec::new() }
    }

    /// The six vertex, six edge graph used for demonstrations.
    pub fn demo() -> Self {
        let mut builder = DirectedGraphBuilder::new();
        builder.add_vertices(["A", "B", "C", "D", "E", "F"]);
        builder
            .add_edge("A", "B")
            .add_edge("A", "C")
            .add_edge("B", "D")
            .add_edge("C", "D")
            .add_edge("D", "E")
            .add_edge("E", "F");
        builder
    }

    pub fn add_vertex(&mut self, name: impl Into<String>) -> &mut Self {
        self.steps.push(Step::Vertex(name.into()));
        self
    }

    pub fn add_vertices(&mut self, names: impl IntoIterator<Item = impl Into<String>>) -> &mut Self {
        for name in names {
            self.add_vertex(name);
        }
        self
    }

    pub fn add_edge(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        self.steps.push(Step::Edge(from.into(), to.into()));
        self
    }

    pub fn add_path(&mut self, path: impl IntoIterator<Item = impl AsRef<str>>) -> &mut Self {
        let mut path = path.into_iter().peekable();
        while let (Some(from), Some(to)) = (path.next(), path.peek()) {
            self.add_edge(from.as_ref(), to.as_ref());
        }
        self
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Applies every recorded step to `graph`, stopping at the first
    /// rejected one. Steps applied before the failure stay applied.
    pub fn replay(&self, graph: &mut DirectedGraph) -> GraphInteractionResult<()> {
        for step in &self.steps {
            match step {
                Step::Vertex(name) => {
                    graph.add_vertex(name)?;
                }
                Step::Edge(from, to) => {
                    graph.add_edge(from, to)?;
                }
            }
        }
        Ok(())
    }

    /// Builds a fresh graph from the recorded steps. Either every step
    /// is accepted or no graph is returned.
    pub fn build(&self) -> GraphInteractionResult<DirectedGraph> {
        let mut graph = DirectedGraph::new();
        self.replay(&mut graph)?;
        tracing::debug!(
            n_vertices = graph.n_vertices(),
            n_edges = graph.n_edges(),
            "built graph"
        );
        Ok(graph)
    }

    /// Builds the graph and checks that it has a topological order.
    pub fn build_acyclic(&self) -> Result<DirectedGraph, BuildError> {
        let graph = self.build()?;
        if graph.detect_cycle() {
            return Err(BuildError::Cycle(GraphHasCycle));
        }
        Ok(graph)
    }
}
