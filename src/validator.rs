//! The interactive front of the crate: an owned graph plus the
//! prompt-driven validation flow.

use crate::prelude::*;
use crate::utils::label::parse_order;

/// Owns the graph being edited and the options used to check orders
/// against it.
///
/// ```
/// use topocheck::prelude::*;
///
/// let mut validator = GraphValidator::new();
/// validator.load_demo();
/// let result = validator.request_validation(|| Some("a, c, b, d, e, f".to_string()));
/// assert_eq!(result, Ok(()));
/// ```
#[derive(Debug, Clone, Default)]
pub struct GraphValidator {
    graph: DirectedGraph,
    options: ValidationOptions,
}

impl GraphValidator {
    pub fn new() -> Self {
        GraphValidator::default()
    }

    pub fn with_options(options: ValidationOptions) -> Self {
        GraphValidator {
            graph: DirectedGraph::new(),
            options,
        }
    }

    pub fn from_graph(graph: DirectedGraph) -> Self {
        GraphValidator {
            graph,
            options: ValidationOptions::default(),
        }
    }

    pub fn graph(&self) -> &DirectedGraph {
        &self.graph
    }

    pub fn options(&self) -> ValidationOptions {
        self.options
    }

    pub fn set_options(&mut self, options: ValidationOptions) -> &mut Self {
        self.options = options;
        self
    }

    pub fn add_vertex(&mut self, name: impl AsRef<str>) -> GraphInteractionResult<String> {
        self.graph.add_vertex(name)
    }

    pub fn add_edge(
        &mut self,
        from: impl AsRef<str>,
        to: impl AsRef<str>,
    ) -> GraphInteractionResult<&mut Self> {
        self.graph.add_edge(from, to)?;
        Ok(self)
    }

    /// Replays `builder` onto the current graph.
    pub fn load(&mut self, builder: &DirectedGraphBuilder) -> GraphInteractionResult<&mut Self> {
        builder.replay(&mut self.graph)?;
        Ok(self)
    }

    /// Clears the graph and seeds it with [`DirectedGraph::demo`].
    pub fn load_demo(&mut self) -> &mut Self {
        self.graph.load_demo();
        self
    }

    pub fn clear(&mut self) -> &mut Self {
        self.graph.clear();
        self
    }

    pub fn detect_cycle(&self) -> bool {
        self.graph.detect_cycle()
    }

    pub fn validate_order(
        &self,
        proposed: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<(), OrderError> {
        self.graph.validate_order_with(proposed, self.options)
    }

    /// Runs the interactive check. The graph is checked for content and
    /// cycles first, and `prompt` is only asked for an order when both
    /// pass. `prompt` answers with a comma separated list of labels, or
    /// `None` when the user cancelled. Only an empty line counts as no
    /// answer; whitespace goes on to validation like any other entry.
    pub fn request_validation<F>(&self, prompt: F) -> Result<(), OrderError>
    where
        F: FnOnce() -> Option<String>,
    {
        if self.graph.is_empty() {
            return Err(OrderError::EmptyGraph);
        }
        if self.graph.detect_cycle() {
            return Err(OrderError::HasCycle);
        }

        let answer = match prompt() {
            Some(answer) if !answer.trim_end_matches(['\r', '\n']).is_empty() => answer,
            _ => {
                tracing::debug!("no order provided");
                return Err(OrderError::NoInput);
            }
        };

        self.validate_order(parse_order(&answer))
    }
}

impl From<DirectedGraph> for GraphValidator {
    fn from(graph: DirectedGraph) -> Self {
        GraphValidator::from_graph(graph)
    }
}
