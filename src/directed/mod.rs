use crate::prelude::*;
use crate::utils::{interner::Interner, label::normalize, node_map::NodeMap, sym::Sym};
use rayon::prelude::*;

mod builder;
mod cycle;
mod debug;
mod topological_sort;

pub use builder::DirectedGraphBuilder;

/// A directed precedence constraint: `from` must come before `to`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Edge {
    pub from: String,
    pub to: String,
}

impl Edge {
    pub fn new(from: impl Into<String>, to: impl Into<String>) -> Self {
        Edge {
            from: from.into(),
            to: to.into(),
        }
    }

    pub(crate) fn display(from: &str, to: &str) -> String {
        format!("{from} → {to}")
    }
}

impl std::fmt::Display for Edge {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&Edge::display(&self.from, &self.to))
    }
}

/// Directed graph over case-normalized string labels.
///
/// Vertices are reported in the order they were first added and
/// every vertex keeps its outgoing edges in insertion order. The
/// graph never holds self-loops or repeated edges.
#[derive(Clone, Default)]
pub struct DirectedGraph {
    pub(crate) interner: Interner,
    pub(crate) children_map: NodeMap,
    pub(crate) n_edges: usize,
}

impl PartialEq for DirectedGraph {
    fn eq(&self, other: &Self) -> bool {
        self.vertices().eq(other.vertices()) && self.edges().eq(other.edges())
    }
}

impl Eq for DirectedGraph {}

impl DirectedGraph {
    pub fn new() -> Self {
        DirectedGraph {
            interner: Interner::new(),
            children_map: NodeMap::new(),
            n_edges: 0,
        }
    }

    /// Graph with vertices `A` to `F` and the edges `A → B`, `A → C`,
    /// `B → D`, `C → D`, `D → E` and `E → F`.
    pub fn demo() -> Self {
        let mut graph = DirectedGraph::new();
        graph.load_demo();
        graph
    }

    /// Replaces the contents of the graph with the [`demo`] graph.
    ///
    /// [`demo`]: DirectedGraph::demo
    pub fn load_demo(&mut self) -> &mut Self {
        self.clear();
        DirectedGraphBuilder::demo()
            .replay(self)
            .expect("The demo graph is well formed");
        self
    }

    #[inline(always)]
    pub(crate) fn resolve(&self, sym: Sym) -> &str {
        self.interner.resolve(sym)
    }

    #[inline(always)]
    pub(crate) fn get_internal(&self, label: &str) -> Option<Sym> {
        self.interner.get(label)
    }

    fn insert_vertex(&mut self, label: &str) -> Sym {
        let (sym, created) = self.interner.get_or_intern(label);
        if created {
            self.children_map.push_node(sym);
        }
        sym
    }

    pub fn n_vertices(&self) -> usize {
        self.interner.len()
    }

    pub fn n_edges(&self) -> usize {
        self.n_edges
    }

    pub fn is_empty(&self) -> bool {
        self.n_vertices() == 0
    }

    /// Adds a vertex named by the normalized form of `name` and returns
    /// the label it was stored under.
    pub fn add_vertex(&mut self, name: impl AsRef<str>) -> GraphInteractionResult<String> {
        let label = normalize(name.as_ref());
        if label.is_empty() {
            return Err(GraphInteractionError::EmptyLabel);
        }
        if self.contains_vertex(&label) {
            return Err(GraphInteractionError::DuplicateVertex(label));
        }
        self.insert_vertex(&label);
        tracing::debug!(vertex = %label, "added vertex");
        Ok(label)
    }

    /// Adds the edge `from → to`. `from` has to be a known vertex,
    /// `to` is created when it does not exist yet.
    pub fn add_edge(
        &mut self,
        from: impl AsRef<str>,
        to: impl AsRef<str>,
    ) -> GraphInteractionResult<&mut Self> {
        let from = normalize(from.as_ref());
        let to = normalize(to.as_ref());

        if from.is_empty() || to.is_empty() {
            return Err(GraphInteractionError::MissingEndpoint);
        }
        if from == to {
            return Err(GraphInteractionError::SelfLoop(to));
        }
        let Some(from_sym) = self.get_internal(&from) else {
            return Err(GraphInteractionError::UnknownVertex(from));
        };
        if let Some(to_sym) = self.get_internal(&to) {
            if self.children_map.contains_edge(from_sym, to_sym) {
                return Err(GraphInteractionError::DuplicateEdge { from, to });
            }
        }

        let to_sym = self.insert_vertex(&to);
        if let Some(children) = self.children_map.get_mut(from_sym) {
            children.push(to_sym);
            self.n_edges += 1;
        }
        tracing::debug!(%from, %to, "added edge");
        Ok(self)
    }

    /// Adds an edge between every consecutive pair of `path`.
    pub fn add_path(&mut self, path: &[impl AsRef<str>]) -> GraphInteractionResult<&mut Self> {
        for edge in path.windows(2) {
            self.add_edge(&edge[0], &edge[1])?;
        }
        Ok(self)
    }

    /// Drops every vertex and edge.
    pub fn clear(&mut self) -> &mut Self {
        self.interner.clear();
        self.children_map.clear();
        self.n_edges = 0;
        tracing::debug!("cleared graph");
        self
    }

    pub fn contains_vertex(&self, label: impl AsRef<str>) -> bool {
        self.get_internal(label.as_ref()).is_some()
    }

    pub fn edge_exists(&self, from: impl AsRef<str>, to: impl AsRef<str>) -> bool {
        match (
            self.get_internal(from.as_ref()),
            self.get_internal(to.as_ref()),
        ) {
            (Some(from), Some(to)) => self.children_map.contains_edge(from, to),
            _ => false,
        }
    }

    /// Vertex labels in insertion order.
    pub fn vertices(&self) -> impl Iterator<Item = &str> + '_ {
        self.interner.iter().map(|(_, label)| label)
    }

    /// Outgoing neighbours of `label` in the order the edges were added.
    pub fn neighbors(&self, label: impl AsRef<str>) -> GraphInteractionResult<Vec<&str>> {
        match self.get_internal(label.as_ref()) {
            Some(sym) => Ok(self
                .interner
                .resolve_many(self.children_map.get(sym).iter().copied())),
            None => Err(GraphInteractionError::UnknownVertex(
                label.as_ref().to_string(),
            )),
        }
    }

    /// The adjacency mapping, one entry per vertex in insertion order.
    pub fn adjacency(&self) -> impl Iterator<Item = (&str, Vec<&str>)> + '_ {
        self.children_map.iter().map(|(parent, children)| {
            (
                self.resolve(parent),
                self.interner.resolve_many(children.iter().copied()),
            )
        })
    }

    /// Every edge, grouped by source vertex.
    pub fn edges(&self) -> impl Iterator<Item = (&str, &str)> + '_ {
        self.children_map.iter().flat_map(move |(parent, children)| {
            children
                .iter()
                .map(move |&child| (self.resolve(parent), self.resolve(child)))
        })
    }

    /// Vertices with no outgoing edges.
    pub fn leaves(&self) -> Vec<&str> {
        let leaves: Vec<_> = self
            .children_map
            .as_slice()
            .par_iter()
            .enumerate()
            .filter(|(_, children)| children.is_empty())
            .map(|(i, _)| Sym::from_usize(i))
            .collect();
        self.interner.resolve_many(leaves)
    }

    /// Vertices with no incoming edges.
    pub fn roots(&self) -> Vec<&str> {
        let mut children: Vec<Sym> = self
            .children_map
            .as_slice()
            .par_iter()
            .flatten()
            .copied()
            .collect();
        children.par_sort_unstable();
        children.dedup();
        let roots: Vec<_> = (0..self.n_vertices())
            .into_par_iter()
            .map(Sym::from_usize)
            .filter(|node| children.binary_search(node).is_err())
            .collect();
        self.interner.resolve_many(roots)
    }
}
