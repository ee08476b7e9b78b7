use super::DirectedGraph;

const DEFAULT_MAX_PRINT_SIZE: usize = 6;
const MAX_PRINTED_EDGES: usize = 10;

fn get_max_str_length(graph: &DirectedGraph) -> usize {
    graph
        .edges()
        .take(MAX_PRINTED_EDGES)
        .fold(DEFAULT_MAX_PRINT_SIZE, |max, (parent, child)| {
            max.max(parent.chars().count()).max(child.chars().count())
        })
}

impl std::fmt::Debug for DirectedGraph {
    #[inline]
    fn fmt(&self, f: &mut core::fmt::Formatter) -> core::fmt::Result {
        let n_nodes = self.n_vertices();
        let n_edges = self.n_edges;
        let n_roots = self.roots().len();
        let n_leaves = self.leaves().len();
        let max_string_length = get_max_str_length(self);
        writeln!(f, "# of nodes: {n_nodes}")?;
        writeln!(f, "# of edges: {n_edges}")?;
        writeln!(f, "# of roots: {n_roots}")?;
        writeln!(f, "# of leaves: {n_leaves}")?;
        writeln!(f)?;
        writeln!(
            f,
            "| {:^width$} | {:^width$} |",
            "Parent",
            "Child",
            width = max_string_length
        )?;
        writeln!(
            f,
            "| {:-<width$} | {:-<width$} |",
            "",
            "",
            width = max_string_length
        )?;
        for (parent, child) in self.edges().take(MAX_PRINTED_EDGES) {
            writeln!(
                f,
                "| {:width$} | {:width$} |",
                parent,
                child,
                width = max_string_length
            )?;
        }

        if n_edges > MAX_PRINTED_EDGES {
            writeln!(f, "Omitted {} edges", n_edges - MAX_PRINTED_EDGES)?;
        }

        Ok(())
    }
}
