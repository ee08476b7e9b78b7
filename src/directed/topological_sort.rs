use std::collections::VecDeque;

use crate::prelude::*;
use crate::utils::sym::Sym;

/// Kahn's algorithm over a copy of the in-degrees.
///
/// L ← empty list of sorted vertices
/// S ← vertices with no incoming edge, in insertion order
///
/// while S is not empty do
///     take n from the front of S and append it to L
///     for each m with an edge n → m do
///         drop the edge
///         if m has no other incoming edge then push m to S
///
/// if edges remain then the graph has a cycle
pub(crate) fn topological_sort(dg: &DirectedGraph) -> Result<Vec<Sym>, GraphHasCycle> {
    let mut in_degree = vec![0usize; dg.n_vertices()];
    for (_, children) in dg.children_map.iter() {
        for child in children {
            in_degree[child.into_usize()] += 1;
        }
    }

    let mut no_deps: VecDeque<Sym> = in_degree
        .iter()
        .enumerate()
        .filter(|(_, degree)| **degree == 0)
        .map(|(i, _)| Sym::from_usize(i))
        .collect();
    let mut res = Vec::with_capacity(dg.n_vertices());
    let mut remaining_edges = dg.n_edges;

    while let Some(node) = no_deps.pop_front() {
        res.push(node);
        for &child in dg.children_map.get(node) {
            remaining_edges -= 1;
            let degree = &mut in_degree[child.into_usize()];
            *degree -= 1;
            if *degree == 0 {
                no_deps.push_back(child);
            }
        }
    }

    if remaining_edges != 0 {
        return Err(GraphHasCycle);
    }

    Ok(res)
}

impl DirectedGraph {
    /// One valid topological order of the graph, preferring vertices
    /// that were added earlier when several are free.
    pub fn topological_order(&self) -> Result<Vec<&str>, GraphHasCycle> {
        topological_sort(self).map(|order| self.interner.resolve_many(order))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_topologically_sort() {
        let mut graph = DirectedGraph::new();
        graph.add_vertex("1").unwrap();
        graph.add_path(&["1", "2", "3", "4", "5"]).unwrap();

        assert_eq!(
            graph.topological_order().unwrap(),
            ["1", "2", "3", "4", "5"]
        );
    }

    #[test]
    fn test_topologically_sort_demo() {
        let graph = DirectedGraph::demo();
        assert_eq!(
            graph.topological_order().unwrap(),
            ["A", "B", "C", "D", "E", "F"]
        );
    }

    #[test]
    fn test_topologically_sort_non_acyclic() {
        let mut graph = DirectedGraph::new();
        graph.add_vertex("1").unwrap();
        graph.add_path(&["1", "2", "3", "4", "5", "1"]).unwrap();

        assert_eq!(graph.topological_order(), Err(GraphHasCycle));
    }

    #[test]
    fn test_topologically_sort_isolated_vertices() {
        let mut graph = DirectedGraph::new();
        graph.add_vertex("Z").unwrap();
        graph.add_vertex("Y").unwrap();
        graph.add_edge("Y", "Z").unwrap();
        assert_eq!(graph.topological_order().unwrap(), ["Y", "Z"]);
    }
}
