use super::DirectedGraph;
use crate::utils::sym::Sym;

impl DirectedGraph {
    /// Returns `true` when at least one cycle exists.
    pub fn detect_cycle(&self) -> bool {
        self.find_cycle_u32().is_some()
    }

    /// Returns the first cycle found by a depth-first search that starts
    /// from every vertex in insertion order. The walk begins and ends at
    /// the vertex that was re-entered, e.g. `["B", "C", "B"]`.
    pub fn find_cycle(&self) -> Option<Vec<&str>> {
        self.find_cycle_u32()
            .map(|cycle| self.interner.resolve_many(cycle))
    }

    /// Depth-first search with an explicit stack of
    /// `(node, next child index)` frames. `visited` survives across
    /// starting points, `on_stack` only holds the active path.
    fn find_cycle_u32(&self) -> Option<Vec<Sym>> {
        let n_nodes = self.n_vertices();
        tracing::trace!(n_nodes, n_edges = self.n_edges, "looking for cycles");

        let mut visited = vec![false; n_nodes];
        let mut on_stack = vec![false; n_nodes];
        let mut stack: Vec<(Sym, usize)> = Vec::new();

        for start in (0..n_nodes).map(Sym::from_usize) {
            if visited[start.into_usize()] {
                continue;
            }
            visited[start.into_usize()] = true;
            on_stack[start.into_usize()] = true;
            stack.push((start, 0));

            while let Some((node, next_child)) = stack.last_mut() {
                let children = self.children_map.get(*node);
                let Some(&child) = children.get(*next_child) else {
                    // Every child explored, backtrack.
                    on_stack[node.into_usize()] = false;
                    stack.pop();
                    continue;
                };
                *next_child += 1;

                if on_stack[child.into_usize()] {
                    let entry = stack
                        .iter()
                        .position(|(node, _)| *node == child)
                        .unwrap_or(0);
                    let mut cycle: Vec<Sym> =
                        stack[entry..].iter().map(|(node, _)| *node).collect();
                    cycle.push(child);
                    tracing::trace!(?cycle, "found back edge");
                    return Some(cycle);
                }

                if !visited[child.into_usize()] {
                    visited[child.into_usize()] = true;
                    on_stack[child.into_usize()] = true;
                    stack.push((child, 0));
                }
            }
        }

        None
    }
}
