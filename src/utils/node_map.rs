use super::sym::Sym;

/// Adjacency table indexed by [`Sym`]. Each vertex owns the ordered
/// list of its outgoing neighbours.
#[derive(Clone, Debug, Default)]
pub(crate) struct NodeMap {
    map: Vec<Vec<Sym>>,
}

impl NodeMap {
    pub(crate) fn new() -> Self {
        NodeMap::default()
    }

    /// Registers a fresh vertex. Ids are dense, so the new vertex
    /// always lands at the end of the table.
    pub(crate) fn push_node(&mut self, node: Sym) {
        debug_assert_eq!(node.into_usize(), self.map.len());
        self.map.push(Vec::new());
    }

    #[inline]
    pub(crate) fn get(&self, node: Sym) -> &[Sym] {
        self.map
            .get(node.into_usize())
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    #[inline]
    pub(crate) fn get_mut(&mut self, node: Sym) -> Option<&mut Vec<Sym>> {
        self.map.get_mut(node.into_usize())
    }

    pub(crate) fn contains_edge(&self, from: Sym, to: Sym) -> bool {
        self.get(from).contains(&to)
    }

    pub(crate) fn iter(&self) -> impl Iterator<Item = (Sym, &[Sym])> {
        self.map
            .iter()
            .enumerate()
            .map(|(i, children)| (Sym::from_usize(i), children.as_slice()))
    }

    pub(crate) fn as_slice(&self) -> &[Vec<Sym>] {
        &self.map
    }

    pub(crate) fn clear(&mut self) {
        self.map.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_neighbour_insertion_order() {
        let mut map = NodeMap::new();
        for i in 0..3 {
            map.push_node(Sym::from_usize(i));
        }
        let (a, b, c) = (Sym::from_usize(0), Sym::from_usize(1), Sym::from_usize(2));
        let children = map.get_mut(a).unwrap();
        children.push(c);
        children.push(b);
        assert_eq!(map.get(a), [c, b]);
        assert!(map.contains_edge(a, b));
        assert!(!map.contains_edge(b, a));
    }

    #[test]
    fn unknown_node_has_no_children() {
        let map = NodeMap::new();
        assert!(map.get(Sym::from_usize(7)).is_empty());
    }
}
