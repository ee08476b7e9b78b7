//! Checking a proposed vertex order against a [`DirectedGraph`].

use fxhash::{FxHashMap, FxHashSet};

use crate::prelude::*;
use crate::utils::label::normalize;

/// What to do with a label that appears more than once in a proposed
/// order.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum DuplicateEntries {
    /// Compare positions using the first occurrence of each label. A
    /// later repetition is ignored, even when it sits on the wrong side
    /// of an edge.
    #[default]
    FirstOccurrence,
    /// Fail with [`OrderError::DuplicateEntries`].
    Reject,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ValidationOptions {
    pub duplicates: DuplicateEntries,
}

impl ValidationOptions {
    pub fn reject_duplicates() -> Self {
        ValidationOptions {
            duplicates: DuplicateEntries::Reject,
        }
    }
}

impl DirectedGraph {
    /// Checks `proposed` as a topological order with the default
    /// [`ValidationOptions`].
    pub fn validate_order(
        &self,
        proposed: impl IntoIterator<Item = impl AsRef<str>>,
    ) -> Result<(), OrderError> {
        self.validate_order_with(proposed, ValidationOptions::default())
    }

    /// Checks `proposed` as a topological order of the graph.
    ///
    /// Entries are normalized like vertex labels and blank entries are
    /// dropped. The checks run in a fixed order and the first one that
    /// fails is reported, with every offending entry:
    ///
    /// 1. the graph has vertices,
    /// 2. the graph is acyclic,
    /// 3. no vertex is missing from `proposed`,
    /// 4. `proposed` holds no unknown labels,
    /// 5. no label is repeated, only under [`DuplicateEntries::Reject`],
    /// 6. every edge `u → v` has `u` strictly before `v`.
    pub fn validate_order_with(
        &self,
        proposed: impl IntoIterator<Item = impl AsRef<str>>,
        options: ValidationOptions,
    ) -> Result<(), OrderError> {
        if self.is_empty() {
            return Err(OrderError::EmptyGraph);
        }
        if self.detect_cycle() {
            return Err(OrderError::HasCycle);
        }

        let proposed: Vec<String> = proposed
            .into_iter()
            .map(|label| normalize(label.as_ref()))
            .filter(|label| !label.is_empty())
            .collect();

        // First occurrence wins.
        let mut position: FxHashMap<&str, usize> = FxHashMap::default();
        for (i, label) in proposed.iter().enumerate() {
            position.entry(label.as_str()).or_insert(i);
        }

        let missing: Vec<String> = self
            .vertices()
            .filter(|vertex| !position.contains_key(vertex))
            .map(String::from)
            .collect();
        if !missing.is_empty() {
            return Err(OrderError::MissingVertices(missing));
        }

        let extra: Vec<String> = proposed
            .iter()
            .filter(|label| !self.contains_vertex(label))
            .cloned()
            .collect();
        if !extra.is_empty() {
            return Err(OrderError::ExtraVertices(extra));
        }

        if options.duplicates == DuplicateEntries::Reject {
            let repeated = repeated_labels(&proposed);
            if !repeated.is_empty() {
                return Err(OrderError::DuplicateEntries(repeated));
            }
        }

        let violations: Vec<Edge> = self
            .edges()
            .filter(|(from, to)| position[from] > position[to])
            .map(|(from, to)| Edge::new(from, to))
            .collect();
        if !violations.is_empty() {
            tracing::debug!(n_violations = violations.len(), "order rejected");
            return Err(OrderError::OrderViolation(violations));
        }

        tracing::debug!(n_vertices = self.n_vertices(), "order accepted");
        Ok(())
    }
}

/// Labels seen more than once, each listed once, in the order of their
/// first repetition.
fn repeated_labels(proposed: &[String]) -> Vec<String> {
    let mut seen = FxHashSet::default();
    let mut reported = FxHashSet::default();
    proposed
        .iter()
        .filter(|label| !seen.insert(label.as_str()) && reported.insert(label.as_str()))
        .cloned()
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_demo_in_alphabetical_order_is_valid() {
        let graph = DirectedGraph::demo();
        assert_eq!(graph.validate_order(["A", "B", "C", "D", "E", "F"]), Ok(()));
    }

    #[test]
    fn test_unordered_siblings_are_interchangeable() {
        let graph = DirectedGraph::demo();
        assert_eq!(graph.validate_order(["A", "C", "B", "D", "E", "F"]), Ok(()));
    }

    #[test]
    fn test_entries_are_normalized() {
        let graph = DirectedGraph::demo();
        assert_eq!(
            graph.validate_order([" a", "b ", "", "c", "d", "e", "f", "  "]),
            Ok(())
        );
    }

    #[test]
    fn test_order_violation_lists_edge() {
        let graph = DirectedGraph::demo();
        assert_eq!(
            graph.validate_order(["B", "A", "C", "D", "E", "F"]),
            Err(OrderError::OrderViolation(vec![Edge::new("A", "B")]))
        );
    }

    #[test]
    fn test_order_violation_lists_every_edge() {
        let graph = DirectedGraph::demo();
        assert_eq!(
            graph.validate_order(["F", "E", "D", "C", "B", "A"]),
            Err(OrderError::OrderViolation(vec![
                Edge::new("A", "B"),
                Edge::new("A", "C"),
                Edge::new("B", "D"),
                Edge::new("C", "D"),
                Edge::new("D", "E"),
                Edge::new("E", "F"),
            ]))
        );
    }

    #[test]
    fn test_missing_vertices() {
        let graph = DirectedGraph::demo();
        assert_eq!(
            graph.validate_order(["A", "B", "C", "D", "E"]),
            Err(OrderError::MissingVertices(vec!["F".into()]))
        );
        assert_eq!(
            graph.validate_order(["A", "C", "E"]),
            Err(OrderError::MissingVertices(vec![
                "B".into(),
                "D".into(),
                "F".into()
            ]))
        );
    }

    #[test]
    fn test_missing_is_checked_before_extra() {
        let graph = DirectedGraph::demo();
        assert_eq!(
            graph.validate_order(["A", "B", "C", "D", "E", "X"]),
            Err(OrderError::MissingVertices(vec!["F".into()]))
        );
    }

    #[test]
    fn test_extra_vertices() {
        let graph = DirectedGraph::demo();
        assert_eq!(
            graph.validate_order(["A", "B", "X", "C", "D", "E", "F", "Y"]),
            Err(OrderError::ExtraVertices(vec!["X".into(), "Y".into()]))
        );
    }

    #[test]
    fn test_empty_graph() {
        let graph = DirectedGraph::new();
        assert_eq!(graph.validate_order(["A"]), Err(OrderError::EmptyGraph));
    }

    #[test]
    fn test_cycle_is_reported_before_contents() {
        let mut graph = DirectedGraph::new();
        graph.add_vertex("A").unwrap();
        graph.add_path(&["A", "B", "A"]).unwrap();
        assert_eq!(
            graph.validate_order(Vec::<String>::new()),
            Err(OrderError::HasCycle)
        );
    }

    #[test]
    fn test_duplicates_use_first_occurrence_by_default() {
        let graph = DirectedGraph::demo();
        // The second A sits after B, but only the first one counts.
        assert_eq!(
            graph.validate_order(["A", "B", "A", "C", "D", "E", "F"]),
            Ok(())
        );
        assert_eq!(
            graph.validate_order(["B", "A", "B", "C", "D", "E", "F"]),
            Err(OrderError::OrderViolation(vec![Edge::new("A", "B")]))
        );
    }

    #[test]
    fn test_duplicates_can_be_rejected() {
        let graph = DirectedGraph::demo();
        assert_eq!(
            graph.validate_order_with(
                ["A", "B", "A", "C", "D", "a", "E", "F", "F"],
                ValidationOptions::reject_duplicates()
            ),
            Err(OrderError::DuplicateEntries(vec!["A".into(), "F".into()]))
        );
        assert_eq!(
            graph.validate_order_with(
                ["A", "B", "C", "D", "E", "F"],
                ValidationOptions::reject_duplicates()
            ),
            Ok(())
        );
    }

    #[test]
    fn test_repeated_labels() {
        let proposed: Vec<String> = ["A", "B", "B", "A", "B"]
            .into_iter()
            .map(String::from)
            .collect();
        assert_eq!(repeated_labels(&proposed), ["B", "A"]);
    }
}
