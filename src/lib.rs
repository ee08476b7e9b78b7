//! Build a directed graph one vertex and one edge at a time, then check
//! whether a proposed ordering of its vertices is a valid topological
//! order.
//!
//! Vertex labels are case-normalized: surrounding whitespace is removed
//! and the label is uppercased, so `"a"` and `" A "` are the same vertex.
//! This is intended and applies everywhere a label is accepted,
//! including the entries of a proposed order.
//!
//! ```
//! use topocheck::prelude::*;
//!
//! let graph = DirectedGraph::demo();
//! assert!(!graph.detect_cycle());
//! assert_eq!(graph.validate_order(["A", "C", "B", "D", "E", "F"]), Ok(()));
//! assert_eq!(
//!     graph.validate_order(["B", "A", "C", "D", "E", "F"]),
//!     Err(OrderError::OrderViolation(vec![Edge::new("A", "B")]))
//! );
//! ```

pub mod directed;
pub mod error;
pub mod order;
pub mod readwrite;
pub mod utils;
pub mod validator;

/// Prelude of data types and functionality.
pub mod prelude {
    pub type GraphInteractionResult<T> = Result<T, GraphInteractionError>;
    pub use crate::directed::{DirectedGraph, DirectedGraphBuilder, Edge};
    pub use crate::error::*;
    pub use crate::order::{DuplicateEntries, ValidationOptions};
    pub use crate::readwrite::GraphSnapshot;
    pub use crate::utils::label::{normalize, parse_order};
    pub use crate::validator::GraphValidator;
}
