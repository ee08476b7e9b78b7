pub(crate) mod interner;
pub mod label;
pub(crate) mod node_map;
pub(crate) mod sym;
