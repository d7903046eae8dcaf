//! The live, mutable R-tree.

pub mod constants;
pub mod index;
pub(crate) mod node;

pub use index::RTree;
