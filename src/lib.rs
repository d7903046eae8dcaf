#![doc = include_str!("../README.md")]

pub mod compress;
mod error;
pub mod rect;
pub mod rtree;

pub use compress::{search_compressed, CompressedRTree, PayloadResolver};
pub use error::RTreeCompressError;
pub use rect::Rect;
pub use rtree::RTree;

#[cfg(test)]
pub(crate) mod test;
