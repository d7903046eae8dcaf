//! The compressed byte-buffer form of a finished tree.
//!
//! [`RTree::compress`][crate::RTree::compress] freezes a tree into a single
//! little-endian buffer; [`search_compressed`] answers range queries against
//! those bytes directly, decoding rectangles and offsets on the fly and never
//! rebuilding nodes in memory.
//!
//! Buffer layout:
//!
//! - byte 0: tree height (an empty tree compresses to an empty buffer)
//! - node record: `min_x, min_y, max_x, max_y` as 8-byte IEEE-754 doubles,
//!   then a 1-byte entry count, then either the leaf payload block or
//!   `count` 4-byte absolute child offsets followed by each child's record
//! - leaf payload block: a 1-byte id width (1, 2, or 4; the smallest that
//!   fits the node's largest id), then `count` ids of that width

pub mod index;
pub mod search;
pub(crate) mod util;
mod write;

pub use index::CompressedRTree;
pub use search::{search_compressed, PayloadResolver};
