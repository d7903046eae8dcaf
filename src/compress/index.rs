use crate::compress::search::{search_compressed, PayloadResolver};
use crate::error::Result;

/// An owned compressed tree buffer.
///
/// Usually created via [`RTree::compress`][crate::RTree::compress]. The
/// buffer is immutable; queries re-parse the bytes they touch on every call
/// and hold no state, so a `CompressedRTree` can be shared freely across
/// readers. For buffers obtained elsewhere (a file, the network), wrap the
/// bytes with [`new`][CompressedRTree::new] or query the slice directly with
/// [`search_compressed`].
#[derive(Debug, Clone, PartialEq)]
pub struct CompressedRTree {
    buffer: Vec<u8>,
}

impl CompressedRTree {
    /// Wrap an existing compressed buffer.
    pub fn new(buffer: Vec<u8>) -> Self {
        Self { buffer }
    }

    /// The raw compressed bytes.
    pub fn as_bytes(&self) -> &[u8] {
        &self.buffer
    }

    /// Consume self, returning the underlying buffer.
    pub fn into_inner(self) -> Vec<u8> {
        self.buffer
    }

    /// The serialized tree height, or `None` for the empty-tree buffer.
    pub fn height(&self) -> Option<u8> {
        self.buffer.first().copied()
    }

    /// Returns `true` if this is the compression of an empty tree.
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Answer a range query against this buffer. See [`search_compressed`].
    pub fn search<R, F>(&self, min: [f64; 2], max: [f64; 2], resolver: &R, visit: F) -> Result<()>
    where
        R: PayloadResolver,
        F: FnMut(&R::Item, u32) -> bool,
    {
        search_compressed(&self.buffer, min, max, resolver, visit)
    }
}

impl AsRef<[u8]> for CompressedRTree {
    fn as_ref(&self) -> &[u8] {
        &self.buffer
    }
}
