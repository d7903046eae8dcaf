//! Depth-first encoder from a finished tree to the compressed buffer.

use crate::compress::util::{id_width, write_id};
use crate::compress::CompressedRTree;
use crate::rtree::node::Entry;
use crate::rtree::RTree;

impl<T: Copy + Into<u32>> RTree<T> {
    /// Serialize this tree into its compressed byte form.
    ///
    /// A pure read-only pass: the tree is unchanged and stays usable. An
    /// empty tree produces an empty buffer. Given the same insertion history
    /// the output is bit-for-bit identical.
    pub fn compress(&self) -> CompressedRTree {
        let mut dst = Vec::new();
        if let Some(root) = &self.root {
            dst.push(self.height as u8);
            write_node(root, self.height, &mut dst);
        }
        CompressedRTree::new(dst)
    }
}

fn write_node<T: Copy + Into<u32>>(entry: &Entry<T>, height: usize, dst: &mut Vec<u8>) {
    let node = entry.child.node();
    dst.extend_from_slice(&entry.rect.min[0].to_le_bytes());
    dst.extend_from_slice(&entry.rect.min[1].to_le_bytes());
    dst.extend_from_slice(&entry.rect.max[0].to_le_bytes());
    dst.extend_from_slice(&entry.rect.max[1].to_le_bytes());
    dst.push(node.entries.len() as u8);

    if height == 0 {
        let mut width = 1;
        for child in &node.entries {
            width = width.max(id_width((*child.child.item()).into()));
        }
        dst.push(width);
        for child in &node.entries {
            write_id(dst, (*child.child.item()).into(), width);
        }
        return;
    }

    // Reserve every child's offset slot up front, then backpatch each one
    // with the child's absolute start position as it gets encoded.
    let first_slot = dst.len();
    dst.resize(dst.len() + node.entries.len() * 4, 0);
    for (i, child) in node.entries.iter().enumerate() {
        let slot = first_slot + i * 4;
        let offset = dst.len() as u32;
        dst[slot..slot + 4].copy_from_slice(&offset.to_le_bytes());
        write_node(child, height - 1, dst);
    }
}
