//! Range queries executed directly against a compressed buffer.

use crate::compress::util::{read_f64, read_id, read_u32, read_u8};
use crate::error::{RTreeCompressError, Result};
use crate::rect::Rect;

/// Resolves compressed leaf payload ids back to application geometry.
///
/// The compressed form stores integers only; queries hand each candidate id
/// to the resolver and re-check the precise bounding rectangle it reports, so
/// items inside an intersecting leaf but outside the query are still
/// filtered out.
pub trait PayloadResolver {
    /// The application geometry an id resolves to.
    type Item;

    /// Look up the item behind a payload id.
    fn resolve(&self, id: u32) -> Self::Item;

    /// The precise bounding rectangle of a resolved item.
    fn rect(&self, item: &Self::Item) -> Rect;
}

/// Answer a range query against a compressed buffer without decoding it into
/// tree nodes.
///
/// Visits the same items in the same order as
/// [`RTree::search`][crate::RTree::search] on the tree the buffer was
/// compressed from. Subtrees whose rectangle misses the query are pruned
/// without reading any further bytes. Returning `false` from the visitor
/// stops the whole traversal.
///
/// Fails only on a malformed buffer: a read past the end, a child offset
/// outside the buffer, or an unknown id width.
pub fn search_compressed<R, F>(
    data: &[u8],
    min: [f64; 2],
    max: [f64; 2],
    resolver: &R,
    mut visit: F,
) -> Result<()>
where
    R: PayloadResolver,
    F: FnMut(&R::Item, u32) -> bool,
{
    if data.is_empty() {
        return Ok(());
    }
    let height = read_u8(data, 0)?;
    let target = Rect::new(min, max);
    search_node(data, 1, &target, height, resolver, &mut visit)?;
    Ok(())
}

/// Recursive node reader. `Ok(false)` carries the visitor's stop signal
/// through every frame.
fn search_node<R, F>(
    data: &[u8],
    addr: usize,
    target: &Rect,
    height: u8,
    resolver: &R,
    visit: &mut F,
) -> Result<bool>
where
    R: PayloadResolver,
    F: FnMut(&R::Item, u32) -> bool,
{
    // Not through Rect::new: a corrupt buffer may hold inverted corners, and
    // those should fall out via non-intersection, not an assertion.
    let rect = Rect {
        min: [read_f64(data, addr)?, read_f64(data, addr + 8)?],
        max: [read_f64(data, addr + 16)?, read_f64(data, addr + 24)?],
    };
    if !target.intersects(&rect) {
        return Ok(true);
    }
    let count = read_u8(data, addr + 32)? as usize;
    let mut addr = addr + 33;

    if height == 0 {
        let width = read_u8(data, addr)?;
        addr += 1;
        for _ in 0..count {
            let id = read_id(data, addr, width)?;
            addr += width as usize;
            let item = resolver.resolve(id);
            if resolver.rect(&item).intersects(target) && !visit(&item, id) {
                return Ok(false);
            }
        }
        return Ok(true);
    }

    for _ in 0..count {
        let child_addr = read_u32(data, addr)? as usize;
        addr += 4;
        if child_addr >= data.len() {
            return Err(RTreeCompressError::OffsetOutOfBounds {
                offset: child_addr,
                len: data.len(),
            });
        }
        if !search_node(data, child_addr, target, height - 1, resolver, visit)? {
            return Ok(false);
        }
    }
    Ok(true)
}
