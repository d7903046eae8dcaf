//! Tree nodes: fixed-capacity entry arrays, least-enlargement descent, and
//! the largest-axis edge-snap split.

use tinyvec::ArrayVec;

use crate::rect::Rect;
use crate::rtree::constants::ENTRY_CAPACITY;

/// One slot in a node: a bounding rectangle plus whatever it bounds.
#[derive(Debug, Clone)]
pub(crate) struct Entry<T> {
    pub(crate) rect: Rect,
    pub(crate) child: Child<T>,
}

/// What an entry's rectangle bounds.
///
/// `Vacant` only ever appears in the unoccupied tail slots of a node's fixed
/// array; it is never reachable through the tree itself.
#[derive(Debug, Clone)]
pub(crate) enum Child<T> {
    Vacant,
    Item(T),
    Node(Box<Node<T>>),
}

// Manual impls so the fixed arrays don't force `T: Default`.
impl<T> Default for Child<T> {
    fn default() -> Self {
        Child::Vacant
    }
}

impl<T> Default for Entry<T> {
    fn default() -> Self {
        Entry {
            rect: Rect::default(),
            child: Child::Vacant,
        }
    }
}

impl<T> Child<T> {
    pub(crate) fn node(&self) -> &Node<T> {
        match self {
            Child::Node(node) => node,
            _ => unreachable!("entry does not hold a child node"),
        }
    }

    pub(crate) fn node_mut(&mut self) -> &mut Node<T> {
        match self {
            Child::Node(node) => node,
            _ => unreachable!("entry does not hold a child node"),
        }
    }

    pub(crate) fn item(&self) -> &T {
        match self {
            Child::Item(value) => value,
            _ => unreachable!("entry does not hold a leaf item"),
        }
    }
}

/// A single tree node.
///
/// Entries live in a fixed array with an explicit length; removals during a
/// split use swap-remove, so sibling order within a node is not stable across
/// splits.
#[derive(Debug, Clone, Default)]
pub(crate) struct Node<T> {
    pub(crate) entries: ArrayVec<[Entry<T>; ENTRY_CAPACITY]>,
}

impl<T> Node<T> {
    pub(crate) fn new() -> Self {
        Self {
            entries: ArrayVec::new(),
        }
    }

    /// Recompute this node's bounding rectangle from scratch.
    ///
    /// Must not be called on an empty node.
    pub(crate) fn bounds(&self) -> Rect {
        let mut rect = self.entries[0].rect;
        for entry in &self.entries[1..] {
            rect.expand(&entry.rect);
        }
        rect
    }

    /// Index of the child whose rectangle needs the least area enlargement to
    /// cover `rect`. Ties go to the smaller current area, then to the first
    /// index. Changing either tie-break changes tree shape, which breaks
    /// reproducible compression.
    pub(crate) fn choose_least_enlargement(&self, rect: &Rect) -> usize {
        let mut best = 0;
        let mut best_enlargement = f64::INFINITY;
        let mut best_area = f64::INFINITY;
        for (i, entry) in self.entries.iter().enumerate() {
            let area = entry.rect.area();
            let enlargement = entry.rect.union_area(rect) - area;
            if enlargement < best_enlargement
                || (enlargement == best_enlargement && area < best_area)
            {
                best = i;
                best_enlargement = enlargement;
                best_area = area;
            }
        }
        best
    }
}

impl<T> Entry<T> {
    /// Recursive insert. `height` is the number of edges left to the leaf
    /// level. Returns whether `item` fell outside this entry's rectangle, in
    /// which case the caller must expand its own copy of the rectangle.
    pub(crate) fn insert(&mut self, item: Entry<T>, height: usize) -> bool {
        let item_rect = item.rect;
        let node = self.child.node_mut();
        if height == 0 {
            node.entries.push(item);
            return !self.rect.contains(&item_rect);
        }

        let index = node.choose_least_enlargement(&item_rect);
        let child = &mut node.entries[index];
        let mut grown = child.insert(item, height - 1);
        if grown {
            child.rect.expand(&item_rect);
            // Only keep propagating when this node's own box had to move too.
            grown = !self.rect.contains(&item_rect);
        }
        let overflowed = child.child.node().entries.len() == ENTRY_CAPACITY;
        if overflowed {
            let sibling = node.entries[index].split_largest_axis_edge_snap();
            node.entries.push(sibling);
        }
        grown
    }

    /// Split an overflowing node along the largest axis of its own rectangle.
    ///
    /// Each child snaps to whichever edge of that axis it sits closer to;
    /// exact ties are held back and then dealt one at a time to the smaller
    /// side, so both halves stay within one entry of each other even when
    /// every child ties. `self` keeps the left half (rectangle recomputed in
    /// full); the returned entry is the new right sibling.
    pub(crate) fn split_largest_axis_edge_snap(&mut self) -> Entry<T> {
        let axis = self.rect.largest_axis();
        let bounds = self.rect;
        let left = self.child.node_mut();
        let mut right = Node::new();
        let mut equals: ArrayVec<[Entry<T>; ENTRY_CAPACITY]> = ArrayVec::new();

        let mut i = 0;
        while i < left.entries.len() {
            let min_dist = left.entries[i].rect.min[axis] - bounds.min[axis];
            let max_dist = bounds.max[axis] - left.entries[i].rect.max[axis];
            if min_dist < max_dist {
                // stays left
                i += 1;
            } else {
                let entry = left.entries.swap_remove(i);
                if min_dist > max_dist {
                    right.entries.push(entry);
                } else {
                    equals.push(entry);
                }
            }
        }
        for entry in equals {
            if left.entries.len() < right.entries.len() {
                left.entries.push(entry);
            } else {
                right.entries.push(entry);
            }
        }

        self.rect = left.bounds();
        let rect = right.bounds();
        Entry {
            rect,
            child: Child::Node(Box::new(right)),
        }
    }

    /// Recursive range search with early exit. Returns `false` as soon as the
    /// visitor does, through every frame.
    pub(crate) fn search<F>(&self, target: &Rect, height: usize, visit: &mut F) -> bool
    where
        F: FnMut(&Rect, &T) -> bool,
    {
        let node = self.child.node();
        if height == 0 {
            for entry in &node.entries {
                if target.intersects(&entry.rect) && !visit(&entry.rect, entry.child.item()) {
                    return false;
                }
            }
        } else {
            for entry in &node.entries {
                if target.intersects(&entry.rect) && !entry.search(target, height - 1, visit) {
                    return false;
                }
            }
        }
        true
    }
}
