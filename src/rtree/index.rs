use geo_traits::{CoordTrait, RectTrait};

use crate::rect::Rect;
use crate::rtree::constants::ENTRY_CAPACITY;
use crate::rtree::node::{Child, Entry, Node};

/// A mutable two-dimensional R-tree.
///
/// Entries are inserted one at a time; each insert descends by least area
/// enlargement and overflowing nodes split along their largest axis. Range
/// queries visit entries depth-first in stored order, with an early-exit
/// visitor. There is no removal: a finished tree is meant to be frozen into
/// bytes with [`compress`][RTree::compress] and queried from there.
///
/// ```
/// use rtree_compress::RTree;
///
/// let mut tree = RTree::new();
/// tree.insert([0., 0.], [2., 2.], "a");
/// tree.insert([1., 1.], [3., 3.], "b");
/// tree.insert([5., 5.], [6., 6.], "c");
///
/// let mut found = vec![];
/// tree.search([0., 0.], [4., 4.], |_rect, value| {
///     found.push(*value);
///     true
/// });
/// assert_eq!(found, vec!["a", "b"]);
/// ```
#[derive(Debug, Clone)]
pub struct RTree<T> {
    pub(crate) root: Option<Entry<T>>,
    pub(crate) height: usize,
    num_items: usize,
}

impl<T> Default for RTree<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RTree<T> {
    /// Create a new, empty tree.
    pub fn new() -> Self {
        Self {
            root: None,
            height: 0,
            num_items: 0,
        }
    }

    /// The number of items inserted so far.
    pub fn len(&self) -> usize {
        self.num_items
    }

    /// Returns `true` if nothing has been inserted.
    pub fn is_empty(&self) -> bool {
        self.num_items == 0
    }

    /// The number of edges from the root to the leaf level. Zero for an empty
    /// tree or one whose root is itself a leaf.
    pub fn height(&self) -> usize {
        self.height
    }

    /// The bounding rectangle of everything inserted, or `None` for an empty
    /// tree.
    pub fn bounds(&self) -> Option<Rect> {
        self.root.as_ref().map(|root| root.rect)
    }

    /// Insert one item with the given bounding rectangle.
    ///
    /// Degenerate rectangles (`min == max`) are accepted. Corners must be
    /// ordered per axis; inverted corners are a caller bug and trip a debug
    /// assertion.
    pub fn insert(&mut self, min: [f64; 2], max: [f64; 2], value: T) {
        let item = Entry {
            rect: Rect::new(min, max),
            child: Child::Item(value),
        };
        let item_rect = item.rect;

        let root = self.root.get_or_insert_with(|| Entry {
            rect: item_rect,
            child: Child::Node(Box::new(Node::new())),
        });
        if root.insert(item, self.height) {
            root.rect.expand(&item_rect);
        }
        if root.child.node().entries.len() == ENTRY_CAPACITY {
            self.grow_root();
        }
        self.num_items += 1;
    }

    /// Insert one item located at a single point.
    pub fn insert_point(&mut self, coord: [f64; 2], value: T) {
        self.insert(coord, coord, value);
    }

    /// Insert one item bounded by anything implementing [`RectTrait`].
    pub fn insert_rect(&mut self, rect: &impl RectTrait<T = f64>, value: T) {
        self.insert(
            [rect.min().x(), rect.min().y()],
            [rect.max().x(), rect.max().y()],
            value,
        );
    }

    /// Split the overflowing root in place and push the tree up one level:
    /// the new root is an internal node holding exactly the old root and its
    /// split sibling.
    fn grow_root(&mut self) {
        let Some(mut old_root) = self.root.take() else {
            return;
        };
        let sibling = old_root.split_largest_axis_edge_snap();
        let mut node = Node::new();
        node.entries.push(old_root);
        node.entries.push(sibling);
        let rect = node.bounds();
        self.root = Some(Entry {
            rect,
            child: Child::Node(Box::new(node)),
        });
        self.height += 1;
    }

    /// Visit every item whose rectangle intersects the query rectangle.
    ///
    /// Touching edges count as intersecting. Traversal is depth-first in
    /// stored order; returning `false` from the visitor stops it immediately.
    pub fn search<F>(&self, min: [f64; 2], max: [f64; 2], mut visit: F)
    where
        F: FnMut(&Rect, &T) -> bool,
    {
        let Some(root) = &self.root else {
            return;
        };
        let target = Rect::new(min, max);
        if target.intersects(&root.rect) {
            root.search(&target, self.height, &mut visit);
        }
    }

    /// Visit every item intersecting anything implementing [`RectTrait`].
    pub fn search_rect<F>(&self, rect: &impl RectTrait<T = f64>, visit: F)
    where
        F: FnMut(&Rect, &T) -> bool,
    {
        self.search(
            [rect.min().x(), rect.min().y()],
            [rect.max().x(), rect.max().y()],
            visit,
        );
    }
}
