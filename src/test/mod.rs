//! Shared test helpers and cross-component integration tests.

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::compress::PayloadResolver;
use crate::rect::Rect;
use crate::rtree::constants::MAX_ENTRIES;
use crate::rtree::node::{Child, Entry};
use crate::rtree::RTree;

/// Resolver over a slice of rectangles indexed by payload id.
pub(crate) struct SliceResolver<'a>(pub(crate) &'a [Rect]);

impl PayloadResolver for SliceResolver<'_> {
    type Item = Rect;

    fn resolve(&self, id: u32) -> Rect {
        self.0[id as usize]
    }

    fn rect(&self, item: &Rect) -> Rect {
        *item
    }
}

/// A closed polygon ring resolving ids to its line segments, standing in for
/// an application geometry collaborator.
pub(crate) struct Ring {
    points: Vec<[f64; 2]>,
}

impl Ring {
    pub(crate) fn new(points: Vec<[f64; 2]>) -> Self {
        Self { points }
    }

    pub(crate) fn num_segments(&self) -> usize {
        self.points.len()
    }

    /// Segment `index`, wrapping from the last point back to the first.
    pub(crate) fn segment_at(&self, index: usize) -> ([f64; 2], [f64; 2]) {
        let a = self.points[index];
        let b = if index == self.points.len() - 1 {
            self.points[0]
        } else {
            self.points[index + 1]
        };
        (a, b)
    }
}

impl PayloadResolver for Ring {
    type Item = ([f64; 2], [f64; 2]);

    fn resolve(&self, id: u32) -> Self::Item {
        self.segment_at(id as usize)
    }

    fn rect(&self, item: &Self::Item) -> Rect {
        let (a, b) = item;
        Rect::new(
            [a[0].min(b[0]), a[1].min(b[1])],
            [a[0].max(b[0]), a[1].max(b[1])],
        )
    }
}

pub(crate) fn random_rects(n: usize, seed: u64) -> Vec<Rect> {
    let mut rng = StdRng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let x = rng.gen_range(0.0..1000.0);
            let y = rng.gen_range(0.0..1000.0);
            let w = rng.gen_range(0.0..30.0);
            let h = rng.gen_range(0.0..30.0);
            Rect::new([x, y], [x + w, y + h])
        })
        .collect()
}

pub(crate) fn build_tree(rects: &[Rect]) -> RTree<u32> {
    let mut tree = RTree::new();
    for (id, rect) in rects.iter().enumerate() {
        tree.insert(rect.min, rect.max, id as u32);
    }
    tree
}

/// The ground truth for any query: a linear scan.
pub(crate) fn naive_search(rects: &[Rect], query: &Rect) -> Vec<u32> {
    rects
        .iter()
        .enumerate()
        .filter(|(_, rect)| rect.intersects(query))
        .map(|(id, _)| id as u32)
        .collect()
}

/// Walk the whole tree checking that every stored rectangle is the exact
/// union of what it bounds and that entry counts stay within fanout limits.
pub(crate) fn check_invariants<T>(tree: &RTree<T>) {
    fn check_entry<T>(entry: &Entry<T>, height: usize, is_root: bool) {
        let node = entry.child.node();
        assert!(node.entries.len() <= MAX_ENTRIES, "node over fanout");
        if !is_root {
            assert!(node.entries.len() >= 2, "underfull non-root node");
        } else {
            assert!(!node.entries.is_empty(), "empty root for non-empty tree");
        }
        assert_eq!(entry.rect, node.bounds(), "stale bounding rectangle");
        if height > 0 {
            for child in &node.entries {
                check_entry(child, height - 1, false);
            }
        } else {
            for child in &node.entries {
                assert!(matches!(child.child, Child::Item(_)));
                assert!(entry.rect.contains(&child.rect));
            }
        }
    }
    if let Some(root) = &tree.root {
        check_entry(root, tree.height, true);
    }
}

mod integration {
    use super::*;
    use crate::compress::search_compressed;

    fn random_queries(n: usize, seed: u64) -> Vec<Rect> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|_| {
                let x = rng.gen_range(-50.0..1000.0);
                let y = rng.gen_range(-50.0..1000.0);
                let w = rng.gen_range(0.0..200.0);
                let h = rng.gen_range(0.0..200.0);
                Rect::new([x, y], [x + w, y + h])
            })
            .collect()
    }

    #[test]
    fn live_search_is_complete_on_random_data() {
        for seed in 0..4 {
            let rects = random_rects(500, seed);
            let tree = build_tree(&rects);
            check_invariants(&tree);

            for query in random_queries(30, seed + 100) {
                let mut found = vec![];
                tree.search(query.min, query.max, |_, id| {
                    found.push(*id);
                    true
                });
                found.sort();
                assert_eq!(found, naive_search(&rects, &query));
            }
        }
    }

    #[test]
    fn compressed_search_matches_live_on_random_data() {
        for seed in 10..13 {
            let rects = random_rects(800, seed);
            let tree = build_tree(&rects);
            let buf = tree.compress().into_inner();
            let resolver = SliceResolver(&rects);

            let mut queries = random_queries(30, seed + 100);
            // Full-extent and guaranteed-empty queries on top of the random
            // ones.
            queries.push(tree.bounds().unwrap());
            queries.push(Rect::new([-500., -500.], [-400., -400.]));

            for query in queries {
                let mut live = vec![];
                tree.search(query.min, query.max, |_, id| {
                    live.push(*id);
                    true
                });
                let mut compressed = vec![];
                search_compressed(&buf, query.min, query.max, &resolver, |_, id| {
                    compressed.push(id);
                    true
                })
                .unwrap();
                assert_eq!(live, compressed);
            }
        }
    }

    #[test]
    fn id_widths_escalate_with_many_items() {
        // Past 255 items some leaves hold ids over one byte; the format must
        // still round-trip exactly.
        let rects = random_rects(2000, 42);
        let tree = build_tree(&rects);
        let buf = tree.compress().into_inner();
        let resolver = SliceResolver(&rects);

        let query = tree.bounds().unwrap();
        let mut compressed = vec![];
        search_compressed(&buf, query.min, query.max, &resolver, |_, id| {
            compressed.push(id);
            true
        })
        .unwrap();
        compressed.sort();
        assert_eq!(compressed, (0..2000).collect::<Vec<_>>());
    }

    #[test]
    fn ring_segments_round_trip() {
        // A closed ring of segments around a circle; the resolver's precise
        // rectangles drive the final filter at the leaves.
        let n = 120;
        let points: Vec<[f64; 2]> = (0..n)
            .map(|i| {
                let angle = (i as f64) / (n as f64) * std::f64::consts::TAU;
                [100. * angle.cos(), 100. * angle.sin()]
            })
            .collect();
        let ring = Ring::new(points);

        let mut tree = RTree::new();
        let mut segment_rects = vec![];
        for i in 0..ring.num_segments() {
            let rect = ring.rect(&ring.segment_at(i));
            tree.insert(rect.min, rect.max, i as u32);
            segment_rects.push(rect);
        }
        check_invariants(&tree);
        let buf = tree.compress().into_inner();

        for query in [
            Rect::new([90., -10.], [110., 10.]),
            Rect::new([-10., -10.], [10., 10.]), // center: no segments
            Rect::new([-200., -200.], [200., 200.]),
        ] {
            let mut compressed = vec![];
            search_compressed(&buf, query.min, query.max, &ring, |_, id| {
                compressed.push(id);
                true
            })
            .unwrap();
            compressed.sort();
            assert_eq!(compressed, naive_search(&segment_rects, &query));
        }
    }
}
