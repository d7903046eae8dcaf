//! The axis-aligned rectangle type shared by the live tree and the
//! compressed search path.

use geo_traits::{CoordTrait, RectTrait};

/// An axis-aligned rectangle in two dimensions.
///
/// `min` and `max` are the lower-left and upper-right corners. For every axis
/// `min[axis] <= max[axis]`; a degenerate rectangle with `min == max` is a
/// point and is valid everywhere rectangles are accepted.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Rect {
    pub min: [f64; 2],
    pub max: [f64; 2],
}

impl Rect {
    /// Create a new rectangle from its two corners.
    pub fn new(min: [f64; 2], max: [f64; 2]) -> Self {
        debug_assert!(min[0] <= max[0] && min[1] <= max[1], "inverted corners");
        Self { min, max }
    }

    /// Create a degenerate rectangle covering a single point.
    pub fn from_point(coord: [f64; 2]) -> Self {
        Self {
            min: coord,
            max: coord,
        }
    }

    /// Create a rectangle from anything implementing [`RectTrait`].
    pub fn from_rect(rect: &impl RectTrait<T = f64>) -> Self {
        Self::new(
            [rect.min().x(), rect.min().y()],
            [rect.max().x(), rect.max().y()],
        )
    }

    /// Returns `true` if `self` and `other` share any point. Touching edges
    /// count as intersecting.
    #[inline]
    pub fn intersects(&self, other: &Rect) -> bool {
        for axis in 0..2 {
            if other.min[axis] > self.max[axis] || other.max[axis] < self.min[axis] {
                return false;
            }
        }
        true
    }

    /// Returns `true` if `other` lies fully inside `self` (closed bounds).
    #[inline]
    pub fn contains(&self, other: &Rect) -> bool {
        for axis in 0..2 {
            if other.min[axis] < self.min[axis] || other.max[axis] > self.max[axis] {
                return false;
            }
        }
        true
    }

    /// Grow `self` so that it covers `other`.
    #[inline]
    pub fn expand(&mut self, other: &Rect) {
        for axis in 0..2 {
            if other.min[axis] < self.min[axis] {
                self.min[axis] = other.min[axis];
            }
            if other.max[axis] > self.max[axis] {
                self.max[axis] = other.max[axis];
            }
        }
    }

    /// The area of this rectangle. Zero for degenerate rectangles.
    #[inline]
    pub fn area(&self) -> f64 {
        (self.max[0] - self.min[0]) * (self.max[1] - self.min[1])
    }

    /// The area of the smallest rectangle covering both `self` and `other`,
    /// computed without materializing the union.
    #[inline]
    pub fn union_area(&self, other: &Rect) -> f64 {
        let mut area = 1.0;
        for axis in 0..2 {
            let min = self.min[axis].min(other.min[axis]);
            let max = self.max[axis].max(other.max[axis]);
            area *= max - min;
        }
        area
    }

    /// The axis (0 = x, 1 = y) along which this rectangle is widest. Axis 0
    /// wins ties.
    #[inline]
    pub fn largest_axis(&self) -> usize {
        if self.max[1] - self.min[1] > self.max[0] - self.min[0] {
            1
        } else {
            0
        }
    }
}

/// A single coordinate.
///
/// Used in the implementation of RectTrait for Rect.
pub struct Coord {
    x: f64,
    y: f64,
}

impl CoordTrait for Coord {
    type T = f64;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn x(&self) -> Self::T {
        self.x
    }

    fn y(&self) -> Self::T {
        self.y
    }

    fn nth_or_panic(&self, n: usize) -> Self::T {
        match n {
            0 => self.x,
            1 => self.y,
            _ => panic!("Invalid index of coord"),
        }
    }
}

impl RectTrait for Rect {
    type T = f64;
    type CoordType<'a>
        = Coord
    where
        Self: 'a;

    fn dim(&self) -> geo_traits::Dimensions {
        geo_traits::Dimensions::Xy
    }

    fn min(&self) -> Self::CoordType<'_> {
        Coord {
            x: self.min[0],
            y: self.min[1],
        }
    }

    fn max(&self) -> Self::CoordType<'_> {
        Coord {
            x: self.max[0],
            y: self.max[1],
        }
    }
}
