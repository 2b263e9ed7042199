use glam::IVec2;
#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A 2D rectangle aligned to the grid axes.
///
/// Rectangles are defined by their minimum (top-left) and maximum
/// (bottom-right) corners, both **inclusive**: a rect from `(1, 1)` to
/// `(8, 8)` covers 8x8 tiles. Containers produced by the space partitioner
/// and the rooms placed inside them are both represented this way, with a
/// room's outermost ring being its wall.
///
/// # Examples
///
/// ```
/// use oubliette_geometry::prelude::*;
///
/// let rect = Rect::new(IVec2::new(0, 0), IVec2::new(9, 4));
/// assert_eq!(rect.width(), 10);
/// assert_eq!(rect.height(), 5);
/// ```
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Rect {
    /// The minimum corner of the rectangle (inclusive).
    pub min: IVec2,
    /// The maximum corner of the rectangle (inclusive).
    pub max: IVec2,
}

impl Rect {
    /// Creates a new rectangle from two corner points.
    ///
    /// The order of points does not matter; the constructor will automatically
    /// determine the min and max bounds.
    #[inline]
    pub fn new(a: IVec2, b: IVec2) -> Self {
        Self {
            min: a.min(b),
            max: a.max(b),
        }
    }

    /// Creates a square rectangle of the given side length centred on a point.
    ///
    /// Side lengths are expected to be odd so the center tile is exact; an
    /// even side loses its last row and column.
    #[inline]
    pub fn centred_on(center: IVec2, side: i32) -> Self {
        let half = side / 2;
        Self::new(center - IVec2::splat(half), center + IVec2::splat(half))
    }
}

impl Rect {
    /// Get the width of the rectangle in tiles.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.max.x - self.min.x + 1
    }

    /// Get the height of the rectangle in tiles.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.max.y - self.min.y + 1
    }

    /// Returns the center tile of the rectangle (integer midpoint).
    #[inline]
    pub fn center(&self) -> IVec2 {
        (self.min + self.max) / 2
    }

    /// Check if a point lies inside the rectangle (corners inclusive).
    #[inline]
    pub fn contains(&self, point: IVec2) -> bool {
        point.x >= self.min.x
            && point.x <= self.max.x
            && point.y >= self.min.y
            && point.y <= self.max.y
    }

    /// Check if this rectangle overlaps another rectangle.
    #[inline]
    pub const fn intersects(&self, other: Self) -> bool {
        self.min.x <= other.max.x
            && self.max.x >= other.min.x
            && self.min.y <= other.max.y
            && self.max.y >= other.min.y
    }

    /// The rectangle shrunk by `amount` tiles on every side, if anything
    /// remains of it.
    #[inline]
    pub fn shrink(&self, amount: i32) -> Option<Self> {
        let min = self.min + IVec2::splat(amount);
        let max = self.max - IVec2::splat(amount);
        (min.x <= max.x && min.y <= max.y).then(|| Self { min, max })
    }

    /// Euclidean distance between this rectangle's center and another's.
    ///
    /// Used as the edge cost of the room graph.
    #[inline]
    pub fn distance_to(&self, other: Self) -> f32 {
        let a = self.center().as_vec2();
        let b = other.center().as_vec2();
        a.distance(b)
    }

    /// Returns an iterator over all tiles covered by the rectangle.
    pub fn points(self) -> RectIter {
        RectIter::new(self.min, self.max)
    }
}

impl IntoIterator for Rect {
    type IntoIter = RectIter;
    type Item = IVec2;

    #[inline]
    fn into_iter(self) -> Self::IntoIter {
        RectIter::new(self.min, self.max)
    }
}

/// Iterator over every tile of a [`Rect`] in scan order (row by row).
#[derive(Debug, Clone)]
pub struct RectIter {
    min: IVec2,
    max: IVec2,
    cursor: IVec2,
}

impl RectIter {
    /// Creates an iterator over the inclusive range `min..=max`.
    pub fn new(min: IVec2, max: IVec2) -> Self {
        Self {
            min,
            max,
            cursor: min,
        }
    }
}

impl Iterator for RectIter {
    type Item = IVec2;

    fn next(&mut self) -> Option<Self::Item> {
        if self.cursor.y > self.max.y {
            return None;
        }
        let current = self.cursor;
        self.cursor.x += 1;
        if self.cursor.x > self.max.x {
            self.cursor.x = self.min.x;
            self.cursor.y += 1;
        }
        Some(current)
    }
}
