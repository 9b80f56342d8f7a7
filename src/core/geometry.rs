// src/core/geometry.rs

//! Two-dimensional points and inclusive axis-aligned rectangles.

use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Coordinate domain of a range tree.
///
/// Coordinates must be totally ordered, so `f32`/`f64` are not accepted
/// directly; wrap them in an ordered type first.
pub trait Coord: Ord + Clone + Debug {}

impl<T> Coord for T where T: Ord + Clone + Debug {}

/// One of the two coordinates of a [`Point`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Axis {
    X,
    Y,
}

impl Axis {
    /// The other coordinate.
    pub const fn other(self) -> Self {
        match self {
            Self::X => Self::Y,
            Self::Y => Self::X,
        }
    }
}

/// A 2D point.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Point<T> {
    pub x: T,
    pub y: T,
}

impl<T> Point<T> {
    pub const fn new(x: T, y: T) -> Self {
        Point { x, y }
    }

    /// Borrow the coordinate selected by `axis`.
    pub const fn coord(&self, axis: Axis) -> &T {
        match axis {
            Axis::X => &self.x,
            Axis::Y => &self.y,
        }
    }
}

impl<T> From<(T, T)> for Point<T> {
    fn from((x, y): (T, T)) -> Self {
        Point::new(x, y)
    }
}

/// An inclusive axis-aligned rectangle given by its low and high corners.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Rectangle<T> {
    pub min: Point<T>,
    pub max: Point<T>,
}

impl<T: Coord> Rectangle<T> {
    /// Creates a rectangle from its low and high corners as given.
    ///
    /// The corners are not reordered; a rectangle whose `min` exceeds its `max`
    /// on either coordinate is empty.
    pub const fn new(min: Point<T>, max: Point<T>) -> Self {
        Rectangle { min, max }
    }

    /// Creates the smallest rectangle containing two arbitrary corners.
    pub fn from_corners(a: Point<T>, b: Point<T>) -> Self {
        let (min_x, max_x) = if a.x <= b.x { (a.x, b.x) } else { (b.x, a.x) };
        let (min_y, max_y) = if a.y <= b.y { (a.y, b.y) } else { (b.y, a.y) };
        Rectangle { min: Point::new(min_x, min_y), max: Point::new(max_x, max_y) }
    }

    /// Degenerate rectangle covering exactly one point.
    pub fn from_point(point: Point<T>) -> Self {
        Rectangle { min: point.clone(), max: point }
    }

    /// Check if the rectangle is valid (min <= max for both dimensions)
    pub fn is_valid(&self) -> bool {
        self.min.x <= self.max.x && self.min.y <= self.max.y
    }

    /// Inclusive containment test on both coordinates.
    pub fn contains_point(&self, point: &Point<T>) -> bool {
        self.min.x <= point.x
            && point.x <= self.max.x
            && self.min.y <= point.y
            && point.y <= self.max.y
    }

    /// The closed interval this rectangle spans on `axis`.
    pub const fn bounds(&self, axis: Axis) -> (&T, &T) {
        (self.min.coord(axis), self.max.coord(axis))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rectangle_containment_is_inclusive() {
        let rect = Rectangle::new(Point::new(0, 0), Point::new(10, 5));

        assert!(rect.contains_point(&Point::new(0, 0)));
        assert!(rect.contains_point(&Point::new(10, 5)));
        assert!(rect.contains_point(&Point::new(3, 4)));
        assert!(!rect.contains_point(&Point::new(11, 4)));
        assert!(!rect.contains_point(&Point::new(3, -1)));
    }

    #[test]
    fn test_from_corners_normalizes() {
        let rect = Rectangle::from_corners(Point::new(8, 1), Point::new(2, 7));
        assert_eq!(rect, Rectangle::new(Point::new(2, 1), Point::new(8, 7)));
        assert!(rect.is_valid());
    }

    #[test]
    fn test_inverted_rectangle_is_invalid_and_empty() {
        let rect = Rectangle::new(Point::new(5, 5), Point::new(1, 9));
        assert!(!rect.is_valid());
        assert!(!rect.contains_point(&Point::new(3, 6)));
    }

    #[test]
    fn test_bounds_per_axis() {
        let rect = Rectangle::new(Point::new(1, 2), Point::new(3, 4));
        assert_eq!(rect.bounds(Axis::X), (&1, &3));
        assert_eq!(rect.bounds(Axis::Y), (&2, &4));
        assert_eq!(Axis::X.other(), Axis::Y);
    }
}
