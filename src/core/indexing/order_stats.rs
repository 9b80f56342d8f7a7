// src/core/indexing/order_stats.rs

//! Sorting and median selection over point sequences, keyed on one coordinate.
//!
//! Used by the range tree while rebuilding subtrees: rebuilds sort by `y`
//! before handing points to the builder, and the primary builder picks its
//! split point with [`median_by_axis`]. Equal keys have no specified order.

use crate::core::geometry::{Axis, Coord, Point};
use std::cmp::Ordering;

/// Compares two points on a single coordinate.
pub fn cmp_on<T: Coord>(axis: Axis, a: &Point<T>, b: &Point<T>) -> Ordering {
    a.coord(axis).cmp(b.coord(axis))
}

/// Sorts `points` in place by the coordinate selected by `axis`.
pub fn sort_by_axis<T: Coord>(points: &mut [Point<T>], axis: Axis) {
    points.sort_by(|a, b| cmp_on(axis, a, b));
}

/// Owning form of [`sort_by_axis`].
pub fn sorted_by_axis<T: Coord>(mut points: Vec<Point<T>>, axis: Axis) -> Vec<Point<T>> {
    sort_by_axis(&mut points, axis);
    points
}

/// Returns the element of rank `len / 2` on `axis`, or `None` for empty input.
///
/// For even lengths this is the upper median. The input is left untouched;
/// selection runs on a scratch copy.
pub fn median_by_axis<T: Coord>(points: &[Point<T>], axis: Axis) -> Option<Point<T>> {
    if points.is_empty() {
        return None;
    }
    let mut scratch = points.to_vec();
    let rank = scratch.len() / 2;
    let (_, median, _) = scratch.select_nth_unstable_by(rank, |a, b| cmp_on(axis, a, b));
    Some(median.clone())
}

/// Returns true when `points` is non-decreasing on `axis`.
pub fn is_sorted_by_axis<T: Coord>(points: &[Point<T>], axis: Axis) -> bool {
    points.windows(2).all(|w| cmp_on(axis, &w[0], &w[1]) != Ordering::Greater)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::{Rng, SeedableRng};

    fn random_points(n: usize, seed: u64) -> Vec<Point<i32>> {
        let mut rng = StdRng::seed_from_u64(seed);
        (0..n)
            .map(|_| {
                let a = rng.gen_range(0..1000);
                Point::new(a, 1000 - a)
            })
            .collect()
    }

    #[test]
    fn test_sort_by_each_axis() {
        let points = random_points(100, 7);

        let by_x = sorted_by_axis(points.clone(), Axis::X);
        assert!(is_sorted_by_axis(&by_x, Axis::X));
        assert_eq!(by_x.len(), points.len());

        let by_y = sorted_by_axis(points, Axis::Y);
        assert!(is_sorted_by_axis(&by_y, Axis::Y));
        // y = 1000 - x, so sorting by y reverses the x order
        assert!(by_y.windows(2).all(|w| w[0].x >= w[1].x));
    }

    #[test]
    fn test_median_matches_sorted_rank() {
        let points = random_points(101, 11);
        let sorted = sorted_by_axis(points.clone(), Axis::X);

        let median = median_by_axis(&points, Axis::X).unwrap();
        assert_eq!(median.x, sorted[sorted.len() / 2].x);
    }

    #[test]
    fn test_median_of_even_length_is_upper() {
        let points = vec![Point::new(4, 0), Point::new(1, 0), Point::new(3, 0), Point::new(2, 0)];
        assert_eq!(median_by_axis(&points, Axis::X).unwrap().x, 3);
    }

    #[test]
    fn test_median_of_empty_and_singleton() {
        let empty: Vec<Point<i32>> = Vec::new();
        assert!(median_by_axis(&empty, Axis::Y).is_none());
        assert_eq!(median_by_axis(&[Point::new(5, 6)], Axis::Y), Some(Point::new(5, 6)));
    }

    #[test]
    fn test_median_with_duplicate_keys() {
        let points = vec![Point::new(5, 1), Point::new(5, 9), Point::new(5, 4), Point::new(1, 0)];
        assert_eq!(median_by_axis(&points, Axis::X).unwrap().x, 5);
    }
}
