use itertools::Itertools;
use rayon::prelude::*;

use crate::point::{Point, SquaredDistance};

/// An unordered pair of distinct points, `first < second`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pair {
    pub first: usize,
    pub second: usize,
    pub distance_squared: SquaredDistance,
}

/// Every pair of points, closest first.
///
/// Pairs are enumerated as `(0, 1), (0, 2), .., (1, 2), ..` and then stably
/// sorted, so equally distant pairs keep that lexicographic order.
#[tracing::instrument(skip(points), fields(points = points.len()))]
pub fn sorted_pairs(points: &[Point]) -> Vec<Pair> {
    let mut pairs = (0..points.len())
        .tuple_combinations()
        .map(|(first, second)| Pair {
            first,
            second,
            distance_squared: points[first].distance_squared(&points[second]),
        })
        .collect::<Vec<_>>();

    // `par_sort_by_key` is stable, which the tie-break relies on.
    pairs.par_sort_by_key(|pair| pair.distance_squared);

    tracing::debug!(pairs = pairs.len(), "sorted pairs");
    pairs
}

#[cfg(test)]
mod tests {
    use super::*;

    fn points(coords: &[&[i64]]) -> Vec<Point> {
        coords
            .iter()
            .enumerate()
            .map(|(id, c)| Point::new(id, c.to_vec()))
            .collect()
    }

    #[test]
    fn enumerates_every_pair_once() {
        let pairs = sorted_pairs(&points(&[&[0], &[5], &[9], &[20], &[21]]));

        assert_eq!(pairs.len(), 10);
        let unique = pairs.iter().map(|p| (p.first, p.second)).unique().count();
        assert_eq!(unique, 10);
        assert!(pairs.iter().all(|p| p.first < p.second));
    }

    #[test]
    fn closest_pairs_come_first() {
        let pairs = sorted_pairs(&points(&[&[0, 0], &[10, 10], &[0, 1], &[10, 12]]));

        assert_eq!((pairs[0].first, pairs[0].second), (0, 2));
        assert_eq!((pairs[1].first, pairs[1].second), (1, 3));
        assert!(pairs
            .iter()
            .tuple_windows()
            .all(|(a, b)| a.distance_squared <= b.distance_squared));
    }

    #[test]
    fn ties_keep_enumeration_order() {
        // Corners of a unit square: four sides of length 1, two diagonals.
        let pairs = sorted_pairs(&points(&[&[0, 0], &[0, 1], &[1, 0], &[1, 1]]));

        let order = pairs.iter().map(|p| (p.first, p.second)).collect::<Vec<_>>();
        assert_eq!(order, vec![(0, 1), (0, 2), (1, 3), (2, 3), (0, 3), (1, 2)]);
    }

    #[test]
    fn fewer_than_two_points_have_no_pairs() {
        assert!(sorted_pairs(&[]).is_empty());
        assert!(sorted_pairs(&points(&[&[1, 2, 3]])).is_empty());
    }
}
