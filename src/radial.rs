//! Radial-distance pre-filtering.
//!
//! A single O(n) forward pass that drops points lying within the tolerance
//! radius of the last kept point. On dense inputs (GPS traces, digitized
//! curves) this cheaply removes the bulk of redundant points before the
//! more expensive Douglas-Peucker stage runs.

use crate::distance::sq_dist;
use crate::point::PlanarPoint;

/// Filters a polyline by minimum point-to-point distance.
///
/// Keeps the first point, then every point strictly farther than
/// `tolerance` from the most recently kept point, and always the last
/// point. No backtracking: a kept point is never reconsidered.
///
/// # Example
///
/// ```
/// use whittle::{radial, Point2};
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(0.1, 0.0), // within tolerance of (0, 0), dropped
///     Point2::new(2.0, 0.0),
///     Point2::new(2.1, 0.0), // within tolerance of (2, 0), but last: kept
/// ];
///
/// let filtered = radial(&points, 1.0);
/// assert_eq!(filtered.len(), 3);
/// ```
pub fn radial<P>(points: &[P], tolerance: P::Scalar) -> Vec<P>
where
    P: PlanarPoint + Clone,
{
    radial_indices(points, tolerance)
        .into_iter()
        .map(|i| points[i].clone())
        .collect()
}

/// Filters a polyline and returns the indices of kept points.
///
/// Useful when per-point attributes (timestamps, elevations) must stay
/// associated with the surviving coordinates.
pub fn radial_indices<P: PlanarPoint>(points: &[P], tolerance: P::Scalar) -> Vec<usize> {
    radial_indices_sq(points, tolerance * tolerance)
}

/// Squared-space core of the radial filter.
///
/// `sq_tolerance` must already be squared; the pipeline squares the
/// caller's tolerance exactly once and both stages consume it.
pub(crate) fn radial_indices_sq<P: PlanarPoint>(
    points: &[P],
    sq_tolerance: P::Scalar,
) -> Vec<usize> {
    if points.len() <= 1 {
        return (0..points.len()).collect();
    }

    let mut kept = Vec::with_capacity(points.len() / 2);
    kept.push(0);
    let mut prev = 0;

    for i in 1..points.len() {
        if sq_dist(&points[i], &points[prev]) > sq_tolerance {
            kept.push(i);
            prev = i;
        }
    }

    // The last point anchors the shape even when it sits within tolerance
    // of its predecessor.
    let last = points.len() - 1;
    if prev != last {
        kept.push(last);
    }

    kept
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::point::Point2;

    #[test]
    fn test_radial_basic() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.1, 0.0),
            Point2::new(0.2, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(2.05, 0.0),
            Point2::new(4.0, 0.0),
        ];

        let filtered = radial(&points, 1.0);

        assert_eq!(filtered.len(), 3);
        assert_eq!(filtered[0], points[0]);
        assert_eq!(filtered[1], points[3]);
        assert_eq!(filtered[2], points[5]);
    }

    #[test]
    fn test_radial_degenerates_to_endpoints() {
        // Every interior point within tolerance: only first and last survive
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.01, 0.0),
            Point2::new(0.02, 0.0),
            Point2::new(0.03, 0.0),
        ];

        let filtered = radial(&points, 1.0);

        assert_eq!(filtered.len(), 2);
        assert_eq!(filtered[0], points[0]);
        assert_eq!(filtered[1], points[3]);
    }

    #[test]
    fn test_radial_last_point_forced() {
        // Last point is within tolerance of the previously kept point but
        // must still be appended.
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(5.0, 0.0),
            Point2::new(5.1, 0.0),
        ];

        let indices = radial_indices(&points, 1.0);
        assert_eq!(indices, vec![0, 1, 2]);
    }

    #[test]
    fn test_radial_at_tolerance_is_dropped() {
        // Comparison is strict: a point exactly at the tolerance radius is
        // not kept.
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 0.0),
            Point2::new(3.0, 0.0),
        ];

        let indices = radial_indices(&points, 1.0);
        assert_eq!(indices, vec![0, 2]);
    }

    #[test]
    fn test_radial_tiny_inputs() {
        let empty: Vec<Point2<f64>> = vec![];
        assert!(radial(&empty, 1.0).is_empty());

        let single = vec![Point2::new(1.0, 1.0)];
        assert_eq!(radial(&single, 1.0).len(), 1);
    }

    #[test]
    fn test_radial_indices_track_originals() {
        let points = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.1, 0.0),
            Point2::new(2.0, 0.0),
            Point2::new(4.0, 0.0),
        ];

        assert_eq!(radial_indices(&points, 1.0), vec![0, 2, 3]);
    }

    #[test]
    fn test_radial_f32() {
        let points: Vec<Point2<f32>> = vec![
            Point2::new(0.0, 0.0),
            Point2::new(0.1, 0.0),
            Point2::new(2.0, 0.0),
        ];

        assert_eq!(radial(&points, 1.0).len(), 2);
    }
}
