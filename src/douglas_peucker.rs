//! Douglas-Peucker polyline reduction.
//!
//! Within each span the point of maximum perpendicular deviation from the
//! chord is found; if it deviates more than the tolerance it is kept and
//! the span splits in two, otherwise every interior point of the span is
//! discarded. Recursion is eliminated with an explicit span stack, so the
//! worst-case depth is bounded by heap memory rather than the call stack,
//! which matters for polylines of tens of thousands of points.

use crate::distance::sq_segment_dist;
use crate::point::PlanarPoint;
use num_traits::Zero;

/// Reduces a polyline with the Douglas-Peucker algorithm.
///
/// The first and last points are always preserved; every discarded point
/// lies within `tolerance` of the segment spanning its enclosing kept
/// span. Output order matches input order.
///
/// # Example
///
/// ```
/// use whittle::{douglas_peucker, Point2};
///
/// let points = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.1), // gentle rise, dropped
///     Point2::new(2.0, 1.0), // apex, kept
///     Point2::new(3.0, 0.1), // gentle fall, dropped
///     Point2::new(4.0, 0.0),
/// ];
///
/// let reduced = douglas_peucker(&points, 0.5);
/// assert_eq!(reduced.len(), 3);
/// ```
pub fn douglas_peucker<P>(points: &[P], tolerance: P::Scalar) -> Vec<P>
where
    P: PlanarPoint + Clone,
{
    douglas_peucker_indices(points, tolerance)
        .into_iter()
        .map(|i| points[i].clone())
        .collect()
}

/// Reduces a polyline and returns the indices of kept points.
pub fn douglas_peucker_indices<P: PlanarPoint>(points: &[P], tolerance: P::Scalar) -> Vec<usize> {
    douglas_peucker_indices_sq(points, tolerance * tolerance)
}

/// Squared-space core of the reducer.
///
/// Iterative: spans awaiting evaluation sit on an explicit stack, and a
/// per-index marker vector records retention. The markers are consumed in
/// ascending index order, so the output is deterministic regardless of the
/// order spans happen to be popped.
pub(crate) fn douglas_peucker_indices_sq<P: PlanarPoint>(
    points: &[P],
    sq_tolerance: P::Scalar,
) -> Vec<usize> {
    let n = points.len();
    if n < 2 {
        return (0..n).collect();
    }

    let mut keep = vec![false; n];
    keep[0] = true;
    keep[n - 1] = true;

    let mut stack = vec![(0, n - 1)];

    while let Some((first, last)) = stack.pop() {
        let mut max_sq_dist = P::Scalar::zero();
        let mut max_index = first;

        // Strict > : ties resolve to the first index reaching the maximum.
        for i in (first + 1)..last {
            let sq_dist = sq_segment_dist(&points[i], &points[first], &points[last]);
            if sq_dist > max_sq_dist {
                max_sq_dist = sq_dist;
                max_index = i;
            }
        }

        if max_sq_dist > sq_tolerance {
            keep[max_index] = true;
            stack.push((first, max_index));
            stack.push((max_index, last));
        }
    }

    keep.iter()
        .enumerate()
        .filter_map(|(i, &k)| if k { Some(i) } else { None })
        .collect()
}
