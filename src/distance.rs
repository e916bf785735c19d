//! Squared-distance helpers shared by the simplification stages.
//!
//! Everything here stays in squared space: the tolerance is squared once at
//! the pipeline boundary and compared against squared distances, so no
//! square root is ever taken on the hot path.

use crate::point::PlanarPoint;
use num_traits::{One, Zero};

/// Squared Euclidean distance between two points.
#[inline]
pub fn sq_dist<P: PlanarPoint>(a: &P, b: &P) -> P::Scalar {
    let dx = a.x() - b.x();
    let dy = a.y() - b.y();
    dx * dx + dy * dy
}

/// Squared distance from `p` to the closed segment `a`–`b`.
///
/// Projects `p` onto the line through `a` and `b` and clamps the projection
/// parameter to the segment: `t > 1` resolves to `b`, `0 < t <= 1` to the
/// interpolated foot point, and `t <= 0` to `a`. A degenerate segment
/// (`a == b`, exact floating-point comparison of the deltas) resolves to
/// `a`, so the result is the plain point-to-point squared distance and no
/// division occurs.
pub fn sq_segment_dist<P: PlanarPoint>(p: &P, a: &P, b: &P) -> P::Scalar {
    let mut x = a.x();
    let mut y = a.y();
    let dx = b.x() - x;
    let dy = b.y() - y;

    if dx != P::Scalar::zero() || dy != P::Scalar::zero() {
        let t = ((p.x() - x) * dx + (p.y() - y) * dy) / (dx * dx + dy * dy);

        if t > P::Scalar::one() {
            x = b.x();
            y = b.y();
        } else if t > P::Scalar::zero() {
            x = x + dx * t;
            y = y + dy * t;
        }
    }

    let dx = p.x() - x;
    let dy = p.y() - y;
    dx * dx + dy * dy
}
