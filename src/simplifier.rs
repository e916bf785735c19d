//! Two-stage simplification pipeline and its configuration surface.
//!
//! The pipeline composes the radial-distance pre-filter with the
//! Douglas-Peucker reducer: input -> (optional) radial filter ->
//! Douglas-Peucker -> output. The tolerance is validated and squared once
//! here; both stages consume the squared value.

use crate::douglas_peucker::douglas_peucker_indices_sq;
use crate::error::SimplifyError;
use crate::point::{PlanarPoint, Point2};
use crate::radial::radial_indices_sq;
use num_traits::Float;

/// Simplifies a polyline, keeping its shape within `tolerance`.
///
/// Runs the radial-distance pre-filter followed by Douglas-Peucker. With
/// `highest_quality` the pre-filter is skipped and Douglas-Peucker sees the
/// full input, trading speed for fidelity: the pre-filter can occasionally
/// discard a point the reducer would have kept. The conventional defaults
/// of this algorithm family are a tolerance of `1.0` and `highest_quality`
/// off.
///
/// Inputs of length 0 or 1 come back unchanged. For longer inputs the
/// first and last points are always in the output, and the output is an
/// order-preserving subsequence of the input; point records are cloned for
/// selection, never altered.
///
/// # Errors
///
/// [`SimplifyError::InvalidTolerance`] if `tolerance` is NaN, infinite, or
/// negative.
///
/// # Example
///
/// ```
/// use whittle::{simplify, Point2};
///
/// let track = vec![
///     Point2::new(0.0, 0.0),
///     Point2::new(1.0, 0.1),
///     Point2::new(2.0, -0.1),
///     Point2::new(3.0, 5.0),
///     Point2::new(4.0, 5.1),
///     Point2::new(5.0, 5.0),
/// ];
///
/// let thinned = simplify(&track, 1.0, false).unwrap();
/// assert!(thinned.len() < track.len());
/// assert_eq!(thinned[0], track[0]);
/// assert_eq!(*thinned.last().unwrap(), track[5]);
/// ```
pub fn simplify<P>(
    points: &[P],
    tolerance: P::Scalar,
    highest_quality: bool,
) -> Result<Vec<P>, SimplifyError>
where
    P: PlanarPoint + Clone,
{
    let indices = simplify_indices(points, tolerance, highest_quality)?;
    Ok(indices.into_iter().map(|i| points[i].clone()).collect())
}

/// Simplifies a polyline and returns the indices of kept points.
///
/// Same pipeline as [`simplify`], for callers that carry per-point
/// attributes alongside the coordinates or want to avoid cloning records.
/// Indices refer to the original input and come back in ascending order.
pub fn simplify_indices<P: PlanarPoint>(
    points: &[P],
    tolerance: P::Scalar,
    highest_quality: bool,
) -> Result<Vec<usize>, SimplifyError> {
    validate_tolerance(tolerance)?;
    Ok(pipeline_indices(points, tolerance * tolerance, highest_quality))
}

/// Runs both stages in squared space, composing index lists so the result
/// always refers to the caller's original input.
fn pipeline_indices<P: PlanarPoint>(
    points: &[P],
    sq_tolerance: P::Scalar,
    highest_quality: bool,
) -> Vec<usize> {
    if points.len() <= 1 {
        return (0..points.len()).collect();
    }

    if highest_quality {
        return douglas_peucker_indices_sq(points, sq_tolerance);
    }

    let kept = radial_indices_sq(points, sq_tolerance);
    let filtered: Vec<Point2<P::Scalar>> = kept
        .iter()
        .map(|&i| Point2::new(points[i].x(), points[i].y()))
        .collect();

    douglas_peucker_indices_sq(&filtered, sq_tolerance)
        .into_iter()
        .map(|j| kept[j])
        .collect()
}

fn validate_tolerance<F: Float>(tolerance: F) -> Result<(), SimplifyError> {
    if tolerance.is_finite() && tolerance >= F::zero() {
        Ok(())
    } else {
        Err(SimplifyError::InvalidTolerance {
            value: tolerance.to_f64().unwrap_or(f64::NAN),
        })
    }
}

/// A simplifier with configurable coordinate accessors.
///
/// Most callers implement [`PlanarPoint`] and use [`simplify`] directly.
/// `Simplifier` covers the remaining case: record types whose coordinate
/// fields cannot carry a trait impl (foreign types, differently-named
/// fields picked at a call site). The accessor pair is fixed at
/// construction and immutable for the life of the instance.
///
/// # Example
///
/// ```
/// use whittle::Simplifier;
///
/// struct Sample {
///     east: f64,
///     north: f64,
///     heart_rate: u32,
/// }
///
/// let samples = vec![
///     Sample { east: 0.0, north: 0.0, heart_rate: 102 },
///     Sample { east: 1.0, north: 0.05, heart_rate: 104 },
///     Sample { east: 2.0, north: 0.0, heart_rate: 103 },
/// ];
///
/// let simplifier = Simplifier::with_accessors(
///     |s: &Sample| s.east,
///     |s: &Sample| s.north,
/// );
/// let kept = simplifier.simplify_indices(&samples, 0.5, false).unwrap();
/// assert_eq!(kept, vec![0, 2]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct Simplifier<P, F> {
    x: fn(&P) -> F,
    y: fn(&P) -> F,
}

impl<P, F> Simplifier<P, F>
where
    P: PlanarPoint<Scalar = F>,
    F: Float,
{
    /// Creates a simplifier that reads coordinates through the point
    /// type's own [`PlanarPoint`] accessors.
    pub fn new() -> Self {
        Self {
            x: |p| p.x(),
            y: |p| p.y(),
        }
    }
}

impl<P, F> Default for Simplifier<P, F>
where
    P: PlanarPoint<Scalar = F>,
    F: Float,
{
    fn default() -> Self {
        Self::new()
    }
}

impl<P, F: Float> Simplifier<P, F> {
    /// Creates a simplifier with an explicit pair of coordinate
    /// extraction functions.
    pub fn with_accessors(x: fn(&P) -> F, y: fn(&P) -> F) -> Self {
        Self { x, y }
    }

    /// Simplifies a sequence of records through the configured accessors.
    ///
    /// Records are projected through the accessors once, the pipeline runs
    /// on the projection, and the output is assembled by cloning the
    /// selected original records.
    ///
    /// # Errors
    ///
    /// [`SimplifyError::InvalidTolerance`] if `tolerance` is NaN,
    /// infinite, or negative.
    pub fn simplify(
        &self,
        points: &[P],
        tolerance: F,
        highest_quality: bool,
    ) -> Result<Vec<P>, SimplifyError>
    where
        P: Clone,
    {
        let indices = self.simplify_indices(points, tolerance, highest_quality)?;
        Ok(indices.into_iter().map(|i| points[i].clone()).collect())
    }

    /// Simplifies through the configured accessors, returning indices of
    /// kept records in ascending order.
    pub fn simplify_indices(
        &self,
        points: &[P],
        tolerance: F,
        highest_quality: bool,
    ) -> Result<Vec<usize>, SimplifyError> {
        validate_tolerance(tolerance)?;

        let projected: Vec<Point2<F>> = points
            .iter()
            .map(|p| Point2::new((self.x)(p), (self.y)(p)))
            .collect();

        Ok(pipeline_indices(
            &projected,
            tolerance * tolerance,
            highest_quality,
        ))
    }
}
