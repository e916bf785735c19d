//! Error types for simplification operations.

use thiserror::Error;

/// Errors that can occur when simplifying a polyline.
///
/// The algorithms themselves are total; the only failure class is a
/// contract violation at the call boundary, reported synchronously
/// before any point is processed.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum SimplifyError {
    /// Tolerance is NaN, infinite, or negative.
    #[error("tolerance must be finite and non-negative, got {value}")]
    InvalidTolerance {
        /// The rejected tolerance, widened to `f64` for reporting.
        value: f64,
    },
}
