//! whittle - 2D polyline simplification
//!
//! Dense coordinate sequences (GPS traces, digitized curves, vector paths)
//! carry far more points than their shape needs. This library thins them
//! within a caller-chosen tolerance by composing two stages: a fast
//! radial-distance pre-filter and an iterative Douglas-Peucker reducer.
//!
//! The common entry point is [`simplify`]:
//!
//! ```
//! use whittle::{simplify, Point2};
//!
//! let track = vec![
//!     Point2::new(0.0, 0.0),
//!     Point2::new(1.0, 0.1),
//!     Point2::new(2.0, -0.1),
//!     Point2::new(3.0, 5.0),
//!     Point2::new(4.0, 5.0),
//! ];
//!
//! let thinned = simplify(&track, 1.0, false).unwrap();
//! assert!(thinned.len() < track.len());
//! ```
//!
//! Any record type works once it implements [`PlanarPoint`]; for foreign
//! types, [`Simplifier::with_accessors`] takes a pair of coordinate
//! extraction functions instead. The individual stages are exported too
//! ([`radial()`], [`douglas_peucker()`]) for callers composing their own
//! pipeline, each paired with an index-returning variant that keeps
//! per-point attributes attached.

pub mod distance;
pub mod douglas_peucker;
pub mod error;
pub mod point;
pub mod radial;
pub mod simplifier;

pub use douglas_peucker::{douglas_peucker, douglas_peucker_indices};
pub use error::SimplifyError;
pub use point::{PlanarPoint, Point2};
pub use radial::{radial, radial_indices};
pub use simplifier::{simplify, simplify_indices, Simplifier};
