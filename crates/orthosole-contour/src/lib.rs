#![warn(missing_docs)]

//! Insole footprint outline construction.
//!
//! Builds a closed, bilaterally symmetric 2D contour from an overall
//! width and length. The contour is a loop of six cubic Bézier segments
//! running through four named anatomical anchor points (heel, arch,
//! ball, toe) and their mirror images across the centerline, sampled
//! into a fixed-density point ring ready for extrusion.
//!
//! # Example
//!
//! ```
//! use orthosole_contour::{Outline, SAMPLES_PER_SEGMENT};
//!
//! let outline = Outline::build(80.0, 260.0);
//! assert_eq!(outline.points().len(), 6 * SAMPLES_PER_SEGMENT);
//! assert!(outline.area() > 0.0);
//! ```

mod outline;
mod segment;

pub use outline::{Anchors, Outline};
pub use segment::CubicSegment;

/// Number of line samples per Bézier segment.
///
/// Identical for every segment so that the top and bottom cap rings
/// produced downstream line up by index.
pub const SAMPLES_PER_SEGMENT: usize = 16;
