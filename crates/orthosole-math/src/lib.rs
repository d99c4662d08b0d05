#![warn(missing_docs)]

//! Math types for the orthosole geometry pipeline.
//!
//! Thin aliases over nalgebra for the insole geometry pipeline: 2D
//! contour points, 3D mesh points, interpolation helpers, and
//! tolerance constants for geometric comparisons.

use nalgebra::{Vector2, Vector3};

/// A point in 3D space.
pub type Point3 = nalgebra::Point3<f64>;

/// A vector in 3D space.
pub type Vec3 = Vector3<f64>;

/// A point on the 2D contour plane. `x` is the lateral axis, `y` the
/// lengthwise axis (mapped to world `z` at extrusion time).
pub type Point2 = nalgebra::Point2<f64>;

/// A vector in 2D space.
pub type Vec2 = Vector2<f64>;

/// Linear interpolation between two scalars.
pub fn lerp(a: f64, b: f64, t: f64) -> f64 {
    a + (b - a) * t
}

/// Tolerance constants for geometric comparisons.
#[derive(Debug, Clone, Copy)]
pub struct Tolerance {
    /// Linear distance tolerance in mm.
    pub linear: f64,
    /// Area tolerance in mm².
    pub area: f64,
}

impl Tolerance {
    /// Default preview-geometry tolerances (1e-6 mm linear, 1e-9 mm² area).
    pub const DEFAULT: Self = Self {
        linear: 1e-6,
        area: 1e-9,
    };

    /// Check if two 2D points are coincident within tolerance.
    pub fn points_equal(&self, a: &Point2, b: &Point2) -> bool {
        (a - b).norm() < self.linear
    }
}

impl Default for Tolerance {
    fn default() -> Self {
        Self::DEFAULT
    }
}
