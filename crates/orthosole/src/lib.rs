#![warn(missing_docs)]

//! Parametric orthotic-insole preview mesh generation.
//!
//! Converts a handful of scalar shape parameters — overall width,
//! length, thickness and a detailed-relief flag — into a renderable
//! triangle mesh: a symmetric curved footprint outline, swept into a
//! capped solid, optionally sculpted into an anatomical thickness
//! relief with a heel cup, finished with recomputed lighting normals.
//!
//! The whole pipeline is a pure function of its parameters: no stage
//! retains state between calls, and every call allocates a fresh
//! [`TriangleMesh`] the caller can atomically swap into its renderer.
//!
//! # Example
//!
//! ```
//! use orthosole::{generate, InsoleParams};
//!
//! let params = InsoleParams::new(80.0, 260.0, 6.0, true);
//! let mesh = generate(&params).unwrap();
//! assert!(mesh.num_triangles() > 0);
//! ```

mod cache;
mod error;

pub use orthosole_contour;
pub use orthosole_math;
pub use orthosole_mesh;

pub use cache::MeshCache;
pub use error::{InsoleError, Result};
pub use orthosole_contour::{Anchors, CubicSegment, Outline, SAMPLES_PER_SEGMENT};
pub use orthosole_mesh::{extrude, recompute_normals, sculpt, ReliefProfile, TriangleMesh};

use orthosole_math::Tolerance;
use serde::{Deserialize, Serialize};

/// Validated overall footprint dimensions, in millimeters (or any
/// consistent unit).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Dimensions {
    /// Overall footprint width.
    pub width: f64,
    /// Overall footprint length, heel to toe.
    pub length: f64,
    /// Extrusion height of the flat solid.
    pub thickness: f64,
}

impl Dimensions {
    /// Create dimensions, rejecting non-positive or non-finite values.
    pub fn new(width: f64, length: f64, thickness: f64) -> Result<Self> {
        let dims = Self {
            width,
            length,
            thickness,
        };
        dims.validate()?;
        Ok(dims)
    }

    /// Check all three dimensions are strictly positive and finite.
    ///
    /// Deserialized values bypass [`Dimensions::new`], so the pipeline
    /// re-validates before any geometry work starts.
    pub fn validate(&self) -> Result<()> {
        for (name, value) in [
            ("width", self.width),
            ("length", self.length),
            ("thickness", self.thickness),
        ] {
            if !value.is_finite() || value <= 0.0 {
                return Err(InsoleError::InvalidDimension { name, value });
            }
        }
        Ok(())
    }

    /// Half the overall width; the lateral extent on each side of the
    /// centerline.
    pub fn half_width(&self) -> f64 {
        self.width / 2.0
    }
}

/// Full parameter set for one mesh generation.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct InsoleParams {
    /// Footprint dimensions.
    #[serde(flatten)]
    pub dimensions: Dimensions,
    /// Sculpt the top surface into the anatomical relief instead of
    /// leaving it flat.
    #[serde(default)]
    pub detailed_relief: bool,
}

impl InsoleParams {
    /// Bundle raw parameter values. Validation happens in [`generate`].
    pub fn new(width: f64, length: f64, thickness: f64, detailed_relief: bool) -> Self {
        Self {
            dimensions: Dimensions {
                width,
                length,
                thickness,
            },
            detailed_relief,
        }
    }
}

/// Run the full pipeline: outline → extrude → optional relief →
/// normals.
///
/// Returns a fresh mesh on every call. Fails fast with
/// [`InsoleError::InvalidDimension`] before any geometry work, and with
/// [`InsoleError::DegenerateOutline`] if the sampled outline encloses
/// no usable area (a second gate; unreachable for dimensions that pass
/// the first).
pub fn generate(params: &InsoleParams) -> Result<TriangleMesh> {
    let dims = params.dimensions;
    dims.validate()?;

    let outline = Outline::build(dims.width, dims.length);
    let area = outline.area();
    if area < Tolerance::DEFAULT.area {
        return Err(InsoleError::DegenerateOutline { area });
    }

    let mut mesh = orthosole_mesh::extrude(&outline, dims.thickness);
    if params.detailed_relief {
        orthosole_mesh::sculpt(&mut mesh, dims.width, dims.length, dims.thickness);
    }
    orthosole_mesh::recompute_normals(&mut mesh);

    Ok(mesh)
}
