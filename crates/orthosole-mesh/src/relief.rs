//! Relief sculpting: anatomical top-surface height remapping.

use orthosole_math::lerp;

use crate::TriangleMesh;

/// Lengthwise thickness profile breakpoints as `(t, thickness fraction)`
/// pairs over normalized length `t ∈ [0, 1]`: a slightly lowered heel,
/// a raised arch crest, and a forefoot that tapers toward the toe.
pub const PROFILE_BREAKPOINTS: [(f64, f64); 4] = [(0.0, 0.8), (0.3, 1.0), (0.7, 0.6), (1.0, 0.2)];

/// Fraction of the length from the heel over which the heel cup is
/// carved.
pub const HEEL_CUP_EXTENT: f64 = 0.15;

/// Heel-cup depth at the centerline, as a fraction of the thickness.
pub const HEEL_CUP_DEPTH: f64 = 0.10;

/// Fractional tolerance for recognizing top-surface vertices. Wide
/// enough to absorb the f32 rounding of the stored positions.
const TOP_SELECT_TOL: f64 = 1e-5;

/// The piecewise-linear lengthwise thickness profile.
///
/// Mostly a convenience wrapper for evaluating [`PROFILE_BREAKPOINTS`]
/// against a concrete thickness.
#[derive(Debug, Clone, Copy)]
pub struct ReliefProfile {
    thickness: f64,
}

impl ReliefProfile {
    /// Profile for a solid of the given thickness.
    pub fn new(thickness: f64) -> Self {
        Self { thickness }
    }

    /// Target surface height at normalized length `t`.
    pub fn height_at(&self, t: f64) -> f64 {
        profile_height(t, self.thickness)
    }
}

/// Evaluate the piecewise-linear thickness profile at `t ∈ [0, 1]`.
pub fn profile_height(t: f64, thickness: f64) -> f64 {
    let t = t.clamp(0.0, 1.0);
    for pair in PROFILE_BREAKPOINTS.windows(2) {
        let (t0, f0) = pair[0];
        let (t1, f1) = pair[1];
        if t <= t1 {
            let local = (t - t0) / (t1 - t0);
            return lerp(f0, f1, local) * thickness;
        }
    }
    let (_, last) = PROFILE_BREAKPOINTS[PROFILE_BREAKPOINTS.len() - 1];
    last * thickness
}

/// Heel-cup carve depth at normalized length `t` and lateral position
/// `x`.
///
/// Maximal at the centerline, fading to zero at `|x| == halfWidth`;
/// zero everywhere outside the heel region.
pub fn heel_cup_depth(t: f64, x: f64, half_width: f64, thickness: f64) -> f64 {
    if t >= HEEL_CUP_EXTENT {
        return 0.0;
    }
    let lateral = (x.abs() / half_width).min(1.0);
    HEEL_CUP_DEPTH * thickness * (1.0 - lateral)
}

/// Sculpt the top surface of a freshly extruded flat mesh.
///
/// Every vertex sitting at the extrusion height (top cap and wall top,
/// within tolerance) gets its `y` replaced by the profile height at its
/// lengthwise position, minus the heel-cup carve. X/Z coordinates and
/// the index list are untouched, so toggling the relief changes only
/// the position and normal buffers.
///
/// Deterministic for fixed inputs. Callers always sculpt from the flat
/// extrusion, never from an already-sculpted mesh.
pub fn sculpt(mesh: &mut TriangleMesh, width: f64, length: f64, thickness: f64) {
    let half_width = width / 2.0;
    let profile = ReliefProfile::new(thickness);
    // Tolerance scales with the thickness so that thin solids never
    // sweep the bottom ring into the selection.
    let select_tol = thickness * TOP_SELECT_TOL;

    for i in 0..mesh.num_vertices() {
        let [x, y, z] = mesh.position(i);
        if ((y as f64) - thickness).abs() > select_tol {
            continue;
        }

        let t = (z as f64 / length).clamp(0.0, 1.0);
        let h = profile.height_at(t) - heel_cup_depth(t, x as f64, half_width, thickness);
        mesh.positions[i * 3 + 1] = h as f32;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_profile_breakpoint_values() {
        let thickness = 10.0;
        assert_relative_eq!(profile_height(0.0, thickness), 8.0, epsilon = 1e-12);
        assert_relative_eq!(profile_height(0.3, thickness), 10.0, epsilon = 1e-12);
        assert_relative_eq!(profile_height(0.7, thickness), 6.0, epsilon = 1e-12);
        assert_relative_eq!(profile_height(1.0, thickness), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_profile_linear_between_breakpoints() {
        let thickness = 10.0;
        assert_relative_eq!(profile_height(0.15, thickness), 9.0, epsilon = 1e-12);
        assert_relative_eq!(profile_height(0.5, thickness), 8.0, epsilon = 1e-12);
        assert_relative_eq!(profile_height(0.85, thickness), 4.0, epsilon = 1e-12);
    }

    #[test]
    fn test_profile_clamps_out_of_range() {
        let thickness = 10.0;
        assert_relative_eq!(profile_height(-0.5, thickness), 8.0, epsilon = 1e-12);
        assert_relative_eq!(profile_height(1.5, thickness), 2.0, epsilon = 1e-12);
    }

    #[test]
    fn test_heel_cup_centerline_and_edge() {
        let thickness = 0.4;
        let half_width = 0.5;
        assert_relative_eq!(
            heel_cup_depth(0.0, 0.0, half_width, thickness),
            0.04,
            epsilon = 1e-12
        );
        assert_relative_eq!(heel_cup_depth(0.0, half_width, half_width, thickness), 0.0);
        assert_relative_eq!(heel_cup_depth(0.0, -half_width, half_width, thickness), 0.0);
        // Clamped beyond the lateral edge.
        assert_relative_eq!(heel_cup_depth(0.0, 2.0 * half_width, half_width, thickness), 0.0);
    }

    #[test]
    fn test_heel_cup_inactive_past_extent() {
        assert_eq!(heel_cup_depth(0.15, 0.0, 0.5, 0.4), 0.0);
        assert_eq!(heel_cup_depth(0.9, 0.0, 0.5, 0.4), 0.0);
    }

    /// Hand-built two-vertex "mesh": one top vertex on the centerline
    /// at the heel, one at the lateral heel edge.
    fn heel_probe_mesh(thickness: f32) -> TriangleMesh {
        TriangleMesh {
            positions: vec![0.0, thickness, 0.0, 0.5, thickness, 0.0],
            indices: vec![],
            normals: vec![0.0, 1.0, 0.0, 0.0, 1.0, 0.0],
        }
    }

    #[test]
    fn test_sculpt_heel_cup_extremum() {
        // width=1, length=2, thickness=0.4: heel centerline drops to
        // 0.4·0.8 - 0.4·0.10 = 0.28, lateral edge stays at 0.32.
        let mut mesh = heel_probe_mesh(0.4);
        sculpt(&mut mesh, 1.0, 2.0, 0.4);
        assert_relative_eq!(mesh.position(0)[1], 0.28, epsilon = 1e-6);
        assert_relative_eq!(mesh.position(1)[1], 0.32, epsilon = 1e-6);
    }

    #[test]
    fn test_relief_profile_matches_free_function() {
        let profile = ReliefProfile::new(6.0);
        for t in [0.0, 0.15, 0.3, 0.5, 0.7, 0.85, 1.0] {
            assert_relative_eq!(profile.height_at(t), profile_height(t, 6.0));
        }
    }

    #[test]
    fn test_sculpt_skips_non_top_vertices() {
        let mut mesh = TriangleMesh {
            positions: vec![0.0, 0.0, 0.0, 0.3, 0.2, 0.5],
            indices: vec![],
            normals: vec![0.0, -1.0, 0.0, 1.0, 0.0, 0.0],
        };
        let before = mesh.positions.clone();
        sculpt(&mut mesh, 1.0, 2.0, 0.4);
        assert_eq!(mesh.positions, before);
    }

    #[test]
    fn test_sculpt_thin_solid_leaves_bottom_flat() {
        // For thickness well below the tolerance constant the selection
        // must still exclude the bottom rings, which sit at y == 0.
        let thickness = 1e-6;
        let outline = orthosole_contour::Outline::build(80.0, 260.0);
        let mut mesh = crate::extrude(&outline, thickness);
        sculpt(&mut mesh, 80.0, 260.0, thickness);

        let quarter = mesh.num_vertices() / 4;
        for i in 0..quarter {
            assert_eq!(mesh.position(i)[1], 0.0, "bottom cap vertex {i} moved");
            assert_eq!(
                mesh.position(2 * quarter + i)[1],
                0.0,
                "wall bottom vertex {i} moved"
            );
        }
        // The top cap is still sculpted.
        assert!(mesh.position(quarter)[1] < thickness as f32);
    }

    #[test]
    fn test_sculpt_deterministic() {
        let flat = {
            let outline = orthosole_contour::Outline::build(1.0, 2.0);
            crate::extrude(&outline, 0.4)
        };

        let mut a = flat.clone();
        let mut b = flat.clone();
        sculpt(&mut a, 1.0, 2.0, 0.4);
        sculpt(&mut b, 1.0, 2.0, 0.4);
        assert_eq!(a.positions, b.positions);
        assert_eq!(a.indices, b.indices);
    }

    #[test]
    fn test_sculpt_preserves_xz_and_topology() {
        let outline = orthosole_contour::Outline::build(80.0, 260.0);
        let flat = crate::extrude(&outline, 6.0);
        let mut sculpted = flat.clone();
        sculpt(&mut sculpted, 80.0, 260.0, 6.0);

        assert_eq!(sculpted.indices, flat.indices);
        assert_eq!(sculpted.num_vertices(), flat.num_vertices());
        for i in 0..flat.num_vertices() {
            let f = flat.position(i);
            let s = sculpted.position(i);
            assert_eq!(f[0], s[0]);
            assert_eq!(f[2], s[2]);
        }
    }
}
