//! Cubic Bézier segment evaluation.

use orthosole_math::Point2;

/// A single cubic Bézier segment of the footprint contour.
///
/// Evaluated in Bernstein form:
///
/// ```text
/// B(t) = (1-t)³p0 + 3(1-t)²t c0 + 3(1-t)t² c1 + t³ p1
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CubicSegment {
    /// Start point.
    pub p0: Point2,
    /// First control point.
    pub c0: Point2,
    /// Second control point.
    pub c1: Point2,
    /// End point.
    pub p1: Point2,
}

impl CubicSegment {
    /// Create a new cubic segment.
    pub const fn new(p0: Point2, c0: Point2, c1: Point2, p1: Point2) -> Self {
        Self { p0, c0, c1, p1 }
    }

    /// Evaluate the segment at parameter `t ∈ [0, 1]`.
    pub fn point_at(&self, t: f64) -> Point2 {
        let t = t.clamp(0.0, 1.0);
        let s = 1.0 - t;

        Point2::from(
            self.p0.coords * (s * s * s)
                + self.c0.coords * (3.0 * s * s * t)
                + self.c1.coords * (3.0 * s * t * t)
                + self.p1.coords * (t * t * t),
        )
    }

    /// Mirror the segment across the `x = 0` centerline and reverse its
    /// direction of travel.
    ///
    /// Used to derive the return half of the contour loop from the
    /// outbound half so the two sides are exact mirror images.
    pub fn mirrored_reversed(&self) -> Self {
        let flip = |p: Point2| Point2::new(-p.x, p.y);
        Self {
            p0: flip(self.p1),
            c0: flip(self.c1),
            c1: flip(self.c0),
            p1: flip(self.p0),
        }
    }

    /// Sample `n` points at parameters `i/n` for `i in 0..n`.
    ///
    /// The segment's end point is excluded; it coincides with the next
    /// segment's start, so consecutive segments chain without duplicates.
    pub fn sample_into(&self, n: usize, out: &mut Vec<Point2>) {
        for i in 0..n {
            let t = i as f64 / n as f64;
            out.push(self.point_at(t));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    fn segment() -> CubicSegment {
        CubicSegment::new(
            Point2::new(0.0, 0.0),
            Point2::new(1.0, 2.0),
            Point2::new(3.0, 2.0),
            Point2::new(4.0, 0.0),
        )
    }

    #[test]
    fn test_endpoints_exact() {
        let seg = segment();
        assert_eq!(seg.point_at(0.0), seg.p0);
        assert_eq!(seg.point_at(1.0), seg.p1);
    }

    #[test]
    fn test_midpoint_pulled_toward_controls() {
        let seg = segment();
        let mid = seg.point_at(0.5);
        assert_relative_eq!(mid.x, 2.0, epsilon = 1e-12);
        assert!(mid.y > 0.0);
    }

    #[test]
    fn test_mirrored_reversed_is_exact_mirror() {
        let seg = segment();
        let rev = seg.mirrored_reversed();
        let n = 16;
        for i in 0..=n {
            let t = i as f64 / n as f64;
            let a = seg.point_at(t);
            let b = rev.point_at(1.0 - t);
            assert_relative_eq!(b.x, -a.x, epsilon = 1e-12);
            assert_relative_eq!(b.y, a.y, epsilon = 1e-12);
        }
    }

    #[test]
    fn test_sample_count_excludes_endpoint() {
        let seg = segment();
        let mut pts = Vec::new();
        seg.sample_into(8, &mut pts);
        assert_eq!(pts.len(), 8);
        assert_eq!(pts[0], seg.p0);
        assert!(pts.last().unwrap() != &seg.p1);
    }
}
