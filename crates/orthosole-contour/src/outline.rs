//! Closed symmetric footprint outline.

use orthosole_math::{Point2, Tolerance};

use crate::{CubicSegment, SAMPLES_PER_SEGMENT};

/// The four named anchor points parametrizing the footprint contour,
/// expressed on the `(x, z)` contour plane with the heel at the origin
/// and the toe at `(0, length)`.
///
/// Each anchor off the centerline also has a mirror image across
/// `x = 0`; the outline interpolates all of them.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchors {
    /// Rear centerline point, `(0, 0)`.
    pub heel: Point2,
    /// Arch waist, `(-0.3·halfWidth, 0.4·length)`.
    pub arch: Point2,
    /// Ball of the foot, `(0.5·halfWidth, 0.7·length)`.
    pub ball: Point2,
    /// Front centerline point, `(0, length)`.
    pub toe: Point2,
}

impl Anchors {
    /// Derive the anchors from overall footprint dimensions.
    pub fn from_dimensions(width: f64, length: f64) -> Self {
        let half_width = width / 2.0;
        Self {
            heel: Point2::new(0.0, 0.0),
            arch: Point2::new(-0.3 * half_width, 0.4 * length),
            ball: Point2::new(0.5 * half_width, 0.7 * length),
            toe: Point2::new(0.0, length),
        }
    }
}

/// A closed, bilaterally symmetric footprint outline.
///
/// Six cubic Bézier segments run heel → arch side → ball side → toe and
/// mirror back to the heel. The sampled ring has a fixed point count
/// (`6 * SAMPLES_PER_SEGMENT`) with no duplicated closure point; the
/// final sample's successor is the first sample.
#[derive(Debug, Clone)]
pub struct Outline {
    segments: [CubicSegment; 6],
    points: Vec<Point2>,
}

impl Outline {
    /// Build the outline for the given footprint dimensions.
    ///
    /// Both dimensions must be strictly positive; the caller validates
    /// this before any geometry work starts.
    pub fn build(width: f64, length: f64) -> Self {
        debug_assert!(width > 0.0 && length > 0.0);

        let anchors = Anchors::from_dimensions(width, length);
        let mirror = |p: Point2| Point2::new(-p.x, p.y);

        // Anchor loop in traversal order: down the negative-x side and
        // back up the mirror side.
        let loop_anchors = [
            anchors.heel,
            anchors.arch,
            mirror(anchors.ball),
            anchors.toe,
            anchors.ball,
            mirror(anchors.arch),
        ];

        // Catmull-Rom tangents: parallel to the chord between each
        // anchor's neighbors. This makes the junctions C1 smooth, and
        // the heel and toe tangents come out horizontal so both ends
        // round off symmetrically. The loop stays simple but is not
        // convex: it turns inward at the arch waist.
        let tangent = |i: usize| (loop_anchors[(i + 1) % 6] - loop_anchors[(i + 5) % 6]) * 0.5;
        let segment = |i: usize| {
            let p0 = loop_anchors[i];
            let p1 = loop_anchors[(i + 1) % 6];
            CubicSegment::new(
                p0,
                Point2::from(p0.coords + tangent(i) / 3.0),
                Point2::from(p1.coords - tangent((i + 1) % 6) / 3.0),
                p1,
            )
        };

        // Outbound half on the negative-x side: heel → arch →
        // mirrored ball → toe. The return half is its mirror image, so
        // it is sampled once and reflected, making the left/right
        // symmetry of the ring exact by construction.
        let outbound = [segment(0), segment(1), segment(2)];

        let n = SAMPLES_PER_SEGMENT;
        let mut half = Vec::with_capacity(3 * n + 1);
        for seg in &outbound {
            seg.sample_into(n, &mut half);
        }
        half.push(anchors.toe);

        let mut points = Vec::with_capacity(6 * n);
        points.extend_from_slice(&half[..3 * n]);
        for j in 0..3 * n {
            points.push(mirror(half[3 * n - j]));
        }

        let segments = [
            outbound[0],
            outbound[1],
            outbound[2],
            outbound[2].mirrored_reversed(),
            outbound[1].mirrored_reversed(),
            outbound[0].mirrored_reversed(),
        ];

        Self { segments, points }
    }

    /// The sampled contour ring, in traversal order.
    pub fn points(&self) -> &[Point2] {
        &self.points
    }

    /// The six Bézier segments, in traversal order.
    pub fn segments(&self) -> &[CubicSegment; 6] {
        &self.segments
    }

    /// Whether the segment chain closes back on its starting point.
    pub fn is_closed(&self) -> bool {
        Tolerance::DEFAULT.points_equal(&self.segments[5].p1, &self.segments[0].p0)
    }

    /// Shoelace signed area of the sampled ring. Negative for the
    /// clockwise traversal order `build` produces.
    pub fn signed_area(&self) -> f64 {
        let pts = &self.points;
        let n = pts.len();
        let mut sum = 0.0;
        for i in 0..n {
            let a = pts[i];
            let b = pts[(i + 1) % n];
            sum += a.x * b.y - b.x * a.y;
        }
        sum / 2.0
    }

    /// Enclosed area of the sampled ring.
    pub fn area(&self) -> f64 {
        self.signed_area().abs()
    }
}
