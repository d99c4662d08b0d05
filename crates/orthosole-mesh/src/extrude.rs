//! Extrude operation: sweep a footprint outline into a capped solid.

use orthosole_contour::Outline;
use orthosole_math::Point2;

use crate::TriangleMesh;

/// Extrude the outline by `thickness` into a flat-topped solid.
///
/// The vertex buffer holds four ring copies of the outline samples, in
/// order: bottom cap, top cap, wall bottom, wall top. Cap rings and
/// wall rings are separate copies so the caps can shade flat while the
/// walls shade smoothly around the perimeter. Corresponding vertices of
/// all four rings share the outline sample index, so later stages can
/// address rings positionally.
///
/// Guarantees:
/// - every top-cap and wall-top vertex has `y == thickness` exactly
/// - every bottom-cap and wall-bottom vertex has `y == 0` exactly
/// - caps are ear-clip triangulated (the outline is simple but not
///   convex: the arch waist turns inward, so a fan would fold over)
/// - winding is outward: top cap faces `+y`, bottom cap `-y`
///
/// Normals are filled flat per group (`±y` on the caps, horizontal
/// outward on the walls); the pipeline replaces them with recomputed
/// per-vertex normals before the mesh is returned.
pub fn extrude(outline: &Outline, thickness: f64) -> TriangleMesh {
    let ring = outline.points();
    let n = ring.len();
    let top = thickness as f32;

    let mut mesh = TriangleMesh::new();
    mesh.positions.reserve(4 * n * 3);
    mesh.normals.reserve(4 * n * 3);
    mesh.indices.reserve((4 * n - 4) * 3);

    // Ring copies: bottom cap, top cap, wall bottom, wall top.
    for y in [0.0, top] {
        for p in ring {
            mesh.positions.push(p.x as f32);
            mesh.positions.push(y);
            mesh.positions.push(p.y as f32);
        }
    }
    for y in [0.0, top] {
        for p in ring {
            mesh.positions.push(p.x as f32);
            mesh.positions.push(y);
            mesh.positions.push(p.y as f32);
        }
    }

    let bottom_cap = 0u32;
    let top_cap = n as u32;
    let wall_bottom = 2 * n as u32;
    let wall_top = 3 * n as u32;

    // Caps. The outline ring is traversed clockwise when seen from
    // above, so ring-order cap triangles face +y; the bottom cap
    // reverses to face -y.
    for [a, b, c] in triangulate_cap(ring) {
        mesh.indices.push(top_cap + a);
        mesh.indices.push(top_cap + b);
        mesh.indices.push(top_cap + c);

        mesh.indices.push(bottom_cap + a);
        mesh.indices.push(bottom_cap + c);
        mesh.indices.push(bottom_cap + b);
    }

    // Wall quads: bot_i -> bot_next -> top_next -> top_i winds outward.
    for i in 0..n as u32 {
        let next = (i + 1) % n as u32;
        let b = wall_bottom + i;
        let bn = wall_bottom + next;
        let t = wall_top + i;
        let tn = wall_top + next;

        mesh.indices.push(b);
        mesh.indices.push(bn);
        mesh.indices.push(tn);

        mesh.indices.push(b);
        mesh.indices.push(tn);
        mesh.indices.push(t);
    }

    // Flat normals: -y bottom cap, +y top cap, horizontal outward walls.
    for _ in 0..n {
        mesh.normals.extend_from_slice(&[0.0, -1.0, 0.0]);
    }
    for _ in 0..n {
        mesh.normals.extend_from_slice(&[0.0, 1.0, 0.0]);
    }
    let mut wall_normals = Vec::with_capacity(n * 3);
    for i in 0..n {
        let prev = ring[(i + n - 1) % n];
        let next = ring[(i + 1) % n];
        let d = next - prev;
        // Outward perpendicular for the clockwise ring orientation.
        let (ox, oz) = (-d.y, d.x);
        let len = (ox * ox + oz * oz).sqrt();
        if len > 1e-12 {
            wall_normals.extend_from_slice(&[(ox / len) as f32, 0.0, (oz / len) as f32]);
        } else {
            wall_normals.extend_from_slice(&[0.0, 1.0, 0.0]);
        }
    }
    mesh.normals.extend_from_slice(&wall_normals);
    mesh.normals.extend_from_slice(&wall_normals);

    mesh
}

/// Triangulate the cap ring by ear clipping.
///
/// The ring is simple and traversed clockwise in the `(x, z)` plane
/// (negative shoelace area), so triangles are emitted in ring order
/// and face `+y`. Handles the concave arch waist that a plain fan
/// cannot.
fn triangulate_cap(ring: &[Point2]) -> Vec<[u32; 3]> {
    let mut remaining: Vec<usize> = (0..ring.len()).collect();
    let mut triangles = Vec::with_capacity(ring.len().saturating_sub(2));

    while remaining.len() > 3 {
        let n = remaining.len();
        let mut clipped = false;

        for i in 0..n {
            let prev = (i + n - 1) % n;
            let next = (i + 1) % n;
            let a = ring[remaining[prev]];
            let b = ring[remaining[i]];
            let c = ring[remaining[next]];

            // Clockwise ring: a convex corner turns with negative cross.
            let cross = (b.x - a.x) * (c.y - a.y) - (b.y - a.y) * (c.x - a.x);
            if cross >= 0.0 {
                continue;
            }

            let mut is_ear = true;
            for (j, &idx) in remaining.iter().enumerate() {
                if j == prev || j == i || j == next {
                    continue;
                }
                if point_in_triangle(ring[idx], a, b, c) {
                    is_ear = false;
                    break;
                }
            }

            if is_ear {
                triangles.push([
                    remaining[prev] as u32,
                    remaining[i] as u32,
                    remaining[next] as u32,
                ]);
                remaining.remove(i);
                clipped = true;
                break;
            }
        }

        if !clipped {
            // Numerically degenerate remainder; stop rather than loop.
            break;
        }
    }

    if remaining.len() == 3 {
        triangles.push([
            remaining[0] as u32,
            remaining[1] as u32,
            remaining[2] as u32,
        ]);
    }

    triangles
}

/// Strict-interior point-in-triangle test via barycentric coordinates.
fn point_in_triangle(p: Point2, a: Point2, b: Point2, c: Point2) -> bool {
    let v0 = c - a;
    let v1 = b - a;
    let v2 = p - a;

    let dot00 = v0.dot(&v0);
    let dot01 = v0.dot(&v1);
    let dot02 = v0.dot(&v2);
    let dot11 = v1.dot(&v1);
    let dot12 = v1.dot(&v2);

    let denom = dot00 * dot11 - dot01 * dot01;
    if denom.abs() < 1e-20 {
        return false;
    }
    let inv_denom = 1.0 / denom;
    let u = (dot11 * dot02 - dot01 * dot12) * inv_denom;
    let v = (dot00 * dot12 - dot01 * dot02) * inv_denom;

    let eps = 1e-10;
    u > eps && v > eps && (u + v) < 1.0 - eps
}
