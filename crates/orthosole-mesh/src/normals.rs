//! Per-vertex normal recomputation.

use orthosole_math::{Point3, Vec3};

use crate::TriangleMesh;

/// Face normals shorter than this are treated as degenerate and skipped.
const DEGENERATE_NORMAL_SQ: f64 = 1e-24;

/// Replace the mesh's normal buffer with per-vertex unit normals.
///
/// Each vertex normal is the normalized sum of the raw cross products
/// of its incident triangles, which weights faces by area. Degenerate
/// triangles contribute nothing instead of propagating NaN; a vertex
/// left with a zero accumulator falls back to `+y`. Winding is read
/// from the index list as-is, so outward-wound meshes stay outward.
pub fn recompute_normals(mesh: &mut TriangleMesh) {
    let nv = mesh.num_vertices();
    let mut acc = vec![Vec3::zeros(); nv];

    let point = |m: &TriangleMesh, i: usize| -> Point3 {
        let [x, y, z] = m.position(i);
        Point3::new(x as f64, y as f64, z as f64)
    };

    for tri in mesh.indices.chunks_exact(3) {
        let (i0, i1, i2) = (tri[0] as usize, tri[1] as usize, tri[2] as usize);
        let a = point(mesh, i0);
        let b = point(mesh, i1);
        let c = point(mesh, i2);

        let n = (b - a).cross(&(c - a));
        if n.norm_squared() < DEGENERATE_NORMAL_SQ {
            continue;
        }

        acc[i0] += n;
        acc[i1] += n;
        acc[i2] += n;
    }

    mesh.normals.clear();
    mesh.normals.reserve(nv * 3);
    for v in &acc {
        let len = v.norm();
        if len > 1e-12 {
            mesh.normals.push((v.x / len) as f32);
            mesh.normals.push((v.y / len) as f32);
            mesh.normals.push((v.z / len) as f32);
        } else {
            // Isolated vertex or nothing but degenerate faces.
            mesh.normals.extend_from_slice(&[0.0, 1.0, 0.0]);
        }
    }
}
