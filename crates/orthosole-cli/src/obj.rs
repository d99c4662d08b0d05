//! Wavefront OBJ text dump.
//!
//! Display-quality export for dropping a generated mesh into an
//! external viewer; not a fabrication format.

use std::fmt::Write;

use orthosole::TriangleMesh;

/// Serialize a mesh as OBJ text with positions and per-vertex normals.
pub fn to_obj(mesh: &TriangleMesh) -> String {
    let mut out = String::new();
    out.push_str("# orthosole preview mesh\n");

    for i in 0..mesh.num_vertices() {
        let [x, y, z] = mesh.position(i);
        let _ = writeln!(out, "v {x} {y} {z}");
    }
    for i in 0..mesh.num_vertices() {
        let [nx, ny, nz] = mesh.normal(i);
        let _ = writeln!(out, "vn {nx} {ny} {nz}");
    }
    for tri in mesh.indices.chunks_exact(3) {
        // OBJ indices are 1-based.
        let (a, b, c) = (tri[0] + 1, tri[1] + 1, tri[2] + 1);
        let _ = writeln!(out, "f {a}//{a} {b}//{b} {c}//{c}");
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use orthosole::{generate, InsoleParams};

    #[test]
    fn test_obj_line_counts() {
        let mesh = generate(&InsoleParams::new(80.0, 260.0, 6.0, true)).unwrap();
        let text = to_obj(&mesh);

        let v = text.lines().filter(|l| l.starts_with("v ")).count();
        let vn = text.lines().filter(|l| l.starts_with("vn ")).count();
        let f = text.lines().filter(|l| l.starts_with("f ")).count();

        assert_eq!(v, mesh.num_vertices());
        assert_eq!(vn, mesh.num_vertices());
        assert_eq!(f, mesh.num_triangles());
    }

    #[test]
    fn test_obj_indices_one_based() {
        let mesh = generate(&InsoleParams::new(80.0, 260.0, 6.0, false)).unwrap();
        let text = to_obj(&mesh);
        assert!(!text.contains(" 0//0"));
    }
}
