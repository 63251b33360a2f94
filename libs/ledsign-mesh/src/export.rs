//! # STL Export
//!
//! Writes meshes as binary or ASCII STL for slicers and viewers.
//!
//! Binary layout: an 80-byte header, a little-endian `u32` triangle count,
//! then 50 bytes per triangle (normal, three vertices as `f32` triples, and a
//! zero attribute word).

use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

use glam::DVec3;

use crate::error::MeshError;
use crate::mesh::Mesh;

/// STL binary header size in bytes.
const HEADER_SIZE: usize = 80;

/// Size of one triangle record in binary STL.
pub const TRIANGLE_RECORD_SIZE: usize = 50;

/// Exact byte length of a binary STL holding `triangles` facets.
pub fn binary_stl_len(triangles: usize) -> usize {
    HEADER_SIZE + 4 + TRIANGLE_RECORD_SIZE * triangles
}

/// Save a mesh to an STL file.
///
/// # Arguments
///
/// * `mesh` - Mesh to write
/// * `path` - Destination file
/// * `binary` - Binary STL when true, ASCII otherwise
///
/// # Errors
///
/// Returns [`MeshError::Io`] if the file cannot be created or written.
pub fn save_stl<P: AsRef<Path>>(mesh: &Mesh, path: P, binary: bool) -> Result<(), MeshError> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);

    if binary {
        write_stl_binary(mesh, &mut writer)?;
    } else {
        write_stl_ascii(mesh, "ledsign", &mut writer)?;
    }
    writer.flush()?;
    Ok(())
}

/// Write a mesh as binary STL.
pub fn write_stl_binary<W: Write>(mesh: &Mesh, writer: &mut W) -> Result<(), MeshError> {
    let mut header = [b' '; HEADER_SIZE];
    let text = b"Binary STL generated by ledsign-mesh";
    header[..text.len()].copy_from_slice(text);
    writer.write_all(&header)?;

    let face_count = u32::try_from(mesh.triangle_count()).map_err(|_| {
        MeshError::TooManyTriangles {
            count: mesh.triangle_count(),
            max: u32::MAX as usize,
        }
    })?;
    writer.write_all(&face_count.to_le_bytes())?;

    for [v0, v1, v2] in mesh.triangle_positions() {
        write_vec3_binary(writer, facet_normal(v0, v1, v2))?;
        write_vec3_binary(writer, v0)?;
        write_vec3_binary(writer, v1)?;
        write_vec3_binary(writer, v2)?;
        writer.write_all(&0u16.to_le_bytes())?;
    }

    Ok(())
}

/// Write a mesh as ASCII STL under the given solid name.
pub fn write_stl_ascii<W: Write>(mesh: &Mesh, name: &str, writer: &mut W) -> Result<(), MeshError> {
    writeln!(writer, "solid {name}")?;

    for [v0, v1, v2] in mesh.triangle_positions() {
        let n = facet_normal(v0, v1, v2);
        writeln!(writer, "  facet normal {:.6e} {:.6e} {:.6e}", n.x, n.y, n.z)?;
        writeln!(writer, "    outer loop")?;
        for v in [v0, v1, v2] {
            writeln!(writer, "      vertex {:.6e} {:.6e} {:.6e}", v.x, v.y, v.z)?;
        }
        writeln!(writer, "    endloop")?;
        writeln!(writer, "  endfacet")?;
    }

    writeln!(writer, "endsolid {name}")?;
    Ok(())
}

/// Unit facet normal, or zero for a degenerate triangle.
fn facet_normal(v0: DVec3, v1: DVec3, v2: DVec3) -> DVec3 {
    (v1 - v0).cross(v2 - v0).try_normalize().unwrap_or(DVec3::ZERO)
}

/// STL stores coordinates as `f32`.
fn write_vec3_binary<W: Write>(writer: &mut W, v: DVec3) -> Result<(), MeshError> {
    writer.write_all(&(v.x as f32).to_le_bytes())?;
    writer.write_all(&(v.y as f32).to_le_bytes())?;
    writer.write_all(&(v.z as f32).to_le_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::primitives::create_box;

    fn unit_box() -> Mesh {
        create_box(DVec3::ONE, false).unwrap()
    }

    #[test]
    fn test_binary_stl_size() {
        let mesh = unit_box();
        let mut buf = Vec::new();
        write_stl_binary(&mesh, &mut buf).unwrap();
        assert_eq!(buf.len(), binary_stl_len(12));
        assert_eq!(buf.len(), 84 + 50 * 12);
    }

    #[test]
    fn test_binary_stl_face_count() {
        let mesh = unit_box();
        let mut buf = Vec::new();
        write_stl_binary(&mesh, &mut buf).unwrap();
        let count = u32::from_le_bytes([buf[80], buf[81], buf[82], buf[83]]);
        assert_eq!(count, 12);
    }

    #[test]
    fn test_binary_stl_normals_are_unit() {
        let mesh = unit_box();
        let mut buf = Vec::new();
        write_stl_binary(&mesh, &mut buf).unwrap();

        for tri in 0..12 {
            let offset = HEADER_SIZE + 4 + tri * TRIANGLE_RECORD_SIZE;
            let read = |k: usize| {
                let b = &buf[offset + 4 * k..offset + 4 * k + 4];
                f32::from_le_bytes([b[0], b[1], b[2], b[3]])
            };
            let len = (read(0).powi(2) + read(1).powi(2) + read(2).powi(2)).sqrt();
            assert!((len - 1.0).abs() < 1e-5);
        }
    }

    #[test]
    fn test_ascii_stl_structure() {
        let mesh = unit_box();
        let mut buf = Vec::new();
        write_stl_ascii(&mesh, "plate", &mut buf).unwrap();
        let text = String::from_utf8(buf).unwrap();

        assert!(text.starts_with("solid plate\n"));
        assert!(text.trim_end().ends_with("endsolid plate"));
        assert_eq!(text.matches("facet normal").count(), 12);
        assert_eq!(text.matches("vertex").count(), 36);
    }

    #[test]
    fn test_empty_mesh_binary() {
        let mut buf = Vec::new();
        write_stl_binary(&Mesh::new(), &mut buf).unwrap();
        assert_eq!(buf.len(), 84);
    }

    #[test]
    fn test_save_stl_to_missing_directory_fails() {
        let err = save_stl(&unit_box(), "/nonexistent-dir/out.stl", true).unwrap_err();
        assert!(matches!(err, MeshError::Io(_)));
    }
}
