//! # Box Primitive
//!
//! Axis-aligned boxes; the sign's base plate is one.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;

/// Outward-facing quads over the corner indices, counter-clockwise from outside.
const FACES: [[u32; 4]; 6] = [
    [0, 2, 3, 1], // z-
    [4, 5, 7, 6], // z+
    [0, 1, 5, 4], // y-
    [3, 2, 6, 7], // y+
    [2, 0, 4, 6], // x-
    [1, 3, 7, 5], // x+
];

/// Creates an axis-aligned box.
///
/// # Arguments
///
/// * `size` - Extents along x, y and z
/// * `center` - Center on the origin when true; otherwise span `[0, size]`
///
/// # Returns
///
/// Eight corners and two triangles per face.
///
/// # Example
///
/// ```rust
/// use ledsign_mesh::primitives::create_box;
/// use glam::DVec3;
///
/// let plate = create_box(DVec3::new(10.0, 10.0, 2.0), false).unwrap();
/// assert_eq!((plate.vertex_count(), plate.triangle_count()), (8, 12));
/// ```
pub fn create_box(size: DVec3, center: bool) -> Result<Mesh, MeshError> {
    if !size.is_finite() || size.x <= 0.0 || size.y <= 0.0 || size.z <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Box size must be positive: {:?}",
            size
        )));
    }

    let (lo, hi) = if center {
        (-size / 2.0, size / 2.0)
    } else {
        (DVec3::ZERO, size)
    };

    let mut mesh = Mesh::with_capacity(8, 12);

    // Corner k picks hi on axis x/y/z when bit 0/1/2 of k is set
    for k in 0..8u32 {
        let pick = |bit: u32, l: f64, h: f64| if k & (1 << bit) != 0 { h } else { l };
        mesh.add_vertex(DVec3::new(
            pick(0, lo.x, hi.x),
            pick(1, lo.y, hi.y),
            pick(2, lo.z, hi.z),
        ));
    }

    for [a, b, c, d] in FACES {
        mesh.add_triangle(a, b, c);
        mesh.add_triangle(a, c, d);
    }

    Ok(mesh)
}
