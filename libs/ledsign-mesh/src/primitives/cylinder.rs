//! # Cylinder Primitive
//!
//! Generates a closed prism approximating a right circular cylinder.

use crate::error::MeshError;
use crate::mesh::Mesh;
use glam::DVec3;
use std::f64::consts::PI;

/// Creates a cylinder mesh around the Z axis.
///
/// # Arguments
///
/// * `height` - Height along Z axis
/// * `radius` - Circumscribed radius of the polygonal cross-section
/// * `center` - If true, center vertically at origin; otherwise z ∈ [0, height]
/// * `segments` - Number of sides around the circumference
///
/// # Returns
///
/// A mesh with `2 * segments` vertices and `4 * segments - 4` triangles.
///
/// # Example
///
/// ```rust
/// use ledsign_mesh::primitives::create_cylinder;
///
/// let mesh = create_cylinder(1.5, 1.5, true, 32).unwrap();
/// assert_eq!(mesh.vertex_count(), 64);
/// assert_eq!(mesh.triangle_count(), 124);
/// ```
pub fn create_cylinder(
    height: f64,
    radius: f64,
    center: bool,
    segments: u32,
) -> Result<Mesh, MeshError> {
    if !height.is_finite() || height <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Cylinder height must be positive: {}",
            height
        )));
    }

    if !radius.is_finite() || radius <= 0.0 {
        return Err(MeshError::degenerate(format!(
            "Cylinder radius must be positive: {}",
            radius
        )));
    }

    if segments < 3 {
        return Err(MeshError::degenerate(format!(
            "Cylinder segments must be at least 3: {}",
            segments
        )));
    }

    let n = segments as usize;
    let mut mesh = Mesh::with_capacity(2 * n, 4 * n - 4);

    let (z_bottom, z_top) = if center {
        (-height / 2.0, height / 2.0)
    } else {
        (0.0, height)
    };

    let ring = |mesh: &mut Mesh, z: f64| -> Vec<u32> {
        (0..segments)
            .map(|j| {
                let theta = 2.0 * PI * j as f64 / segments as f64;
                mesh.add_vertex(DVec3::new(radius * theta.cos(), radius * theta.sin(), z))
            })
            .collect()
    };

    let bottom = ring(&mut mesh, z_bottom);
    let top = ring(&mut mesh, z_top);

    // Side walls
    for j in 0..n {
        let j_next = (j + 1) % n;
        mesh.add_triangle(bottom[j], bottom[j_next], top[j_next]);
        mesh.add_triangle(bottom[j], top[j_next], top[j]);
    }

    // Caps (fan from the first ring vertex)
    for j in 1..n - 1 {
        mesh.add_triangle(bottom[0], bottom[j + 1], bottom[j]);
        mesh.add_triangle(top[0], top[j], top[j + 1]);
    }

    Ok(mesh)
}
