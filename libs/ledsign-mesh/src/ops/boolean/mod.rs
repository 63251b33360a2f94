//! # Boolean Operations
//!
//! CSG subtraction using BSP trees.
//!
//! ## Algorithm
//!
//! 1. Convert both meshes to polygon soups
//! 2. Build a BSP tree for each
//! 3. Clip each tree against the other, inverting as needed
//! 4. Merge the surviving polygons and weld them back into a mesh
//!
//! The [`BooleanEngine`] trait is the seam callers depend on, so a pipeline can
//! swap the BSP implementation for another kernel (or a test double).

pub mod bsp;
pub mod plane;
pub mod polygon;


use config::constants::MAX_TRIANGLES;
use tracing::debug;

use crate::error::MeshError;
use crate::mesh::Mesh;
use bsp::BspTree;
use polygon::{mesh_to_polygons, polygons_to_mesh};

// =============================================================================
// ENGINE TRAIT
// =============================================================================

/// A solid-modeling kernel able to subtract one closed mesh from another.
pub trait BooleanEngine: Send + Sync {
    /// Computes `base - cutter`.
    ///
    /// An `Err` means the engine could not produce a usable solid; callers
    /// decide whether to fall back or propagate.
    fn difference(&self, base: &Mesh, cutter: &Mesh) -> Result<Mesh, MeshError>;
}

/// Boolean engine backed by [`difference`].
///
/// Rejects empty, non-finite or open results.
#[derive(Debug, Clone, Copy, Default)]
pub struct BspEngine;

impl BooleanEngine for BspEngine {
    fn difference(&self, base: &Mesh, cutter: &Mesh) -> Result<Mesh, MeshError> {
        let result = difference(base, cutter)?;

        if result.is_empty() {
            return Err(MeshError::boolean_failed("subtraction produced an empty mesh"));
        }
        if !result.is_finite() {
            return Err(MeshError::boolean_failed(
                "subtraction produced non-finite coordinates",
            ));
        }
        let open = result.open_edge_count();
        if open > 0 {
            return Err(MeshError::boolean_failed(format!(
                "subtraction left {open} open edges"
            )));
        }

        Ok(result)
    }
}

// =============================================================================
// PUBLIC API
// =============================================================================

/// Computes the difference of two meshes (A - B).
///
/// ## Parameters
///
/// - `a`: First mesh (base)
/// - `b`: Second mesh (to subtract)
///
/// ## Returns
///
/// Mesh containing points in A but not in B. An empty `a` yields an empty
/// mesh and an empty `b` yields a copy of `a`.
///
/// ## Example
///
/// ```rust
/// use glam::DVec3;
/// use ledsign_mesh::ops::boolean::difference;
/// use ledsign_mesh::primitives::create_box;
///
/// let a = create_box(DVec3::splat(2.0), true).unwrap();
/// let b = create_box(DVec3::splat(2.0), false).unwrap();
/// let result = difference(&a, &b).unwrap();
/// assert!((result.signed_volume() - 7.0).abs() < 1e-9);
/// ```
pub fn difference(a: &Mesh, b: &Mesh) -> Result<Mesh, MeshError> {
    check_operand("base", a, MAX_TRIANGLES)?;
    check_operand("cutter", b, MAX_TRIANGLES)?;

    if a.is_empty() {
        return Ok(Mesh::new());
    }
    if b.is_empty() {
        return Ok(a.clone());
    }

    let mut tree_a = BspTree::new(mesh_to_polygons(a));
    let mut tree_b = BspTree::new(mesh_to_polygons(b));
    debug!(
        base_polygons = tree_a.polygon_count(),
        cutter_polygons = tree_b.polygon_count(),
        base_nodes = tree_a.node_count(),
        cutter_nodes = tree_b.node_count(),
        "built BSP trees"
    );

    tree_a.invert();
    tree_a.clip_to(&tree_b);
    tree_b.clip_to(&tree_a);
    tree_b.invert();
    tree_b.clip_to(&tree_a);
    tree_b.invert();
    tree_a.build(tree_b.all_polygons());
    tree_a.invert();

    let polygons = tree_a.all_polygons();
    let result = polygons_to_mesh(&polygons);
    debug!(
        polygons = polygons.len(),
        vertices = result.vertex_count(),
        triangles = result.triangle_count(),
        "difference complete"
    );

    Ok(result)
}

/// Rejects operands the BSP cannot process: oversized, non-finite, broken or
/// open meshes.
fn check_operand(role: &str, mesh: &Mesh, max_triangles: usize) -> Result<(), MeshError> {
    if mesh.triangle_count() > max_triangles {
        return Err(MeshError::TooManyTriangles {
            count: mesh.triangle_count(),
            max: max_triangles,
        });
    }
    if !mesh.is_finite() {
        return Err(MeshError::boolean_failed(format!(
            "{role} mesh has non-finite coordinates"
        )));
    }
    mesh.check_topology().map_err(|err| {
        MeshError::boolean_failed(format!("{role} mesh is not a valid solid: {err}"))
    })?;

    let open = mesh.open_edge_count();
    if open > 0 {
        return Err(MeshError::boolean_failed(format!(
            "{role} mesh is not watertight: {open} open edges"
        )));
    }
    Ok(())
}
