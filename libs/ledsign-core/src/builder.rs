//! # Primitive Builder
//!
//! Builds the base plate and one hole solid per LED. No boolean operation
//! happens here.

use config::constants::MIN_HOLE_SEGMENTS;
use glam::{DVec2, DVec3};
use ledsign_layout::{Grid, Panel};
use ledsign_mesh::primitives::{create_box, create_cylinder};
use ledsign_mesh::{Mesh, MeshError};
use rayon::prelude::*;

/// Builds the solid base plate.
///
/// The plate is centered in X/Y and occupies `Z ∈ [0, thickness]`.
pub fn build_base_plate(panel: &Panel) -> Result<Mesh, MeshError> {
    let mut plate = create_box(
        DVec3::new(panel.width(), panel.height(), panel.thickness()),
        true,
    )?;
    plate.translate(DVec3::new(0.0, 0.0, panel.thickness() / 2.0));
    Ok(plate)
}

/// Builds one cylindrical hole solid.
///
/// # Arguments
///
/// * `center` - Hole axis in the model frame
/// * `diameter` - Hole diameter (radius is `diameter / 2`)
/// * `depth` - Hole depth; the cylinder spans `Z ∈ [0, depth]`
/// * `segments` - Sides of the polygonal cross-section (at least 32)
pub fn build_hole(
    center: DVec2,
    diameter: f64,
    depth: f64,
    segments: u32,
) -> Result<Mesh, MeshError> {
    if segments < MIN_HOLE_SEGMENTS {
        return Err(MeshError::degenerate(format!(
            "Hole needs at least {MIN_HOLE_SEGMENTS} segments: {segments}"
        )));
    }
    if !center.is_finite() {
        return Err(MeshError::degenerate(format!(
            "Hole center must be finite: {center:?}"
        )));
    }

    let mut hole = create_cylinder(depth, diameter / 2.0, true, segments)?;
    hole.translate(DVec3::new(center.x, center.y, depth / 2.0));
    Ok(hole)
}

/// Builds a hole for every grid position, in grid order.
///
/// Positions are mapped from panel-local coordinates into the model frame.
/// Holes are generated in parallel. A position outside the panel outline is
/// a [`MeshError::DegenerateGeometry`].
pub fn build_holes(
    panel: &Panel,
    grid: &Grid,
    diameter: f64,
    depth: f64,
    segments: u32,
) -> Result<Vec<Mesh>, MeshError> {
    grid.positions()
        .par_iter()
        .map(|&led| {
            if !panel.contains(led) {
                return Err(MeshError::degenerate(format!(
                    "LED at ({}, {}) lies outside the {} x {} panel",
                    led.x,
                    led.y,
                    panel.width(),
                    panel.height()
                )));
            }
            build_hole(panel.to_model_frame(led), diameter, depth, segments)
        })
        .collect()
}
