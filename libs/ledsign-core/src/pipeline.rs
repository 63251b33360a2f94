//! # Sign Pipeline
//!
//! End-to-end entry point: parameters in, finished panel solid out.
//!
//! ```text
//! SignParams → validate → compute_grid → build_base_plate / build_holes
//!            → combine → assemble_with → LedSign
//! ```

use std::path::Path;

use config::SignConfig;
use ledsign_layout::{compute_grid, Grid, Panel};
use ledsign_mesh::{save_stl, BooleanEngine, BspEngine, Mesh};
use serde::Serialize;
use tracing::{debug, info};

use crate::assemble::{assemble_with, AssemblyOutcome};
use crate::builder::{build_base_plate, build_holes};
use crate::combine::combine;
use crate::error::SignError;
use crate::params::SignParams;

/// A finished sign: panel, LED layout and printable solid.
#[derive(Debug, Clone)]
pub struct LedSign {
    panel: Panel,
    grid: Grid,
    mesh: Mesh,
    outcome: AssemblyOutcome,
}

impl LedSign {
    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// The final solid: the plate with holes, or the plain plate on fallback.
    pub fn mesh(&self) -> &Mesh {
        &self.mesh
    }

    pub fn outcome(&self) -> &AssemblyOutcome {
        &self.outcome
    }

    /// Summary suitable for returning to a client as JSON.
    pub fn report(&self) -> SignReport {
        SignReport {
            dimensions: Dimensions {
                width: self.panel.width(),
                height: self.panel.height(),
                thickness: self.panel.thickness(),
            },
            num_leds: self.grid.len(),
            degenerate_layout: self.grid.is_degenerate(),
            holes: self.outcome.clone(),
            triangles: self.mesh.triangle_count(),
        }
    }

    /// Writes the solid as STL.
    pub fn write_stl<P: AsRef<Path>>(&self, path: P, binary: bool) -> Result<(), SignError> {
        save_stl(&self.mesh, path, binary)?;
        Ok(())
    }
}

/// Serializable summary of a built sign.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SignReport {
    pub dimensions: Dimensions,
    pub num_leds: usize,
    pub degenerate_layout: bool,
    pub holes: AssemblyOutcome,
    pub triangles: usize,
}

/// Panel size in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Dimensions {
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
}

/// Builds a sign with the built-in BSP engine.
///
/// # Example
///
/// ```rust
/// use config::SignConfig;
/// use ledsign_core::{build_sign, SignParams};
///
/// let sign = build_sign(&SignParams::default(), &SignConfig::default()).unwrap();
/// assert_eq!(sign.grid().len(), 1);
/// assert!(sign.outcome().holes_present());
/// ```
pub fn build_sign(params: &SignParams, config: &SignConfig) -> Result<LedSign, SignError> {
    build_sign_with(&BspEngine, params, config)
}

/// Builds a sign with the given boolean engine.
///
/// # Errors
///
/// - [`SignError::Layout`] for invalid parameters or overlapping holes
/// - [`SignError::Mesh`] if a primitive cannot be built
/// - [`SignError::HolesNotCut`] in strict mode when the subtraction fails
pub fn build_sign_with(
    engine: &dyn BooleanEngine,
    params: &SignParams,
    config: &SignConfig,
) -> Result<LedSign, SignError> {
    let panel = params.validate(config)?;
    let grid = compute_grid(panel.width(), panel.height(), params.spacing, params.margin)?;
    grid.check_clearance(params.led_diameter)?;

    let base = build_base_plate(&panel)?;
    let holes = build_holes(
        &panel,
        &grid,
        params.led_diameter,
        params.hole_depth,
        config.hole_segments,
    )?;
    let cutter = combine(&holes);
    debug!(
        holes = holes.len(),
        cutter_triangles = cutter.triangle_count(),
        "built primitives"
    );

    let assembly = assemble_with(engine, base, &cutter);
    if config.strict_booleans {
        if let AssemblyOutcome::Fallback { reason } = &assembly.outcome {
            return Err(SignError::HolesNotCut {
                reason: reason.clone(),
            });
        }
    }

    info!(
        width = panel.width(),
        height = panel.height(),
        leds = grid.len(),
        triangles = assembly.mesh.triangle_count(),
        holes_cut = assembly.outcome.holes_present(),
        "built LED sign"
    );

    Ok(LedSign {
        panel,
        grid,
        mesh: assembly.mesh,
        outcome: assembly.outcome,
    })
}
