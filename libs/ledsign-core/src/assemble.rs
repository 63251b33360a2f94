//! # Boolean Assembler
//!
//! Subtracts the combined holes from the base plate.
//!
//! A failed subtraction never escapes as an error: the plate comes back
//! unchanged and the [`AssemblyOutcome`] records why.

use ledsign_mesh::{BooleanEngine, BspEngine, Mesh};
use serde::Serialize;
use tracing::{debug, warn};

/// What happened to the holes during assembly.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "status", rename_all = "snake_case")]
pub enum AssemblyOutcome {
    /// The engine subtracted every hole.
    HolesCut,
    /// There was nothing to subtract.
    NoHoles,
    /// The engine failed; the plate was returned without holes.
    Fallback { reason: String },
}

impl AssemblyOutcome {
    /// True only when holes were actually cut.
    pub fn holes_present(&self) -> bool {
        matches!(self, Self::HolesCut)
    }
}

/// Result of [`assemble_with`].
#[derive(Debug, Clone)]
pub struct Assembly {
    pub mesh: Mesh,
    pub outcome: AssemblyOutcome,
}

/// Subtracts `holes` from `base` with the built-in BSP engine.
///
/// Returns `base` unchanged when `holes` is empty or the subtraction fails.
pub fn assemble(base: Mesh, holes: &Mesh) -> Mesh {
    assemble_with(&BspEngine, base, holes).mesh
}

/// Subtracts `holes` from `base` with the given engine.
pub fn assemble_with(engine: &dyn BooleanEngine, base: Mesh, holes: &Mesh) -> Assembly {
    if holes.is_empty() {
        debug!("no holes to subtract");
        return Assembly {
            mesh: base,
            outcome: AssemblyOutcome::NoHoles,
        };
    }

    match engine.difference(&base, holes) {
        Ok(mesh) => Assembly {
            mesh,
            outcome: AssemblyOutcome::HolesCut,
        },
        Err(err) => {
            warn!(error = %err, "hole subtraction failed; returning plate without holes");
            Assembly {
                mesh: base,
                outcome: AssemblyOutcome::Fallback {
                    reason: err.to_string(),
                },
            }
        }
    }
}
