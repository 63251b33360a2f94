//! # Sign Errors
//!
//! Top-level error type for the sign pipeline.

use config::ConfigError;
use ledsign_layout::LayoutError;
use ledsign_mesh::MeshError;
use thiserror::Error;

/// Errors returned by [`crate::build_sign`] and its building blocks.
#[derive(Debug, Error)]
pub enum SignError {
    /// Parameters failed validation
    #[error(transparent)]
    Layout(#[from] LayoutError),

    /// Mesh construction or export failed
    #[error(transparent)]
    Mesh(#[from] MeshError),

    /// Invalid runtime configuration
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// Strict mode: the boolean engine failed and the plate has no holes
    #[error("LED holes were not cut: {reason}")]
    HolesNotCut { reason: String },
}
