//! # Mesh Errors

use thiserror::Error;

/// Failures raised while building, subtracting or writing solids.
#[derive(Debug, Error)]
pub enum MeshError {
    /// A face references a missing vertex, repeats a corner or has no area.
    #[error("invalid mesh topology: {message}")]
    InvalidTopology { message: String },

    /// Non-positive sizes, too few segments or non-finite coordinates.
    #[error("degenerate geometry: {message}")]
    DegenerateGeometry { message: String },

    #[error("boolean difference failed: {message}")]
    BooleanFailed { message: String },

    /// Operand larger than the subtraction will accept.
    #[error("mesh has {count} triangles, limit is {max}")]
    TooManyTriangles { count: usize, max: usize },

    #[error("mesh export failed: {0}")]
    Io(#[from] std::io::Error),
}

impl MeshError {
    pub fn invalid_topology(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::InvalidTopology { message }
    }

    pub fn degenerate(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::DegenerateGeometry { message }
    }

    pub fn boolean_failed(message: impl Into<String>) -> Self {
        let message = message.into();
        Self::BooleanFailed { message }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_boolean_failure_message() {
        let err = MeshError::boolean_failed("coincident faces");
        assert_eq!(
            err.to_string(),
            "boolean difference failed: coincident faces"
        );
    }

    #[test]
    fn test_io_error_converts() {
        let io = std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only");
        let err: MeshError = io.into();
        assert!(matches!(err, MeshError::Io(_)));
        assert!(err.to_string().contains("read-only"));
    }

    #[test]
    fn test_mesh_error_crosses_threads() {
        fn is_send_sync<T: Send + Sync>() {}
        is_send_sync::<MeshError>();
    }
}
