//! # Layout Errors
//!
//! Error types for panel and grid validation.

use thiserror::Error;

/// Errors raised while validating dimensions or laying out LEDs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// A dimension is non-finite, out of range or inconsistent with another
    #[error("Invalid {name}: {value} ({reason})")]
    InvalidDimension {
        name: &'static str,
        value: f64,
        reason: String,
    },

    /// A dimension exceeds the configured maximum
    #[error("{name} {value} exceeds maximum {max}")]
    ExceedsLimit {
        name: &'static str,
        value: f64,
        max: f64,
    },

    /// The grid would hold more LEDs than the safety limit allows
    #[error("Too many LEDs: {count} (max: {max})")]
    TooManyLeds { count: usize, max: usize },

    /// Neighboring holes would touch or overlap
    #[error("LED diameter {diameter} does not fit spacing {spacing}")]
    OverlappingHoles { diameter: f64, spacing: f64 },
}

impl LayoutError {
    /// Creates an invalid dimension error.
    pub fn invalid(name: &'static str, value: f64, reason: impl Into<String>) -> Self {
        Self::InvalidDimension {
            name,
            value,
            reason: reason.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = LayoutError::invalid("spacing", -1.0, "must be positive");
        assert_eq!(err.to_string(), "Invalid spacing: -1 (must be positive)");

        let err = LayoutError::ExceedsLimit {
            name: "width",
            value: 30.0,
            max: 21.0,
        };
        assert_eq!(err.to_string(), "width 30 exceeds maximum 21");
    }
}
