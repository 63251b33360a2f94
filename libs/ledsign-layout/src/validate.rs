//! # Dimension Validation
//!
//! Checks shared by panel construction, grid layout and sign parameters.
//! Every check rejects non-finite values first.

use crate::error::LayoutError;

/// Rejects NaN and infinities.
pub fn ensure_finite(name: &'static str, value: f64) -> Result<f64, LayoutError> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(LayoutError::invalid(name, value, "must be finite"))
    }
}

/// Requires `value > 0`.
pub fn ensure_positive(name: &'static str, value: f64) -> Result<f64, LayoutError> {
    ensure_finite(name, value)?;
    if value > 0.0 {
        Ok(value)
    } else {
        Err(LayoutError::invalid(name, value, "must be positive"))
    }
}

/// Requires `value >= 0`.
pub fn ensure_non_negative(name: &'static str, value: f64) -> Result<f64, LayoutError> {
    ensure_finite(name, value)?;
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(LayoutError::invalid(name, value, "must not be negative"))
    }
}

/// Requires `value <= max`.
pub fn ensure_at_most(name: &'static str, value: f64, max: f64) -> Result<f64, LayoutError> {
    ensure_finite(name, value)?;
    if value <= max {
        Ok(value)
    } else {
        Err(LayoutError::ExceedsLimit { name, value, max })
    }
}
