//! Validated runtime settings shared by the LED sign crates.
//!
//! The constants in [`crate::constants`] are compile-time defaults;
//! [`SignConfig`] lets a caller override the tunable subset while keeping
//! every value checked at construction time.

use std::fmt;

use crate::constants::{
    HOLE_SEGMENTS, MAX_HOLE_SEGMENTS, MAX_PANEL_HEIGHT, MAX_PANEL_WIDTH, MIN_HOLE_SEGMENTS,
};

/// Immutable snapshot of pipeline settings.
///
/// # Examples
/// ```
/// use config::SignConfig;
/// let config = SignConfig::default();
/// assert!(!config.strict_booleans);
/// assert_eq!(config.max_width, 21.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SignConfig {
    /// Number of sides used to approximate each mounting hole.
    pub hole_segments: u32,
    /// Largest accepted panel width.
    pub max_width: f64,
    /// Largest accepted panel height.
    pub max_height: f64,
    /// When true, a failed boolean subtraction is reported as an error
    /// instead of falling back to the plain plate.
    pub strict_booleans: bool,
}

impl SignConfig {
    /// Builds a configuration enforcing strict validation of every field.
    ///
    /// # Examples
    /// ```
    /// use config::SignConfig;
    /// let cfg = SignConfig::new(64, 30.0, 30.0, true).expect("valid config");
    /// assert_eq!(cfg.hole_segments, 64);
    /// assert!(SignConfig::new(8, 30.0, 30.0, false).is_err());
    /// ```
    pub fn new(
        hole_segments: u32,
        max_width: f64,
        max_height: f64,
        strict_booleans: bool,
    ) -> Result<Self, ConfigError> {
        if !(MIN_HOLE_SEGMENTS..=MAX_HOLE_SEGMENTS).contains(&hole_segments) {
            return Err(ConfigError::InvalidSegments(hole_segments));
        }
        if !max_width.is_finite() || max_width <= 0.0 {
            return Err(ConfigError::InvalidLimit {
                name: "max_width",
                value: max_width,
            });
        }
        if !max_height.is_finite() || max_height <= 0.0 {
            return Err(ConfigError::InvalidLimit {
                name: "max_height",
                value: max_height,
            });
        }
        Ok(Self {
            hole_segments,
            max_width,
            max_height,
            strict_booleans,
        })
    }

    /// Returns a copy with strict boolean handling switched on or off.
    pub fn with_strict_booleans(self, strict_booleans: bool) -> Self {
        Self {
            strict_booleans,
            ..self
        }
    }
}

impl Default for SignConfig {
    fn default() -> Self {
        Self {
            hole_segments: HOLE_SEGMENTS,
            max_width: MAX_PANEL_WIDTH,
            max_height: MAX_PANEL_HEIGHT,
            strict_booleans: false,
        }
    }
}

/// Error returned when invalid configuration values are provided.
#[derive(Debug, PartialEq)]
pub enum ConfigError {
    /// Raised when the hole segment count is outside the supported range.
    InvalidSegments(u32),
    /// Raised when a panel size limit is zero, negative or not finite.
    InvalidLimit {
        /// Name of the offending field.
        name: &'static str,
        /// Rejected value.
        value: f64,
    },
}

impl fmt::Display for ConfigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ConfigError::InvalidSegments(value) => write!(
                f,
                "hole_segments must be in {MIN_HOLE_SEGMENTS}..={MAX_HOLE_SEGMENTS}: {value}"
            ),
            ConfigError::InvalidLimit { name, value } => {
                write!(f, "{name} must be positive and finite: {value}")
            }
        }
    }
}

impl std::error::Error for ConfigError {}
