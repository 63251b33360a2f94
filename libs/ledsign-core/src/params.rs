//! # Sign Parameters
//!
//! Caller-supplied dimensions for one sign, in centimeters.

use config::constants::{
    approx_equal, DEFAULT_BASE_THICKNESS, DEFAULT_HOLE_DEPTH, DEFAULT_LED_DIAMETER, DEFAULT_MARGIN,
    DEFAULT_PANEL_HEIGHT, DEFAULT_PANEL_WIDTH, DEFAULT_SPACING,
};
use config::SignConfig;
use ledsign_layout::validate::{ensure_at_most, ensure_non_negative, ensure_positive};
use ledsign_layout::{LayoutError, Panel};
use serde::{Deserialize, Serialize};

/// Input to [`crate::build_sign`].
///
/// Missing fields take their defaults when deserialized.
///
/// # Example
///
/// ```rust
/// use ledsign_core::SignParams;
///
/// let params: SignParams = serde_json::from_str(r#"{"width": 21.0, "height": 21.0}"#).unwrap();
/// assert_eq!(params.spacing, 5.0);
/// assert_eq!(params.led_diameter, 3.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SignParams {
    pub width: f64,
    pub height: f64,
    pub thickness: f64,
    /// Desired LED pitch
    pub spacing: f64,
    /// Border kept free of LEDs
    pub margin: f64,
    pub led_diameter: f64,
    /// Depth of each blind hole, measured from the underside
    pub hole_depth: f64,
}

impl Default for SignParams {
    fn default() -> Self {
        Self {
            width: DEFAULT_PANEL_WIDTH,
            height: DEFAULT_PANEL_HEIGHT,
            thickness: DEFAULT_BASE_THICKNESS,
            spacing: DEFAULT_SPACING,
            margin: DEFAULT_MARGIN,
            led_diameter: DEFAULT_LED_DIAMETER,
            hole_depth: DEFAULT_HOLE_DEPTH,
        }
    }
}

impl SignParams {
    /// Checks every dimension and returns the validated panel.
    ///
    /// # Errors
    ///
    /// - [`LayoutError::InvalidDimension`] for non-finite or non-positive
    ///   values, a negative margin, a hole deeper than the plate, or an LED
    ///   at least as wide as the shorter panel side
    /// - [`LayoutError::ExceedsLimit`] for a panel larger than the configured
    ///   maximum
    pub fn validate(&self, config: &SignConfig) -> Result<Panel, LayoutError> {
        let panel = Panel::new(self.width, self.height, self.thickness)?;
        ensure_at_most("width", self.width, config.max_width)?;
        ensure_at_most("height", self.height, config.max_height)?;

        ensure_positive("spacing", self.spacing)?;
        ensure_non_negative("margin", self.margin)?;
        ensure_positive("led_diameter", self.led_diameter)?;
        ensure_positive("hole_depth", self.hole_depth)?;

        if self.hole_depth > self.thickness && !approx_equal(self.hole_depth, self.thickness) {
            return Err(LayoutError::invalid(
                "hole_depth",
                self.hole_depth,
                format!("must not exceed thickness {}", self.thickness),
            ));
        }
        if self.led_diameter >= panel.min_side() {
            return Err(LayoutError::invalid(
                "led_diameter",
                self.led_diameter,
                format!("must be smaller than the shorter panel side {}", panel.min_side()),
            ));
        }

        Ok(panel)
    }
}
