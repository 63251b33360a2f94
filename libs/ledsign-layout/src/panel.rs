//! # Panel
//!
//! Physical panel dimensions and the two coordinate frames used by the
//! pipeline.
//!
//! - **Panel-local**: origin at the lower-left corner, used by the grid.
//! - **Model**: centered at the origin in X/Y with the base resting on Z=0,
//!   used by the meshes.

use glam::DVec2;
use serde::Serialize;

use crate::error::LayoutError;
use crate::validate::ensure_positive;

/// A rectangular sign panel, in centimeters.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Panel {
    width: f64,
    height: f64,
    thickness: f64,
}

impl Panel {
    /// Creates a panel, rejecting non-positive or non-finite dimensions.
    ///
    /// # Example
    ///
    /// ```rust
    /// use ledsign_layout::Panel;
    ///
    /// let panel = Panel::new(10.0, 10.0, 2.0).unwrap();
    /// assert_eq!(panel.width(), 10.0);
    /// assert!(Panel::new(0.0, 10.0, 2.0).is_err());
    /// ```
    pub fn new(width: f64, height: f64, thickness: f64) -> Result<Self, LayoutError> {
        Ok(Self {
            width: ensure_positive("width", width)?,
            height: ensure_positive("height", height)?,
            thickness: ensure_positive("thickness", thickness)?,
        })
    }

    #[inline]
    pub fn width(&self) -> f64 {
        self.width
    }

    #[inline]
    pub fn height(&self) -> f64 {
        self.height
    }

    #[inline]
    pub fn thickness(&self) -> f64 {
        self.thickness
    }

    /// Length of the shorter side.
    pub fn min_side(&self) -> f64 {
        self.width.min(self.height)
    }

    /// Maps a panel-local position into the centered model frame.
    pub fn to_model_frame(&self, position: LedPosition) -> DVec2 {
        DVec2::from(position) - DVec2::new(self.width, self.height) / 2.0
    }

    /// Whether a panel-local point lies on or inside the panel outline.
    pub fn contains(&self, position: LedPosition) -> bool {
        (0.0..=self.width).contains(&position.x) && (0.0..=self.height).contains(&position.y)
    }
}

/// LED center in panel-local coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct LedPosition {
    pub x: f64,
    pub y: f64,
}

impl LedPosition {
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }
}

impl From<LedPosition> for DVec2 {
    fn from(position: LedPosition) -> Self {
        DVec2::new(position.x, position.y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_panel_rejects_invalid_dimensions() {
        assert!(Panel::new(-1.0, 10.0, 2.0).is_err());
        assert!(Panel::new(10.0, f64::NAN, 2.0).is_err());
        assert!(matches!(
            Panel::new(10.0, 10.0, 0.0),
            Err(LayoutError::InvalidDimension { name: "thickness", .. })
        ));
    }

    #[test]
    fn test_to_model_frame_centers_panel() {
        let panel = Panel::new(10.0, 20.0, 2.0).unwrap();
        assert_eq!(
            panel.to_model_frame(LedPosition::new(5.0, 10.0)),
            DVec2::ZERO
        );
        assert_eq!(
            panel.to_model_frame(LedPosition::new(0.0, 0.0)),
            DVec2::new(-5.0, -10.0)
        );
    }

    #[test]
    fn test_contains() {
        let panel = Panel::new(10.0, 10.0, 2.0).unwrap();
        assert!(panel.contains(LedPosition::new(0.0, 10.0)));
        assert!(!panel.contains(LedPosition::new(10.5, 5.0)));
    }
}
