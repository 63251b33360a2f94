//! # Grid Layout Engine
//!
//! Places LEDs on an evenly spaced grid inside the panel margins.
//!
//! ## Algorithm
//!
//! For each axis with panel extent `L`:
//!
//! ```text
//! effective = L - 2 * margin
//! n         = max(1, floor(effective / spacing))
//! actual    = effective / (n + 1)
//! pos(i)    = margin + (i + 1) * actual      for i in 0..n
//! ```
//!
//! When the margin consumes either axis (`effective <= 0`), the layout is
//! degenerate: both counts are forced to 1 and the single LED sits at the
//! panel center.

use config::constants::{DEFAULT_MARGIN, MAX_LED_COUNT};
use serde::Serialize;
use tracing::{debug, warn};

use crate::error::LayoutError;
use crate::panel::LedPosition;
use crate::validate::{ensure_non_negative, ensure_positive};

/// An ordered LED layout.
///
/// Positions are row-major: y outer, x inner. LED #0 has the lowest y, then
/// the lowest x. A grid always holds at least one position.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Grid {
    positions: Vec<LedPosition>,
    columns: usize,
    rows: usize,
    spacing_x: f64,
    spacing_y: f64,
    degenerate: bool,
}

impl Grid {
    /// LED centers in row-major order.
    pub fn positions(&self) -> &[LedPosition] {
        &self.positions
    }

    pub fn iter(&self) -> impl Iterator<Item = &LedPosition> {
        self.positions.iter()
    }

    /// Number of LEDs.
    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// A computed grid is never empty.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    /// LEDs per row.
    pub fn columns(&self) -> usize {
        self.columns
    }

    /// Number of rows.
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Actual center-to-center distance along X.
    pub fn spacing_x(&self) -> f64 {
        self.spacing_x
    }

    /// Actual center-to-center distance along Y.
    pub fn spacing_y(&self) -> f64 {
        self.spacing_y
    }

    /// True when the margin consumed the effective area on some axis.
    pub fn is_degenerate(&self) -> bool {
        self.degenerate
    }

    /// Verifies that holes of `diameter` do not touch their neighbors.
    ///
    /// Axes with a single LED have no neighbors and always pass.
    pub fn check_clearance(&self, diameter: f64) -> Result<(), LayoutError> {
        ensure_positive("diameter", diameter)?;

        for (count, spacing) in [(self.columns, self.spacing_x), (self.rows, self.spacing_y)] {
            if count > 1 && spacing <= diameter {
                return Err(LayoutError::OverlappingHoles { diameter, spacing });
            }
        }
        Ok(())
    }
}

/// Computes LED positions for a panel.
///
/// # Arguments
///
/// * `width` - Panel width (cm, > 0)
/// * `height` - Panel height (cm, > 0)
/// * `spacing` - Desired LED pitch (cm, > 0)
/// * `margin` - Border kept free of LEDs (cm, >= 0)
///
/// # Errors
///
/// [`LayoutError::InvalidDimension`] for out-of-range or non-finite inputs,
/// [`LayoutError::TooManyLeds`] if the layout exceeds `MAX_LED_COUNT`.
///
/// # Example
///
/// ```rust
/// use ledsign_layout::compute_grid;
///
/// let grid = compute_grid(21.0, 21.0, 5.0, 2.0).unwrap();
/// assert_eq!(grid.len(), 9);
/// assert_eq!(grid.spacing_x(), 4.25);
/// assert_eq!(grid.positions()[0].x, 6.25);
/// ```
pub fn compute_grid(
    width: f64,
    height: f64,
    spacing: f64,
    margin: f64,
) -> Result<Grid, LayoutError> {
    ensure_positive("width", width)?;
    ensure_positive("height", height)?;
    ensure_positive("spacing", spacing)?;
    ensure_non_negative("margin", margin)?;

    let mut x_axis = Axis::new(width, spacing, margin);
    let mut y_axis = Axis::new(height, spacing, margin);
    let degenerate = x_axis.degenerate || y_axis.degenerate;
    if degenerate {
        x_axis = Axis::single(width, margin);
        y_axis = Axis::single(height, margin);
    }

    let count = x_axis.count * y_axis.count;
    if !count.is_finite() || count > MAX_LED_COUNT as f64 {
        return Err(LayoutError::TooManyLeds {
            count: count as usize,
            max: MAX_LED_COUNT,
        });
    }

    let columns = x_axis.count as usize;
    let rows = y_axis.count as usize;

    let mut positions = Vec::with_capacity(columns * rows);
    for j in 0..rows {
        let y = y_axis.position(margin, j);
        for i in 0..columns {
            positions.push(LedPosition::new(x_axis.position(margin, i), y));
        }
    }

    debug!(
        columns,
        rows,
        spacing_x = x_axis.spacing,
        spacing_y = y_axis.spacing,
        "computed LED grid"
    );
    if degenerate {
        warn!(
            width,
            height,
            margin,
            "margin leaves no usable area; placing a single LED at the panel center"
        );
    }

    Ok(Grid {
        positions,
        columns,
        rows,
        spacing_x: x_axis.spacing,
        spacing_y: y_axis.spacing,
        degenerate,
    })
}

/// [`compute_grid`] with the default margin.
pub fn compute_grid_default(width: f64, height: f64, spacing: f64) -> Result<Grid, LayoutError> {
    compute_grid(width, height, spacing, DEFAULT_MARGIN)
}

/// Layout along one axis.
struct Axis {
    count: f64,
    spacing: f64,
    degenerate: bool,
}

impl Axis {
    fn new(extent: f64, spacing: f64, margin: f64) -> Self {
        let effective = extent - 2.0 * margin;
        let count = (effective / spacing).floor().max(1.0);
        Self {
            count,
            spacing: effective / (count + 1.0),
            degenerate: effective <= 0.0,
        }
    }

    /// One LED on the axis midpoint.
    fn single(extent: f64, margin: f64) -> Self {
        let effective = extent - 2.0 * margin;
        Self {
            count: 1.0,
            spacing: effective / 2.0,
            degenerate: effective <= 0.0,
        }
    }

    fn position(&self, margin: f64, index: usize) -> f64 {
        margin + (index as f64 + 1.0) * self.spacing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_default_panel_single_led() {
        let grid = compute_grid(10.0, 10.0, 5.0, 2.0).unwrap();
        assert_eq!(grid.len(), 1);
        assert_eq!(grid.positions()[0], LedPosition::new(5.0, 5.0));
        assert!(!grid.is_degenerate());
    }

    #[test]
    fn test_max_panel_nine_leds() {
        let grid = compute_grid(21.0, 21.0, 5.0, 2.0).unwrap();
        assert_eq!(grid.len(), 9);
        assert_eq!((grid.columns(), grid.rows()), (3, 3));
        assert_relative_eq!(grid.spacing_x(), 4.25);
        assert_relative_eq!(grid.spacing_y(), 4.25);

        let xs: Vec<f64> = grid.positions()[..3].iter().map(|p| p.x).collect();
        assert_eq!(xs, vec![6.25, 10.5, 14.75]);
    }

    #[test]
    fn test_row_major_order() {
        let grid = compute_grid(21.0, 15.0, 5.0, 2.0).unwrap();
        assert_eq!((grid.columns(), grid.rows()), (3, 2));
        let p = grid.positions();
        // Second LED is the next column of the first row
        assert_eq!(p[1].y, p[0].y);
        assert!(p[1].x > p[0].x);
        // Fourth LED starts the second row
        assert!(p[3].y > p[0].y);
        assert_eq!(p[3].x, p[0].x);
    }

    #[test]
    fn test_degenerate_margin() {
        let grid = compute_grid(10.0, 10.0, 5.0, 5.0).unwrap();
        assert_eq!(grid.len(), 1);
        assert!(grid.is_degenerate());
        assert_eq!(grid.positions()[0], LedPosition::new(5.0, 5.0));
    }

    #[test]
    fn test_margin_larger_than_half_panel() {
        let grid = compute_grid(8.0, 8.0, 1.0, 6.0).unwrap();
        assert_eq!(grid.len(), 1);
        assert_relative_eq!(grid.positions()[0].x, 4.0);
        assert_relative_eq!(grid.positions()[0].y, 4.0);
    }

    #[test]
    fn test_narrow_panel_collapses_to_center() {
        let grid = compute_grid(3.0, 20.0, 5.0, 2.0).unwrap();
        assert_eq!(grid.len(), 1);
        assert_eq!((grid.columns(), grid.rows()), (1, 1));
        assert!(grid.is_degenerate());
        assert_relative_eq!(grid.positions()[0].x, 1.5);
        assert_relative_eq!(grid.positions()[0].y, 10.0);
    }

    #[test]
    fn test_short_panel_collapses_to_center() {
        let grid = compute_grid(21.0, 4.0, 5.0, 2.0).unwrap();
        assert_eq!(grid.len(), 1);
        assert_relative_eq!(grid.positions()[0].x, 10.5);
        assert_relative_eq!(grid.positions()[0].y, 2.0);
    }

    #[test]
    fn test_zero_margin() {
        let grid = compute_grid(10.0, 10.0, 2.0, 0.0).unwrap();
        assert_eq!(grid.columns(), 5);
        assert_relative_eq!(grid.spacing_x(), 10.0 / 6.0);
    }

    #[test]
    fn test_invalid_inputs() {
        assert!(compute_grid(0.0, 10.0, 5.0, 2.0).is_err());
        assert!(compute_grid(10.0, -1.0, 5.0, 2.0).is_err());
        assert!(compute_grid(10.0, 10.0, 0.0, 2.0).is_err());
        assert!(compute_grid(10.0, 10.0, 5.0, -0.5).is_err());
        assert!(compute_grid(10.0, 10.0, f64::NAN, 2.0).is_err());
    }

    #[test]
    fn test_too_many_leds() {
        let err = compute_grid(20.0, 20.0, 0.001, 0.0).unwrap_err();
        assert!(matches!(err, LayoutError::TooManyLeds { .. }));
    }

    #[test]
    fn test_compute_grid_default_uses_default_margin() {
        let a = compute_grid_default(21.0, 21.0, 5.0).unwrap();
        let b = compute_grid(21.0, 21.0, 5.0, DEFAULT_MARGIN).unwrap();
        assert_eq!(a, b);
    }

    #[test]
    fn test_check_clearance() {
        let grid = compute_grid(21.0, 21.0, 5.0, 2.0).unwrap();
        assert!(grid.check_clearance(3.0).is_ok());
        assert!(matches!(
            grid.check_clearance(4.25),
            Err(LayoutError::OverlappingHoles { .. })
        ));
    }

    #[test]
    fn test_check_clearance_single_led_always_fits() {
        let grid = compute_grid(10.0, 10.0, 5.0, 2.0).unwrap();
        assert!(grid.check_clearance(9.0).is_ok());
    }
}
