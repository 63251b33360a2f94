//! # Sign Constants
//!
//! Centralized constants for the LED sign pipeline. Physical defaults,
//! tessellation parameters, precision values and safety limits live here.
//!
//! All lengths are in centimeters.
//!
//! Grouped into tolerances, panel and LED defaults, hole tessellation and
//! hard limits.

// =============================================================================
// PRECISION CONSTANTS
// =============================================================================

/// Absolute tolerance for comparing lengths that went through arithmetic,
/// such as grid coordinates and volumes.
///
/// # Example
///
/// ```rust
/// use config::constants::EPSILON;
///
/// let spacing: f64 = 8.5 / 2.0;
/// assert!((spacing - 4.25).abs() < EPSILON);
/// ```
pub const EPSILON: f64 = 1e-10;

/// Minimum triangle area (twice the area, as a cross product length) for a
/// triangle to count as non-degenerate during mesh validation.
pub const VERTEX_MERGE_EPSILON: f64 = 1e-8;

/// Tolerance for classifying a point against a BSP splitting plane.
///
/// Points closer to the plane than this are treated as coplanar. Same value
/// as the csg.js tolerance; looser than [`EPSILON`] since split vertices
/// carry rounding error.
///
/// # Example
///
/// ```rust
/// use config::constants::{EPSILON, PLANE_EPSILON};
/// assert!(PLANE_EPSILON > EPSILON);
/// ```
pub const PLANE_EPSILON: f64 = 1e-5;

/// Quantization factor used when welding vertices after a boolean operation.
///
/// Coordinates are multiplied by this factor and rounded to integers, so two
/// vertices closer than `1 / WELD_SCALE` collapse to a single index.
///
/// # Example
///
/// ```rust
/// use config::constants::WELD_SCALE;
///
/// fn weld_key(value: f64) -> i64 {
///     (value * WELD_SCALE).round() as i64
/// }
///
/// assert_eq!(weld_key(1.0), weld_key(1.0 + 1e-9));
/// ```
pub const WELD_SCALE: f64 = 1e6;

// =============================================================================
// PANEL CONSTANTS
// =============================================================================

/// Default panel width.
pub const DEFAULT_PANEL_WIDTH: f64 = 10.0;

/// Default panel height.
pub const DEFAULT_PANEL_HEIGHT: f64 = 10.0;

/// Maximum printable panel width.
///
/// Matches the bed size the sign service was built around.
///
/// # Example
///
/// ```rust
/// use config::constants::{DEFAULT_PANEL_WIDTH, MAX_PANEL_WIDTH};
/// assert!(DEFAULT_PANEL_WIDTH <= MAX_PANEL_WIDTH);
/// ```
pub const MAX_PANEL_WIDTH: f64 = 21.0;

/// Maximum printable panel height.
pub const MAX_PANEL_HEIGHT: f64 = 21.0;

/// Default thickness of the base plate.
pub const DEFAULT_BASE_THICKNESS: f64 = 2.0;

// =============================================================================
// LED CONSTANTS
// =============================================================================

/// Default requested distance between LED centers.
///
/// The grid engine may shrink the actual spacing to distribute LEDs evenly.
pub const DEFAULT_SPACING: f64 = 5.0;

/// Default border kept free of LEDs on every side of the panel.
///
/// # Example
///
/// ```rust
/// use config::constants::DEFAULT_MARGIN;
///
/// let width = 10.0;
/// let effective_width = width - 2.0 * DEFAULT_MARGIN;
/// assert_eq!(effective_width, 6.0);
/// ```
pub const DEFAULT_MARGIN: f64 = 2.0;

/// Default LED body diameter (a 3 mm LED).
pub const DEFAULT_LED_DIAMETER: f64 = 3.0;

/// Default depth of the blind mounting hole, measured from the underside.
pub const DEFAULT_HOLE_DEPTH: f64 = 1.5;

// =============================================================================
// RESOLUTION CONSTANTS
// =============================================================================

/// Default number of sides used to approximate a mounting hole.
///
/// # Example
///
/// ```rust
/// use config::constants::{HOLE_SEGMENTS, MIN_HOLE_SEGMENTS};
/// assert!(HOLE_SEGMENTS >= MIN_HOLE_SEGMENTS);
/// ```
pub const HOLE_SEGMENTS: u32 = 32;

/// Fewest sides a mounting hole may have.
pub const MIN_HOLE_SEGMENTS: u32 = 32;

/// Most sides a mounting hole may have.
pub const MAX_HOLE_SEGMENTS: u32 = 1000;

// =============================================================================
// LIMIT CONSTANTS
// =============================================================================

/// Maximum number of LED positions a single grid may contain.
///
/// Guards the grid engine against tiny spacings that would otherwise
/// allocate unbounded position lists.
///
/// # Example
///
/// ```rust
/// use config::constants::MAX_LED_COUNT;
///
/// let columns = 21;
/// let rows = 21;
/// assert!(columns * rows < MAX_LED_COUNT);
/// ```
pub const MAX_LED_COUNT: usize = 10_000;

/// Largest operand, in triangles, the boolean difference accepts.
pub const MAX_TRIANGLES: usize = 2_000_000;

// =============================================================================
// HELPER FUNCTIONS
// =============================================================================

/// `a` and `b` differ by less than [`EPSILON`].
///
/// ```rust
/// use config::constants::approx_equal;
///
/// assert!(approx_equal(0.1 + 0.2, 0.3));
/// assert!(!approx_equal(4.25, 4.2501));
/// ```
#[inline]
pub fn approx_equal(a: f64, b: f64) -> bool {
    approx_zero(a - b)
}

/// `value` lies within [`EPSILON`] of zero.
#[inline]
pub fn approx_zero(value: f64) -> bool {
    value.abs() < EPSILON
}
