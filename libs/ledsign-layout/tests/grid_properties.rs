//! Property-based tests for the grid layout.
//!
//! Run with: cargo test -p ledsign-layout -- proptest

use approx::assert_relative_eq;
use ledsign_layout::{compute_grid, LayoutError};
use proptest::prelude::*;

// =============================================================================
// Strategies
// =============================================================================

/// Panel extents covering the supported range and a little beyond.
fn arb_extent() -> impl Strategy<Value = f64> {
    0.5..40.0f64
}

fn arb_spacing() -> impl Strategy<Value = f64> {
    0.5..15.0f64
}

fn arb_margin() -> impl Strategy<Value = f64> {
    0.0..25.0f64
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn proptest_grid_is_never_empty(
        width in arb_extent(),
        height in arb_extent(),
        spacing in arb_spacing(),
        margin in arb_margin(),
    ) {
        let grid = compute_grid(width, height, spacing, margin).unwrap();
        prop_assert!(!grid.is_empty());
        prop_assert_eq!(grid.len(), grid.columns() * grid.rows());
    }

    #[test]
    fn proptest_positions_respect_margins(
        width in arb_extent(),
        height in arb_extent(),
        spacing in arb_spacing(),
        margin in arb_margin(),
    ) {
        let grid = compute_grid(width, height, spacing, margin).unwrap();
        let tol = 1e-9;

        for p in grid.positions() {
            if width - 2.0 * margin > 0.0 {
                prop_assert!(p.x >= margin - tol && p.x <= width - margin + tol);
            } else {
                prop_assert!((p.x - width / 2.0).abs() < tol);
            }
            if height - 2.0 * margin > 0.0 {
                prop_assert!(p.y >= margin - tol && p.y <= height - margin + tol);
            } else {
                prop_assert!((p.y - height / 2.0).abs() < tol);
            }
        }
    }

    #[test]
    fn proptest_grid_is_deterministic(
        width in arb_extent(),
        height in arb_extent(),
        spacing in arb_spacing(),
        margin in arb_margin(),
    ) {
        let a = compute_grid(width, height, spacing, margin).unwrap();
        let b = compute_grid(width, height, spacing, margin).unwrap();
        prop_assert_eq!(a, b);
    }

    #[test]
    fn proptest_spacing_is_uniform(
        width in arb_extent(),
        height in arb_extent(),
        spacing in arb_spacing(),
        margin in arb_margin(),
    ) {
        let grid = compute_grid(width, height, spacing, margin).unwrap();
        let sx = (width - 2.0 * margin) / (grid.columns() as f64 + 1.0);
        let sy = (height - 2.0 * margin) / (grid.rows() as f64 + 1.0);
        prop_assert!((grid.spacing_x() - sx).abs() < 1e-9);
        prop_assert!((grid.spacing_y() - sy).abs() < 1e-9);

        let p = grid.positions();
        for row in 0..grid.rows() {
            for col in 1..grid.columns() {
                let i = row * grid.columns() + col;
                prop_assert!((p[i].x - p[i - 1].x - sx).abs() < 1e-9);
                prop_assert_eq!(p[i].y, p[i - 1].y);
            }
        }
        for row in 1..grid.rows() {
            let i = row * grid.columns();
            prop_assert!((p[i].y - p[i - grid.columns()].y - sy).abs() < 1e-9);
        }
    }

    #[test]
    fn proptest_half_panel_margin_yields_single_led(
        side in arb_extent(),
        spacing in arb_spacing(),
        extra in 0.0..5.0f64,
    ) {
        let margin = side / 2.0 + extra;
        let grid = compute_grid(side, side, spacing, margin).unwrap();
        prop_assert_eq!(grid.len(), 1);
        prop_assert!(grid.is_degenerate());
    }

    #[test]
    fn proptest_one_collapsed_axis_yields_centered_led(
        short in arb_extent(),
        long_extra in 0.0..40.0f64,
        spacing in arb_spacing(),
        extra in 0.0..5.0f64,
        width_collapses in any::<bool>(),
    ) {
        let margin = short / 2.0 + extra;
        let long = 2.0 * margin + long_extra;
        let (width, height) = if width_collapses { (short, long) } else { (long, short) };

        let grid = compute_grid(width, height, spacing, margin).unwrap();
        prop_assert_eq!(grid.len(), 1);
        prop_assert!(grid.is_degenerate());
        let p = grid.positions()[0];
        prop_assert!((p.x - width / 2.0).abs() < 1e-9);
        prop_assert!((p.y - height / 2.0).abs() < 1e-9);
    }

    #[test]
    fn proptest_non_positive_spacing_rejected(
        width in arb_extent(),
        spacing in -10.0..=0.0f64,
    ) {
        let err = compute_grid(width, width, spacing, 1.0).unwrap_err();
        let is_invalid = matches!(err, LayoutError::InvalidDimension { name: "spacing", .. });
        prop_assert!(is_invalid);
    }
}

// =============================================================================
// Reference layouts
// =============================================================================

#[test]
fn test_reference_layouts() {
    let cases = [
        // (width, height, spacing, margin, leds, first x)
        (10.0, 10.0, 5.0, 2.0, 1, 5.0),
        (21.0, 21.0, 5.0, 2.0, 9, 6.25),
        (21.0, 10.0, 5.0, 2.0, 3, 6.25),
        (15.0, 15.0, 3.0, 1.5, 16, 1.5 + 12.0 / 5.0),
    ];

    for (w, h, s, m, leds, first_x) in cases {
        let grid = compute_grid(w, h, s, m).unwrap();
        assert_eq!(grid.len(), leds, "{w}x{h} spacing {s} margin {m}");
        assert_relative_eq!(grid.positions()[0].x, first_x, epsilon = 1e-12);
    }
}
