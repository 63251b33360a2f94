//! # LED Sign Layout
//!
//! Panel geometry and LED placement for LED sign panels.
//!
//! ## Architecture
//!
//! ```text
//! Panel (dimensions, frames) + compute_grid (LED centers) → ledsign-core
//! ```
//!
//! All functions are pure and deterministic. Dimensions are in centimeters.
//!
//! ## Usage
//!
//! ```rust
//! use ledsign_layout::{compute_grid, Panel};
//!
//! let panel = Panel::new(21.0, 21.0, 2.0).unwrap();
//! let grid = compute_grid(panel.width(), panel.height(), 5.0, 2.0).unwrap();
//! for led in grid.iter() {
//!     let center = panel.to_model_frame(*led);
//!     assert!(center.x.abs() < panel.width() / 2.0);
//! }
//! ```

pub mod error;
pub mod grid;
pub mod panel;
pub mod validate;

pub use error::LayoutError;
pub use grid::{compute_grid, compute_grid_default, Grid};
pub use panel::{LedPosition, Panel};
