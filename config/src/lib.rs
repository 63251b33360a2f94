//! # Config Crate
//!
//! Centralized configuration for the LED sign pipeline.
//! All physical defaults, tolerances and safety limits are defined here so
//! the layout, mesh and assembly crates agree on the same values.
//!
//! ## Usage
//!
//! ```rust
//! use config::constants::{DEFAULT_MARGIN, EPSILON, HOLE_SEGMENTS};
//! use config::SignConfig;
//!
//! // Margins are in centimeters
//! assert_eq!(DEFAULT_MARGIN, 2.0);
//!
//! // Use EPSILON for floating-point comparisons
//! let value: f64 = 1e-11;
//! assert!(value.abs() < EPSILON);
//!
//! // Validated runtime settings
//! let cfg = SignConfig::default();
//! assert_eq!(cfg.hole_segments, HOLE_SEGMENTS);
//! ```
//!
//! ## Design Principles
//!
//! - **Single Source of Truth**: All constants defined once, used everywhere
//! - **No Dependencies**: Pure values and a small validated settings struct
//! - **Service Defaults**: Panel and hole defaults match the sign service

pub mod constants;
pub mod settings;

pub use settings::{ConfigError, SignConfig};
