//! # LED Sign Mesh
//!
//! Triangle mesh solids and the solid-modeling capability used by the sign
//! pipeline.
//!
//! ## Architecture
//!
//! ```text
//! primitives (box, cylinder) → ops::boolean (BSP difference) → export (STL)
//! ```
//!
//! ## Algorithms
//!
//! All algorithms are pure Rust:
//! - **Boolean Operations**: BSP trees (csg.js algorithm) in an index arena
//! - **Primitives**: Custom mesh generation
//! - **Repair**: T-junction splitting so subtraction results stay watertight
//! - **Export**: Binary and ASCII STL
//!
//! ## Usage
//!
//! ```rust
//! use glam::DVec3;
//! use ledsign_mesh::primitives::{create_box, create_cylinder};
//! use ledsign_mesh::{BooleanEngine, BspEngine};
//!
//! let plate = create_box(DVec3::new(10.0, 10.0, 2.0), true).unwrap();
//! let hole = create_cylinder(3.0, 1.5, true, 32).unwrap();
//! let result = BspEngine.difference(&plate, &hole).unwrap();
//! assert!(result.signed_volume() < plate.signed_volume());
//! assert!(result.is_watertight());
//! ```

pub mod error;
pub mod export;
pub mod mesh;
pub mod ops;
pub mod primitives;
pub mod repair;

pub use error::MeshError;
pub use export::{save_stl, write_stl_ascii, write_stl_binary};
pub use mesh::Mesh;
pub use ops::boolean::{difference, BooleanEngine, BspEngine};
