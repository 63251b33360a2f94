//! # Primitives
//!
//! Mesh generation for the solids a sign is assembled from.

pub mod cuboid;
pub mod cylinder;

pub use cuboid::create_box;
pub use cylinder::create_cylinder;
