//! # LED Sign Core
//!
//! Turns sign parameters into a printable panel: a base plate with one blind
//! mounting hole per LED, cut from the underside.
//!
//! ## Architecture
//!
//! ```text
//! ledsign-layout (Grid) → builder (plate, holes) → combine → assemble → LedSign
//! ```
//!
//! ## Components
//!
//! - **Primitive Builder** ([`builder`]): base plate and hole solids
//! - **Mesh Combiner** ([`combine()`]): disjoint union of the holes
//! - **Boolean Assembler** ([`assemble`]): subtraction with fallback
//! - **Pipeline** ([`build_sign`]): validation through final solid
//!
//! ## Usage
//!
//! ```rust,no_run
//! use config::SignConfig;
//! use ledsign_core::{build_sign, SignParams};
//!
//! let params = SignParams { width: 21.0, height: 21.0, ..Default::default() };
//! let sign = build_sign(&params, &SignConfig::default())?;
//! sign.write_stl("sign.stl", true)?;
//! # Ok::<(), ledsign_core::SignError>(())
//! ```

pub mod assemble;
pub mod builder;
pub mod combine;
pub mod error;
pub mod params;
pub mod pipeline;

pub use assemble::{assemble, assemble_with, Assembly, AssemblyOutcome};
pub use builder::{build_base_plate, build_hole, build_holes};
pub use combine::combine;
pub use error::SignError;
pub use params::SignParams;
pub use pipeline::{build_sign, build_sign_with, Dimensions, LedSign, SignReport};
