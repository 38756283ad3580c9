//! Exhaustive counter for perfect three-triangle tilings of a triangular-grid hexagon
//!
//! The side-3 hexagon of 54 unit triangles is modelled as a fixed adjacency
//! graph with a reversible visibility overlay. Tilings are counted by a
//! recursive exact-cover search that pivots on one triangle at a time and
//! enumerates only the placements able to cover it.

#![forbid(unsafe_code)]

/// Core counting algorithm: placement enumeration, forcing-pivot search, and cross-checks
pub mod algorithm;
/// Input/output operations and error handling
pub mod io;
/// Fixed hexagon geometry and the visibility-overlay graph
pub mod spatial;

pub use io::error::{AlgorithmError, Result};
