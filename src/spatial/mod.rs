//! Fixed geometry and visibility state
//!
//! This module contains the spatial side of the system:
//! - The static adjacency table for the side-3 hexagon
//! - The visibility-overlay graph consumed by the search

/// Visibility-overlay adjacency graph
pub mod graph;
/// Static adjacency table and region definitions
pub mod hexagon;

pub use graph::TriangleGraph;
