//! Legal tile placement enumeration and application
//!
//! A tile covers three triangles forming a path in the adjacency graph: a
//! middle triangle together with two of its visible neighbors. For a chosen
//! pivot the forcing candidates split into two shapes. Inclusion candidates
//! put the pivot in the middle of its own tile. Exclusion candidates put a
//! neighbor in the middle, pairing it with the pivot and one second-order
//! neighbor, which covers the pivot as the spare end of someone else's tile.
//! Every tiling of the current state contains exactly one candidate from the
//! union, and because the adjacency graph is triangle-free no candidate is
//! generated twice.

use crate::io::configuration::{MAX_PLACEMENTS_PER_PIVOT, TILE_SIZE};
use crate::io::error::Result;
use crate::spatial::graph::{HideToken, TriangleGraph};
use std::fmt;

/// Unordered set of three triangles removable together as one tile
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Placement {
    indices: [usize; TILE_SIZE],
}

impl Placement {
    /// Create a placement from three distinct triangle indices
    pub fn new(first: usize, second: usize, third: usize) -> Self {
        let mut indices = [first, second, third];
        indices.sort_unstable();
        Self { indices }
    }

    /// The three triangle indices in ascending order
    pub const fn indices(&self) -> [usize; TILE_SIZE] {
        self.indices
    }

    /// Test triangle membership
    pub fn contains(&self, index: usize) -> bool {
        self.indices.contains(&index)
    }
}

impl fmt::Display for Placement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let [low, mid, high] = self.indices;
        write!(f, "{{{low}, {mid}, {high}}}")
    }
}

/// Enumerate every placement able to cover `pivot` in the current state
///
/// The pivot must appear in exactly one placement of any complete tiling, so
/// recursing over this union alone is sound and complete. At most
/// [`MAX_PLACEMENTS_PER_PIVOT`] candidates are returned.
///
/// # Errors
///
/// Returns an error if `pivot` is out of range or hidden
pub fn forcing_placements(graph: &TriangleGraph, pivot: usize) -> Result<Vec<Placement>> {
    let neighbors = graph.neighbors(pivot)?;
    let mut candidates = Vec::with_capacity(MAX_PLACEMENTS_PER_PIVOT);

    for first in neighbors.iter() {
        // Inclusion: the pivot is the middle of its own tile
        for second in neighbors.iter() {
            if first < second {
                candidates.push(Placement::new(first, pivot, second));
            }
        }

        // Exclusion: the neighbor is the middle and the pivot the spare end
        let second_order = graph.neighbors(first)?;
        for distant in second_order.iter() {
            if distant != pivot {
                candidates.push(Placement::new(pivot, first, distant));
            }
        }
    }

    Ok(candidates)
}

/// Enumerate every legal placement of the current visible state
///
/// Each visible triangle of visible degree `d >= 2` contributes its
/// choose-2-of-`d` middle-position placements. Distinct middles always give
/// distinct sets in a triangle-free graph, so the result has no duplicates.
///
/// # Errors
///
/// Propagates graph query failures; none occur for indices the graph itself
/// reports visible
pub fn all_placements(graph: &TriangleGraph) -> Result<Vec<Placement>> {
    let mut placements = Vec::new();

    for middle in graph.visible() {
        let neighbors = graph.neighbors(middle)?;
        for first in neighbors.iter() {
            for second in neighbors.iter() {
                if first < second {
                    placements.push(Placement::new(first, middle, second));
                }
            }
        }
    }

    Ok(placements)
}

/// Hide all three triangles of a placement, keeping the tokens in hide order
///
/// On any failure the triangles already hidden are revealed again, so the
/// graph is left untouched by a failed cover.
pub(crate) fn cover(
    graph: &mut TriangleGraph,
    placement: Placement,
) -> Result<[HideToken; TILE_SIZE]> {
    let [low, mid, high] = placement.indices();

    let low_token = graph.hide(low)?;
    let mid_token = match graph.hide(mid) {
        Ok(token) => token,
        Err(error) => {
            graph.reveal(low_token);
            return Err(error);
        }
    };
    let high_token = match graph.hide(high) {
        Ok(token) => token,
        Err(error) => {
            graph.reveal(mid_token);
            graph.reveal(low_token);
            return Err(error);
        }
    };

    Ok([low_token, mid_token, high_token])
}

/// Reveal a covered placement, consuming its tokens in reverse hide order
pub(crate) fn uncover(graph: &mut TriangleGraph, tokens: [HideToken; TILE_SIZE]) {
    let [low_token, mid_token, high_token] = tokens;
    graph.reveal(high_token);
    graph.reveal(mid_token);
    graph.reveal(low_token);
}
