//! Brute-force cross-check counter
//!
//! An independent complete algorithm for the same exact-cover problem:
//! enumerate every legal placement of the current state globally, keep those
//! covering the lowest visible triangle, and recurse over that subset. The
//! forcing-pivot reduction in [`search`](crate::algorithm::search) must
//! agree with this counter on every instance; the `--verify` flag and the
//! integration tests hold the two to that.

use crate::algorithm::placements::{Placement, all_placements, cover, uncover};
use crate::io::error::Result;
use crate::spatial::graph::TriangleGraph;

/// Count the tilings of the visible region by global placement enumeration
///
/// Slower than the forcing-pivot search but derived without the
/// forcing-candidate construction, which makes it a meaningful witness for
/// the reduction's completeness. Restores the graph's visible state before
/// returning.
///
/// # Errors
///
/// Propagates graph precondition violations from placement application
pub fn count_tilings_reference(graph: &mut TriangleGraph) -> Result<u64> {
    let Some(lowest) = graph.first_visible() else {
        return Ok(1);
    };

    // The lowest visible triangle must be covered by exactly one placement
    // of any tiling, so only placements containing it need exploring
    let candidates: Vec<Placement> = all_placements(graph)?
        .into_iter()
        .filter(|placement| placement.contains(lowest))
        .collect();

    let mut total = 0;
    for placement in candidates {
        let tokens = cover(graph, placement)?;
        let outcome = count_tilings_reference(graph);
        uncover(graph, tokens);
        total += outcome?;
    }

    Ok(total)
}
