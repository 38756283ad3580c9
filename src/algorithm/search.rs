//! Forcing-pivot exact-cover search
//!
//! Counts complete tilings of the visible region by recursion over the
//! forcing candidates of a single pivot triangle. Each branch hides the
//! three triangles of one candidate, recurses, and reveals them again, so
//! the only state the search carries is the graph's hidden overlay. Nothing
//! is copied on recursion; backtracking cost is three bit flips per branch.
//! Because every candidate removes the pivot and the pivot rule is applied
//! at every level, the visible set strictly shrinks and the search always
//! terminates.

use crate::algorithm::placements::{cover, forcing_placements, uncover};
use crate::algorithm::statistics::SearchStatistics;
use crate::io::error::Result;
use crate::io::progress::SearchProgress;
use crate::spatial::graph::TriangleGraph;

/// Exhaustive tiling counter over an exclusively borrowed graph
///
/// The counter mutates only the graph's hidden overlay and restores it
/// before returning, so the same graph can be counted again or handed to
/// the reference counter afterwards.
pub struct TilingCounter<'graph> {
    graph: &'graph mut TriangleGraph,
    statistics: SearchStatistics,
    progress: Option<SearchProgress>,
}

impl<'graph> TilingCounter<'graph> {
    /// Create a counter over the graph's current visible region
    pub const fn new(graph: &'graph mut TriangleGraph) -> Self {
        Self {
            graph,
            statistics: SearchStatistics::new(),
            progress: None,
        }
    }

    /// Attach a progress display refreshed as the search expands nodes
    pub fn enable_progress(&mut self) {
        self.progress = Some(SearchProgress::new());
    }

    /// Count every complete tiling of the visible region
    ///
    /// Repeated calls return the same integer; the graph's visible state
    /// after the call is identical to before it.
    ///
    /// # Errors
    ///
    /// Propagates graph precondition violations. These indicate a defect in
    /// the search itself and cannot occur through the public constructors.
    pub fn count(&mut self) -> Result<u64> {
        self.statistics = SearchStatistics::new();
        let total = self.count_from(0);
        if let Some(progress) = &self.progress {
            progress.finish();
        }
        total
    }

    /// Statistics accumulated by the most recent count
    pub const fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    fn count_from(&mut self, depth: usize) -> Result<u64> {
        self.statistics.enter_node(depth);
        if let Some(progress) = &self.progress {
            progress.observe_node(self.statistics.nodes_visited);
        }

        // An empty region is tiled by the empty tiling
        let Some(pivot) = self.graph.first_visible() else {
            self.statistics.record_complete_tiling();
            return Ok(1);
        };

        // Visible triangles remain but no tile fits anywhere
        if !self.graph.placement_possible() {
            self.statistics.record_dead_end();
            return Ok(0);
        }

        let candidates = forcing_placements(self.graph, pivot)?;

        let mut total = 0;
        for placement in candidates {
            self.statistics.record_placement();
            let tokens = cover(self.graph, placement)?;
            let outcome = self.count_from(depth + 1);
            uncover(self.graph, tokens);
            total += outcome?;
        }

        Ok(total)
    }
}

/// Count the tilings of the graph's visible region
///
/// Convenience wrapper constructing a [`TilingCounter`] without progress
/// output.
///
/// # Errors
///
/// Propagates graph precondition violations from the search
pub fn count_tilings(graph: &mut TriangleGraph) -> Result<u64> {
    TilingCounter::new(graph).count()
}
