//! Command-line interface for counting tilings of the fixed regions

use crate::algorithm::reference::count_tilings_reference;
use crate::algorithm::search::TilingCounter;
use crate::algorithm::statistics::SearchStatistics;
use crate::io::error::{AlgorithmError, Result};
use crate::spatial::graph::TriangleGraph;
use clap::{Parser, ValueEnum};

/// Fixed sub-regions of the hexagon available for counting
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum)]
pub enum Region {
    /// All 54 triangles of the side-3 hexagon
    #[default]
    Full,
    /// The six-triangle radius-1 sub-hexagon at the top corner
    Corner,
}

#[derive(Parser)]
#[command(name = "hexcover")]
#[command(
    author,
    version,
    about = "Count perfect three-triangle tilings of a hexagon region"
)]
/// Command-line arguments for the tiling counter
// CLI tools commonly need multiple boolean flags for various features and user preferences
#[allow(clippy::struct_excessive_bools)]
pub struct Cli {
    /// Region of the hexagon to count tilings of
    #[arg(short, long, value_enum, default_value_t = Region::Full)]
    pub region: Region,

    /// Additional triangle indices to pre-hide from the region
    #[arg(long, value_name = "INDEX")]
    pub hide: Vec<usize>,

    /// Cross-check the result against the brute-force reference counter
    #[arg(short, long)]
    pub verify: bool,

    /// Print search statistics after the count
    #[arg(short, long)]
    pub stats: bool,

    /// Print the visible adjacency structure before counting
    #[arg(short = 'g', long)]
    pub show_graph: bool,

    /// Suppress progress output
    #[arg(short, long)]
    pub quiet: bool,
}

impl Cli {
    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Orchestrates graph construction, counting, and result reporting
pub struct CountRunner {
    cli: Cli,
}

impl CountRunner {
    /// Create a runner for the given CLI arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Build the region, run the count, and print the result
    ///
    /// The count itself is the only line written to stdout; everything else
    /// goes to stderr or the progress display.
    ///
    /// # Errors
    ///
    /// Returns an error if region construction rejects a pre-hide index or
    /// if `--verify` detects a count disagreement
    pub fn run(&self) -> Result<()> {
        let mut graph = self.build_graph()?;

        if self.cli.show_graph {
            Self::emit_graph(&graph);
        }

        let (count, statistics) = {
            let mut counter = TilingCounter::new(&mut graph);
            if self.cli.should_show_progress() {
                counter.enable_progress();
            }
            let count = counter.count()?;
            (count, *counter.statistics())
        };

        if self.cli.verify {
            let reference = count_tilings_reference(&mut graph)?;
            if reference != count {
                return Err(AlgorithmError::CountMismatch {
                    forcing: count,
                    reference,
                });
            }
        }

        Self::emit_count(count);

        if self.cli.stats {
            Self::emit_statistics(&statistics);
        }

        Ok(())
    }

    fn build_graph(&self) -> Result<TriangleGraph> {
        let mut graph = match self.cli.region {
            Region::Full => TriangleGraph::hexagon(),
            Region::Corner => TriangleGraph::corner(),
        };
        graph.exclude(self.cli.hide.iter().copied())?;
        Ok(graph)
    }

    // Allow print for the primary program output
    #[allow(clippy::print_stdout)]
    fn emit_count(count: u64) {
        println!("{count}");
    }

    // Allow print for the adjacency dump requested by --show-graph
    #[allow(clippy::print_stdout)]
    fn emit_graph(graph: &TriangleGraph) {
        println!("{graph}");
    }

    // Allow print for diagnostics kept off stdout
    #[allow(clippy::print_stderr)]
    fn emit_statistics(statistics: &SearchStatistics) {
        eprintln!("{statistics}");
    }
}
