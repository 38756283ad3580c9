//! CLI entry point for the hexagon tiling counter

use clap::Parser;
use hexcover::io::cli::{Cli, CountRunner};

fn main() -> hexcover::Result<()> {
    let cli = Cli::parse();
    let runner = CountRunner::new(cli);
    runner.run()
}
