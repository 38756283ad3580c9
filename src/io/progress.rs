//! Progress display for long-running searches

use crate::io::configuration::PROGRESS_UPDATE_INTERVAL;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::LazyLock;
use std::time::Duration;

static SPINNER_STYLE: LazyLock<ProgressStyle> = LazyLock::new(|| {
    ProgressStyle::with_template("{spinner:.cyan} [{elapsed_precise}] {msg}")
        .unwrap_or_else(|_| ProgressStyle::default_spinner())
});

/// Spinner reporting node throughput while the search runs
///
/// The search calls in with its running node count; the display refreshes
/// once per update interval to keep the overhead negligible against the
/// per-node work.
pub struct SearchProgress {
    bar: ProgressBar,
}

impl Default for SearchProgress {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchProgress {
    /// Create and start the spinner
    pub fn new() -> Self {
        let bar = ProgressBar::new_spinner();
        bar.set_style(SPINNER_STYLE.clone());
        bar.enable_steady_tick(Duration::from_millis(100));
        Self { bar }
    }

    /// Refresh the display once per update interval
    pub fn observe_node(&self, nodes_visited: u64) {
        if nodes_visited % PROGRESS_UPDATE_INTERVAL == 0 {
            self.bar.set_message(format!("{nodes_visited} search nodes"));
        }
    }

    /// Clear the spinner from the terminal
    pub fn finish(&self) {
        self.bar.finish_and_clear();
    }
}
