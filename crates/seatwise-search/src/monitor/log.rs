// Copyright (c) 2025 Felix Kahle.
//
// Permission is hereby granted, free of charge, to any person obtaining
// a copy of this software and associated documentation files (the
// "Software"), to deal in the Software without restriction, including
// without limitation the rights to use, copy, modify, merge, publish,
// distribute, sublicense, and/or sell copies of the Software, and to
// permit persons to whom the Software is furnished to do so, subject to
// the following conditions:
//
// The above copyright notice and this permission notice shall be
// included in all copies or substantial portions of the Software.
//
// THE SOFTWARE IS PROVIDED "AS IS", WITHOUT WARRANTY OF ANY KIND,
// EXPRESS OR IMPLIED, INCLUDING BUT NOT LIMITED TO THE WARRANTIES OF
// MERCHANTABILITY, FITNESS FOR A PARTICULAR PURPOSE AND
// NONINFRINGEMENT. IN NO EVENT SHALL THE AUTHORS OR COPYRIGHT HOLDERS BE
// LIABLE FOR ANY CLAIM, DAMAGES OR OTHER LIABILITY, WHETHER IN AN ACTION
// OF CONTRACT, TORT OR OTHERWISE, ARISING FROM, OUT OF OR IN CONNECTION
// WITH THE SOFTWARE OR THE USE OR OTHER DEALINGS IN THE SOFTWARE.

//! # Log Monitor
//!
//! Emits progress through `tracing`: a span event on entry and exit, and a
//! periodic event every `interval` steps so long searches stay observable
//! without drowning the subscriber.

use crate::monitor::search_monitor::SearchMonitor;
use crate::stats::SearchStatistics;

/// Default number of steps between periodic progress events.
pub const DEFAULT_LOG_INTERVAL: u64 = 10_000;

/// A monitor that logs search progress through `tracing`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LogMonitor {
    interval: u64,
}

impl LogMonitor {
    /// Creates a monitor with the default progress interval.
    #[inline]
    pub const fn new() -> Self {
        Self {
            interval: DEFAULT_LOG_INTERVAL,
        }
    }

    /// Creates a monitor that logs every `interval` steps.
    ///
    /// # Panics
    ///
    /// Panics if `interval` is zero.
    #[inline]
    pub fn with_interval(interval: u64) -> Self {
        assert!(
            interval > 0,
            "called `LogMonitor::with_interval` with an interval of zero"
        );
        Self { interval }
    }
}

impl Default for LogMonitor {
    fn default() -> Self {
        Self::new()
    }
}

impl SearchMonitor for LogMonitor {
    fn name(&self) -> &str {
        "LogMonitor"
    }

    fn on_enter_search(&mut self) {
        tracing::debug!("search started");
    }

    fn on_exit_search(&mut self, statistics: &SearchStatistics) {
        tracing::debug!(
            steps = statistics.steps(),
            placements = statistics.placements(),
            backtracks = statistics.backtracks(),
            "search finished"
        );
    }

    fn on_step(&mut self, statistics: &SearchStatistics) {
        if statistics.steps() % self.interval == 0 {
            tracing::debug!(
                steps = statistics.steps(),
                placements = statistics.placements(),
                backtracks = statistics.backtracks(),
                "search progress"
            );
        }
    }

    fn on_solution_found(&mut self, statistics: &SearchStatistics) {
        tracing::info!(steps = statistics.steps(), "arrangement found");
    }
}
