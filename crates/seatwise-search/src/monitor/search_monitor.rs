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

//! # Search Monitor
//!
//! The observation and control seam of the engines. Engines call into the
//! monitor at well-defined points; the monitor may watch (logging,
//! statistics snapshots) or steer (terminate the search). All hooks default
//! to no-ops so implementors only override what they need.

use crate::stats::SearchStatistics;

/// A command a monitor issues to the running search.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SearchCommand {
    /// Keep searching.
    Continue,
    /// Stop the search, with a human-readable reason.
    Terminate(String),
}

impl SearchCommand {
    /// Returns `true` if the command terminates the search.
    #[inline]
    pub fn is_terminate(&self) -> bool {
        matches!(self, SearchCommand::Terminate(_))
    }
}

impl std::fmt::Display for SearchCommand {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            SearchCommand::Continue => write!(f, "continue"),
            SearchCommand::Terminate(reason) => write!(f, "terminate: {}", reason),
        }
    }
}

/// Observes and optionally steers a running search.
pub trait SearchMonitor {
    /// Returns the name of the monitor.
    fn name(&self) -> &str;

    /// Called once when the search starts.
    fn on_enter_search(&mut self) {}

    /// Called once when the search ends, with the final statistics.
    fn on_exit_search(&mut self, statistics: &SearchStatistics) {
        let _ = statistics;
    }

    /// Called after every search step.
    fn on_step(&mut self, statistics: &SearchStatistics) {
        let _ = statistics;
    }

    /// Called when a complete arrangement is found.
    fn on_solution_found(&mut self, statistics: &SearchStatistics) {
        let _ = statistics;
    }

    /// Asked after every step whether the search may continue.
    fn search_command(&mut self, statistics: &SearchStatistics) -> SearchCommand {
        let _ = statistics;
        SearchCommand::Continue
    }
}

impl std::fmt::Debug for dyn SearchMonitor + '_ {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SearchMonitor({})", self.name())
    }
}
