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

//! # Step Limit Monitor
//!
//! Terminates a search after a fixed number of steps. Useful for tests and
//! for callers that want a hard stop independent of the engines' own
//! budgets.

use crate::monitor::search_monitor::{SearchCommand, SearchMonitor};
use crate::stats::SearchStatistics;

/// A monitor that terminates once the step counter reaches a limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct StepLimitMonitor {
    limit: u64,
}

impl StepLimitMonitor {
    /// Creates a monitor that terminates after `limit` steps.
    #[inline]
    pub const fn new(limit: u64) -> Self {
        Self { limit }
    }

    /// Returns the step limit.
    #[inline]
    pub const fn limit(&self) -> u64 {
        self.limit
    }
}

impl SearchMonitor for StepLimitMonitor {
    fn name(&self) -> &str {
        "StepLimitMonitor"
    }

    fn search_command(&mut self, statistics: &SearchStatistics) -> SearchCommand {
        if statistics.steps() >= self.limit {
            SearchCommand::Terminate(format!("step limit of {} reached", self.limit))
        } else {
            SearchCommand::Continue
        }
    }
}
