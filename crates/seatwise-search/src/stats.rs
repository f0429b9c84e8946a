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

//! # Search Statistics
//!
//! Counters the engines update as they run and hand back with the outcome.
//! Monitors read them live to decide whether a search may continue.

use std::time::Duration;

/// Statistics collected during one solve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SearchStatistics {
    steps: u64,
    placements: u64,
    backtracks: u64,
    repairs_attempted: u64,
    repairs_committed: u64,
    solve_duration: Duration,
}

impl SearchStatistics {
    /// Creates zeroed statistics.
    #[inline]
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of search steps taken.
    #[inline]
    pub const fn steps(&self) -> u64 {
        self.steps
    }

    /// Returns the number of students placed (including later retractions).
    #[inline]
    pub const fn placements(&self) -> u64 {
        self.placements
    }

    /// Returns the number of backtracks.
    #[inline]
    pub const fn backtracks(&self) -> u64 {
        self.backtracks
    }

    /// Returns the number of repair attempts.
    #[inline]
    pub const fn repairs_attempted(&self) -> u64 {
        self.repairs_attempted
    }

    /// Returns the number of committed repairs.
    #[inline]
    pub const fn repairs_committed(&self) -> u64 {
        self.repairs_committed
    }

    /// Returns the wall-clock time of the solve.
    #[inline]
    pub const fn solve_duration(&self) -> Duration {
        self.solve_duration
    }

    /// Records a search step.
    #[inline]
    pub fn on_step(&mut self) {
        self.steps += 1;
    }

    /// Records a placement.
    #[inline]
    pub fn on_placement(&mut self) {
        self.placements += 1;
    }

    /// Records a backtrack.
    #[inline]
    pub fn on_backtrack(&mut self) {
        self.backtracks += 1;
    }

    /// Records an attempted repair.
    #[inline]
    pub fn on_repair_attempted(&mut self) {
        self.repairs_attempted += 1;
    }

    /// Records a committed repair.
    #[inline]
    pub fn on_repair_committed(&mut self) {
        self.repairs_committed += 1;
    }

    /// Sets the total solve time. Called once at the end of a solve.
    #[inline]
    pub fn set_solve_duration(&mut self, duration: Duration) {
        self.solve_duration = duration;
    }
}

impl std::fmt::Display for SearchStatistics {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "SearchStatistics(steps: {}, placements: {}, backtracks: {}, repairs: {}/{}, time: {:?})",
            self.steps,
            self.placements,
            self.backtracks,
            self.repairs_committed,
            self.repairs_attempted,
            self.solve_duration
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_statistics_are_zeroed() {
        let stats = SearchStatistics::new();
        assert_eq!(stats.steps(), 0);
        assert_eq!(stats.placements(), 0);
        assert_eq!(stats.backtracks(), 0);
        assert_eq!(stats.repairs_attempted(), 0);
        assert_eq!(stats.repairs_committed(), 0);
        assert_eq!(stats.solve_duration(), Duration::ZERO);
    }

    #[test]
    fn test_counters_accumulate() {
        let mut stats = SearchStatistics::new();
        stats.on_step();
        stats.on_step();
        stats.on_placement();
        stats.on_backtrack();
        stats.on_repair_attempted();
        stats.on_repair_committed();

        assert_eq!(stats.steps(), 2);
        assert_eq!(stats.placements(), 1);
        assert_eq!(stats.backtracks(), 1);
        assert_eq!(stats.repairs_attempted(), 1);
        assert_eq!(stats.repairs_committed(), 1);
    }

    #[test]
    fn test_display_mentions_counters() {
        let mut stats = SearchStatistics::new();
        stats.on_step();
        stats.set_solve_duration(Duration::from_millis(5));
        let rendered = stats.to_string();
        assert!(rendered.contains("steps: 1"));
    }
}
