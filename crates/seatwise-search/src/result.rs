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

//! # Solve Outcomes
//!
//! The contract every engine returns: a result (an arrangement, or not), a
//! termination reason saying why the search stopped, and the statistics it
//! collected on the way. The reason distinguishes a proven dead end from an
//! exhausted budget from a failed repair, even though all three surface to
//! callers as an infeasibility error.

use crate::stats::SearchStatistics;
use seatwise_model::arrangement::Arrangement;
use seatwise_model::err::PlanError;

/// The result of a solve: an arrangement, or none.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SolveResult {
    /// A complete, valid arrangement was found.
    Solved(Arrangement),
    /// No arrangement was produced.
    Infeasible,
}

impl SolveResult {
    /// Returns `true` if an arrangement was found.
    #[inline]
    pub fn is_solved(&self) -> bool {
        matches!(self, SolveResult::Solved(_))
    }
}

/// Why a search stopped.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TerminationReason {
    /// Every student is seated.
    Completed,
    /// The full search space was explored without a solution.
    SearchExhausted,
    /// The node budget ran out before the search space did.
    BudgetExhausted,
    /// The greedy phases could not seat everyone and repair failed.
    RepairFailed,
    /// A monitor terminated the search.
    Aborted(String),
}

impl std::fmt::Display for TerminationReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TerminationReason::Completed => write!(f, "completed"),
            TerminationReason::SearchExhausted => write!(f, "search exhausted"),
            TerminationReason::BudgetExhausted => write!(f, "budget exhausted"),
            TerminationReason::RepairFailed => write!(f, "repair failed"),
            TerminationReason::Aborted(message) => write!(f, "aborted: {}", message),
        }
    }
}

/// Everything an engine hands back from one solve.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SolveOutcome {
    result: SolveResult,
    reason: TerminationReason,
    statistics: SearchStatistics,
}

impl SolveOutcome {
    /// Creates a solved outcome.
    #[inline]
    pub fn solved(arrangement: Arrangement, statistics: SearchStatistics) -> Self {
        Self {
            result: SolveResult::Solved(arrangement),
            reason: TerminationReason::Completed,
            statistics,
        }
    }

    /// Creates an infeasible outcome with the given reason.
    #[inline]
    pub fn infeasible(reason: TerminationReason, statistics: SearchStatistics) -> Self {
        debug_assert!(
            !matches!(reason, TerminationReason::Completed),
            "called `SolveOutcome::infeasible` with reason `Completed`"
        );
        Self {
            result: SolveResult::Infeasible,
            reason,
            statistics,
        }
    }

    /// Returns the result.
    #[inline]
    pub fn result(&self) -> &SolveResult {
        &self.result
    }

    /// Returns the termination reason.
    #[inline]
    pub fn reason(&self) -> &TerminationReason {
        &self.reason
    }

    /// Returns the collected statistics.
    #[inline]
    pub fn statistics(&self) -> &SearchStatistics {
        &self.statistics
    }

    /// Returns `true` if an arrangement was found.
    #[inline]
    pub fn is_solved(&self) -> bool {
        self.result.is_solved()
    }

    /// Converts the outcome into a plain result, mapping every unsolved
    /// reason to a `PlanError::Infeasible` with a caller-facing message.
    pub fn into_result(self) -> Result<Arrangement, PlanError> {
        match self.result {
            SolveResult::Solved(arrangement) => Ok(arrangement),
            SolveResult::Infeasible => {
                let message = match self.reason {
                    TerminationReason::Completed | TerminationReason::SearchExhausted => {
                        "no valid arrangement exists for this roster and layout".to_string()
                    }
                    TerminationReason::BudgetExhausted => {
                        "search budget exhausted before a valid arrangement was found".to_string()
                    }
                    TerminationReason::RepairFailed => {
                        "could not seat all students; add benches or try the exact strategy"
                            .to_string()
                    }
                    TerminationReason::Aborted(message) => {
                        format!("search aborted: {}", message)
                    }
                };
                Err(PlanError::Infeasible { message })
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatwise_model::arrangement::Arrangement;
    use seatwise_model::grid::Grid;
    use seatwise_model::layout::RoomLayout;
    use seatwise_model::roster::Roster;

    fn empty_arrangement() -> Arrangement {
        let layout = RoomLayout::new(&[1], 1).expect("layout must be valid");
        Arrangement::from_grid(&Grid::empty(&layout), &Roster::from_ranges(&[]), &layout)
    }

    #[test]
    fn test_solved_outcome() {
        let outcome = SolveOutcome::solved(empty_arrangement(), SearchStatistics::new());
        assert!(outcome.is_solved());
        assert_eq!(outcome.reason(), &TerminationReason::Completed);
        assert!(outcome.into_result().is_ok());
    }

    #[test]
    fn test_exhausted_search_maps_to_infeasible() {
        let outcome = SolveOutcome::infeasible(
            TerminationReason::SearchExhausted,
            SearchStatistics::new(),
        );
        assert!(!outcome.is_solved());

        let error = outcome.into_result().expect_err("outcome is infeasible");
        assert!(error.is_infeasible());
        assert!(error.to_string().contains("no valid arrangement"));
    }

    #[test]
    fn test_budget_exhaustion_keeps_distinct_message() {
        let outcome = SolveOutcome::infeasible(
            TerminationReason::BudgetExhausted,
            SearchStatistics::new(),
        );
        let error = outcome.into_result().expect_err("outcome is infeasible");
        assert!(error.to_string().contains("budget"));
    }

    #[test]
    fn test_repair_failure_suggests_alternatives() {
        let outcome =
            SolveOutcome::infeasible(TerminationReason::RepairFailed, SearchStatistics::new());
        let error = outcome.into_result().expect_err("outcome is infeasible");
        assert!(error.to_string().contains("exact strategy"));
    }

    #[test]
    fn test_abort_carries_monitor_message() {
        let outcome = SolveOutcome::infeasible(
            TerminationReason::Aborted("step limit reached".to_string()),
            SearchStatistics::new(),
        );
        let error = outcome.into_result().expect_err("outcome is infeasible");
        assert!(error.to_string().contains("step limit reached"));
    }

    #[test]
    fn test_termination_reason_display() {
        assert_eq!(TerminationReason::Completed.to_string(), "completed");
        assert_eq!(
            TerminationReason::Aborted("why".to_string()).to_string(),
            "aborted: why"
        );
    }
}
