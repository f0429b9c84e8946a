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

//! # Seating Solver Facade
//!
//! The entry point callers use: hand over class ranges and a room layout,
//! get back an arrangement or a planning error. The facade builds the
//! roster, runs the capacity precondition, dispatches to the configured
//! engine, and maps the engine's outcome onto `PlanError`.

use crate::strategy::{SolverConfig, Strategy};
use seatwise_backtrack::solver::BacktrackSolver;
use seatwise_model::arrangement::Arrangement;
use seatwise_model::err::PlanError;
use seatwise_model::layout::RoomLayout;
use seatwise_model::roster::{ClassRange, Roster};
use seatwise_repair::solver::GreedyRepairSolver;
use seatwise_search::capacity::CapacityCheck;
use seatwise_search::constraint::SeparationRules;
use seatwise_search::monitor::no_op::NoOperationMonitor;
use seatwise_search::result::SolveOutcome;

/// The top-level seat assignment solver.
#[derive(Debug, Clone, Default)]
pub struct SeatingSolver {
    config: SolverConfig,
}

impl SeatingSolver {
    /// Creates a solver with the default configuration.
    pub fn new() -> Self {
        Self {
            config: SolverConfig::default(),
        }
    }

    /// Creates a solver with the given configuration.
    pub fn with_config(config: SolverConfig) -> Self {
        Self { config }
    }

    /// Returns the configuration.
    #[inline]
    pub fn config(&self) -> &SolverConfig {
        &self.config
    }

    /// Solves an instance and returns the arrangement.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::CapacityExceeded` when the roster outnumbers the
    /// seats and `PlanError::Infeasible` when the engine found no valid
    /// arrangement.
    pub fn solve(
        &self,
        ranges: &[ClassRange],
        layout: &RoomLayout,
    ) -> Result<Arrangement, PlanError> {
        self.solve_outcome(ranges, layout)?.into_result()
    }

    /// Solves an instance and returns the full engine outcome, including
    /// the termination reason and statistics.
    ///
    /// # Errors
    ///
    /// Returns `PlanError::CapacityExceeded` when the roster outnumbers the
    /// seats; this is checked before any engine runs.
    pub fn solve_outcome(
        &self,
        ranges: &[ClassRange],
        layout: &RoomLayout,
    ) -> Result<SolveOutcome, PlanError> {
        let roster = Roster::from_ranges(ranges);
        CapacityCheck::of(&roster, layout).into_result()?;

        let rules = SeparationRules::default();
        tracing::debug!(
            strategy = %self.config.strategy(),
            students = roster.num_students(),
            capacity = layout.total_capacity(),
            "solving instance"
        );

        let outcome = match self.config.strategy() {
            Strategy::Exact => BacktrackSolver::seeded(self.config.seed())
                .with_node_budget(self.config.node_budget())
                .solve(&roster, layout, &rules, &mut NoOperationMonitor::new()),
            Strategy::HeuristicRepair => GreedyRepairSolver::seeded(self.config.seed()).solve(
                &roster,
                layout,
                &rules,
                &mut NoOperationMonitor::new(),
            ),
        };

        tracing::debug!(
            reason = %outcome.reason(),
            stats = %outcome.statistics(),
            "solve finished"
        );
        Ok(outcome)
    }
}
