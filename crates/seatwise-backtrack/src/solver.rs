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

//! # Exact Backtracking Engine
//!
//! A complete depth-first search over students ordered by descending class
//! size. Each depth holds one student's shuffled candidate list; exhausting
//! a list retracts the previous student's placement and tries its next
//! candidate. The search either seats everyone, proves no arrangement
//! exists, or runs out of its node budget.
//!
//! # Highlights
//!
//! - Iterative with an explicit [`SearchStack`], so memory is bounded by
//!   roster size and the budget check sits in one loop head.
//! - Shuffled candidate lists make different seeds explore different
//!   arrangements of the same instance.
//! - Candidate lists are snapshots; every candidate is re-validated against
//!   the live grid before it is committed.

use crate::candidates::shuffled_valid_positions;
use crate::stack::{Frame, SearchStack};
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use seatwise_model::arrangement::Arrangement;
use seatwise_model::grid::Grid;
use seatwise_model::layout::RoomLayout;
use seatwise_model::roster::Roster;
use seatwise_search::constraint::SeparationRules;
use seatwise_search::monitor::search_monitor::{SearchCommand, SearchMonitor};
use seatwise_search::result::{SolveOutcome, TerminationReason};
use seatwise_search::stats::SearchStatistics;
use std::time::Instant;

/// Default maximum number of search steps before the engine gives up.
pub const DEFAULT_NODE_BUDGET: u64 = 1_000_000;

/// The exact backtracking engine.
#[derive(Debug, Clone)]
pub struct BacktrackSolver<R> {
    rng: R,
    node_budget: u64,
    stack: SearchStack,
}

impl BacktrackSolver<ChaCha8Rng> {
    /// Creates a solver with a deterministic generator derived from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> BacktrackSolver<R> {
    /// Creates a solver using the given random generator and the default
    /// node budget.
    pub fn new(rng: R) -> Self {
        Self {
            rng,
            node_budget: DEFAULT_NODE_BUDGET,
            stack: SearchStack::new(),
        }
    }

    /// Sets the node budget.
    pub fn with_node_budget(mut self, node_budget: u64) -> Self {
        self.node_budget = node_budget;
        self
    }

    /// Returns the node budget.
    #[inline]
    pub fn node_budget(&self) -> u64 {
        self.node_budget
    }

    /// Runs the search.
    ///
    /// Returns a solved outcome when every student is seated,
    /// `SearchExhausted` when the full space was explored without success,
    /// `BudgetExhausted` when the node budget ran out first, and `Aborted`
    /// when the monitor terminated the search.
    pub fn solve(
        &mut self,
        roster: &Roster,
        layout: &RoomLayout,
        rules: &SeparationRules,
        monitor: &mut dyn SearchMonitor,
    ) -> SolveOutcome {
        let started = Instant::now();
        let mut statistics = SearchStatistics::new();
        monitor.on_enter_search();

        let mut grid = Grid::empty(layout);
        let students = roster.students_by_class_size();

        if students.is_empty() {
            let arrangement = Arrangement::from_grid(&grid, roster, layout);
            statistics.set_solve_duration(started.elapsed());
            monitor.on_solution_found(&statistics);
            monitor.on_exit_search(&statistics);
            return SolveOutcome::solved(arrangement, statistics);
        }

        let Self {
            rng,
            node_budget,
            stack,
        } = self;
        stack.reset();
        stack.push(Frame::new(shuffled_valid_positions(
            &grid,
            rules,
            students[0].class(),
            rng,
        )));

        let reason = loop {
            statistics.on_step();
            monitor.on_step(&statistics);
            if let SearchCommand::Terminate(message) = monitor.search_command(&statistics) {
                break TerminationReason::Aborted(message);
            }
            if statistics.steps() > *node_budget {
                tracing::debug!(
                    budget = *node_budget,
                    depth = stack.depth(),
                    "node budget exhausted"
                );
                break TerminationReason::BudgetExhausted;
            }

            let depth = stack.depth();
            let student = students[depth - 1];
            let frame = match stack.last_mut() {
                Some(frame) => frame,
                None => break TerminationReason::SearchExhausted,
            };

            // Re-entering a frame retracts the placement it held.
            if let Some(placed) = frame.take_placed() {
                grid.clear_slot(placed);
                statistics.on_backtrack();
            }

            match frame.next_candidate() {
                Some(candidate) => {
                    // The list is a snapshot; later placements may have
                    // invalidated this seat.
                    if !grid.is_empty_slot(candidate)
                        || !rules.is_valid_placement(&grid, candidate, student.class())
                    {
                        continue;
                    }
                    grid.place(candidate, student);
                    frame.set_placed(candidate);
                    statistics.on_placement();

                    if depth == students.len() {
                        break TerminationReason::Completed;
                    }
                    stack.push(Frame::new(shuffled_valid_positions(
                        &grid,
                        rules,
                        students[depth].class(),
                        rng,
                    )));
                }
                None => {
                    stack.pop();
                    if stack.is_empty() {
                        break TerminationReason::SearchExhausted;
                    }
                }
            }
        };

        statistics.set_solve_duration(started.elapsed());
        let outcome = match reason {
            TerminationReason::Completed => {
                let arrangement = Arrangement::from_grid(&grid, roster, layout);
                monitor.on_solution_found(&statistics);
                SolveOutcome::solved(arrangement, statistics)
            }
            reason => SolveOutcome::infeasible(reason, statistics),
        };
        monitor.on_exit_search(outcome.statistics());
        outcome
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use seatwise_model::roster::ClassRange;
    use seatwise_search::monitor::no_op::NoOperationMonitor;
    use seatwise_search::monitor::step_limit::StepLimitMonitor;

    fn ranges(specs: &[(&str, u32)]) -> Vec<ClassRange> {
        specs
            .iter()
            .map(|&(label, n)| ClassRange::new(label, 1, n).expect("range must be valid"))
            .collect()
    }

    fn assert_arrangement_is_valid(
        arrangement: &Arrangement,
        gap_threshold: usize,
        expected_seated: usize,
    ) {
        let mut seated = 0;
        for group in arrangement.groups() {
            let benches = group.benches();
            for (bench_index, bench) in benches.iter().enumerate() {
                for (seat_index, seat) in bench.iter().enumerate() {
                    let Some(student) = seat else { continue };
                    seated += 1;

                    // Horizontal rule: no classmate on the same bench.
                    for other in &bench[seat_index + 1..] {
                        if let Some(other) = other {
                            assert_ne!(
                                student.label, other.label,
                                "two '{}' students share a bench",
                                student.label
                            );
                        }
                    }

                    // Vertical rule: no classmate within the gap in this
                    // seat column.
                    for other_bench in bench_index + 1..benches.len() {
                        if other_bench - bench_index >= gap_threshold {
                            break;
                        }
                        if let Some(other) = &benches[other_bench][seat_index] {
                            assert_ne!(
                                student.label, other.label,
                                "two '{}' students sit {} benches apart in one column",
                                student.label,
                                other_bench - bench_index
                            );
                        }
                    }
                }
            }
        }
        assert_eq!(seated, expected_seated, "not every student was seated");
    }

    #[test]
    fn test_solves_two_classes_on_two_benches() {
        let roster = Roster::from_ranges(&ranges(&[("1", 2), ("2", 2)]));
        let layout = RoomLayout::new(&[2], 2).expect("layout must be valid");
        let rules = SeparationRules::default();

        let mut solver = BacktrackSolver::seeded(7);
        let outcome = solver.solve(&roster, &layout, &rules, &mut NoOperationMonitor::new());

        assert!(outcome.is_solved(), "instance is feasible");
        assert_eq!(outcome.reason(), &TerminationReason::Completed);
        let arrangement = outcome.into_result().expect("outcome is solved");
        assert_arrangement_is_valid(&arrangement, rules.gap_threshold(), 4);
    }

    #[test]
    fn test_proves_single_class_overload_infeasible() {
        // Six classmates, six seats, but the horizontal rule caps each
        // bench at one of them.
        let roster = Roster::from_ranges(&ranges(&[("9", 6)]));
        let layout = RoomLayout::new(&[2], 3).expect("layout must be valid");
        let rules = SeparationRules::default();

        let mut solver = BacktrackSolver::seeded(3);
        let outcome = solver.solve(&roster, &layout, &rules, &mut NoOperationMonitor::new());

        assert!(!outcome.is_solved());
        assert_eq!(outcome.reason(), &TerminationReason::SearchExhausted);
    }

    #[test]
    fn test_node_budget_is_respected() {
        let roster = Roster::from_ranges(&ranges(&[("9", 6)]));
        let layout = RoomLayout::new(&[2], 3).expect("layout must be valid");
        let rules = SeparationRules::default();

        let mut solver = BacktrackSolver::seeded(3).with_node_budget(2);
        let outcome = solver.solve(&roster, &layout, &rules, &mut NoOperationMonitor::new());

        assert_eq!(outcome.reason(), &TerminationReason::BudgetExhausted);
        assert!(outcome.statistics().steps() <= 3);
    }

    #[test]
    fn test_monitor_can_abort_the_search() {
        let roster = Roster::from_ranges(&ranges(&[("9", 6)]));
        let layout = RoomLayout::new(&[2], 3).expect("layout must be valid");
        let rules = SeparationRules::default();

        let mut monitor = StepLimitMonitor::new(1);
        let mut solver = BacktrackSolver::seeded(3);
        let outcome = solver.solve(&roster, &layout, &rules, &mut monitor);

        assert_eq!(
            outcome.reason(),
            &TerminationReason::Aborted("step limit of 1 reached".to_string())
        );
    }

    #[test]
    fn test_empty_roster_solves_immediately() {
        let roster = Roster::from_ranges(&[]);
        let layout = RoomLayout::new(&[1], 1).expect("layout must be valid");
        let rules = SeparationRules::default();

        let mut solver = BacktrackSolver::seeded(0);
        let outcome = solver.solve(&roster, &layout, &rules, &mut NoOperationMonitor::new());

        assert!(outcome.is_solved());
        assert_eq!(outcome.statistics().steps(), 0);
    }

    #[test]
    fn test_same_seed_yields_same_arrangement() {
        let roster = Roster::from_ranges(&ranges(&[("1", 3), ("2", 3), ("3", 2)]));
        let layout = RoomLayout::new(&[4, 4], 2).expect("layout must be valid");
        let rules = SeparationRules::default();

        let first = BacktrackSolver::seeded(99)
            .solve(&roster, &layout, &rules, &mut NoOperationMonitor::new())
            .into_result()
            .expect("instance is feasible");
        let second = BacktrackSolver::seeded(99)
            .solve(&roster, &layout, &rules, &mut NoOperationMonitor::new())
            .into_result()
            .expect("instance is feasible");

        assert_eq!(first, second);
    }

    #[test]
    fn test_larger_mixed_instance_is_fully_seated() {
        let roster = Roster::from_ranges(&ranges(&[("1", 4), ("2", 4), ("3", 4)]));
        let layout = RoomLayout::new(&[6, 6], 2).expect("layout must be valid");
        let rules = SeparationRules::default();

        let mut solver = BacktrackSolver::seeded(5);
        let outcome = solver.solve(&roster, &layout, &rules, &mut NoOperationMonitor::new());

        assert!(outcome.is_solved());
        let arrangement = outcome.into_result().expect("outcome is solved");
        assert_arrangement_is_valid(&arrangement, rules.gap_threshold(), 12);
    }

    #[test]
    fn test_statistics_count_backtracks_on_infeasible_instances() {
        let roster = Roster::from_ranges(&ranges(&[("9", 3)]));
        // Two benches cap the class at two placements.
        let layout = RoomLayout::new(&[2], 2).expect("layout must be valid");
        let rules = SeparationRules::default();

        let mut solver = BacktrackSolver::seeded(1);
        let outcome = solver.solve(&roster, &layout, &rules, &mut NoOperationMonitor::new());

        assert!(!outcome.is_solved());
        assert!(outcome.statistics().backtracks() > 0);
        assert!(outcome.statistics().placements() > 0);
    }
}
