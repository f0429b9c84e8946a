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

//! # Greedy Seeding and Repair Engine
//!
//! A fast, incomplete alternative to the exact backtracker. Three phases:
//!
//! - **Seeding**: a few rounds over the class queues, one student per class
//!   per round, placed from a shared cyclic cursor so classes spread across
//!   the room instead of clumping.
//! - **Bulk fill**: everyone still queued takes the first valid seat in
//!   grid scan order.
//! - **Repair**: for each student still unseated, try to free a target seat
//!   by evicting a nearby classmate, seating the student, and rehoming the
//!   evicted one. Each attempt goes through a [`SlotLog`] and is rolled
//!   back wholesale if any part fails.
//!
//! The engine never backtracks across students; if repair cannot seat
//! someone, it reports `RepairFailed` and the caller may fall back to the
//! exact engine.

use crate::queue::ClassQueues;
use crate::undo::SlotLog;
use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use seatwise_model::arrangement::Arrangement;
use seatwise_model::grid::{Grid, Position};
use seatwise_model::index::BenchIndex;
use seatwise_model::layout::RoomLayout;
use seatwise_model::roster::{Roster, Student};
use seatwise_search::constraint::SeparationRules;
use seatwise_search::monitor::search_monitor::{SearchCommand, SearchMonitor};
use seatwise_search::result::{SolveOutcome, TerminationReason};
use seatwise_search::stats::SearchStatistics;
use std::time::Instant;

/// Number of seeding rounds over the class queues.
pub const SEED_ROUNDS: usize = 3;

/// Maximum bench distance between a repair target and an evicted occupant.
pub const REPAIR_NEIGHBORHOOD: usize = 2;

/// The greedy seeding and repair engine.
#[derive(Debug, Clone)]
pub struct GreedyRepairSolver<R> {
    rng: R,
}

impl GreedyRepairSolver<ChaCha8Rng> {
    /// Creates a solver with a deterministic generator derived from `seed`.
    pub fn seeded(seed: u64) -> Self {
        Self::new(ChaCha8Rng::seed_from_u64(seed))
    }
}

impl<R: Rng> GreedyRepairSolver<R> {
    /// Creates a solver using the given random generator.
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    /// Runs the three phases.
    ///
    /// Returns a solved outcome when every student is seated,
    /// `RepairFailed` when the repair phase could not seat someone, and
    /// `Aborted` when the monitor terminated the search.
    pub fn solve(
        &mut self,
        roster: &Roster,
        layout: &RoomLayout,
        rules: &SeparationRules,
        monitor: &mut dyn SearchMonitor,
    ) -> SolveOutcome {
        let started = Instant::now();
        monitor.on_enter_search();

        let grid = Grid::empty(layout);
        // A layout without groups yields a zero-slot grid; sampling an
        // empty range would panic.
        let cursor = if grid.num_slots() == 0 {
            0
        } else {
            self.rng.gen_range(0..grid.num_slots())
        };
        let mut session = RepairSession {
            grid,
            rules,
            monitor,
            statistics: SearchStatistics::new(),
            log: SlotLog::new(),
            cursor,
        };

        let reason = session.run_phases(roster);
        session.statistics.set_solve_duration(started.elapsed());

        let outcome = match reason {
            TerminationReason::Completed => {
                let arrangement = Arrangement::from_grid(&session.grid, roster, layout);
                session.monitor.on_solution_found(&session.statistics);
                SolveOutcome::solved(arrangement, session.statistics)
            }
            reason => SolveOutcome::infeasible(reason, session.statistics),
        };
        session.monitor.on_exit_search(outcome.statistics());
        outcome
    }
}

/// Working state of one solve.
struct RepairSession<'a> {
    grid: Grid,
    rules: &'a SeparationRules,
    monitor: &'a mut dyn SearchMonitor,
    statistics: SearchStatistics,
    log: SlotLog,
    /// Flat index the seeding phase continues from.
    cursor: usize,
}

impl RepairSession<'_> {
    fn run_phases(&mut self, roster: &Roster) -> TerminationReason {
        if roster.is_empty() {
            return TerminationReason::Completed;
        }
        let mut queues = ClassQueues::from_roster(roster);

        // Phase one: spread each class across the room.
        for _ in 0..SEED_ROUNDS {
            for queue in 0..queues.len() {
                let Some(student) = queues.peek(queue) else {
                    continue;
                };
                if let Some(message) = self.step() {
                    return TerminationReason::Aborted(message);
                }
                if self.place_from_cursor(student) {
                    queues.pop(queue);
                    self.statistics.on_placement();
                }
                // An unplaceable student stays queued for the next round.
            }
        }

        // Phase two: fill in scan order.
        let mut unseated = Vec::new();
        for student in queues.drain_all() {
            if let Some(message) = self.step() {
                return TerminationReason::Aborted(message);
            }
            match self.first_valid_position(student) {
                Some(position) => {
                    self.grid.place(position, student);
                    self.statistics.on_placement();
                }
                None => unseated.push(student),
            }
        }

        // Phase three: make room by moving neighbours.
        for student in unseated {
            if let Some(message) = self.step() {
                return TerminationReason::Aborted(message);
            }
            if !self.try_repair(student) {
                tracing::debug!(
                    seated = self.grid.occupied(),
                    total = roster.num_students(),
                    "repair could not seat a student"
                );
                return TerminationReason::RepairFailed;
            }
        }

        TerminationReason::Completed
    }

    /// Records a step and asks the monitor whether to keep going.
    fn step(&mut self) -> Option<String> {
        self.statistics.on_step();
        self.monitor.on_step(&self.statistics);
        match self.monitor.search_command(&self.statistics) {
            SearchCommand::Continue => None,
            SearchCommand::Terminate(message) => Some(message),
        }
    }

    /// Tries up to one full lap of the cyclic cursor and places the student
    /// at the first empty, valid seat. The cursor keeps its position across
    /// calls, so consecutive placements land apart from each other.
    fn place_from_cursor(&mut self, student: Student) -> bool {
        for _ in 0..self.grid.num_slots() {
            let position = self.grid.position_at(self.cursor);
            self.cursor = (self.cursor + 1) % self.grid.num_slots();
            if self.grid.is_empty_slot(position)
                && self
                    .rules
                    .is_valid_placement(&self.grid, position, student.class())
            {
                self.grid.place(position, student);
                return true;
            }
        }
        false
    }

    /// Returns the first empty, valid seat in grid scan order.
    fn first_valid_position(&self, student: Student) -> Option<Position> {
        self.grid.positions().find(|&position| {
            self.grid.is_empty_slot(position)
                && self
                    .rules
                    .is_valid_placement(&self.grid, position, student.class())
        })
    }

    /// Tries to seat a student that no empty seat currently accepts.
    ///
    /// For every empty target seat, a blocking classmate on a bench within
    /// [`REPAIR_NEIGHBORHOOD`] of the target is evicted, the student is
    /// seated, and the evicted classmate is rehomed. The whole attempt is
    /// committed only if all three parts succeed.
    fn try_repair(&mut self, student: Student) -> bool {
        let targets: Vec<Position> = self
            .grid
            .positions()
            .filter(|&position| self.grid.is_empty_slot(position))
            .collect();

        for target in targets {
            // Earlier repairs may have freed this seat up entirely.
            if self
                .rules
                .is_valid_placement(&self.grid, target, student.class())
            {
                self.grid.place(target, student);
                self.statistics.on_placement();
                return true;
            }

            for evictee_seat in self.nearby_classmates(target, student) {
                let Some(evictee) = self.grid.slot(evictee_seat) else {
                    continue;
                };
                self.statistics.on_repair_attempted();

                self.log.set(&mut self.grid, evictee_seat, None);
                if self
                    .rules
                    .is_valid_placement(&self.grid, target, student.class())
                {
                    self.log.set(&mut self.grid, target, Some(student));
                    if let Some(new_home) = self.first_valid_position(evictee) {
                        self.log.set(&mut self.grid, new_home, Some(evictee));
                        self.log.commit();
                        self.statistics.on_placement();
                        self.statistics.on_repair_committed();
                        return true;
                    }
                }
                self.log.rollback(&mut self.grid);
            }
        }
        false
    }

    /// Seats of classmates near a target seat, candidates for eviction.
    fn nearby_classmates(&self, target: Position, student: Student) -> Vec<Position> {
        let mut classmates = Vec::new();
        let bench_count = self.grid.bench_count(target.group);
        for bench in 0..bench_count {
            if target.bench.get().abs_diff(bench) > REPAIR_NEIGHBORHOOD {
                continue;
            }
            let bench = BenchIndex::new(bench);
            for (seat, slot) in self
                .grid
                .bench_slots(target.group, bench)
                .iter()
                .enumerate()
            {
                let position = Position::new(target.group, bench, seat.into());
                if position == target {
                    continue;
                }
                if let Some(occupant) = slot {
                    if occupant.class() == student.class() {
                        classmates.push(position);
                    }
                }
            }
        }
        classmates
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

                    for other in &bench[seat_index + 1..] {
                        if let Some(other) = other {
                            assert_ne!(
                                student.label, other.label,
                                "two '{}' students share a bench",
                                student.label
                            );
                        }
                    }

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

    fn solve_seeded(
        seed: u64,
        roster: &Roster,
        layout: &RoomLayout,
        rules: &SeparationRules,
    ) -> SolveOutcome {
        GreedyRepairSolver::seeded(seed).solve(roster, layout, rules, &mut NoOperationMonitor::new())
    }

    #[test]
    fn test_seats_two_classes_on_two_benches_for_any_cursor_start() {
        // Four seats, four students; every cursor start must still succeed,
        // some of them only through the repair phase.
        let roster = Roster::from_ranges(&ranges(&[("1", 2), ("2", 2)]));
        let layout = RoomLayout::new(&[2], 2).expect("layout must be valid");
        let rules = SeparationRules::default();

        for seed in 0..16 {
            let outcome = solve_seeded(seed, &roster, &layout, &rules);
            assert!(outcome.is_solved(), "seed {} failed", seed);
            let arrangement = outcome.into_result().expect("outcome is solved");
            assert_arrangement_is_valid(&arrangement, rules.gap_threshold(), 4);
        }
    }

    #[test]
    fn test_reports_repair_failed_on_single_class_overload() {
        let roster = Roster::from_ranges(&ranges(&[("9", 6)]));
        let layout = RoomLayout::new(&[2], 3).expect("layout must be valid");
        let rules = SeparationRules::default();

        let outcome = solve_seeded(0, &roster, &layout, &rules);
        assert!(!outcome.is_solved());
        assert_eq!(outcome.reason(), &TerminationReason::RepairFailed);
    }

    #[test]
    fn test_large_mixed_instance_with_slack() {
        let roster = Roster::from_ranges(&ranges(&[("1", 6), ("2", 6), ("3", 6)]));
        let layout = RoomLayout::new(&[8, 8, 8], 2).expect("layout must be valid");
        let rules = SeparationRules::default();

        let outcome = solve_seeded(42, &roster, &layout, &rules);
        assert!(outcome.is_solved());
        let arrangement = outcome.into_result().expect("outcome is solved");
        assert_arrangement_is_valid(&arrangement, rules.gap_threshold(), 18);
    }

    #[test]
    fn test_same_seed_yields_same_arrangement() {
        let roster = Roster::from_ranges(&ranges(&[("1", 3), ("2", 3)]));
        let layout = RoomLayout::new(&[4, 4], 2).expect("layout must be valid");
        let rules = SeparationRules::default();

        let first = solve_seeded(7, &roster, &layout, &rules)
            .into_result()
            .expect("instance is feasible");
        let second = solve_seeded(7, &roster, &layout, &rules)
            .into_result()
            .expect("instance is feasible");
        assert_eq!(first, second);
    }

    #[test]
    fn test_monitor_can_abort_the_phases() {
        let roster = Roster::from_ranges(&ranges(&[("1", 3), ("2", 3)]));
        let layout = RoomLayout::new(&[4, 4], 2).expect("layout must be valid");
        let rules = SeparationRules::default();

        let mut monitor = StepLimitMonitor::new(1);
        let outcome = GreedyRepairSolver::seeded(7).solve(&roster, &layout, &rules, &mut monitor);

        assert_eq!(
            outcome.reason(),
            &TerminationReason::Aborted("step limit of 1 reached".to_string())
        );
    }

    #[test]
    fn test_zero_group_layout_with_empty_roster_solves() {
        // A room with no groups has no seats at all; an empty roster is
        // still trivially seated and must not panic on the cursor draw.
        let roster = Roster::from_ranges(&[]);
        let layout = RoomLayout::new(&[], 2).expect("a layout may have zero groups");
        let rules = SeparationRules::default();

        let outcome = solve_seeded(0, &roster, &layout, &rules);
        assert!(outcome.is_solved());
        let arrangement = outcome.into_result().expect("outcome is solved");
        assert_eq!(arrangement.num_seated(), 0);
        assert!(arrangement.groups().is_empty());
    }

    #[test]
    fn test_zero_group_layout_with_students_reports_repair_failed() {
        let roster = Roster::from_ranges(&ranges(&[("9", 1)]));
        let layout = RoomLayout::new(&[], 2).expect("a layout may have zero groups");
        let rules = SeparationRules::default();

        let outcome = solve_seeded(0, &roster, &layout, &rules);
        assert!(!outcome.is_solved());
        assert_eq!(outcome.reason(), &TerminationReason::RepairFailed);
    }

    #[test]
    fn test_empty_roster_solves_immediately() {
        let roster = Roster::from_ranges(&[]);
        let layout = RoomLayout::new(&[1], 1).expect("layout must be valid");
        let rules = SeparationRules::default();

        let outcome = solve_seeded(0, &roster, &layout, &rules);
        assert!(outcome.is_solved());
        assert_eq!(outcome.statistics().steps(), 0);
    }

    #[test]
    fn test_repair_statistics_track_commits() {
        // Exhaustively seeded instances where repair ran must never report
        // more commits than attempts.
        let roster = Roster::from_ranges(&ranges(&[("1", 2), ("2", 2)]));
        let layout = RoomLayout::new(&[2], 2).expect("layout must be valid");
        let rules = SeparationRules::default();

        for seed in 0..16 {
            let outcome = solve_seeded(seed, &roster, &layout, &rules);
            let stats = outcome.statistics();
            assert!(stats.repairs_committed() <= stats.repairs_attempted());
        }
    }
}
