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

//! # Separation Rules
//!
//! The pure validity predicate both engines share. A placement is valid when
//! two rules hold against the live grid:
//!
//! - **Horizontal**: no classmate on the same bench.
//! - **Vertical**: no classmate in the same seat column of the same group
//!   closer than the gap threshold (bench distance).
//!
//! Seat columns only exist within a group, so benches in different groups
//! never conflict vertically regardless of distance. The predicate reads
//! the grid as it is at call time; engines re-check a cached candidate
//! before committing it.

use seatwise_model::grid::{Grid, Position};
use seatwise_model::index::{BenchIndex, ClassId, SeatIndex};

/// Minimum bench distance between classmates sharing a seat column.
pub const DEFAULT_GAP_THRESHOLD: usize = 3;

/// The separation rules applied to every placement.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeparationRules {
    gap_threshold: usize,
}

impl SeparationRules {
    /// Creates rules with a custom vertical gap threshold.
    #[inline]
    pub const fn with_gap_threshold(gap_threshold: usize) -> Self {
        Self { gap_threshold }
    }

    /// Returns the vertical gap threshold.
    #[inline]
    pub const fn gap_threshold(&self) -> usize {
        self.gap_threshold
    }

    /// Checks whether seating a student of `class` at `position` violates
    /// neither rule. The target seat itself is ignored, so the predicate can
    /// also vet moving an already seated student.
    pub fn is_valid_placement(&self, grid: &Grid, position: Position, class: ClassId) -> bool {
        // Horizontal rule: scan the target bench.
        for (seat, slot) in grid.bench_slots(position.group, position.bench).iter().enumerate() {
            if SeatIndex::new(seat) == position.seat {
                continue;
            }
            if let Some(occupant) = slot {
                if occupant.class() == class {
                    return false;
                }
            }
        }

        // Vertical rule: scan the seat column within the group.
        for bench in 0..grid.bench_count(position.group) {
            let bench = BenchIndex::new(bench);
            if bench == position.bench {
                continue;
            }
            let neighbour = Position::new(position.group, bench, position.seat);
            if let Some(occupant) = grid.slot(neighbour) {
                if occupant.class() == class
                    && position.bench.get().abs_diff(bench.get()) < self.gap_threshold
                {
                    return false;
                }
            }
        }

        true
    }
}

impl Default for SeparationRules {
    fn default() -> Self {
        Self {
            gap_threshold: DEFAULT_GAP_THRESHOLD,
        }
    }
}

impl std::fmt::Display for SeparationRules {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "SeparationRules(gap: {})", self.gap_threshold)
    }
}
