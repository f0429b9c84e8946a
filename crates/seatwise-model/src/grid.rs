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

//! # Seating Grid
//!
//! The mutable search state: one `Option<Student>` slot per seat, stored as
//! a single flat vector with per-group offsets. The flat layout gives the
//! engines O(1) slot access, a natural scan order (group, then bench, then
//! seat), and a cheap flat-index form for the heuristic's cyclic cursor.
//!
//! The grid knows nothing about constraints; it only stores occupancy.
//! Validity is the constraint module's concern.

use crate::index::{BenchIndex, GroupIndex, SeatIndex};
use crate::layout::RoomLayout;
use crate::roster::Student;

/// A single seat location inside a room.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Position {
    /// The bench group.
    pub group: GroupIndex,
    /// The bench within the group (0 = front).
    pub bench: BenchIndex,
    /// The seat on the bench (0 = leftmost).
    pub seat: SeatIndex,
}

impl Position {
    /// Creates a new position.
    #[inline]
    pub const fn new(group: GroupIndex, bench: BenchIndex, seat: SeatIndex) -> Self {
        Self { group, bench, seat }
    }
}

impl std::fmt::Display for Position {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "(g{}, b{}, s{})",
            self.group.get(),
            self.bench.get(),
            self.seat.get()
        )
    }
}

/// The occupancy state of every seat in a room.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Grid {
    /// One slot per seat, in (group, bench, seat) order.
    slots: Vec<Option<Student>>,
    /// `group_offsets[g]` is the flat index of group `g`'s first seat.
    group_offsets: Vec<usize>,
    /// Bench count per group, mirrored from the layout.
    bench_counts: Vec<usize>,
    seats_per_bench: usize,
    occupied: usize,
}

impl Grid {
    /// Creates an empty grid shaped like the given layout.
    pub fn empty(layout: &RoomLayout) -> Self {
        let mut group_offsets = Vec::with_capacity(layout.num_groups());
        let mut bench_counts = Vec::with_capacity(layout.num_groups());
        let mut offset = 0;
        for group in layout.group_indices() {
            group_offsets.push(offset);
            let bench_count = layout.bench_count(group);
            bench_counts.push(bench_count);
            offset += bench_count * layout.seats_per_bench();
        }
        Self {
            slots: vec![None; offset],
            group_offsets,
            bench_counts,
            seats_per_bench: layout.seats_per_bench(),
            occupied: 0,
        }
    }

    /// Returns the total number of seats.
    #[inline]
    pub fn num_slots(&self) -> usize {
        self.slots.len()
    }

    /// Returns the number of occupied seats.
    #[inline]
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    /// Returns the number of groups.
    #[inline]
    pub fn num_groups(&self) -> usize {
        self.group_offsets.len()
    }

    /// Returns the number of benches in a group.
    #[inline]
    pub fn bench_count(&self, group: GroupIndex) -> usize {
        debug_assert!(
            group.get() < self.bench_counts.len(),
            "called `Grid::bench_count` with group index out of bounds: the len is {} but the index is {}",
            self.bench_counts.len(),
            group.get()
        );
        self.bench_counts[group.get()]
    }

    /// Returns the uniform number of seats per bench.
    #[inline]
    pub fn seats_per_bench(&self) -> usize {
        self.seats_per_bench
    }

    /// Returns the flat index of a position.
    #[inline]
    pub fn flat_index(&self, position: Position) -> usize {
        debug_assert!(
            position.group.get() < self.group_offsets.len(),
            "called `Grid::flat_index` with group index out of bounds: the len is {} but the index is {}",
            self.group_offsets.len(),
            position.group.get()
        );
        debug_assert!(
            position.bench.get() < self.bench_counts[position.group.get()],
            "called `Grid::flat_index` with bench index out of bounds: the len is {} but the index is {}",
            self.bench_counts[position.group.get()],
            position.bench.get()
        );
        debug_assert!(
            position.seat.get() < self.seats_per_bench,
            "called `Grid::flat_index` with seat index out of bounds: the len is {} but the index is {}",
            self.seats_per_bench,
            position.seat.get()
        );
        self.group_offsets[position.group.get()]
            + position.bench.get() * self.seats_per_bench
            + position.seat.get()
    }

    /// Returns the position at a flat index.
    ///
    /// # Panics
    ///
    /// Panics if `flat` is out of bounds.
    pub fn position_at(&self, flat: usize) -> Position {
        debug_assert!(
            flat < self.slots.len(),
            "called `Grid::position_at` with flat index out of bounds: the len is {} but the index is {}",
            self.slots.len(),
            flat
        );
        // Groups are few; a linear scan over offsets beats a binary search
        // at realistic room sizes.
        let mut group = self.group_offsets.len() - 1;
        while self.group_offsets[group] > flat {
            group -= 1;
        }
        let within = flat - self.group_offsets[group];
        Position::new(
            GroupIndex::new(group),
            BenchIndex::new(within / self.seats_per_bench),
            SeatIndex::new(within % self.seats_per_bench),
        )
    }

    /// Returns the occupant of a seat, if any.
    #[inline]
    pub fn slot(&self, position: Position) -> Option<Student> {
        self.slots[self.flat_index(position)]
    }

    /// Returns `true` if a seat is empty.
    #[inline]
    pub fn is_empty_slot(&self, position: Position) -> bool {
        self.slot(position).is_none()
    }

    /// Seats a student at an empty position.
    ///
    /// # Panics
    ///
    /// Panics if the seat is already occupied.
    #[inline]
    pub fn place(&mut self, position: Position, student: Student) {
        let flat = self.flat_index(position);
        debug_assert!(
            self.slots[flat].is_none(),
            "called `Grid::place` on an occupied seat at {}",
            position
        );
        self.slots[flat] = Some(student);
        self.occupied += 1;
    }

    /// Empties a seat.
    ///
    /// # Panics
    ///
    /// Panics if the seat is already empty.
    #[inline]
    pub fn clear_slot(&mut self, position: Position) {
        let flat = self.flat_index(position);
        debug_assert!(
            self.slots[flat].is_some(),
            "called `Grid::clear_slot` on an empty seat at {}",
            position
        );
        self.slots[flat] = None;
        self.occupied -= 1;
    }

    /// Overwrites a seat and returns its previous occupant. Used by the undo
    /// log, which must record the overwritten value.
    #[inline]
    pub fn set_slot(&mut self, position: Position, value: Option<Student>) -> Option<Student> {
        let flat = self.flat_index(position);
        let previous = self.slots[flat];
        self.slots[flat] = value;
        match (previous.is_some(), value.is_some()) {
            (false, true) => self.occupied += 1,
            (true, false) => self.occupied -= 1,
            _ => {}
        }
        previous
    }

    /// Iterates over all positions in (group, bench, seat) scan order.
    pub fn positions(&self) -> impl Iterator<Item = Position> + '_ {
        (0..self.slots.len()).map(move |flat| self.position_at(flat))
    }

    /// Returns the occupants of one bench, in seat order.
    pub fn bench_slots(&self, group: GroupIndex, bench: BenchIndex) -> &[Option<Student>] {
        let start = self.group_offsets[group.get()] + bench.get() * self.seats_per_bench;
        &self.slots[start..start + self.seats_per_bench]
    }
}
