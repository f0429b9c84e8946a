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

//! # Final Arrangement
//!
//! The immutable result handed back to callers: labels instead of interned
//! identifiers, positions in display order, a table-style `Display`. A
//! `Grid` is working state; an `Arrangement` is a snapshot of it resolved
//! against the roster's labels, safe to hold after the solver is gone.

use crate::grid::{Grid, Position};
use crate::layout::{group_name, RoomLayout};
use crate::roster::Roster;

/// One seated student, resolved to its display label.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeatedStudent {
    /// The class label the student belongs to.
    pub label: String,
    /// The student's admit number.
    pub admit_no: u32,
}

impl std::fmt::Display for SeatedStudent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}-{}", self.label, self.admit_no)
    }
}

/// One group of the arrangement: its display name and its seats, bench by
/// bench.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArrangedGroup {
    name: String,
    /// `benches[b][s]` is the occupant of seat `s` on bench `b`.
    benches: Vec<Vec<Option<SeatedStudent>>>,
}

impl ArrangedGroup {
    /// Returns the display name of the group.
    #[inline]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Returns the benches of the group, front to back.
    #[inline]
    pub fn benches(&self) -> &[Vec<Option<SeatedStudent>>] {
        &self.benches
    }
}

/// A complete seating arrangement.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Arrangement {
    groups: Vec<ArrangedGroup>,
    num_seated: usize,
}

impl Arrangement {
    /// Snapshots a grid into an arrangement, resolving class identifiers to
    /// labels through the roster.
    pub fn from_grid(grid: &Grid, roster: &Roster, layout: &RoomLayout) -> Self {
        let mut groups = Vec::with_capacity(layout.num_groups());
        let mut num_seated = 0;
        for group in layout.group_indices() {
            let mut benches = Vec::with_capacity(layout.bench_count(group));
            for bench in 0..layout.bench_count(group) {
                let slots = grid.bench_slots(group, bench.into());
                let bench_row: Vec<Option<SeatedStudent>> = slots
                    .iter()
                    .map(|slot| {
                        slot.map(|student| {
                            num_seated += 1;
                            SeatedStudent {
                                label: roster.label(student.class()).to_string(),
                                admit_no: student.admit_no(),
                            }
                        })
                    })
                    .collect();
                benches.push(bench_row);
            }
            groups.push(ArrangedGroup {
                name: group_name(group),
                benches,
            });
        }
        Self { groups, num_seated }
    }

    /// Returns the groups of the arrangement, in display order.
    #[inline]
    pub fn groups(&self) -> &[ArrangedGroup] {
        &self.groups
    }

    /// Returns the number of seated students.
    #[inline]
    pub fn num_seated(&self) -> usize {
        self.num_seated
    }

    /// Returns the occupant of a seat, if any.
    ///
    /// # Panics
    ///
    /// Panics if the position is out of bounds.
    pub fn seat(&self, position: Position) -> Option<&SeatedStudent> {
        debug_assert!(
            position.group.get() < self.groups.len(),
            "called `Arrangement::seat` with group index out of bounds: the len is {} but the index is {}",
            self.groups.len(),
            position.group.get()
        );
        self.groups[position.group.get()].benches[position.bench.get()][position.seat.get()]
            .as_ref()
    }
}

impl std::fmt::Display for Arrangement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "Arrangement ({} students seated)", self.num_seated)?;
        for group in &self.groups {
            writeln!(f, "Group {}", group.name)?;
            for (bench_index, bench) in group.benches.iter().enumerate() {
                write!(f, "  Bench {:>2} |", bench_index + 1)?;
                for seat in bench {
                    match seat {
                        Some(student) => write!(f, " {:>8} |", student.to_string())?,
                        None => write!(f, " {:>8} |", "-")?,
                    }
                }
                writeln!(f)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::{BenchIndex, ClassId, GroupIndex, SeatIndex};
    use crate::roster::{ClassRange, Student};

    fn small_instance() -> (Roster, RoomLayout) {
        let roster = Roster::from_ranges(&[
            ClassRange::new("9", 1, 2).expect("range must be valid"),
            ClassRange::new("10", 1, 1).expect("range must be valid"),
        ]);
        let layout = RoomLayout::new(&[2], 2).expect("layout must be valid");
        (roster, layout)
    }

    fn pos(group: usize, bench: usize, seat: usize) -> Position {
        Position::new(
            GroupIndex::new(group),
            BenchIndex::new(bench),
            SeatIndex::new(seat),
        )
    }

    #[test]
    fn test_from_grid_resolves_labels() {
        let (roster, layout) = small_instance();
        let mut grid = Grid::empty(&layout);
        grid.place(pos(0, 0, 0), Student::new(ClassId::new(0), 1));
        grid.place(pos(0, 0, 1), Student::new(ClassId::new(1), 1));
        grid.place(pos(0, 1, 0), Student::new(ClassId::new(0), 2));

        let arrangement = Arrangement::from_grid(&grid, &roster, &layout);
        assert_eq!(arrangement.num_seated(), 3);
        assert_eq!(arrangement.groups().len(), 1);
        assert_eq!(arrangement.groups()[0].name(), "A");

        let front_left = arrangement.seat(pos(0, 0, 0)).expect("seat is occupied");
        assert_eq!(front_left.label, "9");
        assert_eq!(front_left.admit_no, 1);

        let front_right = arrangement.seat(pos(0, 0, 1)).expect("seat is occupied");
        assert_eq!(front_right.label, "10");

        assert!(arrangement.seat(pos(0, 1, 1)).is_none());
    }

    #[test]
    fn test_empty_grid_snapshot() {
        let (roster, layout) = small_instance();
        let grid = Grid::empty(&layout);
        let arrangement = Arrangement::from_grid(&grid, &roster, &layout);

        assert_eq!(arrangement.num_seated(), 0);
        assert_eq!(arrangement.groups()[0].benches().len(), 2);
    }

    #[test]
    fn test_display_contains_group_and_students() {
        let (roster, layout) = small_instance();
        let mut grid = Grid::empty(&layout);
        grid.place(pos(0, 0, 0), Student::new(ClassId::new(0), 1));

        let rendered = Arrangement::from_grid(&grid, &roster, &layout).to_string();
        assert!(rendered.contains("Group A"));
        assert!(rendered.contains("9-1"));
    }
}
