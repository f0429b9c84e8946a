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

//! # Room Layout
//!
//! Describes the physical room: bench groups (columns of benches), each with
//! a bench count, and a uniform number of seats per bench across the room.
//!
//! Groups are addressed by `GroupIndex` and carry a display name generated
//! from their position: `A`, `B`, ..., `Z`, `AA`, `AB`, ... Removing a group
//! shifts the names of everything after it, so names are always contiguous
//! from `A`.

use crate::err::ModelError;
use crate::index::GroupIndex;

/// Returns the spreadsheet-style name for a group position: `A`..`Z`, then
/// `AA`, `AB`, ...
pub fn group_name(index: GroupIndex) -> String {
    let mut n = index.get();
    let mut name = String::new();
    loop {
        let letter = (b'A' + (n % 26) as u8) as char;
        name.insert(0, letter);
        n /= 26;
        if n == 0 {
            break;
        }
        n -= 1;
    }
    name
}

/// One bench group: a vertical column of benches.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GroupSpec {
    bench_count: usize,
}

impl GroupSpec {
    /// Creates a group with the given number of benches, or `None` for
    /// zero. `RoomLayout` attaches the group index to the error.
    fn new(bench_count: usize) -> Option<Self> {
        if bench_count == 0 {
            return None;
        }
        Some(Self { bench_count })
    }

    /// Returns the number of benches in this group.
    #[inline]
    pub fn bench_count(&self) -> usize {
        self.bench_count
    }
}

/// The room: an ordered list of bench groups and a uniform seat count per
/// bench.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RoomLayout {
    groups: Vec<GroupSpec>,
    seats_per_bench: usize,
}

impl RoomLayout {
    /// Creates a layout from per-group bench counts.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::ZeroSeatsPerBench` if `seats_per_bench` is zero
    /// and `ModelError::ZeroBenchCount` for the first group whose bench
    /// count is zero.
    pub fn new(bench_counts: &[usize], seats_per_bench: usize) -> Result<Self, ModelError> {
        if seats_per_bench == 0 {
            return Err(ModelError::ZeroSeatsPerBench);
        }
        let mut groups = Vec::with_capacity(bench_counts.len());
        for (group_index, &bench_count) in bench_counts.iter().enumerate() {
            match GroupSpec::new(bench_count) {
                Some(group) => groups.push(group),
                None => return Err(ModelError::ZeroBenchCount { group_index }),
            }
        }
        Ok(Self {
            groups,
            seats_per_bench,
        })
    }

    /// Appends a group to the end of the layout. Its name follows from its
    /// position.
    ///
    /// # Errors
    ///
    /// Returns `ModelError::ZeroBenchCount` if `bench_count` is zero.
    pub fn add_group(&mut self, bench_count: usize) -> Result<GroupIndex, ModelError> {
        let group_index = self.groups.len();
        match GroupSpec::new(bench_count) {
            Some(group) => {
                self.groups.push(group);
                Ok(GroupIndex::new(group_index))
            }
            None => Err(ModelError::ZeroBenchCount { group_index }),
        }
    }

    /// Removes a group. Groups after it shift down one position, so their
    /// names re-letter contiguously.
    ///
    /// # Panics
    ///
    /// Panics if `group` is out of bounds.
    pub fn remove_group(&mut self, group: GroupIndex) {
        debug_assert!(
            group.get() < self.groups.len(),
            "called `RoomLayout::remove_group` with group index out of bounds: the len is {} but the index is {}",
            self.groups.len(),
            group.get()
        );
        self.groups.remove(group.get());
    }

    /// Returns the number of groups.
    #[inline]
    pub fn num_groups(&self) -> usize {
        self.groups.len()
    }

    /// Returns the number of benches in a group.
    ///
    /// # Panics
    ///
    /// Panics if `group` is out of bounds.
    #[inline]
    pub fn bench_count(&self, group: GroupIndex) -> usize {
        debug_assert!(
            group.get() < self.groups.len(),
            "called `RoomLayout::bench_count` with group index out of bounds: the len is {} but the index is {}",
            self.groups.len(),
            group.get()
        );
        self.groups[group.get()].bench_count()
    }

    /// Returns the uniform number of seats per bench.
    #[inline]
    pub fn seats_per_bench(&self) -> usize {
        self.seats_per_bench
    }

    /// Returns the display name of a group (`A`, `B`, ..., `AA`, ...).
    #[inline]
    pub fn group_name(&self, group: GroupIndex) -> String {
        group_name(group)
    }

    /// Returns the total number of seats in the room.
    pub fn total_capacity(&self) -> usize {
        self.groups
            .iter()
            .map(|group| group.bench_count() * self.seats_per_bench)
            .sum()
    }

    /// Iterates over all group indices in order.
    #[inline]
    pub fn group_indices(&self) -> impl Iterator<Item = GroupIndex> {
        (0..self.groups.len()).map(GroupIndex::new)
    }
}

impl std::fmt::Display for RoomLayout {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "RoomLayout(")?;
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(
                f,
                "{}: {}x{}",
                group_name(GroupIndex::new(i)),
                group.bench_count(),
                self.seats_per_bench
            )?;
        }
        write!(f, ")")
    }
}
